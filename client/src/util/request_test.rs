use super::*;

#[test]
fn newest_ticket_is_current() {
    let generation = RequestGeneration::new();
    let first = generation.next();
    assert!(generation.is_current(first));
    let second = generation.next();
    assert!(!generation.is_current(first));
    assert!(generation.is_current(second));
}

#[test]
fn invalidate_makes_every_ticket_stale() {
    let generation = RequestGeneration::new();
    let ticket = generation.next();
    generation.invalidate();
    assert!(!generation.is_current(ticket));
}

#[test]
fn clones_share_the_counter() {
    let generation = RequestGeneration::new();
    let page_copy = generation.clone();
    let ticket = generation.next();
    page_copy.invalidate();
    assert!(!generation.is_current(ticket));
}
