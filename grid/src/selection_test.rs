use super::*;

fn keys(raw: &[&str]) -> Vec<RowKey> {
    raw.iter().map(|k| (*k).to_owned()).collect()
}

#[test]
fn toggle_adds_then_removes() {
    let mut selection = Selection::default();
    assert!(selection.toggle("a"));
    assert!(selection.toggle("b"));
    assert_eq!(selection.keys(), keys(&["a", "b"]).as_slice());
    assert!(!selection.toggle("a"));
    assert_eq!(selection.keys(), keys(&["b"]).as_slice());
}

#[test]
fn toggle_all_selects_exactly_the_page() {
    let mut selection = Selection::default();
    selection.toggle("stale");
    let page = keys(&["1", "2", "3"]);
    selection.toggle_all(&page);
    assert_eq!(selection.keys(), page.as_slice());
    assert!(selection.all_selected(&page));
}

#[test]
fn toggle_all_clears_when_page_fully_selected() {
    let mut selection = Selection::default();
    let page = keys(&["1", "2"]);
    selection.toggle_all(&page);
    selection.toggle_all(&page);
    assert!(selection.is_empty());
}

#[test]
fn partial_page_selection_is_not_all_selected() {
    let mut selection = Selection::default();
    selection.toggle("1");
    let page = keys(&["1", "2"]);
    assert!(!selection.all_selected(&page));
    selection.toggle_all(&page);
    assert_eq!(selection.len(), 2);
}

#[test]
fn empty_page_is_never_all_selected() {
    assert!(!Selection::default().all_selected(&[]));
}

#[test]
fn clear_reports_change() {
    let mut selection = Selection::default();
    assert!(!selection.clear());
    selection.toggle("x");
    assert!(selection.clear());
}

#[test]
fn retain_visible_prunes_hidden_keys() {
    let mut selection = Selection::default();
    for k in ["1", "2", "3"] {
        selection.toggle(k);
    }
    assert!(selection.retain_visible(&keys(&["2", "3", "4"])));
    assert_eq!(selection.keys(), keys(&["2", "3"]).as_slice());
    assert!(!selection.retain_visible(&keys(&["2", "3"])));
}
