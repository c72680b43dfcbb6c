use super::*;

#[test]
fn disabled_controls_have_no_target() {
    let (label, target, class) = describe(PageItem::Previous { target: 1, disabled: true });
    assert_eq!(label, "‹");
    assert_eq!(target, None);
    assert_eq!(class, "page-item disabled");
}

#[test]
fn active_page_is_not_clickable() {
    assert_eq!(describe(PageItem::Page { number: 3, active: true }), ("3".to_owned(), None, "page-item active"));
    assert_eq!(describe(PageItem::Page { number: 4, active: false }), ("4".to_owned(), Some(4), "page-item"));
}

#[test]
fn strip_for_middle_page() {
    let described: Vec<_> =
        grid::page::page_items(5, 10).into_iter().map(|item| describe(item).0).collect();
    assert_eq!(described, vec!["‹", "1", "…", "4", "5", "6", "…", "10", "›"]);
}
