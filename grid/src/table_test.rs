use super::*;
use crate::sort::SortDirection;
use crate::value::CellValue;
use serde_json::{Value, json};

fn ids(view: &TableView<'_, Value>) -> Vec<i64> {
    view.rows.iter().filter_map(|r| r["id"].as_i64()).collect()
}

fn numbered(count: i64) -> Vec<Value> {
    (1..=count).map(|n| json!({ "id": n, "name": format!("Student {n:02}") })).collect()
}

fn options() -> TableOptions {
    TableOptions { searchable: true, selectable: true, ..TableOptions::default() }
}

// =============================================================
// Scenarios
// =============================================================

#[test]
fn sort_by_name_ascending_reorders_rows() {
    let data = vec![json!({ "id": 1, "name": "B" }), json!({ "id": 2, "name": "A" })];
    let columns = vec![Column::new("name")];
    let mut state = TableState::default();
    state.toggle_sort(&columns[0]);
    assert_eq!(ids(&state.view(&data, &columns)), vec![2, 1]);
}

#[test]
fn one_row_pages_step_through_data() {
    let data = numbered(3);
    let columns = vec![Column::new("name")];
    let mut state = TableState::new(TableOptions {
        rows_per_page_options: vec![1, 10],
        default_rows_per_page: 1,
        ..TableOptions::default()
    });

    for page in 1..=3 {
        state.set_page(page);
        let view = state.view(&data, &columns);
        assert_eq!(ids(&view), vec![i64::try_from(page).unwrap_or_default()]);
        assert_eq!(view.has_next(), page != 3);
        let next_disabled = matches!(view.page_items().last(), Some(PageItem::Next { disabled: true, .. }));
        assert_eq!(next_disabled, page == 3);
    }
}

#[test]
fn search_matches_fee_type_case_insensitively() {
    let data = vec![
        json!({ "id": 1, "feeType": "Examination Fee" }),
        json!({ "id": 2, "feeType": "Bus Fee" }),
        json!({ "id": 3, "feeType": "EXAM Re-evaluation" }),
    ];
    let columns = vec![Column::new("feeType")];
    let mut state = TableState::new(options());
    state.set_search("exam");
    assert_eq!(ids(&state.view(&data, &columns)), vec![1, 3]);
}

#[test]
fn double_toggle_restores_ascending_order() {
    let data = numbered(4);
    let columns = vec![Column::new("name")];
    let mut state = TableState::default();
    state.toggle_sort(&columns[0]);
    state.toggle_sort(&columns[0]);
    assert_eq!(state.sort().direction(), SortDirection::Desc);
    state.toggle_sort(&columns[0]);
    assert_eq!(ids(&state.view(&data, &columns)), vec![1, 2, 3, 4]);
}

#[test]
fn select_all_on_full_page_then_clear() {
    let data = numbered(25);
    let columns = vec![Column::new("name")];
    let mut state = TableState::new(options());
    let view = state.view(&data, &columns);
    let page_keys = view.keys.clone();
    assert_eq!(page_keys.len(), 10);

    state.toggle_all(&page_keys);
    let expected: Vec<String> = (1..=10).map(|n| n.to_string()).collect();
    assert_eq!(state.selection().keys(), expected.as_slice());

    state.toggle_all(&page_keys);
    assert!(state.selection().is_empty());
}

// =============================================================
// Pipeline properties
// =============================================================

#[test]
fn search_change_clears_selection_and_resets_page() {
    let data = numbered(25);
    let columns = vec![Column::new("name")];
    let mut state = TableState::new(options());
    state.set_page(2);
    let view = state.view(&data, &columns);
    let keys = view.keys.clone();
    state.toggle_all(&keys);
    assert!(!state.selection().is_empty());

    assert!(state.set_search("student 1"));
    assert!(state.selection().is_empty());
    assert_eq!(state.page(), 1);
}

#[test]
fn selection_stays_within_rendered_keys() {
    let data = numbered(25);
    let columns = vec![Column::new("name")];
    let mut state = TableState::new(options());
    let first = state.view(&data, &columns).keys;
    state.toggle_all(&first);

    state.set_page(2);
    let view = state.view(&data, &columns);
    assert!(state.settle(&view));
    assert!(state.selection().keys().iter().all(|k| view.keys.contains(k)));
    assert!(state.selection().is_empty());
}

#[test]
fn page_size_change_resets_to_first_page() {
    let mut state = TableState::default();
    state.set_page(3);
    assert!(state.set_page_size(25));
    assert_eq!(state.page(), 1);
    assert!(!state.set_page_size(7));
    assert_eq!(state.rows_per_page().current(), 25);
}

#[test]
fn stale_page_is_clamped_to_last_page() {
    let data = numbered(12);
    let columns = vec![Column::new("name")];
    let mut state = TableState::default();
    state.set_page(9);
    let view = state.view(&data, &columns);
    assert_eq!(view.page, 2);
    assert_eq!(ids(&view), vec![11, 12]);
    state.settle(&view);
    assert_eq!(state.page(), 2);
}

#[test]
fn new_data_resets_page_and_selection() {
    let mut state = TableState::new(options());
    state.set_page(4);
    state.toggle_row("7");
    assert!(state.reset_for_new_data());
    assert_eq!(state.page(), 1);
    assert!(state.selection().is_empty());
}

#[test]
fn pages_partition_processed_rows() {
    let data = numbered(37);
    let columns = vec![Column::new("name")];
    let mut state = TableState::default();
    state.set_page_size(10);
    let mut seen = Vec::new();
    for page in 1..=4 {
        state.set_page(page);
        let view = state.view(&data, &columns);
        assert!(view.rows.len() <= 10);
        seen.extend(ids(&view));
    }
    assert_eq!(seen, (1..=37).collect::<Vec<_>>());
}

#[test]
fn input_rows_are_not_mutated() {
    let data = vec![json!({ "id": 2, "name": "b" }), json!({ "id": 1, "name": "a" })];
    let snapshot = data.clone();
    let columns = vec![Column::new("name")];
    let mut state = TableState::new(options());
    state.toggle_sort(&columns[0]);
    state.set_search("a");
    let _ = state.view(&data, &columns);
    assert_eq!(data, snapshot);
}

// =============================================================
// Options
// =============================================================

#[test]
fn unsortable_column_ignores_header_click() {
    let columns: Vec<Column<Value>> = vec![Column::new("actions").sortable(false)];
    let mut state = TableState::default();
    assert!(!state.toggle_sort(&columns[0]));
    assert!(state.sort().field().is_none());
}

#[test]
fn sorting_disabled_keeps_input_order() {
    let data = vec![json!({ "id": 2, "name": "b" }), json!({ "id": 1, "name": "a" })];
    let columns = vec![Column::new("name")];
    let mut state = TableState::new(TableOptions { sortable: false, ..TableOptions::default() });
    assert!(!state.toggle_sort(&columns[0]));
    assert_eq!(ids(&state.view(&data, &columns)), vec![2, 1]);
    assert_eq!(state.indicator("name"), SortIndicator::Neutral);
}

#[test]
fn search_ignored_when_not_searchable() {
    let data = numbered(3);
    let columns = vec![Column::new("name")];
    let mut state = TableState::default();
    state.set_search("zzz");
    assert_eq!(state.view(&data, &columns).rows.len(), 3);
}

#[test]
fn pagination_off_renders_everything() {
    let data = numbered(30);
    let columns = vec![Column::new("name")];
    let state = TableState::new(TableOptions { pagination: false, ..TableOptions::default() });
    let view = state.view(&data, &columns);
    assert_eq!(view.rows.len(), 30);
    assert!(!view.shows_pager());
}

#[test]
fn sort_uses_column_selector() {
    let data = vec![json!({ "id": 1, "amount": "900" }), json!({ "id": 2, "amount": "1000" })];
    let columns = vec![
        Column::new("amount").selector(|r: &Value| CellValue::from(r["amount"].as_str().and_then(|s| s.parse::<i64>().ok()))),
    ];
    let mut state = TableState::default();
    state.toggle_sort(&columns[0]);
    assert_eq!(ids(&state.view(&data, &columns)), vec![1, 2]);
}

#[test]
fn custom_row_key_field() {
    let data = vec![json!({ "receiptNo": "SVIT250115001" })];
    let columns = vec![Column::new("receiptNo")];
    let state = TableState::new(TableOptions { row_key: "receiptNo".to_owned(), ..TableOptions::default() });
    assert_eq!(state.view(&data, &columns).keys, vec!["SVIT250115001".to_owned()]);
}

#[test]
fn empty_data_has_no_summary_or_pager() {
    let data: Vec<Value> = Vec::new();
    let columns = vec![Column::new("name")];
    let view = TableState::default().view(&data, &columns);
    assert!(view.is_empty());
    assert!(view.summary().is_none());
    assert!(!view.shows_pager());
}
