use super::*;
use serde_json::{Value, json};

fn names(rows: &[&Value]) -> Vec<String> {
    rows.iter().map(|r| r["name"].as_str().unwrap_or_default().to_owned()).collect()
}

fn ids(rows: &[&Value]) -> Vec<i64> {
    rows.iter().filter_map(|r| r["id"].as_i64()).collect()
}

// =============================================================
// SortState toggling
// =============================================================

#[test]
fn toggle_new_field_starts_ascending() {
    let mut state = SortState::default();
    state.toggle("name");
    assert_eq!(state.field(), Some("name"));
    assert_eq!(state.direction(), SortDirection::Asc);
}

#[test]
fn toggle_active_field_flips_direction() {
    let mut state = SortState::by("name", SortDirection::Asc);
    state.toggle("name");
    assert_eq!(state.direction(), SortDirection::Desc);
    state.toggle("name");
    assert_eq!(state.direction(), SortDirection::Asc);
}

#[test]
fn toggle_other_field_resets_to_ascending() {
    let mut state = SortState::by("name", SortDirection::Desc);
    state.toggle("amount");
    assert_eq!(state.field(), Some("amount"));
    assert_eq!(state.direction(), SortDirection::Asc);
}

#[test]
fn indicator_reflects_active_field_only() {
    let state = SortState::by("name", SortDirection::Desc);
    assert_eq!(state.indicator("name"), SortIndicator::Descending);
    assert_eq!(state.indicator("amount"), SortIndicator::Neutral);
    assert_eq!(SortState::default().indicator("name"), SortIndicator::Neutral);
    assert_eq!(SortIndicator::Ascending.glyph(), "▲");
}

#[test]
fn clear_drops_active_field() {
    let mut state = SortState::by("name", SortDirection::Desc);
    state.clear();
    assert!(state.field().is_none());
    assert_eq!(state.direction(), SortDirection::Asc);
}

// =============================================================
// Comparator
// =============================================================

#[test]
fn equal_values_compare_equal_in_both_directions() {
    let a = CellValue::from("x");
    assert_eq!(compare_values(&a, &a.clone(), SortDirection::Asc), Ordering::Equal);
    assert_eq!(compare_values(&a, &a.clone(), SortDirection::Desc), Ordering::Equal);
}

#[test]
fn descending_reverses_relational_order() {
    let (a, b) = (CellValue::Int(1), CellValue::Int(2));
    assert_eq!(compare_values(&a, &b, SortDirection::Asc), Ordering::Less);
    assert_eq!(compare_values(&a, &b, SortDirection::Desc), Ordering::Greater);
}

// =============================================================
// sort_rows
// =============================================================

#[test]
fn sorts_by_name_ascending() {
    let data = vec![json!({ "id": 1, "name": "B" }), json!({ "id": 2, "name": "A" })];
    let mut rows: Vec<&Value> = data.iter().collect();
    sort_rows(&mut rows, &Column::new("name"), SortDirection::Asc);
    assert_eq!(ids(&rows), vec![2, 1]);
}

#[test]
fn ties_keep_input_order() {
    let data = vec![
        json!({ "id": 1, "fee": "Bus" }),
        json!({ "id": 2, "fee": "Exam" }),
        json!({ "id": 3, "fee": "Bus" }),
        json!({ "id": 4, "fee": "Bus" }),
    ];
    let mut rows: Vec<&Value> = data.iter().collect();
    sort_rows(&mut rows, &Column::new("fee"), SortDirection::Asc);
    assert_eq!(ids(&rows), vec![1, 3, 4, 2]);
    sort_rows(&mut rows, &Column::new("fee"), SortDirection::Desc);
    assert_eq!(ids(&rows), vec![2, 1, 3, 4]);
}

#[test]
fn ascending_and_descending_are_reverses_for_distinct_values() {
    let data: Vec<Value> = [5, 3, 9, 1, 7]
        .iter()
        .map(|n| json!({ "id": n, "amount": n * 100 }))
        .collect();
    let column = Column::new("amount");
    let mut asc: Vec<&Value> = data.iter().collect();
    sort_rows(&mut asc, &column, SortDirection::Asc);
    let mut desc: Vec<&Value> = data.iter().collect();
    sort_rows(&mut desc, &column, SortDirection::Desc);
    let mut reversed = ids(&desc);
    reversed.reverse();
    assert_eq!(ids(&asc), reversed);
    assert_eq!(ids(&asc), vec![1, 3, 5, 7, 9]);
}

#[test]
fn sorting_twice_is_idempotent() {
    let data = vec![
        json!({ "id": 1, "name": "delta" }),
        json!({ "id": 2, "name": "Alpha" }),
        json!({ "id": 3, "name": "charlie" }),
        json!({ "id": 4, "name": "Bravo" }),
    ];
    let column = Column::new("name");
    let mut rows: Vec<&Value> = data.iter().collect();
    sort_rows(&mut rows, &column, SortDirection::Asc);
    let once = names(&rows);
    sort_rows(&mut rows, &column, SortDirection::Asc);
    assert_eq!(names(&rows), once);
    assert_eq!(once, vec!["Alpha", "Bravo", "charlie", "delta"]);
}

#[test]
fn selector_drives_sort_order() {
    let data = vec![json!({ "id": 1, "due": "2025-04-15" }), json!({ "id": 2, "due": "2025-03-30" })];
    let column = Column::new("due").selector(|r: &Value| CellValue::from(r["due"].as_str().map(str::to_owned)));
    let mut rows: Vec<&Value> = data.iter().collect();
    sort_rows(&mut rows, &column, SortDirection::Asc);
    assert_eq!(ids(&rows), vec![2, 1]);
}

#[test]
fn sort_leaves_source_untouched() {
    let data = vec![json!({ "id": 2, "n": 2 }), json!({ "id": 1, "n": 1 })];
    let mut rows: Vec<&Value> = data.iter().collect();
    sort_rows(&mut rows, &Column::new("n"), SortDirection::Asc);
    assert_eq!(data[0]["id"], 2);
    assert_eq!(ids(&rows), vec![1, 2]);
}
