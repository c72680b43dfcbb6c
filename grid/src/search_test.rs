use super::*;
use crate::value::CellValue;
use serde_json::{Value, json};

fn fee_rows() -> Vec<Value> {
    vec![
        json!({ "id": 1, "type": "Examination Fee", "amount": 2500 }),
        json!({ "id": 2, "type": "Bus Fee", "amount": 8000 }),
        json!({ "id": 3, "type": "EXAM re-sit", "amount": 0 }),
        json!({ "id": 4, "type": "mid-term examination", "amount": 1200 }),
    ]
}

fn columns() -> Vec<Column<Value>> {
    vec![Column::new("type"), Column::new("amount")]
}

fn ids(rows: &[&Value]) -> Vec<i64> {
    rows.iter().filter_map(|r| r["id"].as_i64()).collect()
}

#[test]
fn term_matches_case_insensitively() {
    let data = fee_rows();
    let refs: Vec<&Value> = data.iter().collect();
    let out = filter_rows(&refs, &columns(), "exam");
    assert_eq!(ids(&out), vec![1, 3, 4]);
}

#[test]
fn uppercase_term_is_folded() {
    let data = fee_rows();
    let refs: Vec<&Value> = data.iter().collect();
    let out = filter_rows(&refs, &columns(), "BUS");
    assert_eq!(ids(&out), vec![2]);
}

#[test]
fn empty_term_keeps_all_rows() {
    let data = fee_rows();
    let refs: Vec<&Value> = data.iter().collect();
    assert_eq!(filter_rows(&refs, &columns(), "").len(), data.len());
}

#[test]
fn numbers_match_on_their_string_form() {
    let data = fee_rows();
    let refs: Vec<&Value> = data.iter().collect();
    assert_eq!(ids(&filter_rows(&refs, &columns(), "800")), vec![2]);
}

#[test]
fn blank_values_never_match() {
    let data = fee_rows();
    let refs: Vec<&Value> = data.iter().collect();
    // Row 3's amount is 0, which is blank, so it cannot match.
    assert_eq!(ids(&filter_rows(&refs, &columns(), "0")), vec![1, 2, 4]);
}

#[test]
fn selector_value_is_searched_instead_of_raw_field() {
    let data = fee_rows();
    let refs: Vec<&Value> = data.iter().collect();
    let columns = vec![Column::new("type").selector(|r: &Value| CellValue::from(format!("code-{}", r["id"])))];
    assert_eq!(ids(&filter_rows(&refs, &columns, "code-2")), vec![2]);
    assert!(filter_rows(&refs, &columns, "bus").is_empty());
}

#[test]
fn filtered_rows_are_a_matching_subset() {
    let data = fee_rows();
    let refs: Vec<&Value> = data.iter().collect();
    let columns = columns();
    for term in ["e", "fee", "xam", "zz", "12"] {
        let out = filter_rows(&refs, &columns, term);
        assert!(out.len() <= data.len());
        for row in &out {
            assert!(data.iter().any(|d| std::ptr::eq(d, *row)));
            assert!(row_matches(*row, &columns, &term.to_lowercase()));
        }
    }
}
