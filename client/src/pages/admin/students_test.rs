use super::*;
use grid::{CellValue, Row};
use portal::fixtures;

#[test]
fn build_query_drops_blank_inputs() {
    assert_eq!(build_query("", " ", "", ""), StudentQuery::default());

    let query = build_query("CSE", "6", "pending", " rahul ");
    assert_eq!(query.branch.as_deref(), Some("CSE"));
    assert_eq!(query.semester.as_deref(), Some("6"));
    assert_eq!(query.status, Some(StudentStatus::Pending));
    assert_eq!(query.search.as_deref(), Some("rahul"));
}

#[test]
fn unknown_status_means_any() {
    assert_eq!(build_query("", "", "overdue", "").status, None);
}

#[test]
fn selected_ids_skips_non_numeric_keys() {
    let keys = vec!["3".to_owned(), "x".to_owned(), "12".to_owned()];
    assert_eq!(selected_ids(&keys), vec![3, 12]);
}

#[test]
fn roster_summary_splits_paid_and_pending() {
    let students = fixtures::students();
    let summary = RosterSummary::tally(&students);
    assert_eq!(summary.students, students.len());
    assert_eq!(summary.fully_paid + summary.with_dues, students.len());
    assert_eq!(summary.collected + summary.outstanding, students.iter().map(|s| s.paid_fees + s.pending_fees).sum::<u64>());
    assert_eq!(RosterSummary::tally(&[]), RosterSummary::default());
}

#[test]
fn sortable_columns_read_real_fields() {
    let student = fixtures::students().remove(0);
    for column in student_columns().into_iter().filter(|c| c.column.is_sortable()) {
        let field = column.column.field().to_owned();
        assert_ne!(student.field(&field), CellValue::Null, "unknown field {field}");
    }
}
