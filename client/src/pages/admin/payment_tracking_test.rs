use super::*;
use grid::{CellValue, Row};
use portal::fixtures;
use time::macros::datetime;

#[test]
fn tracking_filter_ignores_unknown_choices() {
    let filter = tracking_filter("CSE", "", "", "bogus", "sometime", "ravi");
    assert_eq!(filter.branch, "CSE");
    assert_eq!(filter.status, None);
    assert_eq!(filter.preset, DateRangePreset::All);
    assert_eq!(filter.search, "ravi");
}

#[test]
fn tracking_filter_narrows_the_ledger() {
    let ledger = fixtures::transactions();
    let now = datetime!(2025-03-20 12:00);

    let cse = tracking_filter("CSE", "", "", "", "all", "").apply(&ledger, now);
    assert!(!cse.is_empty());
    assert!(cse.iter().all(|t| t.branch == "CSE"));

    let today = tracking_filter("", "", "", "", "today", "").apply(&ledger, now);
    assert_eq!(today.len(), 1);
    assert_eq!(today[0].id, "SVIT25032001");

    let pending = tracking_filter("", "", "", "pending", "all", "").apply(&ledger, now);
    assert!(pending.iter().all(|t| t.status == PaymentStatus::Pending));
}

#[test]
fn tab_label_counts_by_status() {
    let ledger = fixtures::transactions();
    let stats = TransactionStats::tally(&ledger);
    assert_eq!(tab_label("All Payments", "", &stats, ledger.len()), format!("All Payments ({})", ledger.len()));
    assert_eq!(tab_label("Failed", "failed", &stats, ledger.len()), format!("Failed ({})", stats.failed));
}

#[test]
fn transaction_columns_read_real_fields() {
    let tx = fixtures::transactions().remove(0);
    for column in transaction_columns() {
        let field = column.column.field().to_owned();
        assert_ne!(tx.field(&field), CellValue::Null, "unknown field {field}");
    }
}
