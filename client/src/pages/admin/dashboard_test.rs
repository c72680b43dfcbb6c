use super::*;
use grid::{CellValue, Row};
use portal::fixtures;

#[test]
fn filter_recent_keeps_one_status_or_all() {
    let recent = fixtures::recent_payments();
    assert_eq!(filter_recent(&recent, "").len(), recent.len());
    let successes = filter_recent(&recent, "success");
    assert!(successes.iter().all(|p| p.status == PaymentStatus::Success));
    let expected = recent.iter().filter(|p| p.status == PaymentStatus::Success).count();
    assert_eq!(successes.len(), expected);
}

#[test]
fn recent_columns_read_real_fields() {
    let payment = fixtures::recent_payments().remove(0);
    for column in recent_columns() {
        let field = column.column.field().to_owned();
        assert_ne!(payment.field(&field), CellValue::Null, "unknown field {field}");
    }
}

#[test]
fn default_period_is_offered() {
    assert!(TREND_PERIODS.iter().any(|(value, _)| *value == DEFAULT_PERIOD));
}
