use super::*;
use grid::{CellValue, Row};
use portal::fixtures;

#[test]
fn pending_columns_read_real_fields() {
    let fee = fixtures::pending_fees().remove(0);
    for column in pending_columns() {
        let field = column.column.field().to_owned();
        if field == "actions" {
            continue;
        }
        assert_ne!(fee.field(&field), CellValue::Null, "unknown field {field}");
    }
}

#[test]
fn total_due_column_includes_late_charge() {
    let overdue = fixtures::pending_fees().into_iter().find(|f| f.late_charge > 0);
    let columns = pending_columns();
    let total = columns.iter().find(|c| c.column.field() == "totalDue");
    let shown = overdue.zip(total).map(|(fee, column)| column.column.display(&fee));
    assert_eq!(shown.as_deref(), Some("₹1,100"));
}

#[test]
fn make_payment_path_embeds_fee_id() {
    assert_eq!(make_payment_path(3), "/student/make-payment/3");
}
