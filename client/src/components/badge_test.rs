use super::*;
use time::macros::date;

#[test]
fn due_badge_buckets_by_days_remaining() {
    let today = date!(2025 - 04 - 08);
    assert_eq!(due_badge("2025-04-01", today), ("badge bg-danger", "Overdue by 7 days".to_owned()));
    assert_eq!(due_badge("2025-04-13", today), ("badge bg-warning text-dark", "Due in 5 days".to_owned()));
    assert_eq!(due_badge("2025-04-20", today), ("badge bg-info", "Due in 12 days".to_owned()));
}

#[test]
fn payment_badge_colours_follow_status() {
    assert_eq!(payment_badge_class(PaymentStatus::Success), "badge bg-success");
    assert_eq!(payment_badge_class(PaymentStatus::Failed), "badge bg-danger");
}
