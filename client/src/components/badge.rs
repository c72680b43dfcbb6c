//! Status badges for payments and due dates.

#[cfg(test)]
#[path = "badge_test.rs"]
mod badge_test;

use leptos::prelude::*;
use portal::format::{DueStatus, days_remaining, days_remaining_label, status_from_due_date};
use portal::model::PaymentStatus;
use time::Date;

use crate::util::clock;

#[must_use]
pub fn payment_badge_class(status: PaymentStatus) -> &'static str {
    match status {
        PaymentStatus::Success => "badge bg-success",
        PaymentStatus::Pending => "badge bg-warning text-dark",
        PaymentStatus::Failed => "badge bg-danger",
    }
}

#[must_use]
pub fn due_badge_class(status: DueStatus) -> &'static str {
    match status {
        DueStatus::Overdue => "badge bg-danger",
        DueStatus::DueSoon => "badge bg-warning text-dark",
        DueStatus::Upcoming => "badge bg-info",
    }
}

/// Class and label for a due date relative to `today`.
#[must_use]
pub fn due_badge(due: &str, today: Date) -> (&'static str, String) {
    (due_badge_class(status_from_due_date(due, today)), days_remaining_label(days_remaining(due, today)))
}

#[component]
pub fn PaymentBadge(status: PaymentStatus) -> impl IntoView {
    view! { <span class=payment_badge_class(status)>{status.label()}</span> }
}

#[component]
pub fn DueBadge(#[prop(into)] due: String) -> impl IntoView {
    let (class, label) = due_badge(&due, clock::today());
    view! { <span class=class>{label}</span> }
}
