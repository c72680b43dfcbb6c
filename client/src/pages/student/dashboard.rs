//! Student landing page: dues at a glance, upcoming fees, latest receipts.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use portal::filter::{DueCounts, total_due, total_paid};
use portal::format::{format_currency, format_date};
use portal::model::{Payment, PendingFee};

use crate::components::alert::{Alert, Notice};
use crate::components::badge::{DueBadge, PaymentBadge};
use crate::components::card::StatCard;
use crate::components::loader::Loader;
use crate::net::api;
use crate::state::auth::AuthState;
use crate::util::clock;
use crate::util::request::{scoped_generation, spawn_guarded};

use super::current_student_id;

/// How many receipts the dashboard lists.
pub const RECENT_PAYMENTS: usize = 3;

/// Newest payments first, at most `limit`.
#[must_use]
pub fn latest_payments(payments: &[Payment], limit: usize) -> Vec<Payment> {
    let mut sorted = payments.to_vec();
    sorted.sort_by(|a, b| b.paid_date.cmp(&a.paid_date));
    sorted.truncate(limit);
    sorted
}

/// Soonest due first.
#[must_use]
pub fn upcoming_dues(fees: &[PendingFee]) -> Vec<PendingFee> {
    let mut sorted = fees.to_vec();
    sorted.sort_by(|a, b| a.due_date.cmp(&b.due_date));
    sorted
}

#[component]
pub fn StudentDashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let generation = scoped_generation();

    let pending = RwSignal::new(Vec::<PendingFee>::new());
    let history = RwSignal::new(Vec::<Payment>::new());
    let loading = RwSignal::new(true);
    let notice = RwSignal::new(None::<Notice>);

    if let Some(student_id) = current_student_id() {
        spawn_guarded(
            &generation,
            async move { (api::pending_fees(student_id).await, api::payment_history(student_id).await) },
            move |(fees, payments)| {
                loading.set(false);
                match (fees, payments) {
                    (Ok(fees), Ok(payments)) => {
                        pending.set(fees);
                        history.set(payments);
                    }
                    (Err(message), _) | (_, Err(message)) => {
                        notice.set(Some(Notice::error(format!(
                            "Failed to load dashboard data. Please try again later. ({message})"
                        ))));
                    }
                }
            },
        );
    }

    let counts = Memo::new(move |_| pending.with(|fees| DueCounts::tally(fees, clock::today())));
    let name = move || auth.with(|a| a.user.as_ref().map(|u| u.name.clone()).unwrap_or_default());

    let pending_list = move || {
        let fees = pending.with(|f| upcoming_dues(f));
        if fees.is_empty() {
            return view! {
                <div class="text-center py-5">
                    <h6 class="text-muted">"No pending payments"</h6>
                    <p class="text-muted small mb-0">"All your fees are paid. Great job!"</p>
                </div>
            }
            .into_any();
        }
        view! {
            <div class="list-group list-group-flush">
                {fees
                    .into_iter()
                    .map(|fee| {
                        view! {
                            <div class="list-group-item p-3">
                                <div class="d-flex justify-content-between align-items-center">
                                    <div>
                                        <h6 class="mb-1">{fee.fee_type.clone()}</h6>
                                        <p class="text-muted small mb-0">{fee.description.clone()}</p>
                                    </div>
                                    <div class="text-end">
                                        <div class="fw-bold mb-1">{format_currency(fee.amount)}</div>
                                        <DueBadge due=fee.due_date.clone()/>
                                    </div>
                                </div>
                                <div class="d-flex justify-content-between align-items-center mt-3">
                                    <div class="small text-muted">"Due Date: " {format_date(&fee.due_date)}</div>
                                    <a href=format!("/student/make-payment/{}", fee.id) class="btn btn-sm btn-primary">
                                        "Pay Now"
                                    </a>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any()
    };

    let recent_list = move || {
        let payments = history.with(|p| latest_payments(p, RECENT_PAYMENTS));
        if payments.is_empty() {
            return view! {
                <div class="text-center py-5">
                    <h6 class="text-muted">"No payment history"</h6>
                    <p class="text-muted small mb-0">"You haven't made any payments yet"</p>
                </div>
            }
            .into_any();
        }
        view! {
            <div class="list-group list-group-flush">
                {payments
                    .into_iter()
                    .map(|payment| {
                        view! {
                            <div class="list-group-item p-3">
                                <div class="d-flex justify-content-between align-items-center">
                                    <div>
                                        <h6 class="mb-1">{payment.fee_type.clone()}</h6>
                                        <div class="text-muted small">"Receipt: " {payment.id.clone()}</div>
                                    </div>
                                    <div class="text-end">
                                        <div class="fw-bold mb-1">{format_currency(payment.amount)}</div>
                                        <PaymentBadge status=payment.status/>
                                    </div>
                                </div>
                                <div class="d-flex justify-content-between align-items-center mt-2">
                                    <div class="small text-muted">"Paid on: " {format_date(&payment.paid_date)}</div>
                                    <a href=format!("/student/receipt/{}", payment.id) class="btn btn-sm btn-outline-secondary">
                                        "View Receipt"
                                    </a>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <div class="student-dashboard py-2">
            <div class="d-sm-flex align-items-center justify-content-between mb-4">
                <h1 class="h3 mb-0">"Student Dashboard"</h1>
                <p class="mb-0">"Welcome back, " {name}</p>
            </div>
            <Alert notice=notice/>
            <Show when=move || !loading.get() fallback=|| view! { <Loader/> }>
                <div class="row g-4 mb-4">
                    <div class="col-md-6 col-xl-3">
                        <StatCard
                            title="Total Due"
                            value=Signal::derive(move || pending.with(|f| format_currency(total_due(f))))
                            caption="Including late charges"
                        />
                    </div>
                    <div class="col-md-6 col-xl-3">
                        <StatCard
                            title="Overdue"
                            value=Signal::derive(move || counts.get().overdue.to_string())
                            variant="danger"
                        />
                    </div>
                    <div class="col-md-6 col-xl-3">
                        <StatCard
                            title="Due Soon"
                            value=Signal::derive(move || counts.get().due_soon.to_string())
                            caption="Within 5 days"
                            variant="warning"
                        />
                    </div>
                    <div class="col-md-6 col-xl-3">
                        <StatCard
                            title="Total Paid"
                            value=Signal::derive(move || history.with(|p| format_currency(total_paid(p))))
                            variant="success"
                        />
                    </div>
                </div>
                <div class="row mb-4">
                    <div class="col-lg-7 mb-4 mb-lg-0">
                        <div class="card border-0 shadow-sm h-100">
                            <div class="card-header py-3 d-flex justify-content-between align-items-center">
                                <h5 class="mb-0 fw-bold">"Pending Payments"</h5>
                                <a href="/student/pending-payments" class="btn btn-sm btn-link text-decoration-none">
                                    "View All"
                                </a>
                            </div>
                            <div class="card-body p-0">{pending_list}</div>
                        </div>
                    </div>
                    <div class="col-lg-5">
                        <div class="card border-0 shadow-sm h-100">
                            <div class="card-header py-3 d-flex justify-content-between align-items-center">
                                <h5 class="mb-0 fw-bold">"Recent Payments"</h5>
                                <a href="/student/payment-history" class="btn btn-sm btn-link text-decoration-none">
                                    "View All"
                                </a>
                            </div>
                            <div class="card-body p-0">{recent_list}</div>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
