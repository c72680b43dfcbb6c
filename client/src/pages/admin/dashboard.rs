//! Admin overview: collection totals, monthly trend, latest payments.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use grid::Column;
use leptos::prelude::*;
use portal::format::{calculate_percentage, format_currency, format_date_time};
use portal::model::{DashboardSummary, MonthlyTrend, PaymentStatus, RecentPayment};

use crate::components::alert::{Alert, Notice};
use crate::components::badge::PaymentBadge;
use crate::components::card::{Card, StatCard};
use crate::components::data_table::{DataTable, TableColumn};
use crate::components::field::SelectField;
use crate::net::api;
use crate::util::request::{scoped_generation, spawn_guarded};

pub const DEFAULT_PERIOD: &str = "lastSixMonths";

pub const TREND_PERIODS: [(&str, &str); 5] = [
    ("thisMonth", "This Month"),
    ("lastMonth", "Last Month"),
    ("lastThreeMonths", "Last 3 Months"),
    ("lastSixMonths", "Last 6 Months"),
    ("thisYear", "This Year"),
];

/// Recent payments limited to one status; `""` keeps all.
#[must_use]
pub fn filter_recent(payments: &[RecentPayment], status: &str) -> Vec<RecentPayment> {
    match PaymentStatus::parse(status) {
        Some(wanted) => payments.iter().filter(|p| p.status == wanted).cloned().collect(),
        None => payments.to_vec(),
    }
}

pub fn trend_columns() -> Vec<TableColumn<MonthlyTrend>> {
    vec![
        Column::new("month").header("Month").sortable(false).into(),
        Column::new("collected").header("Collected").format(|t: &MonthlyTrend| format_currency(t.collected)).into(),
        Column::new("target").header("Target").format(|t: &MonthlyTrend| format_currency(t.target)).into(),
        TableColumn::new(Column::new("progress").header("Achieved").sortable(false)).render(|t: &MonthlyTrend| {
            let pct = calculate_percentage(t.collected, t.target);
            let bar = if pct >= 100 { "progress-bar bg-success" } else { "progress-bar" };
            view! {
                <div class="progress" role="progressbar">
                    <div class=bar style=format!("width: {}%", pct.min(100))>{format!("{pct}%")}</div>
                </div>
            }
            .into_any()
        }),
    ]
}

pub fn recent_columns() -> Vec<TableColumn<RecentPayment>> {
    vec![
        Column::new("id").header("Transaction").into(),
        Column::new("studentName").header("Student").into(),
        Column::new("rollNumber").header("Roll No.").into(),
        Column::new("feeType").header("Fee Type").into(),
        Column::new("amount").header("Amount").format(|p: &RecentPayment| format_currency(p.amount)).into(),
        Column::new("date").header("Date").format(|p: &RecentPayment| format_date_time(&p.date)).into(),
        Column::new("mode").header("Mode").into(),
        TableColumn::new(Column::new("status").header("Status"))
            .render(|p: &RecentPayment| view! { <PaymentBadge status=p.status/> }.into_any()),
    ]
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let summary_generation = scoped_generation();
    let trend_generation = scoped_generation();
    let recent_generation = scoped_generation();

    let summary = RwSignal::new(None::<DashboardSummary>);
    let trends = RwSignal::new(Vec::<MonthlyTrend>::new());
    let recent = RwSignal::new(Vec::<RecentPayment>::new());
    let notice = RwSignal::new(None::<Notice>);
    let period = RwSignal::new(DEFAULT_PERIOD.to_owned());
    let recent_status = RwSignal::new(String::new());

    let fail = move |message: String| notice.set(Some(Notice::error(message)));

    spawn_guarded(&summary_generation, api::dashboard_summary(), move |result| match result {
        Ok(s) => summary.set(Some(s)),
        Err(message) => fail(message),
    });
    spawn_guarded(&recent_generation, api::recent_payments(5), move |result| match result {
        Ok(list) => recent.set(list),
        Err(message) => fail(message),
    });

    // A newer period supersedes any trend request still in flight.
    Effect::new(move || {
        let selected = period.get();
        spawn_guarded(&trend_generation, async move { api::monthly_trends(&selected).await }, move |result| {
            match result {
                Ok(list) => trends.set(list),
                Err(message) => fail(message),
            }
        });
    });

    let stat = move |read: fn(&DashboardSummary) -> String| {
        Signal::derive(move || summary.with(|s| s.as_ref().map(read).unwrap_or_else(|| "...".to_owned())))
    };
    let shown_recent = Memo::new(move |_| recent_status.with(|s| recent.with(|r| filter_recent(r, s))));
    let periods = TREND_PERIODS.iter().map(|(v, l)| ((*v).to_owned(), (*l).to_owned())).collect::<Vec<_>>();
    let statuses = vec![
        (String::new(), "All Payments".to_owned()),
        ("success".to_owned(), "Successful".to_owned()),
        ("pending".to_owned(), "Pending".to_owned()),
        ("failed".to_owned(), "Failed".to_owned()),
    ];

    view! {
        <div class="admin-dashboard">
            <h1 class="h3 mb-4">"Admin Dashboard"</h1>
            <Alert notice=notice/>
            <div class="row g-4 mb-4">
                <div class="col-md-6 col-xl-3">
                    <StatCard
                        title="Total Collected"
                        value=stat(|s| format_currency(s.total_collected))
                        caption="This academic year"
                        variant="success"
                    />
                </div>
                <div class="col-md-6 col-xl-3">
                    <StatCard
                        title="Pending Amount"
                        value=stat(|s| format_currency(s.pending_amount))
                        variant="warning"
                    />
                </div>
                <div class="col-md-6 col-xl-3">
                    <StatCard
                        title="Overdue Amount"
                        value=stat(|s| format_currency(s.overdue_amount))
                        variant="danger"
                    />
                </div>
                <div class="col-md-6 col-xl-3">
                    <StatCard title="Collection Rate" value=stat(|s| format!("{}%", s.collection_rate))/>
                </div>
            </div>
            <div class="row g-4 mb-4">
                <div class="col-md-3">
                    <StatCard title="Total Students" value=stat(|s| s.total_students.to_string()) variant="info"/>
                </div>
                <div class="col-md-3">
                    <StatCard title="Fully Paid" value=stat(|s| s.paid_students.to_string()) variant="success"/>
                </div>
                <div class="col-md-3">
                    <StatCard title="With Pending Fees" value=stat(|s| s.pending_students.to_string()) variant="warning"/>
                </div>
                <div class="col-md-3">
                    <StatCard title="Overdue" value=stat(|s| s.overdue_students.to_string()) variant="danger"/>
                </div>
            </div>
            <div class="row g-4">
                <div class="col-xl-5">
                    <Card title="Monthly Collection Trend">
                        <div class="mb-3">
                            <SelectField label="Period" value=period options=periods/>
                        </div>
                        <DataTable columns=trend_columns() data=trends pagination=false/>
                    </Card>
                </div>
                <div class="col-xl-7">
                    <Card title="Recent Payments">
                        <div class="d-flex justify-content-between align-items-end mb-3">
                            <SelectField label="Status" value=recent_status options=statuses/>
                            <a href="/admin/payment-tracking" class="btn btn-sm btn-link">"View All"</a>
                        </div>
                        <DataTable
                            columns=recent_columns()
                            data=shown_recent
                            pagination=false
                            empty_message="No recent payments"
                        />
                    </Card>
                </div>
            </div>
        </div>
    }
}
