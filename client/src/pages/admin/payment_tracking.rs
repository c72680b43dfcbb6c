//! Admin payment ledger with client-side filters and status tabs.

#[cfg(test)]
#[path = "payment_tracking_test.rs"]
mod payment_tracking_test;

use grid::Column;
use leptos::prelude::*;
use portal::filter::{DateRangePreset, TransactionFilter, TransactionStats};
use portal::fixtures::{BRANCHES, FEE_TYPES, PAYMENT_MODES};
use portal::format::{format_currency, format_date_time};
use portal::model::{PaymentStatus, Transaction};

use crate::components::alert::{Alert, Notice};
use crate::components::badge::PaymentBadge;
use crate::components::card::StatCard;
use crate::components::data_table::{DataTable, TableColumn};
use crate::components::field::{SearchField, SelectField, with_all};
use crate::components::loader::Loader;
use crate::net::api;
use crate::util::clock;
use crate::util::request::{scoped_generation, spawn_guarded};

/// `(status value, tab label)`; the empty value is the "all" tab.
pub const STATUS_TABS: [(&str, &str); 4] =
    [("", "All Payments"), ("success", "Successful"), ("pending", "Pending"), ("failed", "Failed")];

/// Filter for the raw form inputs. Unknown preset or status text means
/// "no restriction".
#[must_use]
pub fn tracking_filter(branch: &str, fee_type: &str, mode: &str, status: &str, preset: &str, search: &str) -> TransactionFilter {
    TransactionFilter {
        branch: branch.to_owned(),
        fee_type: fee_type.to_owned(),
        mode: mode.to_owned(),
        status: PaymentStatus::parse(status),
        preset: DateRangePreset::parse(preset).unwrap_or_default(),
        search: search.to_owned(),
    }
}

/// Tab caption with the number of matching rows.
#[must_use]
pub fn tab_label(label: &str, status: &str, stats: &TransactionStats, total: usize) -> String {
    let count = match PaymentStatus::parse(status) {
        Some(PaymentStatus::Success) => stats.successful,
        Some(PaymentStatus::Pending) => stats.pending,
        Some(PaymentStatus::Failed) => stats.failed,
        None => total,
    };
    format!("{label} ({count})")
}

pub fn transaction_columns() -> Vec<TableColumn<Transaction>> {
    vec![
        Column::new("id").header("Receipt ID").into(),
        TableColumn::new(Column::new("studentName").header("Student Name")).render(|t: &Transaction| {
            view! {
                <div class="fw-medium">{t.student_name.clone()}</div>
                <div class="small text-muted">{t.roll_number.clone()}</div>
            }
            .into_any()
        }),
        Column::new("branch").header("Branch").into(),
        Column::new("feeType").header("Fee Type").into(),
        Column::new("amount").header("Amount").format(|t: &Transaction| format_currency(t.amount)).into(),
        Column::new("date").header("Date & Time").format(|t: &Transaction| format_date_time(&t.date)).into(),
        Column::new("mode").header("Payment Mode").into(),
        Column::new("reference").header("Reference").sortable(false).into(),
        TableColumn::new(Column::new("status").header("Status"))
            .render(|t: &Transaction| view! { <PaymentBadge status=t.status/> }.into_any()),
    ]
}

#[component]
pub fn PaymentTrackingPage() -> impl IntoView {
    let generation = scoped_generation();

    let transactions = RwSignal::new(Vec::<Transaction>::new());
    let loading = RwSignal::new(true);
    let notice = RwSignal::new(None::<Notice>);

    let branch = RwSignal::new(String::new());
    let fee_type = RwSignal::new(String::new());
    let mode = RwSignal::new(String::new());
    let status = RwSignal::new(String::new());
    let preset = RwSignal::new(DateRangePreset::All.as_str().to_owned());
    let search = RwSignal::new(String::new());
    let focused = RwSignal::new(None::<Transaction>);

    spawn_guarded(&generation, api::transactions(), move |result| {
        loading.set(false);
        match result {
            Ok(list) => transactions.set(list),
            Err(message) => notice.set(Some(Notice::error(message))),
        }
    });

    // Everything but the status narrows the tab counts; the tab itself then
    // picks one status out of that set.
    let narrowed = Memo::new(move |_| {
        let filter = tracking_filter(&branch.get(), &fee_type.get(), &mode.get(), "", &preset.get(), &search.get());
        transactions.with(|all| filter.apply(all, clock::now()))
    });
    let shown = Memo::new(move |_| {
        let wanted = PaymentStatus::parse(&status.get());
        narrowed.with(|rows| rows.iter().filter(|t| wanted.is_none_or(|s| t.status == s)).cloned().collect::<Vec<_>>())
    });
    let stats = Memo::new(move |_| transactions.with(|all| TransactionStats::tally(all)));
    let narrowed_stats = Memo::new(move |_| narrowed.with(|rows| TransactionStats::tally(rows)));

    let reset = move |_| {
        branch.set(String::new());
        fee_type.set(String::new());
        mode.set(String::new());
        status.set(String::new());
        preset.set(DateRangePreset::All.as_str().to_owned());
        search.set(String::new());
    };

    let preset_options = DateRangePreset::TRACKING
        .iter()
        .map(|p| (p.as_str().to_owned(), p.label().to_owned()))
        .collect::<Vec<_>>();
    let status_options = STATUS_TABS.iter().map(|(v, l)| ((*v).to_owned(), (*l).to_owned())).collect::<Vec<_>>();

    let tabs = move || {
        let counts = narrowed_stats.get();
        let total = narrowed.with(Vec::len);
        STATUS_TABS
            .iter()
            .map(|(value, label)| {
                let value = *value;
                let caption = tab_label(label, value, &counts, total);
                view! {
                    <li class="nav-item">
                        <button
                            type="button"
                            class=move || if status.with(|s| s == value) { "nav-link active" } else { "nav-link" }
                            on:click=move |_| status.set(value.to_owned())
                        >
                            {caption}
                        </button>
                    </li>
                }
            })
            .collect_view()
    };

    let focus_panel = move || {
        focused.get().map(|t| {
            view! {
                <div class="alert alert-light border d-flex justify-content-between align-items-start mb-3">
                    <div>
                        <div class="fw-semibold">{format!("{} · {}", t.id, t.student_name)}</div>
                        <div class="small text-muted">
                            {format!("{} · Semester {} · {} · Ref {}", t.branch, t.semester, t.mode, t.reference)}
                        </div>
                        <div class="small">{format!("{} of {} on {}", t.fee_type, format_currency(t.amount), format_date_time(&t.date))}</div>
                    </div>
                    <button type="button" class="btn-close" aria-label="Close" on:click=move |_| focused.set(None)></button>
                </div>
            }
        })
    };

    view! {
        <div class="payment-tracking-page">
            <h1 class="h3 mb-4">"Payment Tracking"</h1>
            <Alert notice=notice/>
            <div class="row g-4 mb-4">
                <div class="col-md-6 col-xl-3">
                    <StatCard
                        title="Successful Payments"
                        value=Signal::derive(move || {
                            let s = stats.get();
                            format!("{} · {}", s.successful, format_currency(s.total_amount))
                        })
                        variant="success"
                    />
                </div>
                <div class="col-md-6 col-xl-3">
                    <StatCard
                        title="Pending Payments"
                        value=Signal::derive(move || stats.get().pending.to_string())
                        variant="warning"
                    />
                </div>
                <div class="col-md-6 col-xl-3">
                    <StatCard
                        title="Failed Payments"
                        value=Signal::derive(move || stats.get().failed.to_string())
                        variant="danger"
                    />
                </div>
                <div class="col-md-6 col-xl-3">
                    <StatCard
                        title="Current Search"
                        value=Signal::derive(move || shown.with(Vec::len).to_string())
                        caption="Matching transactions"
                        variant="info"
                    />
                </div>
            </div>
            <div class="card shadow-sm mb-4">
                <div class="card-header fw-semibold">"Payment Filters"</div>
                <div class="card-body row g-3 align-items-end">
                    <div class="col-md-2">
                        <SelectField label="Branch" value=branch options=with_all("All Branches", BRANCHES)/>
                    </div>
                    <div class="col-md-2">
                        <SelectField label="Fee Type" value=fee_type options=with_all("All Fee Types", FEE_TYPES)/>
                    </div>
                    <div class="col-md-2">
                        <SelectField label="Payment Mode" value=mode options=with_all("All Modes", PAYMENT_MODES)/>
                    </div>
                    <div class="col-md-2">
                        <SelectField label="Status" value=status options=status_options/>
                    </div>
                    <div class="col-md-2">
                        <SelectField label="Date Range" value=preset options=preset_options/>
                    </div>
                    <div class="col-md-2">
                        <SearchField value=search placeholder="Receipt ID, Name, Roll No"/>
                    </div>
                    <div class="col-12 text-end">
                        <button type="button" class="btn btn-outline-secondary" on:click=reset>"Reset Filters"</button>
                    </div>
                </div>
            </div>
            <div class="card shadow-sm">
                <div class="card-header">
                    <ul class="nav nav-tabs card-header-tabs">{tabs}</ul>
                </div>
                <div class="card-body">
                    {focus_panel}
                    <Show when=move || !loading.get() fallback=|| view! { <Loader text="Loading transactions..."/> }>
                        <DataTable
                            columns=transaction_columns()
                            data=shown
                            searchable=false
                            empty_message="No transactions match the current filters"
                            on_row_click=Callback::new(move |t: Transaction| focused.set(Some(t)))
                        />
                    </Show>
                </div>
            </div>
        </div>
    }
}
