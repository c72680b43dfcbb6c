//! Fees the student still owes, with urgency counts and pay links.

#[cfg(test)]
#[path = "pending_payments_test.rs"]
mod pending_payments_test;

use grid::Column;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use portal::filter::{DueCounts, PendingFilter, distinct, total_due};
use portal::format::{DEFAULT_TRUNCATE, format_currency, format_date, truncate_text};
use portal::model::PendingFee;

use crate::components::alert::{Alert, Notice};
use crate::components::badge::DueBadge;
use crate::components::card::StatCard;
use crate::components::data_table::{DataTable, TableColumn};
use crate::components::field::{SearchField, SelectField, with_all};
use crate::components::loader::Loader;
use crate::net::api;
use crate::util::clock;
use crate::util::request::{scoped_generation, spawn_guarded};

use super::current_student_id;

pub fn make_payment_path(fee_id: u32) -> String {
    format!("/student/make-payment/{fee_id}")
}

pub fn pending_columns() -> Vec<TableColumn<PendingFee>> {
    vec![
        Column::new("type").header("Fee Type").into(),
        Column::new("description")
            .header("Description")
            .format(|f: &PendingFee| truncate_text(&f.description, DEFAULT_TRUNCATE))
            .into(),
        Column::new("semester").header("Semester").into(),
        Column::new("amount").header("Amount").format(|f: &PendingFee| format_currency(f.amount)).into(),
        Column::new("lateCharge")
            .header("Late Charge")
            .format(|f: &PendingFee| format_currency(f.late_charge))
            .into(),
        Column::new("totalDue")
            .header("Total Due")
            .format(|f: &PendingFee| format_currency(f.total_due()))
            .cell_class("fw-semibold")
            .into(),
        Column::new("dueDate").header("Due Date").format(|f: &PendingFee| format_date(&f.due_date)).into(),
        TableColumn::new(Column::new("status").header("Status").sortable(false))
            .render(|f: &PendingFee| view! { <DueBadge due=f.due_date.clone()/> }.into_any()),
        TableColumn::new(Column::new("actions").header("Action").sortable(false)).render(|f: &PendingFee| {
            view! { <a class="btn btn-sm btn-primary" href=make_payment_path(f.id)>"Pay Now"</a> }.into_any()
        }),
    ]
}

#[component]
pub fn PendingPaymentsPage() -> impl IntoView {
    let generation = scoped_generation();
    let navigate = use_navigate();

    let fees = RwSignal::new(Vec::<PendingFee>::new());
    let loading = RwSignal::new(true);
    let notice = RwSignal::new(None::<Notice>);
    let fee_type = RwSignal::new(String::new());
    let search = RwSignal::new(String::new());

    if let Some(student_id) = current_student_id() {
        spawn_guarded(&generation, async move { api::pending_fees(student_id).await }, move |result| {
            loading.set(false);
            match result {
                Ok(list) => fees.set(list),
                Err(message) => notice.set(Some(Notice::error(message))),
            }
        });
    }

    let filtered = Memo::new(move |_| {
        let filter = PendingFilter { fee_type: fee_type.get(), search: search.get() };
        fees.with(|f| filter.apply(f))
    });
    let counts = Memo::new(move |_| fees.with(|f| DueCounts::tally(f, clock::today())));
    let fee_types =
        Signal::derive(move || with_all("All Fee Types", fees.with(|f| distinct(f.iter().map(|x| x.fee_type.as_str())))));

    let on_row_click = Callback::new(move |fee: PendingFee| {
        navigate(&make_payment_path(fee.id), Default::default());
    });

    view! {
        <div class="pending-payments">
            <h1 class="h3 mb-4">"Pending Payments"</h1>
            <Alert notice=notice/>
            <div class="row g-4 mb-4">
                <div class="col-md-3">
                    <StatCard
                        title="Total Due"
                        value=Signal::derive(move || fees.with(|f| format_currency(total_due(f))))
                        caption="Amount plus late charges"
                    />
                </div>
                <div class="col-md-3">
                    <StatCard
                        title="Overdue"
                        value=Signal::derive(move || counts.get().overdue.to_string())
                        variant="danger"
                    />
                </div>
                <div class="col-md-3">
                    <StatCard
                        title="Due Soon"
                        value=Signal::derive(move || counts.get().due_soon.to_string())
                        variant="warning"
                    />
                </div>
                <div class="col-md-3">
                    <StatCard
                        title="Upcoming"
                        value=Signal::derive(move || counts.get().upcoming.to_string())
                        variant="info"
                    />
                </div>
            </div>
            <div class="card shadow-sm mb-4">
                <div class="card-body row g-3 align-items-end">
                    <div class="col-md-4">
                        <SelectField label="Fee Type" value=fee_type options=fee_types/>
                    </div>
                    <div class="col-md-8">
                        <SearchField value=search placeholder="Fee type or description"/>
                    </div>
                </div>
            </div>
            <Show when=move || !loading.get() fallback=|| view! { <Loader/> }>
                <div class="card shadow-sm">
                    <div class="card-body">
                        <DataTable
                            columns=pending_columns()
                            data=filtered
                            empty_message="No pending payments. All your fees are paid."
                            on_row_click=on_row_click
                        />
                    </div>
                </div>
            </Show>
        </div>
    }
}
