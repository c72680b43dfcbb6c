//! Student payment history with fee-type, date-range and text filters.

#[cfg(test)]
#[path = "payment_history_test.rs"]
mod payment_history_test;

use grid::Column;
use leptos::prelude::*;
use portal::filter::{HistoryFilter, distinct, total_paid};
use portal::format::{format_currency, format_date};
use portal::model::Payment;

use crate::components::alert::{Alert, Notice};
use crate::components::badge::PaymentBadge;
use crate::components::data_table::{DataTable, TableColumn};
use crate::components::field::{SearchField, SelectField, with_all};
use crate::components::loader::Loader;
use crate::net::api;
use crate::util::request::{scoped_generation, spawn_guarded};

use super::current_student_id;

pub fn history_columns() -> Vec<TableColumn<Payment>> {
    vec![
        Column::new("id").header("Receipt No.").into(),
        Column::new("type").header("Fee Type").into(),
        Column::new("semester").header("Semester").into(),
        Column::new("amount")
            .header("Amount")
            .format(|p: &Payment| format_currency(p.amount))
            .cell_class("text-end")
            .into(),
        Column::new("paidDate").header("Paid On").format(|p: &Payment| format_date(&p.paid_date)).into(),
        Column::new("paymentMode").header("Mode").into(),
        Column::new("reference").header("Reference").into(),
        TableColumn::new(Column::new("status").header("Status"))
            .render(|p: &Payment| view! { <PaymentBadge status=p.status/> }.into_any()),
        TableColumn::new(Column::new("actions").header("Actions").sortable(false)).render(|p: &Payment| {
            view! {
                <a class="btn btn-sm btn-outline-primary" href=format!("/student/receipt/{}", p.id)>"Receipt"</a>
            }
            .into_any()
        }),
    ]
}

#[component]
pub fn PaymentHistoryPage() -> impl IntoView {
    let generation = scoped_generation();

    let history = RwSignal::new(Vec::<Payment>::new());
    let loading = RwSignal::new(true);
    let notice = RwSignal::new(None::<Notice>);

    let fee_type = RwSignal::new(String::new());
    let start_date = RwSignal::new(String::new());
    let end_date = RwSignal::new(String::new());
    let search = RwSignal::new(String::new());

    if let Some(student_id) = current_student_id() {
        spawn_guarded(&generation, async move { api::payment_history(student_id).await }, move |result| {
            loading.set(false);
            match result {
                Ok(payments) => history.set(payments),
                Err(message) => notice.set(Some(Notice::error(message))),
            }
        });
    }

    let filter = Memo::new(move |_| HistoryFilter {
        fee_type: fee_type.get(),
        start_date: start_date.get(),
        end_date: end_date.get(),
        search: search.get(),
    });
    let filtered = Memo::new(move |_| filter.with(|f| history.with(|h| f.apply(h))));
    let fee_types = Signal::derive(move || {
        with_all("All Fee Types", history.with(|h| distinct(h.iter().map(|p| p.fee_type.as_str()))))
    });

    let reset = move |_| {
        fee_type.set(String::new());
        start_date.set(String::new());
        end_date.set(String::new());
        search.set(String::new());
    };

    view! {
        <div class="payment-history">
            <h1 class="h3 mb-4">"Payment History"</h1>
            <Alert notice=notice/>
            <div class="card shadow-sm mb-4">
                <div class="card-body row g-3 align-items-end">
                    <div class="col-md-3">
                        <SelectField label="Fee Type" value=fee_type options=fee_types/>
                    </div>
                    <div class="col-md-2">
                        <label class="form-label small text-muted">"From"</label>
                        <input
                            type="date"
                            class="form-control"
                            prop:value=move || start_date.get()
                            on:change=move |ev| start_date.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="col-md-2">
                        <label class="form-label small text-muted">"To"</label>
                        <input
                            type="date"
                            class="form-control"
                            prop:value=move || end_date.get()
                            on:change=move |ev| end_date.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="col-md-3">
                        <SearchField value=search placeholder="Receipt, fee type or reference"/>
                    </div>
                    <div class="col-md-2">
                        <button
                            type="button"
                            class="btn btn-outline-secondary w-100"
                            disabled=move || !filter.with(HistoryFilter::is_active)
                            on:click=reset
                        >
                            "Reset Filters"
                        </button>
                    </div>
                </div>
            </div>
            <Show when=move || !loading.get() fallback=|| view! { <Loader/> }>
                <div class="card shadow-sm">
                    <div class="card-header d-flex justify-content-between">
                        <span>{move || format!("{} payments", filtered.with(Vec::len))}</span>
                        <span class="fw-semibold">
                            "Total Paid: " {move || filtered.with(|p| format_currency(total_paid(p)))}
                        </span>
                    </div>
                    <div class="card-body">
                        <DataTable
                            columns=history_columns()
                            data=filtered
                            empty_message="No payment records found"
                        />
                    </div>
                </div>
            </Show>
        </div>
    }
}
