//! Printable payment receipt.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use portal::format::{format_currency, format_date};
use portal::model::Receipt;

use crate::components::alert::{Alert, Notice};
use crate::components::badge::PaymentBadge;
use crate::components::loader::Loader;
use crate::net::api;
use crate::util::request::{scoped_generation, spawn_guarded};

fn print_page() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.print();
        }
    }
}

#[component]
fn ReceiptRow(#[prop(into)] label: String, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <tr>
            <th class="text-muted fw-normal w-50">{label}</th>
            <td>{value}</td>
        </tr>
    }
}

#[component]
pub fn ReceiptPage() -> impl IntoView {
    let params = use_params_map();
    let generation = scoped_generation();

    let receipt = RwSignal::new(None::<Receipt>);
    let loading = RwSignal::new(true);
    let notice = RwSignal::new(None::<Notice>);

    let receipt_id = Memo::new(move |_| params.with(|p| p.get("id")).unwrap_or_default());

    Effect::new(move || {
        let id = receipt_id.get();
        loading.set(true);
        spawn_guarded(&generation, async move { api::receipt(&id).await }, move |result| {
            loading.set(false);
            match result {
                Ok(found) => receipt.set(Some(found)),
                Err(message) => {
                    receipt.set(None);
                    notice.set(Some(Notice::error(message)));
                }
            }
        });
    });

    let body = move || {
        receipt.get().map(|r| {
            view! {
                <div class="card shadow-sm receipt">
                    <div class="card-body p-4">
                        <div class="text-center border-bottom pb-3 mb-4">
                            <h2 class="h4 fw-bold mb-1">"SVIT College"</h2>
                            <p class="text-muted mb-1">"Andhra Pradesh"</p>
                            <h3 class="h5 mb-0">"Fee Payment Receipt"</h3>
                        </div>
                        <div class="d-flex justify-content-between mb-4">
                            <div>
                                <div class="text-muted small">"Receipt No."</div>
                                <div class="fw-semibold">{r.id.clone()}</div>
                            </div>
                            <div class="text-end">
                                <div class="text-muted small">"Date"</div>
                                <div class="fw-semibold">{format_date(&r.paid_date)}</div>
                            </div>
                        </div>
                        <table class="table table-borderless mb-4">
                            <tbody>
                                <ReceiptRow label="Student Name" value=r.student_name.clone()/>
                                <ReceiptRow label="Roll Number" value=r.roll_number.clone()/>
                                <ReceiptRow label="Academic Year" value=r.academic_year.clone()/>
                                <ReceiptRow label="Fee Type" value=r.fee_type.clone()/>
                                <ReceiptRow label="Semester" value=r.semester.to_string()/>
                                <ReceiptRow label="Payment Mode" value=r.payment_mode.clone()/>
                                <ReceiptRow label="Transaction ID" value=r.transaction_id.clone()/>
                            </tbody>
                        </table>
                        <table class="table mb-4">
                            <tbody>
                                <ReceiptRow label="Fee Amount" value=format_currency(r.amount)/>
                                <ReceiptRow label="Convenience Fee" value=format_currency(r.convenience_fee)/>
                                <ReceiptRow label="Late Charge" value=format_currency(r.late_charge)/>
                                <tr class="fw-bold">
                                    <th>"Total Paid"</th>
                                    <td>{format_currency(r.total_amount)}</td>
                                </tr>
                            </tbody>
                        </table>
                        <div class="d-flex justify-content-between align-items-center">
                            <PaymentBadge status=r.payment_status/>
                            <small class="text-muted">"This is a computer generated receipt."</small>
                        </div>
                    </div>
                </div>
            }
        })
    };

    view! {
        <div class="receipt-page">
            <div class="d-flex justify-content-between align-items-center mb-4 d-print-none">
                <h1 class="h3 mb-0">"Payment Receipt"</h1>
                <div class="d-flex gap-2">
                    <a href="/student/payment-history" class="btn btn-outline-secondary">"Back to History"</a>
                    <button
                        type="button"
                        class="btn btn-primary"
                        disabled=move || receipt.with(Option::is_none)
                        on:click=move |_| print_page()
                    >
                        "Print Receipt"
                    </button>
                </div>
            </div>
            <Alert notice=notice auto_dismiss=false/>
            <Show when=move || !loading.get() fallback=|| view! { <Loader text="Loading receipt..."/> }>
                {body}
            </Show>
        </div>
    }
}
