//! Pay one pending fee online.
//!
//! The form is a single [`PaymentForm`] signal; on submit it becomes a
//! [`PaymentRequest`] and runs through the same `check_payment` the server
//! applies, so the student sees field errors without a round trip.

#[cfg(test)]
#[path = "make_payment_test.rs"]
mod make_payment_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use portal::fixtures::BANKS;
use portal::format::{format_card_number, format_currency, format_date, format_expiry};
use portal::model::{CardDetails, FeeDetails, PaymentMethod, PaymentRequest};
use portal::validate::check_payment;

use crate::components::alert::{Alert, Notice};
use crate::components::badge::DueBadge;
use crate::components::loader::Loader;
use crate::net::api;
use crate::util::clock;
use crate::util::request::{scoped_generation, spawn_guarded};

use super::current_student_id;

/// Methods offered as tabs; DD is only taken at the counter.
pub const METHOD_TABS: [PaymentMethod; 4] =
    [PaymentMethod::Upi, PaymentMethod::Card, PaymentMethod::Netbanking, PaymentMethod::Cash];

#[must_use]
pub fn method_tab_label(method: PaymentMethod) -> &'static str {
    match method {
        PaymentMethod::Upi => "UPI",
        PaymentMethod::Card => "Credit/Debit Card",
        PaymentMethod::Netbanking => "Net Banking",
        PaymentMethod::Cash => "Cash",
        PaymentMethod::Dd => "Demand Draft",
    }
}

/// Raw form fields as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaymentForm {
    pub method: PaymentMethod,
    pub upi_id: String,
    pub card_number: String,
    pub card_holder: String,
    pub card_expiry: String,
    pub card_cvv: String,
    pub bank: String,
}

impl PaymentForm {
    /// Request carrying only the instrument the chosen method needs.
    #[must_use]
    pub fn request(&self, fee_id: u32) -> PaymentRequest {
        let mut request = PaymentRequest { fee_id, payment_method: self.method, ..PaymentRequest::default() };
        match self.method {
            PaymentMethod::Upi => request.upi_id = Some(self.upi_id.trim().to_owned()),
            PaymentMethod::Card => {
                request.card = Some(CardDetails {
                    number: self.card_number.chars().filter(char::is_ascii_digit).collect(),
                    holder: self.card_holder.trim().to_owned(),
                    expiry: self.card_expiry.trim().to_owned(),
                    cvv: self.card_cvv.trim().to_owned(),
                });
            }
            PaymentMethod::Netbanking => {
                request.bank = Some(self.bank.trim().to_owned()).filter(|b| !b.is_empty());
            }
            PaymentMethod::Cash | PaymentMethod::Dd => {}
        }
        request
    }
}

#[component]
fn TextInput(
    #[prop(into)] label: String,
    #[prop(into)] placeholder: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(default = "text")] kind: &'static str,
    #[prop(optional)] maxlength: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="mb-3">
            <label class="form-label">{label}</label>
            <input
                type=kind
                class="form-control"
                placeholder=placeholder
                maxlength=maxlength
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn MakePaymentPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();
    let load_generation = scoped_generation();
    let pay_generation = scoped_generation();

    let details = RwSignal::new(None::<FeeDetails>);
    let loading = RwSignal::new(true);
    let processing = RwSignal::new(false);
    let notice = RwSignal::new(None::<Notice>);
    let form = RwSignal::new(PaymentForm::default());

    let fee_id = Memo::new(move |_| params.with(|p| p.get("fee_id")).and_then(|raw| raw.parse::<u32>().ok()));

    Effect::new(move || {
        let Some(id) = fee_id.get() else {
            loading.set(false);
            notice.set(Some(Notice::error("Invalid fee reference")));
            return;
        };
        loading.set(true);
        spawn_guarded(&load_generation, async move { api::fee_details(id).await }, move |result| {
            loading.set(false);
            match result {
                Ok(fee) => details.set(Some(fee)),
                Err(message) => notice.set(Some(Notice::error(message))),
            }
        });
    });

    let pay = Callback::new(move |()| {
        let (Some(id), Some(student_id)) = (fee_id.get_untracked(), current_student_id()) else {
            return;
        };
        let request = form.with_untracked(|f| f.request(id));
        if let Err(error) = check_payment(&request, clock::today()) {
            notice.set(Some(Notice::error(error.to_string())));
            return;
        }
        notice.set(None);
        processing.set(true);
        let navigate = navigate.clone();
        spawn_guarded(
            &pay_generation,
            async move { api::make_payment(student_id, &request).await },
            move |result| {
                processing.set(false);
                match result {
                    Ok(confirmation) => {
                        navigate(&format!("/student/receipt/{}", confirmation.receipt_id), Default::default());
                    }
                    Err(message) => notice.set(Some(Notice::error(message))),
                }
            },
        );
    });

    let field = move |read: fn(&PaymentForm) -> String| Signal::derive(move || form.with(read));

    // Keyed on the method alone so typing does not rebuild the inputs.
    let method = Memo::new(move |_| form.with(|f| f.method));
    let method_form = move || match method.get() {
        PaymentMethod::Upi => view! {
            <TextInput
                label="UPI ID"
                placeholder="yourname@bank"
                value=field(|f| f.upi_id.clone())
                on_input=Callback::new(move |v: String| form.update(|f| f.upi_id = v))
            />
        }
        .into_any(),
        PaymentMethod::Card => view! {
            <TextInput
                label="Card Number"
                placeholder="1234 5678 9012 3456"
                maxlength="19"
                value=field(|f| f.card_number.clone())
                on_input=Callback::new(move |v: String| form.update(|f| f.card_number = format_card_number(&v)))
            />
            <TextInput
                label="Name on Card"
                placeholder="As printed on the card"
                value=field(|f| f.card_holder.clone())
                on_input=Callback::new(move |v: String| form.update(|f| f.card_holder = v))
            />
            <div class="row">
                <div class="col-6">
                    <TextInput
                        label="Expiry (MM/YY)"
                        placeholder="MM/YY"
                        maxlength="5"
                        value=field(|f| f.card_expiry.clone())
                        on_input=Callback::new(move |v: String| form.update(|f| f.card_expiry = format_expiry(&v)))
                    />
                </div>
                <div class="col-6">
                    <TextInput
                        label="CVV"
                        placeholder="123"
                        kind="password"
                        maxlength="4"
                        value=field(|f| f.card_cvv.clone())
                        on_input=Callback::new(move |v: String| form.update(|f| f.card_cvv = v))
                    />
                </div>
            </div>
        }
        .into_any(),
        PaymentMethod::Netbanking => view! {
            <div class="mb-3">
                <label class="form-label">"Select Bank"</label>
                <select
                    class="form-select"
                    prop:value=move || form.with(|f| f.bank.clone())
                    on:change=move |ev| {
                        let bank = event_target_value(&ev);
                        form.update(|f| f.bank = bank);
                    }
                >
                    <option value="">"Choose your bank"</option>
                    {BANKS.iter().map(|bank| view! { <option value=*bank>{*bank}</option> }).collect_view()}
                </select>
            </div>
        }
        .into_any(),
        PaymentMethod::Cash | PaymentMethod::Dd => view! {
            <div class="alert alert-info mb-3">
                "Cash and DD payments are accepted at the accounts office only. "
                "Please carry this fee reference when you visit."
            </div>
        }
        .into_any(),
    };

    let summary = move || {
        details.get().map(|d| {
            let total = d.total_payable();
            view! {
                <div class="card shadow-sm">
                    <div class="card-header fw-semibold">"Payment Summary"</div>
                    <div class="card-body">
                        <h5 class="mb-1">{d.fee.fee_type.clone()}</h5>
                        <p class="text-muted small">{d.fee.description.clone()}</p>
                        <div class="d-flex justify-content-between small mb-3">
                            <span>"Due: " {format_date(&d.fee.due_date)}</span>
                            <DueBadge due=d.fee.due_date.clone()/>
                        </div>
                        <table class="table table-sm mb-0">
                            <tbody>
                                <tr>
                                    <td>"Fee Amount"</td>
                                    <td class="text-end">{format_currency(d.fee.amount)}</td>
                                </tr>
                                <tr>
                                    <td>"Convenience Fee"</td>
                                    <td class="text-end">{format_currency(d.convenience_fee)}</td>
                                </tr>
                                <tr>
                                    <td>"Late Charge"</td>
                                    <td class="text-end">{format_currency(d.fee.late_charge)}</td>
                                </tr>
                                <tr class="fw-bold">
                                    <td>"Total Payable"</td>
                                    <td class="text-end">{format_currency(total)}</td>
                                </tr>
                            </tbody>
                        </table>
                    </div>
                </div>
            }
        })
    };

    view! {
        <div class="make-payment">
            <h1 class="h3 mb-4">"Make Payment"</h1>
            <Alert notice=notice auto_dismiss=false/>
            <Show when=move || !loading.get() fallback=|| view! { <Loader text="Loading fee details..."/> }>
                <Show
                    when=move || details.with(Option::is_some)
                    fallback=|| {
                        view! {
                            <a href="/student/pending-payments" class="btn btn-outline-secondary">
                                "Back to Pending Payments"
                            </a>
                        }
                    }
                >
                    <div class="row g-4">
                        <div class="col-lg-7">
                            <div class="card shadow-sm">
                                <div class="card-header">
                                    <ul class="nav nav-tabs card-header-tabs">
                                        {METHOD_TABS
                                            .into_iter()
                                            .map(|tab| {
                                                view! {
                                                    <li class="nav-item">
                                                        <button
                                                            type="button"
                                                            class=move || {
                                                                if method.get() == tab {
                                                                    "nav-link active"
                                                                } else {
                                                                    "nav-link"
                                                                }
                                                            }
                                                            on:click=move |_| form.update(|f| f.method = tab)
                                                        >
                                                            {method_tab_label(tab)}
                                                        </button>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                                <form
                                    class="card-body"
                                    novalidate
                                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                                        ev.prevent_default();
                                        pay.run(());
                                    }
                                >
                                    {method_form}
                                    <button
                                        type="submit"
                                        class="btn btn-primary w-100 py-2"
                                        disabled=move || processing.get() || !method.get().is_online()
                                    >
                                        {move || {
                                            if processing.get() {
                                                "Processing...".to_owned()
                                            } else {
                                                details
                                                    .with(|d| d.as_ref().map(FeeDetails::total_payable))
                                                    .map(|t| format!("Pay {}", format_currency(t)))
                                                    .unwrap_or_default()
                                            }
                                        }}
                                    </button>
                                </form>
                            </div>
                        </div>
                        <div class="col-lg-5">{summary}</div>
                    </div>
                </Show>
            </Show>
        </div>
    }
}
