//! Admin settings editor.
//!
//! Edits a draft copy of the shared [`PortalSettings`]; the context only
//! changes once the draft validates and is saved, so every table keeps its
//! page size until then.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use grid::page::DEFAULT_ROWS_PER_PAGE_OPTIONS;
use leptos::prelude::*;

use crate::components::alert::{Alert, Notice};
use crate::components::field::BoundSelect;
use crate::state::settings::{PortalSettings, Rounding};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SettingsTab {
    #[default]
    Notifications,
    Fees,
    System,
}

impl SettingsTab {
    pub const ALL: [Self; 3] = [Self::Notifications, Self::Fees, Self::System];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Notifications => "Notifications",
            Self::Fees => "Fee Configuration",
            Self::System => "System",
        }
    }
}

/// Whole number from a number input; anything unparsable is zero so the
/// range checks in [`PortalSettings::validate`] report it.
#[must_use]
pub fn parse_count(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

#[component]
fn Switch(
    #[prop(into)] label: String,
    #[prop(into)] hint: String,
    #[prop(into)] checked: Signal<bool>,
    on_toggle: Callback<bool>,
    id: &'static str,
) -> impl IntoView {
    view! {
        <div class="d-flex justify-content-between align-items-center py-2 border-bottom">
            <div>
                <label class="fw-medium mb-0" for=id>{label}</label>
                <div class="small text-muted">{hint}</div>
            </div>
            <div class="form-check form-switch mb-0">
                <input
                    id=id
                    type="checkbox"
                    class="form-check-input"
                    prop:checked=move || checked.get()
                    on:change=move |ev| on_toggle.run(event_target_checked(&ev))
                />
            </div>
        </div>
    }
}

#[component]
fn CountInput(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<u32>,
    on_input: Callback<u32>,
    suffix: &'static str,
) -> impl IntoView {
    view! {
        <div class="col-md-6 mb-3">
            <label class="form-label fw-medium">{label}</label>
            <div class="input-group">
                <input
                    type="number"
                    min="0"
                    class="form-control"
                    prop:value=move || value.get().to_string()
                    on:input=move |ev| on_input.run(parse_count(&event_target_value(&ev)))
                />
                <span class="input-group-text">{suffix}</span>
            </div>
        </div>
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let settings = expect_context::<RwSignal<PortalSettings>>();
    let draft = RwSignal::new(settings.get_untracked());
    let tab = RwSignal::new(SettingsTab::default());
    let notice = RwSignal::new(None::<Notice>);
    let confirming_reset = RwSignal::new(false);

    let dirty = Memo::new(move |_| draft.with(|d| settings.with(|s| d != s)));

    let save = move |_| {
        let candidate = draft.get_untracked();
        match candidate.save() {
            Ok(()) => {
                settings.set(candidate);
                notice.set(Some(Notice::success("Settings saved successfully")));
            }
            Err(message) => notice.set(Some(Notice::error(message))),
        }
    };

    let reset = move |_| {
        let defaults = PortalSettings::reset();
        draft.set(defaults.clone());
        settings.set(defaults);
        confirming_reset.set(false);
        notice.set(Some(Notice::info("Settings have been reset to default values")));
    };

    let toggle = move |read: fn(&PortalSettings) -> bool, write: fn(&mut PortalSettings, bool)| {
        (
            Signal::derive(move || draft.with(read)),
            Callback::new(move |on: bool| draft.update(|d| write(d, on))),
        )
    };

    let notifications = move || {
        let (email_receipts, set_email_receipts) =
            toggle(|s| s.notifications.email_receipts, |s, v| s.notifications.email_receipts = v);
        let (email_reminders, set_email_reminders) =
            toggle(|s| s.notifications.email_reminders, |s, v| s.notifications.email_reminders = v);
        let (email_updates, set_email_updates) =
            toggle(|s| s.notifications.email_fee_updates, |s, v| s.notifications.email_fee_updates = v);
        let (email_system, set_email_system) =
            toggle(|s| s.notifications.email_system, |s, v| s.notifications.email_system = v);
        let (sms_receipts, set_sms_receipts) =
            toggle(|s| s.notifications.sms_receipts, |s, v| s.notifications.sms_receipts = v);
        let (sms_reminders, set_sms_reminders) =
            toggle(|s| s.notifications.sms_reminders, |s, v| s.notifications.sms_reminders = v);
        let (sms_updates, set_sms_updates) =
            toggle(|s| s.notifications.sms_fee_updates, |s, v| s.notifications.sms_fee_updates = v);
        view! {
            <h6 class="fw-bold mb-2">"Email Notifications"</h6>
            <Switch id="email-receipts" label="Payment Receipts" hint="Email a receipt after every successful payment" checked=email_receipts on_toggle=set_email_receipts/>
            <Switch id="email-reminders" label="Payment Reminders" hint="Email reminders before fees fall due" checked=email_reminders on_toggle=set_email_reminders/>
            <Switch id="email-updates" label="Fee Updates" hint="Email students when a fee structure changes" checked=email_updates on_toggle=set_email_updates/>
            <Switch id="email-system" label="System Notifications" hint="Email administrators about maintenance and outages" checked=email_system on_toggle=set_email_system/>
            <h6 class="fw-bold mt-4 mb-2">"SMS Notifications"</h6>
            <Switch id="sms-receipts" label="Payment Receipts" hint="Text a confirmation after every successful payment" checked=sms_receipts on_toggle=set_sms_receipts/>
            <Switch id="sms-reminders" label="Payment Reminders" hint="Text reminders before fees fall due" checked=sms_reminders on_toggle=set_sms_reminders/>
            <Switch id="sms-updates" label="Fee Updates" hint="Text students when a fee structure changes" checked=sms_updates on_toggle=set_sms_updates/>
        }
        .into_any()
    };

    let fees = move || {
        let (partial, set_partial) =
            toggle(|s| s.fees.allow_partial_payment, |s, v| s.fees.allow_partial_payment = v);
        let (auto_late, set_auto_late) =
            toggle(|s| s.fees.auto_apply_late_charge, |s, v| s.fees.auto_apply_late_charge = v);
        let rounding_options = Rounding::ALL.iter().map(|r| (r.as_str().to_owned(), r.label().to_owned())).collect::<Vec<_>>();
        view! {
            <Switch id="partial" label="Allow Partial Payment" hint="Students may pay part of a fee" checked=partial on_toggle=set_partial/>
            <Switch id="auto-late" label="Auto Apply Late Charge" hint="Add the late charge once the grace period ends" checked=auto_late on_toggle=set_auto_late/>
            <div class="row mt-3">
                <CountInput
                    label="Late Charge Percentage"
                    suffix="%"
                    value=Signal::derive(move || draft.with(|d| d.fees.late_charge_percentage))
                    on_input=Callback::new(move |v: u32| draft.update(|d| d.fees.late_charge_percentage = v))
                />
                <CountInput
                    label="Grace Period"
                    suffix="days"
                    value=Signal::derive(move || draft.with(|d| d.fees.late_charge_grace_days))
                    on_input=Callback::new(move |v: u32| draft.update(|d| d.fees.late_charge_grace_days = v))
                />
                <BoundSelect
                    label="Fee Rounding Method"
                    value=Signal::derive(move || draft.with(|d| d.fees.rounding.as_str().to_owned()))
                    options=rounding_options
                    on_change=Callback::new(move |v: String| {
                        if let Some(rounding) = Rounding::parse(&v) {
                            draft.update(|d| d.fees.rounding = rounding);
                        }
                    })
                />
            </div>
        }
        .into_any()
    };

    let system = move || {
        let (multiple, set_multiple) =
            toggle(|s| s.system.allow_multiple_logins, |s, v| s.system.allow_multiple_logins = v);
        let (audit, set_audit) = toggle(|s| s.system.enable_audit_log, |s, v| s.system.enable_audit_log = v);
        let page_sizes = DEFAULT_ROWS_PER_PAGE_OPTIONS.iter().map(|n| (n.to_string(), format!("{n} rows"))).collect::<Vec<_>>();
        view! {
            <div class="row">
                <CountInput
                    label="Session Timeout"
                    suffix="minutes"
                    value=Signal::derive(move || draft.with(|d| d.system.session_timeout))
                    on_input=Callback::new(move |v: u32| draft.update(|d| d.system.session_timeout = v))
                />
                <CountInput
                    label="Data Retention Period"
                    suffix="months"
                    value=Signal::derive(move || draft.with(|d| d.system.data_retention))
                    on_input=Callback::new(move |v: u32| draft.update(|d| d.system.data_retention = v))
                />
                <BoundSelect
                    label="Default Page Size"
                    value=Signal::derive(move || draft.with(|d| d.system.rows_per_page.to_string()))
                    options=page_sizes
                    on_change=Callback::new(move |v: String| {
                        if let Ok(rows) = v.parse() {
                            draft.update(|d| d.system.rows_per_page = rows);
                        }
                    })
                />
            </div>
            <Switch id="multi-login" label="Allow Multiple Logins" hint="Let one account sign in from several devices" checked=multiple on_toggle=set_multiple/>
            <Switch id="audit" label="Enable Audit Log" hint="Record administrator changes" checked=audit on_toggle=set_audit/>
        }
        .into_any()
    };

    let tabs = SettingsTab::ALL
        .iter()
        .map(|&entry| {
            view! {
                <button
                    type="button"
                    class=move || if tab.get() == entry { "list-group-item list-group-item-action active" } else { "list-group-item list-group-item-action" }
                    on:click=move |_| tab.set(entry)
                >
                    {entry.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="settings-page">
            <div class="d-flex justify-content-between align-items-center mb-4">
                <h1 class="h3 mb-0">"Settings"</h1>
                <div class="d-flex gap-2">
                    <button type="button" class="btn btn-outline-danger" on:click=move |_| confirming_reset.set(true)>
                        "Reset to Defaults"
                    </button>
                    <button type="button" class="btn btn-primary" disabled=move || !dirty.get() on:click=save>
                        "Save Changes"
                    </button>
                </div>
            </div>
            <Alert notice=notice/>
            <Show when=move || confirming_reset.get()>
                <div class="alert alert-warning d-flex justify-content-between align-items-center">
                    <span>"Are you sure you want to reset all settings to default values?"</span>
                    <div class="d-flex gap-2">
                        <button type="button" class="btn btn-sm btn-outline-secondary" on:click=move |_| confirming_reset.set(false)>
                            "Cancel"
                        </button>
                        <button type="button" class="btn btn-sm btn-danger" on:click=reset>"Reset"</button>
                    </div>
                </div>
            </Show>
            <div class="row g-4">
                <div class="col-lg-3">
                    <div class="list-group shadow-sm">{tabs}</div>
                </div>
                <div class="col-lg-9">
                    <div class="card shadow-sm">
                        <div class="card-header fw-semibold">{move || tab.get().label()}</div>
                        <div class="card-body">
                            {move || match tab.get() {
                                SettingsTab::Notifications => notifications(),
                                SettingsTab::Fees => fees(),
                                SettingsTab::System => system(),
                            }}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
