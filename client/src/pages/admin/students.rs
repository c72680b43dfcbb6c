//! Admin student roster: server-side filters, selection, fee reminders.
//!
//! DESIGN
//! ======
//! Every filter change re-queries the repository through one request
//! generation, so a slow answer for an old filter never replaces the rows of
//! a newer one. Selection lives in the table; the page only mirrors the keys
//! it reports so the reminder action knows whom to address.

#[cfg(test)]
#[path = "students_test.rs"]
mod students_test;

use grid::{Column, RowKey};
use leptos::prelude::*;
use portal::fixtures::{BRANCHES, SEMESTERS};
use portal::format::{calculate_percentage, format_currency, format_date};
use portal::model::{ReminderRequest, StudentQuery, StudentRecord, StudentStatus};

use crate::components::alert::{Alert, Notice};
use crate::components::card::Card;
use crate::components::data_table::{DataTable, TableColumn};
use crate::components::field::{SearchField, SelectField, with_all};
use crate::net::api;
use crate::util::request::{scoped_generation, spawn_guarded};

pub const DEFAULT_REMINDER: &str = "Dear Student,\n\nThis is a reminder that you have pending fee payments. \
Please log in to the student portal and complete your payment at your earliest convenience.\n\n\
Regards,\nSVIT College Accounts Department";

// =============================================================================
// PURE HELPERS
// =============================================================================

/// Query for the current filter inputs; blank inputs do not filter.
#[must_use]
pub fn build_query(branch: &str, semester: &str, status: &str, search: &str) -> StudentQuery {
    let keep = |v: &str| Some(v.trim().to_owned()).filter(|v| !v.is_empty());
    StudentQuery {
        branch: keep(branch),
        semester: keep(semester),
        status: StudentStatus::parse(status),
        search: keep(search),
    }
}

/// Selected row keys as student ids; keys that are not ids are dropped.
#[must_use]
pub fn selected_ids(keys: &[RowKey]) -> Vec<u32> {
    keys.iter().filter_map(|k| k.parse().ok()).collect()
}

/// Totals over the listed students.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RosterSummary {
    pub students: usize,
    pub fully_paid: usize,
    pub with_dues: usize,
    pub total_fees: u64,
    pub collected: u64,
    pub outstanding: u64,
}

impl RosterSummary {
    #[must_use]
    pub fn tally(students: &[StudentRecord]) -> Self {
        students.iter().fold(Self::default(), |mut acc, s| {
            acc.students += 1;
            if s.pending_fees == 0 {
                acc.fully_paid += 1;
            } else {
                acc.with_dues += 1;
            }
            acc.total_fees += s.total_fees;
            acc.collected += s.paid_fees;
            acc.outstanding += s.pending_fees;
            acc
        })
    }
}

pub fn student_columns() -> Vec<TableColumn<StudentRecord>> {
    vec![
        TableColumn::new(Column::new("name").header("Student Name")).render(|s: &StudentRecord| {
            let initial = s.name.chars().next().map(String::from).unwrap_or_default();
            view! {
                <div class="d-flex align-items-center">
                    <div class="avatar-circle me-2">{initial}</div>
                    <div>
                        <div class="fw-medium">{s.name.clone()}</div>
                        <div class="small text-muted">{s.roll_number.clone()}</div>
                    </div>
                </div>
            }
            .into_any()
        }),
        Column::new("branch").header("Branch").into(),
        Column::new("semester").header("Semester").into(),
        TableColumn::new(Column::new("email").header("Contact").sortable(false)).render(|s: &StudentRecord| {
            view! {
                <div class="small">{s.email.clone()}</div>
                <div class="small text-muted">{s.phone.clone()}</div>
            }
            .into_any()
        }),
        TableColumn::new(Column::new("pendingFees").header("Fee Status")).render(|s: &StudentRecord| {
            let pending_class = if s.pending_fees > 0 { "text-danger small" } else { "text-muted small" };
            let paid = calculate_percentage(s.paid_fees, s.total_fees);
            view! {
                <div class="d-flex justify-content-between">
                    <span class="small">"Paid:"</span>
                    <span class="text-success small">{format_currency(s.paid_fees)}</span>
                </div>
                <div class="d-flex justify-content-between">
                    <span class="small">"Pending:"</span>
                    <span class=pending_class>{format_currency(s.pending_fees)}</span>
                </div>
                <div class="progress progress-thin mt-1">
                    <div class="progress-bar bg-success" style=format!("width: {paid}%")></div>
                </div>
            }
            .into_any()
        }),
        Column::new("lastPaymentDate")
            .header("Last Payment")
            .format(|s: &StudentRecord| {
                if s.last_payment_date.is_empty() { "-".to_owned() } else { format_date(&s.last_payment_date) }
            })
            .into(),
        TableColumn::new(Column::new("status").header("Status").sortable(false)).render(|s: &StudentRecord| {
            if s.pending_fees > 0 {
                view! { <span class="badge text-bg-warning">"Dues Pending"</span> }.into_any()
            } else {
                view! { <span class="badge text-bg-success">"Fully Paid"</span> }.into_any()
            }
        }),
    ]
}

// =============================================================================
// COMPONENTS
// =============================================================================

#[component]
fn SummaryLine(#[prop(into)] label: String, value: String, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <div class="d-flex justify-content-between mb-2">
            <span class="text-muted">{label}</span>
            <span class=format!("fw-medium {class}")>{value}</span>
        </div>
    }
}

#[component]
pub fn StudentListPage() -> impl IntoView {
    let list_generation = scoped_generation();
    let detail_generation = scoped_generation();
    let reminder_generation = scoped_generation();

    let students = RwSignal::new(Vec::<StudentRecord>::new());
    let loading = RwSignal::new(true);
    let notice = RwSignal::new(None::<Notice>);

    let branch = RwSignal::new(String::new());
    let semester = RwSignal::new(String::new());
    let status = RwSignal::new(String::new());
    let search = RwSignal::new(String::new());

    let selected = RwSignal::new(Vec::<RowKey>::new());
    let composing = RwSignal::new(false);
    let message = RwSignal::new(String::new());
    let sending = RwSignal::new(false);

    let detail = RwSignal::new(None::<StudentRecord>);

    Effect::new(move || {
        let query = build_query(&branch.get(), &semester.get(), &status.get(), &search.get());
        loading.set(true);
        spawn_guarded(&list_generation, async move { api::students(&query).await }, move |result| {
            loading.set(false);
            match result {
                Ok(list) => students.set(list),
                Err(message) => notice.set(Some(Notice::error(message))),
            }
        });
    });

    let show_details = Callback::new(move |student: StudentRecord| {
        spawn_guarded(&detail_generation, async move { api::student_details(student.id).await }, move |result| {
            match result {
                Ok(found) => detail.set(Some(found)),
                Err(message) => notice.set(Some(Notice::error(message))),
            }
        });
    });

    let send = Callback::new(move |()| {
        let request = ReminderRequest {
            student_ids: selected_ids(&selected.get_untracked()),
            message: message.get_untracked(),
        };
        sending.set(true);
        spawn_guarded(
            &reminder_generation,
            async move { api::send_reminders(&request).await },
            move |result| {
                sending.set(false);
                match result {
                    Ok(done) => {
                        composing.set(false);
                        notice.set(Some(Notice::success(done.message)));
                    }
                    Err(message) => notice.set(Some(Notice::error(message))),
                }
            },
        );
    });

    let reset = move |_| {
        branch.set(String::new());
        semester.set(String::new());
        status.set(String::new());
        search.set(String::new());
    };

    let summary = Memo::new(move |_| students.with(|s| RosterSummary::tally(s)));
    let collected_pct = move || summary.with(|s| calculate_percentage(s.collected, s.total_fees));
    let branch_options = with_all("All Branches", BRANCHES);
    let semester_options = with_all("All Semesters", SEMESTERS.iter().take(8).copied());
    let status_options = vec![
        (String::new(), "All Statuses".to_owned()),
        (StudentStatus::Paid.as_str().to_owned(), "Fully Paid".to_owned()),
        (StudentStatus::Pending.as_str().to_owned(), "Dues Pending".to_owned()),
    ];

    let detail_panel = move || {
        detail.get().map(|s| {
            view! {
                <div class="card shadow-sm mb-4 border-primary">
                    <div class="card-header d-flex justify-content-between align-items-center">
                        <span class="fw-semibold">{format!("{} ({})", s.name, s.roll_number)}</span>
                        <button type="button" class="btn-close" aria-label="Close" on:click=move |_| detail.set(None)></button>
                    </div>
                    <div class="card-body row">
                        <div class="col-md-4">
                            <SummaryLine label="Branch" value=s.branch.clone()/>
                            <SummaryLine label="Semester" value=s.semester.to_string()/>
                        </div>
                        <div class="col-md-4">
                            <SummaryLine label="Email" value=s.email.clone()/>
                            <SummaryLine label="Phone" value=s.phone.clone()/>
                        </div>
                        <div class="col-md-4">
                            <SummaryLine label="Total Fees" value=format_currency(s.total_fees)/>
                            <SummaryLine label="Paid" value=format_currency(s.paid_fees) class="text-success"/>
                            <SummaryLine label="Pending" value=format_currency(s.pending_fees) class="text-danger"/>
                        </div>
                    </div>
                </div>
            }
        })
    };

    view! {
        <div class="student-list-page">
            <div class="d-flex justify-content-between align-items-center mb-4">
                <h1 class="h3 mb-0">"Student Management"</h1>
                <button
                    type="button"
                    class="btn btn-warning"
                    disabled=move || selected.with(Vec::is_empty)
                    on:click=move |_| {
                        message.set(DEFAULT_REMINDER.to_owned());
                        composing.set(true);
                    }
                >
                    {move || format!("Send Reminder ({})", selected.with(Vec::len))}
                </button>
            </div>
            <Alert notice=notice/>
            <Show when=move || composing.get()>
                <div class="card shadow-sm mb-4">
                    <div class="card-header fw-semibold">"Send Fee Payment Reminder"</div>
                    <form
                        class="card-body"
                        on:submit=move |ev: leptos::ev::SubmitEvent| {
                            ev.prevent_default();
                            send.run(());
                        }
                    >
                        <p>
                            "You are about to send a payment reminder to "
                            <strong>{move || selected.with(Vec::len)}</strong>
                            " selected students."
                        </p>
                        <label class="form-label">"Reminder Message"</label>
                        <textarea
                            class="form-control mb-3"
                            rows="6"
                            prop:value=move || message.get()
                            on:input=move |ev| message.set(event_target_value(&ev))
                        ></textarea>
                        <div class="d-flex gap-2">
                            <button
                                type="submit"
                                class="btn btn-primary"
                                disabled=move || sending.get() || message.with(|m| m.trim().is_empty())
                            >
                                {move || if sending.get() { "Sending..." } else { "Send Reminders" }}
                            </button>
                            <button type="button" class="btn btn-outline-secondary" on:click=move |_| composing.set(false)>
                                "Cancel"
                            </button>
                        </div>
                    </form>
                </div>
            </Show>
            {detail_panel}
            <div class="card shadow-sm mb-4">
                <div class="card-body row g-3 align-items-end">
                    <div class="col-md-3">
                        <SelectField label="Branch" value=branch options=branch_options/>
                    </div>
                    <div class="col-md-2">
                        <SelectField label="Semester" value=semester options=semester_options/>
                    </div>
                    <div class="col-md-2">
                        <SelectField label="Status" value=status options=status_options/>
                    </div>
                    <div class="col-md-3">
                        <SearchField value=search placeholder="Name, roll number or email"/>
                    </div>
                    <div class="col-md-2">
                        <button type="button" class="btn btn-outline-secondary w-100" on:click=reset>
                            "Reset"
                        </button>
                    </div>
                </div>
            </div>
            <div class="row g-4">
                <div class="col-xl-9">
                    <Card title="Student List">
                        <Show when=move || loading.get()>
                            <div class="small text-muted mb-2">"Refreshing..."</div>
                        </Show>
                        <DataTable
                            columns=student_columns()
                            data=students
                            selectable=true
                            empty_message="No students found"
                            on_row_click=show_details
                            on_selection_change=Callback::new(move |keys: Vec<RowKey>| selected.set(keys))
                        />
                    </Card>
                </div>
                <div class="col-xl-3">
                    <Card title="Payment Summary">
                        {move || {
                            let s = summary.get();
                            view! {
                                <SummaryLine label="Total Students" value=s.students.to_string()/>
                                <SummaryLine label="Fully Paid" value=s.fully_paid.to_string() class="text-success"/>
                                <SummaryLine label="Dues Pending" value=s.with_dues.to_string() class="text-danger"/>
                                <hr/>
                                <SummaryLine label="Total Fee Amount" value=format_currency(s.total_fees)/>
                                <SummaryLine label="Amount Collected" value=format_currency(s.collected) class="text-success"/>
                                <SummaryLine label="Amount Pending" value=format_currency(s.outstanding) class="text-danger"/>
                            }
                        }}
                        <div class="progress mt-3">
                            <div class="progress-bar bg-success" style=move || format!("width: {}%", collected_pct())></div>
                        </div>
                    </Card>
                </div>
            </div>
        </div>
    }
}
