//! Admin fee-structure catalogue: filter, add, edit, delete.

#[cfg(test)]
#[path = "fees_management_test.rs"]
mod fees_management_test;

use grid::Column;
use leptos::prelude::*;
use portal::fixtures::{BRANCHES, FEE_TYPES, SEMESTERS};
use portal::format::{format_currency, format_date};
use portal::model::{ALL, FeeStructure, FeeStructureDraft, FeeStructureQuery};
use portal::validate::check_fee_structure;

use crate::components::alert::{Alert, Notice};
use crate::components::data_table::{DataTable, TableColumn};
use crate::components::field::{BoundSelect, SelectField, with_all};
use crate::components::loader::Loader;
use crate::net::api;
use crate::util::clock;
use crate::util::request::{scoped_generation, spawn_guarded};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit(u32),
}

impl FormMode {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Add => "Add New Fee",
            Self::Edit(_) => "Edit Fee Structure",
        }
    }
}

// =============================================================================
// PURE HELPERS
// =============================================================================

/// Query for the list filters. `active` is `"active"`, `"inactive"`, or
/// anything else for both.
#[must_use]
pub fn fee_query(fee_type: &str, branch: &str, semester: &str, active: &str) -> FeeStructureQuery {
    let keep = |v: &str| Some(v.to_owned()).filter(|v| !v.is_empty());
    FeeStructureQuery {
        fee_type: keep(fee_type),
        branch: keep(branch),
        semester: keep(semester),
        active: match active {
            "active" => Some(true),
            "inactive" => Some(false),
            _ => None,
        },
    }
}

/// Whole rupees from a number input; anything unparsable is zero.
#[must_use]
pub fn parse_amount(raw: &str) -> u64 {
    raw.trim().parse().unwrap_or(0)
}

/// Choices for a draft's branch or semester, led by the `All` wildcard.
#[must_use]
pub fn scope_options(values: &[&str]) -> Vec<(String, String)> {
    std::iter::once(ALL)
        .chain(values.iter().copied())
        .map(|v| (v.to_owned(), v.to_owned()))
        .collect()
}

pub fn fee_columns(on_edit: Callback<FeeStructure>, on_delete: Callback<FeeStructure>) -> Vec<TableColumn<FeeStructure>> {
    vec![
        TableColumn::new(Column::new("type").header("Fee Type")).render(|f: &FeeStructure| {
            view! {
                <div class="fw-medium">{f.fee_type.clone()}</div>
                <small class="text-muted">{f.description.clone()}</small>
            }
            .into_any()
        }),
        Column::new("branch").header("Branch").into(),
        Column::new("semester").header("Semester").into(),
        Column::new("amount")
            .header("Amount")
            .cell_class("fw-medium")
            .format(|f: &FeeStructure| format_currency(f.amount))
            .into(),
        Column::new("dueDate").header("Due Date").format(|f: &FeeStructure| format_date(&f.due_date)).into(),
        Column::new("lateCharge").header("Late Charge").format(|f: &FeeStructure| format_currency(f.late_charge)).into(),
        TableColumn::new(Column::new("isActive").header("Status")).render(|f: &FeeStructure| {
            if f.is_active {
                view! { <span class="badge text-bg-success">"Active"</span> }.into_any()
            } else {
                view! { <span class="badge text-bg-secondary">"Inactive"</span> }.into_any()
            }
        }),
        Column::new("createdOn").header("Created On").format(|f: &FeeStructure| format_date(&f.created_on)).into(),
        TableColumn::new(Column::new("actions").header("Actions").sortable(false)).render(move |f: &FeeStructure| {
            let edit = f.clone();
            let delete = f.clone();
            view! {
                <div class="d-flex gap-1">
                    <button
                        type="button"
                        class="btn btn-sm btn-outline-primary"
                        title="Edit"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_edit.run(edit.clone());
                        }
                    >
                        "Edit"
                    </button>
                    <button
                        type="button"
                        class="btn btn-sm btn-outline-danger"
                        title="Delete"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_delete.run(delete.clone());
                        }
                    >
                        "Delete"
                    </button>
                </div>
            }
            .into_any()
        }),
    ]
}

// =============================================================================
// COMPONENTS
// =============================================================================

#[component]
fn DraftInput(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(default = "text")] kind: &'static str,
) -> impl IntoView {
    view! {
        <div class="col-md-6 mb-3">
            <label class="form-label">{label}</label>
            <input
                type=kind
                class="form-control"
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn FeesManagementPage() -> impl IntoView {
    let list_generation = scoped_generation();
    let save_generation = scoped_generation();
    let delete_generation = scoped_generation();

    let fees = RwSignal::new(Vec::<FeeStructure>::new());
    let loading = RwSignal::new(true);
    let notice = RwSignal::new(None::<Notice>);
    let reload = RwSignal::new(0_u32);

    let fee_type = RwSignal::new(String::new());
    let branch = RwSignal::new(String::new());
    let semester = RwSignal::new(String::new());
    let active = RwSignal::new(String::new());

    let mode = RwSignal::new(None::<FormMode>);
    let draft = RwSignal::new(FeeStructureDraft::default());
    let saving = RwSignal::new(false);
    let pending_delete = RwSignal::new(None::<FeeStructure>);

    Effect::new(move || {
        reload.track();
        let query = fee_query(&fee_type.get(), &branch.get(), &semester.get(), &active.get());
        spawn_guarded(&list_generation, async move { api::fee_structures(&query).await }, move |result| {
            loading.set(false);
            match result {
                Ok(list) => fees.set(list),
                Err(message) => notice.set(Some(Notice::error(message))),
            }
        });
    });

    let open_add = move |_| {
        draft.set(FeeStructureDraft::default());
        mode.set(Some(FormMode::Add));
    };
    let open_edit = Callback::new(move |fee: FeeStructure| {
        draft.set(FeeStructureDraft::from(&fee));
        mode.set(Some(FormMode::Edit(fee.id)));
    });
    let ask_delete = Callback::new(move |fee: FeeStructure| pending_delete.set(Some(fee)));

    let save = Callback::new(move |()| {
        let Some(current) = mode.get_untracked() else {
            return;
        };
        let submitted = draft.get_untracked();
        if let Err(error) = check_fee_structure(&submitted, clock::today()) {
            notice.set(Some(Notice::error(error.to_string())));
            return;
        }
        saving.set(true);
        spawn_guarded(
            &save_generation,
            async move {
                match current {
                    FormMode::Add => api::add_fee_structure(&submitted).await,
                    FormMode::Edit(id) => api::update_fee_structure(id, &submitted).await,
                }
            },
            move |result| {
                saving.set(false);
                match result {
                    Ok(saved) => {
                        mode.set(None);
                        reload.update(|n| *n += 1);
                        let verb = if current == FormMode::Add { "added" } else { "updated" };
                        notice.set(Some(Notice::success(format!("{} {verb} successfully", saved.fee_type))));
                    }
                    Err(message) => notice.set(Some(Notice::error(message))),
                }
            },
        );
    });

    let confirm_delete = Callback::new(move |()| {
        let Some(fee) = pending_delete.get_untracked() else {
            return;
        };
        spawn_guarded(&delete_generation, async move { api::delete_fee_structure(fee.id).await }, move |result| {
            pending_delete.set(None);
            match result {
                Ok(ack) => {
                    reload.update(|n| *n += 1);
                    notice.set(Some(Notice::success(ack.message)));
                }
                Err(message) => notice.set(Some(Notice::error(message))),
            }
        });
    });

    let type_filter_options = with_all("All Fee Types", FEE_TYPES);
    let branch_filter_options = with_all("All Branches", BRANCHES);
    let semester_filter_options = std::iter::once((String::new(), "All Semesters".to_owned()))
        .chain(SEMESTERS.iter().map(|s| ((*s).to_owned(), format!("Semester {s}"))))
        .collect::<Vec<_>>();
    let active_options = vec![
        (String::new(), "All Status".to_owned()),
        ("active".to_owned(), "Active".to_owned()),
        ("inactive".to_owned(), "Inactive".to_owned()),
    ];

    let form = move || {
        mode.get().map(|current| {
            let type_options = std::iter::once((String::new(), "Select fee type".to_owned()))
                .chain(FEE_TYPES.iter().map(|t| ((*t).to_owned(), (*t).to_owned())))
                .collect::<Vec<_>>();
            view! {
                <div class="card shadow-sm mb-4 border-primary">
                    <div class="card-header fw-semibold">{current.title()}</div>
                    <form
                        class="card-body row"
                        novalidate
                        on:submit=move |ev: leptos::ev::SubmitEvent| {
                            ev.prevent_default();
                            save.run(());
                        }
                    >
                        <BoundSelect
                            label="Fee Type"
                            value=Signal::derive(move || draft.with(|d| d.fee_type.clone()))
                            options=type_options
                            on_change=Callback::new(move |v: String| draft.update(|d| d.fee_type = v))
                        />
                        <DraftInput
                            label="Amount (₹)"
                            kind="number"
                            value=Signal::derive(move || draft.with(|d| d.amount.to_string()))
                            on_input=Callback::new(move |v: String| draft.update(|d| d.amount = parse_amount(&v)))
                        />
                        <BoundSelect
                            label="Branch"
                            value=Signal::derive(move || draft.with(|d| d.branch.clone()))
                            options=scope_options(&BRANCHES)
                            on_change=Callback::new(move |v: String| draft.update(|d| d.branch = v))
                        />
                        <BoundSelect
                            label="Semester"
                            value=Signal::derive(move || draft.with(|d| d.semester.clone()))
                            options=scope_options(&SEMESTERS)
                            on_change=Callback::new(move |v: String| draft.update(|d| d.semester = v))
                        />
                        <DraftInput
                            label="Due Date"
                            kind="date"
                            value=Signal::derive(move || draft.with(|d| d.due_date.clone()))
                            on_input=Callback::new(move |v: String| draft.update(|d| d.due_date = v))
                        />
                        <DraftInput
                            label="Late Charge (₹)"
                            kind="number"
                            value=Signal::derive(move || draft.with(|d| d.late_charge.to_string()))
                            on_input=Callback::new(move |v: String| draft.update(|d| d.late_charge = parse_amount(&v)))
                        />
                        <div class="col-12 mb-3">
                            <label class="form-label">"Description"</label>
                            <textarea
                                class="form-control"
                                rows="2"
                                prop:value=move || draft.with(|d| d.description.clone())
                                on:input=move |ev| {
                                    let text = event_target_value(&ev);
                                    draft.update(|d| d.description = text);
                                }
                            ></textarea>
                        </div>
                        <div class="col-12 mb-3 form-check form-switch ms-2">
                            <input
                                id="fee-active"
                                type="checkbox"
                                class="form-check-input"
                                prop:checked=move || draft.with(|d| d.is_active)
                                on:change=move |ev| {
                                    let on = event_target_checked(&ev);
                                    draft.update(|d| d.is_active = on);
                                }
                            />
                            <label class="form-check-label" for="fee-active">"Active"</label>
                        </div>
                        <div class="col-12 d-flex gap-2">
                            <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                                {move || if saving.get() { "Saving..." } else { "Save" }}
                            </button>
                            <button type="button" class="btn btn-outline-secondary" on:click=move |_| mode.set(None)>
                                "Cancel"
                            </button>
                        </div>
                    </form>
                </div>
            }
        })
    };

    let delete_prompt = move || {
        pending_delete.get().map(|fee| {
            view! {
                <div class="alert alert-danger d-flex justify-content-between align-items-center">
                    <div>
                        "Are you sure you want to delete the fee structure for "
                        <strong>{fee.fee_type.clone()}</strong>
                        "? This action cannot be undone."
                    </div>
                    <div class="d-flex gap-2">
                        <button type="button" class="btn btn-sm btn-outline-secondary" on:click=move |_| pending_delete.set(None)>
                            "Cancel"
                        </button>
                        <button type="button" class="btn btn-sm btn-danger" on:click=move |_| confirm_delete.run(())>
                            "Delete"
                        </button>
                    </div>
                </div>
            }
        })
    };

    view! {
        <div class="fees-management-page">
            <div class="d-flex justify-content-between align-items-center mb-4">
                <h1 class="h3 mb-0">"Fee Management"</h1>
                <button type="button" class="btn btn-primary" on:click=open_add>"Add New Fee"</button>
            </div>
            <Alert notice=notice/>
            {delete_prompt}
            {form}
            <div class="card shadow-sm">
                <div class="card-header">
                    <div class="row g-2 align-items-end">
                        <div class="col-md-3">
                            <SelectField label="Fee Type" value=fee_type options=type_filter_options/>
                        </div>
                        <div class="col-md-3">
                            <SelectField label="Branch" value=branch options=branch_filter_options/>
                        </div>
                        <div class="col-md-3">
                            <SelectField label="Semester" value=semester options=semester_filter_options/>
                        </div>
                        <div class="col-md-3">
                            <SelectField label="Status" value=active options=active_options/>
                        </div>
                    </div>
                </div>
                <div class="card-body">
                    <Show when=move || !loading.get() fallback=|| view! { <Loader/> }>
                        <DataTable
                            columns=fee_columns(open_edit, ask_delete)
                            data=fees
                            empty_message="No fee structures found"
                        />
                    </Show>
                </div>
            </div>
        </div>
    }
}
