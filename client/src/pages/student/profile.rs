//! Student profile: read-only record, contact edits, password change.

use leptos::prelude::*;
use portal::model::{PasswordChange, ProfileUpdate, StudentProfile};
use portal::validate::{check_password_change, check_profile_update};

use crate::components::alert::{Alert, Notice};
use crate::components::loader::Loader;
use crate::net::api;
use crate::util::request::{scoped_generation, spawn_guarded};

use super::current_student_id;

#[component]
fn Detail(#[prop(into)] label: String, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="col-md-6 mb-3">
            <div class="text-muted small">{label}</div>
            <div class="fw-semibold">{value}</div>
        </div>
    }
}

#[component]
fn BoundInput(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(default = "text")] kind: &'static str,
) -> impl IntoView {
    view! {
        <div class="mb-3">
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
pub fn ProfilePage() -> impl IntoView {
    let load_generation = scoped_generation();
    let save_generation = scoped_generation();
    let password_generation = scoped_generation();

    let profile = RwSignal::new(None::<StudentProfile>);
    let loading = RwSignal::new(true);
    let notice = RwSignal::new(None::<Notice>);
    let editing = RwSignal::new(false);
    let saving = RwSignal::new(false);
    let update = RwSignal::new(ProfileUpdate::default());
    let change = RwSignal::new(PasswordChange::default());
    let changing = RwSignal::new(false);

    let student_id = current_student_id();

    if let Some(id) = student_id {
        spawn_guarded(&load_generation, async move { api::student_profile(id).await }, move |result| {
            loading.set(false);
            match result {
                Ok(found) => profile.set(Some(found)),
                Err(message) => notice.set(Some(Notice::error(message))),
            }
        });
    }

    let start_edit = move |_| {
        if let Some(current) = profile.get_untracked() {
            update.set(ProfileUpdate::from_profile(&current));
            editing.set(true);
        }
    };

    let save = Callback::new(move |()| {
        let Some(id) = student_id else {
            return;
        };
        let draft = update.get_untracked();
        if let Err(error) = check_profile_update(&draft) {
            notice.set(Some(Notice::error(error.to_string())));
            return;
        }
        saving.set(true);
        spawn_guarded(&save_generation, async move { api::update_profile(id, &draft).await }, move |result| {
            saving.set(false);
            match result {
                Ok(updated) => {
                    profile.set(Some(updated));
                    editing.set(false);
                    notice.set(Some(Notice::success("Profile updated successfully")));
                }
                Err(message) => notice.set(Some(Notice::error(message))),
            }
        });
    });

    let change_password = Callback::new(move |()| {
        let Some(id) = student_id else {
            return;
        };
        let request = change.get_untracked();
        if let Err(error) = check_password_change(&request) {
            notice.set(Some(Notice::error(error.to_string())));
            return;
        }
        changing.set(true);
        spawn_guarded(
            &password_generation,
            async move { api::change_password(id, &request).await },
            move |result| {
                changing.set(false);
                match result {
                    Ok(ack) => {
                        change.set(PasswordChange::default());
                        notice.set(Some(Notice::success(ack.message)));
                    }
                    Err(message) => notice.set(Some(Notice::error(message))),
                }
            },
        );
    });

    let details = move || {
        profile.get().map(|p| {
            view! {
                <div class="row">
                    <Detail label="Full Name" value=p.name.clone()/>
                    <Detail label="Roll Number" value=p.roll_number.clone()/>
                    <Detail label="Branch" value=p.branch.clone()/>
                    <Detail label="Semester / Section" value=format!("{} / {}", p.semester, p.section)/>
                    <Detail label="Batch" value=p.batch_year.clone()/>
                    <Detail label="Admission Year" value=p.admission_year.clone()/>
                    <Detail label="Date of Birth" value=p.dob.clone()/>
                    <Detail label="Blood Group" value=p.blood_group.clone()/>
                    <Detail label="Father's Name" value=p.father_name.clone()/>
                    <Detail label="Mother's Name" value=p.mother_name.clone()/>
                    <Detail label="Hostel Resident" value=p.hostel_resident.clone()/>
                    <Detail label="Bus Route" value=p.bus_route.clone()/>
                    <Detail label="Scholarship" value=p.scholarship_status.clone()/>
                    <Detail label="Email" value=p.email.clone()/>
                    <Detail label="Phone" value=p.phone.clone()/>
                    <Detail label="Guardian Phone" value=p.guardian_phone.clone()/>
                    <Detail label="Address" value=p.address.clone()/>
                </div>
            }
        })
    };

    let contact_form = move || {
        view! {
            <form
                novalidate
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    save.run(());
                }
            >
                <BoundInput
                    label="Email"
                    kind="email"
                    value=Signal::derive(move || update.with(|u| u.email.clone()))
                    on_input=Callback::new(move |v: String| update.update(|u| u.email = v))
                />
                <BoundInput
                    label="Phone"
                    kind="tel"
                    value=Signal::derive(move || update.with(|u| u.phone.clone()))
                    on_input=Callback::new(move |v: String| update.update(|u| u.phone = v))
                />
                <BoundInput
                    label="Guardian Phone"
                    kind="tel"
                    value=Signal::derive(move || update.with(|u| u.guardian_phone.clone()))
                    on_input=Callback::new(move |v: String| update.update(|u| u.guardian_phone = v))
                />
                <div class="mb-3">
                    <label class="form-label">"Address"</label>
                    <textarea
                        class="form-control"
                        rows="3"
                        prop:value=move || update.with(|u| u.address.clone())
                        on:input=move |ev| {
                            let address = event_target_value(&ev);
                            update.update(|u| u.address = address);
                        }
                    ></textarea>
                </div>
                <div class="d-flex gap-2">
                    <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Save Changes" }}
                    </button>
                    <button type="button" class="btn btn-outline-secondary" on:click=move |_| editing.set(false)>
                        "Cancel"
                    </button>
                </div>
            </form>
        }
    };

    view! {
        <div class="profile-page">
            <h1 class="h3 mb-4">"My Profile"</h1>
            <Alert notice=notice/>
            <Show when=move || !loading.get() fallback=|| view! { <Loader/> }>
                <div class="row g-4">
                    <div class="col-lg-8">
                        <div class="card shadow-sm">
                            <div class="card-header d-flex justify-content-between align-items-center">
                                <span class="fw-semibold">"Personal Information"</span>
                                <Show when=move || !editing.get() && profile.with(Option::is_some)>
                                    <button type="button" class="btn btn-sm btn-outline-primary" on:click=start_edit>
                                        "Edit Contact Details"
                                    </button>
                                </Show>
                            </div>
                            <div class="card-body">
                                <Show when=move || editing.get() fallback=details>
                                    {contact_form}
                                </Show>
                            </div>
                        </div>
                    </div>
                    <div class="col-lg-4">
                        <div class="card shadow-sm">
                            <div class="card-header fw-semibold">"Change Password"</div>
                            <form
                                class="card-body"
                                novalidate
                                on:submit=move |ev: leptos::ev::SubmitEvent| {
                                    ev.prevent_default();
                                    change_password.run(());
                                }
                            >
                                <BoundInput
                                    label="Current Password"
                                    kind="password"
                                    value=Signal::derive(move || change.with(|c| c.current_password.clone()))
                                    on_input=Callback::new(move |v: String| change.update(|c| c.current_password = v))
                                />
                                <BoundInput
                                    label="New Password"
                                    kind="password"
                                    value=Signal::derive(move || change.with(|c| c.new_password.clone()))
                                    on_input=Callback::new(move |v: String| change.update(|c| c.new_password = v))
                                />
                                <BoundInput
                                    label="Confirm New Password"
                                    kind="password"
                                    value=Signal::derive(move || change.with(|c| c.confirm_password.clone()))
                                    on_input=Callback::new(move |v: String| change.update(|c| c.confirm_password = v))
                                />
                                <button type="submit" class="btn btn-primary w-100" disabled=move || changing.get()>
                                    {move || if changing.get() { "Updating..." } else { "Update Password" }}
                                </button>
                            </form>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
