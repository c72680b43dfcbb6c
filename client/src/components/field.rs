//! Labelled form controls bound to string signals.

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

use leptos::prelude::*;

/// `(value, label)` pairs for a dropdown, led by an empty "all" choice.
pub fn with_all<I, S>(all_label: &str, values: I) -> Vec<(String, String)>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    std::iter::once((String::new(), all_label.to_owned()))
        .chain(values.into_iter().map(|v| {
            let v = v.into();
            (v.clone(), v)
        }))
        .collect()
}

#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    #[prop(optional, into)] id: String,
) -> impl IntoView {
    view! {
        <div class="select-field">
            <label class="form-label small text-muted" for=id.clone()>{label}</label>
            <select
                id=id
                class="form-select"
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                {move || {
                    let current = value.get_untracked();
                    options
                        .get()
                        .into_iter()
                        .map(|(v, text)| {
                            let selected = v == current;
                            view! { <option value=v selected=selected>{text}</option> }
                        })
                        .collect_view()
                }}
            </select>
        </div>
    }
}

#[component]
pub fn SearchField(value: RwSignal<String>, #[prop(into)] placeholder: String) -> impl IntoView {
    view! {
        <div class="search-field">
            <label class="form-label small text-muted">"Search"</label>
            <input
                type="search"
                class="form-control"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

/// Dropdown over one field of a larger form value.
#[component]
pub fn BoundSelect(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    options: Vec<(String, String)>,
    on_change: Callback<String>,
    #[prop(default = "col-md-6 mb-3")] class: &'static str,
) -> impl IntoView {
    view! {
        <div class=class>
            <label class="form-label">{label}</label>
            <select class="form-select" prop:value=move || value.get() on:change=move |ev| on_change.run(event_target_value(&ev))>
                {options
                    .into_iter()
                    .map(|(v, text)| {
                        let current = v.clone();
                        view! { <option value=v selected=move || value.with(|x| *x == current)>{text}</option> }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
