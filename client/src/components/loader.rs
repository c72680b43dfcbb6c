//! Spinner shown while a page fetch is in flight.

use leptos::prelude::*;

#[component]
pub fn Loader(#[prop(into, default = "Loading...".to_owned())] text: String) -> impl IntoView {
    view! {
        <div class="loader d-flex align-items-center justify-content-center py-5">
            <div class="spinner-border text-primary me-2" role="status"></div>
            <span class="loader__text">{text}</span>
        </div>
    }
}
