//! Card containers.

use leptos::prelude::*;

/// Titled card wrapping arbitrary content.
#[component]
pub fn Card(#[prop(into)] title: String, #[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! {
        <div class=format!("card shadow-sm {class}")>
            <div class="card-header fw-semibold">{title}</div>
            <div class="card-body">{children()}</div>
        </div>
    }
}

/// Headline figure on a dashboard.
#[component]
pub fn StatCard(
    #[prop(into)] title: String,
    #[prop(into)] value: Signal<String>,
    #[prop(optional, into)] caption: Option<String>,
    #[prop(default = "primary")] variant: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("card stat-card border-start border-4 border-{variant} shadow-sm")>
            <div class="card-body">
                <div class="stat-card__title text-muted text-uppercase small">{title}</div>
                <div class="stat-card__value fs-4 fw-bold">{move || value.get()}</div>
                {caption.map(|c| view! { <div class="stat-card__caption small text-muted">{c}</div> })}
            </div>
        </div>
    }
}
