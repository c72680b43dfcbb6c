//! Fallback pages for unknown routes and role mismatches.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::util::guard::{LOGIN_PATH, home_for};

const SUPPORT_EMAIL: &str = "support@svit.edu.in";

#[component]
fn ErrorScreen(
    code: &'static str,
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(into)] home: Signal<&'static str>,
) -> impl IntoView {
    view! {
        <div class="error-page container-fluid d-flex flex-column justify-content-center align-items-center min-vh-100 text-center p-4">
            <h1 class="display-1 fw-bold text-primary mb-2">{code}</h1>
            <h2 class="fw-bold mb-3">{title}</h2>
            <p class="text-muted mb-4">{message}</p>
            <div class="d-flex flex-column flex-sm-row gap-3">
                <a class="btn btn-primary px-4 py-2" href=move || home.get()>"Back to Home"</a>
                <button
                    type="button"
                    class="btn btn-outline-secondary px-4 py-2"
                    on:click=move |_| {
                        #[cfg(feature = "hydrate")]
                        {
                            if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
                                let _ = history.back();
                            }
                        }
                    }
                >
                    "Go Back"
                </button>
            </div>
            <p class="mt-5 mb-0 small text-muted">
                "Need help? Contact "
                <a href=format!("mailto:{SUPPORT_EMAIL}") class="text-decoration-none">{SUPPORT_EMAIL}</a>
            </p>
        </div>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <ErrorScreen
            code="404"
            title="Page Not Found"
            message="The page you are looking for might have been removed, had its name changed, or is temporarily unavailable."
            home=Signal::stored("/")
        />
    }
}

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let home = Signal::derive(move || auth.with(home_for).unwrap_or(LOGIN_PATH));

    view! {
        <ErrorScreen
            code="403"
            title="Access Denied"
            message="You do not have permission to view this page."
            home=home
        />
    }
}
