//! Root route: forwards to the signed-in user's dashboard or to sign-in.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::loader::Loader;
use crate::state::auth::AuthState;
use crate::util::guard::{LOGIN_PATH, home_for};

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = auth.get();
        if state.loading {
            return;
        }
        let target = home_for(&state).unwrap_or(LOGIN_PATH);
        navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
    });

    view! { <Loader text="Redirecting..."/> }
}
