//! Top bar: brand, theme toggle, signed-in user, sign-out.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::theme::ThemeState;
use crate::util::guard::LOGIN_PATH;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let theme = expect_context::<RwSignal<ThemeState>>();
    let navigate = use_navigate();

    let home = move || auth.with(|a| a.role().map_or(LOGIN_PATH, portal::model::Role::home_path));
    let identity = move || {
        auth.with(|a| {
            a.user.as_ref().map(|u| {
                let detail = u.roll_number.clone().or_else(|| u.department.clone()).unwrap_or_default();
                (u.name.clone(), detail)
            })
        })
    };

    let on_logout = move |_| {
        auth.update(AuthState::sign_out);
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <header class="navbar navbar-expand bg-body border-bottom px-3 portal-navbar">
            <a class="navbar-brand d-flex flex-column lh-sm" href=home>
                <span class="fw-bold text-primary">"SVIT College"</span>
                <span class="small text-muted">"Fee Payment Portal"</span>
            </a>
            <div class="ms-auto d-flex align-items-center gap-3">
                <button
                    type="button"
                    class="btn btn-outline-secondary btn-sm"
                    title="Toggle theme"
                    on:click=move |_| {
                        theme.update(|t| {
                            t.toggle();
                        });
                    }
                >
                    {move || theme.with(|t| t.theme.toggle_glyph())}
                </button>
                {move || {
                    identity()
                        .map(|(name, detail)| {
                            view! {
                                <span class="portal-navbar__user text-end lh-sm">
                                    <span class="d-block fw-semibold">{name}</span>
                                    <span class="d-block small text-muted">{detail}</span>
                                </span>
                            }
                        })
                }}
                <button type="button" class="btn btn-outline-danger btn-sm" on:click=on_logout>
                    "Logout"
                </button>
            </div>
        </header>
    }
}
