//! Sign-in and password recovery pages.
//!
//! Signing in stores the user in the auth context; the page's own redirect
//! effect then sends the user to their role's dashboard, so a reload on
//! `/login` with a saved session lands in the same place.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};
use portal::validate::{is_valid_email, passwords_match, validate_password};

use crate::components::footer::Footer;
use crate::net::api;
use crate::state::auth::AuthState;
use crate::util::guard::{LOGIN_PATH, home_for};
use crate::util::request::{scoped_generation, spawn_guarded};

/// Delay before a successful reset sends the user back to sign in.
pub const LOGIN_REDIRECT_MS: u32 = 3000;

// =============================================================================
// FORM CHECKS
// =============================================================================

/// # Errors
///
/// The message for the first empty field.
pub fn check_login(username: &str, password: &str) -> Result<(), &'static str> {
    if username.trim().is_empty() {
        return Err("Username is required");
    }
    if password.is_empty() {
        return Err("Password is required");
    }
    Ok(())
}

/// # Errors
///
/// The message to show under the email field.
pub fn check_reset_email(email: &str) -> Result<(), &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Email is required");
    }
    if !is_valid_email(email) {
        return Err("Please enter a valid email address");
    }
    Ok(())
}

/// Which reset-password field a message belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResetError {
    Password(String),
    Confirm(&'static str),
}

/// Strength first, then confirmation.
///
/// # Errors
///
/// [`ResetError`] naming the field to flag.
pub fn check_new_password(password: &str, confirm: &str) -> Result<(), ResetError> {
    if let Some(message) = validate_password(password).error() {
        return Err(ResetError::Password(message.to_owned()));
    }
    if !passwords_match(password, confirm) {
        return Err(ResetError::Confirm("Passwords do not match"));
    }
    Ok(())
}

// =============================================================================
// PAGES
// =============================================================================

#[component]
fn AuthCard(#[prop(into)] title: String, #[prop(into)] subtitle: String, children: Children) -> impl IntoView {
    view! {
        <div class="auth-page d-flex flex-column min-vh-100 bg-body-tertiary">
            <div class="flex-grow-1 d-flex align-items-center py-5">
                <div class="container">
                    <div class="row justify-content-center">
                        <div class="col-md-6 col-lg-5">
                            <div class="card shadow-sm border-0">
                                <div class="card-body p-4">
                                    <div class="text-center mb-4">
                                        <img
                                            src="/assets/images/logo.png"
                                            alt="SVIT College Logo"
                                            class="auth-page__logo mb-3"
                                        />
                                        <h2 class="fw-bold">{title}</h2>
                                        <p class="text-muted">{subtitle}</p>
                                    </div>
                                    {children()}
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
            <Footer/>
        </div>
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let generation = scoped_generation();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    Effect::new(move || {
        if let Some(home) = home_for(&auth.get()) {
            navigate(home, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let user = username.get_untracked().trim().to_owned();
        let pass = password.get_untracked();
        if let Err(message) = check_login(&user, &pass) {
            error.set(Some(message.to_owned()));
            return;
        }
        error.set(None);
        busy.set(true);
        spawn_guarded(&generation, async move { api::login(&user, &pass).await }, move |result| {
            busy.set(false);
            match result {
                Ok(user) => auth.update(|a| a.sign_in(user)),
                Err(message) => {
                    auth.update(|a| a.fail(message.clone()));
                    error.set(Some(message));
                }
            }
        });
    };

    view! {
        <AuthCard title="SVIT Fee Payment Portal" subtitle="Enter your credentials to login">
            {move || error.get().map(|m| view! { <div class="alert alert-danger mb-4">{m}</div> })}
            <form novalidate on:submit=on_submit>
                <div class="mb-3">
                    <label class="form-label" for="username">"Username"</label>
                    <input
                        id="username"
                        class="form-control"
                        type="text"
                        placeholder="Enter your username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </div>
                <div class="mb-4">
                    <label class="form-label" for="password">"Password"</label>
                    <input
                        id="password"
                        class="form-control"
                        type="password"
                        placeholder="Enter your password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </div>
                <div class="d-flex justify-content-between align-items-center mb-4">
                    <div class="form-check">
                        <input class="form-check-input" type="checkbox" id="remember-me"/>
                        <label class="form-check-label" for="remember-me">"Remember me"</label>
                    </div>
                    <a href="/forgot-password" class="text-decoration-none">"Forgot password?"</a>
                </div>
                <button class="btn btn-primary w-100 py-2" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Logging in..." } else { "Login" }}
                </button>
            </form>
        </AuthCard>
    }
}

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let generation = scoped_generation();

    let email = RwSignal::new(String::new());
    let email_error = RwSignal::new(None::<&'static str>);
    let error = RwSignal::new(None::<String>);
    let sent = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        error.set(None);
        let address = email.get_untracked().trim().to_owned();
        if let Err(message) = check_reset_email(&address) {
            email_error.set(Some(message));
            return;
        }
        email_error.set(None);
        busy.set(true);
        spawn_guarded(&generation, async move { api::reset_password(&address).await }, move |result| {
            busy.set(false);
            match result {
                Ok(ack) => sent.set(Some(ack.message)),
                Err(message) => error.set(Some(message)),
            }
        });
    });

    view! {
        <AuthCard title="Forgot Password" subtitle="Enter your email to reset your password">
            {move || error.get().map(|m| view! { <div class="alert alert-danger mb-4">{m}</div> })}
            <Show
                when=move || sent.with(Option::is_none)
                fallback=move || {
                    view! {
                        <div class="alert alert-success">{move || sent.get().unwrap_or_default()}</div>
                        <a href=LOGIN_PATH class="btn btn-outline-primary w-100">"Back to Login"</a>
                    }
                }
            >
                <form
                    novalidate
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        submit.run(());
                    }
                >
                    <div class="mb-4">
                        <label class="form-label" for="email">"Email Address"</label>
                        <input
                            id="email"
                            type="email"
                            class=move || {
                                if email_error.with(Option::is_some) { "form-control is-invalid" } else { "form-control" }
                            }
                            placeholder="Enter your registered email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <div class="invalid-feedback">{move || email_error.get().unwrap_or_default()}</div>
                    </div>
                    <button class="btn btn-primary w-100 py-2 mb-3" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Sending..." } else { "Send Reset Link" }}
                    </button>
                    <a href=LOGIN_PATH class="d-block text-center text-decoration-none">"Back to Login"</a>
                </form>
            </Show>
        </AuthCard>
    }
}

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let query = use_query_map();
    let navigate = use_navigate();
    let token = Memo::new(move |_| query.with(|q| q.get("token")).filter(|t| !t.trim().is_empty()));

    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let password_error = RwSignal::new(None::<String>);
    let confirm_error = RwSignal::new(None::<&'static str>);
    let done = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        password_error.set(None);
        confirm_error.set(None);
        match check_new_password(&password.get_untracked(), &confirm.get_untracked()) {
            Err(ResetError::Password(message)) => password_error.set(Some(message)),
            Err(ResetError::Confirm(message)) => confirm_error.set(Some(message)),
            Ok(()) => {
                done.set(true);
                #[cfg(feature = "hydrate")]
                {
                    let navigate = navigate.clone();
                    leptos::task::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(LOGIN_REDIRECT_MS).await;
                        navigate(LOGIN_PATH, NavigateOptions::default());
                    });
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = &navigate;
                }
            }
        }
    });

    let field_class = |invalid: bool| if invalid { "form-control is-invalid" } else { "form-control" };

    view! {
        <AuthCard title="Reset Password" subtitle="Choose a new password for your account">
            <Show
                when=move || token.with(Option::is_some)
                fallback=|| {
                    view! {
                        <div class="alert alert-danger">"Invalid or expired password reset link."</div>
                        <p class="text-muted mb-4">
                            "The password reset link you clicked is invalid or has expired. Please request a new password reset link."
                        </p>
                        <a href="/forgot-password" class="btn btn-primary w-100">"Request New Link"</a>
                    }
                }
            >
                <Show
                    when=move || !done.get()
                    fallback=|| {
                        view! {
                            <div class="alert alert-success">
                                "Your password has been reset. Redirecting to login..."
                            </div>
                        }
                    }
                >
                    <form
                        novalidate
                        on:submit=move |ev: leptos::ev::SubmitEvent| {
                            ev.prevent_default();
                            submit.run(());
                        }
                    >
                        <div class="mb-3">
                            <label class="form-label" for="new-password">"New Password"</label>
                            <input
                                id="new-password"
                                type="password"
                                class=move || field_class(password_error.with(Option::is_some))
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                            <div class="invalid-feedback">{move || password_error.get().unwrap_or_default()}</div>
                            <div class="form-text">
                                "At least 8 characters, with a number, an uppercase letter, and a special character."
                            </div>
                        </div>
                        <div class="mb-4">
                            <label class="form-label" for="confirm-password">"Confirm Password"</label>
                            <input
                                id="confirm-password"
                                type="password"
                                class=move || field_class(confirm_error.with(Option::is_some))
                                prop:value=move || confirm.get()
                                on:input=move |ev| confirm.set(event_target_value(&ev))
                            />
                            <div class="invalid-feedback">{move || confirm_error.get().unwrap_or_default()}</div>
                        </div>
                        <button class="btn btn-primary w-100 py-2" type="submit">"Reset Password"</button>
                    </form>
                </Show>
            </Show>
        </AuthCard>
    }
}
