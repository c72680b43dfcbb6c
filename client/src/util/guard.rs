//! Route gating by sign-in and role.
//!
//! SYSTEM CONTEXT
//! ==============
//! The student and admin layouts apply identical redirect behavior: nobody
//! signed in goes to `/login`, the wrong role goes to `/unauthorized`.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use portal::model::Role;

use crate::state::auth::AuthState;

pub const LOGIN_PATH: &str = "/login";
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Session not restored yet; render nothing.
    Pending,
    Granted,
    SignIn,
    Unauthorized,
}

impl Access {
    /// Redirect target, if any.
    #[must_use]
    pub fn redirect(self) -> Option<&'static str> {
        match self {
            Self::Pending | Self::Granted => None,
            Self::SignIn => Some(LOGIN_PATH),
            Self::Unauthorized => Some(UNAUTHORIZED_PATH),
        }
    }
}

#[must_use]
pub fn access(auth: &AuthState, required: Role) -> Access {
    if auth.loading {
        return Access::Pending;
    }
    match auth.role() {
        None => Access::SignIn,
        Some(role) if role == required => Access::Granted,
        Some(_) => Access::Unauthorized,
    }
}

/// Where `/` and `/login` send an already signed-in user.
#[must_use]
pub fn home_for(auth: &AuthState) -> Option<&'static str> {
    if auth.loading {
        return None;
    }
    auth.role().map(Role::home_path)
}

/// Redirect whenever auth has loaded and `required` is not met.
pub fn install_role_redirect<F>(auth: RwSignal<AuthState>, required: Role, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = access(&auth.get(), required).redirect() {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
