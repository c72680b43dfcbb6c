//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering. The signed-in user is persisted under the
//! `user` storage key so a reload keeps the session.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use portal::model::{Role, User};

use crate::util::storage;

pub const USER_KEY: &str = "user";

/// Authentication state tracking the current user and loading status.
///
/// Starts `loading` on both server and browser so hydration matches; the app
/// root replaces it with [`AuthState::restore`] once mounted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true, error: None }
    }
}

impl AuthState {
    /// State rebuilt from the persisted user, if any.
    #[must_use]
    pub fn restore() -> Self {
        Self { user: storage::load_json(USER_KEY), loading: false, error: None }
    }

    pub fn sign_in(&mut self, user: User) {
        storage::save_json(USER_KEY, &user);
        self.user = Some(user);
        self.loading = false;
        self.error = None;
    }

    pub fn sign_out(&mut self) {
        storage::remove(USER_KEY);
        self.user = None;
        self.loading = false;
        self.error = None;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.loading = false;
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Id used for the student-scoped API routes.
    #[must_use]
    pub fn user_id(&self) -> Option<u32> {
        self.user.as_ref().map(|u| u.id)
    }
}
