//! Student section pages, rendered inside `StudentLayout`.

pub mod dashboard;
pub mod make_payment;
pub mod payment_history;
pub mod pending_payments;
pub mod profile;
pub mod receipt;

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Id of the signed-in student. The layout guard only renders these pages
/// once a user is present.
fn current_student_id() -> Option<u32> {
    expect_context::<RwSignal<AuthState>>().with_untracked(AuthState::user_id)
}
