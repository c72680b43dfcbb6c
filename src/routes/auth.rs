//! Auth routes: demo sign-in and password-reset requests.
//!
//! The UI keeps the returned user in browser storage; there is no server
//! session.

use axum::extract::State;
use axum::response::Json;
use portal::model::{Ack, Credentials, PasswordResetRequest, User};

use super::{ApiResult, api_error};
use crate::state::AppState;

/// `POST /api/auth/login`: check credentials and return the user.
pub async fn login(State(state): State<AppState>, Json(body): Json<Credentials>) -> ApiResult<User> {
    let user = state
        .repo
        .login(body.username.trim(), &body.password)
        .await
        .map_err(api_error)?;
    tracing::info!(user_id = user.id, role = user.role.as_str(), "signed in");
    Ok(Json(user))
}

/// `POST /api/auth/reset-password`: send a reset link to a registered email.
pub async fn reset_password(
    State(state): State<AppState>,
    Json(body): Json<PasswordResetRequest>,
) -> ApiResult<Ack> {
    state.repo.reset_password(&body.email).await.map(Json).map_err(api_error)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;
