//! Student routes: payment history, pending fees, payments, receipts, and
//! profile.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use portal::model::*;

use super::{ApiError, ApiResult, api_error};
use crate::state::AppState;

/// `GET /api/student/:id/payments`
pub async fn payment_history(State(state): State<AppState>, Path(id): Path<u32>) -> ApiResult<Vec<Payment>> {
    state.repo.payment_history(id).await.map(Json).map_err(api_error)
}

/// `GET /api/student/:id/pending-fees`
pub async fn pending_fees(State(state): State<AppState>, Path(id): Path<u32>) -> ApiResult<Vec<PendingFee>> {
    state.repo.pending_fees(id).await.map(Json).map_err(api_error)
}

/// `GET /api/fees/:id`: a payable fee with its convenience fee.
pub async fn fee_details(State(state): State<AppState>, Path(id): Path<u32>) -> ApiResult<FeeDetails> {
    state.repo.fee_details(id).await.map(Json).map_err(api_error)
}

/// `GET /api/receipts/:id`
pub async fn receipt(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Receipt> {
    state.repo.receipt(&id).await.map(Json).map_err(api_error)
}

/// `POST /api/student/:id/payments`: pay a fee.
pub async fn make_payment(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Json(body): Json<PaymentRequest>,
) -> Result<(StatusCode, Json<PaymentConfirmation>), ApiError> {
    let confirmation = state.repo.make_payment(id, body).await.map_err(api_error)?;
    Ok((StatusCode::CREATED, Json(confirmation)))
}

/// `GET /api/student/:id/profile`
pub async fn profile(State(state): State<AppState>, Path(id): Path<u32>) -> ApiResult<StudentProfile> {
    state.repo.student_profile(id).await.map(Json).map_err(api_error)
}

/// `PUT /api/student/:id/profile`: edit contact details.
pub async fn update_profile(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Json(body): Json<ProfileUpdate>,
) -> ApiResult<StudentProfile> {
    state.repo.update_profile(id, body).await.map(Json).map_err(api_error)
}

/// `POST /api/student/:id/password`
pub async fn change_password(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Json(body): Json<PasswordChange>,
) -> ApiResult<Ack> {
    state.repo.change_password(id, body).await.map(Json).map_err(api_error)
}

#[cfg(test)]
#[path = "student_test.rs"]
mod student_test;
