//! Admin routes: dashboard figures, students, fee structures, the payment
//! ledger, reports, and reminders.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use portal::model::*;
use serde::Deserialize;

use super::{ApiError, ApiResult, api_error};
use crate::state::AppState;

pub const DEFAULT_TRENDS_PERIOD: &str = "lastSixMonths";
pub const DEFAULT_RECENT_LIMIT: usize = 5;

#[derive(Debug, Default, Deserialize)]
pub struct TrendsParams {
    pub period: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RecentParams {
    pub limit: Option<usize>,
}

/// `GET /api/admin/summary`
pub async fn summary(State(state): State<AppState>) -> ApiResult<DashboardSummary> {
    state.repo.dashboard_summary().await.map(Json).map_err(api_error)
}

/// `GET /api/admin/trends?period=`
pub async fn trends(State(state): State<AppState>, Query(params): Query<TrendsParams>) -> ApiResult<Vec<MonthlyTrend>> {
    let period = params.period.as_deref().unwrap_or(DEFAULT_TRENDS_PERIOD);
    state.repo.monthly_trends(period).await.map(Json).map_err(api_error)
}

/// `GET /api/admin/recent-payments?limit=`
pub async fn recent_payments(
    State(state): State<AppState>,
    Query(params): Query<RecentParams>,
) -> ApiResult<Vec<RecentPayment>> {
    let limit = params.limit.unwrap_or(DEFAULT_RECENT_LIMIT);
    state.repo.recent_payments(limit).await.map(Json).map_err(api_error)
}

/// `GET /api/admin/students?branch=&semester=&status=&search=`
pub async fn students(
    State(state): State<AppState>,
    Query(query): Query<StudentQuery>,
) -> ApiResult<Vec<StudentRecord>> {
    state.repo.students(query).await.map(Json).map_err(api_error)
}

/// `GET /api/admin/students/:id`
pub async fn student_details(State(state): State<AppState>, Path(id): Path<u32>) -> ApiResult<StudentRecord> {
    state.repo.student_details(id).await.map(Json).map_err(api_error)
}

/// `GET /api/admin/fee-structures?type=&branch=&semester=&active=`
pub async fn fee_structures(
    State(state): State<AppState>,
    Query(query): Query<FeeStructureQuery>,
) -> ApiResult<Vec<FeeStructure>> {
    state.repo.fee_structures(query).await.map(Json).map_err(api_error)
}

/// `POST /api/admin/fee-structures`
pub async fn add_fee_structure(
    State(state): State<AppState>,
    Json(draft): Json<FeeStructureDraft>,
) -> Result<(StatusCode, Json<FeeStructure>), ApiError> {
    let fee = state.repo.add_fee_structure(draft).await.map_err(api_error)?;
    Ok((StatusCode::CREATED, Json(fee)))
}

/// `PUT /api/admin/fee-structures/:id`
pub async fn update_fee_structure(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Json(draft): Json<FeeStructureDraft>,
) -> ApiResult<FeeStructure> {
    state.repo.update_fee_structure(id, draft).await.map(Json).map_err(api_error)
}

/// `DELETE /api/admin/fee-structures/:id`
pub async fn delete_fee_structure(State(state): State<AppState>, Path(id): Path<u32>) -> ApiResult<Ack> {
    state.repo.delete_fee_structure(id).await.map(Json).map_err(api_error)
}

/// `GET /api/admin/transactions`: the full ledger; the UI filters it.
pub async fn transactions(State(state): State<AppState>) -> ApiResult<Vec<Transaction>> {
    state.repo.transactions().await.map(Json).map_err(api_error)
}

/// `POST /api/admin/reports`
pub async fn generate_report(
    State(state): State<AppState>,
    Json(request): Json<ReportRequest>,
) -> ApiResult<ReportResult> {
    state.repo.generate_report(request).await.map(Json).map_err(api_error)
}

/// `POST /api/admin/reminders`
pub async fn send_reminders(
    State(state): State<AppState>,
    Json(request): Json<ReminderRequest>,
) -> ApiResult<ReminderResult> {
    state.repo.send_reminders(request).await.map(Json).map_err(api_error)
}

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;
