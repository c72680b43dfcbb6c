//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON API and stitches it with Leptos SSR rendering
//! under a single Axum router. API handlers live in `auth`, `student`, and
//! `admin`; each delegates to the repository in [`AppState`] and maps
//! [`PortalError`] to a status code with a `{"error": ...}` body.

pub mod admin;
pub mod auth;
pub mod student;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{get, post, put};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use portal::PortalError;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Error half of every handler result.
pub(crate) type ApiError = (StatusCode, Json<serde_json::Value>);

pub(crate) type ApiResult<T> = Result<Json<T>, ApiError>;

pub(crate) fn portal_error_to_status(err: &PortalError) -> StatusCode {
    match err {
        PortalError::NotFound { .. } => StatusCode::NOT_FOUND,
        PortalError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        PortalError::PasswordMismatch | PortalError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

pub(crate) fn api_error(err: PortalError) -> ApiError {
    let status = portal_error_to_status(&err);
    tracing::debug!(code = err.code(), error = %err, %status, "request refused");
    (status, Json(serde_json::json!({ "error": err.to_string(), "code": err.code() })))
}

/// JSON API routes plus health check.
pub fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/reset-password", post(auth::reset_password))
        .route(
            "/api/student/{id}/payments",
            get(student::payment_history).post(student::make_payment),
        )
        .route("/api/student/{id}/pending-fees", get(student::pending_fees))
        .route(
            "/api/student/{id}/profile",
            get(student::profile).put(student::update_profile),
        )
        .route("/api/student/{id}/password", post(student::change_password))
        .route("/api/fees/{id}", get(student::fee_details))
        .route("/api/receipts/{id}", get(student::receipt))
        .route("/api/admin/summary", get(admin::summary))
        .route("/api/admin/trends", get(admin::trends))
        .route("/api/admin/recent-payments", get(admin::recent_payments))
        .route("/api/admin/students", get(admin::students))
        .route("/api/admin/students/{id}", get(admin::student_details))
        .route(
            "/api/admin/fee-structures",
            get(admin::fee_structures).post(admin::add_fee_structure),
        )
        .route(
            "/api/admin/fee-structures/{id}",
            put(admin::update_fee_structure).delete(admin::delete_fee_structure),
        )
        .route("/api/admin/transactions", get(admin::transactions))
        .route("/api/admin/reports", post(admin::generate_report))
        .route("/api/admin/reminders", post(admin::send_reminders))
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API routes + Leptos SSR + static assets under `/pkg`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn leptos_app(state: AppState, site_root: Option<PathBuf>) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = site_root.unwrap_or_else(|| PathBuf::from(leptos_options.site_root.as_ref()));
    tracing::info!(site_root = %site_root_path.display(), "serving static assets");

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .nest_service("/assets", ServeDir::new(site_root_path.join("assets")))
        .layer(CompressionLayer::new()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;
