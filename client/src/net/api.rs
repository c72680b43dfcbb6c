//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs instead of panics. A non-2xx
//! response yields the server's `{"error": ...}` message, so pages can show
//! it in an alert as-is.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use portal::model::*;
use serde::Serialize;
use serde::de::DeserializeOwned;

#[cfg(not(feature = "hydrate"))]
const UNAVAILABLE: &str = "not available on server";

// =============================================================================
// URLS & MESSAGES
// =============================================================================

fn student_endpoint(student_id: u32, tail: &str) -> String {
    format!("/api/student/{student_id}/{tail}")
}

/// `?k=v&...` over the non-empty pairs, or an empty string.
fn query_string(pairs: &[(&str, Option<&str>)]) -> String {
    let encoded: Vec<String> = pairs
        .iter()
        .filter_map(|(key, value)| {
            let value = value.map(str::trim).filter(|v| !v.is_empty())?;
            Some(format!("{key}={}", urlencoding::encode(value)))
        })
        .collect();
    if encoded.is_empty() { String::new() } else { format!("?{}", encoded.join("&")) }
}

fn students_url(query: &StudentQuery) -> String {
    let qs = query_string(&[
        ("branch", query.branch.as_deref()),
        ("semester", query.semester.as_deref()),
        ("status", query.status.map(StudentStatus::as_str)),
        ("search", query.search.as_deref()),
    ]);
    format!("/api/admin/students{qs}")
}

fn fee_structures_url(query: &FeeStructureQuery) -> String {
    let active = query.active.map(|a| if a { "true" } else { "false" });
    let qs = query_string(&[
        ("type", query.fee_type.as_deref()),
        ("branch", query.branch.as_deref()),
        ("semester", query.semester.as_deref()),
        ("active", active),
    ]);
    format!("/api/admin/fee-structures{qs}")
}

/// Message for a failed response: the body's `error` field when present,
/// else a generic status line.
#[cfg(any(test, feature = "hydrate"))]
fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_owned))
        .unwrap_or_else(|| format!("request failed: {status}"))
}

// =============================================================================
// TRANSPORT
// =============================================================================

#[cfg(feature = "hydrate")]
async fn read<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, String> {
    if resp.ok() {
        return resp.json::<T>().await.map_err(|e| e.to_string());
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    log::warn!("{} failed with {status}", resp.url());
    Err(error_message(status, &body))
}

async fn get<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(url).send().await.map_err(|e| e.to_string())?;
        read(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(UNAVAILABLE.to_owned())
    }
}

#[derive(Clone, Copy, Debug)]
enum Method {
    Post,
    Put,
}

async fn send<B: Serialize, T: DeserializeOwned>(method: Method, url: &str, body: &B) -> Result<T, String> {
    #[cfg(feature = "hydrate")]
    {
        let builder = match method {
            Method::Post => gloo_net::http::Request::post(url),
            Method::Put => gloo_net::http::Request::put(url),
        };
        let resp = builder
            .json(body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, url, body);
        Err(UNAVAILABLE.to_owned())
    }
}

async fn delete<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(url).send().await.map_err(|e| e.to_string())?;
        read(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(UNAVAILABLE.to_owned())
    }
}

// =============================================================================
// AUTH
// =============================================================================

/// Sign in via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns the server message, e.g. "Invalid username or password".
pub async fn login(username: &str, password: &str) -> Result<User, String> {
    let body = Credentials { username: username.to_owned(), password: password.to_owned() };
    send(Method::Post, "/api/auth/login", &body).await
}

/// Request a reset link via `POST /api/auth/reset-password`.
///
/// # Errors
///
/// Returns "Email not found" for unknown addresses.
pub async fn reset_password(email: &str) -> Result<Ack, String> {
    send(Method::Post, "/api/auth/reset-password", &PasswordResetRequest { email: email.to_owned() }).await
}

// =============================================================================
// STUDENT
// =============================================================================

/// # Errors
///
/// Returns the server or transport message.
pub async fn payment_history(student_id: u32) -> Result<Vec<Payment>, String> {
    get(&student_endpoint(student_id, "payments")).await
}

/// # Errors
///
/// Returns the server or transport message.
pub async fn pending_fees(student_id: u32) -> Result<Vec<PendingFee>, String> {
    get(&student_endpoint(student_id, "pending-fees")).await
}

/// # Errors
///
/// Returns the server or transport message.
pub async fn fee_details(fee_id: u32) -> Result<FeeDetails, String> {
    get(&format!("/api/fees/{fee_id}")).await
}

/// # Errors
///
/// Returns the server or transport message.
pub async fn receipt(receipt_id: &str) -> Result<Receipt, String> {
    get(&format!("/api/receipts/{}", urlencoding::encode(receipt_id))).await
}

/// # Errors
///
/// Returns the first failed payment check or the transport message.
pub async fn make_payment(student_id: u32, request: &PaymentRequest) -> Result<PaymentConfirmation, String> {
    send(Method::Post, &student_endpoint(student_id, "payments"), request).await
}

/// # Errors
///
/// Returns the server or transport message.
pub async fn student_profile(student_id: u32) -> Result<StudentProfile, String> {
    get(&student_endpoint(student_id, "profile")).await
}

/// # Errors
///
/// Returns the first failed field check or the transport message.
pub async fn update_profile(student_id: u32, update: &ProfileUpdate) -> Result<StudentProfile, String> {
    send(Method::Put, &student_endpoint(student_id, "profile"), update).await
}

/// # Errors
///
/// Returns the mismatch/strength/current-password message.
pub async fn change_password(student_id: u32, change: &PasswordChange) -> Result<Ack, String> {
    send(Method::Post, &student_endpoint(student_id, "password"), change).await
}

// =============================================================================
// ADMIN
// =============================================================================

/// # Errors
///
/// Returns the server or transport message.
pub async fn dashboard_summary() -> Result<DashboardSummary, String> {
    get("/api/admin/summary").await
}

/// # Errors
///
/// Returns the server or transport message.
pub async fn monthly_trends(period: &str) -> Result<Vec<MonthlyTrend>, String> {
    get(&format!("/api/admin/trends{}", query_string(&[("period", Some(period))]))).await
}

/// # Errors
///
/// Returns the server or transport message.
pub async fn recent_payments(limit: usize) -> Result<Vec<RecentPayment>, String> {
    get(&format!("/api/admin/recent-payments?limit={limit}")).await
}

/// # Errors
///
/// Returns the server or transport message.
pub async fn students(query: &StudentQuery) -> Result<Vec<StudentRecord>, String> {
    get(&students_url(query)).await
}

/// # Errors
///
/// Returns the server or transport message.
pub async fn student_details(id: u32) -> Result<StudentRecord, String> {
    get(&format!("/api/admin/students/{id}")).await
}

/// # Errors
///
/// Returns the server or transport message.
pub async fn fee_structures(query: &FeeStructureQuery) -> Result<Vec<FeeStructure>, String> {
    get(&fee_structures_url(query)).await
}

/// # Errors
///
/// Returns the draft validation message or the transport message.
pub async fn add_fee_structure(draft: &FeeStructureDraft) -> Result<FeeStructure, String> {
    send(Method::Post, "/api/admin/fee-structures", draft).await
}

/// # Errors
///
/// Returns the draft validation message, "Fee structure not found", or the
/// transport message.
pub async fn update_fee_structure(id: u32, draft: &FeeStructureDraft) -> Result<FeeStructure, String> {
    send(Method::Put, &format!("/api/admin/fee-structures/{id}"), draft).await
}

/// # Errors
///
/// Returns "Fee structure not found" or the transport message.
pub async fn delete_fee_structure(id: u32) -> Result<Ack, String> {
    delete(&format!("/api/admin/fee-structures/{id}")).await
}

/// # Errors
///
/// Returns the server or transport message.
pub async fn transactions() -> Result<Vec<Transaction>, String> {
    get("/api/admin/transactions").await
}

/// # Errors
///
/// Returns the server or transport message.
pub async fn generate_report(request: &ReportRequest) -> Result<ReportResult, String> {
    send(Method::Post, "/api/admin/reports", request).await
}

/// # Errors
///
/// Returns "Select at least one student" or the transport message.
pub async fn send_reminders(request: &ReminderRequest) -> Result<ReminderResult, String> {
    send(Method::Post, "/api/admin/reminders", request).await
}
