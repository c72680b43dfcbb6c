use super::*;
use axum::http::StatusCode;
use crate::state::test_helpers::test_app_state;

fn credentials(username: &str, password: &str) -> Json<Credentials> {
    Json(Credentials { username: username.into(), password: password.into() })
}

#[tokio::test]
async fn login_trims_username() {
    let Json(user) = login(State(test_app_state()), credentials("  admin1 ", "admin123")).await.unwrap();
    assert_eq!(user.name, "Dr. Srinivas Reddy");
}

#[tokio::test]
async fn login_failure_is_unauthorized() {
    let (status, Json(body)) = login(State(test_app_state()), credentials("student1", "nope")).await.unwrap_err();
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid username or password");
}

#[tokio::test]
async fn reset_password_unknown_email_is_not_found() {
    let body = Json(PasswordResetRequest { email: "ghost@svit.edu.in".into() });
    let (status, _) = reset_password(State(test_app_state()), body).await.unwrap_err();
    assert_eq!(status, StatusCode::NOT_FOUND);
}
