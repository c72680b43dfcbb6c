use super::*;

#[test]
fn portal_errors_map_to_statuses() {
    assert_eq!(portal_error_to_status(&PortalError::not_found("Receipt", "X")), StatusCode::NOT_FOUND);
    assert_eq!(portal_error_to_status(&PortalError::InvalidCredentials), StatusCode::UNAUTHORIZED);
    assert_eq!(portal_error_to_status(&PortalError::PasswordMismatch), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        portal_error_to_status(&PortalError::Validation("bad".into())),
        StatusCode::UNPROCESSABLE_ENTITY
    );
}

#[test]
fn api_error_body_carries_message_and_code() {
    let (status, Json(body)) = api_error(PortalError::not_found("Fee structure", 9));
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Fee structure not found");
    assert_eq!(body["code"], "E_NOT_FOUND");
}

#[tokio::test]
async fn healthz_is_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[test]
fn api_router_builds() {
    let _router = api_routes(crate::state::test_helpers::test_app_state());
}
