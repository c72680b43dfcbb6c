use super::*;
use crate::state::test_helpers::test_app_state;

#[tokio::test]
async fn history_and_pending_for_student() {
    let state = test_app_state();
    let Json(history) = payment_history(State(state.clone()), Path(1)).await.unwrap();
    assert_eq!(history.len(), 3);
    let Json(pending) = pending_fees(State(state), Path(1)).await.unwrap();
    assert_eq!(pending[2].late_charge, 100);
}

#[tokio::test]
async fn admin_id_is_not_a_student() {
    let (status, Json(body)) = payment_history(State(test_app_state()), Path(2)).await.unwrap_err();
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Student not found");
}

#[tokio::test]
async fn payment_is_created_and_receipt_resolves() {
    let state = test_app_state();
    let request = PaymentRequest {
        fee_id: 3,
        payment_method: PaymentMethod::Netbanking,
        bank: Some("Canara Bank".into()),
        ..PaymentRequest::default()
    };
    let (status, Json(confirmation)) = make_payment(State(state.clone()), Path(1), Json(request)).await.unwrap();
    assert_eq!(status, StatusCode::CREATED);
    let Json(found) = receipt(State(state), Path(confirmation.receipt_id.clone())).await.unwrap();
    assert_eq!(found.payment_mode, "Online (Net Banking)");
    assert_eq!(found.total_amount, 1000 + 10 + 100);
}

#[tokio::test]
async fn invalid_card_is_unprocessable() {
    let request = PaymentRequest { fee_id: 1, payment_method: PaymentMethod::Card, ..PaymentRequest::default() };
    let (status, Json(body)) = make_payment(State(test_app_state()), Path(1), Json(request)).await.unwrap_err();
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Card details are required");
}

#[tokio::test]
async fn unknown_fee_is_not_found() {
    let (status, _) = fee_details(State(test_app_state()), Path(77)).await.unwrap_err();
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn profile_round_trip_through_handlers() {
    let state = test_app_state();
    let Json(current) = profile(State(state.clone()), Path(1)).await.unwrap();
    let update = ProfileUpdate { email: "ravi.k@svit.edu.in".into(), ..ProfileUpdate::from_profile(&current) };
    let Json(updated) = update_profile(State(state), Path(1), Json(update)).await.unwrap();
    assert_eq!(updated.email, "ravi.k@svit.edu.in");
    assert_eq!(updated.roll_number, current.roll_number);
}

#[tokio::test]
async fn password_mismatch_is_unprocessable() {
    let body = PasswordChange {
        current_password: "password123".into(),
        new_password: "Abcdef1!".into(),
        confirm_password: "Abcdef1?".into(),
    };
    let (status, Json(body)) = change_password(State(test_app_state()), Path(1), Json(body)).await.unwrap_err();
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "E_PASSWORD_MISMATCH");
}
