use super::*;
use crate::state::test_helpers::test_app_state;

#[tokio::test]
async fn trends_default_period() {
    let Json(trends) = trends(State(test_app_state()), Query(TrendsParams::default())).await.unwrap();
    assert_eq!(trends.len(), 6);
    assert_eq!(trends[0].month, "Jan");
}

#[tokio::test]
async fn recent_payments_default_limit() {
    let Json(recent) = recent_payments(State(test_app_state()), Query(RecentParams::default())).await.unwrap();
    assert_eq!(recent.len(), 3);
    let Json(one) = recent_payments(State(test_app_state()), Query(RecentParams { limit: Some(1) })).await.unwrap();
    assert_eq!(one.len(), 1);
}

#[tokio::test]
async fn students_filter_from_query() {
    let query: StudentQuery = serde_json::from_value(serde_json::json!({ "status": "paid" })).unwrap();
    let Json(students) = students(State(test_app_state()), Query(query)).await.unwrap();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].name, "Kiran Reddy");
}

#[tokio::test]
async fn missing_student_is_not_found() {
    let (status, _) = student_details(State(test_app_state()), Path(404)).await.unwrap_err();
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn fee_structure_crud_statuses() {
    let state = test_app_state();
    let draft = FeeStructureDraft {
        fee_type: "Hostel Fee".into(),
        amount: 25000,
        due_date: "2025-07-01".into(),
        ..FeeStructureDraft::default()
    };
    let (status, Json(fee)) = add_fee_structure(State(state.clone()), Json(draft.clone())).await.unwrap();
    assert_eq!(status, StatusCode::CREATED);

    let Json(updated) =
        update_fee_structure(State(state.clone()), Path(fee.id), Json(FeeStructureDraft { amount: 26000, ..draft }))
            .await
            .unwrap();
    assert_eq!(updated.amount, 26000);

    let Json(ack) = delete_fee_structure(State(state.clone()), Path(fee.id)).await.unwrap();
    assert!(ack.success);
    let (status, _) = delete_fee_structure(State(state), Path(fee.id)).await.unwrap_err();
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn fee_structures_filter_active() {
    let query = FeeStructureQuery { active: Some(false), ..FeeStructureQuery::default() };
    let Json(fees) = fee_structures(State(test_app_state()), Query(query)).await.unwrap();
    assert!(fees.is_empty());
}

#[tokio::test]
async fn ledger_and_report() {
    let state = test_app_state();
    let Json(ledger) = transactions(State(state.clone())).await.unwrap();
    assert_eq!(ledger.len(), 10);

    let request = ReportRequest { report_type: ReportKind::PaymentModes, ..ReportRequest::default() };
    let Json(report) = generate_report(State(state), Json(request)).await.unwrap();
    assert!(report.success);
    assert_eq!(report.message, "payment_modes report generated successfully");
}

#[tokio::test]
async fn reminders_need_recipients() {
    let (status, Json(body)) = send_reminders(State(test_app_state()), Json(ReminderRequest::default())).await.unwrap_err();
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Select at least one student");
}
