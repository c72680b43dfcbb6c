use super::*;
use time::macros::datetime;

fn fixed_clock() -> OffsetDateTime {
    datetime!(2025-04-08 10:30:00 UTC)
}

fn repo() -> FixtureRepository {
    FixtureRepository::new(false).with_clock(fixed_clock)
}

fn upi_payment(fee_id: u32) -> PaymentRequest {
    PaymentRequest { fee_id, upi_id: Some("ravi@okaxis".into()), ..PaymentRequest::default() }
}

fn draft(fee_type: &str, amount: u64) -> FeeStructureDraft {
    FeeStructureDraft {
        fee_type: fee_type.into(),
        amount,
        due_date: "2025-06-30".into(),
        description: "Sports complex fee".into(),
        ..FeeStructureDraft::default()
    }
}

// =============================================================
// Auth
// =============================================================

#[tokio::test]
async fn login_returns_user_without_password() {
    let user = repo().login("student1", "password123").await.unwrap();
    assert_eq!(user.role, Role::Student);
    assert_eq!(user.roll_number.as_deref(), Some("SVIT20CS101"));
    let json = serde_json::to_string(&user).unwrap();
    assert!(!json.contains("password123"));
}

#[tokio::test]
async fn login_rejects_bad_password() {
    let err = repo().login("admin1", "wrong").await.unwrap_err();
    assert_eq!(err, PortalError::InvalidCredentials);
}

#[tokio::test]
async fn reset_password_needs_known_email() {
    let repo = repo();
    assert!(repo.reset_password("ravi.kumar@svit.edu.in").await.is_ok());
    let err = repo.reset_password("nobody@svit.edu.in").await.unwrap_err();
    assert_eq!(err.to_string(), "Email not found");
}

// =============================================================
// Student
// =============================================================

#[tokio::test]
async fn student_reads_require_student_account() {
    let repo = repo();
    assert_eq!(repo.payment_history(1).await.unwrap().len(), 3);
    assert_eq!(repo.pending_fees(1).await.unwrap().len(), 3);
    let err = repo.payment_history(2).await.unwrap_err();
    assert!(matches!(err, PortalError::NotFound { entity: "Student", .. }));
}

#[tokio::test]
async fn fee_details_and_receipt_lookups() {
    let repo = repo();
    assert_eq!(repo.fee_details(4).await.unwrap().total_payable(), 3535);
    assert!(matches!(repo.fee_details(99).await, Err(PortalError::NotFound { .. })));
    assert_eq!(repo.receipt("SVIT25011501").await.unwrap().total_amount, 2525);
    assert!(matches!(repo.receipt("SVIT00000000").await, Err(PortalError::NotFound { .. })));
}

#[tokio::test]
async fn payment_settles_fee_everywhere() {
    let repo = repo();
    let confirmation = repo.make_payment(1, upi_payment(2)).await.unwrap();
    assert!(confirmation.success);
    assert_eq!(confirmation.receipt_id, "SVIT2504082");
    assert!(confirmation.transaction_id.starts_with("TXN"));
    assert_eq!(confirmation.paid_date, "2025-04-08 10:30:00");

    let pending = repo.pending_fees(1).await.unwrap();
    assert_eq!(pending.iter().map(|f| f.id).collect::<Vec<_>>(), vec![1, 3]);

    let history = repo.payment_history(1).await.unwrap();
    assert_eq!(history[0].id, "SVIT2504082");
    assert_eq!(history[0].payment_mode, "Online (UPI)");
    assert!(history[0].reference.starts_with("UPI"));

    let receipt = repo.receipt("SVIT2504082").await.unwrap();
    assert_eq!(receipt.total_amount, 8080);
    assert_eq!(receipt.academic_year, "2024-2025");
    assert_eq!(receipt.transaction_id, confirmation.transaction_id);

    let ledger = repo.transactions().await.unwrap();
    assert_eq!(ledger.len(), 11);
    assert_eq!(ledger[0].branch, "CSE");
    assert_eq!(repo.recent_payments(1).await.unwrap()[0].id, "SVIT2504082");
}

#[tokio::test]
async fn paying_twice_is_refused() {
    let repo = repo();
    repo.make_payment(1, upi_payment(1)).await.unwrap();
    let err = repo.make_payment(1, upi_payment(1)).await.unwrap_err();
    assert_eq!(err, PortalError::Validation("This fee has already been paid".into()));
}

#[tokio::test]
async fn paying_again_on_a_later_day_is_refused() {
    let mut repo = repo();
    repo.make_payment(1, upi_payment(1)).await.unwrap();

    repo.clock = || datetime!(2025-04-09 09:00:00 UTC);
    let err = repo.make_payment(1, upi_payment(1)).await.unwrap_err();
    assert_eq!(err, PortalError::Validation("This fee has already been paid".into()));

    let history = repo.payment_history(1).await.unwrap();
    assert_eq!(history.iter().filter(|p| p.fee_type == "Examination Fee" && p.paid_date == "2025-04-08").count(), 1);
    assert!(repo.receipt("SVIT2504091").await.is_err());
}

#[tokio::test]
async fn lab_fee_is_payable_once() {
    let repo = repo();
    let confirmation = repo.make_payment(1, upi_payment(4)).await.unwrap();
    assert_eq!(confirmation.receipt_id, "SVIT2504084");
    assert!(repo.make_payment(1, upi_payment(4)).await.is_err());
}

#[tokio::test]
async fn payment_validates_instrument_before_lookup() {
    let repo = repo();
    let request = PaymentRequest { fee_id: 99, ..PaymentRequest::default() };
    assert!(matches!(repo.make_payment(1, request).await, Err(PortalError::Validation(_))));
    assert!(matches!(repo.make_payment(1, upi_payment(99)).await, Err(PortalError::NotFound { .. })));
}

#[tokio::test]
async fn profile_update_persists() {
    let repo = repo();
    let mut update = ProfileUpdate::from_profile(&repo.student_profile(1).await.unwrap());
    update.phone = "9123456789".into();
    update.address = "Hostel Block B".into();
    let profile = repo.update_profile(1, update).await.unwrap();
    assert_eq!(profile.phone, "9123456789");
    assert_eq!(repo.student_profile(1).await.unwrap().address, "Hostel Block B");
}

#[tokio::test]
async fn change_password_then_login() {
    let repo = repo();
    let change = |current: &str| PasswordChange {
        current_password: current.into(),
        new_password: "N3w!password".into(),
        confirm_password: "N3w!password".into(),
    };
    let err = repo.change_password(1, change("nope")).await.unwrap_err();
    assert_eq!(err.to_string(), "Current password is incorrect");

    repo.change_password(1, change("password123")).await.unwrap();
    assert!(repo.login("student1", "password123").await.is_err());
    assert!(repo.login("student1", "N3w!password").await.is_ok());
}

#[tokio::test]
async fn change_password_reports_mismatch() {
    let change = PasswordChange {
        current_password: "password123".into(),
        new_password: "N3w!password".into(),
        confirm_password: "N3w!passwor".into(),
    };
    assert_eq!(repo().change_password(1, change).await.unwrap_err(), PortalError::PasswordMismatch);
}

// =============================================================
// Admin
// =============================================================

#[tokio::test]
async fn students_apply_query() {
    let repo = repo();
    let query = StudentQuery { status: Some(StudentStatus::Pending), branch: Some("CSE".into()), ..StudentQuery::default() };
    let students = repo.students(query).await.unwrap();
    assert_eq!(students.iter().map(|s| s.id).collect::<Vec<_>>(), vec![1]);
    assert_eq!(repo.student_details(5).await.unwrap().branch, "CIVIL");
    assert!(repo.student_details(42).await.is_err());
}

#[tokio::test]
async fn recent_payments_respect_limit() {
    let repo = repo();
    assert_eq!(repo.recent_payments(5).await.unwrap().len(), 3);
    assert_eq!(repo.recent_payments(2).await.unwrap().len(), 2);
}

#[tokio::test]
async fn fee_structure_lifecycle() {
    let repo = repo();
    let added = repo.add_fee_structure(draft("Sports Fee", 1500)).await.unwrap();
    assert_eq!(added.id, 4);
    assert_eq!(added.created_on, "2025-04-08");
    assert_eq!(repo.fee_structures(FeeStructureQuery::default()).await.unwrap().len(), 4);

    let updated = repo.update_fee_structure(4, draft("Sports Fee", 1800)).await.unwrap();
    assert_eq!(updated.amount, 1800);
    assert_eq!(updated.created_on, "2025-04-08");

    repo.delete_fee_structure(4).await.unwrap();
    assert!(matches!(repo.delete_fee_structure(4).await, Err(PortalError::NotFound { .. })));
    assert!(matches!(repo.update_fee_structure(4, draft("X", 1)).await, Err(PortalError::NotFound { .. })));
}

#[tokio::test]
async fn fee_structure_drafts_are_validated() {
    let repo = repo();
    assert!(repo.add_fee_structure(draft("", 100)).await.is_err());
    assert!(repo.add_fee_structure(draft("Lab Fee", 0)).await.is_err());
    let stale = FeeStructureDraft { due_date: "2025-01-01".into(), ..draft("Lab Fee", 100) };
    assert_eq!(
        repo.add_fee_structure(stale).await.unwrap_err(),
        PortalError::Validation("Due date must be today or later".into())
    );
}

#[tokio::test]
async fn reports_and_reminders() {
    let repo = repo();
    let report = repo
        .generate_report(ReportRequest { report_type: ReportKind::PendingFees, ..ReportRequest::default() })
        .await
        .unwrap();
    assert_eq!(report.message, "pending_fees report generated successfully");

    let sent = repo
        .send_reminders(ReminderRequest { student_ids: vec![1, 3], message: "Please pay".into() })
        .await
        .unwrap();
    assert_eq!(sent.sent, 2);
    assert_eq!(sent.message, "Reminders sent to 2 students");
    assert!(repo.send_reminders(ReminderRequest::default()).await.is_err());
}
