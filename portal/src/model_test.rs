use super::*;
use crate::fixtures;
use serde_json::json;

// =============================================================
// Wire shape
// =============================================================

#[test]
fn fee_type_serializes_as_type() {
    let fee = &fixtures::pending_fees()[0];
    let value = serde_json::to_value(fee).unwrap();
    assert_eq!(value["type"], "Examination Fee");
    assert_eq!(value["dueDate"], "2025-04-15");
    assert_eq!(value["lateCharge"], 0);
    assert_eq!(value["status"], "pending");
    assert!(value.get("feeType").is_none());
}

#[test]
fn fee_details_flatten_the_fee() {
    let details = &fixtures::fee_details()[2];
    let value = serde_json::to_value(details).unwrap();
    assert_eq!(value["id"], 3);
    assert_eq!(value["convenienceFee"], 10);
    assert_eq!(details.total_payable(), 1000 + 10 + 100);
}

#[test]
fn user_omits_absent_optionals() {
    let admin = &fixtures::accounts()[1].user;
    let value = serde_json::to_value(admin).unwrap();
    assert_eq!(value["role"], "admin");
    assert!(value.get("rollNumber").is_none());
    assert_eq!(value["department"], "Administration");
}

#[test]
fn payment_request_parses_from_camel_case() {
    let body = json!({
        "feeId": 2,
        "paymentMethod": "card",
        "card": { "number": "4111 1111 1111 1111", "holder": "Ravi", "expiry": "12/30", "cvv": "123" }
    });
    let request: PaymentRequest = serde_json::from_value(body).unwrap();
    assert_eq!(request.fee_id, 2);
    assert_eq!(request.payment_method, PaymentMethod::Card);
    assert!(request.upi_id.is_none());
    assert_eq!(request.card.map(|c| c.expiry), Some("12/30".to_owned()));
}

#[test]
fn report_kind_uses_snake_case() {
    let request: ReportRequest = serde_json::from_value(json!({ "reportType": "overdue_fees" })).unwrap();
    assert_eq!(request.report_type, ReportKind::OverdueFees);
    assert_eq!(request.format, ReportFormat::Pdf);
    for kind in ReportKind::ALL {
        assert_eq!(ReportKind::parse(kind.as_str()), Some(kind));
    }
}

#[test]
fn enum_labels() {
    assert_eq!(Role::Admin.home_path(), "/admin/dashboard");
    assert_eq!(PaymentStatus::parse("failed"), Some(PaymentStatus::Failed));
    assert_eq!(PaymentStatus::parse("Failed"), None);
    assert_eq!(PaymentMethod::Netbanking.mode_label(), "Online (Net Banking)");
    assert_eq!(PaymentMethod::parse("dd"), Some(PaymentMethod::Dd));
}

// =============================================================
// Row projection
// =============================================================

#[test]
fn rows_expose_serde_names() {
    let payment = &fixtures::payments()[0];
    assert_eq!(payment.field("type"), CellValue::from("Examination Fee"));
    assert_eq!(payment.field("amount"), CellValue::Int(2500));
    assert_eq!(payment.field("paidDate"), CellValue::from("2025-01-15"));
    assert_eq!(payment.field("feeType"), CellValue::Null);

    let fee = &fixtures::pending_fees()[2];
    assert_eq!(fee.field("totalDue"), CellValue::Int(1100));

    let tx = &fixtures::transactions()[0];
    assert_eq!(tx.field("studentName"), CellValue::from("Ravi Kumar"));
    assert_eq!(tx.field("status"), CellValue::from("success"));
}

#[test]
fn fee_structure_row_includes_flags() {
    let fee = &fixtures::fee_structures()[0];
    assert_eq!(fee.field("isActive"), CellValue::Bool(true));
    assert_eq!(fee.field("branch"), CellValue::from("All"));
}

// =============================================================
// Queries
// =============================================================

#[test]
fn student_query_filters() {
    let students = fixtures::students();
    let count = |query: &StudentQuery| students.iter().filter(|s| query.matches(s)).count();

    assert_eq!(count(&StudentQuery::default()), 5);
    assert_eq!(count(&StudentQuery { branch: Some("CSE".into()), ..StudentQuery::default() }), 2);
    assert_eq!(count(&StudentQuery { branch: Some("All".into()), ..StudentQuery::default() }), 5);
    assert_eq!(count(&StudentQuery { semester: Some("2".into()), ..StudentQuery::default() }), 2);
    assert_eq!(count(&StudentQuery { status: Some(StudentStatus::Paid), ..StudentQuery::default() }), 1);
    assert_eq!(count(&StudentQuery { status: Some(StudentStatus::Pending), ..StudentQuery::default() }), 4);
    assert_eq!(count(&StudentQuery { search: Some("PRIYA".into()), ..StudentQuery::default() }), 1);
    assert_eq!(count(&StudentQuery { search: Some("  ".into()), ..StudentQuery::default() }), 5);
}

#[test]
fn fee_structure_query_keeps_wildcard_rows() {
    let mut fees = fixtures::fee_structures();
    fees[1].branch = "ECE".into();
    fees[2].is_active = false;
    let count = |query: &FeeStructureQuery| fees.iter().filter(|f| query.matches(f)).count();

    assert_eq!(count(&FeeStructureQuery { branch: Some("CSE".into()), ..FeeStructureQuery::default() }), 2);
    assert_eq!(count(&FeeStructureQuery { branch: Some("ECE".into()), ..FeeStructureQuery::default() }), 3);
    assert_eq!(count(&FeeStructureQuery { active: Some(false), ..FeeStructureQuery::default() }), 1);
    assert_eq!(count(&FeeStructureQuery { fee_type: Some("Bus Fee".into()), ..FeeStructureQuery::default() }), 1);
}

#[test]
fn fee_structure_apply_keeps_identity() {
    let mut fee = fixtures::fee_structures()[0].clone();
    let draft = FeeStructureDraft { fee_type: "Lab Fee".into(), amount: 3000, ..FeeStructureDraft::from(&fee) };
    fee.apply(draft);
    assert_eq!(fee.id, 1);
    assert_eq!(fee.created_on, "2025-02-15");
    assert_eq!(fee.fee_type, "Lab Fee");
    assert_eq!(fee.amount, 3000);
}

#[test]
fn draft_defaults_to_all_and_active() {
    let draft = FeeStructureDraft::default();
    assert_eq!(draft.branch, ALL);
    assert_eq!(draft.semester, ALL);
    assert!(draft.is_active);
}

#[test]
fn profile_update_copies_editable_fields() {
    let profile = fixtures::profile();
    let update = ProfileUpdate::from_profile(&profile);
    assert_eq!(update.phone, "9876543210");
    assert_eq!(update.guardian_phone, "9876543211");
}

#[test]
fn student_status_parse_matches_wire_names() {
    assert_eq!(StudentStatus::parse("paid"), Some(StudentStatus::Paid));
    assert_eq!(StudentStatus::parse(StudentStatus::Pending.as_str()), Some(StudentStatus::Pending));
    assert_eq!(StudentStatus::parse("overdue"), None);
}

#[test]
fn report_format_parses_its_own_names() {
    for format in ReportFormat::ALL {
        assert_eq!(ReportFormat::parse(format.as_str()), Some(format));
    }
    assert_eq!(ReportFormat::parse("docx"), None);
}
