use super::*;
use time::macros::date;

#[test]
fn email_format() {
    assert!(is_valid_email("ravi.kumar@svit.edu.in"));
    assert!(!is_valid_email("ravi.kumar@svit"));
    assert!(!is_valid_email("@svit.edu.in"));
    assert!(!is_valid_email(""));
}

#[test]
fn indian_mobile_numbers() {
    assert!(is_valid_phone("9876543210"));
    assert!(is_valid_phone("6000000000"));
    assert!(!is_valid_phone("5876543210"));
    assert!(!is_valid_phone("987654321"));
    assert!(!is_valid_phone("+919876543210"));
}

#[test]
fn roll_numbers() {
    assert!(is_valid_roll_number("SVIT20CS101"));
    assert!(is_valid_roll_number("SVIT21CIVIL034"));
    assert!(!is_valid_roll_number("SVIT20C101"));
    assert!(!is_valid_roll_number("svit20cs101"));
}

#[test]
fn password_rules_report_first_failure() {
    assert_eq!(validate_password("").message, "Password is required");
    assert_eq!(validate_password("Ab1!").message, "Password must be at least 8 characters long");
    assert_eq!(validate_password("Abcdefgh!").message, "Password must contain at least one number");
    assert_eq!(validate_password("abcdefg1!").message, "Password must contain at least one uppercase letter");
    assert_eq!(validate_password("Abcdefg12").message, "Password must contain at least one special character");

    let strong = validate_password("Abcdefg1!");
    assert!(strong.valid);
    assert_eq!(strong.message, "Password is strong");
    assert!(strong.error().is_none());
    assert_eq!(validate_password("short").error(), Some("Password must be at least 8 characters long"));
}

#[test]
fn password_confirmation() {
    assert!(passwords_match("Secret#123", "Secret#123"));
    assert!(!passwords_match("Secret#123", "secret#123"));
}

#[test]
fn amounts() {
    assert!(is_valid_amount("0"));
    assert!(is_valid_amount("2500.50"));
    assert!(!is_valid_amount("-1"));
    assert!(!is_valid_amount(""));
    assert!(!is_valid_amount("abc"));
}

#[test]
fn future_dates_include_today() {
    let today = date!(2025 - 04 - 10);
    assert!(is_valid_future_date("2025-04-10", today));
    assert!(is_valid_future_date("2025-12-31", today));
    assert!(!is_valid_future_date("2025-04-09", today));
    assert!(!is_valid_future_date("", today));
}

#[test]
fn luhn_card_numbers() {
    assert!(is_valid_card_number("4111 1111 1111 1111"));
    assert!(is_valid_card_number("5500-0000-0000-0004"));
    assert!(!is_valid_card_number("4111 1111 1111 1112"));
    assert!(!is_valid_card_number("4111 1111 111"));
}

#[test]
fn card_expiry_against_current_month() {
    let today = date!(2025 - 04 - 10);
    assert!(is_valid_card_expiry("04/25", today));
    assert!(is_valid_card_expiry("01/26", today));
    assert!(!is_valid_card_expiry("03/25", today));
    assert!(!is_valid_card_expiry("12/24", today));
    assert!(!is_valid_card_expiry("13/25", today));
    assert!(!is_valid_card_expiry("4/25", today));
}

#[test]
fn cvv_lengths() {
    assert!(is_valid_cvv("123"));
    assert!(is_valid_cvv("1234"));
    assert!(is_valid_cvv(" 12 3 "));
    assert!(!is_valid_cvv("12"));
    assert!(!is_valid_cvv("12345"));
    assert!(!is_valid_cvv(""));
}

#[test]
fn upi_ids() {
    assert!(is_valid_upi_id("ravi.kumar@okaxis"));
    assert!(is_valid_upi_id("9876543210@ybl"));
    assert!(!is_valid_upi_id("ravi@ok.axis"));
    assert!(!is_valid_upi_id("ravi"));
}

// =============================================================
// Requests
// =============================================================

fn card_request(number: &str, expiry: &str) -> PaymentRequest {
    PaymentRequest {
        fee_id: 1,
        payment_method: PaymentMethod::Card,
        card: Some(crate::model::CardDetails {
            number: number.into(),
            holder: "Ravi Kumar".into(),
            expiry: expiry.into(),
            cvv: "123".into(),
        }),
        ..PaymentRequest::default()
    }
}

#[test]
fn payment_requires_instrument_fields() {
    let today = date!(2025 - 04 - 10);
    let upi = PaymentRequest { fee_id: 1, upi_id: Some("ravi@okaxis".into()), ..PaymentRequest::default() };
    assert_eq!(check_payment(&upi, today), Ok(()));

    let missing_upi = PaymentRequest { fee_id: 1, ..PaymentRequest::default() };
    assert_eq!(
        check_payment(&missing_upi, today),
        Err(PortalError::Validation("Please enter a valid UPI ID".into()))
    );

    assert_eq!(check_payment(&card_request("4111 1111 1111 1111", "12/26"), today), Ok(()));
    assert!(check_payment(&card_request("4111 1111 1111 1112", "12/26"), today).is_err());
    assert!(check_payment(&card_request("4111 1111 1111 1111", "01/25"), today).is_err());

    let bank = PaymentRequest {
        fee_id: 1,
        payment_method: PaymentMethod::Netbanking,
        bank: Some("HDFC Bank".into()),
        ..PaymentRequest::default()
    };
    assert_eq!(check_payment(&bank, today), Ok(()));
}

#[test]
fn offline_methods_are_refused() {
    let cash = PaymentRequest { fee_id: 1, payment_method: PaymentMethod::Cash, ..PaymentRequest::default() };
    assert!(matches!(check_payment(&cash, date!(2025 - 04 - 10)), Err(PortalError::Validation(_))));
}

#[test]
fn profile_update_checks_contact_fields() {
    let mut update = ProfileUpdate {
        email: "ravi.kumar@svit.edu.in".into(),
        phone: "9876543210".into(),
        address: String::new(),
        guardian_phone: String::new(),
    };
    assert_eq!(check_profile_update(&update), Ok(()));
    update.phone = "12345".into();
    assert_eq!(
        check_profile_update(&update),
        Err(PortalError::Validation("Please enter a valid 10-digit mobile number".into()))
    );
}

#[test]
fn password_change_checks_match_before_strength() {
    let change = |new: &str, confirm: &str| PasswordChange {
        current_password: "password123".into(),
        new_password: new.into(),
        confirm_password: confirm.into(),
    };
    assert_eq!(check_password_change(&change("weak", "other")), Err(PortalError::PasswordMismatch));
    assert_eq!(
        check_password_change(&change("weak", "weak")),
        Err(PortalError::Validation("Password must be at least 8 characters long".into()))
    );
    assert_eq!(check_password_change(&change("Str0ng!pass", "Str0ng!pass")), Ok(()));
}

#[test]
fn fee_structure_draft_needs_type_amount_and_future_due_date() {
    let today = date!(2025 - 04 - 08);
    let mut draft = FeeStructureDraft {
        fee_type: "Lab Fee".into(),
        amount: 3000,
        due_date: "2025-04-08".into(),
        ..FeeStructureDraft::default()
    };
    assert_eq!(check_fee_structure(&draft, today), Ok(()));
    draft.due_date = "2025-04-07".into();
    assert_eq!(
        check_fee_structure(&draft, today),
        Err(PortalError::Validation("Due date must be today or later".into()))
    );
    draft.amount = 0;
    assert_eq!(
        check_fee_structure(&draft, today),
        Err(PortalError::Validation("Amount must be greater than zero".into()))
    );
    draft.fee_type = " ".into();
    assert_eq!(check_fee_structure(&draft, today), Err(PortalError::Validation("Fee type is required".into())));
}
