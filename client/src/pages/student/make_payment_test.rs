use super::*;
use portal::PortalError;
use time::macros::date;

fn card_form() -> PaymentForm {
    PaymentForm {
        method: PaymentMethod::Card,
        upi_id: "ignored@upi".into(),
        card_number: "4111 1111 1111 1111".into(),
        card_holder: " Ravi Kumar ".into(),
        card_expiry: "12/27".into(),
        card_cvv: "123".into(),
        bank: "State Bank of India".into(),
    }
}

#[test]
fn card_request_carries_only_card_details() {
    let request = card_form().request(2);
    assert_eq!(request.fee_id, 2);
    assert_eq!(request.upi_id, None);
    assert_eq!(request.bank, None);
    let card = request.card.unwrap();
    assert_eq!(card.number, "4111111111111111");
    assert_eq!(card.holder, "Ravi Kumar");
    assert_eq!(check_payment(&card_form().request(2), date!(2025 - 04 - 08)), Ok(()));
}

#[test]
fn netbanking_without_bank_is_rejected() {
    let form = PaymentForm { method: PaymentMethod::Netbanking, ..PaymentForm::default() };
    let request = form.request(1);
    assert_eq!(request.bank, None);
    assert_eq!(
        check_payment(&request, date!(2025 - 04 - 08)),
        Err(PortalError::Validation("Please select your bank".into()))
    );
}

#[test]
fn cash_is_offered_but_not_payable_online() {
    assert!(METHOD_TABS.contains(&PaymentMethod::Cash));
    let request = PaymentForm { method: PaymentMethod::Cash, ..PaymentForm::default() }.request(1);
    assert!(check_payment(&request, date!(2025 - 04 - 08)).is_err());
    assert_eq!(method_tab_label(PaymentMethod::Netbanking), "Net Banking");
}
