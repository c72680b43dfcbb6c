use super::*;
use crate::validate::{is_valid_email, is_valid_phone, is_valid_roll_number};

#[test]
fn demo_accounts_cover_both_roles() {
    let accounts = accounts();
    assert_eq!(accounts.len(), 2);
    assert_eq!(accounts[0].user.role, Role::Student);
    assert_eq!(accounts[1].user.role, Role::Admin);
    assert_eq!(accounts[1].user.department.as_deref(), Some("Administration"));
}

#[test]
fn pending_fees_are_the_first_three_payables() {
    let pending = pending_fees();
    assert_eq!(pending.iter().map(|f| f.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    let lab = fee_details().into_iter().find(|d| d.fee.id == 4);
    assert_eq!(lab.map(|d| (d.fee.fee_type.clone(), d.total_payable())), Some(("Lab Fee".to_owned(), 3535)));
}

#[test]
fn receipt_totals_add_up() {
    for receipt in receipts() {
        assert_eq!(receipt.total_amount, receipt.amount + receipt.convenience_fee + receipt.late_charge);
    }
}

#[test]
fn student_records_are_consistent() {
    for student in students() {
        assert_eq!(student.pending_fees, student.total_fees - student.paid_fees);
        assert!(is_valid_roll_number(&student.roll_number), "{}", student.roll_number);
        assert!(is_valid_email(&student.email));
        assert!(is_valid_phone(&student.phone));
    }
}

#[test]
fn recent_payments_mirror_ledger_head() {
    let recent = recent_payments();
    let ledger = transactions();
    assert_eq!(recent.len(), 3);
    for (r, t) in recent.iter().zip(&ledger) {
        assert_eq!(r.id, t.id);
        assert_eq!(r.amount, t.amount);
    }
}

#[test]
fn ledger_ids_are_unique() {
    let ledger = transactions();
    let mut ids: Vec<&str> = ledger.iter().map(|t| t.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), ledger.len());
}
