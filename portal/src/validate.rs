//! Form validators.
//!
//! Validators never fail: they answer with a `bool` or a [`Validation`]
//! carrying the message to show next to the field.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::sync::LazyLock;

use regex::Regex;
use time::Date;

use crate::error::PortalError;
use crate::format::parse_date;
use crate::model::{FeeStructureDraft, PasswordChange, PaymentMethod, PaymentRequest, ProfileUpdate};

/// Outcome of a validator that explains itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Validation {
    pub valid: bool,
    pub message: String,
}

impl Validation {
    fn pass(message: &str) -> Self {
        Self { valid: true, message: message.to_owned() }
    }

    fn fail(message: &str) -> Self {
        Self { valid: false, message: message.to_owned() }
    }

    /// `Some(message)` when invalid.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        (!self.valid).then_some(self.message.as_str())
    }
}

// =============================================================================
// PATTERNS
// =============================================================================

type Pattern = LazyLock<Option<Regex>>;

static EMAIL: Pattern = LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").ok());
static PHONE: Pattern = LazyLock::new(|| Regex::new(r"^[6-9]\d{9}$").ok());
static ROLL_NUMBER: Pattern = LazyLock::new(|| Regex::new(r"^SVIT\d{2}[A-Z]{2,5}\d{3}$").ok());
static CARD_EXPIRY: Pattern = LazyLock::new(|| Regex::new(r"^(0[1-9]|1[0-2])/\d{2}$").ok());
static UPI_ID: Pattern = LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9._-]+@[a-zA-Z0-9]+$").ok());

const PASSWORD_SPECIALS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

fn matches(pattern: &Pattern, value: &str) -> bool {
    pattern.as_ref().is_some_and(|re| re.is_match(value))
}

// =============================================================================
// CONTACT & IDENTITY
// =============================================================================

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    matches(&EMAIL, email)
}

/// Indian mobile number: ten digits starting 6-9.
#[must_use]
pub fn is_valid_phone(phone: &str) -> bool {
    matches(&PHONE, phone)
}

/// College roll number, e.g. `SVIT20CS101`.
#[must_use]
pub fn is_valid_roll_number(roll: &str) -> bool {
    matches(&ROLL_NUMBER, roll)
}

// =============================================================================
// PASSWORDS
// =============================================================================

/// At least eight characters with a digit, an uppercase letter, and a
/// special character. Checks run in that order; the first failure wins.
#[must_use]
pub fn validate_password(password: &str) -> Validation {
    if password.is_empty() {
        return Validation::fail("Password is required");
    }
    if password.chars().count() < 8 {
        return Validation::fail("Password must be at least 8 characters long");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Validation::fail("Password must contain at least one number");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Validation::fail("Password must contain at least one uppercase letter");
    }
    if !password.chars().any(|c| PASSWORD_SPECIALS.contains(c)) {
        return Validation::fail("Password must contain at least one special character");
    }
    Validation::pass("Password is strong")
}

#[must_use]
pub fn passwords_match(password: &str, confirm: &str) -> bool {
    password == confirm
}

// =============================================================================
// AMOUNTS & DATES
// =============================================================================

/// Non-negative number; blank input is invalid.
#[must_use]
pub fn is_valid_amount(raw: &str) -> bool {
    let trimmed = raw.trim();
    !trimmed.is_empty() && trimmed.parse::<f64>().is_ok_and(|n| n.is_finite() && n >= 0.0)
}

/// A parseable date on or after `today`.
#[must_use]
pub fn is_valid_future_date(raw: &str, today: Date) -> bool {
    parse_date(raw).is_some_and(|d| d >= today)
}

// =============================================================================
// PAYMENT INSTRUMENTS
// =============================================================================

/// 13 to 19 digits (spaces and separators ignored) passing the Luhn check.
#[must_use]
pub fn is_valid_card_number(number: &str) -> bool {
    let digits: Vec<u32> = number.chars().filter_map(|c| c.to_digit(10)).collect();
    if !(13..=19).contains(&digits.len()) {
        return false;
    }
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum();
    sum % 10 == 0
}

/// `MM/YY` not earlier than the month of `today`.
#[must_use]
pub fn is_valid_card_expiry(expiry: &str, today: Date) -> bool {
    if !matches(&CARD_EXPIRY, expiry) {
        return false;
    }
    let Some((month, year)) = expiry.split_once('/') else {
        return false;
    };
    let (Ok(month), Ok(year)) = (month.parse::<u8>(), year.parse::<i32>()) else {
        return false;
    };
    let current_year = today.year().rem_euclid(100);
    let current_month = u8::from(today.month());
    !(year < current_year || (year == current_year && month < current_month))
}

/// Three or four digits once separators are stripped.
#[must_use]
pub fn is_valid_cvv(cvv: &str) -> bool {
    let digits = cvv.chars().filter(char::is_ascii_digit).count();
    (3..=4).contains(&digits)
}

/// `name@provider`.
#[must_use]
pub fn is_valid_upi_id(upi: &str) -> bool {
    matches(&UPI_ID, upi)
}

// =============================================================================
// REQUESTS
// =============================================================================

/// Check the instrument fields a payment method needs. Cash and DD are
/// settled at the accounts office and cannot be paid online.
///
/// # Errors
///
/// [`PortalError::Validation`] naming the first missing or malformed field.
pub fn check_payment(request: &PaymentRequest, today: Date) -> Result<(), PortalError> {
    let invalid = |message: &str| Err(PortalError::Validation(message.to_owned()));
    match request.payment_method {
        PaymentMethod::Upi => {
            if !request.upi_id.as_deref().is_some_and(is_valid_upi_id) {
                return invalid("Please enter a valid UPI ID");
            }
        }
        PaymentMethod::Card => {
            let Some(card) = &request.card else {
                return invalid("Card details are required");
            };
            if !is_valid_card_number(&card.number) {
                return invalid("Please enter a valid card number");
            }
            if card.holder.trim().is_empty() {
                return invalid("Please enter the name on card");
            }
            if !is_valid_card_expiry(&card.expiry, today) {
                return invalid("Please enter a valid expiry date");
            }
            if !is_valid_cvv(&card.cvv) {
                return invalid("Please enter a valid CVV");
            }
        }
        PaymentMethod::Netbanking => {
            if request.bank.as_deref().is_none_or(|b| b.trim().is_empty()) {
                return invalid("Please select your bank");
            }
        }
        PaymentMethod::Cash | PaymentMethod::Dd => {
            return invalid("Cash and DD payments are accepted at the accounts office only");
        }
    }
    Ok(())
}

/// # Errors
///
/// [`PortalError::Validation`] for a malformed email or phone number.
pub fn check_profile_update(update: &ProfileUpdate) -> Result<(), PortalError> {
    if !is_valid_email(update.email.trim()) {
        return Err(PortalError::Validation("Please enter a valid email address".to_owned()));
    }
    if !is_valid_phone(update.phone.trim()) {
        return Err(PortalError::Validation("Please enter a valid 10-digit mobile number".to_owned()));
    }
    if !update.guardian_phone.trim().is_empty() && !is_valid_phone(update.guardian_phone.trim()) {
        return Err(PortalError::Validation("Please enter a valid guardian phone number".to_owned()));
    }
    Ok(())
}

/// Confirmation first, then strength.
///
/// # Errors
///
/// [`PortalError::PasswordMismatch`] when the confirmation differs,
/// otherwise [`PortalError::Validation`] with the strength message.
pub fn check_password_change(change: &PasswordChange) -> Result<(), PortalError> {
    if !passwords_match(&change.new_password, &change.confirm_password) {
        return Err(PortalError::PasswordMismatch);
    }
    if let Some(message) = validate_password(&change.new_password).error() {
        return Err(PortalError::Validation(message.to_owned()));
    }
    Ok(())
}

/// Fee-structure add/edit form: a type, a positive amount, and a due date no
/// earlier than `today`.
///
/// # Errors
///
/// [`PortalError::Validation`] for the first failing field.
pub fn check_fee_structure(draft: &FeeStructureDraft, today: Date) -> Result<(), PortalError> {
    if draft.fee_type.trim().is_empty() {
        return Err(PortalError::Validation("Fee type is required".to_owned()));
    }
    if draft.amount == 0 {
        return Err(PortalError::Validation("Amount must be greater than zero".to_owned()));
    }
    if !is_valid_future_date(&draft.due_date, today) {
        return Err(PortalError::Validation("Due date must be today or later".to_owned()));
    }
    Ok(())
}
