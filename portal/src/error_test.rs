use super::*;

#[test]
fn not_found_message_names_entity() {
    let err = PortalError::not_found("Student", 42);
    assert_eq!(err.to_string(), "Student not found");
    assert_eq!(err, PortalError::NotFound { entity: "Student", id: "42".into() });
}

#[test]
fn messages_match_user_facing_text() {
    assert_eq!(PortalError::InvalidCredentials.to_string(), "Invalid username or password");
    assert_eq!(PortalError::PasswordMismatch.to_string(), "New password and confirmation do not match");
    assert_eq!(PortalError::Validation("Invalid phone number".into()).to_string(), "Invalid phone number");
}

#[test]
fn codes_are_distinct() {
    let codes = [
        PortalError::not_found("Fee", 1).code(),
        PortalError::InvalidCredentials.code(),
        PortalError::PasswordMismatch.code(),
        PortalError::Validation(String::new()).code(),
    ];
    for (i, a) in codes.iter().enumerate() {
        for b in &codes[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
