//! Error taxonomy shared by the repository, the HTTP layer, and the UI.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a portal data operation.
///
/// Validators never produce this; they return booleans or
/// [`crate::validate::Validation`]. This covers lookups, credentials, and
/// request bodies the repository refuses.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PortalError {
    /// Lookup by id or email found nothing.
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: String },
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("New password and confirmation do not match")]
    PasswordMismatch,
    #[error("{0}")]
    Validation(String),
}

impl PortalError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound { entity, id: id.to_string() }
    }

    /// Stable machine-readable code, mirrored in JSON error bodies.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "E_NOT_FOUND",
            Self::InvalidCredentials => "E_INVALID_CREDENTIALS",
            Self::PasswordMismatch => "E_PASSWORD_MISMATCH",
            Self::Validation(_) => "E_VALIDATION",
        }
    }
}
