//! Domain error types.
//!
//! These errors represent validation failures and structural violations
//! in the domain layer. They are distinct from store, command and IO errors.

/// The category of a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Input does not match the value's domain rule.
    InvalidFormat,
}

/// Error returned when a value object rejects its input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {field}: {reason}")]
pub struct ValidationError {
    field: &'static str,
    reason: &'static str,
}

impl ValidationError {
    pub(crate) fn invalid_format(field: &'static str, reason: &'static str) -> Self {
        Self { field, reason }
    }

    /// Returns the error category.
    pub fn kind(&self) -> ValidationErrorKind {
        ValidationErrorKind::InvalidFormat
    }

    /// Returns the name of the rejected field (e.g. "phone").
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Returns the violated rule.
    pub fn reason(&self) -> &'static str {
        self.reason
    }
}

/// Structural violations detected while building a [`Pool`](super::Pool).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolConstructionError {
    /// A pool was requested with no passengers.
    #[error("a pool must contain at least one passenger")]
    EmptyPassengerSet,
}
