//! Command error types.

/// The business rule a command tripped over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandErrorKind {
    /// A display index is past the end of the displayed list
    InvalidIndex,
    /// A pool was requested without any passengers
    NoCommuters,
    /// A passenger's trip day differs from the requested pool's
    TripDayMismatch,
    /// An identical pool already exists
    DuplicatePool,
    /// A passenger is still referenced by a pool
    HasActivePool,
    /// Some passengers were deleted, others were blocked by pools
    PartialDelete,
    /// A passenger with the same name already exists
    DuplicatePassenger,
    /// An edit was requested without any field to change
    NotEdited,
}

/// A business-rule violation reported back to the user.
///
/// The message is ready for display. Every kind except
/// [`CommandErrorKind::PartialDelete`] leaves the store untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct CommandError {
    kind: CommandErrorKind,
    message: String,
}

impl CommandError {
    pub fn new(kind: CommandErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> CommandErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
