//! Tag type.

use std::fmt;

use super::ValidationError;

/// A short alphanumeric label attached to passengers and pools.
///
/// Tags render in brackets, e.g. `[friends]`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(String);

impl Tag {
    /// Parse a tag from a string.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::invalid_format("tag", "must not be empty"));
        }

        if !s.chars().all(char::is_alphanumeric) {
            return Err(ValidationError::invalid_format(
                "tag",
                "must be alphanumeric",
            ));
        }

        Ok(Tag(s.to_string()))
    }

    /// Returns the tag name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag({})", self.0)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}
