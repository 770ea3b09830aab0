//! Street address type.

use std::fmt;

use super::ValidationError;

/// A passenger's pickup address.
///
/// Any text is accepted as long as it does not start with whitespace.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Address(String);

impl Address {
    /// Parse an address from a string.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        match s.chars().next() {
            None => Err(ValidationError::invalid_format(
                "address",
                "must not be blank",
            )),
            Some(c) if c.is_whitespace() => Err(ValidationError::invalid_format(
                "address",
                "must not start with whitespace",
            )),
            Some(_) => Ok(Address(s.to_string())),
        }
    }

    /// Returns the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.0)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
