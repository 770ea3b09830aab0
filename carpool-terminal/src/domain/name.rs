//! Person name type.

use std::fmt;

use super::ValidationError;

/// A validated person name.
///
/// Names are non-blank, start with an alphanumeric character and contain
/// only alphanumeric characters and spaces. Two passengers with equal names
/// are considered the same passenger.
///
/// # Examples
///
/// ```
/// use carpool_terminal::domain::Name;
///
/// let name = Name::parse("Alice Pauline").unwrap();
/// assert_eq!(name.as_str(), "Alice Pauline");
///
/// assert!(Name::parse("").is_err());
/// assert!(Name::parse(" Alice").is_err());
/// assert!(Name::parse("Alice*").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    /// Parse a name from a string.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let first = s
            .chars()
            .next()
            .ok_or_else(|| ValidationError::invalid_format("name", "must not be blank"))?;

        if !first.is_alphanumeric() {
            return Err(ValidationError::invalid_format(
                "name",
                "must start with a letter or digit",
            ));
        }

        if !s.chars().all(|c| c.is_alphanumeric() || c == ' ') {
            return Err(ValidationError::invalid_format(
                "name",
                "must contain only letters, digits and spaces",
            ));
        }

        Ok(Name(s.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the Name and returns the inner String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.0)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
