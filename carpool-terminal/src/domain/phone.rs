//! Phone number type.

use std::fmt;

use super::ValidationError;

const MIN_DIGITS: usize = 3;
const MAX_DIGITS: usize = 15;

/// A validated phone number: between 3 and 15 ASCII digits.
///
/// # Examples
///
/// ```
/// use carpool_terminal::domain::Phone;
///
/// let phone = Phone::parse("94351253").unwrap();
/// assert_eq!(phone.as_str(), "94351253");
///
/// assert!(Phone::parse("91").is_err());
/// assert!(Phone::parse("9011p041").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Parse a phone number from a string.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::invalid_format(
                "phone",
                "must contain only digits",
            ));
        }

        if s.len() < MIN_DIGITS || s.len() > MAX_DIGITS {
            return Err(ValidationError::invalid_format(
                "phone",
                "must be between 3 and 15 digits long",
            ));
        }

        Ok(Phone(s.to_string()))
    }

    /// Returns the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Phone({})", self.0)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
