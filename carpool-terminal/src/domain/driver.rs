//! Driver types.

use std::fmt;

use super::{Name, Phone};

/// The person operating a pool's vehicle.
///
/// Two drivers are the same driver when their names match; full equality
/// also compares phone numbers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Driver {
    name: Name,
    phone: Phone,
}

impl Driver {
    /// Creates a driver from validated fields.
    pub fn new(name: Name, phone: Phone) -> Self {
        Self { name, phone }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    /// Returns true if both drivers have the same name.
    pub fn is_same_driver(&self, other: &Driver) -> bool {
        self.name == other.name
    }
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}; Phone: {}", self.name, self.phone)
    }
}

/// Whether a passenger has a driver assigned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum DriverAssignment {
    #[default]
    Unassigned,
    Assigned(Driver),
}

impl DriverAssignment {
    /// Returns the assigned driver, if any.
    pub fn driver(&self) -> Option<&Driver> {
        match self {
            DriverAssignment::Unassigned => None,
            DriverAssignment::Assigned(driver) => Some(driver),
        }
    }

    pub fn is_assigned(&self) -> bool {
        matches!(self, DriverAssignment::Assigned(_))
    }
}

impl From<Option<Driver>> for DriverAssignment {
    fn from(driver: Option<Driver>) -> Self {
        driver.map_or(DriverAssignment::Unassigned, DriverAssignment::Assigned)
    }
}
