//! Passenger type.

use std::collections::BTreeSet;
use std::fmt;

use super::{Address, DriverAssignment, Name, Phone, Tag, TripDay, TripTime};

/// Placeholder shown in place of a driver when none is assigned.
pub const NO_ASSIGNED_DRIVER: &str = "No driver assigned to this passenger.";

/// A rider who needs a lift.
///
/// Passengers are immutable: reassigning a driver or changing tags produces
/// a new value via [`Passenger::with_driver`] or [`Passenger::with_tags`].
///
/// Identity ([`Passenger::is_same_passenger`]) is the name alone. `PartialEq`
/// compares every field, including the driver assignment and tags.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Passenger {
    name: Name,
    phone: Phone,
    address: Address,
    trip_day: TripDay,
    trip_time: TripTime,
    tags: BTreeSet<Tag>,
    driver: DriverAssignment,
}

impl Passenger {
    /// Creates a passenger with no driver assigned.
    pub fn new(
        name: Name,
        phone: Phone,
        address: Address,
        trip_day: TripDay,
        trip_time: TripTime,
        tags: BTreeSet<Tag>,
    ) -> Self {
        Self {
            name,
            phone,
            address,
            trip_day,
            trip_time,
            tags,
            driver: DriverAssignment::Unassigned,
        }
    }

    /// Returns a copy of this passenger with a different driver assignment.
    pub fn with_driver(&self, driver: DriverAssignment) -> Self {
        Self {
            driver,
            ..self.clone()
        }
    }

    /// Returns a copy of this passenger with a different tag set.
    pub fn with_tags(&self, tags: BTreeSet<Tag>) -> Self {
        Self {
            tags,
            ..self.clone()
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn trip_day(&self) -> TripDay {
        self.trip_day
    }

    pub fn trip_time(&self) -> TripTime {
        self.trip_time
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn driver(&self) -> &DriverAssignment {
        &self.driver
    }

    /// Human-readable driver, or [`NO_ASSIGNED_DRIVER`].
    pub fn driver_description(&self) -> String {
        match &self.driver {
            DriverAssignment::Assigned(driver) => driver.to_string(),
            DriverAssignment::Unassigned => NO_ASSIGNED_DRIVER.to_string(),
        }
    }

    /// Returns true if both passengers have the same name.
    ///
    /// This is a weaker notion of equality used for duplicate detection.
    pub fn is_same_passenger(&self, other: &Passenger) -> bool {
        self.name == other.name
    }
}

impl fmt::Display for Passenger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Address: {}; Trip Day: {}; Trip Time: {}; Driver: {}",
            self.name,
            self.phone,
            self.address,
            self.trip_day,
            self.trip_time,
            self.driver_description()
        )?;

        if !self.tags.is_empty() {
            f.write_str("; Tags: ")?;
            for tag in &self.tags {
                write!(f, "{tag}")?;
            }
        }
        Ok(())
    }
}
