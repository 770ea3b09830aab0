//! Pool type.
//!
//! A `Pool` groups one driver with the passengers they pick up on a given
//! trip day and time.

use std::collections::BTreeSet;
use std::fmt;

use super::{Driver, Passenger, PoolConstructionError, Tag, TripDay, TripTime};

/// A driver together with one or more passengers.
///
/// # Invariants
///
/// - At least one passenger
///
/// Passengers are held by value. Trip-day agreement between the pool and
/// its passengers is checked when the pool is requested, not re-checked
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pool {
    driver: Driver,
    trip_day: TripDay,
    trip_time: TripTime,
    passengers: Vec<Passenger>,
    tags: BTreeSet<Tag>,
}

impl Pool {
    /// Constructs a pool.
    ///
    /// # Errors
    ///
    /// Returns [`PoolConstructionError::EmptyPassengerSet`] if `passengers`
    /// is empty.
    pub fn new(
        driver: Driver,
        trip_day: TripDay,
        trip_time: TripTime,
        passengers: Vec<Passenger>,
        tags: BTreeSet<Tag>,
    ) -> Result<Self, PoolConstructionError> {
        if passengers.is_empty() {
            return Err(PoolConstructionError::EmptyPassengerSet);
        }

        Ok(Pool {
            driver,
            trip_day,
            trip_time,
            passengers,
            tags,
        })
    }

    /// Returns a pool with the same driver, trip and tags but different
    /// passengers.
    ///
    /// Used to re-bind persisted pools to freshly loaded passengers.
    pub fn with_passengers(
        &self,
        passengers: Vec<Passenger>,
    ) -> Result<Self, PoolConstructionError> {
        Self::new(
            self.driver.clone(),
            self.trip_day,
            self.trip_time,
            passengers,
            self.tags.clone(),
        )
    }

    pub fn driver(&self) -> &Driver {
        &self.driver
    }

    pub fn trip_day(&self) -> TripDay {
        self.trip_day
    }

    pub fn trip_time(&self) -> TripTime {
        self.trip_time
    }

    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Returns true if `passenger` (by full equality) belongs to this pool.
    pub fn contains(&self, passenger: &Passenger) -> bool {
        self.passengers.contains(passenger)
    }

    /// Returns true if both pools share driver, trip day and trip time.
    ///
    /// Passengers and tags are ignored.
    pub fn is_same_pool(&self, other: &Pool) -> bool {
        self.driver == other.driver
            && self.trip_day == other.trip_day
            && self.trip_time == other.trip_time
    }
}

impl fmt::Display for Pool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Driver: {}; Trip Day: {}; Trip Time: {}; Passengers: ",
            self.driver, self.trip_day, self.trip_time
        )?;

        for (i, passenger) in self.passengers.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", passenger.name())?;
        }

        if !self.tags.is_empty() {
            f.write_str("; Tags: ")?;
            for tag in &self.tags {
                write!(f, "{tag}")?;
            }
        }
        Ok(())
    }
}
