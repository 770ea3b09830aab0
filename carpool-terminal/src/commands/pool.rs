//! Creating a pool from displayed passengers.

use std::collections::BTreeSet;

use tracing::{debug, info, warn};

use super::messages::MESSAGE_INVALID_PASSENGER_DISPLAYED_INDEX;
use super::{Command, CommandError, CommandErrorKind, CommandResult, resolve};
use crate::domain::{Driver, Index, Passenger, Pool, Tag, TripDay, TripTime};
use crate::store::Model;

/// Largest gap, in minutes, between a passenger's trip time and the pool
/// time that does not trigger a warning.
pub const MAX_TIME_DIFFERENCE_MINS: u32 = 15;

pub const MESSAGE_NO_COMMUTERS: &str = "No commuters were selected.";
pub const MESSAGE_DUPLICATE_POOL: &str = "This pool already exists in the address book";
pub const MESSAGE_TRIP_DAY_MISMATCH: &str = "One of the passengers specified have a trip day \
                                             that does not match this pool driver's trip day";

/// Groups the passengers at the given display positions under one driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolCommand {
    driver: Driver,
    indexes: BTreeSet<Index>,
    trip_day: TripDay,
    trip_time: TripTime,
    tags: BTreeSet<Tag>,
}

impl PoolCommand {
    pub fn new(
        driver: Driver,
        indexes: BTreeSet<Index>,
        trip_day: TripDay,
        trip_time: TripTime,
        tags: BTreeSet<Tag>,
    ) -> Self {
        Self {
            driver,
            indexes,
            trip_day,
            trip_time,
            tags,
        }
    }
}

impl Command for PoolCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        if self.indexes.is_empty() {
            return Err(CommandError::new(
                CommandErrorKind::NoCommuters,
                MESSAGE_NO_COMMUTERS,
            ));
        }

        let snapshot = model.filtered_passengers();
        let passengers = self
            .indexes
            .iter()
            .map(|&index| {
                resolve(&snapshot, index, MESSAGE_INVALID_PASSENGER_DISPLAYED_INDEX).cloned()
            })
            .collect::<Result<Vec<Passenger>, _>>()?;

        if let Some(mismatch) = passengers.iter().find(|p| p.trip_day() != self.trip_day) {
            debug!(passenger = %mismatch.name(), day = %mismatch.trip_day(), "trip day mismatch");
            return Err(CommandError::new(
                CommandErrorKind::TripDayMismatch,
                MESSAGE_TRIP_DAY_MISMATCH,
            ));
        }

        let has_time_warning = passengers
            .iter()
            .any(|p| p.trip_time().minutes_between(&self.trip_time) > MAX_TIME_DIFFERENCE_MINS);

        let pool = Pool::new(
            self.driver.clone(),
            self.trip_day,
            self.trip_time,
            passengers,
            self.tags.clone(),
        )
        .map_err(|e| CommandError::new(CommandErrorKind::NoCommuters, e.to_string()))?;

        if model.has_pool(&pool) {
            return Err(CommandError::new(
                CommandErrorKind::DuplicatePool,
                MESSAGE_DUPLICATE_POOL,
            ));
        }

        model
            .add_pool(pool)
            .map_err(|_| CommandError::new(CommandErrorKind::DuplicatePool, MESSAGE_DUPLICATE_POOL))?;
        model.show_all_pools();

        if has_time_warning {
            warn!(
                driver = %self.driver.name(),
                time = %self.trip_time,
                "pool created with passengers more than {} minutes off the pool time",
                MAX_TIME_DIFFERENCE_MINS
            );
            return Ok(CommandResult::new(format!(
                "Successfully created pool: {}. \nHowever, note that you have passengers with \
                 time differences with the pool time of more than {} minutes.",
                self.driver, MAX_TIME_DIFFERENCE_MINS
            )));
        }

        info!(driver = %self.driver.name(), "pool created");
        Ok(CommandResult::new(format!(
            "Successfully created pool: {}",
            self.driver
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::AddressBook;
    use crate::store::predicates::TripDayIs;
    use crate::testutil::{
        PassengerBuilder, address_book_without_pools, alice, assert_command_failure, bob, carl,
        driver_bob, driver_fiona, typical_address_book,
    };
    use std::sync::Arc;

    fn indexes(ns: &[usize]) -> BTreeSet<Index> {
        ns.iter().map(|&n| Index::from_one_based(n).unwrap()).collect()
    }

    fn monday_pool(ns: &[usize], time: &str) -> PoolCommand {
        PoolCommand::new(
            driver_fiona(),
            indexes(ns),
            TripDay::parse("monday").unwrap(),
            TripTime::parse_hhmm(time).unwrap(),
            BTreeSet::new(),
        )
    }

    #[test]
    fn creates_pool_within_time_window() {
        let mut model = Model::new(address_book_without_pools());
        // Alice 19:30, Benson 19:45: both within 15 minutes of 19:30.
        let result = monday_pool(&[1, 2], "1930").execute(&mut model).unwrap();

        assert_eq!(
            result.feedback(),
            "Successfully created pool: Fiona Kunz; Phone: 9482427"
        );
        let pools = model.address_book().pools();
        assert_eq!(pools.len(), 1);
        assert_eq!(pools[0].passengers(), &[alice(), bob()]);
        assert_eq!(pools[0].driver(), &driver_fiona());
    }

    #[test]
    fn warns_beyond_time_window() {
        let mut model = Model::new(address_book_without_pools());
        // Carl travels at 20:00, 30 minutes after the pool.
        let result = monday_pool(&[1, 3], "1930").execute(&mut model).unwrap();

        assert_eq!(
            result.feedback(),
            "Successfully created pool: Fiona Kunz; Phone: 9482427. \nHowever, note that you \
             have passengers with time differences with the pool time of more than 15 minutes."
        );
        assert_eq!(model.address_book().pools().len(), 1);
    }

    #[test]
    fn exactly_fifteen_minutes_is_not_a_warning() {
        let mut model = Model::new(address_book_without_pools());
        // Benson at 19:45 against a 20:00 pool.
        let result = monday_pool(&[2], "2000").execute(&mut model).unwrap();
        assert!(!result.feedback().contains("However"));
    }

    #[test]
    fn time_difference_does_not_wrap_midnight() {
        let mut book = AddressBook::new();
        book.add_passenger(
            PassengerBuilder::new()
                .name("Night Owl")
                .trip_day("monday")
                .trip_time("2350")
                .build(),
        )
        .unwrap();
        let mut model = Model::new(book);

        // 23:50 and 00:05 are 1425 minutes apart, not 15.
        let result = monday_pool(&[1], "0005").execute(&mut model).unwrap();
        assert!(result.feedback().contains("more than 15 minutes"));
    }

    #[test]
    fn no_commuters() {
        let mut model = Model::new(address_book_without_pools());
        let err = assert_command_failure(
            &monday_pool(&[], "1930"),
            &mut model,
            CommandErrorKind::NoCommuters,
        );
        assert_eq!(err.message(), MESSAGE_NO_COMMUTERS);
    }

    #[test]
    fn trip_day_mismatch_leaves_pools_unchanged() {
        let mut model = Model::new(typical_address_book());
        // Daniel (4) travels on Tuesday.
        let err = assert_command_failure(
            &monday_pool(&[3, 4], "1930"),
            &mut model,
            CommandErrorKind::TripDayMismatch,
        );
        assert_eq!(err.message(), MESSAGE_TRIP_DAY_MISMATCH);
        assert_eq!(model.address_book().pools(), typical_address_book().pools());
    }

    #[test]
    fn out_of_range_index() {
        let mut model = Model::new(address_book_without_pools());
        assert_command_failure(
            &monday_pool(&[1, 7], "1930"),
            &mut model,
            CommandErrorKind::InvalidIndex,
        );
    }

    #[test]
    fn duplicate_pool() {
        let mut model = Model::new(typical_address_book());
        // Same driver, day and time as the home pool, different passenger.
        let err = assert_command_failure(
            &monday_pool(&[3], "1930"),
            &mut model,
            CommandErrorKind::DuplicatePool,
        );
        assert_eq!(err.message(), MESSAGE_DUPLICATE_POOL);
    }

    #[test]
    fn indexes_follow_filtered_view() {
        let mut model = Model::new(address_book_without_pools());
        model.update_passenger_filter(Arc::new(TripDayIs(TripDay::parse("tuesday").unwrap())));

        let command = PoolCommand::new(
            driver_bob(),
            indexes(&[2]),
            TripDay::parse("tuesday").unwrap(),
            TripTime::parse_hhmm("0815").unwrap(),
            BTreeSet::from([Tag::parse("office").unwrap()]),
        );
        command.execute(&mut model).unwrap();

        let pool = &model.address_book().pools()[0];
        let members: Vec<&Passenger> = pool.passengers().iter().collect();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].name().as_str(), "Elle Meyer");
    }

    #[test]
    fn passengers_keep_their_driver_assignment() {
        let mut model = Model::new(address_book_without_pools());
        monday_pool(&[3], "2000").execute(&mut model).unwrap();
        assert!(!model.address_book().passengers()[2].driver().is_assigned());
        assert!(model.is_pooled(&carl()));
    }
}
