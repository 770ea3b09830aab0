//! Narrowing the passenger list.

use std::fmt;

use tracing::debug;

use super::messages::passengers_listed_overview;
use super::{Command, CommandError, CommandResult};
use crate::domain::Passenger;
use crate::store::{Filter, Model};

/// Shows only the passengers accepted by a filter.
#[derive(Clone)]
pub struct FindCommand {
    filter: Filter<Passenger>,
}

impl FindCommand {
    pub fn new(filter: Filter<Passenger>) -> Self {
        Self { filter }
    }
}

impl fmt::Debug for FindCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FindCommand").finish_non_exhaustive()
    }
}

impl Command for FindCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        model.update_passenger_filter(self.filter.clone());
        let count = model.filtered_passengers().len();
        debug!(count, "passenger filter updated");
        Ok(CommandResult::new(passengers_listed_overview(count)))
    }
}
