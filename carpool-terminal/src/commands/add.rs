//! Adding a passenger.

use tracing::info;

use super::messages::MESSAGE_DUPLICATE_PASSENGER;
use super::{Command, CommandError, CommandErrorKind, CommandResult};
use crate::domain::Passenger;
use crate::store::Model;

/// Adds a passenger to the address book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommand {
    passenger: Passenger,
}

impl AddCommand {
    pub fn new(passenger: Passenger) -> Self {
        Self { passenger }
    }
}

impl Command for AddCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        if model.has_passenger(&self.passenger) {
            return Err(CommandError::new(
                CommandErrorKind::DuplicatePassenger,
                MESSAGE_DUPLICATE_PASSENGER,
            ));
        }

        model
            .add_passenger(self.passenger.clone())
            .map_err(|e| CommandError::new(CommandErrorKind::DuplicatePassenger, e.to_string()))?;
        info!(passenger = %self.passenger.name(), "passenger added");

        Ok(CommandResult::new(format!(
            "New passenger added: {}",
            self.passenger
        )))
    }
}
