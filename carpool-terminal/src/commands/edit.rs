//! Editing a passenger in place.

use std::collections::BTreeSet;

use tracing::info;

use super::messages::{MESSAGE_DUPLICATE_PASSENGER, MESSAGE_INVALID_PASSENGER_DISPLAYED_INDEX};
use super::{Command, CommandError, CommandErrorKind, CommandResult, resolve};
use crate::domain::{Address, Index, Name, Passenger, Phone, Tag, TripDay, TripTime};
use crate::store::{Model, StoreError};

pub const MESSAGE_NOT_EDITED: &str = "At least one field to edit must be provided.";
pub const MESSAGE_EDIT_POOLED_PASSENGER: &str =
    "Failed to edit. This passenger is in a pool; remove the pool first.";

/// Replacement values for an edit. Unset fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditPassengerDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub address: Option<Address>,
    pub trip_day: Option<TripDay>,
    pub trip_time: Option<TripTime>,
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditPassengerDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.address.is_some()
            || self.trip_day.is_some()
            || self.trip_time.is_some()
            || self.tags.is_some()
    }

    /// Builds the edited copy of `passenger`. The driver assignment carries over.
    fn apply(&self, passenger: &Passenger) -> Passenger {
        Passenger::new(
            self.name.clone().unwrap_or_else(|| passenger.name().clone()),
            self.phone.clone().unwrap_or_else(|| passenger.phone().clone()),
            self.address
                .clone()
                .unwrap_or_else(|| passenger.address().clone()),
            self.trip_day.unwrap_or(passenger.trip_day()),
            self.trip_time.unwrap_or(passenger.trip_time()),
            self.tags.clone().unwrap_or_else(|| passenger.tags().clone()),
        )
        .with_driver(passenger.driver().clone())
    }
}

/// Edits the passenger at a display position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    index: Index,
    descriptor: EditPassengerDescriptor,
}

impl EditCommand {
    pub fn new(index: Index, descriptor: EditPassengerDescriptor) -> Self {
        Self { index, descriptor }
    }
}

impl Command for EditCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        if !self.descriptor.is_any_field_edited() {
            return Err(CommandError::new(
                CommandErrorKind::NotEdited,
                MESSAGE_NOT_EDITED,
            ));
        }

        let snapshot = model.filtered_passengers();
        let target = resolve(&snapshot, self.index, MESSAGE_INVALID_PASSENGER_DISPLAYED_INDEX)?;

        // Pools hold passengers by value, so an edit would orphan the member.
        if model.is_pooled(target) {
            return Err(CommandError::new(
                CommandErrorKind::HasActivePool,
                MESSAGE_EDIT_POOLED_PASSENGER,
            ));
        }

        let edited = self.descriptor.apply(target);
        model
            .set_passenger(target, edited.clone())
            .map_err(|e| match e {
                StoreError::DuplicatePassenger => CommandError::new(
                    CommandErrorKind::DuplicatePassenger,
                    MESSAGE_DUPLICATE_PASSENGER,
                ),
                other => CommandError::new(CommandErrorKind::InvalidIndex, other.to_string()),
            })?;
        model.show_all_passengers();
        info!(passenger = %edited.name(), "passenger edited");

        Ok(CommandResult::new(format!("Edited Passenger: {edited}")))
    }
}
