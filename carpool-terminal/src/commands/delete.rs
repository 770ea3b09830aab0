//! Deleting passengers by display index.

use tracing::info;

use super::messages::MESSAGE_INVALID_PASSENGER_DISPLAYED_INDEX;
use super::{Command, CommandError, CommandErrorKind, CommandResult, join_names, resolve};
use crate::domain::{Index, Passenger};
use crate::store::Model;

/// Deletes the passengers at the given display positions.
///
/// Passengers still referenced by a pool are skipped. When some passengers
/// are deleted and others skipped, the command reports
/// [`CommandErrorKind::PartialDelete`] but the deletions that went through
/// stay in effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCommand {
    target_indexes: Vec<Index>,
}

impl DeleteCommand {
    pub fn new(target_indexes: Vec<Index>) -> Self {
        Self { target_indexes }
    }
}

impl Command for DeleteCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let snapshot = model.filtered_passengers();

        // Resolve every index before touching the store.
        let mut targets: Vec<&Passenger> = Vec::with_capacity(self.target_indexes.len());
        for &index in &self.target_indexes {
            let passenger = resolve(&snapshot, index, MESSAGE_INVALID_PASSENGER_DISPLAYED_INDEX)?;
            if !targets.contains(&passenger) {
                targets.push(passenger);
            }
        }

        let (deleted, blocked): (Vec<&Passenger>, Vec<&Passenger>) =
            targets.into_iter().partition(|p| model.delete_passenger(p));

        if blocked.is_empty() {
            info!(count = deleted.len(), "passengers deleted");
            return Ok(CommandResult::new(format!(
                "Deleted Passenger(s): {}",
                join_names(deleted)
            )));
        }

        if deleted.is_empty() {
            return Err(CommandError::new(
                CommandErrorKind::HasActivePool,
                format!(
                    "Failed to delete. One or more Pools contain Passenger(s): {}.",
                    join_names(blocked)
                ),
            ));
        }

        info!(
            deleted = deleted.len(),
            blocked = blocked.len(),
            "passengers partially deleted"
        );
        Err(CommandError::new(
            CommandErrorKind::PartialDelete,
            format!(
                "Deleted Passenger(s): {}.\nHowever failed to delete some passengers as one or \
                 more Pools contain Passenger(s): {}.",
                join_names(deleted),
                join_names(blocked)
            ),
        ))
    }
}
