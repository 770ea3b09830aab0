//! Removing a pool.

use tracing::info;

use super::messages::MESSAGE_INVALID_POOL_DISPLAYED_INDEX;
use super::{Command, CommandError, CommandErrorKind, CommandResult, resolve};
use crate::domain::Index;
use crate::store::Model;

/// Deletes the pool at a display position. Its passengers stay in the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnpoolCommand {
    index: Index,
}

impl UnpoolCommand {
    pub fn new(index: Index) -> Self {
        Self { index }
    }
}

impl Command for UnpoolCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let snapshot = model.filtered_pools();
        let pool = resolve(&snapshot, self.index, MESSAGE_INVALID_POOL_DISPLAYED_INDEX)?;

        model
            .delete_pool(pool)
            .map_err(|e| CommandError::new(CommandErrorKind::InvalidIndex, e.to_string()))?;
        info!(driver = %pool.driver().name(), "pool removed");

        Ok(CommandResult::new(format!("Removed pool: {pool}")))
    }
}
