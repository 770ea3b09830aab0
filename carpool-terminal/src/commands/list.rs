//! Clearing every filter.

use super::{Command, CommandError, CommandResult};
use crate::store::Model;

pub const MESSAGE_LIST_SUCCESS: &str = "Listed all passengers and pools";

/// Shows every passenger and pool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCommand;

impl Command for ListCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        model.show_all_passengers();
        model.show_all_pools();
        Ok(CommandResult::new(MESSAGE_LIST_SUCCESS))
    }
}
