//! Commands that read and mutate the [`Model`].
//!
//! Each command is a single-shot request: it validates its typed arguments
//! against the current store, applies its change, and returns feedback for
//! the user or a [`CommandError`]. Commands that take display indexes
//! resolve them against a snapshot of the filtered list taken before any
//! mutation.

mod add;
mod delete;
mod edit;
mod error;
mod find;
mod list;
pub mod messages;
mod pool;
mod unpool;

pub use add::AddCommand;
pub use delete::DeleteCommand;
pub use edit::{EditCommand, EditPassengerDescriptor};
pub use error::{CommandError, CommandErrorKind};
pub use find::FindCommand;
pub use list::ListCommand;
pub use pool::{MAX_TIME_DIFFERENCE_MINS, PoolCommand};
pub use unpool::UnpoolCommand;

use crate::domain::Index;
use crate::store::Model;

/// Feedback from a successful command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    feedback: String,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
        }
    }

    pub fn feedback(&self) -> &str {
        &self.feedback
    }
}

/// An executable user request.
pub trait Command {
    /// Run the command against `model`.
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError>;
}

/// Look up `index` in a displayed snapshot.
fn resolve<'a, T>(snapshot: &'a [T], index: Index, message: &str) -> Result<&'a T, CommandError> {
    snapshot
        .get(index.zero_based())
        .ok_or_else(|| CommandError::new(CommandErrorKind::InvalidIndex, message))
}

/// Render passenger names as "A, B, C".
fn join_names<'a, I>(passengers: I) -> String
where
    I: IntoIterator<Item = &'a crate::domain::Passenger>,
{
    passengers
        .into_iter()
        .map(|p| p.name().as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
