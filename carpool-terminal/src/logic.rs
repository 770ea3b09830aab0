//! Runs commands against the model and persists the result.

use tracing::{debug, info};

use crate::commands::{Command, CommandError, CommandResult};
use crate::storage::{Storage, StorageError};
use crate::store::{AddressBook, Model};

/// Errors from [`Logic::execute`].
#[derive(Debug, thiserror::Error)]
pub enum LogicError {
    /// The command was rejected
    #[error(transparent)]
    Command(#[from] CommandError),

    /// The store could not be loaded or saved
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Owns the model and its storage.
///
/// The address book is saved after every command that changed it, including
/// a partially successful delete.
#[derive(Debug)]
pub struct Logic<S> {
    model: Model,
    storage: S,
}

impl<S: Storage> Logic<S> {
    /// Load the address book from `storage`, starting empty if nothing is stored.
    pub fn new(storage: S) -> Result<Self, StorageError> {
        let book = match storage.load()? {
            Some(book) => book,
            None => {
                info!("starting with an empty address book");
                AddressBook::new()
            }
        };

        Ok(Self {
            model: Model::new(book),
            storage,
        })
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Run `command`, saving the address book if it changed.
    pub fn execute(&mut self, command: &dyn Command) -> Result<CommandResult, LogicError> {
        let before = self.model.address_book().clone();
        let outcome = command.execute(&mut self.model);

        if self.model.address_book() != &before {
            self.storage.save(self.model.address_book())?;
        } else {
            debug!("address book unchanged, skipping save");
        }

        outcome.map_err(|e| {
            debug!(kind = ?e.kind(), "command rejected");
            LogicError::from(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{AddCommand, CommandErrorKind, DeleteCommand, ListCommand, PoolCommand};
    use crate::domain::{Index, Pool, TripDay, TripTime};
    use crate::storage::MemoryStorage;
    use crate::testutil::{PoolBuilder, alice, bob, carl, driver_fiona, typical_address_book};
    use std::collections::BTreeSet;

    fn idx(n: usize) -> Index {
        Index::from_one_based(n).unwrap()
    }

    #[test]
    fn starts_empty_without_stored_book() {
        let logic = Logic::new(MemoryStorage::new()).unwrap();
        assert_eq!(logic.model().address_book(), &AddressBook::new());
    }

    #[test]
    fn starts_from_stored_book() {
        let logic = Logic::new(MemoryStorage::with_book(typical_address_book())).unwrap();
        assert_eq!(logic.model().address_book(), &typical_address_book());
    }

    #[test]
    fn saves_after_mutation() {
        let mut logic = Logic::new(MemoryStorage::new()).unwrap();
        logic.execute(&AddCommand::new(alice())).unwrap();

        assert_eq!(logic.storage().save_count(), 1);
        let stored = logic.storage().stored().unwrap();
        assert_eq!(stored.passengers(), &[alice()]);
    }

    #[test]
    fn read_only_command_does_not_save() {
        let mut logic = Logic::new(MemoryStorage::with_book(typical_address_book())).unwrap();
        logic.execute(&ListCommand).unwrap();
        assert_eq!(logic.storage().save_count(), 0);
    }

    #[test]
    fn rejected_command_does_not_save() {
        let mut logic = Logic::new(MemoryStorage::with_book(typical_address_book())).unwrap();
        let err = logic.execute(&AddCommand::new(alice())).unwrap_err();

        assert!(matches!(
            err,
            LogicError::Command(ref e) if e.kind() == CommandErrorKind::DuplicatePassenger
        ));
        assert_eq!(logic.storage().save_count(), 0);
    }

    #[test]
    fn partial_delete_is_saved() {
        let mut book = AddressBook::new();
        for p in [alice(), bob(), carl()] {
            book.add_passenger(p).unwrap();
        }
        book.add_pool(PoolBuilder::new().passengers(vec![alice()]).build())
            .unwrap();
        let mut logic = Logic::new(MemoryStorage::with_book(book)).unwrap();

        let err = logic
            .execute(&DeleteCommand::new(vec![idx(1), idx(2), idx(3)]))
            .unwrap_err();

        assert!(matches!(
            err,
            LogicError::Command(ref e) if e.kind() == CommandErrorKind::PartialDelete
        ));
        assert_eq!(logic.storage().save_count(), 1);
        assert_eq!(logic.storage().stored().unwrap().passengers(), &[alice()]);
    }

    #[test]
    fn pool_is_saved() {
        let mut book = AddressBook::new();
        book.add_passenger(carl()).unwrap();
        let mut logic = Logic::new(MemoryStorage::with_book(book)).unwrap();

        let command = PoolCommand::new(
            driver_fiona(),
            BTreeSet::from([idx(1)]),
            TripDay::parse("monday").unwrap(),
            TripTime::parse_hhmm("2000").unwrap(),
            BTreeSet::new(),
        );
        logic.execute(&command).unwrap();

        let stored = logic.storage().stored().unwrap();
        let pools: &[Pool] = stored.pools();
        assert_eq!(pools.len(), 1);
        assert_eq!(pools[0].passengers(), &[carl()]);
    }
}
