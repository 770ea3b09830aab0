//! In-memory storage for development and tests.

use std::cell::{Cell, RefCell};

use crate::store::AddressBook;

use super::error::StorageError;
use super::Storage;

/// Keeps the last saved address book in memory and counts saves.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    book: RefCell<Option<AddressBook>>,
    saves: Cell<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `book` already stored.
    pub fn with_book(book: AddressBook) -> Self {
        Self {
            book: RefCell::new(Some(book)),
            saves: Cell::new(0),
        }
    }

    /// The last saved address book, if any.
    pub fn stored(&self) -> Option<AddressBook> {
        self.book.borrow().clone()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl Storage for MemoryStorage {
    fn load(&self) -> Result<Option<AddressBook>, StorageError> {
        Ok(self.stored())
    }

    fn save(&self, book: &AddressBook) -> Result<(), StorageError> {
        *self.book.borrow_mut() = Some(book.clone());
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
