//! Persistence of the address book.
//!
//! The store is kept as a single JSON document. Pools embed full copies of
//! their passengers; on load those copies are matched back to the freshly
//! loaded passenger list so pool membership stays consistent with the book.

mod convert;
mod error;
mod json;
mod memory;
mod types;

pub use error::StorageError;
pub use json::JsonStorage;
pub use memory::MemoryStorage;
pub use types::{AddressBookDto, DriverDto, PassengerDto, PoolDto};

use crate::store::AddressBook;

/// Somewhere an address book can be loaded from and saved to.
pub trait Storage {
    /// Load the stored address book.
    ///
    /// Returns `Ok(None)` if nothing has been saved yet.
    fn load(&self) -> Result<Option<AddressBook>, StorageError>;

    /// Replace the stored address book.
    fn save(&self, book: &AddressBook) -> Result<(), StorageError>;
}
