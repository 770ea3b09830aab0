//! JSON file storage.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::store::AddressBook;

use super::convert::convert_address_book;
use super::error::StorageError;
use super::types::AddressBookDto;
use super::Storage;

/// Address book kept in a single pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the data file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for JsonStorage {
    fn load(&self) -> Result<Option<AddressBook>, StorageError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "no data file yet");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let dto: AddressBookDto = serde_json::from_str(&contents)?;
        let book = convert_address_book(&dto)?;
        info!(
            path = %self.path.display(),
            passengers = book.passengers().len(),
            pools = book.pools().len(),
            "loaded address book"
        );
        Ok(Some(book))
    }

    /// Creates parent directories if they don't exist.
    fn save(&self, book: &AddressBook) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&AddressBookDto::from(book))?;
        std::fs::write(&self.path, json)?;

        info!(path = %self.path.display(), "saved address book");
        Ok(())
    }
}
