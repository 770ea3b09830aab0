//! Storage error types.

use crate::domain::{PoolConstructionError, ValidationError};
use crate::store::StoreError;

/// Errors from loading or saving the address book.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Reading or writing the data file failed
    #[error("data file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The data file is not a valid address book document
    #[error("malformed data file: {message}")]
    Format { message: String },

    /// A stored field fails validation
    #[error("data file contains an {0}")]
    InvalidValue(#[from] ValidationError),

    /// A stored pool is structurally invalid
    #[error("data file contains an invalid pool: {0}")]
    Pool(#[from] PoolConstructionError),

    /// Two stored passengers or pools share an identity
    #[error("data file is inconsistent: {0}")]
    Duplicate(#[from] StoreError),
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::Format {
            message: e.to_string(),
        }
    }
}
