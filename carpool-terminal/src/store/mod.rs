//! In-memory storage of passengers and pools.
//!
//! [`AddressBook`] holds the data and enforces uniqueness and referential
//! integrity. [`Model`] layers the current display filters on top.

mod address_book;
mod error;
mod model;
pub mod predicates;

pub use address_book::AddressBook;
pub use error::StoreError;
pub use model::{Filter, Model};
pub use predicates::Predicate;
