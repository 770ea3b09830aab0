//! Domain types for the carpool terminal.
//!
//! This module contains the value objects and entities that represent
//! validated carpool data. All types enforce their invariants at
//! construction time, so code that receives these types can trust their
//! validity.

mod address;
mod driver;
mod error;
mod index;
mod name;
mod passenger;
mod phone;
mod pool;
mod tag;
mod trip;

pub use address::Address;
pub use driver::{Driver, DriverAssignment};
pub use error::{PoolConstructionError, ValidationError, ValidationErrorKind};
pub use index::Index;
pub use name::Name;
pub use passenger::{NO_ASSIGNED_DRIVER, Passenger};
pub use phone::Phone;
pub use pool::Pool;
pub use tag::Tag;
pub use trip::{TripDay, TripTime};
