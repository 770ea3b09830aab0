//! The store together with what is currently displayed.

use std::fmt;
use std::sync::Arc;

use super::predicates::Predicate;
use super::{AddressBook, StoreError};
use crate::domain::{Passenger, Pool};

/// A shared, type-erased filter.
pub type Filter<T> = Arc<dyn Predicate<T>>;

fn show_all<T: 'static>() -> Filter<T> {
    Arc::new(|_: &T| true)
}

/// The address book plus the current passenger and pool filters.
///
/// Index-based commands resolve positions against the filtered views, so
/// [`Model::filtered_passengers`] and [`Model::filtered_pools`] return owned
/// snapshots: later mutations cannot shift an index mid-command.
pub struct Model {
    address_book: AddressBook,
    passenger_filter: Filter<Passenger>,
    pool_filter: Filter<Pool>,
}

impl Model {
    /// Wrap an address book, showing everything.
    pub fn new(address_book: AddressBook) -> Self {
        Self {
            address_book,
            passenger_filter: show_all(),
            pool_filter: show_all(),
        }
    }

    pub fn address_book(&self) -> &AddressBook {
        &self.address_book
    }

    /// Snapshot of the passengers accepted by the current filter.
    pub fn filtered_passengers(&self) -> Vec<Passenger> {
        let filter = &self.passenger_filter;
        self.address_book
            .passengers_matching(|p| filter.test(p))
            .cloned()
            .collect()
    }

    /// Snapshot of the pools accepted by the current filter.
    pub fn filtered_pools(&self) -> Vec<Pool> {
        let filter = &self.pool_filter;
        self.address_book
            .pools_matching(|p| filter.test(p))
            .cloned()
            .collect()
    }

    pub fn update_passenger_filter(&mut self, filter: Filter<Passenger>) {
        self.passenger_filter = filter;
    }

    pub fn update_pool_filter(&mut self, filter: Filter<Pool>) {
        self.pool_filter = filter;
    }

    pub fn show_all_passengers(&mut self) {
        self.passenger_filter = show_all();
    }

    pub fn show_all_pools(&mut self) {
        self.pool_filter = show_all();
    }

    pub fn has_passenger(&self, passenger: &Passenger) -> bool {
        self.address_book.has_passenger(passenger)
    }

    pub fn add_passenger(&mut self, passenger: Passenger) -> Result<(), StoreError> {
        self.address_book.add_passenger(passenger)?;
        self.show_all_passengers();
        Ok(())
    }

    pub fn set_passenger(
        &mut self,
        target: &Passenger,
        edited: Passenger,
    ) -> Result<(), StoreError> {
        self.address_book.set_passenger(target, edited)
    }

    /// See [`AddressBook::delete_passenger`].
    pub fn delete_passenger(&mut self, passenger: &Passenger) -> bool {
        self.address_book.delete_passenger(passenger)
    }

    pub fn is_pooled(&self, passenger: &Passenger) -> bool {
        self.address_book.is_pooled(passenger)
    }

    pub fn has_pool(&self, pool: &Pool) -> bool {
        self.address_book.has_pool(pool)
    }

    pub fn add_pool(&mut self, pool: Pool) -> Result<(), StoreError> {
        self.address_book.add_pool(pool)
    }

    pub fn delete_pool(&mut self, pool: &Pool) -> Result<(), StoreError> {
        self.address_book.delete_pool(pool)
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(AddressBook::new())
    }
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("address_book", &self.address_book)
            .finish_non_exhaustive()
    }
}
