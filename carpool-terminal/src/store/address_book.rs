//! The authoritative collection of passengers and pools.

use tracing::debug;

use super::StoreError;
use crate::domain::{Passenger, Pool};

/// In-memory store of every passenger and pool.
///
/// # Invariants
///
/// - No two passengers share a name
/// - No two pools share driver, trip day and trip time
/// - A passenger referenced by any pool cannot be removed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    passengers: Vec<Passenger>,
    pools: Vec<Pool>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// All passengers, in insertion order.
    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    /// All pools, in insertion order.
    pub fn pools(&self) -> &[Pool] {
        &self.pools
    }

    /// Passengers accepted by `predicate`.
    pub fn passengers_matching<'a, P>(&'a self, predicate: P) -> impl Iterator<Item = &'a Passenger>
    where
        P: Fn(&Passenger) -> bool + 'a,
    {
        self.passengers.iter().filter(move |p| predicate(*p))
    }

    /// Pools accepted by `predicate`.
    pub fn pools_matching<'a, P>(&'a self, predicate: P) -> impl Iterator<Item = &'a Pool>
    where
        P: Fn(&Pool) -> bool + 'a,
    {
        self.pools.iter().filter(move |p| predicate(*p))
    }

    /// Returns true if a passenger with the same name is stored.
    pub fn has_passenger(&self, passenger: &Passenger) -> bool {
        self.passengers.iter().any(|p| p.is_same_passenger(passenger))
    }

    /// Adds a passenger.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicatePassenger`] if a passenger with the
    /// same name is already stored.
    pub fn add_passenger(&mut self, passenger: Passenger) -> Result<(), StoreError> {
        if self.has_passenger(&passenger) {
            return Err(StoreError::DuplicatePassenger);
        }
        debug!(passenger = %passenger.name(), "adding passenger");
        self.passengers.push(passenger);
        Ok(())
    }

    /// Replaces `target` with `edited`, keeping its position.
    ///
    /// # Errors
    ///
    /// - [`StoreError::PassengerNotFound`] if `target` is not stored
    /// - [`StoreError::DuplicatePassenger`] if `edited` has the name of a
    ///   different stored passenger
    pub fn set_passenger(
        &mut self,
        target: &Passenger,
        edited: Passenger,
    ) -> Result<(), StoreError> {
        let position = self
            .passengers
            .iter()
            .position(|p| p == target)
            .ok_or(StoreError::PassengerNotFound)?;

        if !target.is_same_passenger(&edited) && self.has_passenger(&edited) {
            return Err(StoreError::DuplicatePassenger);
        }

        debug!(from = %target.name(), to = %edited.name(), "replacing passenger");
        self.passengers[position] = edited;
        Ok(())
    }

    /// Returns true if any stored pool contains `passenger`.
    pub fn is_pooled(&self, passenger: &Passenger) -> bool {
        self.pools.iter().any(|pool| pool.contains(passenger))
    }

    /// Removes `passenger` unless a pool still references it.
    ///
    /// Returns `false`, leaving the store unchanged, when the passenger is a
    /// member of any pool. This is a refusal rather than an error so callers
    /// can attempt several deletions and report which ones went through.
    /// Returns `true` otherwise; removing a passenger that is not stored is
    /// a no-op.
    pub fn delete_passenger(&mut self, passenger: &Passenger) -> bool {
        if self.is_pooled(passenger) {
            debug!(passenger = %passenger.name(), "passenger is pooled, refusing to delete");
            return false;
        }
        self.passengers.retain(|p| p != passenger);
        debug!(passenger = %passenger.name(), "deleted passenger");
        true
    }

    /// Returns true if a pool with the same identity is stored.
    pub fn has_pool(&self, pool: &Pool) -> bool {
        self.pools.iter().any(|p| p.is_same_pool(pool))
    }

    /// Adds a pool.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicatePool`] if a pool with the same driver,
    /// trip day and trip time is already stored.
    pub fn add_pool(&mut self, pool: Pool) -> Result<(), StoreError> {
        if self.has_pool(&pool) {
            return Err(StoreError::DuplicatePool);
        }
        debug!(driver = %pool.driver().name(), day = %pool.trip_day(), "adding pool");
        self.pools.push(pool);
        Ok(())
    }

    /// Removes the pool with the same identity as `pool`.
    ///
    /// Passengers are never touched.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::PoolNotFound`] if no such pool is stored.
    pub fn delete_pool(&mut self, pool: &Pool) -> Result<(), StoreError> {
        let position = self
            .pools
            .iter()
            .position(|p| p.is_same_pool(pool))
            .ok_or(StoreError::PoolNotFound)?;
        let removed = self.pools.remove(position);
        debug!(driver = %removed.driver().name(), "deleted pool");
        Ok(())
    }
}
