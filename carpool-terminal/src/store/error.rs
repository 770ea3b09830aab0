//! Store error types.

/// Identity and lookup failures raised by the [`AddressBook`](super::AddressBook).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// A passenger with the same name is already stored
    #[error("this passenger already exists in the address book")]
    DuplicatePassenger,

    /// A pool with the same driver, trip day and trip time is already stored
    #[error("this pool already exists in the address book")]
    DuplicatePool,

    /// The passenger to update is not in the store
    #[error("passenger not found")]
    PassengerNotFound,

    /// The pool to remove is not in the store
    #[error("pool not found")]
    PoolNotFound,
}
