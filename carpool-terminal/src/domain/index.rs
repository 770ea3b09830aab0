//! Display index type.

use std::fmt;
use std::num::NonZeroUsize;

use super::ValidationError;

/// A one-based position in a displayed list.
///
/// Users see lists numbered from 1; code indexes slices from 0. `Index`
/// keeps the two apart.
///
/// # Examples
///
/// ```
/// use carpool_terminal::domain::Index;
///
/// let idx = Index::from_one_based(3).unwrap();
/// assert_eq!(idx.zero_based(), 2);
/// assert_eq!(idx.one_based(), 3);
///
/// assert!(Index::from_one_based(0).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index(NonZeroUsize);

impl Index {
    /// Create an index from a one-based position. Zero is rejected.
    pub fn from_one_based(position: usize) -> Result<Self, ValidationError> {
        NonZeroUsize::new(position)
            .map(Index)
            .ok_or_else(|| ValidationError::invalid_format("index", "must be a positive integer"))
    }

    /// Create an index from a zero-based offset.
    pub fn from_zero_based(offset: usize) -> Self {
        Index(NonZeroUsize::MIN.saturating_add(offset))
    }

    /// Returns the zero-based offset.
    pub fn zero_based(&self) -> usize {
        self.0.get() - 1
    }

    /// Returns the one-based position.
    pub fn one_based(&self) -> usize {
        self.0.get()
    }
}

impl fmt::Debug for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Index({})", self.one_based())
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.one_based())
    }
}
