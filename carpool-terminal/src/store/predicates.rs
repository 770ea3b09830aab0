//! Passenger filters.
//!
//! Listing operations take a caller-supplied [`Predicate`]. Closures work
//! directly; the structs here cover the searches the terminal offers.

use crate::domain::{Passenger, TripDay};

/// A test over items of type `T`.
pub trait Predicate<T>: Send + Sync {
    fn test(&self, item: &T) -> bool;
}

impl<T, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    fn test(&self, item: &T) -> bool {
        self(item)
    }
}

/// Returns true if any whitespace-separated word of `text` equals `keyword`,
/// ignoring case.
fn contains_word_ignore_case(text: &str, keyword: &str) -> bool {
    let keyword = keyword.to_lowercase();
    text.split_whitespace()
        .any(|word| word.to_lowercase() == keyword)
}

/// Matches passengers whose name contains any of the keywords as a whole word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameContainsKeywords {
    keywords: Vec<String>,
}

impl NameContainsKeywords {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }
}

impl Predicate<Passenger> for NameContainsKeywords {
    fn test(&self, passenger: &Passenger) -> bool {
        self.keywords
            .iter()
            .any(|k| contains_word_ignore_case(passenger.name().as_str(), k))
    }
}

/// Matches passengers whose address contains any of the keywords as a whole word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressContainsKeywords {
    keywords: Vec<String>,
}

impl AddressContainsKeywords {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }
}

impl Predicate<Passenger> for AddressContainsKeywords {
    fn test(&self, passenger: &Passenger) -> bool {
        self.keywords
            .iter()
            .any(|k| contains_word_ignore_case(passenger.address().as_str(), k))
    }
}

/// Matches passengers carrying a tag equal to any keyword, ignoring case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagContainsKeywords {
    keywords: Vec<String>,
}

impl TagContainsKeywords {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }
}

impl Predicate<Passenger> for TagContainsKeywords {
    fn test(&self, passenger: &Passenger) -> bool {
        passenger.tags().iter().any(|tag| {
            let tag = tag.as_str().to_lowercase();
            self.keywords.iter().any(|k| k.to_lowercase() == tag)
        })
    }
}

/// Matches passengers travelling on the given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripDayIs(pub TripDay);

impl Predicate<Passenger> for TripDayIs {
    fn test(&self, passenger: &Passenger) -> bool {
        passenger.trip_day() == self.0
    }
}
