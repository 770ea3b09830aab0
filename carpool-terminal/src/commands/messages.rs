//! Feedback shared by several commands.

pub const MESSAGE_INVALID_PASSENGER_DISPLAYED_INDEX: &str =
    "The passenger index provided is invalid";
pub const MESSAGE_INVALID_POOL_DISPLAYED_INDEX: &str = "The pool index provided is invalid";
pub const MESSAGE_DUPLICATE_PASSENGER: &str = "This passenger already exists in the address book";

/// "3 passengers listed!"
pub fn passengers_listed_overview(count: usize) -> String {
    format!("{count} passengers listed!")
}
