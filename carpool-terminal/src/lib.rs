//! Carpool terminal.
//!
//! Keeps an address book of passengers and the pools that group them under
//! a driver for a weekly trip. The library holds the domain types, the
//! in-memory store, the commands that act on it, and JSON persistence; the
//! binary is a thin command-line front end.

pub mod commands;
pub mod config;
pub mod domain;
pub mod logic;
pub mod storage;
pub mod store;

#[cfg(test)]
mod testutil;
