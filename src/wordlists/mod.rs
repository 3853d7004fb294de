//! Word lists for the game
//!
//! Provides embedded word lists compiled into the binary, plus loading of
//! replacement lists from plain line-delimited text files.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};
pub use loader::{LoadError, WordLists};
