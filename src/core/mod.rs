//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types and the guess evaluator.
//! Everything here is pure: no I/O, no randomness, no session state.

mod feedback;
mod verdict;
mod word;

pub use feedback::{Feedback, FeedbackError, evaluate};
pub use verdict::{KeyStatus, Verdict};
pub use word::{WORD_LEN, Word, WordError};

/// Number of guesses allowed per game
pub const MAX_GUESSES: usize = 6;
