//! Wordle Game
//!
//! The core of a Wordle clone: a two-pass evaluator that scores a guess
//! against the hidden answer, a letter-frequency suggester for the next
//! guess, and a game session that ties both to a 6×5 board and an
//! on-screen keyboard.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Verdict, Word, evaluate};
//!
//! let guess = Word::new("trace").unwrap();
//! let answer = Word::new("crane").unwrap();
//!
//! let feedback = evaluate(&guess, &answer);
//! assert_eq!(feedback[0], Verdict::Absent);
//! assert_eq!(feedback[3], Verdict::Present);
//! assert_eq!(feedback.to_string(), "-GGYG");
//! ```

// Core domain types
pub mod core;

// Next-guess suggester
pub mod solver;

// Game session and board state
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
