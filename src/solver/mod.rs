//! Next-guess suggestion
//!
//! Derives constraints from the guess history, filters a candidate list and
//! ranks what remains.

pub mod constraints;
mod engine;
pub mod frequency;
pub mod strategy;

pub use constraints::Constraints;
pub use engine::{FALLBACK_WORD, OPENING_WORD, Solver, suggest};
pub use strategy::{FrequencyStrategy, RandomStrategy, Strategy, StrategyType};
