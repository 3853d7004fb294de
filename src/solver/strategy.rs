//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations. A strategy only
//! ranks candidates that already satisfy every constraint; the opening word,
//! fallback and single-candidate shortcuts live in the [`Solver`](super::Solver).

use crate::core::Word;
use rand::prelude::IndexedRandom;

/// A strategy for picking the next guess among consistent candidates
pub trait Strategy {
    /// Select a guess from `candidates`
    ///
    /// Returns `None` only if `candidates` is empty.
    fn select_guess<'a>(&self, candidates: &[&'a Word]) -> Option<&'a Word>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Letter-frequency ranking (default)
    Frequency(FrequencyStrategy),
    /// Random selection from candidates
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<'a>(&self, candidates: &[&'a Word]) -> Option<&'a Word> {
        match self {
            Self::Frequency(s) => s.select_guess(candidates),
            Self::Random(s) => s.select_guess(candidates),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "frequency", "random".
    /// Defaults to frequency if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random" => Self::Random(RandomStrategy),
            _ => Self::Frequency(FrequencyStrategy),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Frequency(_) => "frequency",
            Self::Random(_) => "random",
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Frequency(FrequencyStrategy)
    }
}

/// Positional and global letter-frequency ranking
///
/// See [`frequency::select_best_guess`](super::frequency::select_best_guess).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrequencyStrategy;

impl Strategy for FrequencyStrategy {
    fn select_guess<'a>(&self, candidates: &[&'a Word]) -> Option<&'a Word> {
        super::frequency::select_best_guess(candidates).map(|(best, _)| best)
    }
}

/// Random strategy
///
/// Picks uniformly among remaining candidates. Useful as a baseline when
/// benchmarking the frequency ranking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_guess<'a>(&self, candidates: &[&'a Word]) -> Option<&'a Word> {
        candidates.choose(&mut rand::rng()).copied()
    }
}
