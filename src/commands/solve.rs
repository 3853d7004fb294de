//! Word solving command
//!
//! Lets the suggester play against a known answer and records each step.

use crate::core::{Feedback, MAX_GUESSES, Word, evaluate};
use crate::solver::{Solver, Strategy};
use anyhow::{Context, Result};

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: MAX_GUESSES,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: Word,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: Word,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve a specific word using the given solver
///
/// # Errors
///
/// Returns an error if the target is not a valid 5-letter word.
pub fn solve_word<S: Strategy>(config: &SolveConfig, solver: &Solver<S>) -> Result<SolveResult> {
    let target = Word::new(&config.target)
        .with_context(|| format!("invalid target word '{}'", config.target))?;

    let mut history: Vec<(Word, Feedback)> = Vec::new();
    let mut guesses: Vec<GuessStep> = Vec::new();

    for _ in 0..config.max_guesses {
        let candidates_before = solver.count_candidates(&history);

        let Some(guess) = solver.suggest(&history) else {
            break;
        };

        let feedback = evaluate(&guess, &target);
        history.push((guess, feedback));

        let candidates_after = solver.count_candidates(&history);

        guesses.push(GuessStep {
            word: guess,
            feedback,
            candidates_before,
            candidates_after,
        });

        if feedback.is_win() {
            return Ok(SolveResult {
                success: true,
                guesses,
                target,
            });
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        target,
    })
}

/// Play one game silently, returning the guesses used and whether it was won
pub fn play_out<S: Strategy>(solver: &Solver<S>, target: &Word) -> (usize, bool) {
    let mut history: Vec<(Word, Feedback)> = Vec::new();

    while let Some(guess) = solver.suggest(&history) {
        let feedback = evaluate(&guess, target);
        history.push((guess, feedback));
        if feedback.is_win() {
            return (history.len(), true);
        }
    }

    (history.len(), false)
}
