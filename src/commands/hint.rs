//! Hint command
//!
//! Computes the suggester's next guess for a history typed on the command
//! line as `GUESS:FEEDBACK` pairs, e.g. `crane:-Y--G slate:--GYG`.

use crate::core::{Feedback, Word};
use crate::solver::{Solver, Strategy};
use anyhow::{Context, Result, bail};

/// Result of a hint request
pub struct HintResult {
    pub history: Vec<(Word, Feedback)>,
    pub suggestion: Option<Word>,
    pub remaining: Vec<Word>,
}

/// Parse one `GUESS:FEEDBACK` pair
///
/// # Errors
///
/// Returns an error if the separator is missing or either half is invalid.
pub fn parse_entry(entry: &str) -> Result<(Word, Feedback)> {
    let Some((guess, feedback)) = entry.split_once(':') else {
        bail!("expected GUESS:FEEDBACK, got '{entry}'");
    };

    let guess = Word::new(guess.trim()).with_context(|| format!("invalid guess in '{entry}'"))?;
    let feedback = feedback
        .parse::<Feedback>()
        .with_context(|| format!("invalid feedback in '{entry}'"))?;

    Ok((guess, feedback))
}

/// Suggest the next guess for the given history entries
///
/// # Errors
///
/// Returns an error if any entry fails to parse.
pub fn hint<S: Strategy>(entries: &[String], solver: &Solver<S>) -> Result<HintResult> {
    let history = entries
        .iter()
        .map(|entry| parse_entry(entry))
        .collect::<Result<Vec<_>>>()?;

    let suggestion = solver.suggest(&history);
    let remaining = solver
        .get_candidates(&history)
        .into_iter()
        .copied()
        .collect();

    Ok(HintResult {
        history,
        suggestion,
        remaining,
    })
}
