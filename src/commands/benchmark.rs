//! Benchmark command
//!
//! Lets the suggester play every target word and summarises how it did.

use super::solve::play_out;
use crate::core::{MAX_GUESSES, Word};
use crate::solver::{Solver, Strategy};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub failed_words: Vec<Word>,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guess count → number of words solved in that many guesses
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Run the suggester against each target word in parallel
///
/// Averages and extremes cover solved words only.
pub fn run_benchmark<S: Strategy + Sync>(
    solver: &Solver<S>,
    target_words: &[Word],
    progress: bool,
) -> BenchmarkResult {
    let pb = if progress {
        ProgressBar::new(target_words.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();

    let outcomes: Vec<(Word, usize, bool)> = target_words
        .par_iter()
        .map(|target| {
            let (guesses, success) = play_out(solver, target);
            pb.inc(1);
            (*target, guesses, success)
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut failed_words = Vec::new();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;

    for (word, guesses, success) in outcomes {
        if success {
            total_guesses += guesses;
            min_guesses = min_guesses.min(guesses);
            max_guesses = max_guesses.max(guesses);
            *distribution.entry(guesses).or_insert(0) += 1;
        } else {
            failed_words.push(word);
        }
    }

    let total_words = target_words.len();
    let wins = total_words - failed_words.len();

    BenchmarkResult {
        total_words,
        solved: wins,
        failed_words,
        average_guesses: if wins > 0 {
            total_guesses as f64 / wins as f64
        } else {
            0.0
        },
        min_guesses: if wins > 0 { min_guesses } else { 0 },
        max_guesses,
        distribution,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

impl BenchmarkResult {
    /// Fraction of words solved within the guess limit
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_words == 0 {
            0.0
        } else {
            self.solved as f64 / self.total_words as f64
        }
    }

    /// Guess counts 1..=6 paired with how many words needed exactly that many
    #[must_use]
    pub fn distribution_rows(&self) -> Vec<(usize, usize)> {
        (1..=MAX_GUESSES)
            .map(|n| (n, self.distribution.get(&n).copied().unwrap_or(0)))
            .collect()
    }
}
