//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_row};
use crate::commands::{BenchmarkResult, HintResult, SolveResult};
use crate::core::Word;
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", result.target.text().bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {} {}",
            turn,
            feedback_row(&step.word, &step.feedback),
            step.feedback.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a hint request
pub fn print_hint_result(result: &HintResult) {
    if !result.history.is_empty() {
        println!("\n{}", "History:".bright_cyan().bold());
        for (word, feedback) in &result.history {
            println!("  {} {}", feedback_row(word, feedback), feedback.to_emoji());
        }
    }

    println!(
        "\n{} {}",
        "Candidates remaining:".bright_cyan().bold(),
        result.remaining.len()
    );
    if result.remaining.len() <= 10 {
        for word in &result.remaining {
            println!("  • {word}");
        }
    }

    match result.suggestion {
        Some(word) => println!(
            "\n💡 Suggested guess: {}",
            word.text().bright_yellow().bold()
        ),
        None => println!("\n{}", "No suggestion: the game is already over.".red()),
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {} ({:.1}%)",
        result.solved,
        result.win_rate() * 100.0
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (guess_count, count) in result.distribution_rows() {
        let pct = if result.total_words > 0 {
            (count as f64 / result.total_words as f64) * 100.0
        } else {
            0.0
        };
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
    }

    if !result.failed_words.is_empty() {
        println!("\n❌ {}", "Unsolved:".red().bold());
        let failed: Vec<&str> = result.failed_words.iter().map(Word::text).collect();
        println!("   {}", failed.join(", "));
    }
}
