//! Wordle - CLI
//!
//! Play Wordle in the terminal (TUI or line mode), or let the built-in
//! suggester solve, hint and benchmark.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use wordle_game::{
    commands::{SolveConfig, hint, run_benchmark, run_simple, solve_word},
    game::{GameSession, SessionConfig},
    output::{print_benchmark_result, print_hint_result, print_solve_result},
    solver::{Solver, StrategyType},
    wordlists::WordLists,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Wordle in the terminal, with an optional next-guess hint",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Hint ranking: frequency (default) or random
    #[arg(short, long, global = true, default_value = "frequency")]
    strategy: String,

    /// Allowed-guess list (one word per line); defaults to the built-in list
    #[arg(long, global = true)]
    allowed: Option<PathBuf>,

    /// Answer list (one word per line); defaults to the built-in list
    #[arg(long, global = true)]
    answers: Option<PathBuf>,

    /// Start games with hints shown
    #[arg(long, global = true)]
    hints: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Line-based game without TUI
    Simple,

    /// Let the suggester solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Suggest the next guess for a history of GUESS:FEEDBACK pairs
    Hint {
        /// Entries such as `crane:-Y--G` (G = green, Y = yellow, - = gray)
        entries: Vec<String>,
    },

    /// Benchmark the suggester against the answer list
    Benchmark {
        /// Number of answers to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let word_lists = WordLists::load(cli.allowed.as_deref(), cli.answers.as_deref())
        .context("failed to load word lists")?;
    let strategy = StrategyType::from_name(&cli.strategy);

    let config = SessionConfig {
        hints: cli.hints,
        strategy,
        ..SessionConfig::default()
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(config, word_lists),
        Commands::Simple => run_simple_command(config, word_lists),
        Commands::Solve { word, verbose } => {
            run_solve_command(strategy, &word, verbose, &word_lists)
        }
        Commands::Hint { entries } => run_hint_command(strategy, &entries, &word_lists),
        Commands::Benchmark { count } => {
            run_benchmark_command(strategy, count, &word_lists);
            Ok(())
        }
    }
}

fn run_play_command(config: SessionConfig, word_lists: WordLists) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let session = GameSession::with_word_lists(config, word_lists)?;
    run_tui(App::new(session))
}

fn run_simple_command(config: SessionConfig, word_lists: WordLists) -> Result<()> {
    let mut session = GameSession::with_word_lists(config, word_lists)?;
    run_simple(&mut session)
}

fn run_solve_command(
    strategy: StrategyType,
    word: &str,
    verbose: bool,
    word_lists: &WordLists,
) -> Result<()> {
    let solver = Solver::new(strategy, word_lists.answers());
    let result = solve_word(&SolveConfig::new(word.to_string()), &solver)?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_hint_command(
    strategy: StrategyType,
    entries: &[String],
    word_lists: &WordLists,
) -> Result<()> {
    let solver = Solver::new(strategy, word_lists.answers());
    let result = hint(entries, &solver)?;

    print_hint_result(&result);
    Ok(())
}

fn run_benchmark_command(strategy: StrategyType, count: usize, word_lists: &WordLists) {
    let answers = word_lists.answers();
    let count = count.min(answers.len());

    println!(
        "Running benchmark on {} answers with the {} strategy...",
        count.to_string().bright_cyan(),
        strategy.name()
    );

    let solver = Solver::new(strategy, answers);
    let result = run_benchmark(&solver, &answers[..count], true);
    print_benchmark_result(&result);
}
