//! Command implementations

pub mod benchmark;
pub mod hint;
pub mod simple;
pub mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use hint::{HintResult, hint};
pub use simple::run_simple;
pub use solve::{SolveConfig, SolveResult, solve_word};
