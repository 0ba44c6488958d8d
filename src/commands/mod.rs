//! Command implementations

pub mod assist;
pub mod benchmark;
pub mod exhaustive;
pub mod solve;

pub use assist::run_assist;
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use exhaustive::{ExhaustiveStatistics, print_exhaustive_statistics, run_exhaustive};
pub use solve::{DEFAULT_MAX_TURNS, SolveConfig, SolveResult, solve_word};
