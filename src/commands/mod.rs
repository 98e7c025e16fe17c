//! Command implementations

pub mod filter;
pub mod play;
pub mod solve;
pub mod test_all;

pub use filter::{FilterError, filter_candidates, parse_guess_pair};
pub use play::{PlayConfig, run_play};
pub use solve::{GuessStep, SolveConfig, SolveError, SolveOutcome, SolveResult, solve_word};
pub use test_all::{TestAllConfig, TestAllStatistics, run_test_all, select_targets};
