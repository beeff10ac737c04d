//! CLI command handlers.
//!
//! Testable handlers invoked by main.rs; each implements the business
//! logic for one subcommand. Parameter validation always happens before
//! any input file is opened.

mod baseline;
mod dedup;
mod lsh;
mod search;
mod tune;

pub use baseline::{run_baseline, BaselineAlgorithm, BaselineCommandConfig};
pub use dedup::{run_dedup, DedupCommandConfig};
pub use lsh::{run_lsh, LshCommandConfig};
pub use search::{run_search, SearchCommandConfig};
pub use tune::{run_tune, TuneCommandConfig};
