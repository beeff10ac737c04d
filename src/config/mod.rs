//! Configuration module for near-dedup.
//!
//! Provides typed parameter groups with validation, named defaults, YAML
//! config file loading, and a JSON-Schema generator for the file format.
//!
//! Place a `.near-dedup.yaml` in the working directory, or name one
//! explicitly with `--config`:
//!
//! ```yaml
//! lsh:
//!   num_bands: 20
//!   rows_per_band: 5
//!   num_hashes: 100
//! bloom:
//!   capacity: 10000
//!   fp_rate: 0.01
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{
    DEFAULT_BASELINE_THRESHOLD, DEFAULT_BLOOM_CAPACITY, DEFAULT_BLOOM_FP_RATE, DEFAULT_NGRAM_SIZE,
    DEFAULT_NUM_BANDS, DEFAULT_NUM_HASHES, DEFAULT_PROBES, DEFAULT_REFINE_THRESHOLD,
    DEFAULT_ROWS_PER_BAND, DEFAULT_SEARCH_THRESHOLD, DEFAULT_SHINGLE_SIZE,
};
pub use types::{AppConfig, BehaviorConfig, BloomParams, LshParams, RefinementConfig};
pub use validation::{ConfigError, Validatable};

pub use file::{load_config_file, load_or_default, DEFAULT_CONFIG_NAME};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Documents all options settable in `.near-dedup.yaml`; editors can use it
/// for validation and autocompletion.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).expect("schema serialization should not fail")
}
