//! **Near-duplicate document detection with Bloom filters, MinHash, and
//! banded LSH.**
//!
//! `near-dedup` partitions a collection of text documents into clusters of
//! approximately-similar documents under the Jaccard measure of their
//! character-shingle sets, performing far fewer than O(N²) full
//! comparisons. It powers both a command-line tool and a library API.
//!
//! ## How it works
//!
//! 1. A [`bloom::BloomFilter`] pre-screens exact duplicates over a bounded
//!    memory budget (digest of the trimmed, lowercased text).
//! 2. Each document is normalized, split into k-character shingles, and
//!    mapped to a [`minhash::Signature`] whose positional collision rate
//!    approximates Jaccard similarity.
//! 3. The [`lsh::LshIndex`] hashes contiguous signature bands into bucket
//!    keys; documents sharing a bucket become candidate pairs with
//!    probability 1 − (1 − J^R)^B.
//! 4. A [`union_find::UnionFind`] forest consolidates candidate pairs into
//!    transitive clusters.
//!
//! ## Getting started
//!
//! ```no_run
//! use near_dedup::{Deduplicator, DeduplicatorConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let documents = vec![
//!         "The quick brown fox jumps over the lazy dog".to_string(),
//!         "The quick brown fox jumps over the dog".to_string(),
//!         "A totally different sentence here".to_string(),
//!     ];
//!
//!     let mut deduplicator = Deduplicator::new(DeduplicatorConfig::default())?;
//!     let report = deduplicator.deduplicate(&documents)?;
//!
//!     for cluster in &report.clusters {
//!         println!("{cluster:?}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Tuning
//!
//! Band/row geometry controls the similarity threshold at which documents
//! become candidates: [`lsh::s_curve`] exposes the probability curve, and
//! the `tune` CLI subcommand prints it. Multi-probe banding
//! ([`lsh::MultiProbe`]) raises recall without adding bands by also
//! visiting neighboring buckets.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // usize <-> f64 casts are pervasive in the probability math and all
    // values are bounded in practice
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    // # Errors / # Panics doc sections are aspirational here
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod baselines;
pub mod bloom;
pub mod cli;
pub mod config;
pub mod dedup;
pub mod error;
pub mod lsh;
pub mod minhash;
pub mod pipeline;
pub mod union_find;
pub mod utils;

// Re-export main types for convenience
pub use bloom::{BloomFilter, CountingBloomFilter};
pub use config::{AppConfig, BloomParams, ConfigError, LshParams, RefinementConfig, Validatable};
pub use dedup::{DedupReport, Deduplicator, DeduplicatorConfig};
pub use error::{DedupError, Result};
pub use lsh::{s_curve, Banding, BandingStrategy, LshIndex, LshIndexStats, MultiProbe};
pub use minhash::{shingles, MinHasher, Signature};
pub use pipeline::{load_documents, OutputFormat};
pub use union_find::UnionFind;
