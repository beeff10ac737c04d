//! Configuration types for near-dedup operations.
//!
//! These structs are built from CLI arguments, config files, or both (CLI
//! values override file values). Geometry and range checks live in the
//! `validation` module and run before any input IO.

use super::defaults::*;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// Core parameter groups
// ============================================================================

/// MinHash + LSH geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct LshParams {
    /// Number of bands (B)
    pub num_bands: usize,
    /// Rows per band (R)
    pub rows_per_band: usize,
    /// Signature length (H); must equal B * R
    pub num_hashes: usize,
    /// Character shingle width (k)
    pub shingle_size: usize,
    /// Neighboring bucket probes per band (0 disables multi-probe)
    pub probes: usize,
}

impl Default for LshParams {
    fn default() -> Self {
        Self {
            num_bands: DEFAULT_NUM_BANDS,
            rows_per_band: DEFAULT_ROWS_PER_BAND,
            num_hashes: DEFAULT_NUM_HASHES,
            shingle_size: DEFAULT_SHINGLE_SIZE,
            probes: DEFAULT_PROBES,
        }
    }
}

impl LshParams {
    /// Probability that two documents of true Jaccard similarity `j` share
    /// at least one band bucket: 1 - (1 - j^R)^B.
    pub fn candidate_probability(&self, j: f64) -> f64 {
        crate::lsh::s_curve(j, self.num_bands, self.rows_per_band)
    }
}

/// Bloom filter sizing for the exact-duplicate pre-pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BloomParams {
    /// Expected number of distinct documents (n)
    pub capacity: usize,
    /// Target false-positive rate (f), in (0, 1)
    pub fp_rate: f64,
}

impl Default for BloomParams {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_BLOOM_CAPACITY,
            fp_rate: DEFAULT_BLOOM_FP_RATE,
        }
    }
}

/// Advisory precision refinement inside raw clusters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct RefinementConfig {
    /// Re-check cluster pairs against signature Jaccard before emission
    pub enabled: bool,
    /// Minimum signature-Jaccard to keep a pair
    pub threshold: f64,
}

impl Default for RefinementConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            threshold: DEFAULT_REFINE_THRESHOLD,
        }
    }
}

/// Output behavior shared by the cluster-emitting commands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Drop single-document clusters from the output
    pub exclude_singletons: bool,
    /// Suppress non-essential log output
    pub quiet: bool,
}

// ============================================================================
// Unified application configuration
// ============================================================================

/// Top-level configuration, loadable from a YAML file and overridable from
/// CLI arguments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// MinHash/LSH geometry
    pub lsh: LshParams,
    /// Bloom pre-filter sizing
    pub bloom: BloomParams,
    /// Advisory cluster refinement
    pub refinement: RefinementConfig,
    /// Output behavior flags
    pub behavior: BehaviorConfig,
}
