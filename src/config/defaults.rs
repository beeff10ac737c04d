//! Default parameter values shared by the CLI, config files, and tests.

/// Default number of LSH bands (B).
pub const DEFAULT_NUM_BANDS: usize = 10;

/// Default rows per band (R).
pub const DEFAULT_ROWS_PER_BAND: usize = 5;

/// Default signature length (H = B * R).
pub const DEFAULT_NUM_HASHES: usize = 50;

/// Default character shingle width (k).
pub const DEFAULT_SHINGLE_SIZE: usize = 5;

/// Default number of multi-probe offsets (0 = plain banding).
pub const DEFAULT_PROBES: usize = 0;

/// Default Bloom filter capacity for the exact-duplicate pass.
pub const DEFAULT_BLOOM_CAPACITY: usize = 1000;

/// Default Bloom filter target false-positive rate.
pub const DEFAULT_BLOOM_FP_RATE: f64 = 0.01;

/// Conventional threshold for the advisory signature-Jaccard refinement.
pub const DEFAULT_REFINE_THRESHOLD: f64 = 0.7;

/// Default similarity threshold for nearest-neighbor search.
pub const DEFAULT_SEARCH_THRESHOLD: f64 = 0.7;

/// Default token n-gram size for the n-gram baseline.
pub const DEFAULT_NGRAM_SIZE: usize = 3;

/// Default similarity threshold for the n-gram and Jaccard baselines.
pub const DEFAULT_BASELINE_THRESHOLD: f64 = 0.8;
