//! Signature banding strategies.
//!
//! A length-H signature is split into B contiguous slices of R rows
//! (H = B·R, enforced at construction) and each slice is hashed to a
//! single bucket key. Two documents of true Jaccard similarity J share at
//! least one key with probability 1 - (1 - J^R)^B, the S-curve that makes
//! band/row geometry a tuning knob.
//!
//! The multi-probe variant additionally emits each key's ±1..±probes
//! neighbors, trading bucket-map size and extra candidates for recall.

use crate::error::{DedupError, Result};
use crate::minhash::Signature;
use xxhash_rust::xxh3::Xxh3;

/// Capability: map a signature to the bucket keys it lands in.
pub trait BandingStrategy {
    /// Bucket keys for a signature, in band order (probe offsets, when
    /// any, follow their base key).
    fn band_keys(&self, signature: &Signature) -> Vec<u64>;

    /// Number of keys emitted per signature.
    fn keys_per_signature(&self) -> usize;
}

/// Plain banding: one key per band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Banding {
    num_bands: usize,
    rows_per_band: usize,
}

impl Banding {
    /// Create a banding over `num_hashes`-length signatures. Rejects
    /// geometries where `num_hashes != num_bands * rows_per_band`.
    pub fn new(num_bands: usize, rows_per_band: usize, num_hashes: usize) -> Result<Self> {
        if num_bands == 0 || rows_per_band == 0 {
            return Err(DedupError::config(
                "num_bands and rows_per_band must be at least 1",
            ));
        }
        if num_hashes != num_bands * rows_per_band {
            return Err(DedupError::config(format!(
                "num_hashes ({num_hashes}) must equal num_bands ({num_bands}) * rows_per_band ({rows_per_band})"
            )));
        }
        Ok(Self {
            num_bands,
            rows_per_band,
        })
    }

    pub fn num_bands(&self) -> usize {
        self.num_bands
    }

    pub fn rows_per_band(&self) -> usize {
        self.rows_per_band
    }

    /// Probability that two documents of true Jaccard similarity `j`
    /// become candidates in at least one band.
    pub fn candidate_probability(&self, j: f64) -> f64 {
        s_curve(j, self.num_bands, self.rows_per_band)
    }

    /// Hash one band's slice of the signature to its bucket key. The
    /// little-endian row serialization is the canonical form fed to the
    /// hash.
    fn band_key(&self, signature: &Signature, band: usize) -> u64 {
        let start = band * self.rows_per_band;
        let slice = &signature.values[start..start + self.rows_per_band];

        let mut hasher = Xxh3::new();
        for &value in slice {
            hasher.update(&value.to_le_bytes());
        }
        hasher.digest()
    }
}

impl BandingStrategy for Banding {
    fn band_keys(&self, signature: &Signature) -> Vec<u64> {
        debug_assert_eq!(
            signature.len(),
            self.num_bands * self.rows_per_band,
            "signature length does not match banding geometry"
        );
        (0..self.num_bands)
            .map(|band| self.band_key(signature, band))
            .collect()
    }

    fn keys_per_signature(&self) -> usize {
        self.num_bands
    }
}

/// Multi-probe banding: each base key plus its ±1..±probes neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MultiProbe {
    banding: Banding,
    probes: usize,
}

impl MultiProbe {
    pub fn new(banding: Banding, probes: usize) -> Self {
        Self { banding, probes }
    }

    pub fn probes(&self) -> usize {
        self.probes
    }

    pub fn candidate_probability(&self, j: f64) -> f64 {
        self.banding.candidate_probability(j)
    }
}

impl BandingStrategy for MultiProbe {
    fn band_keys(&self, signature: &Signature) -> Vec<u64> {
        let base = self.banding.band_keys(signature);
        let mut keys = Vec::with_capacity(self.keys_per_signature());
        for key in base {
            keys.push(key);
            for offset in 1..=self.probes {
                keys.push(key.wrapping_add(offset as u64));
                keys.push(key.wrapping_sub(offset as u64));
            }
        }
        keys
    }

    fn keys_per_signature(&self) -> usize {
        self.banding.num_bands * (1 + 2 * self.probes)
    }
}

/// The banding S-curve: P(J) = 1 − (1 − J^R)^B.
///
/// Strictly increasing in J on [0, 1] for any B, R ≥ 1; steeper around the
/// implied threshold (1/B)^(1/R) as R grows.
pub fn s_curve(j: f64, num_bands: usize, rows_per_band: usize) -> f64 {
    1.0 - (1.0 - j.powi(rows_per_band as i32)).powi(num_bands as i32)
}
