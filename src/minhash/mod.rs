//! Character shingling and MinHash signatures.
//!
//! A document is represented by the set of its overlapping k-character
//! substrings. The MinHash signature maps that set to H unsigned minima,
//! one per hash family member, such that the fraction of positions where
//! two signatures agree is an unbiased estimate of the Jaccard similarity
//! of the underlying shingle sets (variance ≈ J(1−J)/H).

use crate::utils::hash::HashFamily;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Sentinel filling the signature of an empty shingle set. A definite
/// maximum of the signature integer type: empty documents collide only
/// with other empty documents.
pub const EMPTY_SENTINEL: u64 = u64::MAX;

/// Extract the set of distinct k-character shingles from a document.
///
/// Windows are over Unicode scalar values, not bytes. Documents shorter
/// than `k` characters yield the empty set. No normalization happens here;
/// callers lowercase and strip punctuation first.
pub fn shingles(text: &str, k: usize) -> HashSet<String> {
    let chars: Vec<char> = text.chars().collect();
    if k == 0 || chars.len() < k {
        return HashSet::new();
    }
    chars
        .windows(k)
        .map(|window| window.iter().collect())
        .collect()
}

/// MinHash signature: one minimum per hash family member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    /// The per-family minima, in family order.
    pub values: Vec<u64>,
}

impl Signature {
    /// Number of hash families (H) behind this signature.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// True when the signature came from an empty shingle set.
    pub fn is_sentinel(&self) -> bool {
        !self.values.is_empty() && self.values.iter().all(|&v| v == EMPTY_SENTINEL)
    }

    /// Estimated Jaccard similarity: the fraction of positions where the
    /// two signatures agree. Signatures of different lengths are from
    /// different hash-family configurations and compare as 0.
    pub fn estimated_similarity(&self, other: &Self) -> f64 {
        if self.values.len() != other.values.len() || self.values.is_empty() {
            return 0.0;
        }

        let matching = self
            .values
            .iter()
            .zip(other.values.iter())
            .filter(|(a, b)| a == b)
            .count();

        matching as f64 / self.values.len() as f64
    }
}

/// Computes length-H MinHash signatures over shingle sets.
#[derive(Debug, Clone, Copy)]
pub struct MinHasher {
    num_hashes: usize,
}

impl MinHasher {
    pub fn new(num_hashes: usize) -> Self {
        Self { num_hashes }
    }

    /// Signature length H.
    pub fn num_hashes(&self) -> usize {
        self.num_hashes
    }

    /// Compute the signature of a shingle set.
    ///
    /// Position i holds min over shingles s of family_i(s), as an unsigned
    /// comparison. The result depends only on set membership, not on
    /// iteration order. An empty set yields the sentinel signature.
    pub fn signature(&self, shingle_set: &HashSet<String>) -> Signature {
        let mut values = vec![EMPTY_SENTINEL; self.num_hashes];

        for shingle in shingle_set {
            let family = HashFamily::of(shingle.as_bytes());
            for (i, slot) in values.iter_mut().enumerate() {
                let hash = family.member(i);
                if hash < *slot {
                    *slot = hash;
                }
            }
        }

        Signature { values }
    }
}
