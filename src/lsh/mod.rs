//! Banded Locality Sensitive Hashing over MinHash signatures.
//!
//! The index groups documents into buckets keyed by hashed signature
//! bands; documents sharing a bucket become candidate pairs with
//! probability monotonically increasing in their true Jaccard similarity.

mod bander;
mod index;

pub use bander::{s_curve, Banding, BandingStrategy, MultiProbe};
pub use index::{LshIndex, LshIndexStats};
