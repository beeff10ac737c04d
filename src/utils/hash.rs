//! Seedable hash families over xxh3 digests.
//!
//! MinHash and the Bloom filter both need a family of pseudo-independent
//! hash functions indexed by a small integer seed. Rather than re-hashing
//! the input once per family member, each input is digested once to 128
//! bits and the two 64-bit halves drive a double-hashing scheme:
//! `member(i) = a + i * b` (wrapping, b forced odd). Distinct seeds yield
//! distinct, well-mixed families while costing a single digest per input.

use xxhash_rust::xxh3::xxh3_128;

/// Compute a 128-bit content digest for arbitrary bytes.
pub fn digest128(data: &[u8]) -> u128 {
    xxh3_128(data)
}

/// A two-point base for a seedable family of 64-bit hashes.
///
/// `member(i)` enumerates the family. `b` is forced odd so that the stride
/// is coprime with the 2^64 ring and members never collapse onto each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashFamily {
    a: u64,
    b: u64,
}

impl HashFamily {
    /// Derive the family base from an input's 128-bit digest.
    pub fn of(data: &[u8]) -> Self {
        let digest = digest128(data);
        Self {
            a: (digest >> 64) as u64,
            b: (digest as u64) | 1,
        }
    }

    /// The i-th member of the family evaluated on the original input.
    pub fn member(&self, i: usize) -> u64 {
        self.a.wrapping_add((i as u64).wrapping_mul(self.b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_deterministic() {
        let data = b"hello world";
        assert_eq!(digest128(data), digest128(data));
        assert_ne!(digest128(data), digest128(b"hello world!"));
    }

    #[test]
    fn test_family_members_are_distinct() {
        let family = HashFamily::of(b"shingle");
        let members: Vec<u64> = (0..64).map(|i| family.member(i)).collect();
        let mut deduped = members.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(members.len(), deduped.len());
    }

    #[test]
    fn test_family_member_zero_is_base() {
        let family = HashFamily::of(b"x");
        assert_eq!(family.member(0), family.a);
    }

    #[test]
    fn test_distinct_inputs_distinct_families() {
        assert_ne!(HashFamily::of(b"aaaaa"), HashFamily::of(b"aaaab"));
    }
}
