//! The LSH index: bucket map, candidate enumeration, clustering.

use super::bander::{Banding, BandingStrategy, MultiProbe};
use crate::config::{LshParams, Validatable};
use crate::error::{DedupError, Result};
use crate::minhash::{shingles, MinHasher, Signature};
use crate::union_find::UnionFind;
use crate::utils::text::Normalizer;
use indexmap::IndexMap;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// LSH index mapping bucket keys to document IDs, parameterized by a
/// banding strategy.
///
/// Documents are added incrementally; removal is not supported. Signatures
/// are retained for refinement and nearest-neighbor queries. Bucket
/// insertion order is preserved so candidate enumeration is deterministic
/// for a given input.
pub struct LshIndex<S: BandingStrategy = Banding> {
    shingle_size: usize,
    minhasher: MinHasher,
    normalizer: Normalizer,
    strategy: S,
    /// band key -> document IDs, in insertion order
    buckets: IndexMap<u64, Vec<usize>>,
    /// retained per-document signatures
    signatures: HashMap<usize, Signature>,
}

impl LshIndex<Banding> {
    /// Create a plain-banding index. Rejects invalid parameter
    /// combinations before any document is accepted.
    pub fn new(params: &LshParams) -> Result<Self> {
        let strategy = Banding::new(params.num_bands, params.rows_per_band, params.num_hashes)?;
        Self::with_strategy(params, strategy)
    }
}

impl LshIndex<MultiProbe> {
    /// Create a multi-probe index emitting `params.probes` neighbor keys
    /// per band on each side of the base key.
    pub fn multi_probe(params: &LshParams) -> Result<Self> {
        let banding = Banding::new(params.num_bands, params.rows_per_band, params.num_hashes)?;
        Self::with_strategy(params, MultiProbe::new(banding, params.probes))
    }
}

impl<S: BandingStrategy> LshIndex<S> {
    /// Create an index with an explicit banding strategy.
    pub fn with_strategy(params: &LshParams, strategy: S) -> Result<Self> {
        let errors = params.validate();
        if !errors.is_empty() {
            let joined = errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(DedupError::config(joined));
        }

        Ok(Self {
            shingle_size: params.shingle_size,
            minhasher: MinHasher::new(params.num_hashes),
            normalizer: Normalizer::new(),
            strategy,
            buckets: IndexMap::new(),
            signatures: HashMap::new(),
        })
    }

    /// Number of indexed documents.
    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }

    /// Retained signature for a document, if indexed.
    pub fn signature(&self, doc_id: usize) -> Option<&Signature> {
        self.signatures.get(&doc_id)
    }

    /// All indexed document IDs, ascending.
    pub fn doc_ids(&self) -> Vec<usize> {
        let mut ids: Vec<usize> = self.signatures.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Compute the signature a document would be indexed under: normalize
    /// (lowercase, strip punctuation), shingle, minhash. Pure with respect
    /// to the index, so safe to call from parallel workers.
    pub fn signature_of(&self, text: &str) -> Signature {
        let normalized = self.normalizer.normalize(text);
        let shingle_set = shingles(&normalized, self.shingle_size);
        self.minhasher.signature(&shingle_set)
    }

    /// Add a document under `doc_id`. Adding the same ID twice is a caller
    /// bug; the index does not check.
    pub fn add_document(&mut self, doc_id: usize, text: &str) {
        let signature = self.signature_of(text);
        self.insert_signature(doc_id, signature);
    }

    /// Insert a precomputed signature under `doc_id`, appending the ID to
    /// the bucket of every band key.
    pub fn insert_signature(&mut self, doc_id: usize, signature: Signature) {
        for key in self.strategy.band_keys(&signature) {
            self.buckets.entry(key).or_default().push(doc_id);
        }
        self.signatures.insert(doc_id, signature);
    }

    /// Enumerate candidate pairs: every unordered pair of distinct IDs
    /// sharing at least one bucket, canonicalized (smaller ID first) and
    /// deduplicated across buckets.
    pub fn find_candidates(&self) -> BTreeSet<(usize, usize)> {
        let mut pairs = BTreeSet::new();
        for ids in self.buckets.values() {
            if ids.len() < 2 {
                continue;
            }
            for (i, &a) in ids.iter().enumerate() {
                for &b in &ids[i + 1..] {
                    if a != b {
                        pairs.insert((a.min(b), a.max(b)));
                    }
                }
            }
        }
        pairs
    }

    /// Consolidate candidate pairs into transitive clusters.
    ///
    /// Every indexed document participates; documents with no candidates
    /// come back as singleton clusters. Members are ascending within each
    /// cluster.
    pub fn cluster_candidates(&self) -> BTreeMap<usize, Vec<usize>> {
        let ids = self.doc_ids();

        let mut forest = UnionFind::new();
        for &id in &ids {
            forest.add(id);
        }
        for (a, b) in self.find_candidates() {
            forest.union(a, b);
        }

        let mut clusters: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        for id in ids {
            clusters.entry(forest.find(id)).or_default().push(id);
        }
        clusters
    }

    /// Snapshot statistics about the bucket map.
    pub fn stats(&self) -> LshIndexStats {
        let total_buckets = self.buckets.len();
        let max_bucket_size = self.buckets.values().map(Vec::len).max().unwrap_or(0);
        let avg_bucket_size = if total_buckets > 0 {
            self.buckets.values().map(Vec::len).sum::<usize>() as f64 / total_buckets as f64
        } else {
            0.0
        };

        LshIndexStats {
            total_documents: self.signatures.len(),
            keys_per_signature: self.strategy.keys_per_signature(),
            total_buckets,
            max_bucket_size,
            avg_bucket_size,
        }
    }
}

/// Statistics about an LSH index.
#[derive(Debug, Clone)]
pub struct LshIndexStats {
    /// Total number of indexed documents
    pub total_documents: usize,
    /// Bucket keys emitted per document
    pub keys_per_signature: usize,
    /// Number of non-empty buckets
    pub total_buckets: usize,
    /// Most documents in a single bucket
    pub max_bucket_size: usize,
    /// Mean documents per bucket
    pub avg_bucket_size: f64,
}

impl std::fmt::Display for LshIndexStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LSH index: {} documents, {} keys/doc, {} buckets (max: {}, avg: {:.1})",
            self.total_documents,
            self.keys_per_signature,
            self.total_buckets,
            self.max_bucket_size,
            self.avg_bucket_size
        )
    }
}
