//! The deduplication orchestrator.
//!
//! Runs the full collection pipeline: Bloom-filter exact-duplicate pass,
//! normalization, parallel MinHash signature build, LSH candidate
//! clustering through Union-Find, and an optional signature-Jaccard
//! refinement for precision. Also provides the nearest-neighbor
//! build/query mode over retained signatures.

use crate::bloom::BloomFilter;
use crate::config::{BloomParams, LshParams, Validatable, DEFAULT_REFINE_THRESHOLD};
use crate::error::{DedupError, Result};
use crate::lsh::{LshIndex, MultiProbe};
use crate::minhash::Signature;
use crate::union_find::UnionFind;
use crate::utils::hash::digest128;
use crate::utils::text::canonical_exact;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Configuration for a [`Deduplicator`].
#[derive(Debug, Clone, Copy)]
pub struct DeduplicatorConfig {
    /// Bloom filter sizing for the exact-duplicate pass.
    pub bloom: BloomParams,
    /// MinHash/LSH geometry.
    pub lsh: LshParams,
    /// When set, prune cluster pairs whose signature Jaccard falls below
    /// the threshold before emission. `None` disables the advisory step.
    pub refine_threshold: Option<f64>,
    /// Emit single-document clusters.
    pub include_singletons: bool,
}

impl Default for DeduplicatorConfig {
    fn default() -> Self {
        Self {
            bloom: BloomParams::default(),
            lsh: LshParams::default(),
            refine_threshold: None,
            include_singletons: true,
        }
    }
}

impl DeduplicatorConfig {
    /// Enable refinement at the conventional threshold.
    pub fn with_refinement(mut self) -> Self {
        self.refine_threshold = Some(DEFAULT_REFINE_THRESHOLD);
        self
    }
}

/// Result of a collection deduplication run.
#[derive(Debug, Clone, Serialize)]
pub struct DedupReport {
    /// IDs flagged by the Bloom pass as exact duplicates of an earlier
    /// document. Flagged documents still participate in clustering under
    /// their own IDs.
    pub exact_duplicates: Vec<usize>,
    /// Similarity clusters: members ascending, clusters ordered by their
    /// smallest member.
    pub clusters: Vec<Vec<usize>>,
}

/// Orchestrates Bloom pre-filter, LSH indexing, and cluster emission.
pub struct Deduplicator {
    config: DeduplicatorConfig,
    bloom: BloomFilter,
    index: LshIndex<MultiProbe>,
}

impl Deduplicator {
    /// Build a deduplicator, validating all parameters up front.
    pub fn new(config: DeduplicatorConfig) -> Result<Self> {
        if let Some(threshold) = config.refine_threshold {
            if !(0.0..=1.0).contains(&threshold) {
                return Err(DedupError::config(format!(
                    "refine threshold must be in [0, 1], got {threshold}"
                )));
            }
        }
        let errors = config.bloom.validate();
        if !errors.is_empty() {
            let joined = errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(DedupError::config(joined));
        }

        Ok(Self {
            bloom: BloomFilter::new(config.bloom.capacity, config.bloom.fp_rate)?,
            index: LshIndex::multi_probe(&config.lsh)?,
            config,
        })
    }

    /// Run the full deduplication pipeline over a document collection.
    ///
    /// Document IDs are assigned by position. Exact duplicates are flagged
    /// but kept in the pipeline so clusters reflect every input position.
    pub fn deduplicate(&mut self, documents: &[String]) -> Result<DedupReport> {
        let exact_duplicates = self.exact_duplicate_pass(documents);
        info!(
            total = documents.len(),
            exact = exact_duplicates.len(),
            "exact-duplicate pass complete"
        );

        self.build_index(documents)?;

        let mut clusters = self.index.cluster_candidates();
        if let Some(threshold) = self.config.refine_threshold {
            clusters = self.refine_clusters(&clusters, threshold);
        }

        // The cluster map is keyed by Union-Find root, which is not always
        // the smallest member; reorder for the stable output convention.
        let mut clusters: Vec<Vec<usize>> = clusters
            .into_values()
            .filter(|members| self.config.include_singletons || members.len() > 1)
            .collect();
        clusters.sort_by_key(|members| members.first().copied());
        info!(clusters = clusters.len(), "clustering complete");

        Ok(DedupReport {
            exact_duplicates,
            clusters,
        })
    }

    /// Bloom-based exact-duplicate pass over trimmed, lowercased digests.
    fn exact_duplicate_pass(&mut self, documents: &[String]) -> Vec<usize> {
        let mut duplicates = Vec::new();
        for (doc_id, doc) in documents.iter().enumerate() {
            let digest = digest128(canonical_exact(doc).as_bytes()).to_le_bytes();
            if self.bloom.contains(&digest) {
                duplicates.push(doc_id);
            } else {
                self.bloom.add(&digest);
            }
        }
        duplicates
    }

    /// Index every document for clustering or querying.
    ///
    /// Signatures are computed in parallel (they are pure functions of the
    /// text); bucket insertion stays sequential in ID order so the bucket
    /// contents match a sequential build. Documents that produce no
    /// shingles are skipped: sentinel signatures must not surface as
    /// duplicate clusters.
    pub fn build_index(&mut self, documents: &[String]) -> Result<()> {
        let signatures: Vec<Signature> = documents
            .par_iter()
            .map(|doc| self.index.signature_of(doc))
            .collect();

        for (doc_id, signature) in signatures.into_iter().enumerate() {
            if signature.is_sentinel() {
                debug!(doc_id, "document too short to shingle, not indexed");
                continue;
            }
            self.index.insert_signature(doc_id, signature);
        }
        info!("{}", self.index.stats());
        Ok(())
    }

    /// Nearest-neighbor query: IDs whose signature Jaccard with the query
    /// text is at least `threshold`, ascending.
    pub fn query(&self, text: &str, threshold: f64) -> Vec<usize> {
        let query_signature = self.index.signature_of(text);
        if query_signature.is_sentinel() {
            return Vec::new();
        }

        self.index
            .doc_ids()
            .into_iter()
            .filter(|&doc_id| {
                self.index
                    .signature(doc_id)
                    .is_some_and(|signature| {
                        signature.estimated_similarity(&query_signature) >= threshold
                    })
            })
            .collect()
    }

    /// Prune cluster pairs below the signature-Jaccard threshold and
    /// re-consolidate the survivors.
    fn refine_clusters(
        &self,
        clusters: &BTreeMap<usize, Vec<usize>>,
        threshold: f64,
    ) -> BTreeMap<usize, Vec<usize>> {
        let mut forest = UnionFind::new();
        for members in clusters.values() {
            for &id in members {
                forest.add(id);
            }
            for (i, &a) in members.iter().enumerate() {
                for &b in &members[i + 1..] {
                    if let (Some(sig_a), Some(sig_b)) =
                        (self.index.signature(a), self.index.signature(b))
                    {
                        if sig_a.estimated_similarity(sig_b) >= threshold {
                            forest.union(a, b);
                        }
                    }
                }
            }
        }

        let mut ids: Vec<usize> = forest.elements().collect();
        ids.sort_unstable();
        let mut refined: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        for id in ids {
            refined.entry(forest.find(id)).or_default().push(id);
        }
        refined
    }
}
