//! Reference clustering baselines.
//!
//! These are the O(N²) or hash-exact algorithms the probabilistic pipeline
//! is validated against: exact digest grouping, token n-gram Jaccard
//! clustering, and whole-document word-set Jaccard clustering. They are
//! not meant for large corpora.

use crate::utils::hash::digest128;
use crate::utils::text::canonical_exact;
use indexmap::IndexMap;
use std::collections::HashSet;
use tracing::{debug, info};

/// Group documents by the 128-bit digest of their trimmed, lowercased
/// text. Returns all clusters, including singletons, ordered by first
/// appearance.
pub fn exact_clusters(documents: &[String]) -> Vec<Vec<usize>> {
    info!("starting exact duplicate detection over digests");
    let mut groups: IndexMap<u128, Vec<usize>> = IndexMap::new();
    for (doc_id, doc) in documents.iter().enumerate() {
        let digest = digest128(canonical_exact(doc).as_bytes());
        groups.entry(digest).or_default().push(doc_id);
    }

    let duplicate_groups = groups.values().filter(|ids| ids.len() > 1).count();
    info!(
        clusters = groups.len(),
        with_duplicates = duplicate_groups,
        "exact duplicate clustering complete"
    );
    groups.into_values().collect()
}

/// Tokenize a document into its set of whitespace-token n-grams. Fewer
/// than `n` tokens yields the empty set.
fn ngram_set(document: &str, n: usize) -> HashSet<Vec<&str>> {
    let tokens: Vec<&str> = document.split_whitespace().collect();
    if n == 0 || tokens.len() < n {
        return HashSet::new();
    }
    tokens.windows(n).map(<[&str]>::to_vec).collect()
}

fn set_jaccard<T: std::hash::Hash + Eq>(a: &HashSet<T>, b: &HashSet<T>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}

/// Cluster documents by token n-gram Jaccard similarity with a greedy
/// first-match strategy: each document joins the first earlier document
/// whose n-gram set is similar enough, else starts its own cluster.
/// Documents with fewer than `n` tokens are skipped.
pub fn ngram_clusters(documents: &[String], n: usize, threshold: f64) -> Vec<Vec<usize>> {
    info!(n, threshold, "starting n-gram duplicate detection");
    let mut representatives: Vec<(usize, HashSet<Vec<&str>>)> = Vec::new();
    let mut clusters: IndexMap<usize, Vec<usize>> = IndexMap::new();

    for (doc_id, doc) in documents.iter().enumerate() {
        let grams = ngram_set(doc, n);
        if grams.is_empty() {
            debug!(doc_id, "skipped: fewer than {n} tokens");
            continue;
        }

        let matched = representatives
            .iter()
            .find(|(_, other)| set_jaccard(&grams, other) >= threshold)
            .map(|(rep_id, _)| *rep_id);

        match matched {
            Some(rep_id) => clusters
                .get_mut(&rep_id)
                .expect("representative has a cluster")
                .push(doc_id),
            None => {
                clusters.insert(doc_id, vec![doc_id]);
                representatives.push((doc_id, grams));
            }
        }
    }

    clusters.into_values().collect()
}

/// Cluster documents by whole-document word-set Jaccard similarity,
/// greedy first-match against each cluster's founding document.
pub fn jaccard_clusters(documents: &[String], threshold: f64) -> Vec<Vec<usize>> {
    info!(threshold, "starting Jaccard duplicate detection");
    let word_sets: Vec<HashSet<&str>> = documents
        .iter()
        .map(|doc| doc.split_whitespace().collect())
        .collect();

    let mut clusters: IndexMap<usize, Vec<usize>> = IndexMap::new();
    for doc_id in 0..documents.len() {
        let matched = clusters
            .keys()
            .find(|&&rep_id| set_jaccard(&word_sets[doc_id], &word_sets[rep_id]) >= threshold)
            .copied();

        match matched {
            Some(rep_id) => clusters
                .get_mut(&rep_id)
                .expect("representative has a cluster")
                .push(doc_id),
            None => {
                clusters.insert(doc_id, vec![doc_id]);
            }
        }
    }

    clusters.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_exact_clusters_group_identical_documents() {
        let clusters = exact_clusters(&docs(&[
            "Hello World",
            "Another Document",
            "hello world  ",
        ]));
        assert_eq!(clusters, vec![vec![0, 2], vec![1]]);
    }

    #[test]
    fn test_exact_clusters_keep_singletons() {
        let clusters = exact_clusters(&docs(&["a", "b", "c"]));
        assert_eq!(clusters.len(), 3);
    }

    #[test]
    fn test_ngram_set_window_count() {
        let grams = ngram_set("one two three four", 3);
        assert_eq!(grams.len(), 2);
        assert!(grams.contains(&vec!["one", "two", "three"]));
        assert!(grams.contains(&vec!["two", "three", "four"]));
    }

    #[test]
    fn test_ngram_clusters_skip_short_documents() {
        let clusters = ngram_clusters(&docs(&["too short", "one two three four five"]), 3, 0.8);
        // Only the second document is clusterable.
        assert_eq!(clusters, vec![vec![1]]);
    }

    #[test]
    fn test_ngram_clusters_group_similar() {
        let clusters = ngram_clusters(
            &docs(&[
                "the quick brown fox jumps over the lazy dog",
                "the quick brown fox jumps over the lazy dog",
                "a wholly different sentence about other things",
            ]),
            3,
            0.8,
        );
        assert!(clusters.contains(&vec![0, 1]));
        assert!(clusters.contains(&vec![2]));
    }

    #[test]
    fn test_jaccard_clusters_group_reordered_words() {
        let clusters = jaccard_clusters(
            &docs(&[
                "alpha beta gamma delta",
                "delta gamma beta alpha",
                "epsilon zeta eta theta",
            ]),
            0.9,
        );
        assert!(clusters.contains(&vec![0, 1]));
        assert!(clusters.contains(&vec![2]));
    }

    #[test]
    fn test_jaccard_threshold_is_inclusive() {
        // Word sets {a, b} and {a, b, c}: J = 2/3.
        let clusters = jaccard_clusters(&docs(&["a b", "a b c"]), 2.0 / 3.0);
        assert_eq!(clusters, vec![vec![0, 1]]);
    }
}
