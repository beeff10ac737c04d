//! LSH index behavior: multi-probe recall, S-curve shape, Union-Find
//! consolidation, bucket occupancy.

use near_dedup::config::LshParams;
use near_dedup::lsh::{s_curve, LshIndex};
use near_dedup::UnionFind;

fn corpus() -> Vec<String> {
    [
        "The quick brown fox jumps over the lazy dog",
        "The quick brown fox jumps over the dog",
        "Lazy dogs are quick to jump over",
        "A totally different sentence here",
        "Lazy foxes and dogs often jump",
        "A quick fox jumps over the lazy dog quickly",
    ]
    .iter()
    .map(|t| t.to_string())
    .collect()
}

#[test]
fn default_geometry_clusters_near_duplicates() {
    let mut index = LshIndex::new(&LshParams::default()).expect("valid params");
    for (doc_id, doc) in corpus().iter().enumerate() {
        index.add_document(doc_id, doc);
    }

    let clusters = index.cluster_candidates();
    let cluster_of_zero = clusters
        .values()
        .find(|members| members.contains(&0))
        .expect("document 0 is clustered");
    assert!(cluster_of_zero.contains(&1));
    assert!(clusters.values().any(|members| members.as_slice() == [3]));
}

#[test]
fn multi_probe_candidates_are_a_superset() {
    let plain_params = LshParams::default();
    let probed_params = LshParams {
        probes: 2,
        ..plain_params
    };

    let mut plain = LshIndex::new(&plain_params).expect("valid params");
    let mut probed = LshIndex::multi_probe(&probed_params).expect("valid params");
    for (doc_id, doc) in corpus().iter().enumerate() {
        plain.add_document(doc_id, doc);
        probed.add_document(doc_id, doc);
    }

    let plain_candidates = plain.find_candidates();
    let probed_candidates = probed.find_candidates();
    assert!(
        plain_candidates.is_subset(&probed_candidates),
        "multi-probe must not lose candidates: {:?} vs {:?}",
        plain_candidates,
        probed_candidates
    );
}

#[test]
fn candidate_pairs_are_canonical_and_distinct() {
    let mut index = LshIndex::new(&LshParams::default()).expect("valid params");
    for (doc_id, doc) in corpus().iter().enumerate() {
        index.add_document(doc_id, doc);
    }

    for &(a, b) in &index.find_candidates() {
        assert!(a < b, "pair ({a}, {b}) is not canonical");
    }
}

#[test]
fn s_curve_matches_the_closed_form() {
    for (num_bands, rows_per_band) in [(10usize, 5usize), (20, 5), (25, 4), (50, 2)] {
        for step in 0..=100 {
            let j = step as f64 / 100.0;
            let expected = 1.0 - (1.0 - j.powi(rows_per_band as i32)).powi(num_bands as i32);
            let actual = s_curve(j, num_bands, rows_per_band);
            assert!(
                (actual - expected).abs() < 1e-9,
                "S-curve mismatch at J = {j} for B = {num_bands}, R = {rows_per_band}"
            );
        }
    }
}

#[test]
fn s_curve_is_strictly_increasing() {
    for (num_bands, rows_per_band) in [(10usize, 5usize), (25, 4)] {
        let mut previous = s_curve(0.0, num_bands, rows_per_band);
        for step in 1..=100 {
            let j = step as f64 / 100.0;
            let p = s_curve(j, num_bands, rows_per_band);
            assert!(
                p > previous,
                "not increasing at J = {j} for B = {num_bands}, R = {rows_per_band}"
            );
            previous = p;
        }
    }
}

#[test]
fn union_find_scenario() {
    let mut forest = UnionFind::new();
    for i in 1..=5 {
        forest.add(i);
    }
    forest.union(1, 2);
    forest.union(3, 4);
    forest.union(2, 3);

    let root = forest.find(1);
    for i in 2..=4 {
        assert_eq!(forest.find(i), root);
    }
    assert_eq!(forest.find(5), 5);
}

#[test]
fn indexed_document_lands_in_exactly_b_buckets() {
    let params = LshParams::default();
    let mut index = LshIndex::new(&params).expect("valid params");
    index.add_document(42, "an ordinary document with enough text to shingle");

    let stats = index.stats();
    assert_eq!(stats.total_documents, 1);
    assert_eq!(stats.keys_per_signature, params.num_bands);
    // Duplicate band keys within one document merge buckets, so the bucket
    // count is at most B while total occupancy is exactly B.
    assert!(stats.total_buckets <= params.num_bands);
    let occupancy = (stats.avg_bucket_size * stats.total_buckets as f64).round() as usize;
    assert_eq!(occupancy, params.num_bands);
}
