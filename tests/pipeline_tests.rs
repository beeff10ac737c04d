//! End-to-end pipeline tests: Bloom exact pass, clustering, corpus IO.

use near_dedup::baselines;
use near_dedup::dedup::{Deduplicator, DeduplicatorConfig};
use near_dedup::pipeline::{format_clusters, load_documents};
use std::io::Write;

fn docs(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|t| t.to_string()).collect()
}

#[test]
fn exact_duplicates_are_flagged_and_cluster_together() {
    let mut deduplicator =
        Deduplicator::new(DeduplicatorConfig::default()).expect("valid config");
    let report = deduplicator
        .deduplicate(&docs(&["Hello World", "Another Document", "Hello World"]))
        .expect("pipeline runs");

    assert_eq!(report.exact_duplicates, vec![2]);
    let cluster = report
        .clusters
        .iter()
        .find(|members| members.contains(&0))
        .expect("document 0 is clustered");
    assert!(cluster.contains(&2));
}

#[test]
fn ten_copies_form_one_exact_cluster() {
    let corpus: Vec<String> = (0..10)
        .map(|_| "The very same document body every single time".to_string())
        .collect();

    let mut deduplicator =
        Deduplicator::new(DeduplicatorConfig::default()).expect("valid config");
    let report = deduplicator.deduplicate(&corpus).expect("pipeline runs");

    // Every copy after the first trips the Bloom filter.
    assert_eq!(report.exact_duplicates, (1..10).collect::<Vec<_>>());
    // And all ten IDs land in a single cluster.
    assert!(report
        .clusters
        .iter()
        .any(|members| members.as_slice() == (0..10).collect::<Vec<_>>()));
}

#[test]
fn near_duplicates_cluster_under_default_geometry() {
    let corpus = docs(&[
        "The quick brown fox jumps over the lazy dog",
        "The quick brown fox jumps over the dog",
        "Lazy dogs are quick to jump over",
        "A totally different sentence here",
        "Lazy foxes and dogs often jump",
        "A quick fox jumps over the lazy dog quickly",
    ]);

    let mut deduplicator =
        Deduplicator::new(DeduplicatorConfig::default()).expect("valid config");
    let report = deduplicator.deduplicate(&corpus).expect("pipeline runs");

    let cluster_of_zero = report
        .clusters
        .iter()
        .find(|members| members.contains(&0))
        .expect("document 0 is clustered");
    assert!(
        cluster_of_zero.contains(&1),
        "documents 0 and 1 should share a cluster, got {:?}",
        report.clusters
    );

    assert!(
        report
            .clusters
            .iter()
            .any(|members| members.as_slice() == [3]),
        "document 3 should be a singleton, got {:?}",
        report.clusters
    );
}

#[test]
fn report_is_deterministic_for_a_given_corpus() {
    let corpus = docs(&[
        "shared content repeated across the corpus",
        "a first document that stands alone entirely",
        "shared content repeated across the corpus",
    ]);

    let run = |corpus: &[String]| {
        let mut deduplicator =
            Deduplicator::new(DeduplicatorConfig::default()).expect("valid config");
        deduplicator.deduplicate(corpus).expect("pipeline runs")
    };

    let first = run(&corpus);
    let second = run(&corpus);
    assert_eq!(first.clusters, second.clusters);
    assert_eq!(first.exact_duplicates, second.exact_duplicates);
}

#[test]
fn pipeline_agrees_with_exact_baseline_on_pure_duplicates() {
    let corpus = docs(&[
        "Hello World",
        "Another Document Entirely Here",
        "Hello World",
        "A Third Unique Piece Of Text",
    ]);

    let baseline: Vec<Vec<usize>> = baselines::exact_clusters(&corpus)
        .into_iter()
        .filter(|members| members.len() > 1)
        .collect();

    let mut deduplicator =
        Deduplicator::new(DeduplicatorConfig::default()).expect("valid config");
    let report = deduplicator.deduplicate(&corpus).expect("pipeline runs");
    let pipeline: Vec<Vec<usize>> = report
        .clusters
        .into_iter()
        .filter(|members| members.len() > 1)
        .collect();

    assert_eq!(baseline, vec![vec![0, 2]]);
    assert_eq!(pipeline, baseline);
}

// ============================================================================
// Corpus IO
// ============================================================================

#[test]
fn tsv_loader_takes_second_column_and_skips_blanks() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("docs.tsv");
    let mut file = std::fs::File::create(&path).expect("create");
    writeln!(file, "row0\tfirst document\tignored third column").expect("write");
    writeln!(file).expect("write");
    writeln!(file, "bare document without tabs").expect("write");
    writeln!(file, "row3\t  padded text  ").expect("write");

    let documents = load_documents(&path).expect("loads");
    assert_eq!(
        documents,
        vec!["first document", "bare document without tabs", "padded text"]
    );
}

#[test]
fn cluster_lines_are_sorted_and_space_separated() {
    let clusters = vec![vec![2, 5], vec![0, 1, 7], vec![3]];
    let text = format_clusters(&clusters);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, vec!["0 1 7", "2 5", "3"]);
}
