//! Benchmarks for signature computation, index build, and candidate
//! enumeration.

use criterion::{criterion_group, criterion_main, Criterion};
use near_dedup::config::LshParams;
use near_dedup::lsh::LshIndex;
use near_dedup::minhash::{shingles, MinHasher};
use std::hint::black_box;

/// Generate a corpus of sentences with controlled overlap: every tenth
/// document is a light perturbation of a base sentence, the rest are
/// distinct.
fn generate_corpus(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            if i % 10 == 0 {
                format!("the quick brown fox jumps over the lazy dog number {}", i / 10)
            } else {
                format!(
                    "document {i} talks about subject {} with distinct vocabulary {}",
                    i % 97,
                    i * 31
                )
            }
        })
        .collect()
}

fn benchmark_minhash_signature(c: &mut Criterion) {
    let hasher = MinHasher::new(50);
    let shingle_set = shingles(
        "the quick brown fox jumps over the lazy dog and keeps on running through the field",
        5,
    );

    c.bench_function("minhash_signature_50_hashes", |b| {
        b.iter(|| {
            let signature = hasher.signature(black_box(&shingle_set));
            black_box(signature);
        })
    });
}

fn benchmark_index_build(c: &mut Criterion) {
    let corpus = generate_corpus(500);

    c.bench_function("lsh_index_build_500_docs", |b| {
        b.iter(|| {
            let mut index = LshIndex::new(&LshParams::default()).expect("valid params");
            for (doc_id, doc) in corpus.iter().enumerate() {
                index.add_document(doc_id, doc);
            }
            black_box(index.len());
        })
    });
}

fn benchmark_find_candidates(c: &mut Criterion) {
    let corpus = generate_corpus(500);
    let mut index = LshIndex::new(&LshParams::default()).expect("valid params");
    for (doc_id, doc) in corpus.iter().enumerate() {
        index.add_document(doc_id, doc);
    }

    c.bench_function("lsh_find_candidates_500_docs", |b| {
        b.iter(|| {
            let candidates = index.find_candidates();
            black_box(candidates.len());
        })
    });
}

fn benchmark_cluster_candidates(c: &mut Criterion) {
    let corpus = generate_corpus(500);
    let mut index = LshIndex::new(&LshParams::default()).expect("valid params");
    for (doc_id, doc) in corpus.iter().enumerate() {
        index.add_document(doc_id, doc);
    }

    c.bench_function("lsh_cluster_candidates_500_docs", |b| {
        b.iter(|| {
            let clusters = index.cluster_candidates();
            black_box(clusters.len());
        })
    });
}

criterion_group!(
    benches,
    benchmark_minhash_signature,
    benchmark_index_build,
    benchmark_find_candidates,
    benchmark_cluster_candidates
);
criterion_main!(benches);
