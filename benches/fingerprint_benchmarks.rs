//! SimHash fingerprinting benchmarks
//!
//! Measures the full text pipeline at several fingerprint widths and the
//! cost of comparing two fingerprints.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use simhash_rs::detectors::simhash::compare;
use simhash_rs::SimHash;

/// Generate a synthetic document with a skewed vocabulary
fn generate_document(words: usize, seed: usize) -> String {
    (0..words)
        .map(|i| format!("term{}", (i * 7 + seed) % (words / 4 + 1)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn bench_fingerprint_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("fingerprint_text");
    let document = generate_document(2_000, 3);

    for bits in [64usize, 128, 256] {
        let simhash = SimHash::new(bits);
        group.bench_with_input(BenchmarkId::from_parameter(bits), &document, |b, text| {
            b.iter(|| simhash.fingerprint_text(black_box(text)))
        });
    }

    group.finish();
}

fn bench_compare(c: &mut Criterion) {
    let simhash = SimHash::new(128);
    let first = simhash.fingerprint_text(&generate_document(500, 1));
    let second = simhash.fingerprint_text(&generate_document(500, 2));

    c.bench_function("compare_128", |b| {
        b.iter(|| compare(black_box(&first), black_box(&second)))
    });
}

criterion_group!(benches, bench_fingerprint_text, bench_compare);
criterion_main!(benches);
