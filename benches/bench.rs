//! Criterion benchmarks for orthovar.
//!
//! Covers the two hot paths: case-pattern mirroring and bulk word
//! translation.

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use orthovar::casing::mirror_case;
use orthovar::dictionary::{Dictionary, Direction};

/// Generate a word list mixing known and unknown words in varied casings.
fn generate_words(count: usize) -> Vec<String> {
    let samples = [
        "colour", "Colour", "COLOUR", "coLour", "centre", "theatre", "organise", "Analyse",
        "travelled", "catalogue", "defence", "aluminium", "tyre", "unknownword", "zebra",
        "Sidewalk",
    ];

    (0..count)
        .map(|i| samples[i % samples.len()].to_string())
        .collect()
}

fn bench_mirror_case(c: &mut Criterion) {
    let mut group = c.benchmark_group("mirror_case");

    group.bench_function("titlecase", |b| {
        b.iter(|| mirror_case(black_box("color"), black_box("Colour")))
    });
    group.bench_function("uppercase", |b| {
        b.iter(|| mirror_case(black_box("color"), black_box("COLOUR")))
    });
    group.bench_function("mixed", |b| {
        b.iter(|| mirror_case(black_box("airplane"), black_box("AeRopLaNe")))
    });

    group.finish();
}

fn bench_translate(c: &mut Criterion) {
    let dict = Dictionary::new();
    let words = generate_words(1000);

    let mut group = c.benchmark_group("translate");
    group.throughput(Throughput::Elements(words.len() as u64));

    group.bench_function("translate_all_match_case", |b| {
        b.iter(|| {
            dict.translate_all(
                black_box(&words),
                Direction::BritishToAmerican,
                true,
            )
        })
    });
    group.bench_function("translate_all_stored_case", |b| {
        b.iter(|| {
            dict.translate_all(
                black_box(&words),
                Direction::BritishToAmerican,
                false,
            )
        })
    });

    group.finish();
}

criterion_group!(benches, bench_mirror_case, bench_translate);
criterion_main!(benches);
