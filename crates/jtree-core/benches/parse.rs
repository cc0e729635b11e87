//! Parse throughput over synthetic documents of increasing size.

use criterion::{criterion_group, criterion_main, Criterion};
use jtree_core::parse;
use std::hint::black_box;

/// A flat-ish document with `records` rows of mixed leaf kinds.
fn synthetic_document(records: usize) -> String {
    let mut doc = String::from("{\n  \"records\": [\n");
    for i in 0..records {
        if i > 0 {
            doc.push_str(",\n");
        }
        doc.push_str(&format!(
            "    {{\"id\": {i}, \"name\": \"record {i}\", \"score\": {i}.5, \"active\": {}}}",
            i % 2 == 0
        ));
    }
    doc.push_str("\n  ],\n  \"total\": ");
    doc.push_str(&records.to_string());
    doc.push_str("\n}");
    doc
}

fn bench_parse(c: &mut Criterion) {
    let small = synthetic_document(10);
    let large = synthetic_document(1000);

    c.bench_function("parse_10_records", |b| {
        b.iter(|| parse(black_box(&small)).unwrap())
    });
    c.bench_function("parse_1000_records", |b| {
        b.iter(|| parse(black_box(&large)).unwrap())
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
