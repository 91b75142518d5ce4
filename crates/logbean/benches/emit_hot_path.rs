//! Emit path benchmarks
//!
//! Measures the cost of one record through filter, decoration and encoding,
//! and the cost of a call that is filtered out.

use criterion::{Criterion, criterion_group, criterion_main};
use logbean::options::{with_fields, with_level, with_service, with_sink, with_writer};
use logbean::{Logger, SharedWriter, SinkKind, kv};
use std::hint::black_box;

fn logger(sink: SinkKind, level: &str) -> Logger {
    logbean::init([
        with_service("bench"),
        with_level(level),
        with_sink(sink),
        with_fields([("region", "eu"), ("node", "a1")]),
        with_writer(SharedWriter::new(std::io::sink())),
    ])
}

/// Enabled records, both encodings
fn bench_emit(c: &mut Criterion) {
    let mut group = c.benchmark_group("emit");

    let json = logger(SinkKind::StructuredFile, "info");
    group.bench_function("json", |b| {
        b.iter(|| json.info(black_box(["user", "42", "action", "login"])));
    });

    let logfmt = logger(SinkKind::PlainFile, "info");
    group.bench_function("logfmt", |b| {
        b.iter(|| logfmt.info(black_box(["user", "42", "action", "login"])));
    });

    group.bench_function("kv_macro", |b| {
        b.iter(|| json.warn(kv!(user = black_box(42), ok = true, msg = "with spaces")));
    });

    group.finish();
}

/// Calls below the threshold
fn bench_filtered(c: &mut Criterion) {
    let logger = logger(SinkKind::StructuredFile, "error");

    c.bench_function("filtered_debug", |b| {
        b.iter(|| logger.debug(black_box(["user", "42"])));
    });
}

criterion_group!(benches, bench_emit, bench_filtered);
criterion_main!(benches);
