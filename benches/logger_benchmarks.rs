//! Criterion benchmarks for ns_debug_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use ns_debug_logger::core::env::EnvConfig;
use ns_debug_logger::prelude::*;
use ns_debug_logger::{matches, NamespacePattern};

fn config(pattern: &str, level: LogLevel) -> EnvConfig {
    EnvConfig {
        pattern: pattern.to_string(),
        level,
        color: false,
    }
}

// ============================================================================
// Logger Creation Benchmarks
// ============================================================================

fn bench_logger_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("logger_creation");
    group.throughput(Throughput::Elements(1));

    let config = config("app:*", LogLevel::Debug);

    group.bench_function("from_config", |b| {
        b.iter(|| {
            let logger = Logger::builder(black_box("app:db"))
                .sink(None)
                .build_from_config(&config)
                .unwrap();
            black_box(logger)
        });
    });

    let parent = Logger::builder("app")
        .sink(None)
        .build_from_config(&config)
        .unwrap();

    group.bench_function("child", |b| {
        b.iter(|| black_box(parent.child(black_box("db")).unwrap()));
    });

    group.finish();
}

// ============================================================================
// Dispatch Benchmarks
// ============================================================================

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    group.throughput(Throughput::Elements(1));

    let enabled = Logger::builder("app:db")
        .sink(None)
        .build_from_config(&config("*", LogLevel::Debug))
        .unwrap();
    group.bench_function("enabled", |b| {
        b.iter(|| enabled.info(black_box("Info message")));
    });

    let below_threshold = Logger::builder("app:db")
        .sink(None)
        .build_from_config(&config("*", LogLevel::Error))
        .unwrap();
    group.bench_function("below_threshold", |b| {
        b.iter(|| below_threshold.info(black_box("Info message")));
    });

    let disabled = Logger::builder("other")
        .sink(None)
        .build_from_config(&config("app:*", LogLevel::Debug))
        .unwrap();
    group.bench_function("disabled_namespace", |b| {
        b.iter(|| disabled.error(black_box("Error message")));
    });

    group.finish();
}

// ============================================================================
// Pattern Benchmarks
// ============================================================================

fn bench_pattern(c: &mut Criterion) {
    let mut group = c.benchmark_group("pattern");

    group.bench_function("compile_and_match", |b| {
        b.iter(|| matches(black_box("app:db:pool"), black_box("app:*:pool")).unwrap());
    });

    let compiled = NamespacePattern::compile("app:*:pool").unwrap();
    group.bench_function("precompiled", |b| {
        b.iter(|| compiled.is_match(black_box("app:db:pool")));
    });

    group.finish();
}

criterion_group!(benches, bench_logger_creation, bench_dispatch, bench_pattern);
criterion_main!(benches);
