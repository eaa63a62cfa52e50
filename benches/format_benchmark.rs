//! Criterion measurement of template formatting throughput for a typical INSERT with
//! mixed argument types. Argument rows are built once up front so only encoding and
//! substitution are timed.

use chrono::{DateTime, FixedOffset};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use sql_literal::{Encoder, EscapeMap, SqlValue, Zone, format};

const TEMPLATE: &str =
    "INSERT INTO test (id, name, score, created_at, tags, payload) VALUES (?, ?, ?, ?, ?, ?)";

/// Resolve how many rows each iteration formats.
fn bench_rows() -> usize {
    std::env::var("BENCH_ROWS")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(1_000)
}

fn build_rows(count: usize) -> Vec<Vec<SqlValue>> {
    let base = DateTime::parse_from_rfc3339("2024-01-01T00:00:00+00:00")
        .unwrap_or_else(|_| DateTime::<FixedOffset>::default());
    (0..count)
        .map(|i| {
            vec![
                SqlValue::from(i),
                SqlValue::from(format!("user-{i}'s \"row\"\n")),
                SqlValue::from(i as f64 / 7.0),
                SqlValue::from(base + chrono::Duration::milliseconds(i as i64 * 1_250)),
                SqlValue::from(vec!["a", "b", "c"]),
                SqlValue::from(vec![(i % 256) as u8; 16]),
            ]
        })
        .collect()
}

fn format_benchmark(c: &mut Criterion) {
    let rows = build_rows(bench_rows());
    let mut group = c.benchmark_group("format");
    group.throughput(Throughput::Elements(rows.len() as u64));

    group.bench_with_input(BenchmarkId::new("global_map", rows.len()), &rows, |b, rows| {
        b.iter(|| {
            for row in rows {
                black_box(format(black_box(TEMPLATE), row));
            }
        });
    });

    let encoder = Encoder::new()
        .with_zone(Zone::Utc)
        .with_escape_map(EscapeMap::default().with_single_quote("''"));
    group.bench_with_input(BenchmarkId::new("private_map", rows.len()), &rows, |b, rows| {
        b.iter(|| {
            for row in rows {
                black_box(encoder.format(black_box(TEMPLATE), row));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, format_benchmark);
criterion_main!(benches);
