//! Benchmark for compiling schemas into DDL.
//!
//! Measures `recreate_all` over schemas of increasing size, where every table
//! has a mix of column types, defaults, an index and a reference to the
//! previous table.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use serde_json::json;
use sqlite_schema_ddl::{Column, Index, RawSql, Schema, Table, recreate_all};
use std::hint::black_box;

fn build_schema(tables: usize) -> Schema {
    (0..tables)
        .map(|i| {
            let mut table = Table::new()
                .column("id", Column::number().primary_key())
                .column("name", Column::text().unique().default("it's"))
                .column("active", Column::boolean().default(true))
                .column("created_at", Column::date().default(RawSql::NOW))
                .column(
                    "meta",
                    Column::json().default(json!({"tags": ["a", "b"], "n": i})),
                )
                .index(
                    format!("table_{i}_name"),
                    Index::on(["name", "active"]).unique(),
                );
            if i > 0 {
                table = table.column(
                    "parent",
                    Column::number()
                        .optional()
                        .references(format!("table_{}", i - 1), "id"),
                );
            }
            (format!("table_{i}"), table)
        })
        .collect()
}

fn benchmark_recreate_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("recreate_all");

    for tables in [1usize, 10, 100] {
        let schema = build_schema(tables);
        group.throughput(Throughput::Elements(tables as u64));
        group.bench_with_input(BenchmarkId::from_parameter(tables), &schema, |b, schema| {
            b.iter(|| recreate_all(black_box(schema)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_recreate_all);
criterion_main!(benches);
