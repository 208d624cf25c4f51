//! Benchmarks for query evaluation.
//!
//! Setup (table generation) is excluded from measurement; each benchmark times
//! one full `evaluate` call or one pipeline stage.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use sqeval_core::schema::{Table, TableBuilder};
use sqeval_core::{SqlType, Value};
use sqeval_query::ast::{CmpOp, Condition, Query, Term};
use sqeval_query::executor::{build_cross_product, filter};
use sqeval_query::{evaluate, InMemoryDataSource};

// ============================================================================
// Data Generation Utilities
// ============================================================================

/// Creates a table `{<prefix>id:int, <prefix>name:str}` with `count` rows.
fn create_table(prefix: &str, count: usize) -> Table {
    let mut builder = TableBuilder::new()
        .add_column(&format!("{}id", prefix), SqlType::Int)
        .unwrap()
        .add_column(&format!("{}name", prefix), SqlType::Str)
        .unwrap();
    for i in 0..count {
        builder = builder
            .add_row(vec![Value::Int(i as i64), Value::Str(format!("name_{}", i))])
            .unwrap();
    }
    builder.build()
}

// ============================================================================
// Stage Benchmarks
// ============================================================================

fn bench_cross_product(c: &mut Criterion) {
    let mut group = c.benchmark_group("cross_product");

    for size in [10, 100, 300].iter() {
        let left = create_table("l", *size);
        let right = create_table("r", *size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(build_cross_product(&[("l", &left), ("r", &right)])))
        });
    }

    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");

    for size in [100, 300].iter() {
        let left = create_table("l", *size);
        let right = create_table("r", *size);
        let product = build_cross_product(&[("l", &left), ("r", &right)]);
        let conditions = [Condition::new(
            Term::column("l", "lid"),
            CmpOp::Eq,
            Term::column("r", "rid"),
        )];

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter_batched(
                || product.rows.clone(),
                |rows| black_box(filter(&product.schema, rows, &conditions).unwrap()),
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

// ============================================================================
// End-to-End Benchmarks
// ============================================================================

fn bench_e2e_join_filter_project(c: &mut Criterion) {
    let mut group = c.benchmark_group("e2e_join_filter_project");

    for size in [10, 100, 300].iter() {
        let source = InMemoryDataSource::new()
            .with_table("l", create_table("l", *size))
            .with_table("r", create_table("r", *size));
        let query = Query::builder()
            .from("l", "left")
            .from("r", "right")
            .select_unqualified("name", "lname")
            .filter(Term::unqualified("lid"), CmpOp::Eq, Term::unqualified("rid"))
            .filter(Term::unqualified("lid"), CmpOp::Ge, Term::literal(5i64))
            .build();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(evaluate(&query, &source).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_cross_product,
    bench_filter,
    bench_e2e_join_filter_project,
);

criterion_main!(benches);
