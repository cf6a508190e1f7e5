use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use cqlbuilder::{
    BatchBuilder, CqlBuilder, SelectBuilder, UpdateBuilder, eq, exists, in_list, insert, select,
    start_batch, update,
};

/// SELECT col0, col1, ... FROM t WHERE col0=? AND col1=? ...
fn build_select(n: usize) -> SelectBuilder {
    let mut builder = select("ks.t");
    for i in 0..n {
        builder = builder
            .add_column(&format!("col{i}"))
            .where_(eq(format!("col{i}"), i as i64));
    }
    builder
}

fn build_update(n: usize) -> UpdateBuilder {
    let mut builder = update("ks.t").where_(eq("id", 1_i64)).if_(exists());
    for i in 0..n {
        builder = builder.set_value(&format!("col{i}"), format!("value{i}"));
    }
    builder
}

fn bench_to_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("cql_builder/to_query");

    for n in [1, 5, 10, 50, 100] {
        let builder = build_select(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &builder, |b, builder| {
            b.iter(|| black_box(builder.to_query()));
        });
    }

    group.finish();
}

fn bench_build_and_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("cql_builder/build_and_render");

    for n in [1, 5, 10, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(build_update(n).to_query()));
        });
    }

    group.finish();
}

fn bench_in_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("cql_builder/in_list");

    for n in [5, 20, 100, 500] {
        let values: Vec<i64> = (0..n).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &values, |b, values| {
            b.iter(|| {
                let builder = select("ks.t")
                    .add_column("id")
                    .where_(in_list("id", values.clone()));
                black_box(builder.to_query())
            });
        });
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("cql_builder/batch");

    for n in [10, 100, 1000] {
        let batch: BatchBuilder = (0..n).fold(start_batch(), |batch, i| {
            batch.add(
                insert("ks.t")
                    .set_value("id", i as i64)
                    .set_value("name", format!("row{i}")),
            )
        });
        group.bench_with_input(BenchmarkId::from_parameter(n), &batch, |b, batch| {
            b.iter(|| black_box(batch.to_statements()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_to_query,
    bench_build_and_render,
    bench_in_list,
    bench_batch
);
criterion_main!(benches);
