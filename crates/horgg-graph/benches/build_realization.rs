use criterion::{black_box, criterion_group, criterion_main, Criterion};
use horgg_graph::{build_realization, check_bigraphic};

fn sequences() -> (Vec<usize>, Vec<usize>) {
    // 1_000 groups of size 6 over 3_000 nodes of membership 2
    (vec![6; 1_000], vec![2; 3_000])
}

fn build_realization_bench(c: &mut Criterion) {
    let (group_sizes, memberships) = sequences();
    c.bench_function("gale_ryser_3k", |b| {
        b.iter(|| check_bigraphic(black_box(&group_sizes), black_box(&memberships)).unwrap());
    });
    c.bench_function("build_realization_3k", |b| {
        b.iter(|| {
            let graph = build_realization(black_box(&group_sizes), black_box(&memberships));
            black_box(graph);
        });
    });
}

criterion_group!(benches, build_realization_bench);
criterion_main!(benches);
