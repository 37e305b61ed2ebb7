use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use szflags_domain::standard::{self, groups, names};
use szflags_domain::{FlagSet, algebra};

fn bench_set_algebra(c: &mut Criterion) {
    let catalog = standard::catalog();
    let mut group = c.benchmark_group("set_algebra");

    let entity = catalog.flag(names::SZ_ENTITY_DEFAULT_FLAGS).unwrap().members();
    let export = catalog.flag(names::SZ_EXPORT_DEFAULT_FLAGS).unwrap().members();
    let all: FlagSet<'_> = catalog.base_flags().collect();

    let inputs = [("defaults", (&entity, &export)), ("all_vs_defaults", (&all, &entity))];

    for (label, (a, b)) in inputs {
        group.bench_with_input(BenchmarkId::new("union", label), &(a, b), |bench, (a, b)| {
            bench.iter(|| algebra::union(Some(*a), Some(*b)));
        });

        group.bench_with_input(BenchmarkId::new("intersects", label), &(a, b), |bench, (a, b)| {
            bench.iter(|| algebra::intersects(Some(*a), Some(*b)));
        });

        group.bench_with_input(BenchmarkId::new("display", label), a, |bench, a| {
            bench.iter(|| a.to_display_string());
        });
    }

    group.finish();
}

fn bench_display_mask(c: &mut Criterion) {
    let catalog = standard::catalog();
    let entity = catalog.group(groups::SZ_ENTITY_FLAGS).unwrap();

    c.bench_function("display_mask_entity_default", |bench| {
        bench.iter(|| entity.display_mask(black_box(0x0038_FBC0)));
    });
    c.bench_function("display_mask_unresolved_bits", |bench| {
        bench.iter(|| entity.display_mask(black_box(u64::MAX)));
    });
}

criterion_group!(benches, bench_set_algebra, bench_display_mask);
criterion_main!(benches);
