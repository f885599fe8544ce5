use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use kata_kinematics::{Scenario, distance_travelled, try_distance_travelled};
use std::hint::black_box;

fn bench_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance_travelled");
    let scenario = Scenario::new(10.0, 20.0, 5.0, 2.0);

    for (label, time) in [("primary_phase", 1.0), ("secondary_phase", 5.0)] {
        group.bench_with_input(BenchmarkId::new("unchecked", label), &time, |b, t| {
            b.iter(|| distance_travelled(black_box(&scenario), black_box(*t)));
        });

        group.bench_with_input(BenchmarkId::new("validated", label), &time, |b, t| {
            b.iter(|| try_distance_travelled(black_box(&scenario), black_box(*t)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_distance);
criterion_main!(benches);
