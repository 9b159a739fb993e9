// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use overlook_formation::{DEFAULT_SPACING, plan};

fn bench_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("formation/plan");

    // Re-invoked on every group-move command, so it should stay cheap well
    // past realistic selection sizes.
    for count in [1_usize, 6, 10, 64, 256] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| black_box(plan(black_box(Point::new(50.0, 50.0)), count, DEFAULT_SPACING)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_plan);
criterion_main!(benches);
