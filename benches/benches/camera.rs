// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use overlook_camera::ViewTransform;
use overlook_camera::orbit::OrbitCamera;
use overlook_camera::plan::PlanCamera;

fn bench_screen_to_world(c: &mut Criterion) {
    let mut group = c.benchmark_group("camera/screen_to_world");

    let plan = PlanCamera::new(1_920.0, 1_080.0);
    group.bench_function("plan", |b| {
        b.iter(|| black_box(plan.screen_to_world(black_box(Point::new(640.0, 480.0)))));
    });

    // The orbit conversion rebuilds and inverts the view-projection matrix
    // per call; this is the hot path for every pointer move over the 3D view.
    let mut orbit = OrbitCamera::new(1_920.0, 1_080.0);
    orbit.orbit_by(0.3, 0.1);
    group.bench_function("orbit", |b| {
        b.iter(|| black_box(orbit.screen_to_world(black_box(Point::new(640.0, 480.0)))));
    });
    group.finish();
}

fn bench_world_to_screen(c: &mut Criterion) {
    let mut group = c.benchmark_group("camera/world_to_screen");

    let plan = PlanCamera::new(1_920.0, 1_080.0);
    group.bench_function("plan", |b| {
        b.iter(|| black_box(plan.world_to_screen(black_box(Point::new(25.0, -40.0)))));
    });

    let orbit = OrbitCamera::new(1_920.0, 1_080.0);
    group.bench_function("orbit", |b| {
        b.iter(|| black_box(orbit.world_to_screen(black_box(Point::new(25.0, -40.0)))));
    });
    group.finish();
}

criterion_group!(benches, bench_screen_to_world, bench_world_to_screen);
criterion_main!(benches);
