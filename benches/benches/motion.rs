// Copyright 2025 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Size, Vec2};
use parterre_motion::{Inertia, InertiaParams, Spring, SpringParams};
use parterre_surface::{SurfaceConfig, SurfaceController};

const DT: f64 = 1.0 / 120.0;

fn bench_spring_second(c: &mut Criterion) {
    c.bench_function("motion/spring_second", |b| {
        b.iter_batched(
            || {
                let mut spring = Spring::new(0.0, SpringParams::SETTLE);
                spring.set_target(-420.0);
                spring
            },
            |mut spring| {
                for _ in 0..120 {
                    black_box(spring.step(DT));
                }
                black_box(spring);
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_inertia_second(c: &mut Criterion) {
    c.bench_function("motion/inertia_second", |b| {
        b.iter_batched(
            || Inertia::from_velocity(0.0, -800.0, InertiaParams::default()),
            |mut inertia| {
                for _ in 0..120 {
                    black_box(inertia.step(DT));
                }
                black_box(inertia);
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_full_gesture(c: &mut Criterion) {
    let grid =
        parterre_grid::GridGeometry::new(10, 10, 100.0, 20.0, 20.0, Size::new(300.0, 500.0));

    // Drag, flick, and run the frame loop until the surface rests: the
    // whole per-gesture cost including the settle's nearest-cell search.
    c.bench_function("surface/full_gesture", |b| {
        b.iter_batched(
            || SurfaceController::new(grid, SurfaceConfig::default()),
            |mut surface| {
                surface.gesture_start();
                surface.gesture_move(Vec2::new(-120.0, -90.0));
                surface.gesture_end(Vec2::new(-600.0, -400.0));
                while surface.has_active_animations() || !surface.is_settled() {
                    surface.advance(DT);
                }
                black_box(surface);
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_spring_second,
    bench_inertia_second,
    bench_full_gesture
);
criterion_main!(benches);
