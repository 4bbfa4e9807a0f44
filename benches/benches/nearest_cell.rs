// Copyright 2025 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Size, Vec2};
use parterre_grid::{GridGeometry, PanBounds};

fn bench_nearest_cell(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid/nearest_cell");

    // The search is a deliberate exhaustive scan (it only runs at gesture
    // boundaries); this tracks how far that stays cheap as grids grow.
    for side in [10_usize, 30, 100] {
        let grid = GridGeometry::new(side, side, 100.0, 20.0, 20.0, Size::new(300.0, 500.0));
        let bounds = PanBounds::from_geometry(&grid);
        group.throughput(Throughput::Elements((side * side) as u64));

        group.bench_with_input(BenchmarkId::from_parameter(side), &grid, |b, grid| {
            b.iter(|| {
                black_box(grid.nearest_cell(&bounds, black_box(Vec2::new(-333.0, -214.0))))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_nearest_cell);
criterion_main!(benches);
