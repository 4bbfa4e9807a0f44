// Copyright 2025 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless gesture walkthrough.
//!
//! Drives a full drag / flick / settle cycle over a 10x10 grid at a fixed
//! 120 Hz clock and prints the surface offset, the nearest cell, and two
//! cell scales (the grid band and the wider highlighted-card band) as the
//! motion plays out. Useful for eyeballing the physics without wiring up a
//! renderer.

use kurbo::{Size, Vec2};
use parterre_grid::GridGeometry;
use parterre_motion::SpringParams;
use parterre_surface::{CellScale, ScaleRange, SurfaceConfig, SurfaceController};

const DT: f64 = 1.0 / 120.0;

fn main() {
    let grid = GridGeometry::new(10, 10, 100.0, 20.0, 20.0, Size::new(300.0, 500.0));
    let mut surface = SurfaceController::new(grid, SurfaceConfig::default());

    let tracked = surface.nearest_cell();
    let mut grid_scale = surface.cell_scale(tracked, ScaleRange::default());
    let mut card_scale = CellScale::attach(
        &surface.x(),
        &surface.y(),
        &grid,
        tracked,
        ScaleRange::new(0.85, 1.20),
        SpringParams::SMOOTHING,
    );

    println!(
        "pre-snapped to cell ({}, {}) at offset ({:.1}, {:.1})",
        tracked.col,
        tracked.row,
        surface.offset().x,
        surface.offset().y
    );

    // A short drag toward the lower-right of the grid...
    surface.gesture_start();
    for _ in 0..12 {
        surface.gesture_move(Vec2::new(-9.0, -14.0));
        surface.advance(DT);
        grid_scale.advance(DT);
        card_scale.advance(DT);
    }

    // ...released as a flick.
    surface.gesture_end(Vec2::new(-700.0, -500.0));

    let mut frame = 0_u32;
    while surface.has_active_animations() || !surface.is_settled() {
        surface.advance(DT);
        grid_scale.advance(DT);
        card_scale.advance(DT);
        if frame % 12 == 0 {
            let offset = surface.offset();
            let near = surface.nearest_cell();
            println!(
                "t={:>5.2}s offset=({:>7.1}, {:>7.1}) nearest=({}, {}) scale={:.3} card={:.3}",
                f64::from(frame) * DT,
                offset.x,
                offset.y,
                near.col,
                near.row,
                grid_scale.scale(),
                card_scale.scale()
            );
        }
        frame += 1;
    }

    let rest = surface.offset();
    let cell = surface.nearest_cell();
    println!(
        "settled on cell ({}, {}) at offset ({:.1}, {:.1}) after {:.2}s",
        cell.col,
        cell.row,
        rest.x,
        rest.y,
        f64::from(frame) * DT
    );
}
