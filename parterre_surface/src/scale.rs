// Copyright 2025 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::rc::Rc;
use core::cell::Cell;

use kurbo::Vec2;
use parterre_grid::{CellIndex, GridGeometry, distance_ratio};
use parterre_motion::{MotionValue, Spring, SpringParams, Subscription};

use crate::SurfaceController;

/// Scale band a cell moves through as it approaches the viewport center.
///
/// A cell exactly under the center renders at `max`; a cell at the far edge
/// of the viewport (distance ratio 1) renders at `min`. Ranges are plain
/// values so hosts can run different bands for different treatments, for
/// example a wider `0.85..1.20` band for a highlighted card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleRange {
    /// Scale at distance ratio 1 (far from the center).
    pub min: f64,
    /// Scale at distance ratio 0 (under the center).
    pub max: f64,
}

impl ScaleRange {
    /// Creates a new range.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Maps a distance ratio in `[0, 1]` linearly into the range.
    #[must_use]
    pub fn scale_for(&self, ratio: f64) -> f64 {
        self.min + (self.max - self.min) * (1.0 - ratio)
    }
}

impl Default for ScaleRange {
    /// The grid-level band: `0.75` at the edges up to `1.10` at the center.
    fn default() -> Self {
        Self::new(0.75, 1.10)
    }
}

/// Smoothed, distance-driven scale of one grid cell.
///
/// A `CellScale` observes the two axis offset values and recomputes the
/// cell's distance ratio on every mutation, so the ratio is always current
/// without polling. The mapped scale is then smoothed through a soft spring
/// to avoid visible stepping while the surface is panned quickly; hosts
/// call [`CellScale::advance`] once per frame, after the surface
/// controller's own advance, and apply the returned value to the cell's
/// visual representation.
///
/// Observation is scoped to the tracker's lifetime: dropping it
/// deregisters both listeners (mount/unmount).
#[derive(Debug)]
pub struct CellScale {
    ratio: Rc<Cell<f64>>,
    spring: Spring,
    range: ScaleRange,
    _x_subscription: Subscription,
    _y_subscription: Subscription,
}

impl CellScale {
    /// Attaches a tracker for `cell` to a pair of observable axis offsets.
    ///
    /// The tracker starts directly at its current mapped scale; there is no
    /// animation toward the initial value.
    #[must_use]
    pub fn attach(
        x: &MotionValue,
        y: &MotionValue,
        geometry: &GridGeometry,
        cell: CellIndex,
        range: ScaleRange,
        smoothing: SpringParams,
    ) -> Self {
        let cell_center = geometry.cell_center(cell);
        let viewport_center = geometry.viewport_center();
        let max_distance = geometry.max_center_distance();

        let initial = distance_ratio(
            Vec2::new(x.get(), y.get()),
            cell_center,
            viewport_center,
            max_distance,
        );
        let ratio = Rc::new(Cell::new(initial));

        // Each axis listener recomputes the ratio from its fresh value and
        // the other axis's current one; the Y axis is always mutated last
        // within a frame, so the final ratio of a frame sees the full pair.
        let x_subscription = x.subscribe({
            let ratio = ratio.clone();
            let y = y.clone();
            move |new_x| {
                ratio.set(distance_ratio(
                    Vec2::new(new_x, y.get()),
                    cell_center,
                    viewport_center,
                    max_distance,
                ));
            }
        });
        let y_subscription = y.subscribe({
            let ratio = ratio.clone();
            let x = x.clone();
            move |new_y| {
                ratio.set(distance_ratio(
                    Vec2::new(x.get(), new_y),
                    cell_center,
                    viewport_center,
                    max_distance,
                ));
            }
        });

        let spring = Spring::new(range.scale_for(initial), smoothing);
        Self {
            ratio,
            spring,
            range,
            _x_subscription: x_subscription,
            _y_subscription: y_subscription,
        }
    }

    /// Returns the scale band.
    #[must_use]
    pub fn range(&self) -> ScaleRange {
        self.range
    }

    /// Returns the live distance ratio in `[0, 1]`.
    #[must_use]
    pub fn distance_ratio(&self) -> f64 {
        self.ratio.get()
    }

    /// Returns the unsmoothed scale the tracker is currently aiming for.
    #[must_use]
    pub fn target_scale(&self) -> f64 {
        self.range.scale_for(self.ratio.get())
    }

    /// Returns the smoothed scale as of the last advance.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.spring.position()
    }

    /// Advances the smoothing by `dt` seconds and returns the new scale.
    pub fn advance(&mut self, dt: f64) -> f64 {
        self.spring.set_target(self.range.scale_for(self.ratio.get()));
        self.spring.step(dt)
    }
}

impl SurfaceController {
    /// Attaches a [`CellScale`] for `cell` to this surface's offset, using
    /// the standard smoothing profile.
    #[must_use]
    pub fn cell_scale(&self, cell: CellIndex, range: ScaleRange) -> CellScale {
        CellScale::attach(
            &self.x(),
            &self.y(),
            &self.geometry(),
            cell,
            range,
            SpringParams::SMOOTHING,
        )
    }
}
