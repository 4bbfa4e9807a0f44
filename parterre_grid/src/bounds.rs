// Copyright 2025 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

use crate::GridGeometry;

/// Closed per-axis range the surface offset may rest in.
///
/// The grid can never be pushed past its own origin, so both maxima are
/// always zero. The minima are how far the grid may be pulled up/left before
/// its far edge would detach from the viewport's far edge:
/// `min_x = min(0, viewport_width - content_width)`, same for Y.
///
/// When the content fits inside the viewport on an axis, both bounds
/// collapse to zero and the range degenerates to the single point `0`; any
/// offset on that axis is then out of bounds except `0` itself, and
/// [`PanBounds::overflow_x`]/[`PanBounds::overflow_y`] report the full
/// excursion. `min <= max` holds on both axes by construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanBounds {
    /// Lowest legal X offset (most negative pan to the left).
    pub min_x: f64,
    /// Highest legal X offset, always zero.
    pub max_x: f64,
    /// Lowest legal Y offset (most negative pan upward).
    pub min_y: f64,
    /// Highest legal Y offset, always zero.
    pub max_y: f64,
}

impl PanBounds {
    /// Derives the legal offset range from a grid description.
    #[must_use]
    pub fn from_geometry(geometry: &GridGeometry) -> Self {
        let content = geometry.content_size();
        let viewport = geometry.viewport();
        Self {
            min_x: (viewport.width - content.width).min(0.0),
            max_x: 0.0,
            min_y: (viewport.height - content.height).min(0.0),
            max_y: 0.0,
        }
    }

    /// Clamps an offset into the legal range, each axis independently.
    #[must_use]
    pub fn clamp(&self, offset: Vec2) -> Vec2 {
        Vec2::new(
            offset.x.clamp(self.min_x, self.max_x),
            offset.y.clamp(self.min_y, self.max_y),
        )
    }

    /// Returns the positive excursion of `x` beyond the nearer X bound,
    /// or `0` when `x` is inside the range.
    #[must_use]
    pub fn overflow_x(&self, x: f64) -> f64 {
        (self.min_x - x).max(x - self.max_x).max(0.0)
    }

    /// Returns the positive excursion of `y` beyond the nearer Y bound,
    /// or `0` when `y` is inside the range.
    #[must_use]
    pub fn overflow_y(&self, y: f64) -> f64 {
        (self.min_y - y).max(y - self.max_y).max(0.0)
    }

    /// Returns `true` if the offset is inside the range on both axes.
    #[must_use]
    pub fn contains(&self, offset: Vec2) -> bool {
        self.overflow_x(offset.x) == 0.0 && self.overflow_y(offset.y) == 0.0
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Size, Vec2};

    use super::PanBounds;
    use crate::GridGeometry;

    #[test]
    fn bounds_match_viewport_minus_content() {
        let grid = GridGeometry::new(10, 10, 100.0, 20.0, 20.0, Size::new(300.0, 500.0));
        let bounds = PanBounds::from_geometry(&grid);
        assert_eq!(bounds.min_x, -900.0);
        assert_eq!(bounds.min_y, -700.0);
        assert_eq!(bounds.max_x, 0.0);
        assert_eq!(bounds.max_y, 0.0);
        assert!(bounds.min_x <= bounds.max_x && bounds.min_y <= bounds.max_y);
    }

    #[test]
    fn small_content_degenerates_to_a_point_range() {
        // A 2x2 grid that fits entirely inside a large viewport.
        let grid = GridGeometry::new(2, 2, 10.0, 2.0, 4.0, Size::new(400.0, 400.0));
        let bounds = PanBounds::from_geometry(&grid);
        assert_eq!(bounds.min_x, 0.0);
        assert_eq!(bounds.min_y, 0.0);
        assert_eq!(bounds.clamp(Vec2::new(50.0, -50.0)), Vec2::ZERO);
        assert_eq!(bounds.overflow_x(0.0), 0.0);
        assert_eq!(bounds.overflow_x(-3.0), 3.0);
    }

    #[test]
    fn overflow_measures_excursion_past_the_nearer_bound() {
        let grid = GridGeometry::new(10, 10, 100.0, 20.0, 20.0, Size::new(300.0, 500.0));
        let bounds = PanBounds::from_geometry(&grid);

        assert_eq!(bounds.overflow_x(-450.0), 0.0);
        assert_eq!(bounds.overflow_x(20.0), 20.0);
        assert_eq!(bounds.overflow_x(-930.0), 30.0);
        assert_eq!(bounds.overflow_y(-701.0), 1.0);
    }

    #[test]
    fn clamp_is_per_axis() {
        let grid = GridGeometry::new(10, 10, 100.0, 20.0, 20.0, Size::new(300.0, 500.0));
        let bounds = PanBounds::from_geometry(&grid);

        let clamped = bounds.clamp(Vec2::new(15.0, -350.0));
        assert_eq!(clamped, Vec2::new(0.0, -350.0));
        assert!(bounds.contains(clamped));
        assert!(!bounds.contains(Vec2::new(15.0, -350.0)));
    }
}
