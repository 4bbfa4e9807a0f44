// Copyright 2025 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

/// Column/row address of a single grid cell.
///
/// Cells are ordered row-major: all of row 0 left to right, then row 1, and
/// so on. [`GridGeometry::cells`] yields indices in that order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellIndex {
    /// Zero-based row, counted from the top.
    pub row: usize,
    /// Zero-based column, counted from the left.
    pub col: usize,
}

impl CellIndex {
    /// Creates a new cell index.
    #[must_use]
    pub const fn new(col: usize, row: usize) -> Self {
        Self { row, col }
    }
}

/// Static description of a pannable grid of square cells behind a viewport.
///
/// All lengths are in the same caller-chosen unit (typically device pixels).
/// The description is immutable; derived quantities such as the content size
/// and per-cell centers are fixed for the grid's lifetime.
///
/// Cell `(0, 0)` has its center at `padding + cell_size / 2` on both axes,
/// and neighboring centers are `cell_size + gap` apart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridGeometry {
    cols: usize,
    rows: usize,
    cell_size: f64,
    gap: f64,
    padding: f64,
    viewport: Size,
}

impl GridGeometry {
    /// Creates a new grid description.
    ///
    /// # Panics
    ///
    /// Panics if `cols` or `rows` is zero, if `cell_size` is not strictly
    /// positive, or if `gap`, `padding`, or either viewport extent is
    /// negative. These are caller contract violations and are rejected here
    /// rather than surfacing as nonsense mid-gesture.
    #[must_use]
    pub fn new(
        cols: usize,
        rows: usize,
        cell_size: f64,
        gap: f64,
        padding: f64,
        viewport: Size,
    ) -> Self {
        assert!(cols > 0 && rows > 0, "grid must have at least one cell");
        assert!(cell_size > 0.0, "cell_size must be strictly positive");
        assert!(
            gap >= 0.0 && padding >= 0.0,
            "gap and padding must be non-negative"
        );
        assert!(
            viewport.width >= 0.0 && viewport.height >= 0.0,
            "viewport extents must be non-negative"
        );
        Self {
            cols,
            rows,
            cell_size,
            gap,
            padding,
            viewport,
        }
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the side length of a cell.
    #[must_use]
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Returns the gap between adjacent cells.
    #[must_use]
    pub fn gap(&self) -> f64 {
        self.gap
    }

    /// Returns the padding around the outermost cells.
    #[must_use]
    pub fn padding(&self) -> f64 {
        self.padding
    }

    /// Returns the viewport size the grid is viewed through.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Returns the total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cols * self.rows
    }

    /// Returns the overall content size, padding included.
    #[must_use]
    pub fn content_size(&self) -> Size {
        let span = |n: usize| {
            let n = n as f64;
            n * self.cell_size + (n - 1.0) * self.gap + 2.0 * self.padding
        };
        Size::new(span(self.cols), span(self.rows))
    }

    /// Returns the center-to-center distance between neighboring cells.
    #[must_use]
    pub fn step(&self) -> Vec2 {
        let step = self.cell_size + self.gap;
        Vec2::new(step, step)
    }

    /// Returns the center of cell `(0, 0)` in grid-local coordinates.
    #[must_use]
    pub fn first_center(&self) -> Point {
        let base = self.padding + self.cell_size / 2.0;
        Point::new(base, base)
    }

    /// Returns the center of the given cell in grid-local coordinates.
    ///
    /// The index is not range checked; out-of-range indices extrapolate the
    /// grid lattice.
    #[must_use]
    pub fn cell_center(&self, cell: CellIndex) -> Point {
        let step = self.step();
        self.first_center() + Vec2::new(cell.col as f64 * step.x, cell.row as f64 * step.y)
    }

    /// Returns the viewport center in viewport coordinates.
    #[must_use]
    pub fn viewport_center(&self) -> Point {
        Point::new(self.viewport.width / 2.0, self.viewport.height / 2.0)
    }

    /// Returns the largest possible distance from the viewport center to a
    /// point still inside the viewport (its half-diagonal).
    ///
    /// Used to normalize cell distances into a `[0, 1]` ratio.
    #[must_use]
    pub fn max_center_distance(&self) -> f64 {
        self.viewport_center().to_vec2().hypot()
    }

    /// Iterates all cell indices in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = CellIndex> + use<> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| CellIndex::new(col, row)))
    }

    /// Returns the normalized distance of a cell from the viewport center.
    ///
    /// The viewport center is expressed in grid-local coordinates under the
    /// given surface offset, and the cell's distance to it is normalized by
    /// [`GridGeometry::max_center_distance`] and clamped into `[0, 1]`.
    /// `0` means the cell center sits exactly under the viewport center.
    #[must_use]
    pub fn distance_ratio(&self, offset: Vec2, cell: CellIndex) -> f64 {
        distance_ratio(
            offset,
            self.cell_center(cell),
            self.viewport_center(),
            self.max_center_distance(),
        )
    }
}

/// Scalar form of [`GridGeometry::distance_ratio`].
///
/// Useful for observers that can only capture plain values: `cell_center`
/// and `viewport_center` are fixed per cell, so a live ratio needs only the
/// current offset.
#[must_use]
pub fn distance_ratio(
    offset: Vec2,
    cell_center: Point,
    viewport_center: Point,
    max_distance: f64,
) -> f64 {
    if max_distance <= 0.0 {
        return 0.0;
    }
    let center_in_grid = viewport_center - offset;
    let dist = (cell_center - center_in_grid).hypot();
    (dist / max_distance).clamp(0.0, 1.0)
}
