// Copyright 2025 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=parterre_grid --heading-base-level=0

//! Parterre Grid: static geometry for a pannable grid surface.
//!
//! This crate provides the pure, stateless layer of Parterre: a description
//! of a fixed grid of square cells viewed through a fixed viewport, the legal
//! range of the surface translation, and the search that finds the cell whose
//! center lies closest to the viewport center.
//!
//! The coordinate model is deliberately small:
//!
//! - Cell centers live in **grid-local** coordinates, fixed for the grid's
//!   lifetime.
//! - The **surface offset** is the translation of the grid relative to the
//!   viewport's top-left corner, expressed as a [`Vec2`]. An offset of zero
//!   puts the grid origin at the viewport origin; panning left makes the
//!   offset more negative.
//! - [`PanBounds`] is the closed per-axis range the offset may rest in. The
//!   grid can never be pushed past its own origin, so both maxima are zero.
//!
//! Nothing in this crate is animated or mutable; controllers that own a live
//! offset are expected to live in higher-level crates built on top of this
//! one (see `parterre_surface`).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use parterre_grid::{GridGeometry, PanBounds};
//!
//! // A 10x10 grid of 100px cells with 20px gaps and padding, seen through
//! // a 300x500 viewport.
//! let grid = GridGeometry::new(10, 10, 100.0, 20.0, 20.0, Size::new(300.0, 500.0));
//! let bounds = PanBounds::from_geometry(&grid);
//!
//! // Content is larger than the viewport on both axes, so the surface can
//! // be dragged up and to the left, but never past its origin.
//! assert_eq!(bounds.min_x, 300.0 - 1200.0);
//! assert_eq!(bounds.max_x, 0.0);
//!
//! // Which cell should the surface settle on from the origin?
//! let snap = grid.nearest_cell(&bounds, Vec2::ZERO);
//! assert_eq!(snap.cell.col, 1);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod bounds;
mod geometry;
mod nearest;

pub use bounds::PanBounds;
pub use geometry::{CellIndex, GridGeometry, distance_ratio};
pub use nearest::SnapTarget;
