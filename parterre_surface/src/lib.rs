// Copyright 2025 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=parterre_surface --heading-base-level=0

//! Parterre Surface: a pannable, snapping grid surface controller.
//!
//! [`SurfaceController`] owns the translation of a grid of cells behind a
//! fixed viewport and runs the full gesture lifecycle over it:
//!
//! - While a pointer drags, deltas move the surface directly; movement past
//!   the pan bounds is softened by rubber-band resistance instead of
//!   hard-stopping.
//! - On release, the surface coasts on per-axis inertia derived from the
//!   release velocity, with the same resistance applied near the edges and
//!   an early stop once boundary motion becomes imperceptible.
//! - Every gesture ends in exactly one settle: both axes are animated, in
//!   the same pass, onto the offset that centers the nearest cell under the
//!   viewport center.
//!
//! Alongside the controller, [`CellScale`] derives a smoothed per-cell scale
//! from the cell's live distance to the viewport center, for the familiar
//! "cells swell as they approach the middle" treatment.
//!
//! The controller is headless: it consumes gesture events and a frame clock
//! (`advance(dt)`) and emits offsets through observable
//! [`MotionValue`](parterre_motion::MotionValue)s. Hosts own rendering, hit
//! testing, and event plumbing. Within one frame, call
//! [`SurfaceController::advance`] before advancing any [`CellScale`]s so
//! scales never observe a half-updated offset.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use parterre_grid::GridGeometry;
//! use parterre_surface::{ScaleRange, SurfaceConfig, SurfaceController};
//!
//! let grid = GridGeometry::new(10, 10, 100.0, 20.0, 20.0, Size::new(300.0, 500.0));
//! let mut surface = SurfaceController::new(grid, SurfaceConfig::default());
//!
//! // The surface is pre-snapped before any input: a cell is already
//! // centered.
//! assert!(surface.is_settled());
//!
//! // One cell tracks its own scale while the surface moves.
//! let mut scale = surface.cell_scale(surface.nearest_cell(), ScaleRange::default());
//!
//! // Drag left, flick, then run the frame loop until everything rests.
//! surface.gesture_start();
//! surface.gesture_move(Vec2::new(-35.0, -10.0));
//! surface.gesture_end(Vec2::new(-450.0, 0.0));
//! for _ in 0..1200 {
//!     surface.advance(1.0 / 120.0);
//!     scale.advance(1.0 / 120.0);
//! }
//! assert!(surface.is_settled());
//! assert!(surface.bounds().contains(surface.offset()));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod controller;
mod scale;

pub use controller::{AnimationKind, SurfaceConfig, SurfaceController, SurfaceDebugInfo};
pub use scale::{CellScale, ScaleRange};
