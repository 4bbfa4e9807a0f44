// Copyright 2025 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Default rubber-band resistance constant.
pub const DEFAULT_RESISTANCE: f64 = 0.15;

/// Attenuates a movement increment by how far out of bounds the mover is.
///
/// `rubber_band(delta, overflow, k) = delta / (1 + overflow * k)`.
///
/// With `overflow == 0` the function is the identity, so there is no seam
/// when crossing a boundary. As the overflow grows, movement attenuates
/// smoothly toward zero instead of hard-stopping, which is the familiar
/// soft edge resistance of scrollable surfaces. `overflow` is expected to
/// be the non-negative excursion beyond the nearer bound (see
/// `PanBounds::overflow_x` in `parterre_grid`).
#[must_use]
pub fn rubber_band(delta: f64, overflow: f64, resistance: f64) -> f64 {
    delta / (1.0 + overflow * resistance)
}
