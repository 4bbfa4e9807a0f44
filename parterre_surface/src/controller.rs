// Copyright 2025 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

use parterre_grid::{CellIndex, GridGeometry, PanBounds};
use parterre_motion::{
    DEFAULT_RESISTANCE, Inertia, InertiaParams, MotionValue, Spring, SpringParams, rubber_band,
};

/// Tunable behavior of a [`SurfaceController`].
///
/// The defaults reproduce the documented feel: releases slower than
/// 100 px/s skip inertia entirely, faster releases coast toward
/// `offset + velocity * 0.5` on a 350 ms time-constant decay, boundary
/// resistance uses the standard rubber-band constant, and the settle runs
/// on a firm `(500, 40)` spring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceConfig {
    /// Release speed (magnitude of the velocity vector, px/s) below which
    /// inertia is skipped and the surface settles directly.
    pub min_flick_speed: f64,
    /// Projection and decay profile of post-release coasting.
    pub inertia: InertiaParams,
    /// Spring profile used to settle both axes onto the snap target.
    pub settle_spring: SpringParams,
    /// Rubber-band resistance applied to out-of-bounds movement.
    pub resistance: f64,
    /// Smallest attenuated per-frame increment (px) an out-of-bounds coast
    /// may produce before the axis is considered stopped and the settle is
    /// triggered early.
    pub boundary_rest_delta: f64,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            min_flick_speed: 100.0,
            inertia: InertiaParams::default(),
            settle_spring: SpringParams::SETTLE,
            resistance: DEFAULT_RESISTANCE,
            boundary_rest_delta: 1.0,
        }
    }
}

/// Kind of animation currently driving an axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationKind {
    /// Post-release inertia.
    Coast,
    /// Spring motion onto the snap target.
    Settle,
}

#[derive(Clone, Debug)]
enum AxisAnimation {
    Coast(Inertia),
    Settle(Spring),
}

impl AxisAnimation {
    fn kind(&self) -> AnimationKind {
        match self {
            Self::Coast(_) => AnimationKind::Coast,
            Self::Settle(_) => AnimationKind::Settle,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Axis {
    X,
    Y,
}

/// Transient per-gesture state: the two axis animation handles and the
/// settle latch. Handles are created at release, replaced by the settle,
/// and nulled out on cancellation or completion.
#[derive(Debug, Default)]
struct GestureState {
    x: Option<AxisAnimation>,
    y: Option<AxisAnimation>,
    settled: bool,
    dragging: bool,
}

/// Controller for a pannable grid surface.
///
/// The controller owns the surface offset (as a pair of observable
/// [`MotionValue`]s, one per axis) and is its only mutator. Hosts feed it
/// the three gesture events and a per-frame clock:
///
/// 1. [`SurfaceController::gesture_start`] when a pointer goes down,
/// 2. [`SurfaceController::gesture_move`] with each incremental delta,
/// 3. [`SurfaceController::gesture_end`] with the release velocity,
/// 4. [`SurfaceController::advance`] once per rendered frame.
///
/// Exactly one settle occurs per gesture no matter how it ends: a slow
/// release settles immediately, a flick settles when its coast finishes or
/// when an axis early-stops against a boundary. The settle animates both
/// axes together onto the nearest-cell target, so the surface always comes
/// to rest with a cell centered and the offset inside the pan bounds.
///
/// At construction the surface is pre-snapped: the nearest-cell target for
/// the origin offset is computed and applied directly, before any input,
/// with no animation.
///
/// All motion shares one single-threaded frame timeline; a new gesture may
/// begin while animations run and deterministically cancels them.
#[derive(Debug)]
pub struct SurfaceController {
    geometry: GridGeometry,
    bounds: PanBounds,
    config: SurfaceConfig,
    x: MotionValue,
    y: MotionValue,
    gesture: GestureState,
}

impl SurfaceController {
    /// Creates a controller over the given grid, pre-snapped to the cell
    /// nearest the viewport center at the origin offset.
    #[must_use]
    pub fn new(geometry: GridGeometry, config: SurfaceConfig) -> Self {
        let bounds = PanBounds::from_geometry(&geometry);
        let initial = geometry.nearest_cell(&bounds, Vec2::ZERO);
        Self {
            geometry,
            bounds,
            config,
            x: MotionValue::new(initial.offset.x),
            y: MotionValue::new(initial.offset.y),
            gesture: GestureState {
                settled: true,
                ..GestureState::default()
            },
        }
    }

    /// Returns the grid description.
    #[must_use]
    pub fn geometry(&self) -> GridGeometry {
        self.geometry
    }

    /// Returns the legal offset range.
    #[must_use]
    pub fn bounds(&self) -> PanBounds {
        self.bounds
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> SurfaceConfig {
        self.config
    }

    /// Returns the current surface offset.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.x.get(), self.y.get())
    }

    /// Returns a handle to the observable X offset.
    #[must_use]
    pub fn x(&self) -> MotionValue {
        self.x.clone()
    }

    /// Returns a handle to the observable Y offset.
    #[must_use]
    pub fn y(&self) -> MotionValue {
        self.y.clone()
    }

    /// Returns the cell currently nearest the viewport center.
    #[must_use]
    pub fn nearest_cell(&self) -> CellIndex {
        self.geometry.nearest_cell(&self.bounds, self.offset()).cell
    }

    /// Returns `true` once this gesture's settle has been triggered, and
    /// between gestures.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.gesture.settled
    }

    /// Returns `true` while a drag gesture is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.gesture.dragging
    }

    /// Returns `true` while any axis animation is running.
    #[must_use]
    pub fn has_active_animations(&self) -> bool {
        self.gesture.x.is_some() || self.gesture.y.is_some()
    }

    /// Snapshot of the current controller state for debugging and
    /// inspection.
    #[must_use]
    pub fn debug_info(&self) -> SurfaceDebugInfo {
        SurfaceDebugInfo {
            offset: self.offset(),
            bounds: self.bounds,
            settled: self.gesture.settled,
            dragging: self.gesture.dragging,
            x_animation: self.gesture.x.as_ref().map(AxisAnimation::kind),
            y_animation: self.gesture.y.as_ref().map(AxisAnimation::kind),
        }
    }

    /// Begins a drag gesture.
    ///
    /// Cancels any in-flight coast or settle animations on both axes and
    /// re-arms the settle latch, so the gesture now in progress will get a
    /// settle of its own.
    pub fn gesture_start(&mut self) {
        self.gesture.x = None;
        self.gesture.y = None;
        self.gesture.settled = false;
        self.gesture.dragging = true;
    }

    /// Applies an incremental pointer movement.
    ///
    /// Each axis is handled independently: a delta whose tentative result
    /// stays inside the bounds is applied raw; one that lands out of bounds
    /// is attenuated by the rubber band using the tentative position's
    /// overflow, so the surface can be pulled past its edge with growing
    /// resistance.
    pub fn gesture_move(&mut self, delta: Vec2) {
        let next_x = self.dragged_value(Axis::X, delta.x);
        let next_y = self.dragged_value(Axis::Y, delta.y);
        self.x.set(next_x);
        self.y.set(next_y);
    }

    /// Ends the drag gesture with the pointer's release velocity (px/s).
    ///
    /// Slow releases (below [`SurfaceConfig::min_flick_speed`]) settle
    /// immediately from the current offset. Fast releases start one inertia
    /// motion per axis, both in this call, coasting toward
    /// `offset + velocity * power`.
    pub fn gesture_end(&mut self, velocity: Vec2) {
        self.gesture.dragging = false;
        if velocity.hypot() < self.config.min_flick_speed {
            self.settle_to_nearest();
            return;
        }
        self.gesture.x = Some(AxisAnimation::Coast(Inertia::from_velocity(
            self.x.get(),
            velocity.x,
            self.config.inertia,
        )));
        self.gesture.y = Some(AxisAnimation::Coast(Inertia::from_velocity(
            self.y.get(),
            velocity.y,
            self.config.inertia,
        )));
    }

    /// Advances all running animations by `dt` seconds.
    ///
    /// Both axes are advanced before control returns, so observers reading
    /// the offset after this call always see a consistent pair. A coast
    /// that finishes naturally on both axes, or early-stops against a
    /// boundary on either, hands off to the settle; the settle's springs
    /// finish by clamping exactly onto the snap target.
    pub fn advance(&mut self, dt: f64) {
        if dt <= 0.0 {
            return;
        }
        self.advance_axis(Axis::X, dt);
        self.advance_axis(Axis::Y, dt);
        // Both-completed fallback: every coast ran out without touching a
        // boundary, and nothing else has settled this gesture.
        if !self.gesture.settled
            && !self.gesture.dragging
            && self.gesture.x.is_none()
            && self.gesture.y.is_none()
        {
            self.settle_to_nearest();
        }
    }

    /// Animates both axes onto the nearest-cell target.
    ///
    /// Guarded by the settle latch: the first trigger per gesture wins and
    /// later triggers are no-ops, no matter how many race in from the
    /// low-speed release path, a per-axis early stop, or the both-completed
    /// fallback. Any still-running axis animations are cancelled and both
    /// settle springs are issued in this same call.
    fn settle_to_nearest(&mut self) {
        if self.gesture.settled {
            return;
        }
        self.gesture.settled = true;
        self.gesture.x = None;
        self.gesture.y = None;

        let snap = self.geometry.nearest_cell(&self.bounds, self.offset());
        let mut spring_x = Spring::new(self.x.get(), self.config.settle_spring);
        spring_x.set_target(snap.offset.x);
        let mut spring_y = Spring::new(self.y.get(), self.config.settle_spring);
        spring_y.set_target(snap.offset.y);
        self.gesture.x = Some(AxisAnimation::Settle(spring_x));
        self.gesture.y = Some(AxisAnimation::Settle(spring_y));
    }

    fn advance_axis(&mut self, axis: Axis, dt: f64) {
        let Some(mut animation) = self.take_axis(axis) else {
            return;
        };
        let keep = match &mut animation {
            AxisAnimation::Coast(inertia) => {
                let raw = inertia.step(dt);
                let current = self.axis_value(axis);
                let overflow = self.axis_overflow(axis, raw);
                if overflow > 0.0 {
                    // Out of bounds: attenuate the increment since the last
                    // applied value rather than the curve position itself.
                    let increment = rubber_band(raw - current, overflow, self.config.resistance);
                    self.set_axis_value(axis, current + increment);
                    if increment.abs() < self.config.boundary_rest_delta {
                        // Early stop: this excursion has run out of visible
                        // motion; settle now instead of crawling into the
                        // boundary forever.
                        self.settle_to_nearest();
                        return;
                    }
                    // The decay curve can complete while the applied value
                    // still lags behind it; that still counts as this axis
                    // reporting natural completion.
                    !inertia.is_done()
                } else {
                    self.set_axis_value(axis, raw);
                    !inertia.is_done()
                }
            }
            AxisAnimation::Settle(spring) => {
                let position = spring.step(dt);
                self.set_axis_value(axis, position);
                !spring.is_done()
            }
        };
        if keep {
            self.put_axis(axis, animation);
        }
    }

    fn dragged_value(&self, axis: Axis, delta: f64) -> f64 {
        let current = self.axis_value(axis);
        let tentative = current + delta;
        let overflow = self.axis_overflow(axis, tentative);
        if overflow > 0.0 {
            current + rubber_band(delta, overflow, self.config.resistance)
        } else {
            tentative
        }
    }

    fn axis_value(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x.get(),
            Axis::Y => self.y.get(),
        }
    }

    fn set_axis_value(&self, axis: Axis, value: f64) {
        match axis {
            Axis::X => self.x.set(value),
            Axis::Y => self.y.set(value),
        }
    }

    fn axis_overflow(&self, axis: Axis, value: f64) -> f64 {
        match axis {
            Axis::X => self.bounds.overflow_x(value),
            Axis::Y => self.bounds.overflow_y(value),
        }
    }

    fn take_axis(&mut self, axis: Axis) -> Option<AxisAnimation> {
        match axis {
            Axis::X => self.gesture.x.take(),
            Axis::Y => self.gesture.y.take(),
        }
    }

    fn put_axis(&mut self, axis: Axis, animation: AxisAnimation) {
        match axis {
            Axis::X => self.gesture.x = Some(animation),
            Axis::Y => self.gesture.y = Some(animation),
        }
    }
}

/// Debug snapshot of a [`SurfaceController`] state.
#[derive(Clone, Copy, Debug)]
pub struct SurfaceDebugInfo {
    /// Current surface offset.
    pub offset: Vec2,
    /// Legal offset range.
    pub bounds: PanBounds,
    /// Whether this gesture's settle has been triggered.
    pub settled: bool,
    /// Whether a drag is in progress.
    pub dragging: bool,
    /// Animation currently driving the X axis, if any.
    pub x_animation: Option<AnimationKind>,
    /// Animation currently driving the Y axis, if any.
    pub y_animation: Option<AnimationKind>,
}
