// Copyright 2025 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Stiffness, damping, and mass of a [`Spring`].
///
/// The numbers are the conventional dimensionless animation-spring triple:
/// larger stiffness pulls harder toward the target, larger damping bleeds
/// velocity faster, smaller mass reacts quicker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringParams {
    /// Restoring force per unit of displacement.
    pub stiffness: f64,
    /// Velocity-proportional friction.
    pub damping: f64,
    /// Inertia of the animated value.
    pub mass: f64,
}

impl SpringParams {
    /// Firm, slightly underdamped profile used to settle a surface onto a
    /// snap target.
    pub const SETTLE: Self = Self::new(500.0, 40.0, 1.0);

    /// Soft, overdamped profile used to smooth a derived value (for example
    /// a per-cell scale) without visible stepping.
    pub const SMOOTHING: Self = Self::new(320.0, 38.0, 0.25);

    /// Creates a new parameter triple.
    #[must_use]
    pub const fn new(stiffness: f64, damping: f64, mass: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }
}

impl Default for SpringParams {
    fn default() -> Self {
        Self::SETTLE
    }
}

/// A damped spring animating an `f64` toward a retargetable value.
///
/// The spring is integrated with semi-implicit Euler in fixed internal
/// substeps, so callers may pass whatever frame `dt` (in seconds) their
/// scheduler produces without risking instability. Once the remaining
/// distance and speed both fall under the rest thresholds the spring clamps
/// exactly onto its target and reports [`Spring::is_done`].
#[derive(Clone, Debug)]
pub struct Spring {
    params: SpringParams,
    position: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    /// Largest internal integration step, in seconds.
    const MAX_SUBSTEP: f64 = 1.0 / 240.0;
    /// Remaining distance under which the spring may come to rest.
    const REST_DELTA: f64 = 0.01;
    /// Speed under which the spring may come to rest.
    const REST_SPEED: f64 = 0.1;

    /// Creates a spring at rest at `position`.
    #[must_use]
    pub fn new(position: f64, params: SpringParams) -> Self {
        Self {
            params,
            position,
            velocity: 0.0,
            target: position,
        }
    }

    /// Returns the current position.
    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Returns the current velocity.
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Returns the current target.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Retargets the spring without disturbing position or velocity.
    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Seeds the spring's velocity, for handing over momentum from another
    /// motion.
    pub fn set_velocity(&mut self, velocity: f64) {
        self.velocity = velocity;
    }

    /// Jumps to `value` immediately: position, target, and rest.
    pub fn snap_to(&mut self, value: f64) {
        self.position = value;
        self.target = value;
        self.velocity = 0.0;
    }

    /// Advances the spring by `dt` seconds and returns the new position.
    ///
    /// Non-positive `dt` leaves the spring untouched.
    pub fn step(&mut self, dt: f64) -> f64 {
        if dt <= 0.0 {
            return self.position;
        }
        let mut remaining = dt;
        while remaining > 0.0 && !self.is_done() {
            let h = remaining.min(Self::MAX_SUBSTEP);
            let accel = (-self.params.stiffness * (self.position - self.target)
                - self.params.damping * self.velocity)
                / self.params.mass;
            self.velocity += accel * h;
            self.position += self.velocity * h;
            remaining -= h;
        }
        if self.is_done() {
            self.position = self.target;
            self.velocity = 0.0;
        }
        self.position
    }

    /// Returns `true` once the spring has come to rest on its target.
    #[must_use]
    pub fn is_done(&self) -> bool {
        (self.position - self.target).abs() < Self::REST_DELTA
            && self.velocity.abs() < Self::REST_SPEED
    }
}

#[cfg(test)]
mod tests {
    use super::{Spring, SpringParams};

    fn run(spring: &mut Spring, dt: f64, frames: usize) {
        for _ in 0..frames {
            spring.step(dt);
        }
    }

    #[test]
    fn converges_onto_the_target() {
        let mut spring = Spring::new(0.0, SpringParams::SETTLE);
        spring.set_target(-420.0);
        run(&mut spring, 1.0 / 120.0, 600);
        assert!(spring.is_done());
        assert_eq!(spring.position(), -420.0);
        assert_eq!(spring.velocity(), 0.0);
    }

    #[test]
    fn new_spring_is_already_at_rest() {
        let spring = Spring::new(12.0, SpringParams::default());
        assert!(spring.is_done());
        assert_eq!(spring.position(), 12.0);
    }

    #[test]
    fn moves_toward_the_target_monotonically_in_distance_envelope() {
        let mut spring = Spring::new(0.0, SpringParams::SMOOTHING);
        spring.set_target(1.0);
        let mut last = spring.position();
        run(&mut spring, 1.0 / 120.0, 5);
        // Overdamped smoothing profile: approaches without overshooting.
        for _ in 0..200 {
            let now = spring.step(1.0 / 120.0);
            assert!(now >= last);
            assert!(now <= 1.0 + 1e-9);
            last = now;
        }
        assert!(spring.is_done());
    }

    #[test]
    fn retarget_mid_flight_keeps_momentum() {
        let mut spring = Spring::new(0.0, SpringParams::SETTLE);
        spring.set_target(100.0);
        run(&mut spring, 1.0 / 120.0, 10);
        let moving = spring.velocity();
        assert!(moving > 0.0);

        spring.set_target(-100.0);
        assert_eq!(spring.velocity(), moving);
        run(&mut spring, 1.0 / 120.0, 600);
        assert!(spring.is_done());
        assert_eq!(spring.position(), -100.0);
    }

    #[test]
    fn large_dt_is_substepped_and_stable() {
        let mut spring = Spring::new(0.0, SpringParams::SETTLE);
        spring.set_target(50.0);
        // A single giant frame must not explode the integrator.
        spring.step(2.0);
        assert!(spring.is_done());
        assert_eq!(spring.position(), 50.0);
    }

    #[test]
    fn snap_to_jumps_and_rests() {
        let mut spring = Spring::new(0.0, SpringParams::SETTLE);
        spring.set_target(100.0);
        run(&mut spring, 1.0 / 120.0, 5);
        spring.snap_to(7.0);
        assert!(spring.is_done());
        assert_eq!(spring.position(), 7.0);
        assert_eq!(spring.target(), 7.0);
    }
}
