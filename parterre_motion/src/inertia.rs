// Copyright 2025 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Shape of an [`Inertia`] motion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InertiaParams {
    /// Fraction of the release velocity projected into travel distance:
    /// the motion aims at `start + velocity * power`.
    pub power: f64,
    /// Time constant of the exponential decay, in seconds. After one time
    /// constant roughly 63% of the remaining distance is covered.
    pub time_constant: f64,
}

impl InertiaParams {
    /// Creates a new parameter pair.
    ///
    /// # Panics
    ///
    /// Panics if `time_constant` is not strictly positive.
    #[must_use]
    pub fn new(power: f64, time_constant: f64) -> Self {
        assert!(time_constant > 0.0, "time_constant must be strictly positive");
        Self {
            power,
            time_constant,
        }
    }
}

impl Default for InertiaParams {
    fn default() -> Self {
        Self::new(0.5, 0.35)
    }
}

/// Decaying post-release motion along one axis.
///
/// The value starts at the release position and approaches
/// `start + velocity * power` along an exponential time-constant curve:
/// `value(t) = target - (target - start) * e^(-t / tau)`. The motion is
/// boundary-unaware; callers that need boundary resistance attenuate the
/// per-frame increments themselves (see [`crate::rubber_band`]).
#[derive(Clone, Copy, Debug)]
pub struct Inertia {
    start: f64,
    target: f64,
    time_constant: f64,
    elapsed: f64,
}

impl Inertia {
    /// Remaining distance under which the motion counts as complete.
    const REST_DELTA: f64 = 0.5;

    /// Creates a motion released at `start` with the given velocity, in
    /// units per second.
    #[must_use]
    pub fn from_velocity(start: f64, velocity: f64, params: InertiaParams) -> Self {
        Self {
            start,
            target: start + velocity * params.power,
            time_constant: params.time_constant,
            elapsed: 0.0,
        }
    }

    /// Returns the value the motion decays toward.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Returns the current value of the underlying decay curve.
    #[must_use]
    pub fn value(&self) -> f64 {
        let remaining = (self.target - self.start) * libm::exp(-self.elapsed / self.time_constant);
        self.target - remaining
    }

    /// Advances the motion by `dt` seconds and returns the new curve value.
    ///
    /// Non-positive `dt` leaves the motion untouched.
    pub fn step(&mut self, dt: f64) -> f64 {
        if dt > 0.0 {
            self.elapsed += dt;
        }
        self.value()
    }

    /// Returns `true` once the curve has effectively reached its target.
    #[must_use]
    pub fn is_done(&self) -> bool {
        (self.target - self.value()).abs() < Self::REST_DELTA
    }
}
