// Copyright 2025 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=parterre_motion --heading-base-level=0

//! Parterre Motion: small motion primitives for frame-driven animation.
//!
//! This crate provides the animation-side building blocks of Parterre,
//! kept deliberately independent of any grid or gesture logic:
//!
//! - [`MotionValue`]: an observable `f64` cell. Mutations notify registered
//!   listeners synchronously, and [`Subscription`] guards scope listener
//!   lifetime to their owner (drop to deregister).
//! - [`Spring`]: a damped spring toward a retargetable value, integrated
//!   with fixed internal substeps so any frame `dt` stays stable.
//! - [`Inertia`]: decaying post-release motion with an exponential
//!   time-constant profile, aimed at a target projected from a release
//!   velocity.
//! - [`rubber_band`]: the attenuation applied to movement beyond a boundary,
//!   approaching identity as the overflow shrinks to zero.
//!
//! Everything here advances on an explicit `step(dt)` call with `dt` in
//! seconds; there is no internal clock. Hosts drive all motions once per
//! rendered frame from a shared scheduler, which keeps the model
//! single-threaded and deterministic.
//!
//! ## Minimal example
//!
//! ```rust
//! use parterre_motion::{MotionValue, Spring, SpringParams};
//!
//! let value = MotionValue::new(0.0);
//! let seen = std::rc::Rc::new(std::cell::Cell::new(0.0));
//! let _sub = value.subscribe({
//!     let seen = seen.clone();
//!     move |v| seen.set(v)
//! });
//!
//! let mut spring = Spring::new(value.get(), SpringParams::default());
//! spring.set_target(100.0);
//! for _ in 0..240 {
//!     value.set(spring.step(1.0 / 120.0));
//! }
//! assert!(spring.is_done());
//! assert_eq!(seen.get(), 100.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod inertia;
mod rubber;
mod spring;
mod value;

pub use inertia::{Inertia, InertiaParams};
pub use rubber::{DEFAULT_RESISTANCE, rubber_band};
pub use spring::{Spring, SpringParams};
pub use value::{MotionValue, Subscription};
