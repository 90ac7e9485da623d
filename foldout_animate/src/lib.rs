// Copyright 2025 the Foldout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=foldout_animate --heading-base-level=0

//! Foldout Animate: eased value transitions with distance-proportional durations.
//!
//! This crate provides a small, host-agnostic core for animating a single
//! scalar value between two endpoints. It is the timing half of an animated
//! size change: the crate computes eased values, while the owning component
//! decides what those values mean (a height offset, a scroll position, an
//! opacity) and when frames happen.
//!
//! The core concepts are:
//!
//! - [`Easing`]: a curve mapping normalized progress `[0, 1]` to an eased
//!   fraction `[0, 1]`.
//! - [`Transition`]: an immutable description of one run: start value, end
//!   value, duration, and curve. [`Transition::with_speed`] derives the
//!   duration from the distance between the endpoints, so longer transitions
//!   take proportionally longer at the same perceived rate.
//! - [`Driver`]: a [`Transition`] plus accumulated elapsed time. The host
//!   pumps it with [`Driver::advance`]; completion is reported as an explicit
//!   [`Step::Done`] message rather than a stored callback, so the driver
//!   never holds logic that belongs to its owner.
//!
//! There is no clock in this crate. Hosts feed elapsed milliseconds (or any
//! other consistent time unit) into [`Driver::advance`] from their own frame
//! scheduler, which keeps the crate usable from any runtime.
//!
//! ## Minimal example
//!
//! ```rust
//! use foldout_animate::{Driver, Easing, Step, Transition};
//!
//! // Animate an offset from 0 to 120 units at 0.2 units per millisecond.
//! let transition = Transition::with_speed(0.0, 120.0, 0.2, Easing::Decelerate);
//! assert!((transition.duration() - 600.0).abs() < 1e-9);
//!
//! let mut driver = Driver::new(transition);
//!
//! // The host pumps elapsed time; each step yields the current value.
//! let Step::Running(value) = driver.advance(150.0) else {
//!     panic!("transition should still be in flight");
//! };
//! assert!(value > 0.0 && value < 120.0);
//!
//! // Once the duration elapses the driver reports completion explicitly.
//! assert_eq!(driver.advance(450.0), Step::Done(120.0));
//! ```
//!
//! All values are `f64` in a caller-chosen coordinate space (typically
//! logical pixels) and are expected to be finite. This crate is `no_std`.

#![no_std]

mod driver;
mod easing;

pub use driver::{Driver, Step, Transition};
pub use easing::Easing;
