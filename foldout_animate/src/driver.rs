// Copyright 2025 the Foldout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transition descriptions and the host-pumped driver.

use crate::Easing;

/// An immutable description of one transition run.
///
/// A transition interpolates from `start` to `end` over `duration` time
/// units using an [`Easing`] curve. Construct one directly with
/// [`Transition::new`], or with [`Transition::with_speed`] to derive the
/// duration from the distance between the endpoints.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transition {
    start: f64,
    end: f64,
    duration: f64,
    easing: Easing,
}

impl Transition {
    /// Creates a transition with an explicit duration.
    ///
    /// Negative and non-finite durations are treated as zero, making the
    /// transition complete immediately at its end value.
    #[must_use]
    pub fn new(start: f64, end: f64, duration: f64, easing: Easing) -> Self {
        let duration = if duration.is_finite() && duration > 0.0 {
            duration
        } else {
            0.0
        };
        Self {
            start,
            end,
            duration,
            easing,
        }
    }

    /// Creates a transition whose duration is `|end - start| / speed`.
    ///
    /// `speed` is in value units per time unit. Transitions covering more
    /// distance take proportionally longer, which keeps the perceived rate
    /// consistent across runs of different sizes. A zero, negative, or
    /// non-finite speed yields a zero-duration (instant) transition.
    #[must_use]
    pub fn with_speed(start: f64, end: f64, speed: f64, easing: Easing) -> Self {
        let distance = if end >= start { end - start } else { start - end };
        let duration = if speed > 0.0 && distance > 0.0 {
            distance / speed
        } else {
            0.0
        };
        Self::new(start, end, duration, easing)
    }

    /// The starting value.
    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// The ending value.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.end
    }

    /// The total duration, in the host's time units.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// The easing curve in effect.
    #[must_use]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Samples the eased value at `elapsed` time units into the run.
    ///
    /// Elapsed times at or beyond the duration return exactly the end value;
    /// negative elapsed times return the start value. The result always lies
    /// between the two endpoints.
    #[must_use]
    pub fn sample(&self, elapsed: f64) -> f64 {
        if self.is_complete(elapsed) {
            return self.end;
        }
        if elapsed <= 0.0 {
            return self.start;
        }
        let fraction = self.easing.apply(elapsed / self.duration);
        self.start + (self.end - self.start) * fraction
    }

    /// Returns `true` once `elapsed` reaches the duration.
    #[must_use]
    pub fn is_complete(&self, elapsed: f64) -> bool {
        elapsed >= self.duration
    }
}

/// The outcome of one [`Driver::advance`] step.
///
/// Completion is delivered as a value in this enum rather than through a
/// callback, so the component that owns the driver decides what "done" means.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Step {
    /// The transition is still in flight; the payload is the current value.
    Running(f64),
    /// The transition has finished; the payload is the final (end) value.
    ///
    /// Advancing a finished driver keeps returning `Done` with the same
    /// value.
    Done(f64),
}

impl Step {
    /// The sampled value carried by this step, regardless of completion.
    #[must_use]
    pub fn value(self) -> f64 {
        match self {
            Self::Running(value) | Self::Done(value) => value,
        }
    }

    /// Returns `true` for [`Step::Done`].
    #[must_use]
    pub fn is_done(self) -> bool {
        matches!(self, Self::Done(_))
    }
}

/// A [`Transition`] plus accumulated elapsed time.
///
/// Hosts call [`Driver::advance`] once per frame with the time delta since
/// the previous frame. The driver has no clock of its own and no knowledge
/// of what its value drives.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Driver {
    transition: Transition,
    elapsed: f64,
}

impl Driver {
    /// Creates a driver at the start of `transition`.
    #[must_use]
    pub fn new(transition: Transition) -> Self {
        Self {
            transition,
            elapsed: 0.0,
        }
    }

    /// Advances by `dt` time units and returns the resulting step.
    ///
    /// Negative and non-finite deltas are ignored (the driver holds its
    /// current position).
    pub fn advance(&mut self, dt: f64) -> Step {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
        if self.transition.is_complete(self.elapsed) {
            Step::Done(self.transition.end())
        } else {
            Step::Running(self.transition.sample(self.elapsed))
        }
    }

    /// The current value without advancing time.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.transition.sample(self.elapsed)
    }

    /// The transition being driven.
    #[must_use]
    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    /// Returns `true` once the accumulated time covers the duration.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.transition.is_complete(self.elapsed)
    }
}
