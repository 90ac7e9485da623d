// Copyright 2025 the Foldout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-surface expansion state machine.

use foldout_animate::{Driver, Easing, Step, Transition};
use kurbo::Size;

use crate::snapshot::{ImageFormat, SnapshotCache, SnapshotDesc, SnapshotId, SnapshotRenderer};

/// Units of holder height revealed or hidden per unit time.
///
/// Durations derive from distance at this fixed rate, so taller holder panels
/// animate longer at the same perceived speed.
const EXPAND_SPEED: f64 = 0.2;

bitflags::bitflags! {
    /// Named sub-elements detected inside a row surface's content.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SurfaceParts: u8 {
        /// The tap target that toggles expansion.
        const SWITCH = 0b0000_0001;
        /// The detail panel revealed by expansion.
        const HOLDER = 0b0000_0010;
    }
}

impl SurfaceParts {
    /// Returns `true` when both the switch and the holder are present.
    ///
    /// A surface missing either is permanently treated as expanded, with
    /// every expand/collapse transition disabled.
    #[must_use]
    pub fn is_expandable(self) -> bool {
        self.contains(Self::SWITCH | Self::HOLDER)
    }
}

/// The externally observable state of a row's expansion machine.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Settled with the holder panel hidden.
    Collapsed,
    /// Settled with the holder panel shown.
    Expanded,
    /// A height transition toward the expanded size is in flight.
    Opening,
    /// A height transition toward the collapsed size is in flight.
    Closing,
}

/// One measurement pass worth of row geometry, in logical units.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RowMetrics {
    /// The row's measured width.
    pub width: f64,
    /// The content's full height with the holder panel laid out (the settled
    /// expanded height).
    pub natural_height: f64,
    /// The holder panel's own height within the content.
    pub holder_height: f64,
}

/// What the host should paint for a row this frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DrawMode {
    /// Paint the live content normally.
    Live,
    /// Paint only the cached snapshot image, skipping live content entirely.
    Snapshot(SnapshotId),
}

/// The outcome of advancing a row's transition by one frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Tick {
    /// The row's reported height changed; the host should re-run measurement.
    pub needs_layout: bool,
    /// The transition finished and the row is now settled.
    pub completed: bool,
}

/// The expansion state owned by one physical row surface.
///
/// Surface identity is physical, not logical: as the list scrolls, the same
/// `RowExpansion` is rebound to different logical positions. State is reset
/// by [`RowExpansion::bind`] on every reuse and never destroyed; visibility
/// for the new position is re-derived by the coordinator immediately after
/// binding, never trusted as sticky.
#[derive(Debug)]
pub struct RowExpansion {
    parts: SurfaceParts,
    position: Option<usize>,
    visible: bool,
    animating: bool,
    height_offset: f64,
    snapshot: SnapshotCache,
    driver: Option<Driver>,
}

impl RowExpansion {
    /// Creates the state for a freshly constructed surface.
    ///
    /// Happens at most once per physical surface, independent of scrolling.
    #[must_use]
    pub fn new(parts: SurfaceParts) -> Self {
        Self {
            parts,
            position: None,
            // Without both sub-elements the holder can never be hidden; the
            // surface permanently shows its full content.
            visible: !parts.is_expandable(),
            animating: false,
            height_offset: 0.0,
            snapshot: SnapshotCache::new(),
            driver: None,
        }
    }

    /// The sub-elements this surface was constructed with.
    #[must_use]
    pub fn parts(&self) -> SurfaceParts {
        self.parts
    }

    /// The logical position currently bound to this surface.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    /// Whether the holder panel is currently meant to be shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether a height transition is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// The extra height currently contributed by the holder panel.
    #[must_use]
    pub fn height_offset(&self) -> f64 {
        self.height_offset
    }

    /// The cached snapshot handle, if one is live.
    #[must_use]
    pub fn snapshot(&self) -> Option<SnapshotId> {
        self.snapshot.image()
    }

    /// The externally observable phase of the machine.
    #[must_use]
    pub fn phase(&self) -> Phase {
        match (self.visible, self.animating) {
            (false, false) => Phase::Collapsed,
            (true, false) => Phase::Expanded,
            (true, true) => Phase::Opening,
            (false, true) => Phase::Closing,
        }
    }

    /// Rebinds this surface to a new logical position.
    ///
    /// Cancels any in-flight transition and releases the snapshot before the
    /// new binding is recorded. Visibility is deliberately left alone: the
    /// coordinator re-derives it from the expanded index right after binding.
    pub fn bind<R>(&mut self, position: usize, renderer: &mut R)
    where
        R: SnapshotRenderer + ?Sized,
    {
        self.position = Some(position);
        self.driver = None;
        self.animating = false;
        self.snapshot.release(renderer);
    }

    /// Flips expansion in response to a tap on the switch control.
    ///
    /// Always animates. Returns the new visibility so the coordinator can
    /// update its expanded index and sweep the other rows. No-op on a
    /// degenerate surface.
    pub fn toggle(&mut self) -> bool {
        if !self.parts.is_expandable() {
            return self.visible;
        }
        self.visible = !self.visible;
        self.animating = true;
        self.visible
    }

    /// Silently re-syncs visibility to `target`, never animating.
    ///
    /// This is the programmatic path used when a recycled surface must
    /// immediately display the state recorded for its new position. Turning
    /// off also settles the height offset to zero at once. Returns `true`
    /// when visibility changed (the host should re-measure). No-op when the
    /// target already matches, and on degenerate surfaces.
    pub fn set_expanded(&mut self, target: bool) -> bool {
        if !self.parts.is_expandable() || target == self.visible {
            return false;
        }
        if !target {
            self.height_offset = 0.0;
        }
        self.visible = target;
        true
    }

    /// Starts an animated close. Coordinator-driven.
    ///
    /// Returns `true` when the host should re-measure. No-op on degenerate
    /// surfaces.
    pub fn close(&mut self) -> bool {
        if !self.parts.is_expandable() {
            return false;
        }
        self.visible = false;
        self.animating = true;
        true
    }

    /// Closes immediately, canceling any in-flight transition.
    ///
    /// This is the tie-break for a close request arriving while a close is
    /// already animating: the row settles now instead of restarting a second
    /// overlapping run on a surface that is visually mid-transition. The
    /// snapshot is released synchronously. Returns `true` when the host
    /// should re-measure. No-op on degenerate surfaces.
    pub fn close_without_animation<R>(&mut self, renderer: &mut R) -> bool
    where
        R: SnapshotRenderer + ?Sized,
    {
        if !self.parts.is_expandable() {
            return false;
        }
        self.driver = None;
        self.snapshot.release(renderer);
        self.height_offset = 0.0;
        self.visible = false;
        self.animating = false;
        true
    }

    /// The measurement hook: reports the height the surrounding layout should
    /// give this row, and starts a pending transition when one is due.
    ///
    /// Settled-expanded rows (and rows without a holder) report the natural
    /// height; settled-collapsed rows report it minus the holder; a row
    /// mid-transition reports the collapsed baseline plus however much of the
    /// holder currently shows. When a transition is due and no snapshot
    /// exists yet, the fully expanded appearance is frozen here, sized from
    /// this very pass so the allocation never sees unmeasured state, and the
    /// driver starts from the appropriate bound.
    pub fn measure<R>(&mut self, metrics: RowMetrics, renderer: &mut R) -> f64
    where
        R: SnapshotRenderer + ?Sized,
    {
        if !self.parts.contains(SurfaceParts::HOLDER) || (self.visible && !self.animating) {
            if self.parts.contains(SurfaceParts::HOLDER) {
                // Remember the holder's height so a later close can animate
                // down from exactly this offset.
                self.height_offset = metrics.holder_height;
            }
            return metrics.natural_height;
        }

        if self.animating {
            if self.snapshot.is_empty() {
                let desc = SnapshotDesc {
                    size: Size::new(metrics.width, metrics.natural_height + metrics.holder_height),
                    format: ImageFormat::Rgba8,
                };
                self.snapshot.build(renderer, &desc);
            }
            if self.driver.is_none() {
                let (from, to) = if self.visible {
                    (0.0, metrics.holder_height)
                } else {
                    (metrics.holder_height, 0.0)
                };
                self.height_offset = from;
                self.driver = Some(Driver::new(Transition::with_speed(
                    from,
                    to,
                    EXPAND_SPEED,
                    Easing::Decelerate,
                )));
            }
        }

        metrics.natural_height - metrics.holder_height + self.height_offset
    }

    /// Advances the in-flight transition by `dt` time units.
    ///
    /// Writes the eased offset into the row and, on completion, settles the
    /// machine and releases the snapshot synchronously. Rows with no
    /// transition in flight report neither layout nor completion.
    pub fn tick<R>(&mut self, dt: f64, renderer: &mut R) -> Tick
    where
        R: SnapshotRenderer + ?Sized,
    {
        let Some(driver) = self.driver.as_mut() else {
            return Tick {
                needs_layout: false,
                completed: false,
            };
        };
        match driver.advance(dt) {
            Step::Running(offset) => {
                self.height_offset = offset;
                Tick {
                    needs_layout: true,
                    completed: false,
                }
            }
            Step::Done(offset) => {
                self.height_offset = offset;
                self.driver = None;
                self.animating = false;
                self.snapshot.release(renderer);
                Tick {
                    needs_layout: true,
                    completed: true,
                }
            }
        }
    }

    /// What the host should paint this frame.
    ///
    /// While a transition is in flight with a cached snapshot, only the
    /// frozen image is painted; live content drawing resumes once settled.
    #[must_use]
    pub fn draw_mode(&self) -> DrawMode {
        match self.snapshot.image() {
            Some(id) if self.animating => DrawMode::Snapshot(id),
            _ => DrawMode::Live,
        }
    }

    /// Returns `true` while the row should swallow input aimed at its
    /// descendants (what is on screen is a frozen image).
    #[must_use]
    pub fn intercepts_input(&self) -> bool {
        self.animating
    }
}
