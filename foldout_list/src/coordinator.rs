// Copyright 2025 the Foldout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The exclusive-expansion coordinator.

use alloc::vec::Vec;

use foldout_row::{RowExpansion, SnapshotRenderer, SurfaceParts};
use smallvec::SmallVec;

/// Identifier for a registered row surface.
///
/// This is a small, opaque handle into the coordinator's arena. Surfaces are
/// registered once, when the physical surface is first constructed, and are
/// never removed, so handles stay valid for the coordinator's lifetime.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SurfaceId(pub u32);

impl SurfaceId {
    fn idx(self) -> usize {
        self.0 as usize
    }

    fn from_index(idx: usize) -> Self {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "surface counts are bounded by the list's physical slot count"
        )]
        {
            Self(idx as u32)
        }
    }
}

/// Surfaces whose reported size changed during one coordinator operation.
///
/// The host should re-run measurement for each. Most operations touch one or
/// two rows, so the buffer stays inline.
pub type Changed = SmallVec<[SurfaceId; 4]>;

/// Tracks the single expanded logical row across every registered surface.
///
/// The coordinator owns the arena of [`RowExpansion`] states (one per
/// physical surface ever constructed, held for the list's lifetime since
/// surfaces are reused indefinitely) plus the one logical index currently
/// expanded. Whenever a row becomes expanded, a synchronous sweep closes
/// every other visible row before control returns to the caller, so two rows
/// are never visibly expanded even momentarily.
#[derive(Debug, Default)]
pub struct ExpansionCoordinator {
    expanded: Option<usize>,
    rows: Vec<RowExpansion>,
    revision: u64,
}

impl ExpansionCoordinator {
    /// Creates a coordinator with no surfaces and nothing expanded.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            expanded: None,
            rows: Vec::new(),
            revision: 0,
        }
    }

    /// Registers a freshly constructed surface and returns its handle.
    ///
    /// Called at most once per physical surface, independent of scrolling.
    pub fn register(&mut self, parts: SurfaceParts) -> SurfaceId {
        let id = SurfaceId::from_index(self.rows.len());
        self.rows.push(RowExpansion::new(parts));
        id
    }

    /// Number of surfaces ever registered.
    #[must_use]
    pub fn surface_count(&self) -> usize {
        self.rows.len()
    }

    /// The logical index currently expanded, if any.
    #[must_use]
    pub fn expanded_index(&self) -> Option<usize> {
        self.expanded
    }

    /// The current revision counter.
    ///
    /// A monotonically increasing counter local to this coordinator, bumped
    /// whenever the expanded index changes. Useful for observers that want a
    /// cheap "did expansion move?" marker without tracking rows themselves.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The expansion state of one surface.
    ///
    /// `id` must come from [`register`](Self::register) on this coordinator.
    #[must_use]
    pub fn row(&self, id: SurfaceId) -> &RowExpansion {
        &self.rows[id.idx()]
    }

    /// Mutable access to one surface's expansion state.
    ///
    /// Hosts use this to drive the per-row measurement and frame hooks;
    /// expansion changes should go through [`toggle`](Self::toggle) and
    /// [`bind`](Self::bind) so the single-expansion invariant is maintained.
    #[must_use]
    pub fn row_mut(&mut self, id: SurfaceId) -> &mut RowExpansion {
        &mut self.rows[id.idx()]
    }

    /// Iterates every registered surface with its handle.
    pub fn surfaces(&self) -> impl Iterator<Item = (SurfaceId, &RowExpansion)> {
        self.rows
            .iter()
            .enumerate()
            .map(|(idx, row)| (SurfaceId::from_index(idx), row))
    }

    /// Handles a tap on a surface's switch control.
    ///
    /// The row flips with an animated transition; the expanded index follows
    /// it (the row's position when opening, nothing when closing); and the
    /// sweep restores the single-expansion invariant before returning. Inert
    /// on surfaces without both sub-elements.
    pub fn toggle<R>(&mut self, id: SurfaceId, renderer: &mut R) -> Changed
    where
        R: SnapshotRenderer + ?Sized,
    {
        let mut changed = Changed::new();
        let row = &mut self.rows[id.idx()];
        if !row.parts().is_expandable() {
            return changed;
        }
        let now_visible = row.toggle();
        let position = row.position();
        changed.push(id);

        let expanded = if now_visible { position } else { None };
        if expanded != self.expanded {
            self.expanded = expanded;
            self.revision = self.revision.wrapping_add(1);
        }
        self.close_others(&mut changed, renderer);
        changed
    }

    /// Binds a surface to a new logical position and re-derives visibility.
    ///
    /// The row's transient state is reset first; whether it should display
    /// expanded then comes from the expanded index, never from whatever the
    /// surface showed for its previous position. Turning a rebound row on is
    /// the silent, non-animating path, and other rows are swept closed before
    /// it turns on. The returned set always contains `id` (rebinding changes
    /// the row's content regardless).
    pub fn bind<R>(&mut self, id: SurfaceId, position: usize, renderer: &mut R) -> Changed
    where
        R: SnapshotRenderer + ?Sized,
    {
        let mut changed = Changed::new();
        self.rows[id.idx()].bind(position, renderer);
        changed.push(id);

        let target = self.expanded == Some(position);
        if target && !self.rows[id.idx()].is_visible() {
            self.close_others(&mut changed, renderer);
        }
        self.rows[id.idx()].set_expanded(target);
        changed
    }

    /// The coordinator sweep: closes every visible row whose position is not
    /// the expanded one.
    ///
    /// A row already mid-animation gets the abrupt close, the tie-break that
    /// avoids stacking a second run on a surface that is visually
    /// mid-transition; a settled row gets the animated one. One pass
    /// restores the invariant no matter how many rows were stale.
    fn close_others<R>(&mut self, changed: &mut Changed, renderer: &mut R)
    where
        R: SnapshotRenderer + ?Sized,
    {
        for (idx, row) in self.rows.iter_mut().enumerate() {
            if row.position() == self.expanded || !row.is_visible() {
                continue;
            }
            let resized = if row.is_animating() {
                row.close_without_animation(renderer)
            } else {
                row.close()
            };
            if resized {
                changed.push(SurfaceId::from_index(idx));
            }
        }
    }
}
