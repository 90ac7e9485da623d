// Copyright 2025 the Foldout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The recycling adapter: the integration seam around an external source.

use foldout_row::SnapshotRenderer;

use crate::coordinator::{Changed, ExpansionCoordinator, SurfaceId};
use crate::source::{ObserverId, RowSource};

/// A reusable row surface: the wrapped source's content plus the handle to
/// the expansion state attached to it.
///
/// Identity is physical: the same surface is handed back through
/// [`RecyclingAdapter::view`] to be reassigned to different logical positions
/// as the list scrolls.
#[derive(Debug)]
pub struct RowSurface<C> {
    /// The inner content produced by the wrapped source.
    pub content: C,
    id: SurfaceId,
}

impl<C> RowSurface<C> {
    /// The surface's handle into the adapter's coordinator.
    #[must_use]
    pub fn id(&self) -> SurfaceId {
        self.id
    }
}

/// Wraps an external [`RowSource`], attaching exclusive expansion state to
/// every surface it produces.
///
/// The adapter intercepts exactly one concern: surface acquisition
/// ([`view`](Self::view)), where it constructs or recycles a [`RowSurface`],
/// keeps the coordinator informed, and re-derives the row's expansion
/// display. Every other list obligation is pure delegation to the wrapped
/// source, with no independent logic.
#[derive(Debug)]
pub struct RecyclingAdapter<S> {
    source: S,
    coordinator: ExpansionCoordinator,
}

impl<S: RowSource> RecyclingAdapter<S> {
    /// Wraps `source` with a fresh coordinator.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            source,
            coordinator: ExpansionCoordinator::new(),
        }
    }

    /// The wrapped source.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutable access to the wrapped source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// The expansion coordinator for this list.
    #[must_use]
    pub fn expansion(&self) -> &ExpansionCoordinator {
        &self.coordinator
    }

    /// Mutable access to the expansion coordinator.
    ///
    /// Hosts drive the per-row measurement and frame hooks through this.
    pub fn expansion_mut(&mut self) -> &mut ExpansionCoordinator {
        &mut self.coordinator
    }

    /// Produces or recycles the surface for `position`.
    ///
    /// On first use for a physical slot (`recycled` is `None`) the source
    /// produces fresh content, the content is probed for its expansion
    /// sub-elements, and the new surface is registered with the coordinator.
    /// On reuse the source re-binds its content in place. Both paths then
    /// bind the surface to `position` and re-derive whether it displays
    /// expanded.
    ///
    /// The returned set lists every surface the host should re-measure.
    pub fn view<R>(
        &mut self,
        position: usize,
        recycled: Option<RowSurface<S::Content>>,
        renderer: &mut R,
    ) -> (RowSurface<S::Content>, Changed)
    where
        R: SnapshotRenderer + ?Sized,
    {
        let surface = match recycled {
            None => {
                let content = self.source.produce(position);
                let parts = self.source.probe(&content);
                let id = self.coordinator.register(parts);
                RowSurface { content, id }
            }
            Some(mut surface) => {
                self.source.rebind(position, &mut surface.content);
                surface
            }
        };
        let changed = self.coordinator.bind(surface.id, position, renderer);
        (surface, changed)
    }

    /// Routes a tap on a surface's switch control to the coordinator.
    pub fn toggle<R>(&mut self, id: SurfaceId, renderer: &mut R) -> Changed
    where
        R: SnapshotRenderer + ?Sized,
    {
        self.coordinator.toggle(id, renderer)
    }

    /// Number of rows. Pure delegation.
    #[must_use]
    pub fn count(&self) -> usize {
        self.source.count()
    }

    /// Returns `true` when the list has no rows. Pure delegation.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// The item backing `position`. Pure delegation.
    pub fn item(&self, position: usize) -> S::Item {
        self.source.item(position)
    }

    /// A stable identifier for the row at `position`. Pure delegation.
    pub fn item_id(&self, position: usize) -> i64 {
        self.source.item_id(position)
    }

    /// Whether item identifiers survive data-set changes. Pure delegation.
    #[must_use]
    pub fn has_stable_ids(&self) -> bool {
        self.source.has_stable_ids()
    }

    /// The view-type class of the row at `position`. Pure delegation.
    pub fn view_type(&self, position: usize) -> usize {
        self.source.view_type(position)
    }

    /// How many distinct view-type classes the list produces. Pure delegation.
    #[must_use]
    pub fn view_type_count(&self) -> usize {
        self.source.view_type_count()
    }

    /// Whether the row at `position` responds to interaction. Pure delegation.
    pub fn is_enabled(&self, position: usize) -> bool {
        self.source.is_enabled(position)
    }

    /// Whether every row responds to interaction. Pure delegation.
    #[must_use]
    pub fn all_enabled(&self) -> bool {
        self.source.all_enabled()
    }

    /// Registers a data-set observer. Pure delegation.
    pub fn register_observer(&mut self, observer: ObserverId) {
        self.source.register_observer(observer);
    }

    /// Unregisters a data-set observer. Pure delegation.
    pub fn unregister_observer(&mut self, observer: ObserverId) {
        self.source.unregister_observer(observer);
    }
}
