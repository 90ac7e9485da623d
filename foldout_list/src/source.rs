// Copyright 2025 the Foldout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The external row-content collaborator contract.

use foldout_row::SurfaceParts;

/// Identifier for a registered data-set observer.
///
/// This is a small, opaque handle whose meaning belongs entirely to the
/// [`RowSource`] implementation; the adapter forwards it without
/// interpretation.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(pub u32);

/// Produces and re-binds row content for a dense strip of positions.
///
/// This is the external collaborator the recycling adapter wraps. It owns the
/// underlying data, the content views, and their rendering; the adapter adds
/// exclusive expansion state around it and forwards every other obligation
/// here unchanged.
pub trait RowSource {
    /// The content view type this source produces.
    type Content;
    /// The opaque item type backing each position.
    type Item;

    /// Number of rows.
    fn count(&self) -> usize;

    /// Returns `true` when the source has no rows.
    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// The item backing `position`.
    fn item(&self, position: usize) -> Self::Item;

    /// A stable identifier for the row at `position`.
    ///
    /// Only meaningful when [`has_stable_ids`](RowSource::has_stable_ids)
    /// holds.
    fn item_id(&self, position: usize) -> i64;

    /// Whether item identifiers survive data-set changes.
    fn has_stable_ids(&self) -> bool;

    /// The view-type class of the row at `position`.
    fn view_type(&self, position: usize) -> usize;

    /// How many distinct view-type classes this source produces.
    fn view_type_count(&self) -> usize;

    /// Whether the row at `position` responds to interaction.
    fn is_enabled(&self, position: usize) -> bool;

    /// Whether every row responds to interaction.
    fn all_enabled(&self) -> bool;

    /// Produces fresh content for `position`.
    fn produce(&mut self, position: usize) -> Self::Content;

    /// Re-binds existing content (previously produced by this source) to a
    /// new `position`.
    fn rebind(&mut self, position: usize, content: &mut Self::Content);

    /// Reports which expansion sub-elements `content` carries.
    ///
    /// Content without both a switch and a holder yields a surface that
    /// permanently displays expanded, with transitions disabled.
    fn probe(&self, content: &Self::Content) -> SurfaceParts;

    /// Registers an observer for data-set-changed notifications.
    fn register_observer(&mut self, observer: ObserverId);

    /// Unregisters a previously registered observer.
    fn unregister_observer(&mut self, observer: ObserverId);
}
