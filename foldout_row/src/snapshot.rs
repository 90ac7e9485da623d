// Copyright 2025 the Foldout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frozen row snapshots: descriptions, handles, and the owning cache.
//!
//! While a row's height is animating, the surrounding layout resizes it on
//! every frame. Re-laying-out and re-painting the row's live content at each
//! intermediate size would be arbitrarily expensive, so the row instead
//! renders its appearance **once** into an offscreen image and paints only
//! that image until the transition settles.
//!
//! The image itself lives in the host's imaging backend; this module deals in
//! opaque [`SnapshotId`] handles. [`SnapshotCache`] guarantees that a row
//! holds at most one live handle and that handles are released eagerly (on
//! transition completion, on cancellation, and on every rebind), so snapshot
//! memory stays bounded by the number of rows animating right now, not by the
//! number of rows ever created.

use kurbo::Size;
pub use peniko::ImageFormat;

/// Identifier for a snapshot image resource.
///
/// This is a small, opaque handle allocated by the host's
/// [`SnapshotRenderer`]. It is stable from [`SnapshotRenderer::build`] until
/// the matching [`SnapshotRenderer::release`], and must not be used after.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SnapshotId(pub u32);

/// Description of the offscreen image a snapshot is rendered into.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SnapshotDesc {
    /// Image size in logical units: the row's measured width by its fully
    /// expanded height (measured height plus holder height), so one image
    /// covers the transition in either direction.
    pub size: Size,
    /// Pixel format of the offscreen image.
    pub format: ImageFormat,
}

/// Renders row content into offscreen snapshot images.
///
/// Implemented by the host on its imaging backend. The contract is
/// render-once: [`SnapshotRenderer::build`] rasterizes the row's live content
/// a single time and hands back a handle; the row never asks for the same
/// appearance twice. Sizes in the description always come from an
/// already-completed measurement pass, never from unmeasured state.
pub trait SnapshotRenderer {
    /// Renders the row's current content into a new image sized per `desc`.
    ///
    /// Returns `None` when the backend cannot produce the image; the row then
    /// animates unfrozen (live drawing continues) rather than failing.
    fn build(&mut self, desc: &SnapshotDesc) -> Option<SnapshotId>;

    /// Releases a handle previously returned by
    /// [`build`](SnapshotRenderer::build).
    ///
    /// Called exactly once per handle, synchronously at the point the
    /// snapshot stops being needed.
    fn release(&mut self, id: SnapshotId);
}

/// Owns at most one live snapshot handle for a row surface.
#[derive(Debug, Default)]
pub struct SnapshotCache {
    image: Option<SnapshotId>,
}

impl SnapshotCache {
    /// Creates an empty cache.
    #[must_use]
    pub const fn new() -> Self {
        Self { image: None }
    }

    /// The cached handle, if one is live.
    #[must_use]
    pub fn image(&self) -> Option<SnapshotId> {
        self.image
    }

    /// Returns `true` when no handle is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.image.is_none()
    }

    /// Builds a fresh snapshot, releasing any existing one first.
    ///
    /// Returns `true` when the renderer produced an image.
    pub fn build<R>(&mut self, renderer: &mut R, desc: &SnapshotDesc) -> bool
    where
        R: SnapshotRenderer + ?Sized,
    {
        self.release(renderer);
        self.image = renderer.build(desc);
        self.image.is_some()
    }

    /// Releases the cached handle, if any. Idempotent.
    pub fn release<R>(&mut self, renderer: &mut R)
    where
        R: SnapshotRenderer + ?Sized,
    {
        if let Some(id) = self.image.take() {
            renderer.release(id);
        }
    }
}
