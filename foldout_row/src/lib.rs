// Copyright 2025 the Foldout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=foldout_row --heading-base-level=0

//! Foldout Row: the per-row expansion state machine and snapshot mechanism.
//!
//! A recycled list reuses the same physical row surface for different logical
//! rows as it scrolls. This crate owns the state that lives on such a surface
//! when the row can expand and collapse: whether the holder panel is shown,
//! whether a height transition is in flight, how much extra height the panel
//! currently contributes, and the frozen snapshot that stands in for live
//! content while the surrounding layout resizes.
//!
//! The core concepts are:
//!
//! - [`RowExpansion`]: the state machine itself. The host calls
//!   [`RowExpansion::bind`] on every reuse, [`RowExpansion::measure`] from its
//!   measurement pass, and [`RowExpansion::tick`] from its frame scheduler;
//!   a coordinator above drives [`RowExpansion::toggle`],
//!   [`RowExpansion::close`], [`RowExpansion::close_without_animation`], and
//!   [`RowExpansion::set_expanded`].
//! - [`SnapshotCache`] and [`SnapshotRenderer`]: at most one frozen image of
//!   the row's fully expanded appearance, built exactly once per transition
//!   through a host-implemented renderer and released eagerly the moment it
//!   is no longer needed.
//! - [`SurfaceParts`]: which named sub-elements (the tap switch, the holder
//!   panel) were detected in the surface's content. A surface missing either
//!   is permanently treated as expanded, with every transition disabled.
//! - [`DrawMode`]: what the host should paint this frame — live content, or
//!   only the frozen snapshot while a transition is resizing the row.
//!
//! This crate deliberately does **not** know about widgets, adapters, or any
//! particular renderer. Hosts are responsible for:
//!
//! - Measuring content and feeding [`RowMetrics`] into
//!   [`RowExpansion::measure`] whenever a pass reports `needs_layout`.
//! - Implementing [`SnapshotRenderer`] on whatever imaging backend they use.
//! - Pumping [`RowExpansion::tick`] with frame deltas while
//!   [`RowExpansion::is_animating`] holds.
//! - Swallowing input to the row's descendants while
//!   [`RowExpansion::intercepts_input`] holds.
//!
//! ## Minimal example
//!
//! ```rust
//! use foldout_row::{
//!     RowExpansion, RowMetrics, SnapshotDesc, SnapshotId, SnapshotRenderer, SurfaceParts,
//! };
//!
//! struct Renderer(u32);
//!
//! impl SnapshotRenderer for Renderer {
//!     fn build(&mut self, _desc: &SnapshotDesc) -> Option<SnapshotId> {
//!         self.0 += 1;
//!         Some(SnapshotId(self.0))
//!     }
//!     fn release(&mut self, _id: SnapshotId) {}
//! }
//!
//! let mut renderer = Renderer(0);
//! let mut row = RowExpansion::new(SurfaceParts::SWITCH | SurfaceParts::HOLDER);
//! let metrics = RowMetrics {
//!     width: 320.0,
//!     natural_height: 180.0,
//!     holder_height: 120.0,
//! };
//!
//! // Bound and collapsed, the row reports its baseline height.
//! row.bind(0, &mut renderer);
//! assert_eq!(row.measure(metrics, &mut renderer), 60.0);
//!
//! // A tap starts an animated open; the measurement pass kicks it off.
//! row.toggle();
//! row.measure(metrics, &mut renderer);
//! assert!(row.is_animating());
//!
//! // The host pumps frames until the row settles fully expanded.
//! while !row.tick(16.0, &mut renderer).completed {}
//! assert_eq!(row.measure(metrics, &mut renderer), 180.0);
//! ```
//!
//! Heights and offsets are `f64` logical units. This crate is `no_std`.

#![no_std]

mod snapshot;
mod state;

pub use snapshot::{ImageFormat, SnapshotCache, SnapshotDesc, SnapshotId, SnapshotRenderer};
pub use state::{DrawMode, Phase, RowExpansion, RowMetrics, SurfaceParts, Tick};
