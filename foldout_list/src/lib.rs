// Copyright 2025 the Foldout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=foldout_list --heading-base-level=0

//! Foldout List: exclusive expansion coordination for recycled row surfaces.
//!
//! A recycled list hands the same physical row surface to different logical
//! rows as it scrolls, which makes "which row is expanded" a question no
//! single surface can answer for itself. This crate supplies the two pieces
//! that sit above the per-row machine in `foldout_row`:
//!
//! - [`ExpansionCoordinator`]: owns every surface's expansion state in one
//!   arena, tracks the single expanded logical index, and on every new
//!   expansion synchronously sweeps every other visible row closed.
//!   Rows caught mid-animation are settled abruptly instead of restarting a
//!   second overlapping run; settled rows close with the normal animation.
//! - [`RecyclingAdapter`]: the integration seam. It wraps an external
//!   [`RowSource`] (the collaborator that owns data and content views),
//!   intercepts surface acquisition to attach/reset expansion state, and
//!   forwards every other list obligation unchanged.
//!
//! The division of labor with the host:
//!
//! - The host's list machinery calls [`RecyclingAdapter::view`] with the
//!   position being realized and the recycled surface, if any.
//! - Taps on a row's switch control route to [`RecyclingAdapter::toggle`].
//! - Measurement, frame ticks, drawing, and input interception go through the
//!   per-row state reachable via [`ExpansionCoordinator::row_mut`].
//!
//! ## Minimal example
//!
//! ```rust
//! use foldout_list::{ObserverId, RecyclingAdapter, RowSource};
//! use foldout_row::{SnapshotDesc, SnapshotId, SnapshotRenderer, SurfaceParts};
//!
//! // A trivial source: each row's content is just its label.
//! struct Labels(Vec<&'static str>);
//!
//! struct Label {
//!     text: &'static str,
//! }
//!
//! impl RowSource for Labels {
//!     type Content = Label;
//!     type Item = &'static str;
//!
//!     fn count(&self) -> usize {
//!         self.0.len()
//!     }
//!     fn item(&self, position: usize) -> &'static str {
//!         self.0[position]
//!     }
//!     fn item_id(&self, position: usize) -> i64 {
//!         position as i64
//!     }
//!     fn has_stable_ids(&self) -> bool {
//!         true
//!     }
//!     fn view_type(&self, _position: usize) -> usize {
//!         0
//!     }
//!     fn view_type_count(&self) -> usize {
//!         1
//!     }
//!     fn is_enabled(&self, _position: usize) -> bool {
//!         true
//!     }
//!     fn all_enabled(&self) -> bool {
//!         true
//!     }
//!     fn produce(&mut self, position: usize) -> Label {
//!         Label { text: self.0[position] }
//!     }
//!     fn rebind(&mut self, position: usize, content: &mut Label) {
//!         content.text = self.0[position];
//!     }
//!     fn probe(&self, _content: &Label) -> SurfaceParts {
//!         SurfaceParts::all()
//!     }
//!     fn register_observer(&mut self, _observer: ObserverId) {}
//!     fn unregister_observer(&mut self, _observer: ObserverId) {}
//! }
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
//! let mut adapter = RecyclingAdapter::new(Labels(vec!["alpha", "beta", "gamma"]));
//!
//! // Realize two rows.
//! let (first, _) = adapter.view(0, None, &mut renderer);
//! let (second, _) = adapter.view(1, None, &mut renderer);
//!
//! // Tap the first row's switch: it becomes the single expanded row.
//! adapter.toggle(first.id(), &mut renderer);
//! assert_eq!(adapter.expansion().expanded_index(), Some(0));
//!
//! // Tapping the second forces the first closed before control returns.
//! adapter.toggle(second.id(), &mut renderer);
//! assert_eq!(adapter.expansion().expanded_index(), Some(1));
//! assert!(!adapter.expansion().row(first.id()).is_visible());
//! assert!(adapter.expansion().row(second.id()).is_visible());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod adapter;
mod coordinator;
mod source;

pub use adapter::{RecyclingAdapter, RowSurface};
pub use coordinator::{Changed, ExpansionCoordinator, SurfaceId};
pub use source::{ObserverId, RowSource};
