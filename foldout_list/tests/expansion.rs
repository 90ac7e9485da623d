// Copyright 2025 the Foldout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `foldout_list` crate.
//!
//! These exercise the exclusive-expansion behavior across recycled surfaces:
//! the coordinator sweep and its mid-animation tie-break, visibility
//! re-derivation on rebinding, the snapshot memory bound, and the adapter's
//! pure delegation to the wrapped source.

use foldout_list::{ObserverId, RecyclingAdapter, RowSource, RowSurface, SurfaceId};
use foldout_row::{Phase, RowMetrics, SnapshotDesc, SnapshotId, SnapshotRenderer, SurfaceParts};

const METRICS: RowMetrics = RowMetrics {
    width: 320.0,
    natural_height: 180.0,
    holder_height: 120.0,
};

/// Tracks every live snapshot handle so leaks and double-releases show up.
#[derive(Default)]
struct CountingRenderer {
    next: u32,
    live: Vec<u32>,
    max_live: usize,
}

impl SnapshotRenderer for CountingRenderer {
    fn build(&mut self, _desc: &SnapshotDesc) -> Option<SnapshotId> {
        self.next += 1;
        self.live.push(self.next);
        self.max_live = self.max_live.max(self.live.len());
        Some(SnapshotId(self.next))
    }

    fn release(&mut self, id: SnapshotId) {
        let idx = self
            .live
            .iter()
            .position(|&v| v == id.0)
            .expect("released a handle that was not live");
        self.live.remove(idx);
    }
}

struct SpyContent {
    position: usize,
}

/// Records every produce/rebind/observer call for delegation checks.
struct SpySource {
    len: usize,
    parts: SurfaceParts,
    produced: Vec<usize>,
    rebound: Vec<usize>,
    observers: Vec<u32>,
}

impl SpySource {
    fn new(len: usize, parts: SurfaceParts) -> Self {
        Self {
            len,
            parts,
            produced: Vec::new(),
            rebound: Vec::new(),
            observers: Vec::new(),
        }
    }
}

impl RowSource for SpySource {
    type Content = SpyContent;
    type Item = usize;

    fn count(&self) -> usize {
        self.len
    }

    fn item(&self, position: usize) -> usize {
        position
    }

    fn item_id(&self, position: usize) -> i64 {
        position as i64 * 10
    }

    fn has_stable_ids(&self) -> bool {
        true
    }

    fn view_type(&self, position: usize) -> usize {
        position % 2
    }

    fn view_type_count(&self) -> usize {
        2
    }

    fn is_enabled(&self, position: usize) -> bool {
        position != 3
    }

    fn all_enabled(&self) -> bool {
        false
    }

    fn produce(&mut self, position: usize) -> SpyContent {
        self.produced.push(position);
        SpyContent { position }
    }

    fn rebind(&mut self, position: usize, content: &mut SpyContent) {
        self.rebound.push(position);
        content.position = position;
    }

    fn probe(&self, _content: &SpyContent) -> SurfaceParts {
        self.parts
    }

    fn register_observer(&mut self, observer: ObserverId) {
        self.observers.push(observer.0);
    }

    fn unregister_observer(&mut self, observer: ObserverId) {
        self.observers.retain(|&o| o != observer.0);
    }
}

fn adapter_with(len: usize) -> RecyclingAdapter<SpySource> {
    RecyclingAdapter::new(SpySource::new(len, SurfaceParts::all()))
}

fn realize(
    adapter: &mut RecyclingAdapter<SpySource>,
    n: usize,
    renderer: &mut CountingRenderer,
) -> Vec<RowSurface<SpyContent>> {
    (0..n)
        .map(|position| adapter.view(position, None, renderer).0)
        .collect()
}

/// Runs one row's in-flight transition to completion, re-measuring as a host
/// would after every frame that reports a size change.
fn settle(
    adapter: &mut RecyclingAdapter<SpySource>,
    id: SurfaceId,
    renderer: &mut CountingRenderer,
) {
    let row = adapter.expansion_mut().row_mut(id);
    row.measure(METRICS, renderer);
    while row.is_animating() {
        let tick = row.tick(16.0, renderer);
        if tick.needs_layout {
            row.measure(METRICS, renderer);
        }
    }
}

fn visible_expandable_rows(adapter: &RecyclingAdapter<SpySource>) -> usize {
    adapter
        .expansion()
        .surfaces()
        .filter(|(_, row)| row.parts().is_expandable() && row.is_visible())
        .count()
}

fn animating_rows(adapter: &RecyclingAdapter<SpySource>) -> usize {
    adapter
        .expansion()
        .surfaces()
        .filter(|(_, row)| row.is_animating())
        .count()
}

#[test]
fn toggle_expands_exactly_one_row() {
    let mut renderer = CountingRenderer::default();
    let mut adapter = adapter_with(3);
    let rows = realize(&mut adapter, 3, &mut renderer);

    let changed = adapter.toggle(rows[0].id(), &mut renderer);

    assert!(changed.contains(&rows[0].id()));
    assert_eq!(adapter.expansion().expanded_index(), Some(0));
    assert_eq!(adapter.expansion().row(rows[0].id()).phase(), Phase::Opening);
    assert_eq!(visible_expandable_rows(&adapter), 1);
}

#[test]
fn rapid_second_toggle_settles_the_first_row_instantly() {
    let mut renderer = CountingRenderer::default();
    let mut adapter = adapter_with(3);
    let rows = realize(&mut adapter, 3, &mut renderer);
    let (a, b, c) = (rows[0].id(), rows[1].id(), rows[2].id());

    // A starts opening; its first measurement pass freezes the snapshot.
    adapter.toggle(a, &mut renderer);
    let row_a = adapter.expansion_mut().row_mut(a);
    row_a.measure(METRICS, &mut renderer);
    row_a.tick(16.0, &mut renderer);
    assert!(row_a.is_animating());

    // B is toggled before A's animation completes.
    let changed = adapter.toggle(b, &mut renderer);

    // A was caught mid-animation, so it settled abruptly: no second run, no
    // flicker, snapshot released synchronously.
    let row_a = adapter.expansion().row(a);
    assert_eq!(row_a.phase(), Phase::Collapsed);
    assert_eq!(row_a.height_offset(), 0.0);
    assert!(row_a.snapshot().is_none());

    assert_eq!(adapter.expansion().expanded_index(), Some(1));
    assert_eq!(adapter.expansion().row(b).phase(), Phase::Opening);

    // C was already closed: untouched by the sweep.
    assert_eq!(adapter.expansion().row(c).phase(), Phase::Collapsed);
    assert!(changed.contains(&a));
    assert!(changed.contains(&b));
    assert!(!changed.contains(&c));

    // A's snapshot was the only one built so far, and it is gone.
    assert!(renderer.live.is_empty());
}

#[test]
fn toggling_the_expanded_row_closes_it() {
    let mut renderer = CountingRenderer::default();
    let mut adapter = adapter_with(2);
    let rows = realize(&mut adapter, 2, &mut renderer);

    adapter.toggle(rows[0].id(), &mut renderer);
    settle(&mut adapter, rows[0].id(), &mut renderer);
    assert_eq!(adapter.expansion().row(rows[0].id()).phase(), Phase::Expanded);
    let rev = adapter.expansion().revision();

    let changed = adapter.toggle(rows[0].id(), &mut renderer);

    assert!(changed.contains(&rows[0].id()));
    assert_eq!(adapter.expansion().expanded_index(), None);
    assert_eq!(adapter.expansion().row(rows[0].id()).phase(), Phase::Closing);
    // The expansion moved, so observers can see it in the revision.
    assert!(adapter.expansion().revision() > rev);
}

#[test]
fn sweep_closes_any_number_of_stale_rows() {
    let mut renderer = CountingRenderer::default();
    let mut adapter = adapter_with(3);
    let rows = realize(&mut adapter, 3, &mut renderer);
    let (a, b, c) = (rows[0].id(), rows[1].id(), rows[2].id());

    // Force two rows visible behind the coordinator's back, as if their
    // state went stale across data reordering.
    adapter.expansion_mut().row_mut(a).set_expanded(true);
    adapter.expansion_mut().row_mut(b).set_expanded(true);

    let changed = adapter.toggle(c, &mut renderer);

    // One pass restores the invariant: both stale rows close (animated,
    // since neither was mid-transition) and only C remains on its way open.
    assert_eq!(adapter.expansion().row(a).phase(), Phase::Closing);
    assert_eq!(adapter.expansion().row(b).phase(), Phase::Closing);
    assert_eq!(adapter.expansion().row(c).phase(), Phase::Opening);
    assert_eq!(adapter.expansion().expanded_index(), Some(2));
    assert!(changed.contains(&a) && changed.contains(&b) && changed.contains(&c));
}

#[test]
fn single_expansion_invariant_holds_across_sequences() {
    let mut renderer = CountingRenderer::default();
    let mut adapter = adapter_with(5);
    let rows = realize(&mut adapter, 5, &mut renderer);

    // A mix of fresh toggles, re-toggles, and mid-flight interruptions.
    for &target in &[0_usize, 2, 2, 4, 1, 1, 3, 0] {
        adapter.toggle(rows[target].id(), &mut renderer);
        adapter
            .expansion_mut()
            .row_mut(rows[target].id())
            .measure(METRICS, &mut renderer);
        assert!(
            visible_expandable_rows(&adapter) <= 1,
            "more than one visible row after toggling position {target}"
        );
    }
}

#[test]
fn rebinding_rederives_visibility_from_the_expanded_index() {
    let mut renderer = CountingRenderer::default();
    let mut adapter = adapter_with(10);
    let mut rows = realize(&mut adapter, 2, &mut renderer);

    adapter.toggle(rows[0].id(), &mut renderer);
    settle(&mut adapter, rows[0].id(), &mut renderer);

    // The surface showing position 0 scrolls away and is reused for 5: it
    // must stop displaying expanded, silently.
    let surface = rows.remove(0);
    let recycled_id = surface.id();
    let (surface, _) = adapter.view(5, Some(surface), &mut renderer);
    let row = adapter.expansion().row(surface.id());
    assert_eq!(surface.id(), recycled_id);
    assert!(!row.is_visible());
    assert!(!row.is_animating());
    assert_eq!(row.height_offset(), 0.0);

    // Position 0 is still the expanded index; whichever surface binds it
    // next displays expanded without animating.
    let other = rows.remove(0);
    let (other, _) = adapter.view(0, Some(other), &mut renderer);
    let row = adapter.expansion().row(other.id());
    assert!(row.is_visible());
    assert!(!row.is_animating());
    assert_eq!(adapter.expansion().expanded_index(), Some(0));

    // The source saw exactly the produce/rebind traffic the recycling implies.
    assert_eq!(adapter.source().produced, vec![0, 1]);
    assert_eq!(adapter.source().rebound, vec![5, 0]);
}

#[test]
fn rebind_mid_animation_clears_transient_state() {
    let mut renderer = CountingRenderer::default();
    let mut adapter = adapter_with(10);
    let mut rows = realize(&mut adapter, 1, &mut renderer);

    adapter.toggle(rows[0].id(), &mut renderer);
    let row = adapter.expansion_mut().row_mut(rows[0].id());
    row.measure(METRICS, &mut renderer);
    row.tick(16.0, &mut renderer);
    assert!(row.is_animating());
    assert!(row.snapshot().is_some());

    let (surface, _) = adapter.view(7, Some(rows.remove(0)), &mut renderer);

    let row = adapter.expansion().row(surface.id());
    assert!(!row.is_animating());
    assert!(row.snapshot().is_none());
    assert_eq!(row.phase(), Phase::Collapsed);
    assert!(renderer.live.is_empty());

    // The logical row 0 stays the expanded one; only this surface moved on.
    assert_eq!(adapter.expansion().expanded_index(), Some(0));
}

#[test]
fn rebinding_the_expanded_position_onto_itself_is_stable() {
    let mut renderer = CountingRenderer::default();
    let mut adapter = adapter_with(4);
    let mut rows = realize(&mut adapter, 1, &mut renderer);

    adapter.toggle(rows[0].id(), &mut renderer);
    settle(&mut adapter, rows[0].id(), &mut renderer);

    let (surface, _) = adapter.view(0, Some(rows.remove(0)), &mut renderer);
    let row = adapter.expansion().row(surface.id());
    assert_eq!(row.phase(), Phase::Expanded);
    assert_eq!(adapter.expansion().expanded_index(), Some(0));
}

#[test]
fn snapshot_memory_stays_bounded_across_cycles() {
    let mut renderer = CountingRenderer::default();
    let mut adapter = adapter_with(2);
    let rows = realize(&mut adapter, 2, &mut renderer);

    // Alternate interrupted toggles across two rows for many cycles: live
    // snapshots must track rows currently animating, never accumulate.
    for i in 0..100 {
        let id = rows[i % 2].id();
        adapter.toggle(id, &mut renderer);
        let row = adapter.expansion_mut().row_mut(id);
        row.measure(METRICS, &mut renderer);
        row.tick(16.0, &mut renderer);
        assert!(
            renderer.live.len() <= animating_rows(&adapter),
            "snapshot count exceeded animating rows at cycle {i}"
        );
    }

    settle(&mut adapter, rows[0].id(), &mut renderer);
    settle(&mut adapter, rows[1].id(), &mut renderer);
    assert!(renderer.live.is_empty());
    assert!(renderer.max_live <= 2);
}

#[test]
fn adapter_delegates_everything_else_to_the_source() {
    let mut adapter = adapter_with(7);

    assert_eq!(adapter.count(), 7);
    assert!(!adapter.is_empty());
    assert_eq!(adapter.item(4), 4);
    assert_eq!(adapter.item_id(4), 40);
    assert!(adapter.has_stable_ids());
    assert_eq!(adapter.view_type(5), 1);
    assert_eq!(adapter.view_type_count(), 2);
    assert!(!adapter.is_enabled(3));
    assert!(adapter.is_enabled(2));
    assert!(!adapter.all_enabled());

    adapter.register_observer(ObserverId(9));
    assert_eq!(adapter.source().observers, vec![9]);
    adapter.unregister_observer(ObserverId(9));
    assert!(adapter.source().observers.is_empty());
}

#[test]
fn view_produces_once_then_rebinds_in_place() {
    let mut renderer = CountingRenderer::default();
    let mut adapter = adapter_with(8);

    let (surface, _) = adapter.view(0, None, &mut renderer);
    assert_eq!(adapter.source().produced, vec![0]);
    assert_eq!(adapter.expansion().surface_count(), 1);

    let (surface, _) = adapter.view(3, Some(surface), &mut renderer);
    assert_eq!(adapter.source().produced, vec![0]);
    assert_eq!(adapter.source().rebound, vec![3]);
    assert_eq!(surface.content.position, 3);
    // Reuse never registers a second surface.
    assert_eq!(adapter.expansion().surface_count(), 1);
}

#[test]
fn degenerate_surfaces_stay_inert() {
    let mut renderer = CountingRenderer::default();
    let mut adapter = RecyclingAdapter::new(SpySource::new(3, SurfaceParts::HOLDER));
    let rows = realize(&mut adapter, 2, &mut renderer);

    let changed = adapter.toggle(rows[0].id(), &mut renderer);

    assert!(changed.is_empty());
    assert_eq!(adapter.expansion().expanded_index(), None);
    assert_eq!(adapter.expansion().revision(), 0);
    // Both surfaces permanently display expanded and never animate, even
    // while other rows come and go.
    for (_, row) in adapter.expansion().surfaces() {
        assert!(row.is_visible());
        assert!(!row.is_animating());
    }
}
