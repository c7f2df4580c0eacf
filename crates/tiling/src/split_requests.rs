//! Event plumbing between the presentation layer and the store.
//!
//! The UI never touches `TilingStore` mutably: it writes `SplitRequested`
//! and `apply_split_requests` turns each request into a `split` call.

use bevy::prelude::*;
use bevy::window::RequestRedraw;

use crate::randomness::TilingRng;
use crate::rectangle::RectId;
use crate::split::SplitReport;
use crate::store::TilingStore;

/// A click landed on rectangle `id`.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitRequested {
    pub id: RectId,
}

/// Fired once per effective split. Stale requests produce nothing.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct TilingChanged {
    pub report: SplitReport,
}

/// Running totals of processed requests.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SplitStats {
    /// Requests that replaced a rectangle.
    pub splits: u64,
    /// Requests naming a rectangle that was no longer live.
    pub ignored: u64,
}

/// Set containing the only system allowed to mutate the tiling. Systems that
/// write `SplitRequested` should run `.before` it so clicks apply in the same
/// frame.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ApplySplitsSet;

/// Apply queued split requests in arrival order.
pub fn apply_split_requests(
    mut requests: EventReader<SplitRequested>,
    mut store: ResMut<TilingStore>,
    mut rng: ResMut<TilingRng>,
    mut stats: ResMut<SplitStats>,
    mut changed: EventWriter<TilingChanged>,
    mut redraw: EventWriter<RequestRedraw>,
) {
    for request in requests.read() {
        match store.split(request.id, &mut *rng) {
            Some(report) => {
                debug!(
                    "Split {} {} into {} children [{}]",
                    report.parent,
                    report.axis,
                    report.fan_out.count(),
                    describe_children(&store, &report)
                );
                stats.splits += 1;
                changed.send(TilingChanged { report });
                // The canvas already drew this frame; ask winit for another
                // one instead of waiting for the next input.
                redraw.send(RequestRedraw);
            }
            None => {
                debug!("Ignoring split request for stale rectangle {}", request.id);
                stats.ignored += 1;
            }
        }
    }
}

/// `#id color` pairs for the children of a split, in slice order.
pub fn describe_children(store: &TilingStore, report: &SplitReport) -> String {
    report
        .children
        .iter()
        .filter_map(|&id| store.get(id))
        .map(|child| format!("{} {}", child.id, child.color_hex()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Debug-build guard: re-check every invariant whenever the store changes.
#[cfg(debug_assertions)]
pub fn verify_tiling_on_change(store: Res<TilingStore>) {
    if let Err(e) = store.verify() {
        error!("Tiling invariant violated after split: {}", e);
    }
}
