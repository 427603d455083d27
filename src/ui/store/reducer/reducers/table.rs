//! Snapshot replacement reducers.

use crate::{source::TableSnapshot, ui::store::state::State};

/// Swaps in a freshly fetched snapshot. The cursor is re-clamped so it
/// never points past the new extents, and a stale refresh-failure notice
/// is cleared.
pub fn update_snapshot(state: &mut State, snapshot: TableSnapshot) {
    state.cursor = state
        .cursor
        .clamped(snapshot.row_count(), snapshot.column_count());
    state.snapshot = snapshot;
    state.message = None;
}
