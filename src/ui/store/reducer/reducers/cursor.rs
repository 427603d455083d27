//! Cursor movement reducers.

use crate::ui::store::{action::Motion, state::State};

/// Applies a motion against the extents of the currently displayed
/// snapshot. Movements at a boundary are no-ops.
pub fn move_cursor(state: &mut State, motion: Motion) {
    let rows = state.snapshot.row_count();
    let cols = state.snapshot.column_count();

    state.cursor = match motion {
        Motion::Left => state.cursor.left(),
        Motion::Down => state.cursor.down(rows),
        Motion::Up => state.cursor.up(),
        Motion::Right => state.cursor.right(cols),
        Motion::Top => state.cursor.top(),
        Motion::Bottom => state.cursor.bottom(rows),
    };
}
