//! Action types for state transitions.

use crate::source::TableSnapshot;

/// One cursor movement, applied against the extents of the snapshot
/// displayed at reduce time.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Motion {
    Left,
    Down,
    Up,
    Right,
    Top,
    Bottom,
}

/// Commands that trigger state changes via the reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    UpdateSnapshot(TableSnapshot),
    MoveCursor(Motion),
    UpdateMessage(Option<String>),
}
