use crate::{
    source::TableSnapshot,
    ui::store::{
        action::{Action, Motion},
        state::{Cursor, State},
    },
};

use super::*;

fn reduce(state: &mut State, action: Action) {
    StoreReducer.reduce(state, action);
}

#[test]
fn moves_cursor_through_the_sample_table() {
    let mut state = State::default();

    reduce(&mut state, Action::MoveCursor(Motion::Down));
    reduce(&mut state, Action::MoveCursor(Motion::Down));
    assert_eq!(state.cursor, Cursor { row: 2, col: 0 });

    // already on the last row
    reduce(&mut state, Action::MoveCursor(Motion::Bottom));
    assert_eq!(state.cursor, Cursor { row: 2, col: 0 });

    reduce(&mut state, Action::MoveCursor(Motion::Top));
    assert_eq!(state.cursor, Cursor { row: 0, col: 0 });

    reduce(&mut state, Action::MoveCursor(Motion::Right));
    reduce(&mut state, Action::MoveCursor(Motion::Right));
    reduce(&mut state, Action::MoveCursor(Motion::Right));
    assert_eq!(state.cursor, Cursor { row: 0, col: 2 });

    reduce(&mut state, Action::MoveCursor(Motion::Left));
    assert_eq!(state.cursor, Cursor { row: 0, col: 1 });
}

#[test]
fn boundary_movement_is_a_no_op() {
    let mut state = State::default();

    reduce(&mut state, Action::MoveCursor(Motion::Up));
    reduce(&mut state, Action::MoveCursor(Motion::Left));
    assert_eq!(state.cursor, Cursor { row: 0, col: 0 });
}

#[test]
fn refresh_keeps_the_cursor_when_extents_are_unchanged() {
    let mut state = State::default();
    state.cursor = Cursor { row: 1, col: 2 };

    reduce(
        &mut state,
        Action::UpdateSnapshot(TableSnapshot::sample()),
    );

    assert_eq!(state.cursor, Cursor { row: 1, col: 2 });
}

#[test]
fn refresh_clamps_the_cursor_when_the_table_shrinks() {
    let mut state = State::default();
    state.cursor = Cursor { row: 2, col: 0 };

    let one_row = TableSnapshot::new(
        vec!["name".into(), "age".into(), "score".into()],
        vec![vec!["Alice".into(), "25".into(), "88.5".into()]],
    )
    .unwrap();

    reduce(&mut state, Action::UpdateSnapshot(one_row));

    assert_eq!(state.cursor, Cursor { row: 0, col: 0 });
    assert_eq!(state.snapshot.row_count(), 1);
}

#[test]
fn refresh_clears_a_stale_failure_notice() {
    let mut state = State::default();
    state.message = Some("refresh failed: file missing".to_string());

    reduce(
        &mut state,
        Action::UpdateSnapshot(TableSnapshot::sample()),
    );

    assert!(state.message.is_none());
}

#[test]
fn failure_notice_leaves_the_displayed_snapshot_alone() {
    let mut state = State::default();
    let displayed = state.snapshot.clone();
    state.cursor = Cursor { row: 2, col: 1 };

    reduce(
        &mut state,
        Action::UpdateMessage(Some("refresh failed: io".to_string())),
    );

    assert_eq!(state.snapshot, displayed);
    assert_eq!(state.cursor, Cursor { row: 2, col: 1 });
    assert_eq!(state.message.as_deref(), Some("refresh failed: io"));
}

#[test]
fn message_can_be_cleared() {
    let mut state = State::default();
    state.message = Some("refresh failed: io".to_string());

    reduce(&mut state, Action::UpdateMessage(None));

    assert!(state.message.is_none());
}
