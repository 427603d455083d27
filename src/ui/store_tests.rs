use crate::ui::store::{
    action::{Action, Motion},
    reducer::StoreReducer,
    state::{Cursor, State},
};

use super::*;

#[test]
fn dispatch_runs_the_reducer_inside_the_lock() {
    let store = Store::new(State::default(), StoreReducer::boxed());

    store
        .dispatch(Action::MoveCursor(Motion::Down))
        .unwrap();

    let state = store.get_state().unwrap();
    assert_eq!(state.cursor, Cursor { row: 1, col: 0 });
}

#[test]
fn get_state_returns_a_detached_copy() {
    let store = Store::new(State::default(), StoreReducer::boxed());

    let mut copy = store.get_state().unwrap();
    copy.cursor = Cursor { row: 2, col: 2 };

    assert_eq!(
        store.get_state().unwrap().cursor,
        Cursor { row: 0, col: 0 }
    );
}

#[test]
fn dispatch_forwards_the_action_to_the_reducer() {
    let mut reducer = MockReducer::new();
    reducer
        .expect_reduce()
        .withf(|_, action| {
            *action == Action::MoveCursor(Motion::Bottom)
        })
        .times(1)
        .return_const(());

    let store = Store::new(State::default(), Box::new(reducer));

    store
        .dispatch(Action::MoveCursor(Motion::Bottom))
        .unwrap();
}

#[test]
fn concurrent_dispatches_are_serialized() {
    let store = std::sync::Arc::new(Store::new(
        State::default(),
        StoreReducer::boxed(),
    ));

    let handles: Vec<_> = (0..2)
        .map(|_| {
            let store = std::sync::Arc::clone(&store);
            std::thread::spawn(move || {
                store.dispatch(Action::MoveCursor(Motion::Down)).unwrap();
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    // both movements landed: 0 -> 1 -> 2
    assert_eq!(
        store.get_state().unwrap().cursor,
        Cursor { row: 2, col: 0 }
    );
}
