//! Pure reducer functions that compute new state from actions.

use crate::ui::store::{Reducer, action::Action, state::State};

mod reducers;

/// Applies actions to state, mutating it in place.
#[derive(Default)]
pub struct StoreReducer;

impl StoreReducer {
    /// Returns the reducer boxed for [`crate::ui::store::Store::new`].
    pub fn boxed() -> Box<dyn Reducer + Send + Sync> {
        Box::new(Self)
    }
}

impl Reducer for StoreReducer {
    fn reduce(&self, state: &mut State, action: Action) {
        match action {
            Action::UpdateSnapshot(snapshot) => {
                reducers::table::update_snapshot(state, snapshot)
            }
            Action::MoveCursor(motion) => {
                reducers::cursor::move_cursor(state, motion)
            }
            Action::UpdateMessage(message) => {
                reducers::ui::update_message(state, message)
            }
        }
    }
}

#[cfg(test)]
#[path = "./reducer_tests.rs"]
mod tests;
