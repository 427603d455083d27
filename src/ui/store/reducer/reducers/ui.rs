//! UI status reducers.

use crate::ui::store::state::State;

/// Sets or clears the footer status message.
pub fn update_message(state: &mut State, message: Option<String>) {
    state.message = message;
}
