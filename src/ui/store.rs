//! Redux-like state container shared by the input loop and the refresh
//! task.
//!
//! All mutations funnel through [`Store::dispatch`] and the reducer runs
//! entirely inside the state lock, so the displayed snapshot and the
//! cursor can never be observed mid-swap by either activity.

#[cfg(test)]
use mockall::automock;

use std::sync::Mutex;

use color_eyre::eyre::{Result, eyre};

use crate::ui::store::{action::Action, state::State};

pub mod action;
pub mod reducer;
pub mod state;

/// Gets application state
#[cfg_attr(test, automock)]
pub trait StateGetter: Send + Sync {
    fn get_state(&self) -> Result<State>;
}

/// Dispatches actions to update application state
#[cfg_attr(test, automock)]
pub trait Dispatcher: Send + Sync {
    fn dispatch(&self, action: Action) -> Result<()>;
}

/// Handles mutating store state based on provided action
#[cfg_attr(test, automock)]
pub trait Reducer {
    fn reduce(&self, state: &mut State, action: Action);
}

/// Centralized state container
pub struct Store {
    state: Mutex<State>,
    reducer: Box<dyn Reducer + Send + Sync>,
}

impl Store {
    /// Creates a new store with the given initial state and reducer.
    pub fn new(
        initial_state: State,
        reducer: Box<dyn Reducer + Send + Sync>,
    ) -> Self {
        Self {
            state: Mutex::new(initial_state),
            reducer,
        }
    }
}

impl StateGetter for Store {
    fn get_state(&self) -> Result<State> {
        let state = self
            .state
            .lock()
            .map_err(|e| eyre!("state lock poisoned: {e}"))?;
        Ok(state.clone())
    }
}

impl Dispatcher for Store {
    fn dispatch(&self, action: Action) -> Result<()> {
        let mut state = self
            .state
            .lock()
            .map_err(|e| eyre!("state lock poisoned: {e}"))?;
        self.reducer.reduce(&mut state, action);
        Ok(())
    }
}

#[cfg(test)]
#[path = "./store_tests.rs"]
mod tests;
