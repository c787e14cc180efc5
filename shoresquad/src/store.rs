//! Centralized state store
//!
//! The store owns the [`AppState`] and is the single place actions are
//! applied. Each dispatch returns whether a re-render is needed plus the
//! effects the runtime should run.

use tracing::debug;

use crate::action::Action;
use crate::effect::DispatchResult;
use crate::reducer::reducer;
use crate::state::AppState;

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Apply an action through the reducer.
    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        if !action.is_noisy() {
            debug!(action = %action.summary(), "dispatch");
        }
        reducer(&mut self.state, action)
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }
}
