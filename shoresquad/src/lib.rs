//! ShoreSquad - terminal dashboard for beach-cleanup events
//!
//! The app follows a Redux/Elm-style loop:
//! 1. Terminal event -> `Component::handle_event()` -> actions
//! 2. Actions dispatched to the `Store`
//! 3. Reducer updates `AppState` and returns effects
//! 4. Effects spawn keyed tasks (weather fetches) on the `TaskManager`
//! 5. Task results come back as `*Did*` actions
//! 6. If state changed, re-render
//!
//! Interval subscriptions drive the animation tick and the weather refresh.

pub mod action;
pub mod components;
pub mod effect;
pub mod event;
pub mod reducer;
pub mod runtime;
pub mod state;
pub mod store;
pub mod subscriptions;
pub mod tasks;
pub mod testing;
