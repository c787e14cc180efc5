//! Reducer - (state, action) -> (changed, effects)
//!
//! All state mutations happen here. The weather fetches themselves are
//! returned as effects so this stays synchronous and side-effect free.

use shoresquad_core::selection;

use crate::action::Action;
use crate::effect::{DispatchResult, Effect};
use crate::state::AppState;

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult {
    match action {
        // ===== Events =====
        Action::EventView(id) => {
            let focused = selection::on_view(&state.events, &mut state.map, id, state.focus_zoom);
            if focused {
                if let Some(index) = state.index_of(id) {
                    state.selected = index;
                }
            }
            DispatchResult::changed_if(focused)
        }

        // ===== List =====
        Action::ListSelectNext => {
            let last = state.events.len().saturating_sub(1);
            let next = (state.selected + 1).min(last);
            let moved = next != state.selected;
            state.selected = next;
            DispatchResult::changed_if(moved)
        }

        Action::ListSelectPrev => {
            let prev = state.selected.saturating_sub(1);
            let moved = prev != state.selected;
            state.selected = prev;
            DispatchResult::changed_if(moved)
        }

        // ===== Map =====
        Action::MapPopupClose => DispatchResult::changed_if(state.map.close_popup()),

        // ===== Weather =====
        Action::WeatherRefresh => {
            state.current.begin_fetch();
            state.forecast.begin_fetch();
            DispatchResult::changed_with_many(vec![Effect::FetchCurrent, Effect::FetchForecast])
        }

        Action::WeatherCurrentDidLoad(snapshot) => {
            state.current.loaded(snapshot);
            DispatchResult::changed()
        }

        Action::WeatherCurrentDidError(_) => {
            state.current.failed();
            DispatchResult::changed()
        }

        Action::WeatherForecastDidLoad(days) => {
            state.forecast.loaded(days);
            DispatchResult::changed()
        }

        Action::WeatherForecastDidError(_) => {
            state.forecast.failed();
            DispatchResult::changed()
        }

        // ===== Global =====
        Action::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            let moved = state.map.advance_transition();
            // re-render only while something animates
            DispatchResult::changed_if(moved || state.is_fetching())
        }

        // Handled by the runtime loop
        Action::Quit => DispatchResult::unchanged(),
    }
}
