//! Actions - every state change goes through one of these
//!
//! Naming follows the intent/result convention:
//! - Prefix names the area: `Event*`, `List*`, `Map*`, `Weather*`
//! - `Did` marks the result of an async task (`WeatherCurrentDidLoad`)

use shoresquad_core::{CurrentConditions, EventId, ForecastDay};

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    // ===== Events =====
    /// "View" on a list item: focus the map on that event
    EventView(EventId),

    // ===== List =====
    ListSelectNext,
    ListSelectPrev,

    // ===== Map =====
    MapPopupClose,

    // ===== Weather =====
    /// Intent: refresh both tracks (spawns two fetch tasks)
    WeatherRefresh,

    /// Result: current conditions fetched. `None` = response had no items
    WeatherCurrentDidLoad(Option<CurrentConditions>),

    /// Result: current conditions fetch failed
    WeatherCurrentDidError(String),

    /// Result: forecast fetched. `None` = response had no items
    WeatherForecastDidLoad(Option<Vec<ForecastDay>>),

    /// Result: forecast fetch failed
    WeatherForecastDidError(String),

    // ===== Global =====
    /// Animation tick
    Tick,

    Quit,
}

impl Action {
    /// Variant name, for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Action::EventView(_) => "EventView",
            Action::ListSelectNext => "ListSelectNext",
            Action::ListSelectPrev => "ListSelectPrev",
            Action::MapPopupClose => "MapPopupClose",
            Action::WeatherRefresh => "WeatherRefresh",
            Action::WeatherCurrentDidLoad(_) => "WeatherCurrentDidLoad",
            Action::WeatherCurrentDidError(_) => "WeatherCurrentDidError",
            Action::WeatherForecastDidLoad(_) => "WeatherForecastDidLoad",
            Action::WeatherForecastDidError(_) => "WeatherForecastDidError",
            Action::Tick => "Tick",
            Action::Quit => "Quit",
        }
    }

    /// Concise one-line description; data-heavy variants are shortened.
    pub fn summary(&self) -> String {
        match self {
            Action::WeatherCurrentDidLoad(Some(current)) => {
                format!("WeatherCurrentDidLoad {{ forecast: {:?} }}", current.forecast_text())
            }
            Action::WeatherForecastDidLoad(Some(days)) => {
                format!("WeatherForecastDidLoad {{ days: {} }}", days.len())
            }
            Action::WeatherCurrentDidError(e) | Action::WeatherForecastDidError(e) => {
                let msg = if e.len() > 40 {
                    format!("{}...", e.chars().take(37).collect::<String>())
                } else {
                    e.clone()
                };
                format!("{}({:?})", self.name(), msg)
            }
            _ => format!("{:?}", self),
        }
    }

    /// High-frequency actions that would flood the log.
    pub fn is_noisy(&self) -> bool {
        matches!(self, Action::Tick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_truncates_errors() {
        let action = Action::WeatherCurrentDidError("x".repeat(80));
        let summary = action.summary();
        assert!(summary.starts_with("WeatherCurrentDidError(\""));
        assert!(summary.contains("..."));
        assert!(summary.len() < 80);
    }

    #[test]
    fn test_summary_shortens_forecast() {
        let action = Action::WeatherForecastDidLoad(Some(vec![]));
        assert_eq!(action.summary(), "WeatherForecastDidLoad { days: 0 }");
    }

    #[test]
    fn test_simple_summary_is_debug() {
        assert_eq!(Action::EventView(EventId(3)).summary(), "EventView(EventId(3))");
        assert_eq!(Action::Quit.name(), "Quit");
    }
}
