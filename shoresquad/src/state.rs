//! Application state - the page controller
//!
//! One `AppState` is built at startup and owned by the store. It holds the
//! event store, the map (with its marker registry), the list selection and
//! both weather tracks. Components borrow it as props; only the reducer
//! mutates it.

use shoresquad_core::{
    Config, ConfigError, CurrentConditions, EventId, EventStore, ForecastDay, MapView,
    Track,
};

/// Animation tick period (spinner and map transitions)
pub const ANIM_TICK_MS: u64 = 60;

#[derive(Clone, Debug)]
pub struct AppState {
    pub events: EventStore,
    pub map: MapView,
    /// Zoom used when an event is viewed
    pub focus_zoom: f64,
    /// Highlighted row in the event list
    pub selected: usize,
    pub current: Track<CurrentConditions>,
    pub forecast: Track<Vec<ForecastDay>>,
    pub tick_count: u32,
}

impl AppState {
    pub fn new(events: EventStore, map: MapView, focus_zoom: f64) -> Self {
        Self {
            events,
            map,
            focus_zoom,
            selected: 0,
            current: Track::default(),
            forecast: Track::default(),
            tick_count: 0,
        }
    }

    /// Build the event store and map (one marker per event) from config.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let events = config.event_store()?;
        let map = config.map_view(&events)?;
        Ok(Self::new(events, map, config.map.focus_zoom))
    }

    pub fn index_of(&self, id: EventId) -> Option<usize> {
        self.events.iter().position(|event| event.id == id)
    }

    /// Whether either weather track has a fetch in flight.
    pub fn is_fetching(&self) -> bool {
        self.current.is_fetching() || self.forecast.is_fetching()
    }
}
