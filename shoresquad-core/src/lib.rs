//! Core types for ShoreSquad
//!
//! This crate holds everything the terminal app renders, minus the rendering:
//!
//! - **Event store**: the fixed, ordered list of cleanup events
//! - **Map**: viewport math, the marker registry, focus and animated transitions
//! - **Selection**: routing a "view" command from the list to the map
//! - **Weather**: HTTP client, wire types and per-track display state
//! - **Config**: TOML configuration with built-in defaults
//!
//! # Example
//!
//! ```ignore
//! use shoresquad_core::{EventStore, MapView, TileLayer, selection};
//!
//! let events = EventStore::sample();
//! let mut map = MapView::initialize(1.3521, 103.8198, 11.0, TileLayer::default())?;
//! for event in events.iter() {
//!     map.add_marker(event)?;
//! }
//!
//! selection::on_view(&events, &mut map, EventId(1), 13.0);
//! assert_eq!(map.open_popup(), Some(EventId(1)));
//! ```

pub mod config;
pub mod error;
pub mod events;
pub mod map;
pub mod selection;
pub mod weather;

pub use config::{Config, MapSettings, WeatherSettings};
pub use error::{ConfigError, MapError, WeatherError};
pub use events::{Event, EventId, EventStore};
pub use map::{GeoPoint, MapView, Marker, MarkerRegistry, Resolution, TileLayer, Viewport};
pub use weather::{
    CurrentConditions, ForecastDay, Panel, Track, TrackStatus, ValidPeriod, WeatherClient,
    WeatherEndpoints, FORECAST_CARD_LIMIT,
};
