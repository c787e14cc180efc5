//! Error types shared across the crate.

use std::path::PathBuf;

use thiserror::Error;

use crate::events::EventId;

/// Failures creating or mutating the map view.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MapError {
    #[error("coordinates out of range: ({lat}, {lon})")]
    InvalidCoordinates { lat: f64, lon: f64 },

    #[error("zoom {zoom} outside 0..={max}")]
    ZoomOutOfRange { zoom: f64, max: f64 },

    #[error("marker already registered for event {0}")]
    DuplicateMarker(EventId),
}

/// A failed weather fetch.
///
/// Every variant collapses to the same "unavailable" view; the distinction
/// only exists for logs.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("weather service returned HTTP {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("duplicate event id {0}")]
    DuplicateEvent(EventId),

    #[error("event {id} has invalid coordinates ({lat}, {lon})")]
    InvalidEvent { id: EventId, lat: f64, lon: f64 },

    #[error("invalid map settings: {0}")]
    Map(#[from] MapError),

    #[error("refresh interval must be between one minute and one week")]
    RefreshInterval,
}
