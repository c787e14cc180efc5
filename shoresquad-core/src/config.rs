//! Configuration - TOML file with built-in defaults
//!
//! Every section is optional. A missing file at the default location means
//! "use the defaults"; a missing file that was asked for explicitly is an
//! error.
//!
//! ```toml
//! [map]
//! center_lat = 1.3521
//! center_lon = 103.8198
//! zoom = 11
//! focus_zoom = 13
//! resolution = "high"
//!
//! [weather]
//! current_url = "https://api.data.gov.sg/v1/environment/2-hour-weather"
//! forecast_url = "https://api.data.gov.sg/v1/environment/4-day-outlook"
//! refresh_minutes = 30
//! timeout_secs = 15
//!
//! [[events]]
//! id = 1
//! title = "Sunrise Shore Cleanup"
//! lat = 1.381497
//! lon = 103.955574
//! date = "2026-06-12"
//! spots = 12
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::ConfigError;
use crate::events::{sample_events, Event, EventStore};
use crate::map::{check_zoom, MapView, Resolution, TileLayer, MAX_ZOOM};
use crate::selection::FOCUS_ZOOM;
use crate::weather::WeatherEndpoints;

const APP_DIR: &str = "shoresquad";
const CONFIG_FILE: &str = "config.toml";

/// Longest accepted refresh interval (one week).
pub const MAX_REFRESH_MINUTES: u64 = 7 * 24 * 60;

fn default_refresh_minutes() -> u64 {
    30
}

fn default_timeout_secs() -> u64 {
    15
}

/// Map center, zoom levels and background detail.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MapSettings {
    pub center_lat: f64,
    pub center_lon: f64,
    pub zoom: f64,
    pub focus_zoom: f64,
    pub resolution: Resolution,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            center_lat: 1.3521,
            center_lon: 103.8198,
            zoom: 11.0,
            focus_zoom: FOCUS_ZOOM,
            resolution: Resolution::High,
        }
    }
}

impl MapSettings {
    pub fn tile_layer(&self) -> TileLayer {
        TileLayer {
            resolution: self.resolution,
            max_zoom: MAX_ZOOM,
        }
    }
}

/// Weather endpoints and refresh schedule.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeatherSettings {
    #[serde(default)]
    pub current_url: Option<String>,
    #[serde(default)]
    pub forecast_url: Option<String>,
    #[serde(default = "default_refresh_minutes")]
    pub refresh_minutes: u64,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for WeatherSettings {
    fn default() -> Self {
        Self {
            current_url: None,
            forecast_url: None,
            refresh_minutes: default_refresh_minutes(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl WeatherSettings {
    pub fn endpoints(&self) -> WeatherEndpoints {
        let defaults = WeatherEndpoints::default();
        WeatherEndpoints {
            current: self.current_url.clone().unwrap_or(defaults.current),
            forecast: self.forecast_url.clone().unwrap_or(defaults.forecast),
        }
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_minutes.saturating_mul(60))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Full application configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub map: MapSettings,
    pub weather: WeatherSettings,
    pub events: Vec<Event>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            map: MapSettings::default(),
            weather: WeatherSettings::default(),
            events: sample_events(),
        }
    }
}

impl Config {
    /// `<config_dir>/shoresquad/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load from `path`, or from the default location if it exists.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.exists() => path,
                _ => {
                    debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let raw = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let config = Self::from_toml(&raw, &path)?;
        info!(path = %path.display(), events = config.events.len(), "loaded config");
        Ok(config)
    }

    /// Parse and validate a TOML document. `path` is only used in errors.
    pub fn from_toml(raw: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_REFRESH_MINUTES).contains(&self.weather.refresh_minutes) {
            return Err(ConfigError::RefreshInterval);
        }
        let layer = self.map.tile_layer();
        MapView::initialize(self.map.center_lat, self.map.center_lon, self.map.zoom, layer)?;
        check_zoom(self.map.focus_zoom, layer.max_zoom)?;
        EventStore::new(self.events.clone())?;
        Ok(())
    }

    pub fn event_store(&self) -> Result<EventStore, ConfigError> {
        EventStore::new(self.events.clone())
    }

    /// Initialize the map and place one marker per event.
    pub fn map_view(&self, events: &EventStore) -> Result<MapView, ConfigError> {
        let mut map = MapView::initialize(
            self.map.center_lat,
            self.map.center_lon,
            self.map.zoom,
            self.map.tile_layer(),
        )?;
        for event in events {
            map.add_marker(event)?;
        }
        Ok(map)
    }
}
