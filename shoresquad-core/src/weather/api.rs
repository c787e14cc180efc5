//! HTTP client for the current-conditions and multi-day endpoints.

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use super::{CurrentConditions, ForecastDay, Range, ValidPeriod, FORECAST_CARD_LIMIT};
use crate::error::WeatherError;

pub const DEFAULT_CURRENT_URL: &str = "https://api.data.gov.sg/v1/environment/2-hour-weather";
pub const DEFAULT_FORECAST_URL: &str = "https://api.data.gov.sg/v1/environment/4-day-outlook";

const USER_AGENT: &str = concat!("shoresquad/", env!("CARGO_PKG_VERSION"));

/// Endpoint URLs for both tracks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeatherEndpoints {
    pub current: String,
    pub forecast: String,
}

impl Default for WeatherEndpoints {
    fn default() -> Self {
        Self {
            current: DEFAULT_CURRENT_URL.to_string(),
            forecast: DEFAULT_FORECAST_URL.to_string(),
        }
    }
}

// ── Wire types ────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    #[serde(default)]
    items: Vec<CurrentItem>,
    #[serde(default)]
    metadata: Option<Metadata>,
}

#[derive(Debug, Deserialize)]
struct Metadata {
    #[serde(default)]
    valid_period: Option<ValidPeriod>,
}

#[derive(Debug, Deserialize)]
struct CurrentItem {
    #[serde(default)]
    general: Option<General>,
    #[serde(default)]
    valid_period: Option<ValidPeriod>,
}

#[derive(Debug, Default, Deserialize)]
struct General {
    #[serde(default)]
    forecast: Option<String>,
    #[serde(default)]
    humidity: Option<Range>,
    #[serde(default)]
    wind: Option<Wind>,
}

#[derive(Debug, Deserialize)]
struct Wind {
    #[serde(default)]
    speed: Option<Range>,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    #[serde(default)]
    items: Vec<ForecastItem>,
}

#[derive(Debug, Deserialize)]
struct ForecastItem {
    #[serde(default)]
    forecasts: Vec<ForecastEntry>,
}

#[derive(Debug, Deserialize)]
struct ForecastEntry {
    date: String,
    #[serde(default)]
    forecast: String,
    #[serde(default)]
    relative_humidity: Option<Range>,
}

// ── Parsing ───────────────────────────────────────────────────────────

/// Decode a current-conditions body. `Ok(None)` means the item list was empty.
pub fn parse_current(body: &[u8]) -> Result<Option<CurrentConditions>, WeatherError> {
    let response: CurrentResponse = serde_json::from_slice(body)?;
    let metadata_period = response.metadata.and_then(|m| m.valid_period);

    Ok(response.items.into_iter().next().map(|item| {
        let general = item.general.unwrap_or_default();
        CurrentConditions {
            forecast: general.forecast,
            humidity: general.humidity,
            wind_speed: general.wind.and_then(|w| w.speed),
            valid_period: metadata_period.or(item.valid_period),
        }
    }))
}

/// Decode a multi-day body, keeping at most [`FORECAST_CARD_LIMIT`] days.
/// `Ok(None)` means the item list was empty.
pub fn parse_forecast(body: &[u8]) -> Result<Option<Vec<ForecastDay>>, WeatherError> {
    let response: ForecastResponse = serde_json::from_slice(body)?;

    Ok(response.items.into_iter().next().map(|item| {
        item.forecasts
            .into_iter()
            .take(FORECAST_CARD_LIMIT)
            .map(|entry| ForecastDay {
                date: entry.date,
                forecast: entry.forecast,
                relative_humidity: entry.relative_humidity,
            })
            .collect()
    }))
}

// ── Client ────────────────────────────────────────────────────────────

/// Weather service client. Cheap to clone; clones share a connection pool.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: reqwest::Client,
    endpoints: WeatherEndpoints,
}

impl WeatherClient {
    pub fn new(endpoints: WeatherEndpoints, timeout: Duration) -> Result<Self, WeatherError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(WeatherError::Transport)?;

        Ok(Self::with_http(client, endpoints))
    }

    /// Use a preconfigured HTTP client.
    pub fn with_http(client: reqwest::Client, endpoints: WeatherEndpoints) -> Self {
        Self { client, endpoints }
    }

    pub fn endpoints(&self) -> &WeatherEndpoints {
        &self.endpoints
    }

    /// Fetch current conditions.
    pub async fn fetch_current(&self) -> Result<Option<CurrentConditions>, WeatherError> {
        let body = self.get(&self.endpoints.current).await?;
        parse_current(&body)
    }

    /// Fetch the multi-day forecast.
    pub async fn fetch_forecast(&self) -> Result<Option<Vec<ForecastDay>>, WeatherError> {
        let body = self.get(&self.endpoints.forecast).await?;
        parse_forecast(&body)
    }

    async fn get(&self, url: &str) -> Result<Vec<u8>, WeatherError> {
        debug!(%url, "fetching weather");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(WeatherError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::Status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(WeatherError::Transport)?;
        Ok(body.to_vec())
    }
}
