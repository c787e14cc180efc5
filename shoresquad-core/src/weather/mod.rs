//! Weather snapshots and per-track display state
//!
//! There are two independent tracks, current conditions and the multi-day
//! forecast. Each one moves through `Idle -> Fetching -> {Displayed |
//! Unavailable}` and re-enters `Fetching` on every refresh. A successful
//! response with no items leaves whatever was displayed before in place.

mod api;

pub use api::{
    parse_current, parse_forecast, WeatherClient, WeatherEndpoints, DEFAULT_CURRENT_URL,
    DEFAULT_FORECAST_URL,
};

use std::fmt;

use chrono::{DateTime, NaiveDate};
use serde::Deserialize;

/// Forecast cards kept from a multi-day response.
pub const FORECAST_CARD_LIMIT: usize = 4;

pub const CURRENT_UNAVAILABLE: &str = "Weather data unavailable";
pub const FORECAST_UNAVAILABLE: &str = "Forecast unavailable";

const NOT_AVAILABLE: &str = "N/A";

/// A low/high pair as reported by the service.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Range {
    pub low: f64,
    pub high: f64,
}

impl Range {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

/// Validity window of a current-conditions report.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ValidPeriod {
    pub start: String,
    pub end: String,
}

impl ValidPeriod {
    /// `HH:MM–HH:MM` in the timestamps' own offset, or the raw strings.
    pub fn label(&self) -> String {
        match (
            DateTime::parse_from_rfc3339(&self.start),
            DateTime::parse_from_rfc3339(&self.end),
        ) {
            (Ok(start), Ok(end)) => {
                format!("{}–{}", start.format("%H:%M"), end.format("%H:%M"))
            }
            _ => format!("{}–{}", self.start, self.end),
        }
    }
}

/// General conditions from the first current-conditions item.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CurrentConditions {
    pub forecast: Option<String>,
    pub humidity: Option<Range>,
    pub wind_speed: Option<Range>,
    pub valid_period: Option<ValidPeriod>,
}

impl CurrentConditions {
    pub fn forecast_text(&self) -> &str {
        self.forecast.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn humidity_text(&self) -> String {
        percent(self.humidity)
    }

    pub fn wind_text(&self) -> String {
        match self.wind_speed {
            Some(range) => format!("{range} km/h"),
            None => NOT_AVAILABLE.to_string(),
        }
    }
}

/// One day of the multi-day outlook.
#[derive(Clone, Debug, PartialEq)]
pub struct ForecastDay {
    /// Date as reported (`YYYY-MM-DD`)
    pub date: String,
    pub forecast: String,
    pub relative_humidity: Option<Range>,
}

impl ForecastDay {
    fn parsed_date(&self) -> Option<NaiveDate> {
        // Some feeds send a full timestamp; the date part is all we need.
        let day = self.date.get(..10).unwrap_or(&self.date);
        NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
    }

    /// Short weekday name, e.g. `Fri`.
    pub fn weekday_label(&self) -> String {
        self.parsed_date()
            .map(|d| d.format("%a").to_string())
            .unwrap_or_else(|| self.date.clone())
    }

    /// Short date, e.g. `12 Jun`.
    pub fn short_date(&self) -> String {
        self.parsed_date()
            .map(|d| d.format("%-d %b").to_string())
            .unwrap_or_else(|| self.date.clone())
    }

    pub fn humidity_text(&self) -> String {
        percent(self.relative_humidity)
    }
}

fn percent(range: Option<Range>) -> String {
    match range {
        Some(range) => format!("{range}%"),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// What a track's display region shows.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Panel<T> {
    /// Nothing fetched yet
    #[default]
    Empty,
    Ready(T),
    Unavailable,
}

/// Observable state of a track.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackStatus {
    Idle,
    Fetching,
    Displayed,
    Unavailable,
}

/// One fetch/render pipeline.
#[derive(Clone, Debug, PartialEq)]
pub struct Track<T> {
    panel: Panel<T>,
    in_flight: bool,
}

impl<T> Default for Track<T> {
    fn default() -> Self {
        Self {
            panel: Panel::Empty,
            in_flight: false,
        }
    }
}

impl<T> Track<T> {
    pub fn panel(&self) -> &Panel<T> {
        &self.panel
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight
    }

    pub fn status(&self) -> TrackStatus {
        if self.in_flight {
            return TrackStatus::Fetching;
        }
        match self.panel {
            Panel::Empty => TrackStatus::Idle,
            Panel::Ready(_) => TrackStatus::Displayed,
            Panel::Unavailable => TrackStatus::Unavailable,
        }
    }

    pub fn begin_fetch(&mut self) {
        self.in_flight = true;
    }

    /// Apply a successful response. `None` (no items) keeps the current panel.
    pub fn loaded(&mut self, snapshot: Option<T>) {
        self.in_flight = false;
        if let Some(snapshot) = snapshot {
            self.panel = Panel::Ready(snapshot);
        }
    }

    /// Apply a failed fetch: the panel switches to the unavailable message.
    pub fn failed(&mut self) {
        self.in_flight = false;
        self.panel = Panel::Unavailable;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(date: &str) -> ForecastDay {
        ForecastDay {
            date: date.into(),
            forecast: "Thundery showers".into(),
            relative_humidity: Some(Range::new(60.0, 95.0)),
        }
    }

    #[test]
    fn test_range_formats_like_integers() {
        assert_eq!(Range::new(70.0, 95.0).to_string(), "70-95");
        assert_eq!(Range::new(10.5, 20.0).to_string(), "10.5-20");
    }

    #[test]
    fn test_current_text_fallbacks() {
        let empty = CurrentConditions::default();
        assert_eq!(empty.forecast_text(), "N/A");
        assert_eq!(empty.humidity_text(), "N/A");
        assert_eq!(empty.wind_text(), "N/A");

        let full = CurrentConditions {
            forecast: Some("Partly Cloudy (Day)".into()),
            humidity: Some(Range::new(55.0, 90.0)),
            wind_speed: Some(Range::new(10.0, 20.0)),
            valid_period: None,
        };
        assert_eq!(full.humidity_text(), "55-90%");
        assert_eq!(full.wind_text(), "10-20 km/h");
    }

    #[test]
    fn test_forecast_day_labels() {
        let d = day("2026-06-12");
        assert_eq!(d.weekday_label(), "Fri");
        assert_eq!(d.short_date(), "12 Jun");
        assert_eq!(d.humidity_text(), "60-95%");

        let bad = day("someday");
        assert_eq!(bad.weekday_label(), "someday");
        assert_eq!(bad.short_date(), "someday");
    }

    #[test]
    fn test_valid_period_label() {
        let period = ValidPeriod {
            start: "2026-06-12T14:00:00+08:00".into(),
            end: "2026-06-12T16:00:00+08:00".into(),
        };
        assert_eq!(period.label(), "14:00–16:00");

        let raw = ValidPeriod {
            start: "soon".into(),
            end: "later".into(),
        };
        assert_eq!(raw.label(), "soon–later");
    }

    #[test]
    fn test_track_lifecycle() {
        let mut track: Track<u8> = Track::default();
        assert_eq!(track.status(), TrackStatus::Idle);

        track.begin_fetch();
        assert_eq!(track.status(), TrackStatus::Fetching);

        track.loaded(Some(7));
        assert_eq!(track.status(), TrackStatus::Displayed);
        assert_eq!(track.panel(), &Panel::Ready(7));

        track.begin_fetch();
        track.failed();
        assert_eq!(track.status(), TrackStatus::Unavailable);
        assert_eq!(track.panel(), &Panel::Unavailable);
    }

    #[test]
    fn test_empty_response_keeps_panel() {
        let mut track = Track::default();
        track.loaded(Some("sunny"));

        track.begin_fetch();
        track.loaded(None);

        assert_eq!(track.panel(), &Panel::Ready("sunny"));
        assert_eq!(track.status(), TrackStatus::Displayed);
    }
}
