//! Event store - the fixed list of cleanup events
//!
//! The store is built once at startup and never mutated. Both the map and
//! the event list iterate it in insertion order.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::map::GeoPoint;

/// Unique event identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub u32);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A scheduled cleanup activity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub lat: f64,
    pub lon: f64,
    /// Calendar date as given (`YYYY-MM-DD`)
    pub date: String,
    /// Remaining capacity
    pub spots: u32,
}

impl Event {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        lat: f64,
        lon: f64,
        date: impl Into<String>,
        spots: u32,
    ) -> Self {
        Self {
            id: EventId(id),
            title: title.into(),
            lat,
            lon,
            date: date.into(),
            spots,
        }
    }

    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }
}

/// Read-only, ordered collection of events with unique ids.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    /// Build a store, rejecting duplicate ids and out-of-range coordinates.
    pub fn new(events: Vec<Event>) -> Result<Self, ConfigError> {
        let mut seen = HashSet::with_capacity(events.len());
        for event in &events {
            if !seen.insert(event.id) {
                return Err(ConfigError::DuplicateEvent(event.id));
            }
            if !event.location().is_valid() {
                return Err(ConfigError::InvalidEvent {
                    id: event.id,
                    lat: event.lat,
                    lon: event.lon,
                });
            }
        }
        Ok(Self { events })
    }

    /// The built-in sample events.
    pub fn sample() -> Self {
        Self {
            events: sample_events(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    pub fn as_slice(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = EventId> + '_ {
        self.events.iter().map(|event| event.id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl<'a> IntoIterator for &'a EventStore {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

pub fn sample_events() -> Vec<Event> {
    vec![
        Event::new(
            1,
            "Sunrise Shore Cleanup",
            1.381497,
            103.955574,
            "2026-06-12",
            12,
        ),
        Event::new(2, "Junior Crew Coastal Sweep", 1.35, 103.8, "2026-06-19", 20),
        Event::new(3, "Community Beach Day", 1.3, 103.75, "2026-07-02", 30),
    ]
}
