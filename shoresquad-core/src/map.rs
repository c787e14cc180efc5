//! Map model - viewport, markers and popups
//!
//! `MapView` is the state behind the map widget. It owns the marker registry
//! (one marker per event, keyed by event id) and the committed viewport.
//! Recentering is animated: the committed viewport changes immediately while
//! [`MapView::displayed_view`] eases towards it over a few animation ticks.
//!
//! # Projection
//!
//! The viewport follows slippy-map scale: the whole world is
//! `256 * 2^zoom` pixels wide, and one terminal cell is treated as
//! 8x16 pixels. Latitude spans are corrected by `cos(lat)`, which is
//! accurate enough at city scale.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::MapError;
use crate::events::{Event, EventId};

/// Highest zoom supported by the background layer.
pub const MAX_ZOOM: f64 = 19.0;

/// Animation ticks used for a focus transition.
pub const TRANSITION_STEPS: u16 = 8;

const TILE_SIZE_PX: f64 = 256.0;
const CELL_WIDTH_PX: f64 = 8.0;
const CELL_HEIGHT_PX: f64 = 16.0;

/// A latitude/longitude pair in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }

    fn lerp(self, to: GeoPoint, t: f64) -> GeoPoint {
        GeoPoint {
            lat: self.lat + (to.lat - self.lat) * t,
            lon: self.lon + (to.lon - self.lon) * t,
        }
    }
}

/// Detail level of the coastline background.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resolution {
    Low,
    #[default]
    High,
}

/// Background layer attached to the map on initialization.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileLayer {
    pub resolution: Resolution,
    pub max_zoom: f64,
}

impl Default for TileLayer {
    fn default() -> Self {
        Self {
            resolution: Resolution::default(),
            max_zoom: MAX_ZOOM,
        }
    }
}

/// Center + zoom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub center: GeoPoint,
    pub zoom: f64,
}

impl Viewport {
    pub fn new(center: GeoPoint, zoom: f64) -> Self {
        Self { center, zoom }
    }

    /// Degrees of longitude covered by one terminal column.
    pub fn degrees_per_column(&self) -> f64 {
        360.0 / (TILE_SIZE_PX * 2f64.powf(self.zoom)) * CELL_WIDTH_PX
    }

    /// Degrees of latitude covered by one terminal row.
    pub fn degrees_per_row(&self) -> f64 {
        self.degrees_per_column()
            * (CELL_HEIGHT_PX / CELL_WIDTH_PX)
            * self.center.lat.to_radians().cos()
    }

    /// Canvas bounds (`[lon_min, lon_max]`, `[lat_min, lat_max]`) for an area
    /// of `cols` x `rows` cells.
    pub fn bounds(&self, cols: u16, rows: u16) -> ([f64; 2], [f64; 2]) {
        let half_w = self.degrees_per_column() * f64::from(cols) / 2.0;
        let half_h = self.degrees_per_row() * f64::from(rows) / 2.0;
        (
            [self.center.lon - half_w, self.center.lon + half_w],
            [self.center.lat - half_h, self.center.lat + half_h],
        )
    }

    pub fn contains(&self, point: GeoPoint, cols: u16, rows: u16) -> bool {
        let ([x_min, x_max], [y_min, y_max]) = self.bounds(cols, rows);
        (x_min..=x_max).contains(&point.lon) && (y_min..=y_max).contains(&point.lat)
    }

    fn lerp(self, to: Viewport, t: f64) -> Viewport {
        Viewport {
            center: self.center.lerp(to.center, t),
            zoom: self.zoom + (to.zoom - self.zoom) * t,
        }
    }
}

/// Popup content bound to a marker.
#[derive(Clone, Debug, PartialEq)]
pub struct Popup {
    pub title: String,
    pub date: String,
}

/// A pin on the map for one event.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub event_id: EventId,
    pub position: GeoPoint,
    pub popup: Popup,
}

/// Event id -> marker. Filled once at startup; lookups only afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MarkerRegistry {
    markers: BTreeMap<EventId, Marker>,
}

impl MarkerRegistry {
    fn insert(&mut self, marker: Marker) -> Result<&Marker, MapError> {
        use std::collections::btree_map::Entry;

        match self.markers.entry(marker.event_id) {
            Entry::Occupied(_) => Err(MapError::DuplicateMarker(marker.event_id)),
            Entry::Vacant(slot) => Ok(slot.insert(marker)),
        }
    }

    pub fn get(&self, id: EventId) -> Option<&Marker> {
        self.markers.get(&id)
    }

    pub fn contains(&self, id: EventId) -> bool {
        self.markers.contains_key(&id)
    }

    pub fn ids(&self) -> impl Iterator<Item = EventId> + '_ {
        self.markers.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Marker> {
        self.markers.values()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Transition {
    from: Viewport,
    step: u16,
}

/// The map widget state.
#[derive(Clone, Debug, PartialEq)]
pub struct MapView {
    view: Viewport,
    layer: TileLayer,
    markers: MarkerRegistry,
    open_popup: Option<EventId>,
    transition: Option<Transition>,
}

impl MapView {
    /// Create a map centered at the given coordinates with a background layer.
    pub fn initialize(lat: f64, lon: f64, zoom: f64, layer: TileLayer) -> Result<Self, MapError> {
        let center = GeoPoint::new(lat, lon);
        if !center.is_valid() {
            return Err(MapError::InvalidCoordinates { lat, lon });
        }
        check_zoom(zoom, layer.max_zoom)?;

        Ok(Self {
            view: Viewport::new(center, zoom),
            layer,
            markers: MarkerRegistry::default(),
            open_popup: None,
            transition: None,
        })
    }

    /// Place a marker for `event` with a title/date popup.
    pub fn add_marker(&mut self, event: &Event) -> Result<&Marker, MapError> {
        let position = event.location();
        if !position.is_valid() {
            return Err(MapError::InvalidCoordinates {
                lat: event.lat,
                lon: event.lon,
            });
        }
        self.markers.insert(Marker {
            event_id: event.id,
            position,
            popup: Popup {
                title: event.title.clone(),
                date: event.date.clone(),
            },
        })
    }

    /// Recenter on a marker and open its popup.
    ///
    /// Returns `false` (and leaves the map untouched) when no marker is
    /// registered for `id`. Zoom is clamped to the layer's range.
    pub fn focus(&mut self, id: EventId, zoom: f64) -> bool {
        let Some(marker) = self.markers.get(id) else {
            return false;
        };

        let target = Viewport::new(marker.position, zoom.clamp(0.0, self.layer.max_zoom));
        let from = self.displayed_view();
        self.view = target;
        self.open_popup = Some(id);
        self.transition = (from != target).then_some(Transition { from, step: 0 });
        true
    }

    /// Advance the focus animation by one tick.
    ///
    /// Returns `true` if the displayed viewport moved.
    pub fn advance_transition(&mut self) -> bool {
        let Some(transition) = self.transition.as_mut() else {
            return false;
        };
        transition.step += 1;
        if transition.step >= TRANSITION_STEPS {
            self.transition = None;
        }
        true
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// The committed viewport (animation target).
    pub fn view(&self) -> &Viewport {
        &self.view
    }

    /// The viewport to draw this frame.
    pub fn displayed_view(&self) -> Viewport {
        match self.transition {
            Some(Transition { from, step }) => {
                let t = f64::from(step) / f64::from(TRANSITION_STEPS);
                from.lerp(self.view, ease_out(t))
            }
            None => self.view,
        }
    }

    pub fn layer(&self) -> &TileLayer {
        &self.layer
    }

    pub fn markers(&self) -> &MarkerRegistry {
        &self.markers
    }

    pub fn open_popup(&self) -> Option<EventId> {
        self.open_popup
    }

    /// Marker whose popup is open.
    pub fn open_marker(&self) -> Option<&Marker> {
        self.open_popup.and_then(|id| self.markers.get(id))
    }

    pub fn close_popup(&mut self) -> bool {
        self.open_popup.take().is_some()
    }
}

pub(crate) fn check_zoom(zoom: f64, max: f64) -> Result<(), MapError> {
    if zoom.is_finite() && (0.0..=max).contains(&zoom) {
        Ok(())
    } else {
        Err(MapError::ZoomOutOfRange { zoom, max })
    }
}

/// Cubic ease-out.
fn ease_out(t: f64) -> f64 {
    1.0 - (1.0 - t.clamp(0.0, 1.0)).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sunrise() -> Event {
        Event::new(
            1,
            "Sunrise Shore Cleanup",
            1.381497,
            103.955574,
            "2026-06-12",
            12,
        )
    }

    fn singapore() -> MapView {
        MapView::initialize(1.3521, 103.8198, 11.0, TileLayer::default()).unwrap()
    }

    #[test]
    fn test_initialize_rejects_bad_input() {
        assert!(matches!(
            MapView::initialize(120.0, 0.0, 5.0, TileLayer::default()),
            Err(MapError::InvalidCoordinates { .. })
        ));
        assert!(matches!(
            MapView::initialize(0.0, 0.0, 20.0, TileLayer::default()),
            Err(MapError::ZoomOutOfRange { .. })
        ));
    }

    #[test]
    fn test_add_marker_once() {
        let mut map = singapore();
        let event = sunrise();

        let marker = map.add_marker(&event).unwrap();
        assert_eq!(marker.popup.title, "Sunrise Shore Cleanup");
        assert_eq!(marker.popup.date, "2026-06-12");

        assert_eq!(
            map.add_marker(&event),
            Err(MapError::DuplicateMarker(EventId(1)))
        );
        assert_eq!(map.markers().len(), 1);
    }

    #[test]
    fn test_focus_recenters_exactly() {
        let mut map = singapore();
        map.add_marker(&sunrise()).unwrap();

        assert!(map.focus(EventId(1), 13.0));

        let view = map.view();
        assert_eq!(view.center, GeoPoint::new(1.381497, 103.955574));
        assert_eq!(view.zoom, 13.0);
        assert_eq!(map.open_popup(), Some(EventId(1)));
        assert!(map.is_animating());
    }

    #[test]
    fn test_focus_unknown_id_is_noop() {
        let mut map = singapore();
        map.add_marker(&sunrise()).unwrap();
        let before = map.clone();

        assert!(!map.focus(EventId(99), 13.0));
        assert_eq!(map, before);
    }

    #[test]
    fn test_transition_settles_on_target() {
        let mut map = singapore();
        map.add_marker(&sunrise()).unwrap();
        map.focus(EventId(1), 13.0);

        let start = map.displayed_view();
        assert_eq!(start.center, GeoPoint::new(1.3521, 103.8198));

        let mut ticks = 0;
        while map.advance_transition() {
            ticks += 1;
        }
        assert_eq!(ticks, TRANSITION_STEPS);
        assert_eq!(map.displayed_view(), *map.view());
        assert!(!map.advance_transition());
    }

    #[test]
    fn test_focus_clamps_zoom() {
        let mut map = singapore();
        map.add_marker(&sunrise()).unwrap();
        map.focus(EventId(1), 42.0);
        assert_eq!(map.view().zoom, MAX_ZOOM);
    }

    #[test]
    fn test_bounds_shrink_with_zoom() {
        let wide = Viewport::new(GeoPoint::new(1.35, 103.82), 11.0);
        let close = Viewport::new(GeoPoint::new(1.35, 103.82), 13.0);

        let ([w0, w1], _) = wide.bounds(60, 20);
        let ([c0, c1], _) = close.bounds(60, 20);
        assert!((w1 - w0) > (c1 - c0) * 3.9);
        assert!((w1 - w0 - 4.0 * (c1 - c0)).abs() < 1e-9);
    }

    #[test]
    fn test_viewport_contains_center_and_excludes_far_points() {
        let view = Viewport::new(GeoPoint::new(1.3521, 103.8198), 11.0);
        assert!(view.contains(GeoPoint::new(1.3521, 103.8198), 60, 20));
        assert!(view.contains(GeoPoint::new(1.381497, 103.955574), 60, 20));
        assert!(!view.contains(GeoPoint::new(51.5, -0.12), 60, 20));
    }
}
