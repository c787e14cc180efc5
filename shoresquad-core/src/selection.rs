//! Selection coordinator - routes "view event" commands to the map.

use tracing::debug;

use crate::events::{EventId, EventStore};
use crate::map::MapView;

/// Zoom used when focusing an event from the list.
pub const FOCUS_ZOOM: f64 = 13.0;

/// Focus the map on the event with `id`.
///
/// Unknown ids (or events without a marker) are ignored. Returns whether the
/// map changed.
pub fn on_view(events: &EventStore, map: &mut MapView, id: EventId, zoom: f64) -> bool {
    if events.get(id).is_none() {
        debug!(event = %id, "view requested for unknown event");
        return false;
    }
    map.focus(id, zoom)
}
