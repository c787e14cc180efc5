//! UI components
//!
//! Components are pure views over borrowed props:
//! - `Props<'a>`: read-only data for rendering, borrowed from state
//! - `handle_event`: receives an `EventKind`, returns actions
//! - `render`: draws the props; only UI-local state (scroll offsets, hit
//!   areas) lives in `&mut self`

use ratatui::{layout::Rect, Frame};

use crate::action::Action;
use crate::event::EventKind;

pub mod current_weather;
pub mod dashboard;
pub mod event_list;
pub mod forecast_grid;
pub mod help_bar;
pub mod map_panel;

pub use current_weather::{CurrentWeather, CurrentWeatherProps};
pub use dashboard::{Dashboard, DashboardProps};
pub use event_list::{list_rows, EventList, EventListProps, ListRow};
pub use forecast_grid::{ForecastGrid, ForecastGridProps};
pub use help_bar::{HelpBar, HelpBarProps};
pub use map_panel::{MapPanel, MapPanelProps};

pub const SPINNERS: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Spinner frame for the given animation tick.
pub fn spinner(tick_count: u32) -> &'static str {
    SPINNERS[(tick_count as usize / 2) % SPINNERS.len()]
}

pub trait Component {
    type Props<'a>;

    /// Handle an event and return actions to dispatch.
    ///
    /// Render-only components keep the default.
    #[allow(unused_variables)]
    fn handle_event(&mut self, event: &EventKind, props: Self::Props<'_>) -> Vec<Action> {
        vec![]
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}
