//! Root component - lays out every region and routes input
//!
//! ```text
//! ┌ ShoreSquad ──────────────────────────────────┐
//! │ map                          │ event list    │
//! │──────────────────────────────┼───────────────│
//! │ current conditions │ 4-day outlook           │
//! │ help bar                                     │
//! └──────────────────────────────────────────────┘
//! ```

use crossterm::event::{KeyCode, KeyEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    widgets::{Block, Borders},
    Frame,
};

use super::{
    Component, CurrentWeather, CurrentWeatherProps, EventList, EventListProps, ForecastGrid,
    ForecastGridProps, HelpBar, HelpBarProps, MapPanel, MapPanelProps,
};
use crate::action::Action;
use crate::event::EventKind;
use crate::state::AppState;

/// Height of the weather row, borders included.
const WEATHER_HEIGHT: u16 = 8;

pub struct DashboardProps<'a> {
    pub state: &'a AppState,
}

#[derive(Default)]
pub struct Dashboard {
    map: MapPanel,
    list: EventList,
    current: CurrentWeather,
    forecast: ForecastGrid,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component for Dashboard {
    type Props<'a> = DashboardProps<'a>;

    fn handle_event(&mut self, event: &EventKind, props: DashboardProps<'_>) -> Vec<Action> {
        let state = props.state;
        let list_props = EventListProps {
            events: &state.events,
            selected: state.selected,
        };

        match event {
            EventKind::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') => vec![Action::Quit],
                KeyCode::Char('r') | KeyCode::F(5) => vec![Action::WeatherRefresh],
                KeyCode::Esc => vec![Action::MapPopupClose],
                _ => self.list.handle_event(event, list_props),
            },
            EventKind::Mouse(_) => self.list.handle_event(event, list_props),
            _ => vec![],
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: DashboardProps<'_>) {
        let state = props.state;

        let outer = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(80, 80, 100)))
            .title(" ShoreSquad ")
            .title_style(Style::default().fg(Color::Cyan).bold())
            .title_alignment(Alignment::Center);
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        let [top, weather, help] = Layout::vertical([
            Constraint::Min(6),
            Constraint::Length(WEATHER_HEIGHT),
            Constraint::Length(1),
        ])
        .areas(inner);
        let [map_area, list_area] =
            Layout::horizontal([Constraint::Percentage(62), Constraint::Percentage(38)])
                .areas(top);
        let [current_area, forecast_area] =
            Layout::horizontal([Constraint::Percentage(36), Constraint::Percentage(64)])
                .areas(weather);

        self.map
            .render(frame, map_area, MapPanelProps { map: &state.map });
        self.list.render(
            frame,
            list_area,
            EventListProps {
                events: &state.events,
                selected: state.selected,
            },
        );
        self.current.render(
            frame,
            current_area,
            CurrentWeatherProps {
                track: &state.current,
                tick_count: state.tick_count,
            },
        );
        self.forecast.render(
            frame,
            forecast_area,
            ForecastGridProps {
                track: &state.forecast,
                tick_count: state.tick_count,
            },
        );
        HelpBar.render(frame, help, HelpBarProps);
    }
}
