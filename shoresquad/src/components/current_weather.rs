//! Current conditions panel

use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use shoresquad_core::weather::CURRENT_UNAVAILABLE;
use shoresquad_core::{CurrentConditions, Panel, Track};

use super::{spinner, Component};

pub struct CurrentWeatherProps<'a> {
    pub track: &'a Track<CurrentConditions>,
    pub tick_count: u32,
}

#[derive(Default)]
pub struct CurrentWeather;

impl Component for CurrentWeather {
    type Props<'a> = CurrentWeatherProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: CurrentWeatherProps<'_>) {
        let title = if props.track.is_fetching() {
            format!(" Current Conditions {} ", spinner(props.tick_count))
        } else {
            " Current Conditions ".to_string()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(80, 80, 100)))
            .title(title)
            .title_style(Style::default().fg(Color::Cyan).bold());

        let lines = match props.track.panel() {
            Panel::Empty => vec![Line::from("Fetching weather...").fg(Color::DarkGray)],
            Panel::Unavailable => vec![Line::from(CURRENT_UNAVAILABLE).fg(Color::DarkGray)],
            Panel::Ready(current) => conditions_lines(current),
        };

        frame.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
            area,
        );
    }
}

fn conditions_lines(current: &CurrentConditions) -> Vec<Line<'static>> {
    let muted = Style::default().fg(Color::DarkGray);
    let mut lines = vec![
        Line::from(current.forecast_text().to_string()).bold(),
        Line::styled(format!("Humidity: {}", current.humidity_text()), muted),
        Line::styled(format!("Wind: {}", current.wind_text()), muted),
    ];
    if let Some(period) = &current.valid_period {
        lines.push(Line::styled(format!("Valid {}", period.label()), muted));
    }
    lines
}
