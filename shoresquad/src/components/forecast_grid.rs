//! Multi-day forecast cards

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use shoresquad_core::weather::FORECAST_UNAVAILABLE;
use shoresquad_core::{ForecastDay, Panel, Track, FORECAST_CARD_LIMIT};

use super::{spinner, Component};

pub struct ForecastGridProps<'a> {
    pub track: &'a Track<Vec<ForecastDay>>,
    pub tick_count: u32,
}

#[derive(Default)]
pub struct ForecastGrid;

impl Component for ForecastGrid {
    type Props<'a> = ForecastGridProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: ForecastGridProps<'_>) {
        let title = if props.track.is_fetching() {
            format!(" 4-Day Outlook {} ", spinner(props.tick_count))
        } else {
            " 4-Day Outlook ".to_string()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(80, 80, 100)))
            .title(title)
            .title_style(Style::default().fg(Color::Cyan).bold());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let days = match props.track.panel() {
            Panel::Ready(days) if !days.is_empty() => days,
            Panel::Ready(_) | Panel::Empty => {
                let text = if props.track.is_fetching() {
                    "Fetching forecast..."
                } else {
                    "No forecast yet"
                };
                frame.render_widget(Paragraph::new(text).fg(Color::DarkGray), inner);
                return;
            }
            Panel::Unavailable => {
                frame.render_widget(
                    Paragraph::new(FORECAST_UNAVAILABLE).fg(Color::DarkGray),
                    inner,
                );
                return;
            }
        };

        let cards = &days[..days.len().min(FORECAST_CARD_LIMIT)];
        let slots = Layout::horizontal(vec![Constraint::Ratio(1, cards.len() as u32); cards.len()])
            .split(inner);
        for (day, slot) in cards.iter().zip(slots.iter()) {
            render_card(frame, *slot, day);
        }
    }
}

fn render_card(frame: &mut Frame, area: Rect, day: &ForecastDay) {
    let card = Paragraph::new(vec![
        Line::from(day.short_date()).fg(Color::DarkGray),
        Line::from(day.forecast.clone()),
        Line::from(day.humidity_text()).fg(Color::LightBlue),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(60, 60, 80)))
            .title(format!(" {} ", day.weekday_label()))
            .title_alignment(Alignment::Center)
            .title_style(Style::default().bold()),
    );
    frame.render_widget(card, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RenderHarness;
    use shoresquad_core::weather::Range;

    fn day(date: &str, forecast: &str) -> ForecastDay {
        ForecastDay {
            date: date.into(),
            forecast: forecast.into(),
            relative_humidity: Some(Range::new(60.0, 95.0)),
        }
    }

    fn render(track: &Track<Vec<ForecastDay>>) -> String {
        let mut harness = RenderHarness::new(80, 8);
        harness.render_to_string_plain(|frame| {
            ForecastGrid.render(
                frame,
                frame.area(),
                ForecastGridProps {
                    track,
                    tick_count: 0,
                },
            );
        })
    }

    #[test]
    fn test_render_cards() {
        let mut track = Track::default();
        track.loaded(Some(vec![day("2026-06-12", "Showers"), day("2026-06-13", "Fair")]));

        let output = render(&track);

        assert!(output.contains("Fri"));
        assert!(output.contains("12 Jun"));
        assert!(output.contains("Showers"));
        assert!(output.contains("Sat"));
        assert!(output.contains("60-95%"));
    }

    #[test]
    fn test_render_unavailable() {
        let mut track: Track<Vec<ForecastDay>> = Track::default();
        track.failed();

        assert!(render(&track).contains("Forecast unavailable"));
    }

    #[test]
    fn test_render_unparsed_date_shown_raw() {
        let mut track = Track::default();
        track.loaded(Some(vec![day("soon", "Fair")]));

        let output = render(&track);

        assert_eq!(output.matches("soon").count(), 2);
    }
}
