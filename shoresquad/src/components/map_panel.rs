//! Map panel - coastline canvas, event markers and the open popup
//!
//! Draws `MapView::displayed_view`, so a focus transition shows up as the
//! canvas sliding towards the target over a few ticks. The popup is an
//! overlay anchored just above its marker.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style, Stylize},
    symbols,
    text::Line,
    widgets::{
        canvas::{Canvas, Map, MapResolution},
        Block, Borders, Clear, Paragraph,
    },
    Frame,
};
use shoresquad_core::{GeoPoint, MapView, Marker, Resolution, Viewport};

use super::Component;

pub const MARKER_ICON: &str = "●";

const COAST_COLOR: Color = Color::Rgb(70, 110, 90);
const MARKER_COLOR: Color = Color::LightRed;
const OPEN_MARKER_COLOR: Color = Color::Yellow;

pub struct MapPanelProps<'a> {
    pub map: &'a MapView,
}

#[derive(Default)]
pub struct MapPanel;

impl Component for MapPanel {
    type Props<'a> = MapPanelProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: MapPanelProps<'_>) {
        let map = props.map;
        let view = map.displayed_view();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(80, 80, 100)))
            .title(format!(
                " Map  {:.4}, {:.4}  z{:.0} ",
                view.center.lat, view.center.lon, view.zoom
            ))
            .title_style(Style::default().fg(Color::Cyan).bold());
        let inner = block.inner(area);
        if inner.is_empty() {
            frame.render_widget(block, area);
            return;
        }

        let (x_bounds, y_bounds) = view.bounds(inner.width, inner.height);
        let resolution = match map.layer().resolution {
            Resolution::Low => MapResolution::Low,
            Resolution::High => MapResolution::High,
        };
        let open = map.open_popup();

        let canvas = Canvas::default()
            .block(block)
            .marker(symbols::Marker::Braille)
            .x_bounds(x_bounds)
            .y_bounds(y_bounds)
            .paint(|ctx| {
                ctx.draw(&Map {
                    color: COAST_COLOR,
                    resolution,
                });
                ctx.layer();
                for marker in map.markers().iter() {
                    let style = if Some(marker.event_id) == open {
                        Style::default().fg(OPEN_MARKER_COLOR).bold()
                    } else {
                        Style::default().fg(MARKER_COLOR)
                    };
                    ctx.print(
                        marker.position.lon,
                        marker.position.lat,
                        Line::styled(format!("{MARKER_ICON}{}", marker.event_id), style),
                    );
                }
            });
        frame.render_widget(canvas, area);

        if let Some(marker) = map.open_marker() {
            render_popup(frame, inner, &view, marker);
        }
    }
}

fn render_popup(frame: &mut Frame, inner: Rect, view: &Viewport, marker: &Marker) {
    // Off-screen while the view is still sliding in
    let Some((col, row)) = project(view, inner, marker.position) else {
        return;
    };

    let popup = &marker.popup;
    let text_width = popup.title.chars().count().max(popup.date.chars().count()) as u16;
    let area = popup_area(inner, (col, row), text_width + 4, 4);

    let body = Paragraph::new(vec![
        Line::from(popup.title.clone()).bold(),
        Line::from(popup.date.clone()).fg(Color::DarkGray),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(OPEN_MARKER_COLOR)),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(body, area);
}

/// Cell of `point` inside `inner`, or `None` when outside the viewport.
fn project(view: &Viewport, inner: Rect, point: GeoPoint) -> Option<(u16, u16)> {
    if !view.contains(point, inner.width, inner.height) {
        return None;
    }
    let ([x_min, x_max], [y_min, y_max]) = view.bounds(inner.width, inner.height);
    let fx = (point.lon - x_min) / (x_max - x_min);
    let fy = (y_max - point.lat) / (y_max - y_min);
    let col = (fx * f64::from(inner.width.saturating_sub(1))).round() as u16;
    let row = (fy * f64::from(inner.height.saturating_sub(1))).round() as u16;
    Some((inner.x + col, inner.y + row))
}

/// A `width` x `height` box centered above `anchor`, kept inside `inner`.
fn popup_area(inner: Rect, anchor: (u16, u16), width: u16, height: u16) -> Rect {
    let width = width.min(inner.width);
    let height = height.min(inner.height);

    let max_x = inner.right().saturating_sub(width);
    let x = anchor.0.saturating_sub(width / 2).clamp(inner.x, max_x);

    // Prefer above the marker, fall back to below
    let y = if anchor.1 >= inner.y + height {
        anchor.1 - height
    } else {
        (anchor.1 + 1).min(inner.bottom().saturating_sub(height))
    };

    Rect::new(x, y, width, height)
}
