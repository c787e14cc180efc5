//! Event list - one item per event with a "View" action
//!
//! Every frame rebuilds the items from the event store. The rects of the
//! items drawn last frame are kept for mouse hit-testing.

use crossterm::event::{KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use shoresquad_core::{EventId, EventStore};

use super::Component;
use crate::action::Action;
use crate::event::EventKind;

/// Rows per list item (title, then date and spots).
const ITEM_HEIGHT: u16 = 2;
const VIEW_LABEL: &str = "[View]";

/// Display data for one list item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListRow {
    pub id: EventId,
    pub title: String,
    pub detail: String,
}

/// Items for the list, in store order.
pub fn list_rows(events: &EventStore) -> Vec<ListRow> {
    events
        .iter()
        .map(|event| ListRow {
            id: event.id,
            title: event.title.clone(),
            detail: format!("{} — {} spots", event.date, event.spots),
        })
        .collect()
}

pub struct EventListProps<'a> {
    pub events: &'a EventStore,
    pub selected: usize,
}

#[derive(Default)]
pub struct EventList {
    scroll_offset: usize,
    /// Item rects from the last render
    hit_areas: Vec<(Rect, EventId)>,
}

impl EventList {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_visible(&mut self, selected: usize, visible: usize) {
        if visible == 0 {
            return;
        }
        if selected < self.scroll_offset {
            self.scroll_offset = selected;
        } else if selected >= self.scroll_offset + visible {
            self.scroll_offset = selected + 1 - visible;
        }
    }

    fn hit(&self, column: u16, row: u16) -> Option<EventId> {
        self.hit_areas
            .iter()
            .find(|(rect, _)| rect.contains(Position::new(column, row)))
            .map(|(_, id)| *id)
    }
}

impl Component for EventList {
    type Props<'a> = EventListProps<'a>;

    fn handle_event(&mut self, event: &EventKind, props: EventListProps<'_>) -> Vec<Action> {
        if props.events.is_empty() {
            return vec![];
        }

        match event {
            EventKind::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('j') | KeyCode::Down => vec![Action::ListSelectNext],
                KeyCode::Char('k') | KeyCode::Up => vec![Action::ListSelectPrev],
                KeyCode::Enter | KeyCode::Char('v') => props
                    .events
                    .as_slice()
                    .get(props.selected)
                    .map(|event| vec![Action::EventView(event.id)])
                    .unwrap_or_default(),
                _ => vec![],
            },
            EventKind::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                self.hit(mouse.column, mouse.row)
                    .map(|id| vec![Action::EventView(id)])
                    .unwrap_or_default()
            }
            _ => vec![],
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: EventListProps<'_>) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(80, 80, 100)))
            .title(" Upcoming Cleanups ")
            .title_style(Style::default().fg(Color::Cyan).bold());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        self.hit_areas.clear();
        let rows = list_rows(props.events);
        if rows.is_empty() {
            frame.render_widget(
                Paragraph::new("No events scheduled").fg(Color::DarkGray),
                inner,
            );
            return;
        }

        let visible = (inner.height / ITEM_HEIGHT) as usize;
        self.ensure_visible(props.selected, visible);

        let shown = rows.iter().enumerate().skip(self.scroll_offset).take(visible);
        let slots = Layout::vertical(vec![Constraint::Length(ITEM_HEIGHT); visible]).split(inner);

        for ((index, row), slot) in shown.zip(slots.iter()) {
            let selected = index == props.selected;
            render_item(frame, *slot, row, selected);
            self.hit_areas.push((*slot, row.id));
        }
    }
}

fn render_item(frame: &mut Frame, area: Rect, row: &ListRow, selected: bool) {
    let base = if selected {
        Style::default().bg(Color::Rgb(40, 40, 60))
    } else {
        Style::default()
    };
    let [text_area, view_area] = Layout::horizontal([
        Constraint::Min(1),
        Constraint::Length(VIEW_LABEL.len() as u16 + 1),
    ])
    .areas(area);

    let pointer = if selected { "▸ " } else { "  " };
    let text = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(pointer, Style::default().fg(Color::Cyan)),
            Span::styled(row.title.as_str(), Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(row.detail.as_str(), Style::default().fg(Color::DarkGray)),
        ]),
    ])
    .style(base);

    let view = Paragraph::new(Line::from(Span::styled(
        VIEW_LABEL,
        Style::default().fg(Color::Cyan).bold(),
    )))
    .style(base);

    frame.render_widget(text, text_area);
    frame.render_widget(view, view_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{click, key, ActionAssertions, RenderHarness};

    fn props(events: &EventStore, selected: usize) -> EventListProps<'_> {
        EventListProps { events, selected }
    }

    #[test]
    fn test_list_rows_one_per_event_in_order() {
        let events = EventStore::sample();

        let rows = list_rows(&events);

        let ids: Vec<_> = rows.iter().map(|row| row.id).collect();
        assert_eq!(ids, vec![EventId(1), EventId(2), EventId(3)]);
        assert_eq!(rows[0].title, "Sunrise Shore Cleanup");
        assert_eq!(rows[0].detail, "2026-06-12 — 12 spots");
    }

    #[test]
    fn test_navigation_keys() {
        let events = EventStore::sample();
        let mut list = EventList::new();

        list.handle_event(&EventKind::Key(key("down")), props(&events, 0))
            .assert_first(Action::ListSelectNext);
        list.handle_event(&EventKind::Key(key("j")), props(&events, 0))
            .assert_first(Action::ListSelectNext);
        list.handle_event(&EventKind::Key(key("k")), props(&events, 1))
            .assert_first(Action::ListSelectPrev);
    }

    #[test]
    fn test_enter_views_selected_event() {
        let events = EventStore::sample();
        let mut list = EventList::new();

        let actions = list.handle_event(&EventKind::Key(key("enter")), props(&events, 1));

        actions.assert_count(1);
        actions.assert_first(Action::EventView(EventId(2)));
    }

    #[test]
    fn test_empty_store_ignores_keys() {
        let events = EventStore::new(vec![]).unwrap();
        let mut list = EventList::new();

        list.handle_event(&EventKind::Key(key("enter")), props(&events, 0))
            .assert_empty();
    }

    #[test]
    fn test_click_on_item_views_event() {
        let events = EventStore::sample();
        let mut list = EventList::new();
        let mut render = RenderHarness::new(40, 10);
        render.render(|frame| list.render(frame, frame.area(), props(&events, 0)));

        // Border row 0, items start at row 1 and are two rows tall
        let actions = list.handle_event(&EventKind::Mouse(click(35, 3)), props(&events, 0));
        actions.assert_first(Action::EventView(EventId(2)));

        list.handle_event(&EventKind::Mouse(click(35, 9)), props(&events, 0))
            .assert_empty();
    }

    #[test]
    fn test_render_items_in_order() {
        let events = EventStore::sample();
        let mut list = EventList::new();
        let mut render = RenderHarness::new(50, 10);

        let output = render.render_to_string_plain(|frame| {
            list.render(frame, frame.area(), props(&events, 0));
        });

        let first = output.find("Sunrise Shore Cleanup").unwrap();
        let second = output.find("Junior Crew Coastal Sweep").unwrap();
        let third = output.find("Community Beach Day").unwrap();
        assert!(first < second && second < third);
        assert_eq!(output.matches("[View]").count(), 3);
        assert!(output.contains("2026-07-02 — 30 spots"));
    }

    #[test]
    fn test_scrolls_to_selected() {
        let events = EventStore::sample();
        let mut list = EventList::new();
        // Room for one item only
        let mut render = RenderHarness::new(50, 4);

        let output = render.render_to_string_plain(|frame| {
            list.render(frame, frame.area(), props(&events, 2));
        });

        assert!(output.contains("Community Beach Day"));
        assert!(!output.contains("Sunrise Shore Cleanup"));
    }
}
