//! Whole-screen render tests
//!
//! Each test drives the store with the same actions the runtime would
//! dispatch, renders the dashboard into a `TestBackend` and checks the text.

use shoresquad::action::Action;
use shoresquad::components::{Component, Dashboard, DashboardProps};
use shoresquad::event::EventKind;
use shoresquad::state::AppState;
use shoresquad::store::Store;
use shoresquad::testing::*;
use shoresquad_core::weather::{parse_current, parse_forecast};
use shoresquad_core::{Config, EventId};

const WIDTH: u16 = 120;
const HEIGHT: u16 = 40;

const CURRENT_BODY: &str = r#"{
    "items": [{
        "general": {
            "forecast": "Partly Cloudy (Day)",
            "humidity": { "low": 55, "high": 90 },
            "wind": { "speed": { "low": 10, "high": 20 } }
        }
    }],
    "metadata": {
        "valid_period": {
            "start": "2026-06-12T12:00:00+08:00",
            "end": "2026-06-12T14:00:00+08:00"
        }
    }
}"#;

fn store() -> Store {
    Store::new(AppState::from_config(&Config::default()).unwrap())
}

fn render(store: &Store, dashboard: &mut Dashboard) -> String {
    let mut render = RenderHarness::new(WIDTH, HEIGHT);
    render.render_to_string_plain(|frame| {
        let props = DashboardProps {
            state: store.state(),
        };
        dashboard.render(frame, frame.area(), props);
    })
}

/// Six days starting 12 Jun, as the multi-day endpoint would send them.
fn six_day_body() -> String {
    let days: Vec<String> = (12..18)
        .map(|day| {
            format!(
                r#"{{ "date": "2026-06-{day}", "forecast": "Day {day}", "relative_humidity": {{ "low": 60, "high": 95 }} }}"#
            )
        })
        .collect();
    format!(r#"{{ "items": [{{ "forecasts": [{}] }}] }}"#, days.join(","))
}

/// (column, row) of the first cell of `needle` on screen.
fn cell_of(output: &str, needle: &str) -> (u16, u16) {
    output
        .lines()
        .enumerate()
        .find_map(|(row, line)| {
            line.find(needle)
                .map(|byte| (line[..byte].chars().count() as u16, row as u16))
        })
        .unwrap_or_else(|| panic!("{needle:?} not on screen"))
}

#[test]
fn test_render_one_list_item_per_event_in_order() {
    let store = store();
    let mut dashboard = Dashboard::new();

    let output = render(&store, &mut dashboard);

    let titles = [
        "Sunrise Shore Cleanup",
        "Junior Crew Coastal Sweep",
        "Community Beach Day",
    ];
    let positions: Vec<usize> = titles
        .iter()
        .map(|title| {
            assert_eq!(output.matches(title).count(), 1, "{title} once");
            output.find(title).unwrap()
        })
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(output.matches("[View]").count(), 3);
    assert!(output.contains("2026-06-19 — 20 spots"));
}

#[test]
fn test_render_current_conditions() {
    let mut store = store();
    let mut dashboard = Dashboard::new();

    store.dispatch(Action::WeatherRefresh);
    let current = parse_current(CURRENT_BODY.as_bytes()).unwrap();
    store.dispatch(Action::WeatherCurrentDidLoad(current));

    let output = render(&store, &mut dashboard);

    assert!(output.contains("Partly Cloudy (Day)"));
    assert!(output.contains("Humidity: 55-90%"));
    assert!(output.contains("Wind: 10-20 km/h"));
    assert!(output.contains("Valid 12:00–14:00"));
}

#[test]
fn test_render_empty_current_response_keeps_display() {
    let mut store = store();
    let mut dashboard = Dashboard::new();
    let current = parse_current(CURRENT_BODY.as_bytes()).unwrap();
    store.dispatch(Action::WeatherCurrentDidLoad(current));

    store.dispatch(Action::WeatherRefresh);
    let empty = parse_current(br#"{ "items": [] }"#).unwrap();
    store.dispatch(Action::WeatherCurrentDidLoad(empty));

    let output = render(&store, &mut dashboard);
    assert!(output.contains("Partly Cloudy (Day)"));
    assert!(!output.contains("Weather data unavailable"));
}

#[test]
fn test_render_forecast_first_four_cards() {
    let mut store = store();
    let mut dashboard = Dashboard::new();

    let days = parse_forecast(six_day_body().as_bytes()).unwrap();
    store.dispatch(Action::WeatherForecastDidLoad(days));

    let output = render(&store, &mut dashboard);

    let shown = ["12 Jun", "13 Jun", "14 Jun", "15 Jun"];
    let positions: Vec<(u16, u16)> = shown.iter().map(|d| cell_of(&output, d)).collect();
    assert!(positions.windows(2).all(|w| w[0].1 == w[1].1 && w[0].0 < w[1].0));
    assert!(!output.contains("16 Jun"));
    assert!(!output.contains("17 Jun"));
    assert!(output.contains("Fri"));
    assert_eq!(output.matches("60-95%").count(), 4);
}

#[test]
fn test_render_current_failure_leaves_forecast() {
    let mut store = store();
    let mut dashboard = Dashboard::new();
    let days = parse_forecast(six_day_body().as_bytes()).unwrap();
    store.dispatch(Action::WeatherForecastDidLoad(days));
    let current = parse_current(CURRENT_BODY.as_bytes()).unwrap();
    store.dispatch(Action::WeatherCurrentDidLoad(current));

    store.dispatch(Action::WeatherRefresh);
    store.dispatch(Action::WeatherCurrentDidError(
        "error sending request: connection refused".into(),
    ));

    let output = render(&store, &mut dashboard);

    assert_eq!(output.matches("Weather data unavailable").count(), 1);
    assert!(!output.contains("Partly Cloudy (Day)"));
    assert!(!output.contains("Forecast unavailable"));
    assert!(output.contains("12 Jun"));
}

#[test]
fn test_render_forecast_failure() {
    let mut store = store();
    let mut dashboard = Dashboard::new();

    store.dispatch(Action::WeatherForecastDidError("HTTP 500".into()));

    let output = render(&store, &mut dashboard);
    assert!(output.contains("Forecast unavailable"));
    assert!(!output.contains("Weather data unavailable"));
}

#[test]
fn test_view_opens_popup_on_map() {
    let mut store = store();
    let mut dashboard = Dashboard::new();

    store.dispatch(Action::EventView(EventId(1)));
    while store.state().map.is_animating() {
        store.dispatch(Action::Tick);
    }

    let output = render(&store, &mut dashboard);

    // List item plus popup
    assert_eq!(output.matches("Sunrise Shore Cleanup").count(), 2);
    assert!(output.contains("2026-06-12"));
    assert!(output.contains("1.3815, 103.9556"));
    assert!(output.contains("z13"));
}

#[test]
fn test_click_view_label() {
    let mut store = store();
    let mut dashboard = Dashboard::new();
    let output = render(&store, &mut dashboard);

    let (_, row) = cell_of(&output, "Community Beach Day");
    let (column, _) = cell_of(&output, "[View]");

    let actions = dashboard.handle_event(
        &EventKind::Mouse(click(column + 1, row)),
        DashboardProps {
            state: store.state(),
        },
    );
    actions.assert_count(1);
    actions.assert_first(Action::EventView(EventId(3)));

    for action in actions {
        store.dispatch(action);
    }
    assert_eq!(store.state().selected, 2);
    assert_eq!(store.state().map.open_popup(), Some(EventId(3)));
}

#[test]
fn test_render_help_bar() {
    let store = store();
    let mut dashboard = Dashboard::new();

    let output = render(&store, &mut dashboard);
    let last_inner_row = output.lines().nth(HEIGHT as usize - 2).unwrap();

    assert!(last_inner_row.contains("refresh"));
    assert!(last_inner_row.contains("quit"));
    assert!(last_inner_row.contains("close popup"));
}
