//! Test utilities
//!
//! - [`key`]: build a `KeyEvent` from a string such as `"q"`, `"enter"` or `"down"`
//! - [`click`]: a left mouse press at a cell
//! - [`RenderHarness`]: render into a `TestBackend` and read the screen back as text
//! - [`ActionAssertions`]: assertions over the actions a component emits
//!
//! Helpers here panic on misuse; they are meant for tests only.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::{Frame, Terminal};

use crate::action::Action;

/// Create a `KeyEvent` from a key string.
///
/// # Panics
///
/// Panics if the key string is not recognized.
pub fn key(s: &str) -> KeyEvent {
    let code = match s.trim().to_lowercase().as_str() {
        "esc" | "escape" => KeyCode::Esc,
        "enter" | "return" => KeyCode::Enter,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "space" => KeyCode::Char(' '),
        "f5" => KeyCode::F(5),
        c if c.chars().count() == 1 => KeyCode::Char(c.chars().next().unwrap_or(' ')),
        other => panic!("Invalid key string: {:?}", other),
    };
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// Left mouse button press at (`column`, `row`).
pub fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::empty(),
    }
}

/// Renders into an in-memory terminal.
pub struct RenderHarness {
    terminal: Terminal<TestBackend>,
}

impl RenderHarness {
    pub fn new(width: u16, height: u16) -> Self {
        let terminal =
            Terminal::new(TestBackend::new(width, height)).expect("test backend never fails");
        Self { terminal }
    }

    /// Draw one frame and return the resulting buffer.
    pub fn render<F>(&mut self, draw: F) -> &Buffer
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal
            .draw(draw)
            .expect("test backend never fails");
        self.terminal.backend().buffer()
    }

    /// Draw one frame and return the screen as plain text, one line per row.
    pub fn render_to_string_plain<F>(&mut self, draw: F) -> String
    where
        F: FnOnce(&mut Frame),
    {
        buffer_to_string(self.render(draw))
    }
}

/// Buffer contents without styling, rows separated by `\n`.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width.max(1))
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Assertions over emitted actions.
pub trait ActionAssertions {
    fn assert_empty(&self);
    fn assert_count(&self, n: usize);
    fn assert_first(&self, expected: Action);
}

impl ActionAssertions for Vec<Action> {
    fn assert_empty(&self) {
        assert!(self.is_empty(), "expected no actions, got {:?}", self);
    }

    fn assert_count(&self, n: usize) {
        assert_eq!(self.len(), n, "unexpected action count: {:?}", self);
    }

    fn assert_first(&self, expected: Action) {
        assert_eq!(self.first(), Some(&expected), "actions: {:?}", self);
    }
}
