//! Test utilities for filter-panel applications
//!
//! - [`key`]: Create a `KeyEvent` from a string (e.g., `key("shift+tab")`)
//! - [`RenderHarness`]: Render components into an in-memory terminal
//! - [`RecordingMiddleware`]: Capture dispatched actions
//! - Assertion macros for verifying dispatched actions
//!
//! # Example
//!
//! ```ignore
//! use filter_panel::testing::{RecordingMiddleware, RenderHarness};
//!
//! let recorder = RecordingMiddleware::new();
//! let actions = recorder.handle();
//! let mut store = StoreWithMiddleware::new(State::default(), reducer, recorder);
//! store.dispatch(Action::Increment);
//! assert_emitted!(actions.borrow(), Action::Increment);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::KeyEvent;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::{Frame, Terminal};

use crate::keybindings::parse_key_string;
use crate::store::Middleware;
use crate::Action;

/// Create a `KeyEvent` from a key string.
///
/// # Examples
///
/// ```
/// use filter_panel_core::testing::key;
/// use crossterm::event::{KeyCode, KeyModifiers};
///
/// let k = key("ctrl+c");
/// assert_eq!(k.code, KeyCode::Char('c'));
/// assert!(k.modifiers.contains(KeyModifiers::CONTROL));
/// ```
///
/// # Panics
///
/// Panics if the key string cannot be parsed.
pub fn key(s: &str) -> KeyEvent {
    parse_key_string(s).unwrap_or_else(|| panic!("Invalid key string: {:?}", s))
}

/// Create several `KeyEvent`s from a space-separated string.
///
/// ```
/// use filter_panel_core::testing::keys;
///
/// assert_eq!(keys("tab right enter").len(), 3);
/// ```
pub fn keys(s: &str) -> Vec<KeyEvent> {
    s.split_whitespace().map(key).collect()
}

/// Convert a buffer to a string, one line per row, trailing spaces trimmed.
pub fn buffer_to_string_plain(buffer: &Buffer) -> String {
    buffer_rect_to_string_plain(buffer, buffer.area)
}

/// Convert part of a buffer to a string, one line per row.
pub fn buffer_rect_to_string_plain(buffer: &Buffer, rect: Rect) -> String {
    let mut lines = Vec::with_capacity(rect.height as usize);
    for y in rect.top()..rect.bottom() {
        let mut line = String::new();
        for x in rect.left()..rect.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

/// Renders into an in-memory terminal for assertions on the output.
///
/// # Example
///
/// ```ignore
/// let mut render = RenderHarness::new(60, 20);
/// let output = render.render_to_string_plain(|frame| {
///     view.render(frame, frame.area(), props);
/// });
/// assert!(output.contains("Modern"));
/// ```
pub struct RenderHarness {
    terminal: Terminal<TestBackend>,
}

impl RenderHarness {
    /// Create a harness with the given terminal size.
    pub fn new(width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height))
            .unwrap_or_else(|e| panic!("Failed to create test terminal: {e}"));
        Self { terminal }
    }

    /// Render a frame and return the resulting buffer.
    pub fn render<F>(&mut self, render_fn: F) -> &Buffer
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal
            .draw(render_fn)
            .unwrap_or_else(|e| panic!("Failed to draw test frame: {e}"));
        self.terminal.backend().buffer()
    }

    /// Render a frame and return it as plain text.
    pub fn render_to_string_plain<F>(&mut self, render_fn: F) -> String
    where
        F: FnOnce(&mut Frame),
    {
        buffer_to_string_plain(self.render(render_fn))
    }
}

/// Middleware that records every dispatched action.
///
/// The recorded list is shared, so it stays readable after the middleware
/// has been moved into a store.
#[derive(Debug)]
pub struct RecordingMiddleware<A> {
    actions: Rc<RefCell<Vec<A>>>,
}

impl<A> Default for RecordingMiddleware<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> RecordingMiddleware<A> {
    pub fn new() -> Self {
        Self {
            actions: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Shared handle to the recorded actions
    pub fn handle(&self) -> Rc<RefCell<Vec<A>>> {
        self.actions.clone()
    }
}

impl<A: Action> Middleware<A> for RecordingMiddleware<A> {
    fn before(&mut self, action: &A) {
        self.actions.borrow_mut().push(action.clone());
    }

    fn after(&mut self, _action: &A, _state_changed: bool) {}
}

/// Assert that a specific action was dispatched.
///
/// # Example
///
/// ```ignore
/// assert_emitted!(actions, Action::FilterResetAll);
/// assert_emitted!(actions, Action::FilterSelect { field: FilterField::Color, .. });
/// ```
#[macro_export]
macro_rules! assert_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            $actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` to be emitted, but got: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Assert that a specific action was NOT dispatched.
#[macro_export]
macro_rules! assert_not_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            !$actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` NOT to be emitted, but it was: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Count how many actions match a pattern.
#[macro_export]
macro_rules! count_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        $actions.iter().filter(|a| matches!(a, $pattern $(if $guard)?)).count()
    };
}
