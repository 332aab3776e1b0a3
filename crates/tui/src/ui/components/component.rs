//! Component system for the ramen menu TUI.
//!
//! Each pane (collection, detail, form) is a self-contained component that
//! handles its own key events and rendering while reporting side effects back
//! to the runtime as [`Effect`]s.

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

use crate::app::{App, Effect};

/// A trait representing a UI pane with its own behavior.
///
/// Components handle localized key events, mutate the shared [`App`] state,
/// and render themselves into a provided `Rect`, reporting any side effects
/// back to the runtime via `Effect`s.
pub trait Component {
    /// Handle a key event when this component has focus.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);

    /// Keyboard hints shown in the bottom bar while this component is focused.
    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'_>> {
        Vec::new()
    }
}
