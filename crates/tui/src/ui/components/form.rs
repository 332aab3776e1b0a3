//! Append form: five named text fields and local submission.
//!
//! Enter submits the whole form; submission constructs a draft item from the
//! field values verbatim, appends one inert tile to the collection pane, and
//! clears every field. Nothing in this path touches the network.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Effect, Focus};
use crate::theme;
use crate::ui::components::component::Component;

/// Column where field values start, so the rows line up.
const VALUE_COLUMN: u16 = 12;

#[derive(Debug, Default)]
pub struct FormComponent;

impl Component for FormComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Enter => {
                app.submit_form();
                Vec::new()
            }
            KeyCode::Down => {
                app.form.focus_next();
                Vec::new()
            }
            KeyCode::Up => {
                app.form.focus_prev();
                Vec::new()
            }
            KeyCode::Left => {
                app.form.focused_field_mut().input.move_left();
                Vec::new()
            }
            KeyCode::Right => {
                app.form.focused_field_mut().input.move_right();
                Vec::new()
            }
            KeyCode::Backspace => {
                app.form.focused_field_mut().input.backspace();
                Vec::new()
            }
            KeyCode::Char(character) if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT => {
                if !character.is_control() {
                    app.form.focused_field_mut().input.insert_char(character);
                }
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let focused = app.focus == Focus::Form;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_style(focused))
            .title(Span::styled("Add item", theme::title_style()));
        let inner = block.inner(rect);
        frame.render_widget(block, rect);

        let lines: Vec<Line<'_>> = app
            .form
            .fields
            .iter()
            .enumerate()
            .map(|(idx, field)| {
                let row_focused = focused && idx == app.form.focused;
                let label = format!("{:<width$}", field.label, width = VALUE_COLUMN as usize);
                let value_style = if row_focused {
                    theme::highlight_style()
                } else {
                    theme::text_style()
                };
                Line::from(vec![
                    Span::styled(label, theme::title_style()),
                    Span::styled(field.input.input(), value_style),
                ])
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), inner);

        if focused {
            self.set_cursor(frame, app, inner);
        }
    }

    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'_>> {
        theme::build_hint_spans(&[
            ("↑/↓", " Field  "),
            ("Enter", " Add to menu  "),
            ("Tab", " Back to menu "),
        ])
    }
}

impl FormComponent {
    /// Place the terminal cursor inside the focused field's value.
    fn set_cursor(&self, frame: &mut Frame, app: &App, inner: Rect) {
        let field = app.form.focused_field();
        let before_cursor = &field.input.input()[..field.input.cursor()];
        let cursor_x = inner
            .x
            .saturating_add(VALUE_COLUMN)
            .saturating_add(before_cursor.width() as u16);
        let cursor_y = inner.y.saturating_add(app.form.focused as u16);
        if cursor_y < inner.y.saturating_add(inner.height) {
            frame.set_cursor_position((cursor_x, cursor_y));
        }
    }
}
