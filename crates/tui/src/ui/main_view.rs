//! Top-level view: pane layout, focus routing, and the hint bar.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::Paragraph,
};

use crate::app::{App, Effect, Focus};
use crate::ui::components::component::Component;
use crate::ui::components::{CollectionComponent, DetailComponent, FormComponent};

/// Owns the three pane components and routes input to the focused one.
#[derive(Debug, Default)]
pub struct MainView {
    collection: CollectionComponent,
    detail: DetailComponent,
    form: FormComponent,
}

impl MainView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route a key event: Tab/BackTab cycle pane focus globally, everything
    /// else goes to the focused component.
    pub fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Tab | KeyCode::BackTab => {
                app.focus = match app.focus {
                    Focus::Collection => Focus::Form,
                    Focus::Form => Focus::Collection,
                };
                Vec::new()
            }
            _ => match app.focus {
                Focus::Collection => self.collection.handle_key_events(app, key),
                Focus::Form => self.form.handle_key_events(app, key),
            },
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let rows = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).split(area);
        let columns = Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)]).split(rows[0]);
        // Form needs five field rows plus borders; detail takes the rest.
        let right = Layout::vertical([Constraint::Min(0), Constraint::Length(7)]).split(columns[1]);

        self.collection.render(frame, columns[0], app);
        self.detail.render(frame, right[0], app);
        self.form.render(frame, right[1], app);
        self.render_hint_bar(frame, rows[1], app);
    }

    fn render_hint_bar(&self, frame: &mut Frame, area: Rect, app: &App) {
        let spans = match app.focus {
            Focus::Collection => self.collection.get_hint_spans(app),
            Focus::Form => self.form.get_hint_spans(app),
        };
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
