//! Collection pane: the selectable menu tiles.
//!
//! Renders the loaded items as a navigable list and activates the selection
//! on Enter. A failed load replaces the pane's content with a single failure
//! message; locally appended drafts render with a marker and stay inert.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::app::{App, CollectionStatus, Effect, Focus, Tile};
use crate::theme;
use crate::ui::components::component::Component;

/// Spinner frames shown in the title while a fetch is in flight.
const THROBBER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[derive(Debug, Default)]
pub struct CollectionComponent;

impl Component for CollectionComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Down => {
                app.collection.move_selection(1);
                Vec::new()
            }
            KeyCode::Up => {
                app.collection.move_selection(-1);
                Vec::new()
            }
            KeyCode::Enter => app.activate_selected(),
            KeyCode::Char('q') | KeyCode::Esc => vec![Effect::Quit],
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let focused = app.focus == Focus::Collection;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_style(focused))
            .title(Span::styled(self.title(app), theme::title_style()));
        let inner = block.inner(rect);
        frame.render_widget(block, rect);

        match app.collection.status.clone() {
            CollectionStatus::Loading => {
                let loading = Paragraph::new(Span::styled("Loading menu...", theme::text_muted()));
                frame.render_widget(loading, inner);
            }
            CollectionStatus::Failed(message) if app.collection.tiles.is_empty() => {
                let failure = Paragraph::new(Span::styled(message, theme::warn_style())).wrap(Wrap { trim: false });
                frame.render_widget(failure, inner);
            }
            CollectionStatus::Failed(message) => {
                // Drafts appended after a failed load render below the message.
                let rows = Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).split(inner);
                let failure = Paragraph::new(Span::styled(message, theme::warn_style())).wrap(Wrap { trim: false });
                frame.render_widget(failure, rows[0]);
                self.render_tiles(frame, rows[1], app);
            }
            CollectionStatus::Loaded => self.render_tiles(frame, inner, app),
        }
    }

    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'_>> {
        theme::build_hint_spans(&[
            ("↑/↓", " Select  "),
            ("Enter", " Details  "),
            ("Tab", " Add item  "),
            ("q", " Quit "),
        ])
    }
}

impl CollectionComponent {
    fn title(&self, app: &App) -> String {
        let mut title = match app.collection.status {
            CollectionStatus::Loaded | CollectionStatus::Failed(_) => {
                format!("Menu ({})", app.collection.tiles.len())
            }
            CollectionStatus::Loading => "Menu".to_string(),
        };
        if app.in_flight > 0 {
            let frame = THROBBER_FRAMES[app.throbber_idx % THROBBER_FRAMES.len()];
            title = format!("{title} {frame}");
        }
        title
    }

    fn render_tiles(&self, frame: &mut Frame, area: Rect, app: &mut App) {
        let items: Vec<ListItem<'_>> = app.collection.tiles.iter().map(tile_row).collect();
        let list = List::new(items)
            .highlight_style(theme::list_highlight_style())
            .highlight_symbol("» ");
        frame.render_stateful_widget(list, area, &mut app.collection.list_state);
    }
}

/// One list row for a tile: label, image reference, and a marker for drafts.
fn tile_row(tile: &Tile) -> ListItem<'_> {
    let mut spans = vec![Span::styled(tile.label(), theme::text_style())];
    if !tile.image().is_empty() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(tile.image(), theme::text_muted()));
    }
    if tile.id().is_none() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled("(local)", theme::text_muted()));
    }
    ListItem::new(Line::from(spans))
}
