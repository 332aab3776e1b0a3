//! Detail pane: the five display slots for one item.
//!
//! Pure presentation over [`crate::app::DetailState`]; the slots are mutated
//! only by the detail presenter in `app.rs`. Shows a hint while no item has
//! been presented yet.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::{App, DETAIL_LOAD_FAILED};
use crate::theme;
use crate::ui::components::component::Component;

#[derive(Debug, Default)]
pub struct DetailComponent;

impl Component for DetailComponent {
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_style(false))
            .title(Span::styled("Detail", theme::title_style()));
        let inner = block.inner(rect);
        frame.render_widget(block, rect);

        if app.detail.is_empty() {
            let hint = Paragraph::new(Span::styled(
                "Select an item and press Enter to see its details.",
                theme::text_muted(),
            ))
            .wrap(Wrap { trim: false });
            frame.render_widget(hint, inner);
            return;
        }

        let name_style = if app.detail.name == DETAIL_LOAD_FAILED {
            theme::warn_style()
        } else {
            theme::text_style()
        };

        let mut lines = vec![
            slot_line("Name", &app.detail.name, name_style),
            slot_line("Restaurant", &app.detail.restaurant, theme::text_style()),
            slot_line("Rating", &app.detail.rating, theme::text_style()),
            slot_line("Comment", &app.detail.comment, theme::text_style()),
            slot_line("Image", &app.detail.image, theme::text_style()),
        ];
        if !app.detail.image_alt.is_empty() {
            lines.push(Line::from(Span::styled(
                app.detail.image_alt.as_str(),
                theme::text_muted(),
            )));
        }

        let detail = Paragraph::new(lines).wrap(Wrap { trim: false });
        frame.render_widget(detail, inner);
    }
}

fn slot_line<'a>(label: &'a str, value: &'a str, value_style: ratatui::style::Style) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label}: "), theme::title_style()),
        Span::styled(value, value_style),
    ])
}
