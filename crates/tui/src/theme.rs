//! Theme and styling for the ramen menu TUI.
//!
//! Color scheme and styling helpers used throughout the interface: a dark
//! theme with a warm broth-orange accent.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

/// Accent color for highlights and focus indicators.
pub const ACCENT: Color = Color::Rgb(235, 148, 61);

/// Primary foreground color for normal text.
pub const FG: Color = Color::Rgb(224, 224, 230);

/// Muted foreground color for labels, hints, and secondary text.
pub const FG_MUTED: Color = Color::Rgb(168, 168, 175);

/// Default border color for unfocused panes.
pub const BORDER: Color = Color::Rgb(72, 72, 80);

/// Focused border color.
pub const BORDER_FOCUS: Color = ACCENT;

/// Background hint for the focused form row.
pub const BG_HIGHLIGHT: Color = Color::Rgb(44, 32, 20);

/// Warning color for failure messages and the detail error snapshot.
pub const WARN: Color = Color::Rgb(220, 96, 110);

/// Border style for a pane based on its focus state.
pub fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(BORDER_FOCUS)
    } else {
        Style::default().fg(BORDER)
    }
}

/// Style for pane titles and field labels.
pub fn title_style() -> Style {
    Style::default().fg(FG_MUTED).add_modifier(Modifier::BOLD)
}

/// Style for normal text content.
pub fn text_style() -> Style {
    Style::default().fg(FG)
}

/// Style for secondary text.
pub fn text_muted() -> Style {
    Style::default().fg(FG_MUTED)
}

/// Style for failure messages.
pub fn warn_style() -> Style {
    Style::default().fg(WARN)
}

/// Style for the focused input row; subtle background hint.
pub fn highlight_style() -> Style {
    Style::default().fg(FG).bg(BG_HIGHLIGHT)
}

/// Style for the selected list item; accent + bold, no fill.
pub fn list_highlight_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Build alternating key/action spans for the bottom hint bar.
pub fn build_hint_spans<'a>(pairs: &[(&'a str, &'a str)]) -> Vec<Span<'a>> {
    pairs
        .iter()
        .flat_map(|(key, action)| [Span::styled(*key, list_highlight_style()), Span::styled(*action, text_muted())])
        .collect()
}
