//! Help overlay widget.
//!
//! This module provides the help overlay that displays all available
//! keybindings when the user presses `?`.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

/// The width of the help overlay panel.
const HELP_WIDTH: u16 = 40;

/// The height of the help overlay panel.
const HELP_HEIGHT: u16 = 19;

/// Renders a centered help overlay displaying all keybindings.
///
/// The overlay is rendered on top of the existing content, with the
/// area cleared first so the board does not show through.
///
/// # Examples
///
/// ```
/// use pinboard_tui::widgets::render_help_overlay;
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
///
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
///
/// render_help_overlay(area, &mut buf);
/// ```
pub fn render_help_overlay(area: Rect, buf: &mut Buffer) {
    let popup_area = centered_rect(HELP_WIDTH, HELP_HEIGHT, area);
    Clear.render(popup_area, buf);

    let help_block = Block::default()
        .title(Span::styled(
            " Help ",
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightYellow));

    let help_text = Paragraph::new(build_help_lines())
        .block(help_block)
        .alignment(Alignment::Left);

    help_text.render(popup_area, buf);
}

/// Builds the lines of help content.
fn build_help_lines() -> Vec<Line<'static>> {
    let header_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Green);
    let text_style = Style::default().fg(Color::White);
    let hint_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);

    let entry = |key: &'static str, action: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<11}"), key_style),
            Span::styled(action, text_style),
        ])
    };

    vec![
        Line::from(""),
        Line::from(Span::styled("  Navigation", header_style)),
        entry("\u{2190} \u{2192}", "Switch column"),
        entry("\u{2191} \u{2193}", "Select task"),
        Line::from(""),
        Line::from(Span::styled("  Board", header_style)),
        entry("a", "Add a task"),
        entry("f", "Cycle label filter"),
        entry("p", "Cycle priority sort"),
        entry("/", "Search title/description"),
        entry("Mouse drag", "Move a task"),
        Line::from(""),
        Line::from(Span::styled("  General", header_style)),
        entry("Esc", "Close overlay / cancel drag"),
        entry("Ctrl+C", "Quit"),
        entry("?", "Toggle help"),
        Line::from(""),
        Line::from(Span::styled("  Press any key to close", hint_style)),
    ]
}

/// Creates a centered rectangle within a given area, clamped to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let popup_width = width.min(area.width);
    let popup_height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    Rect::new(x, y, popup_width, popup_height)
}
