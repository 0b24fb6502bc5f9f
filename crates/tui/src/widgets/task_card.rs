//! Task card rendering widget.
//!
//! This module provides functions for rendering individual task cards
//! with label and priority color coding.

use pinboard_core::{Label, Priority, Task, UserDirectory};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Converts a 6-digit hex style token to a terminal color.
///
/// Malformed tokens fall back to white rather than failing; the tokens
/// come from closed enums, so this is unreachable in practice.
#[must_use]
pub fn hex_color(hex: &str) -> Color {
    if hex.len() != 6 {
        return Color::White;
    }
    let Ok(value) = u32::from_str_radix(hex, 16) else {
        return Color::White;
    };
    Color::Rgb((value >> 16) as u8, (value >> 8) as u8, value as u8)
}

/// Returns the terminal color for a label.
///
/// # Examples
///
/// ```
/// use pinboard_core::Label;
/// use pinboard_tui::widgets::label_color;
/// use ratatui::style::Color;
///
/// assert_eq!(label_color(Label::Bug), Color::Rgb(0xEF, 0x44, 0x44));
/// ```
#[must_use]
pub fn label_color(label: Label) -> Color {
    hex_color(label.color())
}

/// Returns the terminal color for a priority.
#[must_use]
pub fn priority_color(priority: Priority) -> Color {
    hex_color(priority.color())
}

/// Renders a task card to the buffer.
///
/// The card shows the label tag, title, truncated description, and a
/// metadata line (priority, assignee, due date, activity counters)
/// inside a border. Selected cards get a highlighted border; the card
/// being dragged is dimmed at its source position while the floating
/// overlay represents it under the pointer.
///
/// # Layout
///
/// ```text
/// +------------------+
/// | [Bug]            |
/// | Fix login loop   |
/// | Safari users...  |
/// | * High Maya 7 2  |
/// +------------------+
/// ```
pub fn render_task_card(
    task: &Task,
    users: &UserDirectory,
    is_selected: bool,
    is_dragged: bool,
    area: Rect,
    buf: &mut Buffer,
) {
    // Skip rendering if area is too small
    if area.width < 6 || area.height < 3 {
        return;
    }

    let border_style = if is_dragged {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    } else if is_selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let title_style = if is_selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let inner_width = area.width.saturating_sub(2) as usize;
    let assignee = users
        .get(task.assigned_to)
        .map_or("unassigned", |user| user.name.as_str());

    let mut meta = vec![
        Span::styled("●", Style::default().fg(priority_color(task.priority))),
        Span::styled(
            format!(" {}", task.priority.display_name()),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(format!("  {assignee}"), Style::default().fg(Color::Cyan)),
    ];
    if let Some(due) = task.due {
        meta.push(Span::styled(
            format!("  {due}"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    meta.push(Span::styled(
        format!("  ✎{} ♥{}", task.comments, task.likes),
        Style::default().fg(Color::DarkGray),
    ));

    let content = vec![
        Line::from(Span::styled(
            format!("[{}]", task.label.display_name()),
            Style::default().fg(label_color(task.label)),
        )),
        Line::from(Span::styled(
            truncate_string(&task.title, inner_width),
            title_style,
        )),
        Line::from(Span::styled(
            truncate_string(&task.description, inner_width),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(meta),
    ];

    let card = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style),
    );

    card.render(area, buf);
}

/// Truncates a string to fit within a given width, adding ellipsis if needed.
fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width > 3 {
        let truncated: String = s.chars().take(max_width - 3).collect();
        format!("{truncated}...")
    } else {
        s.chars().take(max_width).collect()
    }
}
