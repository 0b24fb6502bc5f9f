//! Drag overlay widget.
//!
//! While a drag is in progress, the dragged task is represented by a
//! small floating card anchored to the pointer, on top of the board.

use pinboard_core::Task;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use super::task_card::label_color;

/// Width of the floating card.
const OVERLAY_WIDTH: u16 = 26;

/// Height of the floating card.
const OVERLAY_HEIGHT: u16 = 3;

/// Renders the floating card for the task being dragged.
///
/// The card's top-left corner follows the pointer, offset one cell so
/// the pointer itself stays visible, and is clamped to stay inside
/// `area`.
///
/// # Examples
///
/// ```
/// use pinboard_core::Task;
/// use pinboard_tui::widgets::render_drag_overlay;
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
///
/// let task = Task::new(1, "Fix login loop", 1);
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
///
/// render_drag_overlay(&task, 40, 10, area, &mut buf);
/// ```
pub fn render_drag_overlay(task: &Task, x: u16, y: u16, area: Rect, buf: &mut Buffer) {
    if area.width < OVERLAY_WIDTH || area.height < OVERLAY_HEIGHT {
        return;
    }

    let max_x = area.x + area.width - OVERLAY_WIDTH;
    let max_y = area.y + area.height - OVERLAY_HEIGHT;
    let overlay = Rect::new(
        x.saturating_add(1).min(max_x),
        y.saturating_add(1).min(max_y),
        OVERLAY_WIDTH,
        OVERLAY_HEIGHT,
    );

    Clear.render(overlay, buf);

    let inner_width = overlay.width.saturating_sub(2) as usize;
    let title: String = task.title.chars().take(inner_width).collect();
    let card = Paragraph::new(Line::from(Span::styled(
        title,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(label_color(task.label))),
    );

    card.render(overlay, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    #[test]
    fn overlay_follows_pointer() {
        let task = Task::new(1, "Dragging", 1);
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);

        render_drag_overlay(&task, 10, 5, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Dragging"));
        // Rendered one cell below/right of the pointer.
        assert_ne!(buf.cell((11, 6)).map(|c| c.symbol().to_string()), None);
    }

    #[test]
    fn overlay_clamped_to_area() {
        let task = Task::new(1, "Edge", 1);
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);

        // Pointer at the far corner: the card must stay inside the area.
        render_drag_overlay(&task, 79, 23, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Edge"));
    }

    #[test]
    fn tiny_area_skips_overlay() {
        let task = Task::new(1, "Nope", 1);
        let area = Rect::new(0, 0, 10, 2);
        let mut buf = Buffer::empty(area);

        render_drag_overlay(&task, 1, 1, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(!content.contains("Nope"));
    }
}
