//! Column rendering widget.
//!
//! This module provides functions for rendering individual board columns
//! with their headers and task card lists. Borders between adjacent
//! columns are collapsed to avoid doubled lines.

use pinboard_core::{Column, TaskId, UserDirectory};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::task_card::render_task_card;
use crate::layout::{TASK_CARD_HEIGHT, visible_task_count};

/// Position of a column in the horizontal layout.
///
/// Used to determine which borders to render for each column, enabling
/// collapsed borders between adjacent columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnPosition {
    /// First (leftmost) column, rounded corners on the left edge.
    First,
    /// Middle column, T-connectors on the left, no right border.
    Middle,
    /// Last (rightmost) column, T-connectors on the left, rounded right.
    Last,
}

/// Border set for the first column: rounded on the left, open right edge.
const BORDER_SET_FIRST: border::Set = border::Set {
    top_left: "╭",
    top_right: "─",
    bottom_left: "╰",
    bottom_right: "─",
    vertical_left: "│",
    vertical_right: " ",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// Border set for the middle column: T-connectors joining the previous one.
const BORDER_SET_MIDDLE: border::Set = border::Set {
    top_left: "┬",
    top_right: "─",
    bottom_left: "┴",
    bottom_right: "─",
    vertical_left: "│",
    vertical_right: " ",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// Border set for the last column: T-connectors left, rounded right edge.
const BORDER_SET_LAST: border::Set = border::Set {
    top_left: "┬",
    top_right: "╮",
    bottom_left: "┴",
    bottom_right: "╯",
    vertical_left: "│",
    vertical_right: "│",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// Renders a single column to the buffer.
///
/// A column displays its header (title and task count) followed by a
/// vertical list of task cards. Empty columns show a drop-target
/// placeholder, which matters during drags: the whole inner area is a
/// valid drop zone.
///
/// # Arguments
///
/// * `column` - The (projected) column to render
/// * `users` - Directory for resolving assignee names on cards
/// * `is_focused` - Whether this column holds the keyboard selection
/// * `selected_idx` - Selected task index within this column, if any
/// * `dragged` - Id of the task being dragged, dimmed at its source
/// * `area` - The rectangular area to render into
/// * `buf` - The buffer to render into
/// * `position` - Position in the horizontal layout, for border collapsing
/// * `prev_focused` - Whether the previous column is focused (shared border color)
#[allow(clippy::too_many_arguments)]
pub fn render_column(
    column: &Column,
    users: &UserDirectory,
    is_focused: bool,
    selected_idx: Option<usize>,
    dragged: Option<TaskId>,
    area: Rect,
    buf: &mut Buffer,
    position: ColumnPosition,
    prev_focused: bool,
) {
    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let title = format!("{} ({})", column.title, column.len());
    let title_style = if is_focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    // Collapse borders between adjacent columns: every column draws its
    // left border; only the last one draws a right border.
    let (borders, border_set) = match position {
        ColumnPosition::First => (
            Borders::TOP | Borders::BOTTOM | Borders::LEFT,
            BORDER_SET_FIRST,
        ),
        ColumnPosition::Middle => (
            Borders::TOP | Borders::BOTTOM | Borders::LEFT,
            BORDER_SET_MIDDLE,
        ),
        ColumnPosition::Last => (Borders::ALL, BORDER_SET_LAST),
    };

    let block = Block::default()
        .title(Span::styled(title, title_style))
        .borders(borders)
        .border_set(border_set)
        .border_style(border_style);

    let inner_area = block.inner(area);
    block.render(area, buf);

    // The shared left border belongs to both columns; recolor it when
    // the previous column is the focused one.
    if prev_focused && !is_focused && area.width > 0 {
        let highlight_style = Style::default().fg(Color::Cyan);
        let x = area.x;
        for y in area.y..area.y.saturating_add(area.height) {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(highlight_style);
            }
        }
    }

    if column.is_empty() {
        render_empty_placeholder(inner_area, buf);
        return;
    }

    // Shared with hit-testing: only these cards are drawn or grabbable.
    let visible_tasks = visible_task_count(inner_area.height);
    let task_count = column.len().min(visible_tasks);
    let mut constraints: Vec<Constraint> = (0..task_count)
        .map(|_| Constraint::Length(TASK_CARD_HEIGHT))
        .collect();
    constraints.push(Constraint::Min(0)); // Fill remaining space

    let task_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner_area);

    for (i, task_area) in task_areas.iter().take(task_count).enumerate() {
        let Some(task) = column.tasks.get(i) else {
            break;
        };
        let is_selected = is_focused && selected_idx == Some(i);
        let is_dragged = dragged == Some(task.id);
        render_task_card(task, users, is_selected, is_dragged, *task_area, buf);
    }
}

/// Renders a placeholder message for empty columns.
fn render_empty_placeholder(area: Rect, buf: &mut Buffer) {
    let placeholder = Paragraph::new(Line::from(Span::styled(
        "No tasks · drop here",
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )));

    placeholder.render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use pinboard_core::{ColumnKey, Task, User};

    fn users() -> UserDirectory {
        UserDirectory::new(vec![User::new(1, "Maya", "avatars/maya.png")])
    }

    #[test]
    fn render_empty_column_shows_placeholder() {
        let column = Column::new(ColumnKey::Todo);
        let area = Rect::new(0, 0, 30, 20);
        let mut buf = Buffer::empty(area);

        render_column(
            &column,
            &users(),
            false,
            None,
            None,
            area,
            &mut buf,
            ColumnPosition::First,
            false,
        );

        let content = buffer_to_string(&buf);
        assert!(content.contains("To Do (0)"));
        assert!(content.contains("No tasks · drop here"));
    }

    #[test]
    fn render_column_with_tasks() {
        let mut column = Column::new(ColumnKey::InProgress);
        column.tasks.push(Task::new(1, "First", 1));
        column.tasks.push(Task::new(2, "Second", 1));

        let area = Rect::new(0, 0, 30, 20);
        let mut buf = Buffer::empty(area);

        render_column(
            &column,
            &users(),
            true,
            Some(0),
            None,
            area,
            &mut buf,
            ColumnPosition::Middle,
            false,
        );

        let content = buffer_to_string(&buf);
        assert!(content.contains("In Progress (2)"));
        assert!(content.contains("First"));
        assert!(content.contains("Second"));
    }

    #[test]
    fn render_column_narrow_area_does_not_panic() {
        let mut column = Column::new(ColumnKey::Done);
        column.tasks.push(Task::new(1, "Task", 1));

        let area = Rect::new(0, 0, 5, 4);
        let mut buf = Buffer::empty(area);

        render_column(
            &column,
            &users(),
            false,
            None,
            None,
            area,
            &mut buf,
            ColumnPosition::Last,
            false,
        );
    }
}
