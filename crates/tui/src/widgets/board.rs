//! Kanban board rendering widget.
//!
//! This module provides functions for rendering the complete board with
//! its three columns arranged horizontally.

use pinboard_core::{Board, TaskId, UserDirectory};
use ratatui::{buffer::Buffer, layout::Rect};

use super::column::{ColumnPosition, render_column};
use crate::layout::column_areas;

/// Renders the complete board to the buffer.
///
/// The board displays three columns (To Do, In Progress, Done) arranged
/// horizontally with equal widths. `board` should be the projected board
/// from the view builder, so the drawn content matches what hit-testing
/// expects. When a drag is active, `dragged` dims the card at its source
/// position.
///
/// # Layout
///
/// ```text
/// +------------+-------------+------------+
/// | To Do (2)  | In Prog (1) | Done (0)   |
/// +------------+-------------+------------+
/// | Task 1     | Task 3      |            |
/// | Task 2     |             |            |
/// +------------+-------------+------------+
/// ```
///
/// # Examples
///
/// ```
/// use pinboard_core::{Board, ColumnKey, Task, UserDirectory};
/// use pinboard_tui::widgets::render_board;
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
///
/// let mut board = Board::new();
/// board.append_task(ColumnKey::Todo, Task::new(1, "Task 1", 1)).unwrap();
///
/// let area = Rect::new(0, 0, 90, 24);
/// let mut buf = Buffer::empty(area);
///
/// render_board(&board, &UserDirectory::default(), 0, Some(0), None, area, &mut buf);
/// ```
pub fn render_board(
    board: &Board,
    users: &UserDirectory,
    selected_column: usize,
    selected_task: Option<usize>,
    dragged: Option<TaskId>,
    area: Rect,
    buf: &mut Buffer,
) {
    let columns = board.columns();
    // The same split hit-testing uses, so pointer coordinates always
    // resolve to the column drawn under them.
    let column_areas = column_areas(area);

    for (i, column) in columns.iter().take(column_areas.len()).enumerate() {
        let is_focused = selected_column == i;

        // Only show task selection in the focused column
        let task_selection = if is_focused { selected_task } else { None };

        let position = if i == 0 {
            ColumnPosition::First
        } else if i == columns.len() - 1 {
            ColumnPosition::Last
        } else {
            ColumnPosition::Middle
        };
        let prev_focused = i > 0 && selected_column == i - 1;

        render_column(
            column,
            users,
            is_focused,
            task_selection,
            dragged,
            column_areas[i],
            buf,
            position,
            prev_focused,
        );
    }
}
