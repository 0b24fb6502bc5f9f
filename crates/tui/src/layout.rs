//! Centralized layout measurements and pointer hit-testing.
//!
//! This module defines shared constants for layout dimensions used across
//! multiple rendering components, plus the pure functions that map a
//! terminal coordinate back to the board element rendered there. The
//! column split and the visible-card count live here and are shared with
//! the widgets, so the renderer and the hit-test can never drift apart.

use std::rc::Rc;

use pinboard_core::{Board, DragTarget};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of the header bar in rows.
///
/// The header displays the application title and help cue.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of each task card in rows.
///
/// This includes the border (2 rows) and content (4 rows for label tag,
/// title, description, and metadata).
pub const TASK_CARD_HEIGHT: u16 = 6;

/// Height of the status bar in rows.
pub const STATUS_BAR_HEIGHT: u16 = 3;

/// Minimum terminal height for useful rendering (content area).
///
/// Below this height, we display a "terminal too small" message.
pub const MIN_HEIGHT: u16 = 12;

/// Minimum terminal height for rendering with header.
///
/// When terminal height is between `MIN_HEIGHT` and `MIN_HEIGHT_WITH_HEADER`,
/// we hide the header to reclaim 3 rows of content space.
pub const MIN_HEIGHT_WITH_HEADER: u16 = MIN_HEIGHT + HEADER_HEIGHT;

/// Minimum terminal width for useful rendering.
///
/// The board has 3 columns; each needs enough characters for borders
/// and truncated titles to be readable.
pub const MIN_WIDTH: u16 = 45;

/// Number of columns rendered side by side.
const COLUMN_COUNT: u16 = 3;

/// Splits the board content area into the three column rectangles.
///
/// The board renderer and [`hit_test`] both use this split, so a pointer
/// coordinate always resolves to the column drawn under it, including at
/// widths that do not divide evenly by three.
#[must_use]
pub fn column_areas(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Ratio(1, u32::from(COLUMN_COUNT));
            COLUMN_COUNT as usize
        ])
        .split(area)
}

/// The number of whole task cards that fit in a column's inner area.
///
/// The column widget draws at most this many cards; hit-testing treats
/// rows beyond the last drawn card as column background.
#[must_use]
pub fn visible_task_count(inner_height: u16) -> usize {
    (inner_height / TASK_CARD_HEIGHT).max(1) as usize
}

/// Maps a pointer position to the board element rendered there.
///
/// `board` must be the same projection the renderer drew and `area` the
/// board content area (below the header, above the status bar). Returns
/// the task card under the pointer, the column background if the pointer
/// is inside a column but not over a drawn card, or `None` when the
/// pointer is outside the board entirely. Cards past the column's
/// visible capacity are never drawn, so rows over them count as
/// background too.
///
/// # Examples
///
/// ```
/// use pinboard_core::{Board, ColumnKey, DragTarget, Task};
/// use pinboard_tui::layout::hit_test;
/// use ratatui::layout::Rect;
///
/// let mut board = Board::new();
/// board.append_task(ColumnKey::Todo, Task::new(1, "A", 1)).unwrap();
///
/// let area = Rect::new(0, 0, 90, 30);
/// // Inside the first card of the first column.
/// assert_eq!(hit_test(&board, area, 5, 3), Some(DragTarget::Task(1)));
/// // Below the cards, still inside the first column.
/// assert_eq!(
///     hit_test(&board, area, 5, 20),
///     Some(DragTarget::Column(ColumnKey::Todo))
/// );
/// ```
#[must_use]
pub fn hit_test(board: &Board, area: Rect, x: u16, y: u16) -> Option<DragTarget> {
    if !area.contains((x, y).into()) {
        return None;
    }

    let areas = column_areas(area);
    let (column_idx, column_area) = areas
        .iter()
        .enumerate()
        .find(|(_, rect)| rect.contains((x, y).into()))?;
    let column = board.columns().get(column_idx)?;

    // Account for the column's top border row.
    let relative_y = y.saturating_sub(column_area.y + 1);
    let task_idx = (relative_y / TASK_CARD_HEIGHT) as usize;

    // Only the cards the renderer actually drew are grabbable; the rest
    // of the column is a drop target for its background.
    let visible = visible_task_count(column_area.height.saturating_sub(2));
    if task_idx >= visible {
        return Some(DragTarget::Column(column.key));
    }
    match column.tasks.get(task_idx) {
        Some(task) => Some(DragTarget::Task(task.id)),
        None => Some(DragTarget::Column(column.key)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinboard_core::{ColumnKey, Task};

    fn board() -> Board {
        let mut board = Board::new();
        board
            .append_task(ColumnKey::Todo, Task::new(1, "A", 1))
            .unwrap();
        board
            .append_task(ColumnKey::Todo, Task::new(2, "B", 1))
            .unwrap();
        board
            .append_task(ColumnKey::InProgress, Task::new(3, "C", 1))
            .unwrap();
        board
    }

    #[test]
    fn hits_first_card() {
        let area = Rect::new(0, 0, 90, 30);
        assert_eq!(
            hit_test(&board(), area, 2, 1),
            Some(DragTarget::Task(1))
        );
    }

    #[test]
    fn hits_second_card_below_first() {
        let area = Rect::new(0, 0, 90, 30);
        // Second card starts at y = 1 (border) + TASK_CARD_HEIGHT.
        let y = 1 + TASK_CARD_HEIGHT;
        assert_eq!(
            hit_test(&board(), area, 2, y),
            Some(DragTarget::Task(2))
        );
    }

    #[test]
    fn hits_second_column() {
        let area = Rect::new(0, 0, 90, 30);
        assert_eq!(
            hit_test(&board(), area, 35, 2),
            Some(DragTarget::Task(3))
        );
    }

    #[test]
    fn column_background_below_cards() {
        let area = Rect::new(0, 0, 90, 30);
        assert_eq!(
            hit_test(&board(), area, 2, 25),
            Some(DragTarget::Column(ColumnKey::Todo))
        );
    }

    #[test]
    fn empty_column_hits_background() {
        let area = Rect::new(0, 0, 90, 30);
        assert_eq!(
            hit_test(&board(), area, 80, 5),
            Some(DragTarget::Column(ColumnKey::Done))
        );
    }

    #[test]
    fn outside_area_misses() {
        let area = Rect::new(0, 3, 90, 20);
        assert_eq!(hit_test(&board(), area, 5, 0), None); // Above
        assert_eq!(hit_test(&board(), area, 5, 24), None); // Below
        assert_eq!(hit_test(&board(), area, 95, 5), None); // Right of board
    }

    #[test]
    fn offset_area_translates_coordinates() {
        let area = Rect::new(10, 5, 90, 20);
        assert_eq!(
            hit_test(&board(), area, 12, 7),
            Some(DragTarget::Task(1))
        );
    }

    #[test]
    fn overflow_rows_resolve_to_column_background() {
        // Three tasks, but only two cards fit the inner height; the
        // rows where the third card would sit are blank on screen and
        // must not grab the undrawn card.
        let mut board = Board::new();
        for id in 1..=3u64 {
            board
                .append_task(ColumnKey::Todo, Task::new(id, format!("T{id}"), 1))
                .unwrap();
        }
        let area = Rect::new(0, 0, 90, 14); // Inner height 12 = two cards
        assert_eq!(visible_task_count(12), 2);

        assert_eq!(hit_test(&board, area, 2, 2), Some(DragTarget::Task(1)));
        assert_eq!(
            hit_test(&board, area, 2, 1 + TASK_CARD_HEIGHT),
            Some(DragTarget::Task(2))
        );
        assert_eq!(
            hit_test(&board, area, 2, 13),
            Some(DragTarget::Column(ColumnKey::Todo))
        );
    }

    #[test]
    fn column_boundaries_match_rendered_split() {
        // Width not divisible by three: every cell must resolve to the
        // column whose rendered rectangle contains it.
        let board = board();
        let area = Rect::new(0, 0, 91, 30);
        let areas = column_areas(area);

        for (idx, rect) in areas.iter().enumerate() {
            let key = board.columns()[idx].key;
            for x in rect.left()..rect.right() {
                // y below every card, so each hit is a column background.
                match hit_test(&board, area, x, 28) {
                    Some(DragTarget::Column(hit)) => assert_eq!(hit, key, "x = {x}"),
                    other => panic!("unexpected target at x = {x}: {other:?}"),
                }
            }
        }
    }

    #[test]
    fn degenerate_width_resolves_without_panicking() {
        let area = Rect::new(0, 0, 2, 20);
        assert!(hit_test(&board(), area, 1, 1).is_some());
        assert_eq!(hit_test(&board(), area, 5, 1), None);
    }
}

#[cfg(test)]
mod proptest_tests {
    use super::*;
    use pinboard_core::{ColumnKey, Task};
    use proptest::prelude::*;

    proptest! {
        /// Hit-testing is total over the plane, every hit resolves to an
        /// element that exists on the board, and task hits are limited
        /// to the cards the renderer draws.
        #[test]
        fn hit_test_is_total_and_sound(x in any::<u16>(), y in any::<u16>()) {
            // More tasks than fit, so the capacity bound is exercised.
            let mut board = Board::new();
            for id in 1..=8u64 {
                board
                    .append_task(ColumnKey::Todo, Task::new(id, format!("T{id}"), 1))
                    .unwrap();
            }
            let area = Rect::new(0, 0, 90, 40);
            let capacity = visible_task_count(area.height - 2) as u64;

            match hit_test(&board, area, x, y) {
                Some(DragTarget::Task(id)) => {
                    prop_assert!(board.find_task(id).is_some());
                    prop_assert!(id <= capacity);
                }
                Some(DragTarget::Column(key)) => prop_assert!(board.column(key).is_some()),
                None => prop_assert!(!area.contains((x, y).into())),
            }
        }
    }
}
