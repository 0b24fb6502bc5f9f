//! Drag session controller.
//!
//! A [`DragSession`] is a two-state machine over a single active drag.
//! The interesting work happens at drag-end: decoding the active and
//! over tokens, resolving source and target columns, and committing the
//! rewritten task lists through [`Board::replace_column`]. Every
//! unresolvable input degrades to a no-op; the board is never left
//! partially mutated.

use std::mem;

use tracing::{debug, warn};

use crate::board::{Board, ColumnKey};
use crate::error::{Error, Result};
use crate::token::{parse_column_token, parse_task_token};

/// The state of the drag machine.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A drag is in progress; `active` is the dragged element's token.
    Dragging {
        /// Token of the element being dragged.
        active: String,
    },
}

/// How a completed drag changed the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// A task changed position within one column.
    Reordered(ColumnKey),
    /// A task moved between two columns.
    Moved {
        /// Column the task left.
        from: ColumnKey,
        /// Column the task joined.
        to: ColumnKey,
    },
    /// Nothing changed (invalid drop target, malformed token, or no
    /// active drag).
    NoOp,
}

/// Controller for the single active drag gesture.
///
/// # Examples
///
/// ```
/// use pinboard_core::{drag::DragSession, token::task_token, Board, ColumnKey, Task};
///
/// let mut board = Board::new();
/// board.append_task(ColumnKey::Todo, Task::new(1, "A", 1)).unwrap();
///
/// let mut session = DragSession::new();
/// session.begin(task_token(1));
/// assert!(session.is_dragging());
///
/// // Released outside any target: no-op, back to Idle.
/// let outcome = session.finish(&mut board, None).unwrap();
/// assert!(!session.is_dragging());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DragSession {
    state: DragState,
}

impl DragSession {
    /// Creates an idle session.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: DragState::Idle,
        }
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Returns the active token, if a drag is in progress.
    #[must_use]
    pub fn active_token(&self) -> Option<&str> {
        match &self.state {
            DragState::Dragging { active } => Some(active),
            DragState::Idle => None,
        }
    }

    /// Begins a drag, recording the active token.
    ///
    /// No board state changes until the drag ends.
    pub fn begin(&mut self, token: impl Into<String>) {
        let active = token.into();
        debug!(token = %active, "drag started");
        self.state = DragState::Dragging { active };
    }

    /// Abandons the active drag without touching the board.
    ///
    /// Used for untracked cancellations such as escape.
    pub fn cancel(&mut self) {
        if self.is_dragging() {
            debug!("drag cancelled");
        }
        self.state = DragState::Idle;
    }

    /// Ends the active drag, committing the move it describes.
    ///
    /// `over` is the token of the element the pointer was released on,
    /// or `None` when the drop landed outside every target. The session
    /// always returns to idle, whatever the outcome.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TaskNotOnBoard`] when the active token decodes
    /// to a task that no column contains. That breaks the uniqueness
    /// invariant's "exactly one" guarantee and indicates a bug upstream;
    /// the board is left untouched.
    pub fn finish(&mut self, board: &mut Board, over: Option<&str>) -> Result<DropOutcome> {
        let DragState::Dragging { active } = mem::take(&mut self.state) else {
            return Ok(DropOutcome::NoOp);
        };

        let Some(over) = over else {
            debug!(token = %active, "dropped outside any target");
            return Ok(DropOutcome::NoOp);
        };

        let Some(active_id) = parse_task_token(&active) else {
            return Ok(DropOutcome::NoOp);
        };
        let over_task = parse_task_token(over);
        let over_column = parse_column_token(over);

        let Some(source) = board.column_of(active_id) else {
            warn!(task = active_id, "active task missing from every column");
            return Err(Error::TaskNotOnBoard(active_id));
        };

        // Target resolution: a task token wins if it resolves to a column;
        // otherwise fall back to a column token. An over-task that is not
        // on the board resolves nothing.
        let target = match (over_task, over_column) {
            (Some(over_id), _) => board.column_of(over_id),
            (None, Some(key)) => board.column(key).map(|c| c.key),
            (None, None) => None,
        };
        let Some(target) = target else {
            return Ok(DropOutcome::NoOp);
        };

        // Same-column drop on a task: move the dragged task to the index
        // the over-task currently occupies (remove then reinsert).
        if source == target && let Some(over_id) = over_task {
            let Some(column) = board.column(source) else {
                return Ok(DropOutcome::NoOp);
            };
            let (Some(old_idx), Some(new_idx)) =
                (column.position_of(active_id), column.position_of(over_id))
            else {
                return Ok(DropOutcome::NoOp);
            };

            let mut tasks = column.tasks.clone();
            let task = tasks.remove(old_idx);
            tasks.insert(new_idx, task);
            board.replace_column(source, tasks)?;

            debug!(task = active_id, column = ?source, "task reordered");
            return Ok(DropOutcome::Reordered(source));
        }

        // Cross-column move, or a same-column drop on the column
        // background (which sends the task to the end).
        let Some(mut source_tasks) = board.column(source).map(|c| c.tasks.clone()) else {
            return Ok(DropOutcome::NoOp);
        };
        let Some(pos) = source_tasks.iter().position(|t| t.id == active_id) else {
            return Ok(DropOutcome::NoOp);
        };
        let task = source_tasks.remove(pos);

        if source == target {
            source_tasks.push(task);
            board.replace_column(source, source_tasks)?;
            debug!(task = active_id, column = ?source, "task moved to end of column");
            return Ok(DropOutcome::Reordered(source));
        }

        let Some(mut target_tasks) = board.column(target).map(|c| c.tasks.clone()) else {
            return Ok(DropOutcome::NoOp);
        };
        match over_task.and_then(|id| target_tasks.iter().position(|t| t.id == id)) {
            // Dropped onto a task: insert before it, shifting the rest right.
            Some(idx) => target_tasks.insert(idx, task),
            // Dropped onto the column itself (empty or background): append.
            None => target_tasks.push(task),
        }

        board.replace_column(source, source_tasks)?;
        board.replace_column(target, target_tasks)?;

        debug!(task = active_id, from = ?source, to = ?target, "task moved between columns");
        Ok(DropOutcome::Moved {
            from: source,
            to: target,
        })
    }
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use crate::task::Task;
    use crate::token::{column_token, task_token};
    use proptest::prelude::*;

    fn arb_board() -> impl Strategy<Value = Board> {
        // Up to 9 tasks distributed over the three columns.
        proptest::collection::vec(0usize..3, 0..9).prop_map(|placements| {
            let mut board = Board::new();
            for (i, column_idx) in placements.into_iter().enumerate() {
                let id = (i + 1) as u64;
                let key = ColumnKey::from_index(column_idx).expect("index in range");
                board
                    .append_task(key, Task::new(id, format!("Task {id}"), 1))
                    .expect("column exists");
            }
            board
        })
    }

    fn arb_token() -> impl Strategy<Value = String> {
        prop_oneof![
            (0u64..12).prop_map(task_token),
            (0usize..3).prop_map(|i| column_token(ColumnKey::from_index(i).expect("in range"))),
            "[a-z-]{0,12}",
        ]
    }

    proptest! {
        /// Any sequence of drag gestures preserves the uniqueness
        /// invariant and the total set of task ids.
        #[test]
        fn drags_preserve_uniqueness(
            board in arb_board(),
            gestures in proptest::collection::vec((arb_token(), proptest::option::of(arb_token())), 0..12),
        ) {
            let mut board = board;
            let before: usize = board.total_tasks();
            let mut session = DragSession::new();

            for (active, over) in gestures {
                session.begin(active);
                // Invariant violations abort the gesture but must not corrupt state.
                let _ = session.finish(&mut board, over.as_deref());
                prop_assert!(!session.is_dragging());
            }

            prop_assert_eq!(board.total_tasks(), before);
            let mut seen = std::collections::HashSet::new();
            for column in board.columns() {
                for task in &column.tasks {
                    prop_assert!(seen.insert(task.id));
                }
            }
        }
    }
}
