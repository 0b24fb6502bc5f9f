//! Derived view builder.
//!
//! [`build_view`] computes the filtered and sorted projection of the
//! board that the renderer consumes. It is a pure function over an
//! immutable snapshot: the canonical board is cloned, never aliased, so
//! the projection can be discarded and recomputed at will.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::task::{Label, Priority, Task};

/// Which labels to keep in the projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelFilter {
    /// Keep every task.
    #[default]
    All,
    /// Keep only tasks carrying this label.
    Only(Label),
}

/// Inputs to the view projection, besides the board itself.
///
/// Each field toggles one step independently; the defaults disable all
/// three, making the projection an order-preserving copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewOptions {
    /// Label filter; `All` disables the step.
    pub filter: LabelFilter,
    /// Search text; blank (empty or whitespace-only) disables the step.
    pub search: String,
    /// Priority sort selection; `None` preserves column order.
    pub sort: Option<Priority>,
}

/// The rank a task's priority receives under a given sort selection.
///
/// The selected priority is always promoted to rank 3; the remaining two
/// keep a fixed secondary ranking. Note the "low" table ranks low above
/// medium above high, mirroring the dashboard's resolved behavior rather
/// than an ascending sort by base score.
const fn sort_rank(selected: Priority, priority: Priority) -> u8 {
    match (selected, priority) {
        (Priority::High, Priority::High)
        | (Priority::Medium, Priority::Medium)
        | (Priority::Low, Priority::Low) => 3,
        (Priority::High, Priority::Medium)
        | (Priority::Medium, Priority::High)
        | (Priority::Low, Priority::Medium) => 2,
        (Priority::High, Priority::Low)
        | (Priority::Medium, Priority::Low)
        | (Priority::Low, Priority::High) => 1,
    }
}

/// Returns `true` if the task matches the search text.
///
/// Case-insensitive substring match against title or description.
fn matches_search(task: &Task, needle: &str) -> bool {
    task.title.to_lowercase().contains(needle) || task.description.to_lowercase().contains(needle)
}

/// Builds the filtered/sorted projection of a board.
///
/// The result has the same columns (keys and titles) as the input, each
/// holding the transformed task list. The input board is not mutated.
///
/// # Examples
///
/// ```
/// use pinboard_core::{build_view, Board, ColumnKey, Task, ViewOptions};
///
/// let mut board = Board::new();
/// board.append_task(ColumnKey::Todo, Task::new(1, "Fix crash", 1)).unwrap();
///
/// let options = ViewOptions { search: "crash".into(), ..Default::default() };
/// let view = build_view(&board, &options);
/// assert_eq!(view.column(ColumnKey::Todo).unwrap().len(), 1);
///
/// let options = ViewOptions { search: "nothing".into(), ..Default::default() };
/// let view = build_view(&board, &options);
/// assert!(view.column(ColumnKey::Todo).unwrap().is_empty());
/// ```
#[must_use]
pub fn build_view(board: &Board, options: &ViewOptions) -> Board {
    let needle = options.search.trim().to_lowercase();

    let columns = board
        .columns()
        .iter()
        .map(|column| {
            let mut projected = column.clone();

            if !needle.is_empty() {
                projected.tasks.retain(|task| matches_search(task, &needle));
            }

            if let LabelFilter::Only(label) = options.filter {
                projected.tasks.retain(|task| task.label == label);
            }

            if let Some(selected) = options.sort {
                projected.tasks.sort_by(|a, b| {
                    sort_rank(selected, b.priority)
                        .cmp(&sort_rank(selected, a.priority))
                        .then_with(|| a.title.cmp(&b.title))
                });
            }

            projected
        })
        .collect();

    Board::with_columns(columns)
}
