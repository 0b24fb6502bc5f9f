//! Board and column types.
//!
//! The [`Board`] is the single source of truth for which tasks exist and
//! in what order. All reordering goes through [`Board::replace_column`]:
//! callers compute a whole new task list and swap it in, so readers never
//! observe a partially edited column.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::task::{Task, TaskId};

/// The workflow stage a column represents.
///
/// # Examples
///
/// ```
/// use pinboard_core::ColumnKey;
///
/// let key = ColumnKey::InProgress;
/// assert_eq!(key.display_name(), "In Progress");
/// assert_eq!(key.as_str(), "inprogress");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKey {
    /// Tasks waiting to be started.
    #[default]
    Todo,
    /// Tasks currently being worked on.
    InProgress,
    /// Completed tasks.
    Done,
}

impl ColumnKey {
    /// Returns all column keys in workflow order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Todo, Self::InProgress, Self::Done]
    }

    /// Returns a human-readable display name for the column.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }

    /// Returns the stable key string used in drag tokens.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "inprogress",
            Self::Done => "done",
        }
    }

    /// Parses a stable key string back into a column key.
    ///
    /// # Examples
    ///
    /// ```
    /// use pinboard_core::ColumnKey;
    ///
    /// assert_eq!(ColumnKey::parse("done"), Some(ColumnKey::Done));
    /// assert_eq!(ColumnKey::parse("archive"), None);
    /// ```
    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        Self::all().into_iter().find(|k| k.as_str() == key)
    }

    /// Returns the index of this column in the workflow (0-2).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Todo => 0,
            Self::InProgress => 1,
            Self::Done => 2,
        }
    }

    /// Creates a `ColumnKey` from its index.
    ///
    /// Returns `None` if the index is out of range (>= 3).
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Todo),
            1 => Some(Self::InProgress),
            2 => Some(Self::Done),
            _ => None,
        }
    }
}

/// A single column on the board: an ordered bucket of tasks.
///
/// Task order within a column is significant; it is the rendered order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// The workflow stage of this column.
    pub key: ColumnKey,
    /// Display title.
    pub title: String,
    /// Tasks in rendered order.
    pub tasks: Vec<Task>,
}

impl Column {
    /// Creates an empty column titled after its key.
    #[must_use]
    pub fn new(key: ColumnKey) -> Self {
        Self {
            key,
            title: key.display_name().to_string(),
            tasks: Vec::new(),
        }
    }

    /// Returns the number of tasks in this column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` if the column has no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns a reference to a task by id, if present.
    #[must_use]
    pub fn get_task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Returns the index of a task within this column, if present.
    #[must_use]
    pub fn position_of(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }
}

/// The canonical board state: an ordered collection of columns.
///
/// Invariants: every task id appears in exactly one column, and ids are
/// unique within a column. Both are preserved because the only mutation
/// paths are [`Board::replace_column`] and [`Board::append_task`].
///
/// # Examples
///
/// ```
/// use pinboard_core::{Board, ColumnKey, Task};
///
/// let mut board = Board::new();
/// board.append_task(ColumnKey::Todo, Task::new(1, "Plan sprint", 1)).unwrap();
/// assert_eq!(board.column_of(1), Some(ColumnKey::Todo));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    columns: Vec<Column>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates an empty board with the three standard columns.
    #[must_use]
    pub fn new() -> Self {
        Self {
            columns: ColumnKey::all().into_iter().map(Column::new).collect(),
        }
    }

    /// Creates a board from an explicit column list.
    ///
    /// The list does not have to cover every [`ColumnKey`]; operations
    /// addressing an absent column fail with [`Error::UnknownColumn`].
    #[must_use]
    pub fn with_columns(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Returns all columns in board order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns a reference to the column with the given key, if present.
    #[must_use]
    pub fn column(&self, key: ColumnKey) -> Option<&Column> {
        self.columns.iter().find(|c| c.key == key)
    }

    fn column_mut(&mut self, key: ColumnKey) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| c.key == key)
    }

    /// Atomically replaces a column's entire task list.
    ///
    /// This is the sole reordering primitive: all moves are expressed as
    /// "compute a new list, then replace".
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownColumn`] if the board has no such column.
    pub fn replace_column(&mut self, key: ColumnKey, tasks: Vec<Task>) -> Result<()> {
        let column = self.column_mut(key).ok_or(Error::UnknownColumn(key))?;
        column.tasks = tasks;
        Ok(())
    }

    /// Appends a task to the end of a column.
    ///
    /// Used by the task creation workflow.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownColumn`] if the board has no such column.
    pub fn append_task(&mut self, key: ColumnKey, task: Task) -> Result<()> {
        let column = self.column_mut(key).ok_or(Error::UnknownColumn(key))?;
        column.tasks.push(task);
        Ok(())
    }

    /// Finds a task by id across all columns.
    #[must_use]
    pub fn find_task(&self, id: TaskId) -> Option<&Task> {
        self.columns.iter().find_map(|c| c.get_task(id))
    }

    /// Returns the key of the column currently holding the given task.
    ///
    /// The uniqueness invariant guarantees at most one match.
    #[must_use]
    pub fn column_of(&self, id: TaskId) -> Option<ColumnKey> {
        self.columns
            .iter()
            .find(|c| c.get_task(id).is_some())
            .map(|c| c.key)
    }

    /// Returns the total number of tasks across all columns.
    #[must_use]
    pub fn total_tasks(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }
}
