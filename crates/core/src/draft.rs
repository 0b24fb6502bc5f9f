//! Task creation workflow.
//!
//! A [`TaskDraft`] accumulates the fields of the add-task form. Nothing
//! touches the board until [`TaskDraft::submit`], which validates the
//! draft, allocates a fresh id, appends the task, and resets the form.
//! A failed submit leaves both the board and the draft untouched so the
//! user can correct the input.

use chrono::{NaiveDate, Utc};
use tracing::info;

use crate::board::{Board, ColumnKey};
use crate::error::{Error, Result};
use crate::task::{Label, Priority, Task, TaskId, TaskIdGen};
use crate::user::{UserDirectory, UserId};

/// In-progress input for a new task.
///
/// # Examples
///
/// ```
/// use pinboard_core::{Board, ColumnKey, TaskDraft, TaskIdGen, User, UserDirectory};
///
/// let mut board = Board::new();
/// let users = UserDirectory::new(vec![User::new(1, "Maya", "avatars/maya.png")]);
/// let mut ids = TaskIdGen::new();
///
/// let mut draft = TaskDraft::new();
/// draft.title = "Write changelog".into();
/// draft.assignee = Some(1);
///
/// let id = draft.submit(&mut board, &users, &mut ids).unwrap();
/// assert_eq!(board.column_of(id), Some(ColumnKey::Todo));
/// assert!(draft.title.is_empty()); // Reset for the next task.
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    /// Title text as typed; trimmed on submit.
    pub title: String,
    /// Description text as typed.
    pub description: String,
    /// Selected label.
    pub label: Label,
    /// Selected priority.
    pub priority: Priority,
    /// Column the new task will join.
    pub column: ColumnKey,
    /// Selected assignee, if any.
    pub assignee: Option<UserId>,
    /// Optional due date.
    pub due: Option<NaiveDate>,
}

impl TaskDraft {
    /// Creates an empty draft with default selections.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the draft without committing anything.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TitleRequired`] if the title is blank after
    /// trimming, [`Error::AssigneeRequired`] if no assignee is selected,
    /// or [`Error::UnknownAssignee`] if the selection is not in the
    /// directory.
    pub fn validate(&self, users: &UserDirectory) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::TitleRequired);
        }
        let Some(assignee) = self.assignee else {
            return Err(Error::AssigneeRequired);
        };
        if !users.contains(assignee) {
            return Err(Error::UnknownAssignee(assignee));
        }
        Ok(())
    }

    /// Validates the draft, appends the resulting task, and resets the
    /// form for the next entry.
    ///
    /// The new task gets a fresh id, zeroed counters, and the current
    /// time as its creation stamp. Returns the id on success.
    ///
    /// # Errors
    ///
    /// Any error from [`TaskDraft::validate`], or
    /// [`Error::UnknownColumn`] if the target column is absent. The
    /// board and the draft are unchanged on error; the id allocator
    /// only advances on success.
    pub fn submit(
        &mut self,
        board: &mut Board,
        users: &UserDirectory,
        ids: &mut TaskIdGen,
    ) -> Result<TaskId> {
        self.validate(users)?;
        // Validate the column before allocating so a failure costs no id.
        let column = self.column;
        if board.column(column).is_none() {
            return Err(Error::UnknownColumn(column));
        }

        let id = ids.allocate();
        let task = Task {
            id,
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            label: self.label,
            priority: self.priority,
            // Checked by validate above.
            assigned_to: self.assignee.unwrap_or_default(),
            due: self.due,
            comments: 0,
            likes: 0,
            created_at: Utc::now(),
        };
        board.append_task(column, task)?;
        info!(task = id, column = ?column, "task created");

        *self = Self::new();
        Ok(id)
    }
}
