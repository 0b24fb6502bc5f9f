//! Error types for the pinboard-core crate.
//!
//! Two categories share a single enum: validation errors (a user input
//! failed a precondition; the operation is aborted and the message is
//! surfaced) and invariant violations (the board reached a state that
//! should be impossible; callers log these and leave the board alone).

use thiserror::Error;

use crate::board::ColumnKey;
use crate::task::TaskId;
use crate::user::UserId;

/// Errors that can occur during board operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A task title was empty after trimming.
    #[error("task title is required")]
    TitleRequired,

    /// No assignee was selected for a new task.
    #[error("task must be assigned to a user")]
    AssigneeRequired,

    /// The selected assignee does not exist in the user directory.
    #[error("unknown assignee: user {0}")]
    UnknownAssignee(UserId),

    /// The board has no column with the given key.
    #[error("unknown column: {0:?}")]
    UnknownColumn(ColumnKey),

    /// A task that was expected on the board could not be found in any
    /// column. This is an invariant violation, not a user error.
    #[error("task {0} not found in any column")]
    TaskNotOnBoard(TaskId),
}

impl Error {
    /// Returns `true` for user-input validation failures.
    ///
    /// Validation failures are surfaced to the user and abort the
    /// operation; anything else indicates a bug upstream and should be
    /// logged rather than shown.
    ///
    /// # Examples
    ///
    /// ```
    /// use pinboard_core::Error;
    ///
    /// assert!(Error::TitleRequired.is_validation());
    /// assert!(!Error::TaskNotOnBoard(7).is_validation());
    /// ```
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        !matches!(self, Self::TaskNotOnBoard(_))
    }
}

/// A specialized Result type for board operations.
pub type Result<T> = std::result::Result<T, Error>;
