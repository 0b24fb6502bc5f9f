//! Task-related types for the Kanban board.
//!
//! This module defines the task structure itself along with the closed
//! label and priority sets and the monotonic id allocator.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::user::UserId;

/// Unique identifier for a task.
///
/// Ids are monotonically assigned at creation time by [`TaskIdGen`].
pub type TaskId = u64;

/// Monotonic allocator for task ids.
///
/// Every task created through the workflow receives a fresh id that is
/// strictly greater than any id handed out before.
///
/// # Examples
///
/// ```
/// use pinboard_core::TaskIdGen;
///
/// let mut ids = TaskIdGen::new();
/// let first = ids.allocate();
/// let second = ids.allocate();
/// assert!(second > first);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskIdGen {
    next: TaskId,
}

impl Default for TaskIdGen {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskIdGen {
    /// Creates an allocator starting at id 1.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 1 }
    }

    /// Creates an allocator that continues past every id already on the board.
    ///
    /// # Examples
    ///
    /// ```
    /// use pinboard_core::{dummy::dummy_board, TaskIdGen};
    ///
    /// let board = dummy_board();
    /// let mut ids = TaskIdGen::seeded_from(&board);
    /// let fresh = ids.allocate();
    /// assert!(board.find_task(fresh).is_none());
    /// ```
    #[must_use]
    pub fn seeded_from(board: &Board) -> Self {
        let max = board
            .columns()
            .iter()
            .flat_map(|column| column.tasks.iter())
            .map(|task| task.id)
            .max()
            .unwrap_or(0);
        Self { next: max + 1 }
    }

    /// Hands out the next id.
    pub fn allocate(&mut self) -> TaskId {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// The category a task belongs to.
///
/// Labels form a closed set; free-form label strings from the outside
/// world go through [`Label::parse`], which rejects anything unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    #[default]
    Research,
    Development,
    Bug,
    UiUx,
    Ideas,
    Review,
    Api,
    Design,
    Copywriting,
}

impl Label {
    /// Returns all labels in display order.
    #[must_use]
    pub const fn all() -> [Self; 9] {
        [
            Self::Research,
            Self::Development,
            Self::Bug,
            Self::UiUx,
            Self::Ideas,
            Self::Review,
            Self::Api,
            Self::Design,
            Self::Copywriting,
        ]
    }

    /// Returns a human-readable display name for the label.
    ///
    /// # Examples
    ///
    /// ```
    /// use pinboard_core::Label;
    ///
    /// assert_eq!(Label::UiUx.display_name(), "UIUX");
    /// assert_eq!(Label::Api.display_name(), "API");
    /// ```
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Research => "Research",
            Self::Development => "Development",
            Self::Bug => "Bug",
            Self::UiUx => "UIUX",
            Self::Ideas => "Ideas",
            Self::Review => "Review",
            Self::Api => "API",
            Self::Design => "Design",
            Self::Copywriting => "Copywriting",
        }
    }

    /// Parses a display name back into a label.
    ///
    /// Returns `None` for unrecognized names; this is the fallback point
    /// for values arriving from outside the closed set.
    ///
    /// # Examples
    ///
    /// ```
    /// use pinboard_core::Label;
    ///
    /// assert_eq!(Label::parse("Bug"), Some(Label::Bug));
    /// assert_eq!(Label::parse("Gardening"), None);
    /// ```
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|label| label.display_name() == name)
    }

    /// Returns the hex style token for this label (no leading `#`).
    ///
    /// The token is determined solely by the label, so a task's label
    /// color can never disagree with its label.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Research => "3B82F6",    // Blue
            Self::Development => "22C55E", // Green
            Self::Bug => "EF4444",         // Red
            Self::UiUx => "EC4899",        // Pink
            Self::Ideas => "A855F7",       // Purple
            Self::Review => "F97316",      // Orange
            Self::Api => "14B8A6",         // Teal
            Self::Design => "6366F1",      // Indigo
            Self::Copywriting => "EAB308", // Yellow
        }
    }
}

/// The urgency of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// Returns all priorities from most to least urgent.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::High, Self::Medium, Self::Low]
    }

    /// Returns a human-readable display name for the priority.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// Parses a lowercase priority name.
    ///
    /// # Examples
    ///
    /// ```
    /// use pinboard_core::Priority;
    ///
    /// assert_eq!(Priority::parse("high"), Some(Priority::High));
    /// assert_eq!(Priority::parse("urgent"), None);
    /// ```
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }

    /// Returns the hex style token for this priority (no leading `#`).
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::High => "EF4444",   // Red
            Self::Medium => "EAB308", // Yellow
            Self::Low => "22C55E",    // Green
        }
    }
}

/// A task on the Kanban board.
///
/// Column membership and ordering live on the board, not on the task;
/// the drag session controller is the only thing that changes them.
///
/// # Examples
///
/// ```
/// use pinboard_core::{Label, Priority, Task};
///
/// let task = Task::new(1, "Fix login flow", 2);
/// assert_eq!(task.label, Label::Research);
/// assert_eq!(task.priority, Priority::Medium);
/// assert_eq!(task.comments, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier for this task.
    pub id: TaskId,
    /// Short summary of the task. Non-empty by construction.
    pub title: String,
    /// Longer description; empty by default.
    pub description: String,
    /// Category label.
    pub label: Label,
    /// Urgency.
    pub priority: Priority,
    /// Id of the user responsible for the task.
    pub assigned_to: UserId,
    /// Optional due date.
    pub due: Option<NaiveDate>,
    /// Number of comments on the task. Not mutated by the core.
    pub comments: u32,
    /// Number of likes on the task. Not mutated by the core.
    pub likes: u32,
    /// When this task was created.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task with default label, priority, and counters.
    ///
    /// # Examples
    ///
    /// ```
    /// use pinboard_core::Task;
    ///
    /// let task = Task::new(7, "Write release notes", 1);
    /// assert_eq!(task.id, 7);
    /// assert!(task.due.is_none());
    /// ```
    #[must_use]
    pub fn new(id: TaskId, title: impl Into<String>, assigned_to: UserId) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            label: Label::default(),
            priority: Priority::default(),
            assigned_to,
            due: None,
            comments: 0,
            likes: 0,
            created_at: Utc::now(),
        }
    }

    /// Returns the style token derived from this task's label.
    #[must_use]
    pub const fn label_color(&self) -> &'static str {
        self.label.color()
    }

    /// Returns the style token derived from this task's priority.
    #[must_use]
    pub const fn priority_color(&self) -> &'static str {
        self.priority.color()
    }
}
