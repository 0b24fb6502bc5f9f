//! Dummy data generation for testing and demonstration.
//!
//! This module provides the sample board and user directory the
//! application starts with, plus an internal builder to keep the task
//! definitions readable.
//!
//! # Examples
//!
//! ```
//! use pinboard_core::dummy::dummy_board;
//!
//! let board = dummy_board();
//! assert_eq!(board.total_tasks(), 8);
//! ```

use chrono::NaiveDate;

use crate::board::{Board, ColumnKey};
use crate::task::{Label, Priority, Task, TaskId};
use crate::user::{User, UserDirectory, UserId};

/// A builder for creating tasks with specific labels and priorities.
///
/// This is an internal helper to reduce boilerplate when creating
/// multiple tasks with non-default fields.
struct TaskBuilder {
    task: Task,
}

impl TaskBuilder {
    /// Creates a builder for a task with the given id, title, and assignee.
    fn new(id: TaskId, title: impl Into<String>, assigned_to: UserId) -> Self {
        Self {
            task: Task::new(id, title, assigned_to),
        }
    }

    /// Sets the task description.
    fn description(mut self, description: impl Into<String>) -> Self {
        self.task.description = description.into();
        self
    }

    /// Sets the task label.
    fn label(mut self, label: Label) -> Self {
        self.task.label = label;
        self
    }

    /// Sets the task priority.
    fn priority(mut self, priority: Priority) -> Self {
        self.task.priority = priority;
        self
    }

    /// Sets the due date.
    fn due(mut self, year: i32, month: u32, day: u32) -> Self {
        self.task.due = NaiveDate::from_ymd_opt(year, month, day);
        self
    }

    /// Sets the comment and like counters.
    fn activity(mut self, comments: u32, likes: u32) -> Self {
        self.task.comments = comments;
        self.task.likes = likes;
        self
    }

    /// Builds the configured task.
    fn build(self) -> Task {
        self.task
    }
}

/// Generates the sample user directory.
///
/// # Examples
///
/// ```
/// use pinboard_core::dummy::sample_users;
///
/// let users = sample_users();
/// assert_eq!(users.len(), 4);
/// assert!(users.contains(1));
/// ```
#[must_use]
pub fn sample_users() -> UserDirectory {
    UserDirectory::new(vec![
        User::new(1, "Maya Chen", "avatars/maya.png"),
        User::new(2, "Jonas Weber", "avatars/jonas.png"),
        User::new(3, "Priya Nair", "avatars/priya.png"),
        User::new(4, "Tom Okafor", "avatars/tom.png"),
    ])
}

/// Generates a sample board with realistic tasks.
///
/// Creates a board with eight tasks (ids 1 through 8) distributed
/// across the three columns:
///
/// - **To Do**: 4 tasks
/// - **In Progress**: 3 tasks
/// - **Done**: 1 task
///
/// Every assignee exists in [`sample_users`].
///
/// # Examples
///
/// ```
/// use pinboard_core::dummy::dummy_board;
/// use pinboard_core::ColumnKey;
///
/// let board = dummy_board();
/// assert_eq!(board.column(ColumnKey::Todo).unwrap().len(), 4);
/// assert_eq!(board.column(ColumnKey::InProgress).unwrap().len(), 3);
/// assert_eq!(board.column(ColumnKey::Done).unwrap().len(), 1);
/// ```
#[must_use]
pub fn dummy_board() -> Board {
    let mut board = Board::new();

    let todo = vec![
        TaskBuilder::new(1, "Research competitor onboarding", 1)
            .description("Collect screenshots of the first-run flow from five competing apps.")
            .label(Label::Research)
            .priority(Priority::Medium)
            .due(2026, 9, 12)
            .activity(3, 5)
            .build(),
        TaskBuilder::new(2, "Fix login redirect loop", 2)
            .description("Safari users bounce between /login and /home when cookies are blocked.")
            .label(Label::Bug)
            .priority(Priority::High)
            .due(2026, 9, 4)
            .activity(7, 2)
            .build(),
        TaskBuilder::new(3, "Draft pricing page copy", 3)
            .description("Three tiers, annual discount callout, FAQ section.")
            .label(Label::Copywriting)
            .priority(Priority::Low)
            .activity(1, 0)
            .build(),
        TaskBuilder::new(4, "Sketch empty-state illustrations", 4)
            .description("Boards, search results, and notifications all need one.")
            .label(Label::Design)
            .priority(Priority::Medium)
            .activity(0, 4)
            .build(),
    ];

    let in_progress = vec![
        TaskBuilder::new(5, "Paginate the activity feed", 2)
            .description("Cursor-based pagination, 25 items per page.")
            .label(Label::Api)
            .priority(Priority::High)
            .due(2026, 9, 8)
            .activity(12, 6)
            .build(),
        TaskBuilder::new(6, "Rework settings navigation", 1)
            .description("Flatten the tree to two levels and add breadcrumbs.")
            .label(Label::UiUx)
            .priority(Priority::Medium)
            .activity(4, 3)
            .build(),
        TaskBuilder::new(7, "Spike: offline draft sync", 4)
            .description("Evaluate CRDT vs last-write-wins for the notes field.")
            .label(Label::Ideas)
            .priority(Priority::Low)
            .activity(9, 11)
            .build(),
    ];

    let done = vec![
        TaskBuilder::new(8, "Review Q3 dependency upgrades", 3)
            .description("All green except the tracing bump, which needs a changelog read.")
            .label(Label::Review)
            .priority(Priority::Medium)
            .activity(6, 1)
            .build(),
    ];

    // The standard columns always exist on a fresh board.
    let _ = board.replace_column(ColumnKey::Todo, todo);
    let _ = board.replace_column(ColumnKey::InProgress, in_progress);
    let _ = board.replace_column(ColumnKey::Done, done);

    board
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique_and_sequential() {
        let board = dummy_board();
        let ids: HashSet<TaskId> = board
            .columns()
            .iter()
            .flat_map(|c| c.tasks.iter().map(|t| t.id))
            .collect();
        assert_eq!(ids.len(), 8);
        assert_eq!(ids, (1..=8).collect());
    }

    #[test]
    fn every_assignee_exists() {
        let board = dummy_board();
        let users = sample_users();
        for column in board.columns() {
            for task in &column.tasks {
                assert!(users.contains(task.assigned_to), "task {}", task.id);
            }
        }
    }

    #[test]
    fn titles_are_nonblank() {
        let board = dummy_board();
        for column in board.columns() {
            for task in &column.tasks {
                assert!(!task.title.trim().is_empty());
            }
        }
    }
}
