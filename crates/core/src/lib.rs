//! Core domain types and logic for the pinboard application.
//!
//! This crate defines the Kanban board model and every operation over
//! it: the canonical store, the derived view projection, the drag
//! reconciliation machine, and the task creation workflow. It has no
//! rendering or input concerns; the TUI crate drives it through
//! messages and plain function calls.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`task`]: Task ids, labels, priorities, and the `Task` struct
//! - [`board`]: Columns and the canonical `Board` store
//! - [`user`]: The read-only assignee directory
//! - [`view`]: The pure filtered/sorted projection
//! - [`token`]: The drag identifier codec
//! - [`drag`]: The drag session state machine
//! - [`draft`]: The add-task form and submit workflow
//! - [`message`]: TUI event messages
//! - [`error`]: Error types for board operations
//!
//! # Examples
//!
//! Creating a task and moving it with a drag:
//!
//! ```
//! use pinboard_core::{
//!     token::{column_token, task_token},
//!     Board, ColumnKey, DragSession, TaskDraft, TaskIdGen, User, UserDirectory,
//! };
//!
//! let mut board = Board::new();
//! let users = UserDirectory::new(vec![User::new(1, "Maya", "avatars/maya.png")]);
//! let mut ids = TaskIdGen::new();
//!
//! // Create a task through the draft workflow.
//! let mut draft = TaskDraft::new();
//! draft.title = "Implement feature".into();
//! draft.assignee = Some(1);
//! let id = draft.submit(&mut board, &users, &mut ids).unwrap();
//!
//! // Drag it to the Done column.
//! let mut drag = DragSession::new();
//! drag.begin(task_token(id));
//! drag.finish(&mut board, Some(&column_token(ColumnKey::Done))).unwrap();
//! assert_eq!(board.column_of(id), Some(ColumnKey::Done));
//! ```

pub mod board;
pub mod draft;
pub mod drag;
pub mod dummy;
pub mod error;
pub mod message;
pub mod task;
pub mod token;
pub mod user;
pub mod view;

// Re-export primary types at crate root for convenience
pub use board::{Board, Column, ColumnKey};
pub use draft::TaskDraft;
pub use drag::{DragSession, DragState, DropOutcome};
pub use error::{Error, Result};
pub use message::Message;
pub use task::{Label, Priority, Task, TaskId, TaskIdGen};
pub use token::DragTarget;
pub use user::{User, UserDirectory, UserId};
pub use view::{build_view, LabelFilter, ViewOptions};
