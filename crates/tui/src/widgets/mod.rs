//! Widget components for the pinboard TUI.
//!
//! This module provides reusable rendering functions for the Kanban
//! board UI, organized into focused submodules for each visual
//! component.
//!
//! # Overview
//!
//! The widget system follows a functional rendering approach where each
//! widget is a pure function that renders state to a buffer. This
//! enables easy testing and composition.
//!
//! # Modules
//!
//! - [`board`]: Renders the complete board with three columns
//! - [`column`]: Renders individual columns with task lists
//! - [`task_card`]: Renders task cards with label/priority color coding
//! - [`drag_overlay`]: Renders the floating card during a drag
//! - [`modal`]: Renders the add-task form
//! - [`status_bar`]: Renders the footer with view options and hints
//! - [`help`]: Renders the help overlay
//!
//! # Example
//!
//! ```
//! use pinboard_core::{Board, ColumnKey, Task, UserDirectory};
//! use pinboard_tui::widgets;
//! use ratatui::buffer::Buffer;
//! use ratatui::layout::Rect;
//!
//! let mut board = Board::new();
//! board.append_task(ColumnKey::Todo, Task::new(1, "Example", 1)).unwrap();
//!
//! let area = Rect::new(0, 0, 90, 24);
//! let mut buf = Buffer::empty(area);
//!
//! widgets::render_board(&board, &UserDirectory::default(), 0, Some(0), None, area, &mut buf);
//! ```

pub mod board;
pub mod column;
pub mod drag_overlay;
pub mod help;
pub mod modal;
pub mod status_bar;
pub mod task_card;

// Re-export primary rendering functions for convenience
pub use board::render_board;
pub use column::{ColumnPosition, render_column};
pub use drag_overlay::render_drag_overlay;
pub use help::render_help_overlay;
pub use modal::render_modal;
pub use status_bar::render_status_bar;
pub use task_card::{hex_color, label_color, priority_color, render_task_card};
