//! Terminal user interface for the pinboard Kanban board.
//!
//! This crate renders a [`pinboard_core::Board`] as a three-column
//! Kanban view with keyboard navigation, mouse drag-and-drop, label
//! filtering, priority sorting, live search, and an add-task form.
//!
//! # Architecture
//!
//! The crate follows an update/view split:
//!
//! - [`event`]: Translates crossterm input events into
//!   [`pinboard_core::Message`] values, with one key map per input mode
//! - [`app`]: The [`App`] struct owning the run loop and message dispatch
//! - [`state`]: The [`AppState`] holding the canonical board and the
//!   view/selection state
//! - [`modal_state`]: Focus and editing state for the add-task form
//! - [`layout`]: Shared geometry constants and pointer hit-testing
//! - [`widgets`]: Pure rendering functions for each visual component
//! - [`terminal`]: Terminal setup, restore, and the panic hook
//!
//! Rendering always draws the *projection* of the board under the
//! current view options; drops are committed against the canonical
//! board, so a drag performed over a filtered view still lands on the
//! right task.

pub mod app;
pub mod event;
pub mod layout;
pub mod modal_state;
pub mod state;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

pub use app::App;
pub use modal_state::{ModalField, ModalState};
pub use state::AppState;
