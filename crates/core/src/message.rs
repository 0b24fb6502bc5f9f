//! TUI message types for event handling.
//!
//! This module defines the message enum used for communication between
//! the TUI input handler and the application state.

use serde::{Deserialize, Serialize};

/// Messages that represent user actions in the TUI.
///
/// These messages are produced by the input handler and consumed by
/// the application state to update the UI.
///
/// # Examples
///
/// ```
/// use pinboard_core::Message;
///
/// let msg = Message::NavigateRight;
/// assert!(matches!(msg, Message::NavigateRight));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Move selection to the left column.
    NavigateLeft,
    /// Move selection to the right column.
    NavigateRight,
    /// Move selection up within the current column.
    NavigateUp,
    /// Move selection down within the current column.
    NavigateDown,
    /// Escape: close overlay or cancel the active drag (contextual).
    Escape,
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,

    // --- Pointer messages ---
    /// Primary button pressed at coordinates (column, row).
    PointerDown {
        /// Column (x coordinate).
        column: u16,
        /// Row (y coordinate).
        row: u16,
    },
    /// Pointer moved with the button held.
    PointerMove {
        /// Column (x coordinate).
        column: u16,
        /// Row (y coordinate).
        row: u16,
    },
    /// Primary button released at coordinates (column, row).
    PointerUp {
        /// Column (x coordinate).
        column: u16,
        /// Row (y coordinate).
        row: u16,
    },

    // --- View option messages ---
    /// Begin typing a search query.
    BeginSearch,
    /// Input a character into the search query.
    SearchInput {
        /// The character that was typed.
        ch: char,
    },
    /// Delete the last character of the search query.
    SearchBackspace,
    /// Leave search entry mode, keeping the query.
    EndSearch,
    /// Cycle the label filter to the next selection.
    CycleFilter,
    /// Cycle the priority sort to the next selection.
    CycleSort,

    // --- Add-task modal messages ---
    /// Open the add-task modal.
    OpenAddTask,
    /// Close the modal, discarding the draft.
    CloseAddTask,
    /// Move to the next modal field.
    ModalNextField,
    /// Move to the previous modal field.
    ModalPrevField,
    /// Cycle the focused field's option (label, priority, column, assignee).
    ModalCycleOption {
        /// Direction to cycle (positive = forward, negative = backward).
        delta: i32,
    },
    /// Input a character into the focused text field.
    ModalInput {
        /// The character that was typed.
        ch: char,
    },
    /// Delete the last character of the focused text field.
    ModalBackspace,
    /// Submit the draft.
    ModalConfirm,
}

impl Message {
    /// Returns `true` if this message is a navigation action.
    ///
    /// # Examples
    ///
    /// ```
    /// use pinboard_core::Message;
    ///
    /// assert!(Message::NavigateLeft.is_navigation());
    /// assert!(!Message::Quit.is_navigation());
    /// ```
    #[must_use]
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::NavigateLeft | Self::NavigateRight | Self::NavigateUp | Self::NavigateDown
        )
    }

    /// Returns `true` if this message should terminate the application.
    #[must_use]
    pub fn is_terminating(&self) -> bool {
        matches!(self, Self::Quit)
    }

    /// Returns `true` if this message carries pointer coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// use pinboard_core::Message;
    ///
    /// assert!(Message::PointerDown { column: 4, row: 2 }.is_pointer());
    /// assert!(!Message::Escape.is_pointer());
    /// ```
    #[must_use]
    pub fn is_pointer(&self) -> bool {
        matches!(
            self,
            Self::PointerDown { .. } | Self::PointerMove { .. } | Self::PointerUp { .. }
        )
    }

    /// Returns `true` if this message is an add-task modal action.
    #[must_use]
    pub fn is_modal(&self) -> bool {
        matches!(
            self,
            Self::OpenAddTask
                | Self::CloseAddTask
                | Self::ModalNextField
                | Self::ModalPrevField
                | Self::ModalCycleOption { .. }
                | Self::ModalInput { .. }
                | Self::ModalBackspace
                | Self::ModalConfirm
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_detection() {
        assert!(Message::NavigateLeft.is_navigation());
        assert!(Message::NavigateRight.is_navigation());
        assert!(Message::NavigateUp.is_navigation());
        assert!(Message::NavigateDown.is_navigation());
        assert!(!Message::Escape.is_navigation());
        assert!(!Message::CycleFilter.is_navigation());
    }

    #[test]
    fn terminating_detection() {
        assert!(Message::Quit.is_terminating());
        assert!(!Message::Escape.is_terminating());
        assert!(!Message::CloseAddTask.is_terminating());
    }

    #[test]
    fn pointer_detection() {
        assert!(Message::PointerDown { column: 0, row: 0 }.is_pointer());
        assert!(Message::PointerMove { column: 3, row: 9 }.is_pointer());
        assert!(Message::PointerUp { column: 7, row: 1 }.is_pointer());
        assert!(!Message::NavigateDown.is_pointer());
    }

    #[test]
    fn modal_detection() {
        assert!(Message::OpenAddTask.is_modal());
        assert!(Message::CloseAddTask.is_modal());
        assert!(Message::ModalNextField.is_modal());
        assert!(Message::ModalPrevField.is_modal());
        assert!(Message::ModalCycleOption { delta: 1 }.is_modal());
        assert!(Message::ModalInput { ch: 'a' }.is_modal());
        assert!(Message::ModalBackspace.is_modal());
        assert!(Message::ModalConfirm.is_modal());
        assert!(!Message::BeginSearch.is_modal());
    }

    #[test]
    fn serialization_roundtrip() {
        let messages = vec![
            Message::NavigateLeft,
            Message::NavigateRight,
            Message::NavigateUp,
            Message::NavigateDown,
            Message::Escape,
            Message::Quit,
            Message::ToggleHelp,
            Message::PointerDown { column: 10, row: 5 },
            Message::PointerMove { column: 11, row: 5 },
            Message::PointerUp { column: 12, row: 6 },
            Message::BeginSearch,
            Message::SearchInput { ch: 'q' },
            Message::SearchBackspace,
            Message::EndSearch,
            Message::CycleFilter,
            Message::CycleSort,
            Message::OpenAddTask,
            Message::CloseAddTask,
            Message::ModalNextField,
            Message::ModalPrevField,
            Message::ModalCycleOption { delta: -1 },
            Message::ModalInput { ch: 'x' },
            Message::ModalBackspace,
            Message::ModalConfirm,
        ];

        for msg in messages {
            let json = serde_json::to_string(&msg).expect("serialize");
            let parsed: Message = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(msg, parsed);
        }
    }

    #[test]
    fn json_format() {
        let json = serde_json::to_string(&Message::CycleFilter).expect("serialize");
        assert_eq!(json, r#""cycle_filter""#);

        let json = serde_json::to_string(&Message::OpenAddTask).expect("serialize");
        assert_eq!(json, r#""open_add_task""#);
    }
}
