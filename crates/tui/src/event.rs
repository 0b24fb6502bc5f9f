//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal events
//! to application messages. Which key map applies depends on the input
//! mode (board, search entry, or add-task modal); the caller picks the
//! right conversion function for the current mode.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEventKind};
use pinboard_core::Message;

/// Default poll timeout for events.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Polls for a terminal event with the default timeout.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts a mouse event to an application message.
///
/// Left-button press, held motion, and release become pointer messages;
/// everything else (right button, scroll, plain motion) is ignored.
#[must_use]
pub fn mouse_to_message(mouse: &crossterm::event::MouseEvent) -> Option<Message> {
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Message::PointerDown { column, row }),
        MouseEventKind::Drag(MouseButton::Left) => Some(Message::PointerMove { column, row }),
        MouseEventKind::Up(MouseButton::Left) => Some(Message::PointerUp { column, row }),
        _ => None,
    }
}

/// Converts a terminal key event to an application message (board mode).
///
/// Returns `Some(Message)` if the key event maps to an action,
/// or `None` if the key is not bound.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `Esc` | Escape (close overlay or cancel drag) |
/// | `Left`/`Right`/`Up`/`Down` | Navigate |
/// | `a` | Open the add-task modal |
/// | `f` | Cycle the label filter |
/// | `p` | Cycle the priority sort |
/// | `/` | Begin search entry |
/// | `?` | Toggle help |
#[must_use]
pub fn key_to_message(key: KeyEvent) -> Option<Message> {
    // Check for Ctrl+C first
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Esc => Some(Message::Escape),

        // Navigation (arrow keys only)
        KeyCode::Left => Some(Message::NavigateLeft),
        KeyCode::Right => Some(Message::NavigateRight),
        KeyCode::Up => Some(Message::NavigateUp),
        KeyCode::Down => Some(Message::NavigateDown),

        // View options and workflows
        KeyCode::Char('a') => Some(Message::OpenAddTask),
        KeyCode::Char('f') => Some(Message::CycleFilter),
        KeyCode::Char('p') => Some(Message::CycleSort),
        KeyCode::Char('/') => Some(Message::BeginSearch),
        KeyCode::Char('?') => Some(Message::ToggleHelp),

        _ => None,
    }
}

/// Converts a key event to a message while the search line is being edited.
///
/// Every printable character goes into the query; `Enter` and `Esc` both
/// leave entry mode with the query kept (clearing is done by editing it
/// to empty).
///
/// # Key Bindings (Search Mode)
///
/// | Key | Action |
/// |-----|--------|
/// | `Enter` or `Esc` | End search entry |
/// | `Backspace` | Delete last character |
/// | Any char | Append to query |
#[must_use]
pub fn key_to_search_message(key: KeyEvent) -> Option<Message> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Enter | KeyCode::Esc => Some(Message::EndSearch),
        KeyCode::Backspace => Some(Message::SearchBackspace),
        KeyCode::Char(ch) => Some(Message::SearchInput { ch }),
        _ => None,
    }
}

/// Converts a key event to a message while the add-task modal is open.
///
/// # Key Bindings (Modal Mode)
///
/// | Key | Action |
/// |-----|--------|
/// | `Tab` or `Down` | Next field |
/// | `BackTab` or `Up` | Previous field |
/// | `Left`/`Right` | Cycle option on selection fields |
/// | `Enter` | Submit the draft |
/// | `Esc` | Close, discarding the draft |
/// | `Backspace` | Delete last character (text fields) |
/// | Any char | Input (text fields) |
#[must_use]
pub fn key_to_modal_message(key: KeyEvent) -> Option<Message> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Esc => Some(Message::CloseAddTask),
        KeyCode::Enter => Some(Message::ModalConfirm),
        KeyCode::Tab | KeyCode::Down => Some(Message::ModalNextField),
        KeyCode::BackTab | KeyCode::Up => Some(Message::ModalPrevField),
        KeyCode::Left => Some(Message::ModalCycleOption { delta: -1 }),
        KeyCode::Right => Some(Message::ModalCycleOption { delta: 1 }),
        KeyCode::Backspace => Some(Message::ModalBackspace),
        KeyCode::Char(ch) => Some(Message::ModalInput { ch }),
        _ => None,
    }
}
