//! Add-task modal state management.
//!
//! The modal wraps a [`TaskDraft`] with field focus and the last
//! validation error, so the form can be navigated with the keyboard and
//! re-submitted after a rejected attempt without losing input.

use pinboard_core::{
    Board, ColumnKey, Label, Priority, TaskDraft, TaskId, TaskIdGen, UserDirectory,
};
use tracing::warn;

/// The fields of the add-task form, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalField {
    /// Task title (text).
    #[default]
    Title,
    /// Task description (text).
    Description,
    /// Label selection.
    Label,
    /// Priority selection.
    Priority,
    /// Target column selection.
    Column,
    /// Assignee selection.
    Assignee,
}

impl ModalField {
    /// Returns all fields in focus order.
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::Title,
            Self::Description,
            Self::Label,
            Self::Priority,
            Self::Column,
            Self::Assignee,
        ]
    }

    /// Returns the field's form caption.
    #[must_use]
    pub const fn caption(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Description => "Description",
            Self::Label => "Label",
            Self::Priority => "Priority",
            Self::Column => "Column",
            Self::Assignee => "Assignee",
        }
    }

    /// Returns `true` for free-text fields.
    #[must_use]
    pub const fn is_text(self) -> bool {
        matches!(self, Self::Title | Self::Description)
    }

    fn index(self) -> usize {
        Self::all()
            .iter()
            .position(|f| *f == self)
            .unwrap_or_default()
    }

    /// Returns the next field in focus order, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    /// Returns the previous field in focus order, wrapping around.
    #[must_use]
    pub fn prev(self) -> Self {
        let all = Self::all();
        all[(self.index() + all.len() - 1) % all.len()]
    }
}

/// State of the open add-task modal.
#[derive(Debug, Clone, Default)]
pub struct ModalState {
    /// The draft being edited.
    pub draft: TaskDraft,
    /// The field currently holding focus.
    pub field: ModalField,
    /// Message from the last rejected submit, shown inside the modal.
    pub error: Option<String>,
}

impl ModalState {
    /// Creates a fresh modal targeting the given column.
    ///
    /// The first user in the directory is preselected as assignee so a
    /// title is all that is strictly required.
    #[must_use]
    pub fn new(column: ColumnKey, users: &UserDirectory) -> Self {
        let mut draft = TaskDraft::new();
        draft.column = column;
        draft.assignee = users.users().first().map(|user| user.id);
        Self {
            draft,
            field: ModalField::default(),
            error: None,
        }
    }

    /// Moves focus to the next field.
    pub fn next_field(&mut self) {
        self.field = self.field.next();
    }

    /// Moves focus to the previous field.
    pub fn prev_field(&mut self) {
        self.field = self.field.prev();
    }

    /// Types a character into the focused text field.
    ///
    /// Ignored when a selection field has focus.
    pub fn input(&mut self, ch: char) {
        match self.field {
            ModalField::Title => self.draft.title.push(ch),
            ModalField::Description => self.draft.description.push(ch),
            _ => {}
        }
    }

    /// Deletes the last character of the focused text field.
    pub fn backspace(&mut self) {
        match self.field {
            ModalField::Title => {
                self.draft.title.pop();
            }
            ModalField::Description => {
                self.draft.description.pop();
            }
            _ => {}
        }
    }

    /// Cycles the focused selection field by `delta` steps.
    ///
    /// Ignored when a text field has focus.
    pub fn cycle_option(&mut self, delta: i32, users: &UserDirectory) {
        match self.field {
            ModalField::Label => {
                self.draft.label = cycled(&Label::all(), self.draft.label, delta);
            }
            ModalField::Priority => {
                self.draft.priority = cycled(&Priority::all(), self.draft.priority, delta);
            }
            ModalField::Column => {
                self.draft.column = cycled(&ColumnKey::all(), self.draft.column, delta);
            }
            ModalField::Assignee => {
                let ids: Vec<_> = users.users().iter().map(|user| user.id).collect();
                if ids.is_empty() {
                    return;
                }
                self.draft.assignee = Some(match self.draft.assignee {
                    Some(current) => cycled(&ids, current, delta),
                    None => ids[0],
                });
            }
            ModalField::Title | ModalField::Description => {}
        }
    }

    /// Submits the draft against the board.
    ///
    /// On success the id of the new task is returned and the modal
    /// should be closed. On a validation failure the message is stored
    /// in [`ModalState::error`] and the input is preserved.
    pub fn submit(
        &mut self,
        board: &mut Board,
        users: &UserDirectory,
        ids: &mut TaskIdGen,
    ) -> Option<TaskId> {
        match self.draft.submit(board, users, ids) {
            Ok(id) => {
                self.error = None;
                Some(id)
            }
            Err(err) => {
                if !err.is_validation() {
                    warn!(%err, "task submit failed on a non-validation error");
                }
                self.error = Some(err.to_string());
                None
            }
        }
    }
}

/// Steps `delta` positions through `items` from `current`, wrapping.
fn cycled<T: Copy + PartialEq>(items: &[T], current: T, delta: i32) -> T {
    debug_assert!(!items.is_empty());
    let len = items.len() as i32;
    let idx = items
        .iter()
        .position(|item| *item == current)
        .unwrap_or_default() as i32;
    let next = (idx + delta).rem_euclid(len) as usize;
    items[next]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinboard_core::User;

    fn users() -> UserDirectory {
        UserDirectory::new(vec![
            User::new(1, "Maya", "avatars/maya.png"),
            User::new(2, "Jonas", "avatars/jonas.png"),
        ])
    }

    #[test]
    fn new_modal_preselects_first_user() {
        let modal = ModalState::new(ColumnKey::InProgress, &users());
        assert_eq!(modal.draft.assignee, Some(1));
        assert_eq!(modal.draft.column, ColumnKey::InProgress);
        assert_eq!(modal.field, ModalField::Title);
        assert!(modal.error.is_none());
    }

    #[test]
    fn new_modal_without_users_has_no_assignee() {
        let modal = ModalState::new(ColumnKey::Todo, &UserDirectory::default());
        assert_eq!(modal.draft.assignee, None);
    }

    #[test]
    fn field_order_wraps_both_ways() {
        let mut field = ModalField::Title;
        for expected in ModalField::all() {
            assert_eq!(field, expected);
            field = field.next();
        }
        assert_eq!(field, ModalField::Title);
        assert_eq!(ModalField::Title.prev(), ModalField::Assignee);
    }

    #[test]
    fn text_input_targets_focused_field() {
        let mut modal = ModalState::new(ColumnKey::Todo, &users());
        modal.input('H');
        modal.input('i');
        assert_eq!(modal.draft.title, "Hi");

        modal.next_field();
        modal.input('d');
        assert_eq!(modal.draft.description, "d");
        assert_eq!(modal.draft.title, "Hi");

        modal.backspace();
        assert_eq!(modal.draft.description, "");
    }

    #[test]
    fn input_ignored_on_selection_fields() {
        let mut modal = ModalState::new(ColumnKey::Todo, &users());
        modal.field = ModalField::Label;
        modal.input('x');
        modal.backspace();
        assert_eq!(modal.draft.title, "");
        assert_eq!(modal.draft.label, Label::default());
    }

    #[test]
    fn cycling_label_and_priority() {
        let mut modal = ModalState::new(ColumnKey::Todo, &users());
        modal.field = ModalField::Label;
        modal.cycle_option(1, &users());
        assert_eq!(modal.draft.label, Label::Development);
        modal.cycle_option(-1, &users());
        assert_eq!(modal.draft.label, Label::Research);
        modal.cycle_option(-1, &users());
        assert_eq!(modal.draft.label, Label::Copywriting); // Wrapped

        modal.field = ModalField::Priority;
        modal.cycle_option(1, &users());
        assert_eq!(modal.draft.priority, Priority::Low); // Medium is default
    }

    #[test]
    fn cycling_assignee_walks_directory() {
        let mut modal = ModalState::new(ColumnKey::Todo, &users());
        modal.field = ModalField::Assignee;
        modal.cycle_option(1, &users());
        assert_eq!(modal.draft.assignee, Some(2));
        modal.cycle_option(1, &users());
        assert_eq!(modal.draft.assignee, Some(1)); // Wrapped
    }

    #[test]
    fn submit_success_returns_id() {
        let mut modal = ModalState::new(ColumnKey::Todo, &users());
        modal.draft.title = "New task".into();

        let mut board = Board::new();
        let mut ids = TaskIdGen::new();
        let id = modal.submit(&mut board, &users(), &mut ids);

        assert_eq!(id, Some(1));
        assert!(modal.error.is_none());
        assert_eq!(board.total_tasks(), 1);
    }

    #[test]
    fn submit_failure_keeps_input_and_sets_error() {
        let mut modal = ModalState::new(ColumnKey::Todo, &users());
        modal.draft.description = "kept".into();

        let mut board = Board::new();
        let mut ids = TaskIdGen::new();
        let id = modal.submit(&mut board, &users(), &mut ids);

        assert_eq!(id, None);
        assert_eq!(modal.error.as_deref(), Some("task title is required"));
        assert_eq!(modal.draft.description, "kept");
        assert_eq!(board.total_tasks(), 0);
    }
}
