//! Application state management.
//!
//! This module defines the core state for the TUI application: the
//! canonical board and its collaborators from the core crate, the view
//! options, and the keyboard selection. The selection always refers to
//! the *projected* board, since that is what the user sees.

use pinboard_core::{
    Board, ColumnKey, DragSession, Label, LabelFilter, Priority, TaskIdGen, UserDirectory,
    ViewOptions, build_view,
};

/// The number of columns on the board.
const COLUMN_COUNT: usize = 3;

/// The application state.
///
/// Contains all mutable state for the TUI application: the canonical
/// board, view options, drag session, and selection tracking.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The canonical board. Mutated only through core operations.
    pub board: Board,
    /// The read-only assignee directory.
    pub users: UserDirectory,
    /// Allocator for new task ids.
    pub ids: TaskIdGen,
    /// The current filter/search/sort selections.
    pub options: ViewOptions,
    /// The active drag gesture, if any.
    pub drag: DragSession,
    /// Index of the currently selected column (0-2).
    pub selected_column: usize,
    /// Index of the selected task within the projected column, if any.
    pub selected_task: Option<usize>,
    /// Whether the search line is being edited.
    pub search_active: bool,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
    /// Transient status line message (validation errors, drop feedback).
    pub status: Option<String>,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// The id allocator is seeded past every id already on the board,
    /// so tasks created through the UI never collide with seeded data.
    ///
    /// # Examples
    ///
    /// ```
    /// use pinboard_core::{dummy, Board};
    /// use pinboard_tui::AppState;
    ///
    /// let state = AppState::new(dummy::dummy_board(), dummy::sample_users());
    /// assert_eq!(state.selected_column, 0);
    /// ```
    #[must_use]
    pub fn new(board: Board, users: UserDirectory) -> Self {
        let ids = TaskIdGen::seeded_from(&board);
        Self {
            board,
            users,
            ids,
            options: ViewOptions::default(),
            drag: DragSession::new(),
            selected_column: 0,
            selected_task: None,
            search_active: false,
            help_visible: false,
            status: None,
        }
    }

    /// Returns the projection of the board under the current options.
    ///
    /// This is what the renderer draws and what hit-testing runs against.
    #[must_use]
    pub fn view(&self) -> Board {
        build_view(&self.board, &self.options)
    }

    /// Toggles the help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Dismisses the help overlay if it is visible.
    ///
    /// Returns `true` if help was visible and has been dismissed.
    #[must_use]
    pub fn dismiss_help(&mut self) -> bool {
        if self.help_visible {
            self.help_visible = false;
            true
        } else {
            false
        }
    }

    /// Cycles the label filter: All, then each label in order, then All.
    pub fn cycle_filter(&mut self) {
        let labels = Label::all();
        self.options.filter = match self.options.filter {
            LabelFilter::All => LabelFilter::Only(labels[0]),
            LabelFilter::Only(current) => {
                let idx = labels.iter().position(|l| *l == current).unwrap_or(0);
                match labels.get(idx + 1) {
                    Some(next) => LabelFilter::Only(*next),
                    None => LabelFilter::All,
                }
            }
        };
        self.clamp_task_selection();
    }

    /// Cycles the priority sort: off, High, Medium, Low, off.
    pub fn cycle_sort(&mut self) {
        self.options.sort = match self.options.sort {
            None => Some(Priority::High),
            Some(Priority::High) => Some(Priority::Medium),
            Some(Priority::Medium) => Some(Priority::Low),
            Some(Priority::Low) => None,
        };
    }

    /// Appends a character to the search query.
    pub fn search_push(&mut self, ch: char) {
        self.options.search.push(ch);
        self.clamp_task_selection();
    }

    /// Removes the last character of the search query.
    pub fn search_pop(&mut self) {
        self.options.search.pop();
        self.clamp_task_selection();
    }

    /// The column key currently selected by the keyboard.
    #[must_use]
    pub fn selected_column_key(&self) -> ColumnKey {
        ColumnKey::from_index(self.selected_column).unwrap_or_default()
    }

    /// Moves the column selection to the left, wrapping around.
    pub fn navigate_left(&mut self) {
        self.selected_column = self
            .selected_column
            .checked_sub(1)
            .unwrap_or(COLUMN_COUNT - 1);
        self.clamp_task_selection();
    }

    /// Moves the column selection to the right, wrapping around.
    pub fn navigate_right(&mut self) {
        self.selected_column = (self.selected_column + 1) % COLUMN_COUNT;
        self.clamp_task_selection();
    }

    /// Moves the task selection up within the projected column.
    pub fn navigate_up(&mut self) {
        let len = self.projected_column_len();
        if len == 0 {
            self.selected_task = None;
            return;
        }
        self.selected_task = match self.selected_task {
            Some(idx) if idx > 0 => Some(idx - 1),
            // Wrap to bottom, or select the first task when none is.
            Some(_) => Some(len - 1),
            None => Some(0),
        };
    }

    /// Moves the task selection down within the projected column.
    pub fn navigate_down(&mut self) {
        let len = self.projected_column_len();
        if len == 0 {
            self.selected_task = None;
            return;
        }
        self.selected_task = match self.selected_task {
            Some(idx) if idx + 1 < len => Some(idx + 1),
            Some(_) => Some(0),
            None => Some(0),
        };
    }

    /// Clears the current task selection.
    pub fn clear_selection(&mut self) {
        self.selected_task = None;
    }

    fn projected_column_len(&self) -> usize {
        self.view()
            .columns()
            .get(self.selected_column)
            .map_or(0, pinboard_core::Column::len)
    }

    /// Ensures the task selection is valid for the projected column.
    fn clamp_task_selection(&mut self) {
        let len = self.projected_column_len();
        if len == 0 {
            self.selected_task = None;
        } else if let Some(idx) = self.selected_task
            && idx >= len
        {
            self.selected_task = Some(len - 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinboard_core::{Task, User};

    fn users() -> UserDirectory {
        UserDirectory::new(vec![User::new(1, "Maya", "avatars/maya.png")])
    }

    fn board_with_tasks(counts: [usize; 3]) -> Board {
        let mut board = Board::new();
        let mut id = 0;
        for (idx, count) in counts.into_iter().enumerate() {
            let key = ColumnKey::from_index(idx).expect("index in range");
            for _ in 0..count {
                id += 1;
                board
                    .append_task(key, Task::new(id, format!("Task {id}"), 1))
                    .unwrap();
            }
        }
        board
    }

    #[test]
    fn new_state_defaults() {
        let state = AppState::new(Board::new(), users());
        assert_eq!(state.selected_column, 0);
        assert_eq!(state.selected_task, None);
        assert!(!state.search_active);
        assert!(!state.help_visible);
        assert_eq!(state.options, ViewOptions::default());
    }

    #[test]
    fn id_allocator_skips_seeded_ids() {
        let mut state = AppState::new(board_with_tasks([2, 1, 0]), users());
        let fresh = state.ids.allocate();
        assert!(state.board.find_task(fresh).is_none());
    }

    #[test]
    fn column_navigation_wraps() {
        let mut state = AppState::new(Board::new(), users());

        state.navigate_left();
        assert_eq!(state.selected_column, 2);
        state.navigate_right();
        assert_eq!(state.selected_column, 0);
        state.navigate_right();
        assert_eq!(state.selected_column, 1);
    }

    #[test]
    fn task_navigation_wraps_within_column() {
        let mut state = AppState::new(board_with_tasks([3, 0, 0]), users());

        state.navigate_down();
        assert_eq!(state.selected_task, Some(0));
        state.navigate_down();
        state.navigate_down();
        assert_eq!(state.selected_task, Some(2));
        state.navigate_down();
        assert_eq!(state.selected_task, Some(0));
        state.navigate_up();
        assert_eq!(state.selected_task, Some(2));
    }

    #[test]
    fn task_navigation_in_empty_column() {
        let mut state = AppState::new(Board::new(), users());
        state.navigate_down();
        assert_eq!(state.selected_task, None);
        state.navigate_up();
        assert_eq!(state.selected_task, None);
    }

    #[test]
    fn selection_clamped_when_switching_to_shorter_column() {
        let mut state = AppState::new(board_with_tasks([3, 1, 0]), users());
        state.selected_task = Some(2);

        state.navigate_right(); // Column with one task
        assert_eq!(state.selected_task, Some(0));

        state.navigate_right(); // Empty column
        assert_eq!(state.selected_task, None);
    }

    #[test]
    fn selection_clamped_against_projection_not_store() {
        let mut state = AppState::new(board_with_tasks([3, 0, 0]), users());
        state.selected_task = Some(2);

        // A search that matches nothing empties the projected column.
        state.options.search = "zzz".into();
        state.search_push('z');
        assert_eq!(state.selected_task, None);
        // The canonical board is untouched.
        assert_eq!(state.board.total_tasks(), 3);
    }

    #[test]
    fn cycle_filter_walks_all_labels_and_returns() {
        let mut state = AppState::new(Board::new(), users());
        assert_eq!(state.options.filter, LabelFilter::All);

        let mut seen = Vec::new();
        for _ in 0..Label::all().len() {
            state.cycle_filter();
            match state.options.filter {
                LabelFilter::Only(label) => seen.push(label),
                LabelFilter::All => panic!("returned to All too early"),
            }
        }
        assert_eq!(seen, Label::all().to_vec());

        state.cycle_filter();
        assert_eq!(state.options.filter, LabelFilter::All);
    }

    #[test]
    fn cycle_sort_rotation() {
        let mut state = AppState::new(Board::new(), users());
        assert_eq!(state.options.sort, None);
        state.cycle_sort();
        assert_eq!(state.options.sort, Some(Priority::High));
        state.cycle_sort();
        assert_eq!(state.options.sort, Some(Priority::Medium));
        state.cycle_sort();
        assert_eq!(state.options.sort, Some(Priority::Low));
        state.cycle_sort();
        assert_eq!(state.options.sort, None);
    }

    #[test]
    fn search_editing() {
        let mut state = AppState::new(Board::new(), users());
        state.search_push('b');
        state.search_push('u');
        state.search_push('g');
        assert_eq!(state.options.search, "bug");
        state.search_pop();
        assert_eq!(state.options.search, "bu");
    }

    #[test]
    fn view_reflects_options() {
        let mut state = AppState::new(board_with_tasks([2, 0, 0]), users());
        assert_eq!(state.view().total_tasks(), 2);
        state.options.search = "Task 1".into();
        assert_eq!(state.view().total_tasks(), 1);
    }
}
