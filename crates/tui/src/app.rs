//! Main application struct and run loop.
//!
//! This module provides the `App` struct which orchestrates the TUI
//! application lifecycle including event handling, state updates, and
//! rendering. Input is dispatched by mode: the add-task modal and the
//! search line each capture the keyboard while active, and pointer
//! messages drive the drag session.

use pinboard_core::{DragTarget, DropOutcome, Message, Task, UserDirectory, token::parse_task_token};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use tracing::warn;

use crate::{
    AppState,
    event::{key_to_message, key_to_modal_message, key_to_search_message, mouse_to_message, poll_event},
    layout::{
        HEADER_HEIGHT, MIN_HEIGHT, MIN_HEIGHT_WITH_HEADER, MIN_WIDTH, STATUS_BAR_HEIGHT, hit_test,
    },
    modal_state::ModalState,
    terminal::AppTerminal,
    widgets::{
        render_board, render_drag_overlay, render_help_overlay, render_modal, render_status_bar,
    },
};

/// The main application struct.
///
/// Manages the application state and provides the main event loop.
#[derive(Debug)]
pub struct App {
    state: AppState,
    /// The add-task modal, if open.
    modal: Option<ModalState>,
    should_quit: bool,
    /// Last known terminal area, used for pointer hit-testing.
    last_area: Rect,
    /// Whether the header was shown in the last render (affects hit-testing).
    header_visible: bool,
    /// Last pointer position while a drag is in progress.
    pointer: Option<(u16, u16)>,
}

impl App {
    /// Creates a new application with the given board and user directory.
    ///
    /// # Examples
    ///
    /// ```
    /// use pinboard_core::dummy;
    /// use pinboard_tui::App;
    ///
    /// let app = App::new(dummy::dummy_board(), dummy::sample_users());
    /// ```
    #[must_use]
    pub fn new(board: pinboard_core::Board, users: UserDirectory) -> Self {
        Self {
            state: AppState::new(board, users),
            modal: None,
            should_quit: false,
            last_area: Rect::default(),
            header_visible: true,
            pointer: None,
        }
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Returns whether the add-task modal is open.
    #[must_use]
    pub fn is_modal_open(&self) -> bool {
        self.modal.is_some()
    }

    /// Updates the application state based on a message.
    ///
    /// When the modal or the help overlay is open, most messages are
    /// routed to it instead of the board; `Quit` always works.
    pub fn update(&mut self, msg: Message) {
        // A transient status lives until the next interaction.
        if !matches!(msg, Message::PointerMove { .. }) {
            self.state.status = None;
        }

        if self.modal.is_some() {
            self.update_modal(msg);
            return;
        }

        // When help is visible, most keys dismiss it
        if self.state.help_visible {
            match msg {
                Message::Quit => {
                    self.should_quit = true;
                }
                Message::ToggleHelp | Message::Escape => {
                    self.state.toggle_help();
                }
                _ => {
                    let _ = self.state.dismiss_help();
                }
            }
            return;
        }

        if self.state.search_active {
            match msg {
                Message::Quit => {
                    self.should_quit = true;
                }
                Message::SearchInput { ch } => {
                    self.state.search_push(ch);
                }
                Message::SearchBackspace => {
                    self.state.search_pop();
                }
                Message::EndSearch => {
                    self.state.search_active = false;
                }
                _ => {}
            }
            return;
        }

        match msg {
            Message::Quit => {
                self.should_quit = true;
            }
            Message::Escape => {
                // Contextual: cancel an active drag, or clear the selection
                if self.state.drag.is_dragging() {
                    self.state.drag.cancel();
                    self.pointer = None;
                } else {
                    self.state.clear_selection();
                }
            }
            Message::NavigateLeft => self.state.navigate_left(),
            Message::NavigateRight => self.state.navigate_right(),
            Message::NavigateUp => self.state.navigate_up(),
            Message::NavigateDown => self.state.navigate_down(),
            Message::ToggleHelp => self.state.toggle_help(),
            Message::CycleFilter => self.state.cycle_filter(),
            Message::CycleSort => self.state.cycle_sort(),
            Message::BeginSearch => {
                self.state.search_active = true;
            }
            Message::OpenAddTask => {
                self.modal = Some(ModalState::new(
                    self.state.selected_column_key(),
                    &self.state.users,
                ));
            }
            Message::PointerDown { column, row } => self.pointer_down(column, row),
            Message::PointerMove { column, row } => self.pointer_move(column, row),
            Message::PointerUp { column, row } => self.pointer_up(column, row),
            // Modal and search messages are handled by their modes above
            _ => {}
        }
    }

    /// Routes a message to the open add-task modal.
    fn update_modal(&mut self, msg: Message) {
        let Some(modal) = self.modal.as_mut() else {
            return;
        };
        match msg {
            Message::Quit => {
                self.should_quit = true;
            }
            Message::CloseAddTask => {
                self.modal = None;
            }
            Message::ModalNextField => modal.next_field(),
            Message::ModalPrevField => modal.prev_field(),
            Message::ModalCycleOption { delta } => {
                modal.cycle_option(delta, &self.state.users);
            }
            Message::ModalInput { ch } => modal.input(ch),
            Message::ModalBackspace => modal.backspace(),
            Message::ModalConfirm => {
                if modal
                    .submit(&mut self.state.board, &self.state.users, &mut self.state.ids)
                    .is_some()
                {
                    self.modal = None;
                    self.state.status = Some("Task created".into());
                }
            }
            _ => {}
        }
    }

    /// The board content area used for both rendering and hit-testing.
    fn board_area(&self) -> Rect {
        let header_offset = if self.header_visible { HEADER_HEIGHT } else { 0 };
        Rect {
            x: self.last_area.x,
            y: self.last_area.y + header_offset,
            width: self.last_area.width,
            height: self
                .last_area
                .height
                .saturating_sub(header_offset + STATUS_BAR_HEIGHT),
        }
    }

    /// Handles primary-button press: starts a drag on a task card and
    /// moves the keyboard selection under the pointer.
    fn pointer_down(&mut self, x: u16, y: u16) {
        let view = self.state.view();
        match hit_test(&view, self.board_area(), x, y) {
            Some(DragTarget::Task(id)) => {
                // Move the keyboard selection to the grabbed card.
                for (column_idx, column) in view.columns().iter().enumerate() {
                    if let Some(task_idx) = column.position_of(id) {
                        self.state.selected_column = column_idx;
                        self.state.selected_task = Some(task_idx);
                    }
                }
                self.state.drag.begin(DragTarget::Task(id).encode());
                self.pointer = Some((x, y));
            }
            Some(DragTarget::Column(_)) | None => {}
        }
    }

    /// Handles pointer motion: keeps the drag overlay under the pointer.
    fn pointer_move(&mut self, x: u16, y: u16) {
        if self.state.drag.is_dragging() {
            self.pointer = Some((x, y));
        }
    }

    /// Handles primary-button release: finishes the drag session.
    fn pointer_up(&mut self, x: u16, y: u16) {
        self.pointer = None;
        if !self.state.drag.is_dragging() {
            return;
        }

        let view = self.state.view();
        let over = hit_test(&view, self.board_area(), x, y).map(DragTarget::encode);

        match self.state.drag.finish(&mut self.state.board, over.as_deref()) {
            Ok(DropOutcome::Moved { to, .. }) => {
                self.state.status = Some(format!("Moved to {}", to.display_name()));
            }
            Ok(DropOutcome::Reordered(_) | DropOutcome::NoOp) => {}
            Err(err) => {
                warn!(%err, "drop aborted");
                debug_assert!(false, "drag finish violated board invariants: {err}");
                self.state.status = Some(err.to_string());
            }
        }
    }

    /// The task currently being dragged, from the canonical board.
    fn dragged_task(&self) -> Option<&Task> {
        let id = parse_task_token(self.state.drag.active_token()?)?;
        self.state.board.find_task(id)
    }

    /// Renders the application UI to the given frame.
    ///
    /// Implements graceful degradation for small terminal sizes: below
    /// the minimum a "terminal too small" message is shown, and on tight
    /// heights the header is hidden to reclaim rows.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.last_area = area;

        if area.height < MIN_HEIGHT || area.width < MIN_WIDTH {
            self.header_visible = false;
            self.render_terminal_too_small(frame, area);
            return;
        }

        let show_header = area.height >= MIN_HEIGHT_WITH_HEADER;
        self.header_visible = show_header;

        let content_area = if show_header {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(HEADER_HEIGHT),
                    Constraint::Min(0),
                    Constraint::Length(STATUS_BAR_HEIGHT),
                ])
                .split(area);
            self.render_header(frame, chunks[0]);
            self.render_status(frame, chunks[2]);
            chunks[1]
        } else {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(STATUS_BAR_HEIGHT)])
                .split(area);
            self.render_status(frame, chunks[1]);
            chunks[0]
        };

        let view = self.state.view();
        let dragged = self.dragged_task().map(|task| task.id);
        render_board(
            &view,
            &self.state.users,
            self.state.selected_column,
            self.state.selected_task,
            dragged,
            content_area,
            frame.buffer_mut(),
        );

        if let Some(task) = self.dragged_task()
            && let Some((x, y)) = self.pointer
        {
            render_drag_overlay(task, x, y, area, frame.buffer_mut());
        }

        if let Some(modal) = &self.modal {
            render_modal(modal, &self.state.users, area, frame.buffer_mut());
        }

        if self.state.help_visible {
            render_help_overlay(area, frame.buffer_mut());
        }
    }

    /// Renders a message indicating the terminal is too small.
    fn render_terminal_too_small(&self, frame: &mut Frame, area: Rect) {
        let message = format!(
            "Terminal too small ({}×{})\nMinimum: {}×{} (w×h)",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );

        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .wrap(ratatui::widgets::Wrap { trim: false });

        // Center the message vertically
        let vertical_offset = area.height.saturating_sub(2) / 2;
        let centered_area = Rect {
            x: area.x,
            y: area.y + vertical_offset,
            width: area.width,
            height: area.height.saturating_sub(vertical_offset),
        };

        frame.render_widget(paragraph, centered_area);
    }

    /// Renders the header bar with title and help cue.
    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [title_area, help_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(17)]).areas(inner);

        let title = Paragraph::new(Line::from(vec![
            Span::styled(
                "pinboard",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" - "),
            Span::styled("Kanban Board", Style::default().fg(Color::White)),
        ]));
        frame.render_widget(title, title_area);

        let help_cue = Paragraph::new(Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::styled(" for help", Style::default().fg(Color::DarkGray)),
        ]))
        .alignment(Alignment::Right);
        frame.render_widget(help_cue, help_area);
    }

    /// Renders the footer status bar.
    fn render_status(&self, frame: &mut Frame, area: Rect) {
        render_status_bar(
            &self.state.options,
            self.state.search_active,
            self.state.status.as_deref(),
            area,
            frame.buffer_mut(),
        );
    }

    /// Runs the main application loop.
    ///
    /// This function blocks until the user quits the application.
    /// It polls for events, updates state, and renders the UI.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use pinboard_core::dummy;
    /// use pinboard_tui::{App, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let mut terminal = terminal::setup_terminal()?;
    ///     let mut app = App::new(dummy::dummy_board(), dummy::sample_users());
    ///     app.run(&mut terminal).await?;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        use crossterm::event::Event;

        loop {
            terminal.draw(|frame| self.view(frame))?;

            if let Some(event) = poll_event()? {
                let msg = match event {
                    Event::Key(key) => {
                        if self.modal.is_some() {
                            key_to_modal_message(key)
                        } else if self.state.search_active && !self.state.help_visible {
                            key_to_search_message(key)
                        } else {
                            key_to_message(key)
                        }
                    }
                    Event::Mouse(mouse) => mouse_to_message(&mouse),
                    _ => None,
                };

                if let Some(msg) = msg {
                    self.update(msg);
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }
}
