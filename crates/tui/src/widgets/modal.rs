//! Add-task modal rendering widget.
//!
//! Renders the centered form over the board: one line per field with a
//! focus marker, the validation error from the last rejected submit, and
//! the key hints.

use pinboard_core::UserDirectory;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::modal_state::{ModalField, ModalState};

/// The width of the modal panel.
const MODAL_WIDTH: u16 = 48;

/// The height of the modal panel.
const MODAL_HEIGHT: u16 = 13;

/// Renders the add-task modal centered in `area`.
///
/// # Examples
///
/// ```
/// use pinboard_core::{ColumnKey, User, UserDirectory};
/// use pinboard_tui::modal_state::ModalState;
/// use pinboard_tui::widgets::render_modal;
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
///
/// let users = UserDirectory::new(vec![User::new(1, "Maya", "avatars/maya.png")]);
/// let modal = ModalState::new(ColumnKey::Todo, &users);
///
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
/// render_modal(&modal, &users, area, &mut buf);
/// ```
pub fn render_modal(modal: &ModalState, users: &UserDirectory, area: Rect, buf: &mut Buffer) {
    let popup_area = centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area);
    Clear.render(popup_area, buf);

    let block = Block::default()
        .title(Span::styled(
            " Add Task ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    let mut lines: Vec<Line<'_>> = ModalField::all()
        .into_iter()
        .map(|field| field_line(modal, users, field))
        .collect();

    lines.push(Line::from(""));
    match &modal.error {
        Some(error) => lines.push(Line::from(Span::styled(
            format!("  {error}"),
            Style::default().fg(Color::LightRed),
        ))),
        None => lines.push(Line::from("")),
    }
    lines.push(Line::from(Span::styled(
        "  Tab Next  \u{2190}\u{2192} Change  Enter Create  Esc Cancel",
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )));

    Paragraph::new(lines).block(block).render(popup_area, buf);
}

/// Builds the display line for one form field.
fn field_line<'a>(modal: &'a ModalState, users: &'a UserDirectory, field: ModalField) -> Line<'a> {
    let focused = modal.field == field;
    let marker = if focused { "\u{25b8} " } else { "  " };
    let caption_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let value = match field {
        ModalField::Title => {
            let mut title = modal.draft.title.clone();
            if focused {
                title.push('_');
            }
            title
        }
        ModalField::Description => {
            let mut description = modal.draft.description.clone();
            if focused {
                description.push('_');
            }
            description
        }
        ModalField::Label => modal.draft.label.display_name().to_string(),
        ModalField::Priority => modal.draft.priority.display_name().to_string(),
        ModalField::Column => modal.draft.column.display_name().to_string(),
        ModalField::Assignee => modal
            .draft
            .assignee
            .and_then(|id| users.get(id))
            .map_or("none".to_string(), |user| user.name.clone()),
    };

    Line::from(vec![
        Span::styled(
            format!("{marker}{:<12}", field.caption()),
            caption_style,
        ),
        Span::styled(value, Style::default().fg(Color::White)),
    ])
}

/// Creates a centered rectangle within a given area, clamped to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let popup_width = width.min(area.width);
    let popup_height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    Rect::new(x, y, popup_width, popup_height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use pinboard_core::{ColumnKey, User};

    fn users() -> UserDirectory {
        UserDirectory::new(vec![User::new(1, "Maya", "avatars/maya.png")])
    }

    #[test]
    fn modal_shows_all_fields() {
        let modal = ModalState::new(ColumnKey::Todo, &users());
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);

        render_modal(&modal, &users(), area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Add Task"));
        assert!(content.contains("Title"));
        assert!(content.contains("Description"));
        assert!(content.contains("Label"));
        assert!(content.contains("Priority"));
        assert!(content.contains("Column"));
        assert!(content.contains("Assignee"));
        assert!(content.contains("Maya"));
    }

    #[test]
    fn modal_shows_typed_title_and_cursor() {
        let mut modal = ModalState::new(ColumnKey::Todo, &users());
        modal.input('H');
        modal.input('i');

        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        render_modal(&modal, &users(), area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Hi_"));
    }

    #[test]
    fn modal_shows_validation_error() {
        let mut modal = ModalState::new(ColumnKey::Todo, &users());
        modal.error = Some("task title is required".into());

        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        render_modal(&modal, &users(), area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("task title is required"));
    }

    #[test]
    fn modal_handles_small_area() {
        let modal = ModalState::new(ColumnKey::Todo, &users());
        let area = Rect::new(0, 0, 20, 6);
        let mut buf = Buffer::empty(area);

        // Should not panic when clamped
        render_modal(&modal, &users(), area, &mut buf);
    }

    #[test]
    fn centered_rect_positions_correctly() {
        let area = Rect::new(0, 0, 80, 24);
        let centered = centered_rect(20, 10, area);
        assert_eq!(centered.x, 30);
        assert_eq!(centered.y, 7);
        assert_eq!(centered.width, 20);
        assert_eq!(centered.height, 10);
    }
}
