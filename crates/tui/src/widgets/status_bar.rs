//! Status bar rendering widget.
//!
//! The footer summarizes the active view options (filter, sort, search)
//! and shows either a transient status message or the key hints.

use pinboard_core::{LabelFilter, ViewOptions};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Renders the status bar.
///
/// The left side shows the view option summary; the right side the
/// transient `status` message if one is set, otherwise the key hints.
/// While the search line is being edited a cursor marker is appended to
/// the query.
///
/// # Layout
///
/// ```text
/// +--------------------------------------------------------------+
/// | Filter: Bug | Sort: High | /bug_        [a] Add  [?] Help    |
/// +--------------------------------------------------------------+
/// ```
///
/// # Examples
///
/// ```
/// use pinboard_core::ViewOptions;
/// use pinboard_tui::widgets::render_status_bar;
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
///
/// let area = Rect::new(0, 0, 80, 3);
/// let mut buf = Buffer::empty(area);
///
/// render_status_bar(&ViewOptions::default(), false, None, area, &mut buf);
/// ```
pub fn render_status_bar(
    options: &ViewOptions,
    search_active: bool,
    status: Option<&str>,
    area: Rect,
    buf: &mut Buffer,
) {
    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::White);
    let dim_style = Style::default().fg(Color::DarkGray);

    let filter = match options.filter {
        LabelFilter::All => "All".to_string(),
        LabelFilter::Only(label) => label.display_name().to_string(),
    };
    let sort = options
        .sort
        .map_or("off".to_string(), |p| p.display_name().to_string());
    let search = if search_active {
        format!("/{}_", options.search)
    } else if options.search.is_empty() {
        String::new()
    } else {
        format!("/{}", options.search)
    };

    let mut spans = vec![
        Span::styled("Filter: ", dim_style),
        Span::styled(filter, text_style),
        Span::styled(" | Sort: ", dim_style),
        Span::styled(sort, text_style),
    ];
    if !search.is_empty() {
        spans.push(Span::styled(" | ", dim_style));
        spans.push(Span::styled(search, Style::default().fg(Color::Cyan)));
    }

    match status {
        Some(message) => {
            spans.push(Span::styled("   ", text_style));
            spans.push(Span::styled(
                message.to_string(),
                Style::default().fg(Color::LightRed),
            ));
        }
        None => {
            spans.push(Span::styled("   ", text_style));
            spans.push(Span::styled("a", key_style));
            spans.push(Span::styled(" Add  ", text_style));
            spans.push(Span::styled("f", key_style));
            spans.push(Span::styled(" Filter  ", text_style));
            spans.push(Span::styled("p", key_style));
            spans.push(Span::styled(" Sort  ", text_style));
            spans.push(Span::styled("/", key_style));
            spans.push(Span::styled(" Search  ", text_style));
            spans.push(Span::styled("?", key_style));
            spans.push(Span::styled(" Help", text_style));
        }
    }

    let status_bar = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    status_bar.render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use pinboard_core::{Label, Priority};

    #[test]
    fn default_options_show_hints() {
        let area = Rect::new(0, 0, 80, 3);
        let mut buf = Buffer::empty(area);

        render_status_bar(&ViewOptions::default(), false, None, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Filter: All"));
        assert!(content.contains("Sort: off"));
        assert!(content.contains("Help"));
    }

    #[test]
    fn active_options_are_summarized() {
        let options = ViewOptions {
            filter: LabelFilter::Only(Label::Bug),
            search: "login".into(),
            sort: Some(Priority::High),
        };
        let area = Rect::new(0, 0, 80, 3);
        let mut buf = Buffer::empty(area);

        render_status_bar(&options, false, None, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Filter: Bug"));
        assert!(content.contains("Sort: High"));
        assert!(content.contains("/login"));
    }

    #[test]
    fn search_editing_shows_cursor() {
        let options = ViewOptions {
            search: "bu".into(),
            ..Default::default()
        };
        let area = Rect::new(0, 0, 80, 3);
        let mut buf = Buffer::empty(area);

        render_status_bar(&options, true, None, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("/bu_"));
    }

    #[test]
    fn status_message_replaces_hints() {
        let area = Rect::new(0, 0, 80, 3);
        let mut buf = Buffer::empty(area);

        render_status_bar(
            &ViewOptions::default(),
            false,
            Some("task title is required"),
            area,
            &mut buf,
        );

        let content = buffer_to_string(&buf);
        assert!(content.contains("task title is required"));
        assert!(!content.contains("Help"));
    }
}
