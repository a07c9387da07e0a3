//! Search box view.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use super::state::InputState;

/// Renders the bordered search box and places the terminal cursor.
pub fn render_search_box(frame: &mut Frame, input: &InputState, area: Rect, loading: bool) {
    let border_color = if loading { Color::Yellow } else { Color::Blue };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .title(" Search ");

    let inner = block.inner(area);
    let value = input.value();

    // Keep the cursor visible when the value exceeds the box width.
    let cursor_width = value[..input.cursor()].width() as u16;
    let visible_width = inner.width.saturating_sub(1);
    let scroll = cursor_width.saturating_sub(visible_width);

    let line = if value.is_empty() {
        Line::styled(
            "e.g., Phase 3 melanoma trials by NIH",
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Line::raw(value)
    };

    let paragraph = Paragraph::new(line).block(block).scroll((0, scroll));
    frame.render_widget(paragraph, area);

    frame.set_cursor_position(Position::new(
        inner.x + cursor_width.saturating_sub(scroll),
        inner.y,
    ));
}
