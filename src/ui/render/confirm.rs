use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Render the open confirmation prompt as a centered modal.
///
pub fn confirm(frame: &mut Frame, size: Rect, state: &State) {
    let prompt = match state.get_pending_confirmation() {
        Some(prompt) => prompt,
        None => return,
    };
    let theme = state.get_theme();
    let area = centered_rect(60, 7, size);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled("Confirm", styling::active_block_title_style()))
        .border_style(Style::default().fg(theme.footer_confirm.to_color()));
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            prompt.message().to_owned(),
            styling::current_list_item_style(theme),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", styling::label_style(theme)),
            Span::styled(": yes   ", styling::muted_text_style(theme)),
            Span::styled("n", styling::label_style(theme)),
            Span::styled(": no", styling::muted_text_style(theme)),
        ]),
    ];

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}

/// Rectangle of the given width percentage and height centered in `size`.
///
fn centered_rect(percent_x: u16, height: u16, size: Rect) -> Rect {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(size);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(rows[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_stays_inside() {
        let size = Rect::new(0, 0, 100, 40);
        let area = centered_rect(60, 7, size);
        assert_eq!(area.width, 60);
        assert_eq!(area.height, 7);
        assert!(area.right() <= size.right());
        assert!(area.bottom() <= size.bottom());
    }
}
