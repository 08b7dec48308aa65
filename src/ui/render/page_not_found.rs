use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn page_not_found(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Page Not Found")
        .border_style(styling::active_block_border_style(theme));
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "This is not the page you were looking for!",
            styling::error_text_style(theme),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to return to the welcome page.",
            styling::muted_text_style(theme),
        )),
    ];
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block),
        size,
    );
}
