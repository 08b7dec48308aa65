use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

/// Render the most recent user messages, newest first.
///
pub fn messages(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let block = Block::default()
        .title("Messages")
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));

    let items: Vec<ListItem> = state
        .get_messages()
        .into_iter()
        .map(|message| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    message.created_at.format("%H:%M:%S ").to_string(),
                    styling::muted_text_style(theme),
                ),
                Span::styled(message.text, styling::success_text_style(theme)),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), size);
}
