use super::styling;
use crate::state::State;
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::Paragraph,
};

pub const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Current spinner frame.
///
pub fn frame(state: &State) -> &'static str {
    FRAMES[state.get_spinner_index() % FRAMES.len()]
}

/// Return a centered spinner filling an area of the given height.
///
pub fn widget(state: &State, height: u16) -> Paragraph<'static> {
    let theme = state.get_theme();
    let padding = (height.saturating_sub(2) / 2) as usize;
    let mut lines = vec![Line::from(""); padding];
    lines.push(Line::from(Span::styled(
        frame(state),
        styling::active_list_item_style(theme),
    )));
    Paragraph::new(lines).alignment(Alignment::Center)
}
