use super::{confirm, footer, log, main, messages, Frame};
use crate::state::State;
use ratatui::layout::{Constraint, Direction, Layout};

const MESSAGES_HEIGHT: u16 = 7;
const LOG_HEIGHT: u16 = 8;
const FOOTER_HEIGHT: u16 = 1;

/// Render all widgets according to state.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),
            Constraint::Length(MESSAGES_HEIGHT),
            Constraint::Length(LOG_HEIGHT),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(frame.size());

    main(frame, rows[0], state);
    messages(frame, rows[1], state);
    log(frame, rows[2], state);
    footer(frame, rows[3], state);

    if state.get_pending_confirmation().is_some() {
        let area = frame.size();
        confirm(frame, area, state);
    }
}
