use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};

pub const BANNER: &str = "
  ___              _         _      ___       _        _
 | _ \\_ _ ___  __| |_  _ __| |_   / __|__ _ | |_ __ _| |___  __ _
 |  _/ '_/ _ \\/ _` | || / _|  _| | (__/ _` ||  _/ _` | / _ \\/ _` |
 |_| |_| \\___/\\__,_|\\_,_\\__|\\__|  \\___\\__,_| \\__\\__,_|_\\___/\\__, |
                                                             |___/
";

/// Render welcome widget according to state.
///
pub fn welcome(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(0)])
        .margin(2)
        .split(size);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Welcome")
        .border_style(styling::active_block_border_style(theme));
    frame.render_widget(block, size);

    let banner = Text::from(BANNER).patch_style(styling::banner_style(theme));
    frame.render_widget(Paragraph::new(banner), rows[0]);

    let content = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(" Enter ", styling::label_style(theme)),
            Span::styled("browse the product list", styling::normal_text_style(theme)),
        ]),
        Line::from(vec![
            Span::styled(" n     ", styling::label_style(theme)),
            Span::styled("add a new product", styling::normal_text_style(theme)),
        ]),
        Line::from(vec![
            Span::styled(" q     ", styling::label_style(theme)),
            Span::styled("quit", styling::normal_text_style(theme)),
        ]),
    ];
    frame.render_widget(Paragraph::new(content), rows[1]);
}
