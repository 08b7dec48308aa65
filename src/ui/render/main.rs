use super::{page_not_found, product_detail, product_edit, product_list, welcome, Frame};
use crate::state::{State, View};
use crate::ui::widgets::{spinner, styling};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Render main widget according to state.
///
pub fn main(frame: &mut Frame, size: Rect, state: &mut State) {
    match state.current_view() {
        View::Welcome => welcome::welcome(frame, size, state),
        View::ProductList => product_list::product_list(frame, size, state),
        View::ProductDetail => product_detail::product_detail(frame, size, state),
        View::ProductEdit => product_edit::product_edit(frame, size, state),
        View::PageNotFound => page_not_found::page_not_found(frame, size, state),
    }

    if state.is_resolving() {
        resolving(frame, size, state);
    }
}

/// Small overlay shown while the editor's product loads.
///
fn resolving(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(28),
            Constraint::Length(1),
        ])
        .split(size);
    let area = Rect {
        y: size.y + 1,
        height: 3.min(size.height),
        ..columns[1]
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::active_block_border_style(theme));
    let line = Line::from(vec![
        Span::styled(spinner::frame(state), styling::active_list_item_style(theme)),
        Span::styled(" Loading product...", styling::normal_text_style(theme)),
    ]);
    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(line).block(block), area);
}
