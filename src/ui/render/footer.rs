use super::Frame;
use crate::state::{State, View};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Key hints for the current view.
///
fn hints_for_view(state: &State) -> &'static str {
    if state.get_pending_confirmation().is_some() {
        return " y: confirm  n/Esc: cancel";
    }
    if state.is_search_mode() {
        return " Type to filter  Backspace: delete  Enter/Esc: done";
    }
    match state.current_view() {
        View::Welcome => " Enter/p: products  n: new product  q: quit",
        View::ProductList => {
            " j/k: navigate  Enter: view  e: edit  n: new  /: filter  Esc: back  q: quit"
        }
        View::ProductDetail => " e: edit  n: new  p: products  Esc: back  q: quit",
        View::ProductEdit => {
            " Tab/Shift-Tab: field  PgUp/PgDn: tab  Ctrl-S: save  Ctrl-D: delete  Esc: cancel"
        }
        View::PageNotFound => " Enter: welcome  Esc: back  q: quit",
    }
}

fn mode_label(state: &State) -> (&'static str, Style) {
    let theme = state.get_theme();
    let (label, color) = if state.get_pending_confirmation().is_some() {
        ("CONFIRM", theme.footer_confirm)
    } else if state.is_search_mode() {
        ("FILTER", theme.footer_search)
    } else if state.current_view() == View::ProductEdit {
        ("EDIT", theme.footer_edit)
    } else {
        ("BROWSE", theme.footer_normal)
    };
    (
        label,
        Style::default()
            .fg(theme.highlight_fg.to_color())
            .bg(color.to_color())
            .add_modifier(Modifier::BOLD),
    )
}

/// Render footer widget according to state.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let (label, label_style) = mode_label(state);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(label.len() as u16 + 2), Constraint::Min(0)])
        .split(size);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(format!(" {} ", label), label_style))),
        columns[0],
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hints_for_view(state),
            styling::muted_text_style(theme),
        ))),
        columns[1],
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_follow_view_and_mode() {
        let mut state = State::default();
        assert!(hints_for_view(&state).contains("products"));
        assert_eq!(mode_label(&state).0, "BROWSE");

        state.navigate(&["/products"]);
        state.enter_search_mode();
        assert!(hints_for_view(&state).contains("filter"));
        assert_eq!(mode_label(&state).0, "FILTER");
    }
}
