use super::Frame;
use crate::state::State;
use crate::ui::widgets::{spinner, styling};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

const BLOCK_TITLE: &str = "Product List";

/// Render product list widget according to state.
///
pub fn product_list(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let list = state.get_product_list();

    let title = if state.is_search_mode() || !list.filter().is_empty() {
        format!("{} /{}", BLOCK_TITLE, list.filter())
    } else {
        BLOCK_TITLE.to_string()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::active_block_border_style(theme))
        .title(Span::styled(title, styling::active_block_title_style()));

    if list.is_loading() && list.filtered().is_empty() {
        frame.render_widget(spinner::widget(state, size.height).block(block), size);
        return;
    }

    let inner = block.inner(size);
    frame.render_widget(block, size);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let header = match list.error_message() {
        Some(error) => Line::from(Span::styled(error.to_owned(), styling::error_text_style(theme))),
        None => Line::from(Span::styled(
            format!("{:<28} {:<12} {:<14} {:>9} {:>6}", "Product", "Code", "Category", "Price", "Rating"),
            styling::label_style(theme),
        )),
    };
    frame.render_widget(Paragraph::new(header), rows[0]);

    let products = list.filtered();
    if products.is_empty() {
        let empty = if list.filter().is_empty() {
            "No products"
        } else {
            "No products match the filter"
        };
        frame.render_widget(
            Paragraph::new(Span::styled(empty, styling::muted_text_style(theme))),
            rows[1],
        );
        return;
    }

    let items: Vec<ListItem> = products
        .iter()
        .map(|product| {
            let price = product
                .price
                .map(|p| format!("${:.2}", p))
                .unwrap_or_default();
            let rating = product
                .star_rating
                .map(|r| format!("{:.1}", r))
                .unwrap_or_default();
            ListItem::new(Line::from(Span::styled(
                format!(
                    "{:<28} {:<12} {:<14} {:>9} {:>6}",
                    truncate(&product.product_name, 28),
                    truncate(&product.product_code, 12),
                    truncate(&product.category, 14),
                    price,
                    rating
                ),
                styling::normal_text_style(theme),
            )))
        })
        .collect();

    let mut list_state = ListState::default().with_selected(Some(list.selected_index()));
    let widget = List::new(items).highlight_style(styling::highlight_style(theme));
    frame.render_stateful_widget(widget, rows[1], &mut list_state);
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_owned()
    } else {
        let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}
