use super::Frame;
use crate::products::Section;
use crate::state::{EditField, State};
use crate::ui::widgets::{spinner, styling};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
};

const CURSOR: &str = "▏";

/// Render the tabbed product editor according to state.
///
pub fn product_edit(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let form = state.get_edit_form();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::active_block_border_style(theme));

    let mut editor = match state.get_product_edit().map(|e| e.try_lock()) {
        Some(Ok(editor)) => editor,
        // Saving or deleting.
        _ => {
            let block = block.title("Product Edit");
            frame.render_widget(spinner::widget(state, size.height).block(block), size);
            return;
        }
    };

    let block = block.title(Span::styled(
        editor.page_title().to_owned(),
        styling::active_block_title_style(),
    ));
    let inner = block.inner(size);
    frame.render_widget(block, size);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(inner);

    let titles: Vec<Line> = Section::ALL
        .iter()
        .map(|section| {
            let (marker, marker_style) =
                styling::validity_marker(theme, editor.is_section_valid(*section));
            Line::from(vec![
                Span::styled(section_title(*section), styling::normal_text_style(theme)),
                Span::raw(" "),
                Span::styled(marker, marker_style),
            ])
        })
        .collect();
    let selected = Section::ALL
        .iter()
        .position(|s| *s == form.section())
        .unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .highlight_style(styling::highlight_style(theme));
    frame.render_widget(tabs, rows[0]);

    let lines: Vec<Line> = match editor.product() {
        Some(product) => EditField::fields_in(form.section())
            .map(|field| {
                let focused = field == form.field;
                let label_style = if focused {
                    styling::active_list_item_style(theme)
                } else {
                    styling::label_style(theme)
                };
                let mut spans = vec![
                    Span::styled(format!("{:<13}", format!("{}:", field.label())), label_style),
                    Span::styled(
                        form.value(field, product).to_owned(),
                        styling::normal_text_style(theme),
                    ),
                ];
                if focused {
                    spans.push(Span::styled(CURSOR, styling::active_list_item_style(theme)));
                }
                Line::from(spans)
            })
            .collect(),
        None => vec![Line::from(Span::styled(
            "No product found",
            styling::muted_text_style(theme),
        ))],
    };
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), rows[1]);

    let save_disabled = editor.product().is_some() && !editor.is_valid();
    let status = match editor.error_message() {
        Some(error) => Line::from(Span::styled(error.to_owned(), styling::error_text_style(theme))),
        None if save_disabled => Line::from(Span::styled(
            "Save is disabled until every tab is valid",
            styling::muted_text_style(theme),
        )),
        None => Line::from(""),
    };
    frame.render_widget(Paragraph::new(status).wrap(Wrap { trim: true }), rows[2]);
}

fn section_title(section: Section) -> &'static str {
    match section {
        Section::Info => "Basic Info",
        Section::Tags => "Search Tags",
    }
}
