use super::Frame;
use crate::catalog::Product;
use crate::state::State;
use crate::ui::widgets::{spinner, styling};
use crate::ui::Theme;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

const MAX_STARS: usize = 5;

/// Render product detail widget according to state.
///
pub fn product_detail(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::active_block_border_style(theme));

    let detail = match state.get_product_detail().map(|d| d.try_lock()) {
        Some(Ok(detail)) => detail,
        // Busy fetching.
        _ => {
            let block = block.title("Product Detail");
            frame.render_widget(spinner::widget(state, size.height).block(block), size);
            return;
        }
    };

    let block = block.title(Span::styled(
        detail.page_title().to_owned(),
        styling::active_block_title_style(),
    ));

    let mut lines = vec![];
    if let Some(error) = detail.error_message() {
        lines.push(Line::from(Span::styled(
            error.to_owned(),
            styling::error_text_style(theme),
        )));
        lines.push(Line::from(""));
    }
    match detail.product() {
        Some(product) => lines.extend(product_lines(product, theme)),
        None if detail.error_message().is_none() => lines.push(Line::from(Span::styled(
            "No product found",
            styling::muted_text_style(theme),
        ))),
        None => (),
    }

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block),
        size,
    );
}

fn product_lines(product: &Product, theme: &Theme) -> Vec<Line<'static>> {
    let field = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<14}", label), styling::label_style(theme)),
            Span::styled(value, styling::normal_text_style(theme)),
        ])
    };

    let mut lines = vec![
        field("Name:", product.product_name.clone()),
        field("Code:", product.product_code.clone()),
        field("Category:", product.category.clone()),
        field("Tags:", product.tags.join(", ")),
    ];
    if let Some(release_date) = &product.release_date {
        lines.push(field("Availability:", release_date.clone()));
    }
    if let Some(price) = product.price {
        lines.push(field("Price:", format!("${:.2}", price)));
    }
    if let Some(rating) = product.star_rating {
        lines.push(field("5 Star Rating:", stars(rating)));
    }
    if let Some(image_url) = &product.image_url {
        lines.push(field("Image:", image_url.clone()));
    }
    if let Some(description) = &product.description {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Description:",
            styling::label_style(theme),
        )));
        lines.push(Line::from(Span::styled(
            description.clone(),
            styling::normal_text_style(theme),
        )));
    }
    lines
}

/// Filled and empty stars for a rating, rounded to the nearest whole star.
///
fn stars(rating: f64) -> String {
    let filled = (rating.round().max(0.0) as usize).min(MAX_STARS);
    format!(
        "{}{} ({:.1})",
        "★".repeat(filled),
        "☆".repeat(MAX_STARS - filled),
        rating
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_round_and_clamp() {
        assert_eq!(stars(3.2), "★★★☆☆ (3.2)");
        assert_eq!(stars(4.5), "★★★★★ (4.5)");
        assert_eq!(stars(9.0), "★★★★★ (9.0)");
        assert_eq!(stars(-1.0), "☆☆☆☆☆ (-1.0)");
    }
}
