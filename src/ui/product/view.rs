//! Rendering for the product detail view.
//!
//! One exhaustive match picks the screen for each state. Line builders are
//! shared with [`plain_text`] so the non-interactive output says exactly what
//! the terminal view shows.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::catalog::Product;
use crate::ui::layout::{centered_band, two_columns};
use crate::ui::theme::{ACCENT, HEADER_TEXT, MUTED_TEXT, PANEL_BORDER, STATUS_ERROR};

use super::state::ProductViewState;

pub const LOADING_MESSAGE: &str = "Loading product...";
pub const NOT_FOUND_MESSAGE: &str = "Product not found.";
pub const IDLE_MESSAGE: &str = "No product selected. Press g to open one.";
pub const BACK_LABEL: &str = "← Back to Products";

/// Render the view for `state` into `area`.
pub fn render_product_view(frame: &mut Frame, area: Rect, state: &ProductViewState) {
    match state {
        ProductViewState::Idle
        | ProductViewState::Loading { .. }
        | ProductViewState::Error { .. }
        | ProductViewState::NotFound { .. } => render_message(frame, area, message_line(state)),
        ProductViewState::Loaded { product, .. } => render_product(frame, area, product),
    }
}

/// Single-line message for every state except `Loaded`.
fn message_line(state: &ProductViewState) -> Line<'static> {
    match state {
        ProductViewState::Idle => Line::styled(IDLE_MESSAGE, Style::default().fg(MUTED_TEXT)),
        ProductViewState::Loading { .. } => {
            Line::styled(LOADING_MESSAGE, Style::default().fg(MUTED_TEXT))
        }
        ProductViewState::Error { error, .. } => Line::styled(
            format!("Error: {}", error.message),
            Style::default().fg(STATUS_ERROR),
        ),
        ProductViewState::NotFound { .. } => {
            Line::styled(NOT_FOUND_MESSAGE, Style::default().fg(MUTED_TEXT))
        }
        ProductViewState::Loaded { product, .. } => Line::from(product.title.clone()),
    }
}

fn render_message(frame: &mut Frame, area: Rect, line: Line<'static>) {
    let width = u16::try_from(line.width()).unwrap_or(u16::MAX);
    let height = width.div_ceil(area.width.max(1)).max(1);
    let paragraph = Paragraph::new(line)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, centered_band(height, area));
}

fn render_product(frame: &mut Frame, area: Rect, product: &Product) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    frame.render_widget(Paragraph::new(back_line()), rows[0]);

    let (image_area, detail_area) = two_columns(rows[1]);

    let image = Paragraph::new(image_lines(product))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(panel(" Image "));
    frame.render_widget(image, image_area);

    let detail = Paragraph::new(detail_lines(product))
        .wrap(Wrap { trim: true })
        .block(panel(" Details "));
    frame.render_widget(detail, detail_area);
}

fn panel(title: &'static str) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(PANEL_BORDER))
}

fn back_line() -> Line<'static> {
    Line::from(vec![
        Span::styled(BACK_LABEL, Style::default().fg(ACCENT)),
        Span::styled("  (b)", Style::default().fg(MUTED_TEXT)),
    ])
}

fn image_lines(product: &Product) -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::styled(product.title.clone(), Style::default().fg(MUTED_TEXT)),
        Line::from(""),
        Line::styled(
            product.image.clone(),
            Style::default()
                .fg(ACCENT)
                .add_modifier(Modifier::UNDERLINED),
        ),
    ]
}

/// Title, description, price, category and rating.
pub fn detail_lines(product: &Product) -> Vec<Line<'static>> {
    let muted = Style::default().fg(MUTED_TEXT);
    vec![
        Line::styled(
            product.title.clone(),
            Style::default()
                .fg(HEADER_TEXT)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::styled(product.description.clone(), muted),
        Line::from(""),
        Line::styled(
            product.display_price(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Line::from(vec![
            Span::styled("Category: ", muted),
            Span::styled(product.category.clone(), muted),
        ]),
        Line::from(vec![
            Span::styled("Rating: ", muted),
            Span::styled(
                product.rating.display_rate(),
                Style::default()
                    .fg(HEADER_TEXT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {}", product.rating.display_count()), muted),
        ]),
    ]
}

/// The view as unstyled text, one line per row.
pub fn plain_text(state: &ProductViewState) -> String {
    let lines = match state {
        ProductViewState::Loaded { product, .. } => {
            let mut lines = detail_lines(product);
            lines.push(Line::from(format!("Image: {}", product.image)));
            lines
        }
        other => vec![message_line(other)],
    };

    lines
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| span.content.as_ref())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
