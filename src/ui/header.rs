use crate::ui::product::ProductViewState;
use crate::ui::theme::{
    GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK,
};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, state: &ProductViewState, catalog: &str) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (status, color) = status_label(state);
        let product = state
            .id()
            .map_or_else(|| "-".to_string(), |id| format!("#{id}"));

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("●", Style::default().fg(color)),
            Span::styled("  ", text_style),
            Span::styled("Storefront", text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(catalog.to_string(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(product, text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(status, Style::default().fg(color)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

fn status_label(state: &ProductViewState) -> (&'static str, Color) {
    match state {
        ProductViewState::Idle => ("idle", MUTED_TEXT),
        ProductViewState::Loading { .. } => ("loading", MUTED_TEXT),
        ProductViewState::Error { .. } => ("error", STATUS_ERROR),
        ProductViewState::NotFound { .. } => ("not found", MUTED_TEXT),
        ProductViewState::Loaded { .. } => ("loaded", STATUS_OK),
    }
}
