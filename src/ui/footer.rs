use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const HINTS: &str = " b: Back │ n/p: Next/Prev │ r: Reload │ g: Go to │ q: Quit";

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    /// Key hints, or the identifier prompt while it is open.
    pub fn widget(&self, area: Rect, prompt: Option<&str>) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = match prompt {
            Some(buffer) => Line::from(vec![
                Span::styled(" Go to product: ", Style::default().fg(HEADER_TEXT)),
                Span::styled(format!("{buffer}_"), Style::default().fg(ACCENT)),
                Span::styled("   Enter: Open │ Esc: Cancel", text_style),
            ]),
            None => {
                let version = format!("v{} ", VERSION);

                // Calculate padding using char count, not byte count (for Unicode)
                let hints_width = HINTS.chars().count();
                let version_width = version.chars().count();
                let content_width = area.width.saturating_sub(2) as usize; // minus borders
                let padding = content_width
                    .saturating_sub(hints_width)
                    .saturating_sub(version_width);

                Line::from(vec![
                    Span::styled(HINTS, text_style),
                    Span::styled(" ".repeat(padding), text_style),
                    Span::styled(version, text_style),
                ])
            }
        };

        Paragraph::new(line).alignment(Alignment::Left).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
