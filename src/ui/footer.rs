use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const KEY_HINTS: &str =
    " ←↑↓→: Move │ Tab: Switch │ f: Favorite │ a: Add to cart │ q: Quit";

/// Key hints, or the latest notice, with the version on the right.
pub struct Footer<'a> {
    notice: Option<&'a str>,
}

impl<'a> Footer<'a> {
    pub fn new(notice: Option<&'a str>) -> Self {
        Self { notice }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let text = match self.notice {
            Some(notice) => format!(" {}", notice),
            None => KEY_HINTS.to_string(),
        };
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let text_width = text.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(text_width)
            .saturating_sub(version_width);

        let mut text_style = Style::default().fg(HEADER_TEXT);
        if self.notice.is_none() {
            text_style = text_style.add_modifier(Modifier::DIM);
        }
        let version_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(text, text_style),
            Span::styled(" ".repeat(padding), version_style),
            Span::styled(version, version_style),
        ]);

        Paragraph::new(line).alignment(Alignment::Left).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
