use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, ALL_BADGE_BG, FAVORITES_BADGE_BG, GLOBAL_BORDER, HEADER_SEPARATOR,
    HEADER_TEXT, MUTED_TEXT, SALE_RED,
};
use crate::view::{Badges, Tab};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Tab strip: "All Products" and "Favorites", each with a count badge.
pub struct TabBar {
    active: Tab,
    badges: Badges,
}

impl TabBar {
    pub fn new(active: Tab, badges: Badges) -> Self {
        Self { active, badges }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let mut spans = vec![Span::raw(" ")];

        for (idx, tab) in Tab::ALL.into_iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled("  │  ", separator_style));
            }
            spans.extend(self.tab_spans(tab));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }

    fn tab_spans(&self, tab: Tab) -> Vec<Span<'static>> {
        let active = tab == self.active;
        let mut title_style = Style::default().fg(if active { HEADER_TEXT } else { MUTED_TEXT });
        if active {
            title_style = title_style
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }

        let count = self.badges.for_tab(tab);
        let mut spans = Vec::new();
        let badge_bg = match tab {
            Tab::All => ALL_BADGE_BG,
            Tab::Favorites => {
                // Heart fills in once anything is favorited.
                let heart = if count > 0 {
                    Span::styled("♥ ", Style::default().fg(SALE_RED))
                } else {
                    Span::styled("♡ ", Style::default().fg(MUTED_TEXT))
                };
                spans.push(heart);
                FAVORITES_BADGE_BG
            }
        };
        spans.push(Span::styled(format!(" {} ", tab.title()), title_style));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            format!(" {} ", count),
            Style::default().fg(Color::White).bg(badge_bg),
        ));
        spans
    }
}
