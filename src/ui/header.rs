use crate::ui::theme::{BRAND_BLUE, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub const STORE_NAME: &str = "ShopCart";
pub const PAGE_TITLE: &str = "Our Products";
pub const PAGE_SUBTITLE: &str = "Discover our curated selection of amazing products";

/// Store title on the left, cart button with item count on the right.
pub struct Header {
    cart_count: usize,
}

impl Header {
    pub fn new(cart_count: usize) -> Self {
        Self { cart_count }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let left = vec![
            Span::styled("  ", text_style),
            Span::styled(STORE_NAME, text_style.add_modifier(Modifier::BOLD)),
        ];

        let mut right = vec![Span::styled("🛒 Cart", text_style)];
        // The badge only appears once something is in the cart.
        if self.cart_count > 0 {
            right.push(Span::raw(" "));
            right.push(Span::styled(
                format!(" {} ", self.cart_count),
                Style::default()
                    .fg(Color::White)
                    .bg(BRAND_BLUE)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        right.push(Span::raw("  "));

        let used = Line::from(left.clone()).width() + Line::from(right.clone()).width();
        let padding = (area.width as usize).saturating_sub(used);

        let mut spans = left;
        spans.push(Span::raw(" ".repeat(padding)));
        spans.extend(right);

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

/// One-line page heading drawn between the header and the tab bar.
pub fn page_heading() -> Paragraph<'static> {
    Paragraph::new(Line::from(vec![
        Span::raw("  "),
        Span::styled(
            PAGE_TITLE,
            Style::default()
                .fg(HEADER_TEXT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(PAGE_SUBTITLE, Style::default().fg(MUTED_TEXT)),
    ]))
}
