use crate::catalog::Product;
use crate::ui::layout::{
    centered_rect, first_visible_row, row_cells, visible_rows, CARD_HEIGHT,
};
use crate::ui::theme::{
    BRAND_BLUE, CATEGORY_BG, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, SALE_RED, STAR_EMPTY,
    STAR_YELLOW,
};
use crate::view::ViewComposer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

const STAR_COUNT: usize = 5;

pub const EMPTY_FAVORITES_TITLE: &str = "No favorites yet";
pub const EMPTY_FAVORITES_HINT: &str =
    "Press f on a product to save it to your favorites list";

/// One product tile.
pub struct ProductCard<'a> {
    product: &'a Product,
    is_favorite: bool,
    selected: bool,
}

impl<'a> ProductCard<'a> {
    pub fn new(product: &'a Product, is_favorite: bool, selected: bool) -> Self {
        Self {
            product,
            is_favorite,
            selected,
        }
    }

    pub fn widget(&self) -> Paragraph<'a> {
        let product = self.product;
        let muted = Style::default().fg(MUTED_TEXT);

        let mut badges = Vec::new();
        if product.is_on_sale() {
            badges.push(Span::styled(
                " Sale ",
                Style::default()
                    .fg(Color::White)
                    .bg(SALE_RED)
                    .add_modifier(Modifier::BOLD),
            ));
            badges.push(Span::raw(" "));
        }
        badges.push(Span::styled(
            format!(" {} ", product.category),
            Style::default().fg(HEADER_TEXT).bg(CATEGORY_BG),
        ));

        let mut name_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD);
        if self.selected {
            name_style = name_style.fg(BRAND_BLUE);
        }

        let mut price = vec![Span::styled(
            product.display_price(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )];
        if let Some(original) = product.display_original_price() {
            price.push(Span::raw("  "));
            price.push(Span::styled(
                original,
                muted.add_modifier(Modifier::CROSSED_OUT),
            ));
        }

        let actions = if self.selected {
            Line::from(Span::styled("f: Favorite  a: Add to cart", muted))
        } else {
            Line::default()
        };

        let lines = vec![
            Line::from(badges),
            Line::from(Span::styled(product.name.as_str(), name_style)),
            Line::from(Span::styled(product.description.as_str(), muted)),
            star_line(product),
            Line::from(price),
            actions,
        ];

        let heart = if self.is_favorite {
            Span::styled(" ♥ ", Style::default().fg(SALE_RED))
        } else {
            Span::styled(" ♡ ", muted)
        };
        let (border_style, border_type) = if self.selected {
            (Style::default().fg(BRAND_BLUE), BorderType::Thick)
        } else {
            (Style::default().fg(GLOBAL_BORDER), BorderType::Plain)
        };

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(border_style)
                .title(Line::from(heart).right_aligned()),
        )
    }
}

/// Five stars with `floor(rating)` filled, followed by the review count.
fn star_line(product: &Product) -> Line<'static> {
    let filled = product.filled_stars().min(STAR_COUNT);
    Line::from(vec![
        Span::styled("★".repeat(filled), Style::default().fg(STAR_YELLOW)),
        Span::styled(
            "☆".repeat(STAR_COUNT - filled),
            Style::default().fg(STAR_EMPTY),
        ),
        Span::styled(
            format!("  ({})", product.reviews),
            Style::default().fg(MUTED_TEXT),
        ),
    ])
}

/// Lay out `products` as rows of cards, scrolled so the selected card is
/// visible.
pub fn render_grid(
    frame: &mut Frame<'_>,
    area: Rect,
    products: &[&Product],
    composer: &ViewComposer<'_>,
    selected: usize,
    columns: usize,
) {
    let columns = columns.max(1);
    let rows = visible_rows(area.height);
    let first_row = first_visible_row(selected / columns, rows);

    for (row_offset, chunk) in products
        .chunks(columns)
        .skip(first_row)
        .take(rows)
        .enumerate()
    {
        let y = area.y + row_offset as u16 * CARD_HEIGHT;
        let height = CARD_HEIGHT.min(area.bottom().saturating_sub(y));
        if height == 0 {
            break;
        }
        let row = Rect {
            x: area.x,
            y,
            width: area.width,
            height,
        };
        let cells = row_cells(row, columns);
        for (col, (product, cell)) in chunk.iter().zip(cells).enumerate() {
            let index = (first_row + row_offset) * columns + col;
            let card = ProductCard::new(product, composer.is_favorite(product.id), index == selected);
            frame.render_widget(card.widget(), cell);
        }
    }
}

/// Shown on the favorites tab when nothing has been favorited.
pub fn render_empty_favorites(frame: &mut Frame<'_>, area: Rect) {
    let lines = vec![
        Line::from(Span::styled("♡", Style::default().fg(STAR_EMPTY))),
        Line::default(),
        Line::from(Span::styled(
            EMPTY_FAVORITES_TITLE,
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            EMPTY_FAVORITES_HINT,
            Style::default().fg(MUTED_TEXT),
        )),
    ];
    let target = centered_rect(90, 60, area);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        target,
    );
}
