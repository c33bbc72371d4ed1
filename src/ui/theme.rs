use ratatui::style::Color;

pub const BRAND_BLUE: Color = Color::Rgb(0x25, 0x63, 0xeb);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const MUTED_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const SALE_RED: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const STAR_YELLOW: Color = Color::Rgb(0xfa, 0xcc, 0x15);
pub const STAR_EMPTY: Color = Color::Rgb(0x4b, 0x55, 0x63);
pub const CATEGORY_BG: Color = Color::Rgb(0x37, 0x41, 0x51);
pub const FAVORITES_BADGE_BG: Color = Color::Rgb(0x7f, 0x1d, 0x1d);
pub const ALL_BADGE_BG: Color = Color::Rgb(0x1e, 0x3a, 0x8a);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
