use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity key of a catalog product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Highest rating a product can carry.
pub const MAX_RATING: f32 = 5.0;

/// A purchasable item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub price: Decimal,
    /// Pre-discount price. Only present when the product is on sale.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "rust_decimal::serde::float_option::serialize"
    )]
    pub original_price: Option<Decimal>,
    /// Image URI.
    pub image: String,
    pub rating: f32,
    pub reviews: u32,
    pub category: String,
    pub description: String,
}

impl Product {
    pub fn is_on_sale(&self) -> bool {
        self.original_price.is_some()
    }

    /// Number of filled stars out of five: the rating rounded down.
    pub fn filled_stars(&self) -> usize {
        self.rating.clamp(0.0, MAX_RATING).floor() as usize
    }

    pub fn display_price(&self) -> String {
        format_price(self.price)
    }

    pub fn display_original_price(&self) -> Option<String> {
        self.original_price.map(format_price)
    }
}

/// Formats a price as dollars with two decimals (`$45.00`).
pub fn format_price(price: Decimal) -> String {
    format!("${:.2}", price)
}
