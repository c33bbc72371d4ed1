//! Built-in demo catalog.

use rust_decimal::Decimal;

use super::product::{Product, ProductId};

struct Seed {
    id: u32,
    name: &'static str,
    price_cents: i64,
    original_price_cents: Option<i64>,
    image: &'static str,
    rating: f32,
    reviews: u32,
    category: &'static str,
    description: &'static str,
}

const SEEDS: [Seed; 6] = [
    Seed {
        id: 1,
        name: "Wireless Bluetooth Headphones",
        price_cents: 8999,
        original_price_cents: Some(12999),
        image: "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=300&h=300&fit=crop",
        rating: 4.5,
        reviews: 234,
        category: "Electronics",
        description: "Premium sound quality with noise cancellation",
    },
    Seed {
        id: 2,
        name: "Organic Cotton T-Shirt",
        price_cents: 2499,
        original_price_cents: None,
        image: "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=300&h=300&fit=crop",
        rating: 4.2,
        reviews: 89,
        category: "Fashion",
        description: "Soft, sustainable, and comfortable everyday wear",
    },
    Seed {
        id: 3,
        name: "Smart Water Bottle",
        price_cents: 4500,
        original_price_cents: Some(5500),
        image: "https://images.unsplash.com/photo-1602143407151-7111542de6e8?w=300&h=300&fit=crop",
        rating: 4.7,
        reviews: 156,
        category: "Lifestyle",
        description: "Track your hydration with smart technology",
    },
    Seed {
        id: 4,
        name: "Ergonomic Office Chair",
        price_cents: 29999,
        original_price_cents: None,
        image: "https://images.unsplash.com/photo-1586023492125-27b2c045efd7?w=300&h=300&fit=crop",
        rating: 4.8,
        reviews: 342,
        category: "Furniture",
        description: "Ultimate comfort for long working hours",
    },
    Seed {
        id: 5,
        name: "Portable Phone Charger",
        price_cents: 2999,
        original_price_cents: Some(3999),
        image: "https://images.unsplash.com/photo-1609091839311-d5365f9ff1c5?w=300&h=300&fit=crop",
        rating: 4.3,
        reviews: 178,
        category: "Electronics",
        description: "Never run out of battery on the go",
    },
    Seed {
        id: 6,
        name: "Yoga Mat Premium",
        price_cents: 5999,
        original_price_cents: None,
        image: "https://images.unsplash.com/photo-1544367567-0f2fcb009e0b?w=300&h=300&fit=crop",
        rating: 4.6,
        reviews: 267,
        category: "Fitness",
        description: "Non-slip surface for perfect yoga practice",
    },
];

/// The six demo products, in display order.
pub fn seeded_products() -> Vec<Product> {
    SEEDS
        .iter()
        .map(|seed| Product {
            id: ProductId(seed.id),
            name: seed.name.to_string(),
            price: Decimal::new(seed.price_cents, 2),
            original_price: seed.original_price_cents.map(|cents| Decimal::new(cents, 2)),
            image: seed.image.to_string(),
            rating: seed.rating,
            reviews: seed.reviews,
            category: seed.category.to_string(),
            description: seed.description.to_string(),
        })
        .collect()
}
