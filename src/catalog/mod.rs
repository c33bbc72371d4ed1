//! Read-only product catalog.
//!
//! The catalog is loaded once at startup, either from the built-in seed list
//! or from a TOML file, and is never mutated afterwards.

mod loader;
mod product;
mod seed;

pub use loader::CatalogError;
pub use product::{format_price, Product, ProductId, MAX_RATING};
pub use seed::seeded_products;

use rust_decimal::Decimal;
use std::collections::HashSet;

/// Immutable, ordered sequence of products.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from products, validating every record.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        validate(&products)?;
        Ok(Self { products })
    }

    /// The built-in demo catalog.
    pub fn seeded() -> Self {
        Self {
            products: seeded_products(),
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = ProductId> + '_ {
        self.products.iter().map(|product| product.id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

fn validate(products: &[Product]) -> Result<(), CatalogError> {
    if products.is_empty() {
        return Err(invalid("catalog must contain at least one product"));
    }

    let mut seen = HashSet::new();
    for product in products {
        if product.id.0 == 0 {
            return Err(invalid(format!(
                "product '{}' has id 0; ids must be positive",
                product.name
            )));
        }
        if !seen.insert(product.id) {
            return Err(invalid(format!("duplicate product id {}", product.id)));
        }
        if product.price < Decimal::ZERO {
            return Err(invalid(format!(
                "product {} has a negative price",
                product.id
            )));
        }
        if let Some(original) = product.original_price {
            if original < product.price {
                return Err(invalid(format!(
                    "product {} has original_price {} below price {}",
                    product.id, original, product.price
                )));
            }
        }
        if !(0.0..=MAX_RATING).contains(&product.rating) {
            return Err(invalid(format!(
                "product {} has rating {} outside [0, {}]",
                product.id, product.rating, MAX_RATING
            )));
        }
    }
    Ok(())
}

fn invalid(message: impl Into<String>) -> CatalogError {
    CatalogError::ValidationError {
        message: message.into(),
    }
}
