use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use super::{Catalog, Product};

/// Errors that can occur when loading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file '{path}'")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog file '{path}'")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to parse catalog")]
    InvalidToml(#[from] toml::de::Error),

    #[error("Catalog validation failed: {message}")]
    ValidationError { message: String },
}

/// On-disk layout: a list of `[[products]]` tables.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    products: Vec<Product>,
}

impl Catalog {
    /// Loads and validates a catalog from a TOML file.
    pub fn load_from(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|e| CatalogError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        let file: CatalogFile =
            toml::from_str(&content).map_err(|e| CatalogError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })?;
        let catalog = Catalog::new(file.products)?;
        info!(
            path = %path.display(),
            products = catalog.len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    /// Parses and validates a catalog from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(content)?;
        Catalog::new(file.products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductId;
    use rust_decimal::Decimal;

    const TWO_PRODUCTS: &str = r#"
[[products]]
id = 10
name = "Desk Lamp"
price = 19.5
image = "https://example.com/lamp.png"
rating = 3.9
reviews = 12
category = "Home"
description = "Warm light"

[[products]]
id = 11
name = "Notebook"
price = "4.25"
original_price = "6.00"
image = "https://example.com/notebook.png"
rating = 4.0
reviews = 3
category = "Office"
description = "Dotted pages"
"#;

    #[test]
    fn parses_products_in_file_order() {
        let catalog = Catalog::from_toml_str(TWO_PRODUCTS).unwrap();
        let ids: Vec<ProductId> = catalog.ids().collect();
        assert_eq!(ids, vec![ProductId(10), ProductId(11)]);
    }

    #[test]
    fn parses_prices_as_decimals() {
        let catalog = Catalog::from_toml_str(TWO_PRODUCTS).unwrap();
        let notebook = catalog.get(ProductId(11)).unwrap();
        assert_eq!(notebook.price, Decimal::new(425, 2));
        assert_eq!(notebook.original_price, Some(Decimal::new(600, 2)));
        assert!(catalog.get(ProductId(10)).unwrap().original_price.is_none());
    }

    #[test]
    fn malformed_toml_is_invalid_toml() {
        let result = Catalog::from_toml_str("[[products]\nid = ");
        assert!(matches!(result, Err(CatalogError::InvalidToml(_))));
    }

    #[test]
    fn invalid_records_are_validation_errors() {
        let content = TWO_PRODUCTS.replace("id = 11", "id = 10");
        let result = Catalog::from_toml_str(&content);
        assert!(matches!(result, Err(CatalogError::ValidationError { .. })));
    }
}
