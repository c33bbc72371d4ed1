//! Configuration loading and validation.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{CatalogConfig, Config, LoggingConfig, UiConfig, MAX_GRID_COLUMNS};
