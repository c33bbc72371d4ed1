use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Widest product grid the UI will lay out.
pub const MAX_GRID_COLUMNS: u16 = 4;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the product catalog comes from.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct CatalogConfig {
    /// TOML catalog file. The built-in demo catalog is used when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UiConfig {
    /// Event loop tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Maximum number of product cards per grid row (default: 3).
    #[serde(default = "default_max_columns")]
    pub max_columns: u16,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggingConfig {
    /// Minimum level: "trace", "debug", "info", "warn" or "error" (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file. Defaults to `shopcart.log` in the user cache directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_max_columns() -> u16 {
    3
}

fn default_log_level() -> String {
    "info".to_string()
}

impl CatalogConfig {
    /// Catalog file to load, with a relative `path` taken from the directory
    /// holding `config_file`.
    pub fn resolve_path(&self, config_file: &Path) -> Option<PathBuf> {
        let path = self.path.as_ref()?;
        if path.is_relative() {
            if let Some(dir) = config_file.parent() {
                return Some(dir.join(path));
            }
        }
        Some(path.clone())
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            max_columns: default_max_columns(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
