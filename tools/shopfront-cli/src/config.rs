//! CLI configuration.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use shopfront_commerce::cart::DEFAULT_CART_KEY;
use shopfront_commerce::Currency;

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Where the cart is persisted.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Where products are read from.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Shop settings.
    #[serde(default)]
    pub shop: ShopConfig,

    /// Log output.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}

/// Storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory of the file-backed store (default: .shopfront).
    #[serde(default = "default_storage_dir")]
    pub dir: String,

    /// Key the cart is stored under.
    #[serde(default = "default_cart_key")]
    pub cart_key: String,

    /// Largest value the store accepts, in bytes (default: 5 MiB). 0 means
    /// unlimited.
    #[serde(default = "default_max_value_bytes")]
    pub max_value_bytes: usize,
}

fn default_storage_dir() -> String {
    ".shopfront".to_string()
}

fn default_cart_key() -> String {
    DEFAULT_CART_KEY.to_string()
}

fn default_max_value_bytes() -> usize {
    5 * 1024 * 1024
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_storage_dir(),
            cart_key: default_cart_key(),
            max_value_bytes: default_max_value_bytes(),
        }
    }
}

/// Catalog configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON file holding the product list, as returned by the products API.
    #[serde(default = "default_catalog_path")]
    pub path: String,
}

fn default_catalog_path() -> String {
    "catalog.json".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

/// Shop configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Currency code used for totals (default: TWD).
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "TWD".to_string()
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
        }
    }
}

impl ShopConfig {
    /// Parse the configured currency code.
    pub fn currency(&self) -> Result<Currency> {
        Currency::from_code(&self.currency)
            .ok_or_else(|| anyhow!("Unsupported currency in config: {}", self.currency))
    }
}

/// Log format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Level for Shopfront crates (default: warn). `RUST_LOG` overrides it.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}
