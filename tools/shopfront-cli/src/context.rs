//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use shopfront_cache::FileStore;
use shopfront_commerce::cart::{CartStorage, CartStore};
use shopfront_commerce::catalog::Product;

use crate::config::CliConfig;
use crate::output::Output;

const CONFIG_NAMES: [&str; 3] = ["shopfront.toml", ".shopfront.toml", "shopfront.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = if let Some(path) = config_path {
            CliConfig::load(path)?
        } else {
            // Try to find config in current directory or parent directories
            Self::find_config(&cwd).unwrap_or_default()
        };

        Ok(Self { config, output, cwd })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<CliConfig> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        return Some(config);
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }

    /// Open the persisted cart.
    pub fn open_cart(&self) -> Result<CartStore<FileStore>> {
        let storage = &self.config.storage;
        let dir = self.resolve_path(&storage.dir);
        let mut store = FileStore::open(dir.clone())
            .with_context(|| format!("Failed to open cart storage: {}", dir.display()))?;
        if storage.max_value_bytes > 0 {
            store = store.with_max_value_bytes(storage.max_value_bytes);
        }

        let currency = self.config.shop.currency()?;
        self.output.debug(&format!(
            "Cart storage: {} (key {})",
            dir.display(),
            storage.cart_key
        ));
        Ok(
            CartStore::with_storage(CartStorage::with_key(store, storage.cart_key.clone()))
                .with_currency(currency),
        )
    }

    /// Read the product list named in config.
    pub fn load_catalog(&self) -> Result<Vec<Product>> {
        let path = self.resolve_path(&self.config.catalog.path);
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse catalog: {}", path.display()))
    }
}
