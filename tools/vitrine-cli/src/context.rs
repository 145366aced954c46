//! CLI execution context.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context as _, Result};
use vitrine_api::{HttpApi, RetryPolicy};
use vitrine_commerce::money::Currency;
use vitrine_storage::FileStore;
use vitrine_store::CartStore;

use crate::config::CliConfig;
use crate::output::Output;

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

        Ok(Self {
            config,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &PathBuf) -> Option<CliConfig> {
        let config_names = ["vitrine.toml", ".vitrine.toml"];

        let mut current = start.clone();
        loop {
            for name in &config_names {
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

    /// Directory for local state (cart snapshot, order receipts).
    pub fn data_dir(&self) -> PathBuf {
        let dir = PathBuf::from(&self.config.cart.data_dir);
        if dir.is_absolute() {
            dir
        } else {
            self.cwd.join(dir)
        }
    }

    /// Directory for order receipts, created on demand.
    pub fn orders_dir(&self) -> Result<PathBuf> {
        let orders = self.data_dir().join("orders");
        std::fs::create_dir_all(&orders)?;
        Ok(orders)
    }

    /// Currency configured for prices.
    pub fn currency(&self) -> Currency {
        Currency::from_code(&self.config.checkout.currency).unwrap_or_default()
    }

    /// Build the backend API client from config.
    pub fn http_api(&self) -> Result<HttpApi> {
        let api = HttpApi::with_timeout(
            &self.config.api.base_url,
            Duration::from_secs(self.config.api.timeout_secs),
        )
        .context("Failed to build API client")?
        .with_retry(RetryPolicy::new(self.config.api.retries));
        Ok(api)
    }

    /// Open the file-backed cart store.
    pub fn cart_store(&self) -> Result<CartStore<FileStore>> {
        let storage = FileStore::new(self.data_dir()).context("Failed to open cart storage")?;
        Ok(CartStore::new(storage, self.config.cart.storage_key.clone()))
    }
}
