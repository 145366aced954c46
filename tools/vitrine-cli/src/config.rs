//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use vitrine_commerce::checkout::DEFAULT_WHATSAPP_NUMBER;

/// CLI configuration file (`vitrine.toml`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Backend API configuration.
    #[serde(default)]
    pub api: ApiConfig,

    /// Local cart configuration.
    #[serde(default)]
    pub cart: CartConfig,

    /// Checkout configuration.
    #[serde(default)]
    pub checkout: CheckoutConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        toml::from_str(&content).with_context(|| format!("Failed to parse TOML config: {}", path))
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }
}

/// Backend API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the storefront backend.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Retry attempts for idempotent calls.
    #[serde(default = "default_retries")]
    pub retries: u32,
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_retries() -> u32 {
    2
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            retries: default_retries(),
        }
    }
}

/// Local cart configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartConfig {
    /// Directory for local state (cart, order receipts).
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Storage key the cart snapshot is persisted under.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

fn default_data_dir() -> String {
    ".vitrine".to_string()
}

fn default_storage_key() -> String {
    vitrine_store::cart_store::DEFAULT_CART_KEY.to_string()
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            storage_key: default_storage_key(),
        }
    }
}

/// Checkout configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// WhatsApp number used when the backend does not answer.
    #[serde(default = "default_fallback_whatsapp")]
    pub fallback_whatsapp: String,

    /// Currency code for prices (e.g., "BRL").
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_fallback_whatsapp() -> String {
    DEFAULT_WHATSAPP_NUMBER.to_string()
}

fn default_currency() -> String {
    "BRL".to_string()
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            fallback_whatsapp: default_fallback_whatsapp(),
            currency: default_currency(),
        }
    }
}

/// Generate a default vitrine.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Vitrine storefront CLI configuration

[api]
base_url = "http://localhost:3000"
timeout_secs = 30
retries = 2

[cart]
data_dir = ".vitrine"
storage_key = "vitrine-cart"

[checkout]
fallback_whatsapp = "{number}"
currency = "BRL"
"#,
        number = DEFAULT_WHATSAPP_NUMBER
    )
}
