//! Configuration management for the inventory engine
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with APM_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Currency code shown by UI consumers; never affects calculations
    pub currency: String,

    /// Inventory behaviour
    pub inventory: InventoryConfig,

    /// Spreadsheet import limits
    pub import: ImportConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct InventoryConfig {
    /// Threshold applied when a new product does not specify one
    pub default_min_stock_level: u32,

    /// Whether to load the built-in sample catalog at startup
    pub seed_sample_data: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ImportConfig {
    /// Hard cap on data rows accepted from one uploaded file
    pub max_rows: usize,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("APM_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("currency", "KES")?
            .set_default("inventory.default_min_stock_level", 10)?
            .set_default("inventory.seed_sample_data", true)?
            .set_default("import.max_rows", 5000)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (APM_ prefix)
            .add_source(
                Environment::with_prefix("APM")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            default_min_stock_level: 10,
            seed_sample_data: true,
        }
    }
}
