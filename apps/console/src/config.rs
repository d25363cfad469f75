//! # Console Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     CAR_RENTAL_CURRENCY=$                                              │
//! │     CAR_RENTAL_SEED=false                                              │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <path>, else CAR_RENTAL_CONFIG, else                      │
//! │     ~/.config/car-rental/config.toml (Linux)                           │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     ₹ currency, built-in sample fleet                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [display]
//! currency_symbol = "₹"
//!
//! [seed]
//! sample_data = true
//!
//! [[seed.cars]]
//! id = "C008"
//! brand = "Maruti Suzuki"
//! model = "Baleno"
//! price_per_day = 2800.0
//! car_type = "hatchback"
//!
//! [[seed.customers]]
//! id = "CUS004"
//! name = "Vikram Rao"
//! phone = "9000000000"
//! ```

use std::path::PathBuf;

use rental_core::validation::{validate_car, validate_customer};
use rental_core::{Car, Customer};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ConsoleError, ConsoleResult};

pub const ENV_CONFIG_PATH: &str = "CAR_RENTAL_CONFIG";
pub const ENV_CURRENCY: &str = "CAR_RENTAL_CURRENCY";
pub const ENV_SEED: &str = "CAR_RENTAL_SEED";

// =============================================================================
// Display Settings
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Prefix for every amount shown.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_currency_symbol() -> String {
    "₹".to_string()
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            currency_symbol: default_currency_symbol(),
        }
    }
}

// =============================================================================
// Seed Settings
// =============================================================================

/// Startup data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedSettings {
    /// Load the built-in sample fleet and customers.
    #[serde(default = "default_true")]
    pub sample_data: bool,

    /// Extra cars, added after the sample data (same id overwrites).
    #[serde(default)]
    pub cars: Vec<Car>,

    /// Extra customers, added after the sample data.
    #[serde(default)]
    pub customers: Vec<Customer>,
}

fn default_true() -> bool {
    true
}

impl Default for SeedSettings {
    fn default() -> Self {
        SeedSettings {
            sample_data: true,
            cars: Vec::new(),
            customers: Vec::new(),
        }
    }
}

// =============================================================================
// Console Config
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConsoleConfig {
    #[serde(default)]
    pub display: DisplaySettings,

    #[serde(default)]
    pub seed: SeedSettings,
}

impl ConsoleConfig {
    /// Loads configuration from file and environment.
    ///
    /// An explicit `config_path` must exist; the default locations are
    /// optional.
    pub fn load(config_path: Option<PathBuf>) -> ConsoleResult<Self> {
        let explicit = config_path.or_else(|| std::env::var(ENV_CONFIG_PATH).ok().map(PathBuf::from));

        let mut config = match explicit {
            Some(path) if !path.exists() => return Err(ConsoleError::ConfigNotFound(path)),
            Some(path) => Self::from_file(path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(path)?,
                path => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
            },
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML config file.
    pub fn from_file(path: PathBuf) -> ConsoleResult<Self> {
        info!(?path, "Loading config from file");
        let contents = std::fs::read_to_string(&path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> ConsoleResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConsoleResult<()> {
        if self.display.currency_symbol.chars().count() > 5 {
            return Err(ConsoleError::InvalidConfig(format!(
                "currency_symbol must be at most 5 characters, got: {}",
                self.display.currency_symbol
            )));
        }

        for car in &self.seed.cars {
            validate_car(car).map_err(|e| {
                ConsoleError::InvalidConfig(format!("seed car '{}': {}", car.id, e))
            })?;
        }

        for customer in &self.seed.customers {
            validate_customer(customer).map_err(|e| {
                ConsoleError::InvalidConfig(format!("seed customer '{}': {}", customer.id, e))
            })?;
        }

        Ok(())
    }

    // =========================================================================
    // Environment Overrides
    // =========================================================================

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from a key lookup (the process environment in
    /// production).
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(symbol) = lookup(ENV_CURRENCY) {
            debug!(symbol = %symbol, "Overriding currency symbol from environment");
            self.display.currency_symbol = symbol;
        }

        if let Some(seed) = lookup(ENV_SEED) {
            match seed.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => self.seed.sample_data = true,
                "0" | "false" | "no" | "off" => self.seed.sample_data = false,
                other => debug!(value = %other, "Ignoring unrecognised seed override"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "car-rental")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
