//! Platform pricing and the optional config file.
//!
//! Loads optional `.healthdex/config.toml` from a project root:
//!
//! ```toml
//! [pricing]
//! base_subscription = 12000
//! per_partner_subscription = 900
//! ```
//!
//! Keys left out keep their published defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::RoiError;

/// Healthdex's published pricing, as used by the benefit formulas.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformPricing {
    /// Flat annual subscription
    pub base_subscription: f64,
    /// Annual subscription added per trading partner
    pub per_partner_subscription: f64,
    /// Fee per transaction routed through the platform
    pub per_transaction_fee: f64,
    /// Share of the legacy compliance cost still incurred on the platform
    pub compliance_factor: f64,
}

impl Default for PlatformPricing {
    fn default() -> Self {
        Self {
            base_subscription: 10_000.0,
            per_partner_subscription: 1_000.0,
            per_transaction_fee: 0.01,
            compliance_factor: 0.4,
        }
    }
}

/// Root configuration structure
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoiConfig {
    /// Platform pricing overrides
    pub pricing: PlatformPricing,
}

impl RoiConfig {
    /// Load config from `.healthdex/config.toml` in the given root directory.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(".healthdex").join("config.toml");
        Self::load_from_path(&config_path)
    }

    /// Load config from a specific path, falling back to defaults.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match Self::read(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{}; using default pricing", e);
                Self::default()
            }
        }
    }

    /// Read and parse a config file, reporting any failure.
    pub fn read(path: &Path) -> Result<Self, RoiError> {
        let content = std::fs::read_to_string(path).map_err(|e| RoiError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, RoiError> {
        Ok(toml::from_str(content)?)
    }
}
