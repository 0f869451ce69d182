//! Named parameter presets.
//!
//! The three selectable presets are `const` data. Conservative and
//! optimistic are written as struct-update expressions over the default,
//! so every field they do not name stays equal to the default preset.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RoiError;
use crate::params::ParameterSet;

/// Baseline business profile the calculator opens with.
pub const DEFAULT_PRESET: ParameterSet = ParameterSet {
    num_partners: 5.0,
    avg_tx_per_partner: 1000.0,
    int_build_cost_per_partner: 15000.0,
    int_maint_pct: 20.0,
    api_fee_per_tx: 0.05,
    compliance_cost_annual: 50000.0,
    error_penalty_rate: 15.0,
    error_rate_legacy: 3.0,
    error_rate_platform: 0.5,
    onboard_days_legacy: 30.0,
    onboard_days_platform: 5.0,
    daily_revenue_per_partner: 2000.0,
};

/// Smaller network, lower volume, lower partner revenue.
pub const CONSERVATIVE_PRESET: ParameterSet = ParameterSet {
    num_partners: 3.0,
    avg_tx_per_partner: 500.0,
    daily_revenue_per_partner: 1000.0,
    ..DEFAULT_PRESET
};

/// Larger network, higher volume, higher partner revenue.
pub const OPTIMISTIC_PRESET: ParameterSet = ParameterSet {
    num_partners: 10.0,
    avg_tx_per_partner: 2000.0,
    daily_revenue_per_partner: 5000.0,
    ..DEFAULT_PRESET
};

/// Which preset the current parameters came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    /// Baseline preset
    #[default]
    Default,
    /// Cautious preset
    Conservative,
    /// Upside preset
    Optimistic,
    /// Parameters edited by hand
    Custom,
}

impl Scenario {
    /// The presets a user can pick, in button order.
    pub const PRESETS: [Scenario; 3] = [
        Scenario::Default,
        Scenario::Conservative,
        Scenario::Optimistic,
    ];

    /// Preset parameters, or `None` for [`Scenario::Custom`].
    pub fn preset(&self) -> Option<&'static ParameterSet> {
        match self {
            Scenario::Default => Some(&DEFAULT_PRESET),
            Scenario::Conservative => Some(&CONSERVATIVE_PRESET),
            Scenario::Optimistic => Some(&OPTIMISTIC_PRESET),
            Scenario::Custom => None,
        }
    }

    /// Lowercase name.
    pub fn as_label(&self) -> &'static str {
        match self {
            Scenario::Default => "default",
            Scenario::Conservative => "conservative",
            Scenario::Optimistic => "optimistic",
            Scenario::Custom => "custom",
        }
    }

    /// Button caption.
    pub fn display_name(&self) -> &'static str {
        match self {
            Scenario::Default => "Typical",
            Scenario::Conservative => "Conservative",
            Scenario::Optimistic => "Optimistic",
            Scenario::Custom => "Custom",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

impl FromStr for Scenario {
    type Err = RoiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(Scenario::Default),
            "conservative" => Ok(Scenario::Conservative),
            "optimistic" => Ok(Scenario::Optimistic),
            "custom" => Ok(Scenario::Custom),
            _ => Err(RoiError::UnknownScenario(s.trim().to_string())),
        }
    }
}
