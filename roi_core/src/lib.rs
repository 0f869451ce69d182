//! # healthdex-roi
//!
//! ROI engine and calculator state behind the Healthdex landing page widget.
//!
//! The crate turns a handful of business parameters (trading partners,
//! transaction volume, integration and compliance costs, error rates,
//! onboarding times) into four illustrative benefit figures, and keeps the
//! interactive calculator's state as an immutable record driven by actions.
//!
//! ## Quick Start
//!
//! ```rust
//! use healthdex_roi::{compute_benefits, Scenario};
//!
//! let params = Scenario::Default.preset().copied().unwrap_or_default();
//! let results = compute_benefits(&params);
//!
//! assert_eq!(results.total_benefit, 402_400.0);
//! ```
//!
//! ## Driving the calculator
//!
//! ```rust
//! use healthdex_roi::{Action, CalculatorState, Field, MetricKey, Scenario};
//!
//! let state = CalculatorState::default()
//!     .apply(Action::SelectScenario(Scenario::Conservative))
//!     .apply(Action::EditField { field: Field::NumPartners, raw: "8".into() })
//!     .apply(Action::Calculate)
//!     .apply(Action::ToggleMetricDetail(MetricKey::CostSaving));
//!
//! assert_eq!(state.scenario, Scenario::Custom);
//! assert_eq!(state.params.num_partners, 8.0);
//! assert_eq!(state.selected_metric, Some(MetricKey::CostSaving));
//! ```
//!
//! ## Architecture
//!
//! - [`params`] - the twelve-field [`ParameterSet`] and raw input coercion
//! - [`scenario`] - named presets
//! - [`pricing`] - platform pricing constants and the optional config file
//! - [`engine`] - the pure benefit computation
//! - [`metrics`] - per-metric explanation overlays
//! - [`controller`] - the calculator state record and its reducer
//! - [`format`] - display formatting for currency, days and percentages
//!
//! ---
//!
//! Developed by The Healthdex Team (c)2025

#![doc(html_root_url = "https://docs.rs/healthdex-roi/0.3.2")]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod controller;
pub mod engine;
pub mod error;
pub mod format;
pub mod metrics;
pub mod params;
pub mod pricing;
pub mod scenario;

pub use controller::{Action, CalculatorState};
pub use engine::{
    CostBreakdown, LegacyCosts, PlatformCosts, ResultSet, compute_benefits, compute_breakdown,
    compute_with_pricing,
};
pub use error::RoiError;
pub use format::{format_currency, format_days, format_percent};
pub use metrics::{MetricExplanation, MetricKey, MetricLine, explain};
pub use params::{Field, ParameterSet, coerce_numeric};
pub use pricing::{PlatformPricing, RoiConfig};
pub use scenario::Scenario;
