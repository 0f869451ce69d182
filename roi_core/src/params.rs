//! Business parameters fed into the ROI engine.
//!
//! A [`ParameterSet`] is a plain `Copy` record of twelve `f64` fields. Every
//! value that reaches it from a text input goes through [`coerce_numeric`],
//! so the record never holds NaN or an infinity.
//!
//! # Example
//!
//! ```rust
//! use healthdex_roi::{Field, ParameterSet};
//!
//! let params = ParameterSet::default().with(Field::NumPartners, 12.0);
//! assert_eq!(params.get(Field::NumPartners), 12.0);
//! assert_eq!(ParameterSet::default().num_partners, 5.0);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RoiError;
use crate::scenario::DEFAULT_PRESET;

/// The twelve numeric inputs describing a business scenario.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    /// Count of trading partners
    pub num_partners: f64,
    /// Transactions per partner per month
    pub avg_tx_per_partner: f64,
    /// One-time legacy integration cost per partner
    pub int_build_cost_per_partner: f64,
    /// Annual maintenance as a percentage of the build cost (0-100)
    pub int_maint_pct: f64,
    /// Legacy per-transaction fee
    pub api_fee_per_tx: f64,
    /// Annual compliance cost on the legacy stack
    pub compliance_cost_annual: f64,
    /// Cost incurred per erroneous transaction
    pub error_penalty_rate: f64,
    /// Legacy error rate, percent (0-100)
    pub error_rate_legacy: f64,
    /// Platform error rate, percent (0-100)
    pub error_rate_platform: f64,
    /// Days to onboard a partner on the legacy stack
    pub onboard_days_legacy: f64,
    /// Days to onboard a partner on the platform
    pub onboard_days_platform: f64,
    /// Revenue per partner per day once onboarded
    pub daily_revenue_per_partner: f64,
}

impl Default for ParameterSet {
    fn default() -> Self {
        DEFAULT_PRESET
    }
}

impl ParameterSet {
    /// All fields zero.
    pub const ZERO: ParameterSet = ParameterSet {
        num_partners: 0.0,
        avg_tx_per_partner: 0.0,
        int_build_cost_per_partner: 0.0,
        int_maint_pct: 0.0,
        api_fee_per_tx: 0.0,
        compliance_cost_annual: 0.0,
        error_penalty_rate: 0.0,
        error_rate_legacy: 0.0,
        error_rate_platform: 0.0,
        onboard_days_legacy: 0.0,
        onboard_days_platform: 0.0,
        daily_revenue_per_partner: 0.0,
    };

    /// Read one field.
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::NumPartners => self.num_partners,
            Field::AvgTxPerPartner => self.avg_tx_per_partner,
            Field::IntBuildCostPerPartner => self.int_build_cost_per_partner,
            Field::IntMaintPct => self.int_maint_pct,
            Field::ApiFeePerTx => self.api_fee_per_tx,
            Field::ComplianceCostAnnual => self.compliance_cost_annual,
            Field::ErrorPenaltyRate => self.error_penalty_rate,
            Field::ErrorRateLegacy => self.error_rate_legacy,
            Field::ErrorRatePlatform => self.error_rate_platform,
            Field::OnboardDaysLegacy => self.onboard_days_legacy,
            Field::OnboardDaysPlatform => self.onboard_days_platform,
            Field::DailyRevenuePerPartner => self.daily_revenue_per_partner,
        }
    }

    /// Copy of this record with one field replaced.
    ///
    /// Non-finite values are stored as 0.
    #[must_use]
    pub fn with(mut self, field: Field, value: f64) -> Self {
        let value = if value.is_finite() { value } else { 0.0 };
        let slot = match field {
            Field::NumPartners => &mut self.num_partners,
            Field::AvgTxPerPartner => &mut self.avg_tx_per_partner,
            Field::IntBuildCostPerPartner => &mut self.int_build_cost_per_partner,
            Field::IntMaintPct => &mut self.int_maint_pct,
            Field::ApiFeePerTx => &mut self.api_fee_per_tx,
            Field::ComplianceCostAnnual => &mut self.compliance_cost_annual,
            Field::ErrorPenaltyRate => &mut self.error_penalty_rate,
            Field::ErrorRateLegacy => &mut self.error_rate_legacy,
            Field::ErrorRatePlatform => &mut self.error_rate_platform,
            Field::OnboardDaysLegacy => &mut self.onboard_days_legacy,
            Field::OnboardDaysPlatform => &mut self.onboard_days_platform,
            Field::DailyRevenuePerPartner => &mut self.daily_revenue_per_partner,
        };
        *slot = value;
        self
    }

    /// Iterate `(field, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, f64)> + '_ {
        Field::ALL.iter().map(move |&field| (field, self.get(field)))
    }
}

/// Names one of the twelve [`ParameterSet`] fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// `num_partners`
    NumPartners,
    /// `avg_tx_per_partner`
    AvgTxPerPartner,
    /// `int_build_cost_per_partner`
    IntBuildCostPerPartner,
    /// `int_maint_pct`
    IntMaintPct,
    /// `api_fee_per_tx`
    ApiFeePerTx,
    /// `compliance_cost_annual`
    ComplianceCostAnnual,
    /// `error_penalty_rate`
    ErrorPenaltyRate,
    /// `error_rate_legacy`
    ErrorRateLegacy,
    /// `error_rate_platform`
    ErrorRatePlatform,
    /// `onboard_days_legacy`
    OnboardDaysLegacy,
    /// `onboard_days_platform`
    OnboardDaysPlatform,
    /// `daily_revenue_per_partner`
    DailyRevenuePerPartner,
}

impl Field {
    /// Every field, in the order the calculator form shows them.
    pub const ALL: [Field; 12] = [
        Field::NumPartners,
        Field::AvgTxPerPartner,
        Field::IntBuildCostPerPartner,
        Field::IntMaintPct,
        Field::ApiFeePerTx,
        Field::ComplianceCostAnnual,
        Field::ErrorPenaltyRate,
        Field::ErrorRateLegacy,
        Field::ErrorRatePlatform,
        Field::OnboardDaysLegacy,
        Field::OnboardDaysPlatform,
        Field::DailyRevenuePerPartner,
    ];

    /// Snake-case key, as used in config files and on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            Field::NumPartners => "num_partners",
            Field::AvgTxPerPartner => "avg_tx_per_partner",
            Field::IntBuildCostPerPartner => "int_build_cost_per_partner",
            Field::IntMaintPct => "int_maint_pct",
            Field::ApiFeePerTx => "api_fee_per_tx",
            Field::ComplianceCostAnnual => "compliance_cost_annual",
            Field::ErrorPenaltyRate => "error_penalty_rate",
            Field::ErrorRateLegacy => "error_rate_legacy",
            Field::ErrorRatePlatform => "error_rate_platform",
            Field::OnboardDaysLegacy => "onboard_days_legacy",
            Field::OnboardDaysPlatform => "onboard_days_platform",
            Field::DailyRevenuePerPartner => "daily_revenue_per_partner",
        }
    }

    /// camelCase key used by the web form inputs.
    pub fn camel_key(&self) -> &'static str {
        match self {
            Field::NumPartners => "numPartners",
            Field::AvgTxPerPartner => "avgTxPerPartner",
            Field::IntBuildCostPerPartner => "intBuildCostPerPartner",
            Field::IntMaintPct => "intMaintPct",
            Field::ApiFeePerTx => "apiFeePerTx",
            Field::ComplianceCostAnnual => "complianceCostAnnual",
            Field::ErrorPenaltyRate => "errorPenaltyRate",
            Field::ErrorRateLegacy => "errorRateLegacy",
            Field::ErrorRatePlatform => "errorRatePlatform",
            Field::OnboardDaysLegacy => "onboardDaysLegacy",
            Field::OnboardDaysPlatform => "onboardDaysPlatform",
            Field::DailyRevenuePerPartner => "dailyRevenuePerPartner",
        }
    }

    /// Human-readable form label.
    pub fn label(&self) -> &'static str {
        match self {
            Field::NumPartners => "Number of trading partners",
            Field::AvgTxPerPartner => "Transactions per partner / month",
            Field::IntBuildCostPerPartner => "Integration build cost per partner",
            Field::IntMaintPct => "Annual maintenance (% of build)",
            Field::ApiFeePerTx => "Legacy fee per transaction",
            Field::ComplianceCostAnnual => "Annual compliance cost",
            Field::ErrorPenaltyRate => "Cost per failed transaction",
            Field::ErrorRateLegacy => "Legacy error rate (%)",
            Field::ErrorRatePlatform => "Healthdex error rate (%)",
            Field::OnboardDaysLegacy => "Onboarding days, legacy",
            Field::OnboardDaysPlatform => "Onboarding days, Healthdex",
            Field::DailyRevenuePerPartner => "Daily revenue per partner",
        }
    }

    /// Display unit for the field's value.
    pub fn unit(&self) -> &'static str {
        match self {
            Field::NumPartners => "partners",
            Field::AvgTxPerPartner => "tx/month",
            Field::IntBuildCostPerPartner | Field::ComplianceCostAnnual => "$",
            Field::IntMaintPct | Field::ErrorRateLegacy | Field::ErrorRatePlatform => "%",
            Field::ApiFeePerTx => "$/tx",
            Field::ErrorPenaltyRate => "$/error",
            Field::OnboardDaysLegacy | Field::OnboardDaysPlatform => "days",
            Field::DailyRevenuePerPartner => "$/day",
        }
    }

    /// Input step hint for numeric form controls.
    pub fn step(&self) -> &'static str {
        match self {
            Field::ApiFeePerTx => "0.01",
            Field::ErrorRateLegacy | Field::ErrorRatePlatform => "0.1",
            _ => "1",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = RoiError;

    /// Accepts the snake_case key or the camelCase form key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Field::ALL
            .iter()
            .copied()
            .find(|field| field.key() == name || field.camel_key() == name)
            .ok_or_else(|| RoiError::UnknownField(name.to_string()))
    }
}

/// Coerce raw text from a numeric input into a finite `f64`.
///
/// Parses the longest numeric prefix after trimming whitespace, so `"12px"`
/// reads as 12 and `"1e3"` as 1000. Anything without a leading number, and
/// anything that overflows to infinity, becomes 0.
pub fn coerce_numeric(raw: &str) -> f64 {
    let text = raw.trim();
    let end = numeric_prefix_len(text.as_bytes());
    if end == 0 {
        return 0.0;
    }
    match text[..end].parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Length of the leading `[+-]digits[.digits][e[+-]digits]` run, or 0 if
/// there is no mantissa digit.
fn numeric_prefix_len(bytes: &[u8]) -> usize {
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut mantissa_digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        mantissa_digits += j - frac_start;
        if mantissa_digits > 0 {
            i = j;
        }
    }

    if mantissa_digits == 0 {
        return 0;
    }

    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    i
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn coerce_plain_numbers() {
        assert_eq!(coerce_numeric("42"), 42.0);
        assert_eq!(coerce_numeric("-3"), -3.0);
        assert_eq!(coerce_numeric("0.05"), 0.05);
        assert_eq!(coerce_numeric(".5"), 0.5);
        assert_eq!(coerce_numeric("5."), 5.0);
        assert_eq!(coerce_numeric("  17  "), 17.0);
    }

    #[test]
    fn coerce_exponent_and_suffix() {
        assert_eq!(coerce_numeric("1e3"), 1000.0);
        assert_eq!(coerce_numeric("2.5E-1"), 0.25);
        assert_eq!(coerce_numeric("12px"), 12.0);
        assert_eq!(coerce_numeric("7e"), 7.0);
        assert_eq!(coerce_numeric("3.2.1"), 3.2);
    }

    #[test]
    fn coerce_garbage_to_zero() {
        for raw in ["", "   ", "abc", "-", ".", "+.", "e5", "NaN", "inf", "Infinity", "$100"] {
            assert_eq!(coerce_numeric(raw), 0.0, "input {raw:?}");
        }
    }

    #[test]
    fn coerce_overflow_to_zero() {
        assert_eq!(coerce_numeric("1e999"), 0.0);
        assert_eq!(coerce_numeric("-1e999"), 0.0);
    }

    #[test]
    fn with_replaces_only_one_field() {
        let base = ParameterSet::default();
        let edited = base.with(Field::ErrorRateLegacy, 7.5);

        assert_eq!(edited.error_rate_legacy, 7.5);
        for field in Field::ALL {
            if field != Field::ErrorRateLegacy {
                assert_eq!(edited.get(field), base.get(field), "{field}");
            }
        }
    }

    #[test]
    fn with_rejects_non_finite() {
        let edited = ParameterSet::default().with(Field::NumPartners, f64::NAN);
        assert_eq!(edited.num_partners, 0.0);
        let edited = ParameterSet::default().with(Field::NumPartners, f64::INFINITY);
        assert_eq!(edited.num_partners, 0.0);
    }

    #[test]
    fn field_names_parse_both_cases() {
        for field in Field::ALL {
            assert_eq!(field.key().parse::<Field>().unwrap(), field);
            assert_eq!(field.camel_key().parse::<Field>().unwrap(), field);
        }
        assert!(matches!(
            "numWidgets".parse::<Field>(),
            Err(RoiError::UnknownField(name)) if name == "numWidgets"
        ));
    }

    #[test]
    fn get_and_iter_agree() {
        let params = ParameterSet::default();
        let pairs: Vec<_> = params.iter().collect();
        assert_eq!(pairs.len(), 12);
        assert_eq!(pairs[0], (Field::NumPartners, 5.0));
        assert_eq!(pairs[11], (Field::DailyRevenuePerPartner, 2000.0));
    }

    #[test]
    fn serializes_with_snake_case_keys() {
        let json = serde_json::to_value(ParameterSet::default()).unwrap();
        assert_eq!(json["num_partners"], 5.0);
        assert_eq!(json["api_fee_per_tx"], 0.05);
        assert_eq!(
            serde_json::to_value(Field::DailyRevenuePerPartner).unwrap(),
            "daily_revenue_per_partner"
        );
    }
}
