//! Explanation overlays for the four result metrics.
//!
//! Each result card on the page can be expanded into a panel that says what
//! the figure means, the formula behind it, and the line items that went
//! into it for the current parameters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engine::CostBreakdown;
use crate::error::RoiError;
use crate::format::{format_currency, format_days, format_percent};

/// Identifies one of the four result figures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MetricKey {
    /// `totalBenefit`
    TotalBenefit,
    /// `costSaving`
    CostSaving,
    /// `revenueSaving`
    RevenueSaving,
    /// `riskSaving`
    RiskSaving,
}

impl MetricKey {
    /// All metrics in card order.
    pub const ALL: [MetricKey; 4] = [
        MetricKey::TotalBenefit,
        MetricKey::CostSaving,
        MetricKey::RevenueSaving,
        MetricKey::RiskSaving,
    ];

    /// camelCase key.
    pub fn key(&self) -> &'static str {
        match self {
            MetricKey::TotalBenefit => "totalBenefit",
            MetricKey::CostSaving => "costSaving",
            MetricKey::RevenueSaving => "revenueSaving",
            MetricKey::RiskSaving => "riskSaving",
        }
    }

    /// Card title.
    pub fn title(&self) -> &'static str {
        match self {
            MetricKey::TotalBenefit => "Total Annual Benefit",
            MetricKey::CostSaving => "Integration Cost Savings",
            MetricKey::RevenueSaving => "Faster Time-to-Revenue",
            MetricKey::RiskSaving => "Error & Compliance Risk Reduction",
        }
    }

    fn summary(&self) -> &'static str {
        match self {
            MetricKey::TotalBenefit => {
                "Everything Healthdex returns in the first year: lower running costs, \
                 revenue from partners that go live sooner, and fewer costly errors."
            }
            MetricKey::CostSaving => {
                "Point-to-point integrations are built, maintained and billed per partner. \
                 Healthdex replaces them with one subscription and a small per-transaction fee."
            }
            MetricKey::RevenueSaving => {
                "Every day a partner waits to be onboarded is a day of revenue lost. \
                 Healthdex's pre-built connectors cut onboarding from weeks to days."
            }
            MetricKey::RiskSaving => {
                "Failed or malformed exchanges carry rework and penalty costs. \
                 Validation at the platform edge lowers the error rate on every transaction."
            }
        }
    }

    fn formula(&self) -> &'static str {
        match self {
            MetricKey::TotalBenefit => "cost savings + revenue gain + risk reduction",
            MetricKey::CostSaving => "legacy annual cost − Healthdex annual cost",
            MetricKey::RevenueSaving => "partners × daily revenue × onboarding days saved",
            MetricKey::RiskSaving => "legacy error cost − Healthdex error cost",
        }
    }
}

impl fmt::Display for MetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for MetricKey {
    type Err = RoiError;

    /// Accepts the camelCase key or its snake_case spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let normalized: String = name
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        MetricKey::ALL
            .iter()
            .copied()
            .find(|key| key.key().to_ascii_lowercase() == normalized)
            .ok_or_else(|| RoiError::UnknownMetric(name.to_string()))
    }
}

/// One labelled figure inside an explanation panel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricLine {
    /// What the figure is
    pub label: String,
    /// Figure, already formatted for display
    pub value: String,
    /// Raw value
    pub amount: f64,
}

impl MetricLine {
    fn currency(label: &str, amount: f64) -> Self {
        Self {
            label: label.to_string(),
            value: format_currency(amount),
            amount,
        }
    }

    fn days(label: &str, amount: f64) -> Self {
        Self {
            label: label.to_string(),
            value: format_days(amount),
            amount,
        }
    }

    fn count(label: &str, amount: f64) -> Self {
        Self {
            label: label.to_string(),
            value: format_currency(amount).replacen('$', "", 1),
            amount,
        }
    }
}

/// Content of an expanded metric panel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricExplanation {
    /// Metric being explained
    pub key: MetricKey,
    /// Panel title
    pub title: String,
    /// Plain-language description
    pub summary: String,
    /// Formula in words
    pub formula: String,
    /// Contributing figures for the current parameters
    pub lines: Vec<MetricLine>,
    /// The metric's own value
    pub amount: f64,
}

/// Build the explanation panel for `key` from a computed breakdown.
pub fn explain(key: MetricKey, breakdown: &CostBreakdown) -> MetricExplanation {
    let results = breakdown.results();
    let lines = match key {
        MetricKey::TotalBenefit => {
            let mut lines = vec![
                MetricLine::currency(MetricKey::CostSaving.title(), results.cost_saving),
                MetricLine::currency(MetricKey::RevenueSaving.title(), results.revenue_saving),
                MetricLine::currency(MetricKey::RiskSaving.title(), results.risk_saving),
            ];
            if let Some(ratio) = breakdown.roi_ratio() {
                lines.push(MetricLine {
                    label: "Cost savings per dollar of Healthdex spend".into(),
                    value: format_percent(ratio * 100.0),
                    amount: ratio,
                });
            }
            if let Some(months) = breakdown.payback_months() {
                lines.push(MetricLine {
                    label: "Payback period".into(),
                    value: format!("{:.1} months", months),
                    amount: months,
                });
            }
            lines
        }
        MetricKey::CostSaving => {
            let legacy = &breakdown.legacy;
            let platform = &breakdown.platform;
            vec![
                MetricLine::currency("Legacy integration build", legacy.build),
                MetricLine::currency("Legacy maintenance", legacy.maint),
                MetricLine::currency("Legacy API fees", legacy.api_fees),
                MetricLine::currency("Legacy compliance", legacy.compliance),
                MetricLine::currency("Legacy error costs", legacy.errors),
                MetricLine::currency("Legacy total", legacy.total()),
                MetricLine::currency("Healthdex subscription", platform.subscription),
                MetricLine::currency("Healthdex transaction fees", platform.transactions),
                MetricLine::currency("Healthdex compliance", platform.compliance),
                MetricLine::currency("Healthdex error costs", platform.errors),
                MetricLine::currency("Healthdex total", platform.total()),
            ]
        }
        MetricKey::RevenueSaving => vec![
            MetricLine::count("Trading partners", breakdown.partners),
            MetricLine::currency(
                "Daily revenue per partner",
                breakdown.daily_revenue_per_partner,
            ),
            MetricLine::days("Onboarding days saved", breakdown.onboarding_days_saved),
        ],
        MetricKey::RiskSaving => vec![
            MetricLine::count("Transactions per year", breakdown.annual_transactions),
            MetricLine::currency("Legacy error costs", breakdown.legacy.errors),
            MetricLine::currency("Healthdex error costs", breakdown.platform.errors),
        ],
    };

    MetricExplanation {
        key,
        title: key.title().to_string(),
        summary: key.summary().to_string(),
        formula: key.formula().to_string(),
        lines,
        amount: results.get(key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::compute_breakdown;
    use crate::params::{Field, ParameterSet};
    use crate::pricing::PlatformPricing;

    fn default_breakdown() -> CostBreakdown {
        compute_breakdown(&ParameterSet::default(), &PlatformPricing::default())
    }

    #[test]
    fn keys_round_trip_through_from_str() {
        for key in MetricKey::ALL {
            assert_eq!(key.key().parse::<MetricKey>().unwrap(), key);
        }
        assert_eq!("cost_saving".parse::<MetricKey>().unwrap(), MetricKey::CostSaving);
        assert_eq!("risk-saving".parse::<MetricKey>().unwrap(), MetricKey::RiskSaving);
        assert!("profit".parse::<MetricKey>().is_err());
    }

    #[test]
    fn cost_saving_lists_both_sides() {
        let explanation = explain(MetricKey::CostSaving, &default_breakdown());
        assert_eq!(explanation.lines.len(), 11);
        assert_eq!(explanation.amount, 129_900.0);

        let legacy_total = explanation
            .lines
            .iter()
            .find(|line| line.label == "Legacy total")
            .expect("legacy total line");
        assert_eq!(legacy_total.value, "$170,000");
    }

    #[test]
    fn revenue_saving_shows_inputs() {
        let explanation = explain(MetricKey::RevenueSaving, &default_breakdown());
        let values: Vec<&str> = explanation.lines.iter().map(|l| l.value.as_str()).collect();
        assert_eq!(values, vec!["5", "$2,000", "25 days"]);
        assert_eq!(explanation.amount, 250_000.0);
    }

    #[test]
    fn risk_saving_shows_error_costs() {
        let explanation = explain(MetricKey::RiskSaving, &default_breakdown());
        assert_eq!(explanation.lines[0].value, "60,000");
        assert_eq!(explanation.lines[1].amount, 27_000.0);
        assert_eq!(explanation.lines[2].amount, 4_500.0);
    }

    #[test]
    fn total_benefit_includes_payback_when_positive() {
        let explanation = explain(MetricKey::TotalBenefit, &default_breakdown());
        assert!(explanation.lines.iter().any(|l| l.label == "Payback period"));

        let losing = compute_breakdown(
            &ParameterSet::default()
                .with(Field::OnboardDaysPlatform, 90.0)
                .with(Field::DailyRevenuePerPartner, 10_000.0),
            &PlatformPricing::default(),
        );
        let explanation = explain(MetricKey::TotalBenefit, &losing);
        assert!(explanation.amount < 0.0);
        assert!(!explanation.lines.iter().any(|l| l.label == "Payback period"));
    }

    #[test]
    fn every_metric_has_copy() {
        for key in MetricKey::ALL {
            let explanation = explain(key, &default_breakdown());
            assert!(!explanation.summary.is_empty());
            assert!(!explanation.formula.is_empty());
            assert_eq!(explanation.title, key.title());
        }
    }
}
