//! Benefit computation.
//!
//! Pure functions from a [`ParameterSet`] to a [`ResultSet`]. Nothing here
//! rounds, clamps or fails: a negative figure is a net cost and is passed
//! through as-is for the caller to interpret.
//!
//! The annual cost of the legacy integration stack is
//!
//! ```text
//! build      = partners × build_cost
//! maint      = build × maint_pct / 100
//! api_fees   = partners × tx/month × 12 × fee_per_tx
//! compliance = compliance_annual
//! errors     = partners × tx/month × 12 × legacy_error_pct / 100 × penalty
//! ```
//!
//! and on the platform
//!
//! ```text
//! subscription = base + partners × per_partner
//! transactions = partners × tx/month × 12 × per_tx
//! compliance   = compliance_annual × compliance_factor
//! errors       = partners × tx/month × 12 × platform_error_pct / 100 × penalty
//! ```

use serde::{Deserialize, Serialize};

use crate::metrics::MetricKey;
use crate::params::ParameterSet;
use crate::pricing::PlatformPricing;

const MONTHS_PER_YEAR: f64 = 12.0;

/// The four figures shown in the calculator's result grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSet {
    /// Sum of the three savings
    pub total_benefit: f64,
    /// Legacy annual cost minus platform annual cost
    pub cost_saving: f64,
    /// Revenue gained from faster partner onboarding
    pub revenue_saving: f64,
    /// Reduction in error penalties
    pub risk_saving: f64,
}

impl ResultSet {
    /// Value of one metric.
    pub fn get(&self, key: MetricKey) -> f64 {
        match key {
            MetricKey::TotalBenefit => self.total_benefit,
            MetricKey::CostSaving => self.cost_saving,
            MetricKey::RevenueSaving => self.revenue_saving,
            MetricKey::RiskSaving => self.risk_saving,
        }
    }

    /// Whether the result grid and metric panels should be shown.
    ///
    /// Only a strictly positive total benefit is displayed; zero and
    /// negative totals hide the grid even though the component figures
    /// are populated.
    pub fn is_displayable(&self) -> bool {
        self.total_benefit > 0.0
    }
}

/// Annual cost line items on the legacy integration stack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LegacyCosts {
    /// Point-to-point integration build
    pub build: f64,
    /// Yearly maintenance on those integrations
    pub maint: f64,
    /// Per-transaction API fees
    pub api_fees: f64,
    /// Compliance overhead
    pub compliance: f64,
    /// Error penalties
    pub errors: f64,
}

impl LegacyCosts {
    /// Sum of all legacy line items.
    pub fn total(&self) -> f64 {
        self.build + self.maint + self.api_fees + self.compliance + self.errors
    }
}

/// Annual cost line items on the Healthdex platform.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlatformCosts {
    /// Base plus per-partner subscription
    pub subscription: f64,
    /// Per-transaction platform fees
    pub transactions: f64,
    /// Remaining compliance overhead
    pub compliance: f64,
    /// Error penalties
    pub errors: f64,
}

impl PlatformCosts {
    /// Sum of all platform line items.
    pub fn total(&self) -> f64 {
        self.subscription + self.transactions + self.compliance + self.errors
    }
}

/// Every intermediate of the benefit computation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Partners × monthly transactions × 12
    pub annual_transactions: f64,
    /// Legacy onboarding days minus platform onboarding days (may be negative)
    pub onboarding_days_saved: f64,
    /// Partner count the revenue figure was computed for
    pub partners: f64,
    /// Daily revenue per partner
    pub daily_revenue_per_partner: f64,
    /// Legacy cost items
    pub legacy: LegacyCosts,
    /// Platform cost items
    pub platform: PlatformCosts,
}

impl CostBreakdown {
    /// Revenue gained by onboarding partners sooner.
    pub fn revenue_saving(&self) -> f64 {
        self.partners * self.daily_revenue_per_partner * self.onboarding_days_saved
    }

    /// Legacy total minus platform total.
    pub fn cost_saving(&self) -> f64 {
        self.legacy.total() - self.platform.total()
    }

    /// Legacy error cost minus platform error cost.
    pub fn risk_saving(&self) -> f64 {
        self.legacy.errors - self.platform.errors
    }

    /// The four headline figures.
    pub fn results(&self) -> ResultSet {
        let cost_saving = self.cost_saving();
        let revenue_saving = self.revenue_saving();
        let risk_saving = self.risk_saving();
        ResultSet {
            total_benefit: revenue_saving + cost_saving + risk_saving,
            cost_saving,
            revenue_saving,
            risk_saving,
        }
    }

    /// Cost saving per unit of platform spend, `None` when the platform costs nothing.
    pub fn roi_ratio(&self) -> Option<f64> {
        let spend = self.platform.total();
        (spend != 0.0).then(|| self.cost_saving() / spend)
    }

    /// Months of total benefit needed to cover one year of platform spend.
    ///
    /// `None` when there is no positive benefit to pay it back with.
    pub fn payback_months(&self) -> Option<f64> {
        let total = self.results().total_benefit;
        (total > 0.0).then(|| self.platform.total() / (total / MONTHS_PER_YEAR))
    }
}

/// Compute every intermediate for `params` under `pricing`.
pub fn compute_breakdown(params: &ParameterSet, pricing: &PlatformPricing) -> CostBreakdown {
    let partners = params.num_partners;
    let annual_transactions = partners * params.avg_tx_per_partner * MONTHS_PER_YEAR;

    let build = partners * params.int_build_cost_per_partner;
    let legacy = LegacyCosts {
        build,
        maint: build * (params.int_maint_pct / 100.0),
        api_fees: annual_transactions * params.api_fee_per_tx,
        compliance: params.compliance_cost_annual,
        errors: annual_transactions * (params.error_rate_legacy / 100.0) * params.error_penalty_rate,
    };

    let platform = PlatformCosts {
        subscription: pricing.base_subscription + partners * pricing.per_partner_subscription,
        transactions: annual_transactions * pricing.per_transaction_fee,
        compliance: params.compliance_cost_annual * pricing.compliance_factor,
        errors: annual_transactions
            * (params.error_rate_platform / 100.0)
            * params.error_penalty_rate,
    };

    CostBreakdown {
        annual_transactions,
        onboarding_days_saved: params.onboard_days_legacy - params.onboard_days_platform,
        partners,
        daily_revenue_per_partner: params.daily_revenue_per_partner,
        legacy,
        platform,
    }
}

/// Compute the four benefit figures under custom pricing.
pub fn compute_with_pricing(params: &ParameterSet, pricing: &PlatformPricing) -> ResultSet {
    compute_breakdown(params, pricing).results()
}

/// Compute the four benefit figures under published pricing.
///
/// # Example
///
/// ```rust
/// use healthdex_roi::{compute_benefits, ParameterSet};
///
/// let results = compute_benefits(&ParameterSet::default());
/// assert_eq!(results.cost_saving, 129_900.0);
/// assert_eq!(results.revenue_saving, 250_000.0);
/// assert_eq!(results.risk_saving, 22_500.0);
/// ```
pub fn compute_benefits(params: &ParameterSet) -> ResultSet {
    compute_with_pricing(params, &PlatformPricing::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Field;
    use crate::scenario::{CONSERVATIVE_PRESET, DEFAULT_PRESET, OPTIMISTIC_PRESET};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-6 * b.abs().max(1.0)
    }

    #[test]
    fn zero_params_give_zero_results() {
        // Subscription base is the only pricing term that survives zero
        // parameters, so it has to be zero as well for an all-zero result.
        let free = PlatformPricing {
            base_subscription: 0.0,
            ..PlatformPricing::default()
        };
        let results = compute_with_pricing(&ParameterSet::ZERO, &free);
        assert_eq!(results, ResultSet::default());
    }

    #[test]
    fn zero_params_with_published_pricing_cost_the_base_fee() {
        let results = compute_benefits(&ParameterSet::ZERO);
        assert_eq!(results.revenue_saving, 0.0);
        assert_eq!(results.risk_saving, 0.0);
        assert_eq!(results.cost_saving, -10_000.0);
        assert_eq!(results.total_benefit, -10_000.0);
        assert!(!results.is_displayable());
    }

    #[test]
    fn default_preset_worked_example() {
        let breakdown = compute_breakdown(&DEFAULT_PRESET, &PlatformPricing::default());

        assert!(close(breakdown.legacy.build, 75_000.0));
        assert!(close(breakdown.legacy.maint, 15_000.0));
        assert!(close(breakdown.legacy.api_fees, 3_000.0));
        assert!(close(breakdown.legacy.compliance, 50_000.0));
        assert!(close(breakdown.legacy.errors, 27_000.0));
        assert!(close(breakdown.legacy.total(), 170_000.0));

        assert!(close(breakdown.platform.subscription, 15_000.0));
        assert!(close(breakdown.platform.transactions, 600.0));
        assert!(close(breakdown.platform.compliance, 20_000.0));
        assert!(close(breakdown.platform.errors, 4_500.0));
        assert!(close(breakdown.platform.total(), 40_100.0));

        assert_eq!(breakdown.onboarding_days_saved, 25.0);

        let results = breakdown.results();
        assert!(close(results.cost_saving, 129_900.0));
        assert!(close(results.revenue_saving, 250_000.0));
        assert!(close(results.risk_saving, 22_500.0));
        assert!(close(results.total_benefit, 402_400.0));
        assert!(results.is_displayable());
    }

    #[test]
    fn cost_saving_matches_independent_totals() {
        for params in [DEFAULT_PRESET, CONSERVATIVE_PRESET, OPTIMISTIC_PRESET] {
            let p = params;
            let tx = p.num_partners * p.avg_tx_per_partner * 12.0;
            let build = p.num_partners * p.int_build_cost_per_partner;
            let legacy = build
                + build * (p.int_maint_pct / 100.0)
                + tx * p.api_fee_per_tx
                + p.compliance_cost_annual
                + tx * (p.error_rate_legacy / 100.0) * p.error_penalty_rate;
            let platform = (10_000.0 + p.num_partners * 1_000.0)
                + tx * 0.01
                + p.compliance_cost_annual * 0.4
                + tx * (p.error_rate_platform / 100.0) * p.error_penalty_rate;

            let results = compute_benefits(&params);
            assert_eq!(results.cost_saving, legacy - platform);
        }
    }

    #[test]
    fn total_is_sum_of_components() {
        let params = OPTIMISTIC_PRESET
            .with(Field::OnboardDaysPlatform, 45.0)
            .with(Field::ErrorRatePlatform, 9.0);
        let r = compute_benefits(&params);
        assert_eq!(r.total_benefit, r.revenue_saving + r.cost_saving + r.risk_saving);
    }

    #[test]
    fn slower_platform_onboarding_is_not_clamped() {
        let params = DEFAULT_PRESET.with(Field::OnboardDaysPlatform, 40.0);
        let breakdown = compute_breakdown(&params, &PlatformPricing::default());
        assert_eq!(breakdown.onboarding_days_saved, -10.0);
        assert_eq!(breakdown.results().revenue_saving, 5.0 * 2000.0 * -10.0);
    }

    #[test]
    fn worse_platform_error_rate_gives_negative_risk_saving() {
        let params = DEFAULT_PRESET.with(Field::ErrorRatePlatform, 6.0);
        let results = compute_benefits(&params);
        assert!(results.risk_saving < 0.0);
    }

    #[test]
    fn custom_pricing_changes_platform_side_only() {
        let pricing = PlatformPricing {
            base_subscription: 20_000.0,
            ..PlatformPricing::default()
        };
        let published = compute_breakdown(&DEFAULT_PRESET, &PlatformPricing::default());
        let custom = compute_breakdown(&DEFAULT_PRESET, &pricing);

        assert_eq!(custom.legacy, published.legacy);
        assert!(close(
            custom.platform.total() - published.platform.total(),
            10_000.0
        ));
        assert!(close(custom.results().cost_saving, 119_900.0));
    }

    #[test]
    fn roi_ratio_and_payback() {
        let breakdown = compute_breakdown(&DEFAULT_PRESET, &PlatformPricing::default());
        let ratio = breakdown.roi_ratio().expect("platform spend is non-zero");
        assert!(close(ratio, 129_900.0 / 40_100.0));

        let months = breakdown.payback_months().expect("benefit is positive");
        assert!(close(months, 40_100.0 / (402_400.0 / 12.0)));

        let losing = compute_breakdown(&ParameterSet::ZERO, &PlatformPricing::default());
        assert!(losing.payback_months().is_none());

        let free = PlatformPricing {
            base_subscription: 0.0,
            ..PlatformPricing::default()
        };
        assert!(compute_breakdown(&ParameterSet::ZERO, &free).roi_ratio().is_none());
    }

    #[test]
    fn result_set_serializes_camel_case() {
        let json = serde_json::to_value(compute_benefits(&DEFAULT_PRESET)).unwrap();
        assert!(json.get("totalBenefit").is_some());
        assert!(json.get("costSaving").is_some());
        assert!(json.get("revenueSaving").is_some());
        assert!(json.get("riskSaving").is_some());
    }

    #[test]
    fn get_reads_each_metric() {
        let r = ResultSet {
            total_benefit: 4.0,
            cost_saving: 1.0,
            revenue_saving: 2.0,
            risk_saving: 1.0,
        };
        assert_eq!(r.get(MetricKey::TotalBenefit), 4.0);
        assert_eq!(r.get(MetricKey::CostSaving), 1.0);
        assert_eq!(r.get(MetricKey::RevenueSaving), 2.0);
        assert_eq!(r.get(MetricKey::RiskSaving), 1.0);
    }
}
