//! Calculator state and its reducer.
//!
//! [`CalculatorState`] is the whole session: current parameters, which
//! preset they came from, the last computed results, and which metric panel
//! is open. Every user event becomes an [`Action`]; [`CalculatorState::apply`]
//! consumes the old record and returns the next one.
//!
//! Only [`Action::Calculate`] touches `results` and the `breakdown` behind the
//! explanation panels. Picking a preset or editing a field leaves both on
//! screen until the user recalculates.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::engine::{CostBreakdown, ResultSet, compute_breakdown};
use crate::metrics::{MetricExplanation, MetricKey, explain};
use crate::params::{Field, ParameterSet, coerce_numeric};
use crate::pricing::PlatformPricing;
use crate::scenario::Scenario;

/// A user event on the calculator widget.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum Action {
    /// Preset button clicked
    SelectScenario(Scenario),
    /// Numeric input changed
    EditField {
        /// Which input
        field: Field,
        /// Raw text from the input, coerced to a number on apply
        raw: String,
    },
    /// Calculate button clicked
    Calculate,
    /// Metric card clicked
    ToggleMetricDetail(MetricKey),
}

/// Complete calculator session state.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Parameters currently in the form
    pub params: ParameterSet,
    /// Preset the parameters came from, or custom after any edit
    pub scenario: Scenario,
    /// Results of the last calculation (all zero before the first)
    pub results: ResultSet,
    /// Intermediates of the last calculation, replaced together with `results`
    pub breakdown: CostBreakdown,
    /// Metric whose explanation panel is open
    pub selected_metric: Option<MetricKey>,
    /// Pricing the engine runs with
    pub pricing: PlatformPricing,
}

impl CalculatorState {
    /// Fresh session under non-default pricing.
    pub fn with_pricing(pricing: PlatformPricing) -> Self {
        Self {
            pricing,
            ..Self::default()
        }
    }

    /// Apply one action and return the next state.
    #[must_use]
    pub fn apply(self, action: Action) -> Self {
        trace!(?action, "calculator action");
        match action {
            Action::SelectScenario(scenario) => match scenario.preset() {
                Some(preset) => {
                    debug!(%scenario, "scenario selected");
                    Self {
                        params: *preset,
                        scenario,
                        ..self
                    }
                }
                None => {
                    debug!(%scenario, "not a preset, ignoring selection");
                    self
                }
            },
            Action::EditField { field, raw } => {
                let value = coerce_numeric(&raw);
                debug!(%field, raw = %raw, value, "field edited");
                Self {
                    params: self.params.with(field, value),
                    scenario: Scenario::Custom,
                    ..self
                }
            }
            Action::Calculate => {
                let breakdown = compute_breakdown(&self.params, &self.pricing);
                let results = breakdown.results();
                debug!(
                    total_benefit = results.total_benefit,
                    scenario = %self.scenario,
                    "benefits calculated"
                );
                Self {
                    results,
                    breakdown,
                    ..self
                }
            }
            Action::ToggleMetricDetail(key) => {
                let selected_metric = if self.selected_metric == Some(key) {
                    None
                } else {
                    Some(key)
                };
                Self {
                    selected_metric,
                    ..self
                }
            }
        }
    }

    /// Switch to a preset. Selecting [`Scenario::Custom`] changes nothing.
    #[must_use]
    pub fn select_scenario(self, scenario: Scenario) -> Self {
        self.apply(Action::SelectScenario(scenario))
    }

    /// Replace one field from raw input text and mark the scenario custom.
    #[must_use]
    pub fn edit_field(self, field: Field, raw: impl Into<String>) -> Self {
        self.apply(Action::EditField {
            field,
            raw: raw.into(),
        })
    }

    /// Recompute the results from the current parameters.
    #[must_use]
    pub fn calculate(self) -> Self {
        self.apply(Action::Calculate)
    }

    /// Open the panel for `key`, or close it if it is already open.
    #[must_use]
    pub fn toggle_metric_detail(self, key: MetricKey) -> Self {
        self.apply(Action::ToggleMetricDetail(key))
    }

    /// [`select_scenario`](Self::select_scenario) by name; unknown names are ignored.
    #[must_use]
    pub fn select_scenario_named(self, name: &str) -> Self {
        match name.parse::<Scenario>() {
            Ok(scenario) => self.select_scenario(scenario),
            Err(e) => {
                debug!("{}", e);
                self
            }
        }
    }

    /// [`edit_field`](Self::edit_field) by field name; unknown names are ignored.
    #[must_use]
    pub fn edit_field_named(self, name: &str, raw: &str) -> Self {
        match name.parse::<Field>() {
            Ok(field) => self.edit_field(field, raw),
            Err(e) => {
                debug!("{}", e);
                self
            }
        }
    }

    /// Whether the result grid should be rendered.
    pub fn show_results(&self) -> bool {
        self.results.is_displayable()
    }

    /// Explanation panel for `key` against the last calculation.
    pub fn explanation(&self, key: MetricKey) -> MetricExplanation {
        explain(key, &self.breakdown)
    }

    /// Explanation for the open panel, if any.
    pub fn selected_explanation(&self) -> Option<MetricExplanation> {
        self.selected_metric.map(|key| self.explanation(key))
    }
}
