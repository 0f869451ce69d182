//! Text and JSON output for the CLI.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use serde::Serialize;

use healthdex_roi::{
    CalculatorState, CostBreakdown, Field, MetricExplanation, MetricKey, ParameterSet, ResultSet,
    Scenario, format_currency,
};

const LABEL_WIDTH: usize = 40;
const VALUE_WIDTH: usize = 16;

#[derive(Serialize)]
struct CalcReport<'a> {
    scenario: Scenario,
    params: &'a ParameterSet,
    results: &'a ResultSet,
    show_results: bool,
    breakdown: CostBreakdown,
    #[serde(skip_serializing_if = "Option::is_none")]
    explanation: Option<MetricExplanation>,
}

#[derive(Serialize)]
struct PresetEntry {
    scenario: Scenario,
    name: &'static str,
    params: ParameterSet,
}

/// Numeric value with its unit, e.g. `$15,000` or `3 %`.
fn field_value(field: Field, value: f64) -> String {
    match field.unit() {
        "$" => format_currency(value),
        unit => format!("{} {}", value, unit),
    }
}

fn push_row(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(
        out,
        "  {:<lw$}{:>vw$}",
        label,
        value,
        lw = LABEL_WIDTH,
        vw = VALUE_WIDTH
    );
}

fn push_params(out: &mut String, params: &ParameterSet) {
    for (field, value) in params.iter() {
        push_row(out, field.label(), &field_value(field, value));
    }
}

/// Human-readable calculation summary.
///
/// Mirrors the page: when the total benefit is not positive the result grid
/// and any open explanation panel are replaced by a notice.
pub fn calc_table(state: &CalculatorState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Healthdex ROI estimate ({})", state.scenario);
    let _ = writeln!(out);
    let _ = writeln!(out, "Parameters");
    push_params(&mut out, &state.params);
    let _ = writeln!(out);

    if state.show_results() {
        let _ = writeln!(out, "Annual benefit");
        for key in MetricKey::ALL {
            push_row(&mut out, key.title(), &format_currency(state.results.get(key)));
        }
        if let Some(explanation) = state.selected_explanation() {
            let _ = writeln!(out);
            out.push_str(&explanation_text(&explanation));
        }
    } else {
        let _ = writeln!(
            out,
            "No net benefit for these parameters (total {}).",
            format_currency(state.results.total_benefit)
        );
    }

    out.trim_end().to_string()
}

/// JSON calculation report.
pub fn calc_json(state: &CalculatorState) -> Result<String> {
    let report = CalcReport {
        scenario: state.scenario,
        params: &state.params,
        results: &state.results,
        show_results: state.show_results(),
        breakdown: state.breakdown,
        explanation: state.selected_explanation(),
    };
    serde_json::to_string_pretty(&report).context("serializing calculation report")
}

/// Explanation panel as plain text.
pub fn explanation_text(explanation: &MetricExplanation) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}: {}",
        explanation.title,
        format_currency(explanation.amount)
    );
    let _ = writeln!(out, "  {}", explanation.summary);
    let _ = writeln!(out, "  = {}", explanation.formula);
    for line in &explanation.lines {
        push_row(&mut out, &line.label, &line.value);
    }
    out.trim_end().to_string()
}

fn preset_entries() -> Vec<PresetEntry> {
    Scenario::PRESETS
        .iter()
        .filter_map(|scenario| {
            scenario.preset().map(|params| PresetEntry {
                scenario: *scenario,
                name: scenario.display_name(),
                params: *params,
            })
        })
        .collect()
}

/// Preset values as a table, one block per preset.
pub fn presets_table() -> String {
    let mut out = String::new();
    for entry in preset_entries() {
        let _ = writeln!(out, "{} ({})", entry.name, entry.scenario);
        push_params(&mut out, &entry.params);
        let _ = writeln!(out);
    }
    out.trim_end().to_string()
}

/// Preset values as JSON.
pub fn presets_json() -> Result<String> {
    serde_json::to_string_pretty(&preset_entries()).context("serializing presets")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lists_results_for_default() {
        let state = CalculatorState::default().calculate();
        let table = calc_table(&state);
        assert!(table.contains("Healthdex ROI estimate (default)"));
        assert!(table.contains("$402,400"));
        assert!(table.contains("$129,900"));
        assert!(!table.contains("No net benefit"));
    }

    #[test]
    fn table_hides_grid_for_losses() {
        let state = CalculatorState::default()
            .edit_field(Field::OnboardDaysPlatform, "90")
            .calculate();
        let table = calc_table(&state);
        assert!(table.contains("No net benefit"));
        assert!(!table.contains("Annual benefit"));
    }

    #[test]
    fn table_shows_open_panel_with_grid() {
        let state = CalculatorState::default()
            .calculate()
            .toggle_metric_detail(MetricKey::CostSaving);
        let table = calc_table(&state);
        assert!(table.contains("Annual benefit"));
        assert!(table.contains("Legacy total"));
        assert!(table.contains("$170,000"));
    }

    #[test]
    fn table_hides_open_panel_for_losses() {
        let state = CalculatorState::default()
            .edit_field(Field::OnboardDaysPlatform, "90")
            .calculate()
            .toggle_metric_detail(MetricKey::CostSaving);
        assert!(state.selected_explanation().is_some());

        let table = calc_table(&state);
        assert!(table.contains("No net benefit"));
        assert!(!table.contains("Legacy total"));
        assert!(!table.contains("Healthdex total"));
        assert!(!table.contains(MetricKey::CostSaving.title()));
    }

    #[test]
    fn json_breakdown_comes_from_last_calculation() {
        let state = CalculatorState::default()
            .calculate()
            .edit_field(Field::NumPartners, "50");
        let json: serde_json::Value = serde_json::from_str(&calc_json(&state).unwrap()).unwrap();
        assert_eq!(json["params"]["num_partners"], 50.0);
        assert_eq!(json["breakdown"]["partners"], 5.0);
        assert_eq!(json["results"]["costSaving"], 129_900.0);
    }

    #[test]
    fn json_report_has_results_and_breakdown() {
        let state = CalculatorState::default()
            .calculate()
            .toggle_metric_detail(MetricKey::RiskSaving);
        let json: serde_json::Value = serde_json::from_str(&calc_json(&state).unwrap()).unwrap();
        assert_eq!(json["scenario"], "default");
        assert_eq!(json["results"]["totalBenefit"], 402_400.0);
        assert_eq!(json["breakdown"]["legacy"]["errors"], 27_000.0);
        assert_eq!(json["explanation"]["key"], "riskSaving");
        assert_eq!(json["show_results"], true);
    }

    #[test]
    fn presets_cover_three_scenarios() {
        let json: serde_json::Value = serde_json::from_str(&presets_json().unwrap()).unwrap();
        let entries = json.as_array().expect("array");
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[1]["scenario"], "conservative");
        assert_eq!(entries[2]["params"]["num_partners"], 10.0);
    }
}
