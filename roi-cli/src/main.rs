//! # healthdex-roi
//!
//! Terminal front-end for the Healthdex ROI calculator. Drives the same
//! calculator state the landing page widget uses, so a preset plus a few
//! `--set` edits gives exactly the figures a visitor would see.
//!
//! ## Usage
//!
//! ```bash
//! healthdex-roi calc                                   # default preset
//! healthdex-roi calc --scenario optimistic --json      # machine-readable
//! healthdex-roi calc --set num_partners=12 --explain costSaving
//! healthdex-roi presets
//! healthdex-roi explain riskSaving --scenario conservative
//! ```
//!
//! Developed by The Healthdex Team (c)2025

mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use healthdex_roi::{Action, CalculatorState, Field, MetricKey, RoiConfig, RoiError, Scenario};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "healthdex-roi")]
#[command(about = "Estimate the annual benefit of moving partner integrations to Healthdex")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Pricing config (TOML). Defaults to .healthdex/config.toml when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Calculate benefits for a preset, optionally with edited fields
    Calc {
        /// Preset to start from (default, conservative, optimistic)
        #[arg(long, short, default_value = "default", value_parser = parse_preset)]
        scenario: Scenario,

        /// Override a field, e.g. --set num_partners=12 (repeatable)
        #[arg(long = "set", value_name = "FIELD=VALUE", value_parser = parse_assignment)]
        sets: Vec<(Field, String)>,

        /// Open the explanation panel for a metric
        #[arg(long, value_name = "METRIC")]
        explain: Option<MetricKey>,

        /// Print a JSON report instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List the preset parameter values
    Presets {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Explain how one metric is derived
    Explain {
        /// Metric key (totalBenefit, costSaving, revenueSaving, riskSaving)
        metric: MetricKey,

        /// Preset to explain against (default, conservative, optimistic)
        #[arg(long, short, default_value = "default", value_parser = parse_preset)]
        scenario: Scenario,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Scenario names that carry preset values; `custom` only arises from `--set`.
fn parse_preset(raw: &str) -> Result<Scenario, RoiError> {
    let scenario: Scenario = raw.parse()?;
    match scenario.preset() {
        Some(_) => Ok(scenario),
        None => Err(RoiError::NotAPreset(scenario.to_string())),
    }
}

fn parse_assignment(raw: &str) -> Result<(Field, String), RoiError> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| RoiError::InvalidAssignment(raw.to_string()))?;
    Ok((name.parse()?, value.to_string()))
}

// ============================================================================
// Commands
// ============================================================================

fn load_config(path: Option<&PathBuf>) -> Result<RoiConfig> {
    match path {
        Some(path) => RoiConfig::read(path)
            .with_context(|| format!("loading pricing config {}", path.display())),
        None => {
            let cwd = std::env::current_dir().context("resolving current directory")?;
            Ok(RoiConfig::load(&cwd))
        }
    }
}

fn session(config: &RoiConfig, scenario: Scenario) -> CalculatorState {
    CalculatorState::with_pricing(config.pricing).apply(Action::SelectScenario(scenario))
}

fn run_calc(
    config: &RoiConfig,
    scenario: Scenario,
    sets: Vec<(Field, String)>,
    explain: Option<MetricKey>,
    json: bool,
) -> Result<()> {
    let mut state = session(config, scenario);
    for (field, raw) in sets {
        state = state.apply(Action::EditField { field, raw });
    }
    state = state.apply(Action::Calculate);
    if let Some(key) = explain {
        state = state.apply(Action::ToggleMetricDetail(key));
    }

    info!(
        scenario = %state.scenario,
        total_benefit = state.results.total_benefit,
        "calculation finished"
    );

    let output = if json {
        render::calc_json(&state)?
    } else {
        render::calc_table(&state)
    };
    println!("{}", output);
    Ok(())
}

fn run_presets(json: bool) -> Result<()> {
    let output = if json {
        render::presets_json()?
    } else {
        render::presets_table()
    };
    println!("{}", output);
    Ok(())
}

fn run_explain(config: &RoiConfig, metric: MetricKey, scenario: Scenario, json: bool) -> Result<()> {
    let state = session(config, scenario).apply(Action::Calculate);
    let explanation = state.explanation(metric);
    let output = if json {
        serde_json::to_string_pretty(&explanation).context("serializing explanation")?
    } else {
        render::explanation_text(&explanation)
    };
    println!("{}", output);
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_ref())?;
    debug!(?config, "pricing config resolved");

    match cli.command {
        Commands::Calc {
            scenario,
            sets,
            explain,
            json,
        } => run_calc(&config, scenario, sets, explain, json),
        Commands::Presets { json } => run_presets(json),
        Commands::Explain {
            metric,
            scenario,
            json,
        } => run_explain(&config, metric, scenario, json),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr so JSON on stdout stays clean.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.parse().unwrap_or_default()),
        )
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[healthdex-roi] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_assignments() {
        let (field, raw) = parse_assignment("num_partners=12").unwrap();
        assert_eq!(field, Field::NumPartners);
        assert_eq!(raw, "12");

        let (field, raw) = parse_assignment("apiFeePerTx=").unwrap();
        assert_eq!(field, Field::ApiFeePerTx);
        assert_eq!(raw, "");
    }

    #[test]
    fn rejects_bad_assignments() {
        assert!(matches!(
            parse_assignment("num_partners"),
            Err(RoiError::InvalidAssignment(_))
        ));
        assert!(matches!(
            parse_assignment("num_widgets=3"),
            Err(RoiError::UnknownField(_))
        ));
    }

    #[test]
    fn scenario_flag_accepts_presets_only() {
        assert_eq!(parse_preset("Optimistic").unwrap(), Scenario::Optimistic);
        assert!(matches!(parse_preset("custom"), Err(RoiError::NotAPreset(_))));
        assert!(matches!(
            parse_preset("aggressive"),
            Err(RoiError::UnknownScenario(_))
        ));
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn sets_make_scenario_custom() {
        let config = RoiConfig::default();
        let state = session(&config, Scenario::Optimistic).apply(Action::EditField {
            field: Field::NumPartners,
            raw: "4".into(),
        });
        assert_eq!(state.scenario, Scenario::Custom);
        assert_eq!(state.params.avg_tx_per_partner, 2000.0);
    }
}
