//! Error type for the calculator's name lookups and config loading.
//!
//! The engine itself never fails; these errors only come from turning
//! outside text (field names, scenario names, config files) into typed values.

use std::path::PathBuf;

/// Errors raised while resolving names or loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum RoiError {
    /// Field name is not one of the twelve parameter keys
    #[error("unknown parameter field: {0}")]
    UnknownField(String),

    /// Scenario name is not default, conservative, optimistic or custom
    #[error("unknown scenario: {0}")]
    UnknownScenario(String),

    /// Metric key is not one of the four result figures
    #[error("unknown metric: {0}")]
    UnknownMetric(String),

    /// Scenario has no preset values to start from
    #[error("{0} is not a preset; start from default, conservative or optimistic")]
    NotAPreset(String),

    /// A `field=value` assignment without the `=`
    #[error("expected <field>=<value>, got: {0}")]
    InvalidAssignment(String),

    /// Config file could not be read
    #[error("failed to read config {}: {message}", .path.display())]
    Config {
        /// Path of the config file
        path: PathBuf,
        /// Underlying IO error message
        message: String,
    },

    /// Config file is not valid TOML for [`crate::RoiConfig`]
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = RoiError::UnknownField("num_widgets".into());
        assert_eq!(err.to_string(), "unknown parameter field: num_widgets");

        let err = RoiError::InvalidAssignment("num_partners".into());
        assert_eq!(err.to_string(), "expected <field>=<value>, got: num_partners");
    }

    #[test]
    fn not_a_preset_names_the_choices() {
        let msg = RoiError::NotAPreset("custom".into()).to_string();
        assert!(msg.starts_with("custom is not a preset"));
        assert!(msg.contains("optimistic"));
    }

    #[test]
    fn config_error_shows_path() {
        let err = RoiError::Config {
            path: PathBuf::from("/tmp/missing.toml"),
            message: "permission denied".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/missing.toml"));
        assert!(msg.contains("permission denied"));
    }
}
