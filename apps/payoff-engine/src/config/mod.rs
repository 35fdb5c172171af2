//! Configuration module for the payoff engine.
//!
//! Provides configuration loading, validation, and environment variable
//! interpolation for the instantiator, payoff calculator, risk analyzer and
//! logging.
//!
//! # Usage
//!
//! ```rust,ignore
//! use payoff_engine::config::{EngineConfig, load_config};
//!
//! // Load from default path (config.yaml)
//! let config = load_config(None)?;
//!
//! // Load from custom path
//! let config = load_config(Some("custom/config.yaml"))?;
//!
//! println!("fallback premium: {}", config.instantiation.fallback_premium);
//! ```

mod instantiation;
mod observability;
mod payoff;
mod risk;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use instantiation::InstantiationConfig;
pub use observability::{LoggingConfig, ObservabilityConfig};
pub use payoff::PayoffConfig;
pub use risk::RiskConfig;

/// Largest accepted step count; keeps cent-rounded sample prices distinct.
pub const MAX_PAYOFF_STEPS: u32 = 100;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Strategy instantiation configuration.
    #[serde(default)]
    pub instantiation: InstantiationConfig,
    /// Payoff sampling configuration.
    #[serde(default)]
    pub payoff: PayoffConfig,
    /// Risk analysis configuration.
    #[serde(default)]
    pub risk: RiskConfig,
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

// ============================================
// Configuration Loading
// ============================================

/// Load configuration from a YAML file with environment variable interpolation.
///
/// # Arguments
///
/// * `path` - Optional path to the config file. Defaults to "config.yaml".
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&str>) -> Result<EngineConfig, ConfigError> {
    let path = path.unwrap_or("config.yaml");

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    let config = load_config_from_string(&contents)?;
    tracing::debug!(path, "Loaded engine configuration");
    Ok(config)
}

/// Load configuration from a YAML string (useful for testing).
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<EngineConfig, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: EngineConfig = serde_yaml_bw::from_str(&interpolated)?;
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax.
#[allow(clippy::expect_used)] // Regex is compile-time constant; expect() is safe here
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |cap: &regex::Captures<'_>| {
        let default_value = cap.get(2).map_or("", |m| m.as_str());
        match std::env::var(&cap[1]) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.to_string(),
        }
    })
    .into_owned()
}

/// Validate configuration values.
///
/// # Errors
///
/// Returns `ConfigError::ValidationError` describing the first invalid value.
pub fn validate_config(config: &EngineConfig) -> Result<(), ConfigError> {
    let inst = &config.instantiation;
    if inst.fallback_premium < Decimal::ZERO {
        return Err(ConfigError::ValidationError(
            "instantiation.fallback_premium must not be negative".to_string(),
        ));
    }

    if inst.quote_strike_tolerance <= Decimal::ZERO {
        return Err(ConfigError::ValidationError(
            "instantiation.quote_strike_tolerance must be positive".to_string(),
        ));
    }

    if inst.default_expiration_days == 0 {
        return Err(ConfigError::ValidationError(
            "instantiation.default_expiration_days must be positive".to_string(),
        ));
    }

    let payoff = &config.payoff;
    if payoff.steps == 0 || payoff.steps > MAX_PAYOFF_STEPS {
        return Err(ConfigError::ValidationError(format!(
            "payoff.steps must be between 1 and {MAX_PAYOFF_STEPS}"
        )));
    }

    if payoff.min_range < Decimal::ONE {
        return Err(ConfigError::ValidationError(
            "payoff.min_range must be at least 1".to_string(),
        ));
    }

    let logging = &config.observability.logging;
    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&logging.level.to_lowercase().as_str()) {
        return Err(ConfigError::ValidationError(format!(
            "observability.logging.level must be one of: {valid_levels:?}"
        )));
    }

    let valid_formats = ["full", "compact", "pretty"];
    if !valid_formats.contains(&logging.format.as_str()) {
        return Err(ConfigError::ValidationError(format!(
            "observability.logging.format must be one of: {valid_formats:?}"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();

        assert_eq!(config.instantiation.fallback_premium, dec!(2.5));
        assert_eq!(config.instantiation.quote_strike_tolerance, dec!(1));
        assert_eq!(config.instantiation.default_expiration_days, 30);
        assert_eq!(config.payoff.steps, 100);
        assert_eq!(config.payoff.min_range, dec!(20));
        assert!(!config.risk.detect_unbounded);
        assert_eq!(config.observability.logging.level, "info");
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_load_empty_config() {
        let config = match load_config_from_string("{}") {
            Ok(c) => c,
            Err(e) => panic!("should load empty config: {e}"),
        };
        assert_eq!(config.payoff.steps, 100);
    }

    #[test]
    fn test_load_partial_config() {
        let yaml = r"
instantiation:
  fallback_premium: 1.75
risk:
  detect_unbounded: true
";

        let config = match load_config_from_string(yaml) {
            Ok(c) => c,
            Err(e) => panic!("should load partial config: {e}"),
        };
        assert_eq!(config.instantiation.fallback_premium, dec!(1.75));
        // Untouched fields keep their defaults
        assert_eq!(config.instantiation.default_expiration_days, 30);
        assert!(config.risk.detect_unbounded);
    }

    #[test]
    fn test_env_var_with_default_when_missing() {
        let input = "level: ${PAYOFF_CONFIG_TEST_NONEXISTENT_VAR:-debug}";
        let result = interpolate_env_vars(input);
        assert_eq!(result, "level: debug");
    }

    #[test]
    fn test_env_var_without_default_when_missing() {
        let input = "level: ${PAYOFF_CONFIG_TEST_OTHER_NONEXISTENT_VAR}";
        let result = interpolate_env_vars(input);
        assert_eq!(result, "level: ");
    }

    #[test]
    fn test_env_var_present() {
        // PATH is set in every test environment
        let path = std::env::var("PATH").unwrap_or_default();
        if path.is_empty() {
            return;
        }
        let result = interpolate_env_vars("value: ${PATH:-fallback}");
        assert_eq!(result, format!("value: {path}"));
    }

    #[test]
    fn test_interpolated_decimal() {
        let yaml = r#"
instantiation:
  fallback_premium: "${PAYOFF_CONFIG_TEST_NONEXISTENT_PREMIUM:-3.25}"
"#;
        let config = load_config_from_string(yaml).unwrap();
        assert_eq!(config.instantiation.fallback_premium, dec!(3.25));
    }

    #[test]
    fn test_rejects_negative_fallback_premium() {
        let yaml = "instantiation:\n  fallback_premium: -1\n";
        let err = load_config_from_string(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_rejects_zero_tolerance() {
        let yaml = "instantiation:\n  quote_strike_tolerance: 0\n";
        assert!(load_config_from_string(yaml).is_err());
    }

    #[test]
    fn test_rejects_out_of_range_steps() {
        assert!(load_config_from_string("payoff:\n  steps: 0\n").is_err());
        assert!(load_config_from_string("payoff:\n  steps: 500\n").is_err());
        assert!(load_config_from_string("payoff:\n  steps: 50\n").is_ok());
    }

    #[test]
    fn test_rejects_narrow_min_range() {
        let err = load_config_from_string("payoff:\n  min_range: 0.5\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Config validation failed: payoff.min_range must be at least 1"
        );
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let yaml = "observability:\n  logging:\n    level: verbose\n";
        assert!(load_config_from_string(yaml).is_err());
    }

    #[test]
    fn test_parse_error() {
        let err = load_config_from_string("payoff: [not, a, map]").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Some("/nonexistent/payoff-engine.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }
}
