//! Tracing Setup
//!
//! Installs a console `tracing` subscriber for the embedding application.
//!
//! # Configuration
//!
//! - `RUST_LOG`: filter directives; overrides the configured level when set
//! - `observability.logging.level`: fallback level (default: `info`)
//! - `observability.logging.format`: `full`, `compact` or `pretty`
//!
//! # Usage
//!
//! ```rust,ignore
//! use payoff_engine::config::load_config;
//! use payoff_engine::telemetry::init_tracing;
//!
//! let config = load_config(None)?;
//! init_tracing(&config.observability.logging);
//! ```

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Install the global subscriber.
///
/// Returns `false` when a global subscriber is already set, which is common
/// in tests and in applications that configure tracing themselves.
pub fn init_tracing(config: &LoggingConfig) -> bool {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.to_lowercase()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(config.include_target);

    let result = match config.format.as_str() {
        "compact" => builder.compact().try_init(),
        "pretty" => builder.pretty().try_init(),
        _ => builder.try_init(),
    };

    match result {
        Ok(()) => {
            tracing::debug!(
                level = %config.level,
                format = %config.format,
                "Tracing initialized"
            );
            true
        }
        Err(_) => false,
    }
}
