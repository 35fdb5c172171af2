// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::match_same_arms,
        clippy::needless_pass_by_value,
        clippy::needless_collect,
        clippy::option_if_let_else,
        clippy::default_trait_access,
        clippy::items_after_statements,
        clippy::or_fun_call
    )
)]

//! Payoff Engine - Rust Core Library
//!
//! Multi-leg options payoff and risk analytics for the paper brokerage
//! dashboard's spread builder and single-option panels.
//!
//! # Pipeline
//!
//! Data flows one way:
//!
//! - **Strategy**: catalog of named blueprints → instantiator binds legs to
//!   option chain quotes (or a fallback premium)
//! - **Options**: validated `Leg` values, built from templates or user input
//! - **Analytics**: payoff sampling → breakevens → risk summary
//!
//! Everything is synchronous and free of I/O apart from configuration
//! loading. Monetary values use `rust_decimal`; rounding to cents happens
//! only when a value is emitted.
//!
//! # Usage
//!
//! ```rust,ignore
//! use payoff_engine::{InstantiationRequest, PayoffEngine, StrategyKind, load_config};
//!
//! let engine = PayoffEngine::new(load_config(None)?);
//! let request = InstantiationRequest::new(dec!(100), as_of);
//! let strategy = engine.instantiate(StrategyKind::IronCondor, &request, &quotes)?;
//! let analysis = engine.analyze(strategy.legs(), dec!(101.25));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Payoff sampling, breakeven detection and risk statistics.
pub mod analytics;

/// Engine configuration loading and validation.
pub mod config;

/// Configured facade over the pipeline.
pub mod engine;

/// Strategy and payoff errors.
pub mod error;

/// Option legs and chain quotes.
pub mod options;

/// Strategy catalog, instantiation and net premium.
pub mod strategy;

/// Tracing subscriber setup.
pub mod telemetry;

// =============================================================================
// Re-exports
// =============================================================================

pub use analytics::{
    PayoffCalculator, PayoffPoint, PriceDomain, ProfitBound, RiskAnalyzer, RiskReward,
    RiskSummary, analyze, compute_payoff, find_breakevens,
};
pub use config::{ConfigError, EngineConfig, load_config, load_config_from_string};
pub use engine::{PayoffEngine, StrategyAnalysis};
pub use error::StrategyError;
pub use options::{Leg, LegAction, LegInput, OptionQuote, OptionType};
pub use strategy::{
    InstantiatedStrategy, InstantiationRequest, PremiumFlow, StrategyBlueprint, StrategyCategory,
    StrategyInstantiator, StrategyKind, instantiate, net_premium,
};
pub use telemetry::init_tracing;
