//! Payoff and risk analytics.
//!
//! This module provides:
//! - Expiration payoff sampling over a price domain
//! - Breakeven detection by linear interpolation between samples
//! - Risk summary (max profit/loss, win probability, risk/reward)
//!
//! Every function here is a pure computation over its inputs. Decimal
//! arithmetic is exact inside a computation; rounding to cents happens only
//! when a value is emitted.

mod breakeven;
mod payoff;
mod risk;

use rust_decimal::{Decimal, RoundingStrategy};

pub use breakeven::find_breakevens;
pub use payoff::{
    MIN_DOMAIN_WIDTH, PayoffCalculator, PayoffPoint, PriceDomain, compute_payoff, profit_at,
};
pub use risk::{ProfitBound, RiskAnalyzer, RiskReward, RiskSummary, analyze};

/// Round to cent precision, halves away from zero.
pub(crate) fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
