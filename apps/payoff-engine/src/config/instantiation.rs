//! Strategy instantiation configuration.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Strategy instantiation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstantiationConfig {
    /// Premium used when no quote matches a leg.
    ///
    /// Placeholder pricing, not a valuation.
    #[serde(default = "default_fallback_premium")]
    pub fallback_premium: Decimal,
    /// A quote matches a leg when its strike is strictly closer than this.
    #[serde(default = "default_quote_strike_tolerance")]
    pub quote_strike_tolerance: Decimal,
    /// Expiration horizon (calendar days) when the chain has no expirations.
    #[serde(default = "default_expiration_days")]
    pub default_expiration_days: u32,
}

impl Default for InstantiationConfig {
    fn default() -> Self {
        Self {
            fallback_premium: default_fallback_premium(),
            quote_strike_tolerance: default_quote_strike_tolerance(),
            default_expiration_days: default_expiration_days(),
        }
    }
}

const fn default_fallback_premium() -> Decimal {
    dec!(2.5)
}

const fn default_quote_strike_tolerance() -> Decimal {
    Decimal::ONE
}

const fn default_expiration_days() -> u32 {
    30
}
