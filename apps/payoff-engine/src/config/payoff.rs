//! Payoff sampling configuration.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Payoff sampling configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoffConfig {
    /// Number of equal steps across the price domain (points = steps + 1).
    #[serde(default = "default_steps")]
    pub steps: u32,
    /// Minimum strike range used to size the derived price domain.
    #[serde(default = "default_min_range")]
    pub min_range: Decimal,
}

impl Default for PayoffConfig {
    fn default() -> Self {
        Self {
            steps: default_steps(),
            min_range: default_min_range(),
        }
    }
}

const fn default_steps() -> u32 {
    100
}

const fn default_min_range() -> Decimal {
    dec!(20)
}
