//! Option Chain Quote

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::OptionType;

/// A quoted contract from the option chain.
///
/// Supplied by the market-data collaborator; the engine only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionQuote {
    /// Contract symbol (e.g., OCC symbol).
    pub symbol: String,
    /// Call or put.
    pub option_type: OptionType,
    /// Strike price.
    pub strike: Decimal,
    /// Quoted premium per contract.
    pub premium: Decimal,
    /// Expiration date.
    pub expiration: NaiveDate,
}

impl OptionQuote {
    /// Create a new quote.
    #[must_use]
    pub fn new(
        symbol: impl Into<String>,
        option_type: OptionType,
        strike: Decimal,
        premium: Decimal,
        expiration: NaiveDate,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            option_type,
            strike,
            premium,
            expiration,
        }
    }

    /// Absolute distance between this quote's strike and `strike`.
    #[must_use]
    pub fn strike_distance(&self, strike: Decimal) -> Decimal {
        (self.strike - strike).abs()
    }
}
