//! Option Leg Value Object

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::StrategyError;

/// Trade action for a leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LegAction {
    /// Bought (premium paid).
    Buy,
    /// Sold/written (premium received).
    Sell,
}

impl LegAction {
    /// Get the sign multiplier for this action.
    #[must_use]
    pub const fn sign(&self) -> i32 {
        match self {
            Self::Buy => 1,
            Self::Sell => -1,
        }
    }

    /// Check if this is a buy.
    #[must_use]
    pub const fn is_buy(&self) -> bool {
        matches!(self, Self::Buy)
    }

    /// Check if this is a sell.
    #[must_use]
    pub const fn is_sell(&self) -> bool {
        matches!(self, Self::Sell)
    }
}

impl std::fmt::Display for LegAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "BUY"),
            Self::Sell => write!(f, "SELL"),
        }
    }
}

/// Option type (call or put).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OptionType {
    /// Call option (right to buy).
    Call,
    /// Put option (right to sell).
    Put,
}

impl OptionType {
    /// Intrinsic value at expiration for a given strike and underlying price.
    #[must_use]
    pub fn intrinsic_value(&self, strike: Decimal, price: Decimal) -> Decimal {
        match self {
            Self::Call => (price - strike).max(Decimal::ZERO),
            Self::Put => (strike - price).max(Decimal::ZERO),
        }
    }
}

impl std::fmt::Display for OptionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Call => write!(f, "CALL"),
            Self::Put => write!(f, "PUT"),
        }
    }
}

/// Leg parameters as entered by a user or received over the wire.
///
/// Unvalidated; convert into a [`Leg`] with `Leg::try_from`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegInput {
    /// Buy or sell.
    pub action: LegAction,
    /// Call or put.
    pub option_type: OptionType,
    /// Strike price.
    pub strike: Decimal,
    /// Expiration date.
    pub expiration: NaiveDate,
    /// Number of contracts.
    pub quantity: u32,
    /// Premium per contract.
    pub premium: Decimal,
    /// External contract reference (e.g., OCC symbol).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub option_symbol: Option<String>,
}

/// A single validated option position.
///
/// Payoff math uses a contract multiplier of 1: profits are per unit of
/// underlying times `quantity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LegInput", into = "LegInput")]
pub struct Leg {
    action: LegAction,
    option_type: OptionType,
    strike: Decimal,
    expiration: NaiveDate,
    quantity: u32,
    premium: Decimal,
    option_symbol: Option<String>,
}

impl Leg {
    /// Create a new leg.
    ///
    /// # Errors
    ///
    /// Returns `StrategyError::InvalidLeg` if `quantity` is zero, `strike` is
    /// not positive or `premium` is negative.
    pub fn new(
        action: LegAction,
        option_type: OptionType,
        strike: Decimal,
        expiration: NaiveDate,
        quantity: u32,
        premium: Decimal,
    ) -> Result<Self, StrategyError> {
        if quantity == 0 {
            return Err(StrategyError::invalid_leg("quantity must be positive"));
        }
        if strike <= Decimal::ZERO {
            return Err(StrategyError::invalid_leg(format!(
                "strike must be positive, got {strike}"
            )));
        }
        if premium < Decimal::ZERO {
            return Err(StrategyError::invalid_leg(format!(
                "premium must not be negative, got {premium}"
            )));
        }

        Ok(Self {
            action,
            option_type,
            strike,
            expiration,
            quantity,
            premium,
            option_symbol: None,
        })
    }

    /// Create a bought leg.
    pub fn buy(
        option_type: OptionType,
        strike: Decimal,
        expiration: NaiveDate,
        quantity: u32,
        premium: Decimal,
    ) -> Result<Self, StrategyError> {
        Self::new(
            LegAction::Buy,
            option_type,
            strike,
            expiration,
            quantity,
            premium,
        )
    }

    /// Create a sold leg.
    pub fn sell(
        option_type: OptionType,
        strike: Decimal,
        expiration: NaiveDate,
        quantity: u32,
        premium: Decimal,
    ) -> Result<Self, StrategyError> {
        Self::new(
            LegAction::Sell,
            option_type,
            strike,
            expiration,
            quantity,
            premium,
        )
    }

    /// Attach an external contract reference.
    #[must_use]
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.option_symbol = Some(symbol.into());
        self
    }

    /// Get the action.
    #[must_use]
    pub const fn action(&self) -> LegAction {
        self.action
    }

    /// Get the option type.
    #[must_use]
    pub const fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Get the strike price.
    #[must_use]
    pub const fn strike(&self) -> Decimal {
        self.strike
    }

    /// Get the expiration date.
    #[must_use]
    pub const fn expiration(&self) -> NaiveDate {
        self.expiration
    }

    /// Get the number of contracts.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Get the premium per contract.
    #[must_use]
    pub const fn premium(&self) -> Decimal {
        self.premium
    }

    /// Get the external contract reference, if any.
    #[must_use]
    pub fn option_symbol(&self) -> Option<&str> {
        self.option_symbol.as_deref()
    }

    /// Get signed quantity (positive for buys, negative for sells).
    #[must_use]
    pub fn signed_quantity(&self) -> Decimal {
        Decimal::from(self.quantity) * Decimal::from(self.action.sign())
    }

    /// Intrinsic value of one contract at expiration.
    #[must_use]
    pub fn intrinsic_value(&self, price: Decimal) -> Decimal {
        self.option_type.intrinsic_value(self.strike, price)
    }

    /// Profit of the whole leg at expiration for an underlying price.
    #[must_use]
    pub fn profit_at(&self, price: Decimal) -> Decimal {
        (self.intrinsic_value(price) - self.premium) * self.signed_quantity()
    }

    /// Net premium (positive = credit, negative = debit).
    #[must_use]
    pub fn net_premium(&self) -> Decimal {
        -self.premium * self.signed_quantity()
    }
}

impl TryFrom<LegInput> for Leg {
    type Error = StrategyError;

    fn try_from(input: LegInput) -> Result<Self, Self::Error> {
        let leg = Self::new(
            input.action,
            input.option_type,
            input.strike,
            input.expiration,
            input.quantity,
            input.premium,
        )?;
        Ok(match input.option_symbol {
            Some(symbol) => leg.with_symbol(symbol),
            None => leg,
        })
    }
}

impl From<Leg> for LegInput {
    fn from(leg: Leg) -> Self {
        Self {
            action: leg.action,
            option_type: leg.option_type,
            strike: leg.strike,
            expiration: leg.expiration,
            quantity: leg.quantity,
            premium: leg.premium,
            option_symbol: leg.option_symbol,
        }
    }
}
