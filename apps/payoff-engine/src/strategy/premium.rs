//! Net premium of a leg set, for order staging.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::options::Leg;

/// Net premium across legs (positive = credit, negative = debit).
#[must_use]
pub fn net_premium(legs: &[Leg]) -> Decimal {
    legs.iter().map(Leg::net_premium).sum()
}

/// Direction of the premium cash flow when opening a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "amount", rename_all = "snake_case")]
pub enum PremiumFlow {
    /// Net premium received.
    Credit(Decimal),
    /// Net premium paid.
    Debit(Decimal),
    /// Premiums cancel out.
    Even,
}

impl PremiumFlow {
    /// Classify a signed net premium.
    #[must_use]
    pub fn from_net(net: Decimal) -> Self {
        if net > Decimal::ZERO {
            Self::Credit(net)
        } else if net < Decimal::ZERO {
            Self::Debit(net.abs())
        } else {
            Self::Even
        }
    }

    /// Classify the net premium of a leg set.
    #[must_use]
    pub fn of(legs: &[Leg]) -> Self {
        Self::from_net(net_premium(legs))
    }

    /// Unsigned amount of the flow.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        match self {
            Self::Credit(amount) | Self::Debit(amount) => *amount,
            Self::Even => Decimal::ZERO,
        }
    }

    /// Check if the strategy opens for a credit.
    #[must_use]
    pub const fn is_credit(&self) -> bool {
        matches!(self, Self::Credit(_))
    }

    /// Check if the strategy opens for a debit.
    #[must_use]
    pub const fn is_debit(&self) -> bool {
        matches!(self, Self::Debit(_))
    }
}
