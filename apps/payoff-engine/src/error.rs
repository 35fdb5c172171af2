//! Strategy and payoff errors.
//!
//! All engine errors are local and deterministic: retrying the same input
//! produces the same error, so none of them are retryable.
//!
//! | Variant | Raised by |
//! |---------|-----------|
//! | `InvalidLeg` | Leg construction (quantity, strike, premium invariants) |
//! | `NoBlueprintLegs` | Strategy instantiation of an empty blueprint |
//! | `UnknownStrategy` | Parsing a strategy identifier |
//! | `InvalidDomain` | Explicit price domain construction |
//!
//! An empty strategy is not an error: payoff and risk computations over zero
//! legs return empty results. A missing quote is not an error either: the
//! instantiator falls back to a default premium and flags the result.

use thiserror::Error;

/// Errors raised while building legs, strategies or price domains.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StrategyError {
    /// Leg parameters violate an invariant.
    #[error("Invalid leg: {message}")]
    InvalidLeg {
        /// Error message.
        message: String,
    },

    /// A blueprint resolved to zero legs.
    #[error("Strategy '{strategy}' produced no legs")]
    NoBlueprintLegs {
        /// Strategy name.
        strategy: String,
    },

    /// Strategy identifier is not part of the catalog.
    #[error("Unknown strategy: {name}")]
    UnknownStrategy {
        /// The identifier that failed to parse.
        name: String,
    },

    /// Explicit price domain is inverted or too narrow.
    #[error("Invalid price domain: {message}")]
    InvalidDomain {
        /// Error message.
        message: String,
    },
}

impl StrategyError {
    pub(crate) fn invalid_leg(message: impl Into<String>) -> Self {
        Self::InvalidLeg {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = StrategyError::invalid_leg("quantity must be positive");
        assert_eq!(err.to_string(), "Invalid leg: quantity must be positive");

        let err = StrategyError::NoBlueprintLegs {
            strategy: "Iron Condor".to_string(),
        };
        assert_eq!(err.to_string(), "Strategy 'Iron Condor' produced no legs");

        let err = StrategyError::UnknownStrategy {
            name: "wheel".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown strategy: wheel");

        let err = StrategyError::InvalidDomain {
            message: "low must be below high".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid price domain: low must be below high"
        );
    }
}
