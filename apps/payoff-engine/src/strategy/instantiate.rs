//! Strategy Instantiator
//!
//! Binds blueprint legs to option chain quotes. A leg with no quote within
//! the strike tolerance is priced at the configured fallback premium. The
//! fallback is a placeholder, not a pricing model: callers should check
//! [`InstantiatedStrategy::used_fallback_pricing`] and present such premiums
//! as approximate.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use super::catalog::{StrategyBlueprint, StrategyKind};
use super::premium::{PremiumFlow, net_premium};
use crate::config::InstantiationConfig;
use crate::error::StrategyError;
use crate::options::{Leg, OptionQuote, OptionType};

/// Parameters for instantiating a blueprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstantiationRequest {
    /// Strike the blueprint offsets are applied to.
    pub reference_strike: Decimal,
    /// Explicit expiration; derived from the quotes when absent.
    pub expiration: Option<NaiveDate>,
    /// Date the strategy is built on.
    pub as_of: NaiveDate,
}

impl InstantiationRequest {
    /// Create a request with a derived expiration.
    #[must_use]
    pub const fn new(reference_strike: Decimal, as_of: NaiveDate) -> Self {
        Self {
            reference_strike,
            expiration: None,
            as_of,
        }
    }

    /// Pin the expiration date.
    #[must_use]
    pub const fn with_expiration(mut self, expiration: NaiveDate) -> Self {
        self.expiration = Some(expiration);
        self
    }
}

/// Legs produced from a blueprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstantiatedStrategy {
    kind: StrategyKind,
    expiration: NaiveDate,
    legs: Vec<Leg>,
    fallback_legs: Vec<usize>,
}

impl InstantiatedStrategy {
    /// Catalog entry the legs were built from.
    #[must_use]
    pub const fn kind(&self) -> StrategyKind {
        self.kind
    }

    /// Expiration shared by every leg.
    #[must_use]
    pub const fn expiration(&self) -> NaiveDate {
        self.expiration
    }

    /// Legs in blueprint order.
    #[must_use]
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Take ownership of the legs.
    #[must_use]
    pub fn into_legs(self) -> Vec<Leg> {
        self.legs
    }

    /// Indices of legs priced at the fallback premium.
    #[must_use]
    pub fn fallback_legs(&self) -> &[usize] {
        &self.fallback_legs
    }

    /// Check if any leg was priced without a matching quote.
    #[must_use]
    pub fn used_fallback_pricing(&self) -> bool {
        !self.fallback_legs.is_empty()
    }

    /// Net premium (positive = credit).
    #[must_use]
    pub fn net_premium(&self) -> Decimal {
        net_premium(&self.legs)
    }

    /// Net premium classified as credit or debit.
    #[must_use]
    pub fn premium_flow(&self) -> PremiumFlow {
        PremiumFlow::from_net(self.net_premium())
    }
}

/// Blueprint-to-legs instantiator.
#[derive(Debug, Clone, Default)]
pub struct StrategyInstantiator {
    config: InstantiationConfig,
}

impl StrategyInstantiator {
    /// Create a new instantiator.
    #[must_use]
    pub const fn new(config: InstantiationConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &InstantiationConfig {
        &self.config
    }

    /// Instantiate a blueprint against an option chain.
    ///
    /// # Errors
    ///
    /// Returns `StrategyError::NoBlueprintLegs` if the blueprint has no legs,
    /// or `StrategyError::InvalidLeg` if a resolved strike is not positive or
    /// a matched quote carries a negative premium.
    pub fn instantiate(
        &self,
        blueprint: &StrategyBlueprint,
        request: &InstantiationRequest,
        quotes: &[OptionQuote],
    ) -> Result<InstantiatedStrategy, StrategyError> {
        let templates = blueprint.legs_for(request.reference_strike);
        if templates.is_empty() {
            return Err(StrategyError::NoBlueprintLegs {
                strategy: blueprint.name.to_string(),
            });
        }

        let expiration = self.resolve_expiration(request, quotes);
        let mut legs = Vec::with_capacity(templates.len());
        let mut fallback_legs = Vec::new();

        for (index, template) in templates.iter().enumerate() {
            let quote = self.match_quote(quotes, template.option_type, template.strike, expiration);
            let premium = quote.map_or(self.config.fallback_premium, |q| q.premium);

            let mut leg = Leg::new(
                template.action,
                template.option_type,
                template.strike,
                expiration,
                template.quantity,
                premium,
            )?;

            match quote {
                Some(quote) => leg = leg.with_symbol(quote.symbol.clone()),
                None => {
                    tracing::warn!(
                        strategy = blueprint.kind.as_str(),
                        leg = index,
                        option_type = %template.option_type,
                        strike = %template.strike,
                        fallback_premium = %self.config.fallback_premium,
                        "No quote within tolerance, using fallback premium"
                    );
                    fallback_legs.push(index);
                }
            }
            legs.push(leg);
        }

        tracing::debug!(
            strategy = blueprint.kind.as_str(),
            legs = legs.len(),
            fallback_legs = fallback_legs.len(),
            %expiration,
            "Instantiated strategy"
        );

        Ok(InstantiatedStrategy {
            kind: blueprint.kind,
            expiration,
            legs,
            fallback_legs,
        })
    }

    /// Explicit date, else the nearest quote expiration on or after `as_of`
    /// (earliest overall if all have passed), else `as_of` plus the default
    /// horizon.
    fn resolve_expiration(
        &self,
        request: &InstantiationRequest,
        quotes: &[OptionQuote],
    ) -> NaiveDate {
        if let Some(expiration) = request.expiration {
            return expiration;
        }

        let upcoming = quotes
            .iter()
            .map(|q| q.expiration)
            .filter(|date| *date >= request.as_of)
            .min();

        upcoming
            .or_else(|| quotes.iter().map(|q| q.expiration).min())
            .unwrap_or_else(|| {
                let days = Days::new(u64::from(self.config.default_expiration_days));
                request.as_of.checked_add_days(days).unwrap_or(NaiveDate::MAX)
            })
    }

    /// Closest-strike quote of the same type within tolerance. Restricted to
    /// `expiration` when the chain lists it.
    fn match_quote<'q>(
        &self,
        quotes: &'q [OptionQuote],
        option_type: OptionType,
        strike: Decimal,
        expiration: NaiveDate,
    ) -> Option<&'q OptionQuote> {
        let chain_has_expiration = quotes.iter().any(|q| q.expiration == expiration);

        quotes
            .iter()
            .filter(|q| q.option_type == option_type)
            .filter(|q| !chain_has_expiration || q.expiration == expiration)
            .filter(|q| q.strike_distance(strike) < self.config.quote_strike_tolerance)
            .min_by_key(|q| q.strike_distance(strike))
    }
}

/// Instantiate a catalog strategy with the default configuration.
///
/// # Errors
///
/// See [`StrategyInstantiator::instantiate`].
pub fn instantiate(
    kind: StrategyKind,
    request: &InstantiationRequest,
    quotes: &[OptionQuote],
) -> Result<InstantiatedStrategy, StrategyError> {
    StrategyInstantiator::default().instantiate(&kind.blueprint(), request, quotes)
}
