//! Payoff Calculator
//!
//! Samples the aggregate expiration payoff of a set of legs over a price
//! domain in equal steps, inclusive of both ends.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::round_cents;
use crate::config::PayoffConfig;
use crate::error::StrategyError;
use crate::options::Leg;

/// Narrowest explicit domain accepted by [`PriceDomain::new`].
pub const MIN_DOMAIN_WIDTH: Decimal = dec!(1);

/// One sample of the payoff curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoffPoint {
    /// Underlying price at expiration.
    pub price: Decimal,
    /// Aggregate profit across all legs.
    pub profit: Decimal,
}

impl PayoffPoint {
    /// Create a new point.
    #[must_use]
    pub const fn new(price: Decimal, profit: Decimal) -> Self {
        Self { price, profit }
    }
}

/// Closed price interval to sample.
///
/// Deserialization applies the same width check as [`PriceDomain::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DomainBounds", into = "DomainBounds")]
pub struct PriceDomain {
    low: Decimal,
    high: Decimal,
}

/// Wire form of [`PriceDomain`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct DomainBounds {
    low: Decimal,
    high: Decimal,
}

impl PriceDomain {
    /// Create an explicit domain.
    ///
    /// # Errors
    ///
    /// Returns `StrategyError::InvalidDomain` when `high - low` is below
    /// [`MIN_DOMAIN_WIDTH`].
    pub fn new(low: Decimal, high: Decimal) -> Result<Self, StrategyError> {
        if high - low < MIN_DOMAIN_WIDTH {
            return Err(StrategyError::InvalidDomain {
                message: format!(
                    "domain [{low}, {high}] must be at least {MIN_DOMAIN_WIDTH} wide"
                ),
            });
        }
        Ok(Self { low, high })
    }

    /// Derive the domain from the legs' strikes.
    ///
    /// `range = max(max_strike - min_strike, min_range)`, extended by half the
    /// range on each side. Returns `None` for an empty leg set.
    #[must_use]
    pub fn around_strikes(legs: &[Leg], min_range: Decimal) -> Option<Self> {
        let min_strike = legs.iter().map(Leg::strike).min()?;
        let max_strike = legs.iter().map(Leg::strike).max()?;
        let range = (max_strike - min_strike).max(min_range);
        let half = range / Decimal::TWO;
        Some(Self {
            low: min_strike - half,
            high: max_strike + half,
        })
    }

    /// Lower bound.
    #[must_use]
    pub const fn low(&self) -> Decimal {
        self.low
    }

    /// Upper bound.
    #[must_use]
    pub const fn high(&self) -> Decimal {
        self.high
    }

    /// Width of the domain.
    #[must_use]
    pub fn width(&self) -> Decimal {
        self.high - self.low
    }
}

impl TryFrom<DomainBounds> for PriceDomain {
    type Error = StrategyError;

    fn try_from(bounds: DomainBounds) -> Result<Self, Self::Error> {
        Self::new(bounds.low, bounds.high)
    }
}

impl From<PriceDomain> for DomainBounds {
    fn from(domain: PriceDomain) -> Self {
        Self {
            low: domain.low,
            high: domain.high,
        }
    }
}

/// Aggregate profit of `legs` at an underlying price, unrounded.
#[must_use]
pub fn profit_at(legs: &[Leg], price: Decimal) -> Decimal {
    legs.iter().map(|leg| leg.profit_at(price)).sum()
}

/// Payoff curve sampler.
#[derive(Debug, Clone, Default)]
pub struct PayoffCalculator {
    config: PayoffConfig,
}

impl PayoffCalculator {
    /// Create a new calculator.
    #[must_use]
    pub const fn new(config: PayoffConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &PayoffConfig {
        &self.config
    }

    /// Domain derived from the legs' strikes using the configured minimum range.
    #[must_use]
    pub fn domain_for(&self, legs: &[Leg]) -> Option<PriceDomain> {
        PriceDomain::around_strikes(legs, self.config.min_range)
    }

    /// Sample the payoff over the domain derived from the legs.
    #[must_use]
    pub fn payoff(&self, legs: &[Leg]) -> Vec<PayoffPoint> {
        self.domain_for(legs)
            .map_or_else(Vec::new, |domain| self.payoff_over(legs, &domain))
    }

    /// Sample the payoff over an explicit domain.
    ///
    /// Returns `steps + 1` points in ascending price order, or nothing when
    /// `legs` is empty.
    #[must_use]
    pub fn payoff_over(&self, legs: &[Leg], domain: &PriceDomain) -> Vec<PayoffPoint> {
        if legs.is_empty() {
            return Vec::new();
        }

        let steps = self.config.steps.max(1);
        let step = domain.width() / Decimal::from(steps);

        (0..=steps)
            .map(|i| {
                // Last sample pins to the upper bound exactly
                let price = if i == steps {
                    domain.high()
                } else {
                    domain.low() + step * Decimal::from(i)
                };
                PayoffPoint::new(round_cents(price), round_cents(profit_at(legs, price)))
            })
            .collect()
    }
}

/// Sample the payoff of `legs` with the default configuration.
///
/// `None` derives the domain from the legs' strikes.
#[must_use]
pub fn compute_payoff(legs: &[Leg], domain: Option<&PriceDomain>) -> Vec<PayoffPoint> {
    let calculator = PayoffCalculator::default();
    match domain {
        Some(domain) => calculator.payoff_over(legs, domain),
        None => calculator.payoff(legs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::OptionType;
    use chrono::NaiveDate;

    fn expiration() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 20).unwrap()
    }

    fn bull_call_spread() -> Vec<Leg> {
        vec![
            Leg::buy(OptionType::Call, dec!(100), expiration(), 1, dec!(3)).unwrap(),
            Leg::sell(OptionType::Call, dec!(110), expiration(), 1, dec!(1)).unwrap(),
        ]
    }

    #[test]
    fn empty_legs_produce_no_points() {
        assert!(compute_payoff(&[], None).is_empty());

        let domain = PriceDomain::new(dec!(80), dec!(130)).unwrap();
        assert!(compute_payoff(&[], Some(&domain)).is_empty());
    }

    #[test]
    fn derived_domain_uses_minimum_range() {
        // Strikes 10 apart: range widens to 20
        let domain = PriceDomain::around_strikes(&bull_call_spread(), dec!(20)).unwrap();
        assert_eq!(domain.low(), dec!(90));
        assert_eq!(domain.high(), dec!(120));
    }

    #[test]
    fn derived_domain_uses_strike_spread_when_wider() {
        let legs = vec![
            Leg::sell(OptionType::Put, dec!(70), expiration(), 1, dec!(1)).unwrap(),
            Leg::sell(OptionType::Call, dec!(130), expiration(), 1, dec!(1)).unwrap(),
        ];
        let domain = PriceDomain::around_strikes(&legs, dec!(20)).unwrap();
        assert_eq!(domain.low(), dec!(40));
        assert_eq!(domain.high(), dec!(160));
    }

    #[test]
    fn derived_domain_empty_legs() {
        assert!(PriceDomain::around_strikes(&[], dec!(20)).is_none());
    }

    #[test]
    fn explicit_domain_validation() {
        assert!(PriceDomain::new(dec!(100), dec!(100.5)).is_err());
        assert!(PriceDomain::new(dec!(100), dec!(90)).is_err());
        assert!(PriceDomain::new(dec!(100), dec!(101)).is_ok());
    }

    #[test]
    fn domain_json_validated() {
        let domain: PriceDomain =
            serde_json::from_str(r#"{"low":"80","high":"130"}"#).unwrap();
        assert_eq!(domain, PriceDomain::new(dec!(80), dec!(130)).unwrap());
        assert_eq!(
            serde_json::to_string(&domain).unwrap(),
            r#"{"low":"80","high":"130"}"#
        );

        assert!(serde_json::from_str::<PriceDomain>(r#"{"low":"100","high":"100.5"}"#).is_err());
        assert!(serde_json::from_str::<PriceDomain>(r#"{"low":"100","high":"90"}"#).is_err());
    }

    #[test]
    fn samples_101_points_inclusive() {
        let points = compute_payoff(&bull_call_spread(), None);
        assert_eq!(points.len(), 101);
        assert_eq!(points[0].price, dec!(90));
        assert_eq!(points[100].price, dec!(120));
        assert_eq!(points[1].price, dec!(90.3));
    }

    #[test]
    fn bull_call_spread_values() {
        let domain = PriceDomain::new(dec!(80), dec!(130)).unwrap();
        let points = compute_payoff(&bull_call_spread(), Some(&domain));

        let at = |price: Decimal| {
            points
                .iter()
                .find(|p| p.price == price)
                .map(|p| p.profit)
                .unwrap()
        };
        assert_eq!(at(dec!(80)), dec!(-2));
        assert_eq!(at(dec!(100)), dec!(-2));
        assert_eq!(at(dec!(102)), Decimal::ZERO);
        assert_eq!(at(dec!(105)), dec!(3));
        assert_eq!(at(dec!(110)), dec!(8));
        assert_eq!(at(dec!(130)), dec!(8));
    }

    #[test]
    fn quantity_scales_profit() {
        let legs = vec![Leg::buy(OptionType::Put, dec!(50), expiration(), 3, dec!(2)).unwrap()];
        assert_eq!(profit_at(&legs, dec!(40)), dec!(24));
        assert_eq!(profit_at(&legs, dec!(60)), dec!(-6));
    }

    #[test]
    fn rounds_at_emission() {
        // Step of 50/3 produces non-terminating prices
        let calculator = PayoffCalculator::new(PayoffConfig {
            steps: 3,
            min_range: dec!(20),
        });
        let legs = vec![Leg::buy(OptionType::Call, dec!(100), expiration(), 1, dec!(1)).unwrap()];
        let domain = PriceDomain::new(dec!(100), dec!(150)).unwrap();
        let points = calculator.payoff_over(&legs, &domain);

        assert_eq!(points.len(), 4);
        assert_eq!(points[1].price, dec!(116.67));
        assert_eq!(points[1].profit, dec!(15.67));
        assert_eq!(points[3].price, dec!(150));
    }

    #[test]
    fn leg_order_does_not_matter() {
        let mut legs = bull_call_spread();
        let forward = compute_payoff(&legs, None);
        legs.reverse();
        assert_eq!(compute_payoff(&legs, None), forward);
    }
}
