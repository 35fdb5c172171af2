//! Risk Analyzer
//!
//! Derives summary risk statistics from a sampled payoff curve.
//!
//! The win probability is the share of samples with positive profit, i.e. a
//! uniform distribution over the sampled price range. It is a coarse proxy
//! for display, not a calibrated probability: no volatility or
//! time-to-expiration model is involved.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::breakeven::find_breakevens;
use super::payoff::PayoffPoint;
use super::round_cents;
use crate::config::RiskConfig;
use crate::options::Leg;

/// Max profit or max loss of a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ProfitBound {
    /// Finite extreme.
    Bounded(Decimal),
    /// Keeps growing past the sampled domain.
    Unbounded,
}

impl ProfitBound {
    /// The finite value, if bounded.
    #[must_use]
    pub const fn value(&self) -> Option<Decimal> {
        match self {
            Self::Bounded(value) => Some(*value),
            Self::Unbounded => None,
        }
    }

    /// Check if unbounded.
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        matches!(self, Self::Unbounded)
    }
}

/// Max profit divided by the magnitude of max loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RiskReward {
    /// Finite ratio.
    Ratio(Decimal),
    /// Max loss is zero or an extreme is unbounded.
    Undefined,
}

impl RiskReward {
    /// The ratio, if defined.
    #[must_use]
    pub const fn value(&self) -> Option<Decimal> {
        match self {
            Self::Ratio(value) => Some(*value),
            Self::Undefined => None,
        }
    }
}

/// Summary risk statistics of a payoff curve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskSummary {
    /// Maximum profit.
    pub max_profit: ProfitBound,
    /// Maximum loss (the minimum profit, usually negative).
    pub max_loss: ProfitBound,
    /// Zero crossings in ascending price order.
    pub breakeven_points: Vec<Decimal>,
    /// Percentage of samples with positive profit, in `[0, 100]`.
    pub win_probability_pct: Decimal,
    /// Max profit over |max loss|.
    pub risk_reward_ratio: RiskReward,
    /// Profit at the sample nearest the current underlying price.
    pub current_profit: Option<Decimal>,
}

impl RiskSummary {
    /// Summary of an empty curve.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            max_profit: ProfitBound::Bounded(Decimal::ZERO),
            max_loss: ProfitBound::Bounded(Decimal::ZERO),
            breakeven_points: Vec::new(),
            win_probability_pct: Decimal::ZERO,
            risk_reward_ratio: RiskReward::Undefined,
            current_profit: None,
        }
    }
}

/// Payoff curve analyzer.
#[derive(Debug, Clone, Default)]
pub struct RiskAnalyzer {
    config: RiskConfig,
}

impl RiskAnalyzer {
    /// Create a new analyzer.
    #[must_use]
    pub const fn new(config: RiskConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &RiskConfig {
        &self.config
    }

    /// Analyze a payoff curve (ascending price order).
    ///
    /// Without the legs the strike range is unknown, so extremes are always
    /// the sampled ones. Use [`Self::analyze_legs`] for unbounded detection.
    #[must_use]
    pub fn analyze(&self, points: &[PayoffPoint], current_price: Decimal) -> RiskSummary {
        self.summarize(points, current_price, None)
    }

    /// Analyze the payoff curve sampled from `legs`.
    ///
    /// With `detect_unbounded` enabled, the domain edges are examined only
    /// where the edge segment lies outside every strike.
    #[must_use]
    pub fn analyze_legs(
        &self,
        legs: &[Leg],
        points: &[PayoffPoint],
        current_price: Decimal,
    ) -> RiskSummary {
        let strikes = legs
            .iter()
            .map(Leg::strike)
            .min()
            .zip(legs.iter().map(Leg::strike).max());
        self.summarize(points, current_price, strikes)
    }

    fn summarize(
        &self,
        points: &[PayoffPoint],
        current_price: Decimal,
        strikes: Option<(Decimal, Decimal)>,
    ) -> RiskSummary {
        let (Some(first), Some(last)) = (points.first(), points.last()) else {
            return RiskSummary::empty();
        };

        let mut max_profit = points.iter().map(|p| p.profit).max().unwrap_or_default();
        let mut min_profit = points.iter().map(|p| p.profit).min().unwrap_or_default();
        let mut profit_unbounded = false;
        let mut loss_unbounded = false;

        let edges = strikes.filter(|_| self.config.detect_unbounded && points.len() >= 2);
        if let Some((min_strike, max_strike)) = edges {
            let second = points[1];
            let before_last = points[points.len() - 2];

            // Above the highest strike the payoff is linear in price
            if before_last.price >= max_strike {
                profit_unbounded = last.profit > before_last.profit;
                loss_unbounded = last.profit < before_last.profit;
            }

            // Below the lowest strike it stays finite down to price zero
            let floor = extrapolate_to_zero(*first, second).filter(|_| second.price <= min_strike);
            if let Some(floor) = floor {
                max_profit = max_profit.max(floor);
                min_profit = min_profit.min(floor);
            }
        }

        let max_profit = bound(max_profit, profit_unbounded);
        let max_loss = bound(min_profit, loss_unbounded);

        RiskSummary {
            max_profit,
            max_loss,
            breakeven_points: find_breakevens(points),
            win_probability_pct: win_probability(points),
            risk_reward_ratio: risk_reward(max_profit, max_loss),
            current_profit: nearest_profit(points, current_price),
        }
    }
}

/// Analyze a payoff curve with the default configuration.
#[must_use]
pub fn analyze(points: &[PayoffPoint], current_price: Decimal) -> RiskSummary {
    RiskAnalyzer::default().analyze(points, current_price)
}

const fn bound(value: Decimal, unbounded: bool) -> ProfitBound {
    if unbounded {
        ProfitBound::Unbounded
    } else {
        ProfitBound::Bounded(value)
    }
}

/// Profit at price zero along the first segment, when the curve is still
/// sloped at its lower edge.
fn extrapolate_to_zero(first: PayoffPoint, second: PayoffPoint) -> Option<Decimal> {
    let run = second.price - first.price;
    if first.price <= Decimal::ZERO || run <= Decimal::ZERO || first.profit == second.profit {
        return None;
    }
    let slope = (second.profit - first.profit) / run;
    Some(round_cents(first.profit - slope * first.price))
}

fn win_probability(points: &[PayoffPoint]) -> Decimal {
    let winners = points.iter().filter(|p| p.profit > Decimal::ZERO).count();
    round_cents(Decimal::ONE_HUNDRED * Decimal::from(winners) / Decimal::from(points.len()))
}

fn risk_reward(max_profit: ProfitBound, max_loss: ProfitBound) -> RiskReward {
    match (max_profit, max_loss) {
        (ProfitBound::Bounded(profit), ProfitBound::Bounded(loss)) if !loss.is_zero() => {
            RiskReward::Ratio(round_cents(profit / loss.abs()))
        }
        _ => RiskReward::Undefined,
    }
}

fn nearest_profit(points: &[PayoffPoint], current_price: Decimal) -> Option<Decimal> {
    points
        .iter()
        .min_by_key(|p| (p.price - current_price).abs())
        .map(|p| p.profit)
}
