//! Payoff Engine
//!
//! Facade over the instantiator, payoff calculator and risk analyzer, built
//! from one [`EngineConfig`]. Stateless: every call is a fresh computation
//! over its arguments, so a single engine can be shared across threads.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::analytics::{PayoffCalculator, PayoffPoint, PriceDomain, RiskAnalyzer, RiskSummary};
use crate::config::EngineConfig;
use crate::error::StrategyError;
use crate::options::{Leg, OptionQuote};
use crate::strategy::{
    InstantiatedStrategy, InstantiationRequest, PremiumFlow, StrategyInstantiator, StrategyKind,
    net_premium,
};

/// Payoff curve, risk summary and premium of a leg set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyAnalysis {
    /// Sampled payoff curve in ascending price order.
    pub points: Vec<PayoffPoint>,
    /// Risk statistics derived from `points`.
    pub risk: RiskSummary,
    /// Net premium (positive = credit).
    pub net_premium: Decimal,
    /// Net premium classified as credit or debit.
    pub premium_flow: PremiumFlow,
}

/// Configured entry point for strategy analysis.
#[derive(Debug, Clone, Default)]
pub struct PayoffEngine {
    instantiator: StrategyInstantiator,
    calculator: PayoffCalculator,
    analyzer: RiskAnalyzer,
}

impl PayoffEngine {
    /// Create an engine from configuration.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            instantiator: StrategyInstantiator::new(config.instantiation),
            calculator: PayoffCalculator::new(config.payoff),
            analyzer: RiskAnalyzer::new(config.risk),
        }
    }

    /// Build the legs of a catalog strategy.
    ///
    /// # Errors
    ///
    /// Returns `StrategyError::InvalidLeg` if a resolved strike is not
    /// positive.
    pub fn instantiate(
        &self,
        kind: StrategyKind,
        request: &InstantiationRequest,
        quotes: &[OptionQuote],
    ) -> Result<InstantiatedStrategy, StrategyError> {
        self.instantiator.instantiate(&kind.blueprint(), request, quotes)
    }

    /// Payoff curve over the domain derived from the legs' strikes.
    #[must_use]
    pub fn payoff(&self, legs: &[Leg]) -> Vec<PayoffPoint> {
        self.calculator.payoff(legs)
    }

    /// Payoff curve over an explicit domain.
    #[must_use]
    pub fn payoff_over(&self, legs: &[Leg], domain: &PriceDomain) -> Vec<PayoffPoint> {
        self.calculator.payoff_over(legs, domain)
    }

    /// Full analysis over the domain derived from the legs' strikes.
    #[must_use]
    pub fn analyze(&self, legs: &[Leg], current_price: Decimal) -> StrategyAnalysis {
        let points = self.calculator.payoff(legs);
        self.summarize(legs, points, current_price)
    }

    /// Full analysis over an explicit domain.
    #[must_use]
    pub fn analyze_over(
        &self,
        legs: &[Leg],
        domain: &PriceDomain,
        current_price: Decimal,
    ) -> StrategyAnalysis {
        let points = self.calculator.payoff_over(legs, domain);
        self.summarize(legs, points, current_price)
    }

    fn summarize(
        &self,
        legs: &[Leg],
        points: Vec<PayoffPoint>,
        current_price: Decimal,
    ) -> StrategyAnalysis {
        let risk = self.analyzer.analyze_legs(legs, &points, current_price);
        let net_premium = net_premium(legs);

        tracing::debug!(
            legs = legs.len(),
            points = points.len(),
            breakevens = risk.breakeven_points.len(),
            %net_premium,
            "Analyzed strategy"
        );

        StrategyAnalysis {
            points,
            risk,
            net_premium,
            premium_flow: PremiumFlow::from_net(net_premium),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::{ProfitBound, RiskReward};
    use crate::config::RiskConfig;
    use crate::options::OptionType;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn expiration() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 20).unwrap()
    }

    #[test]
    fn analyzes_bull_call_spread() {
        let legs = vec![
            Leg::buy(OptionType::Call, dec!(100), expiration(), 1, dec!(3)).unwrap(),
            Leg::sell(OptionType::Call, dec!(110), expiration(), 1, dec!(1)).unwrap(),
        ];
        let domain = PriceDomain::new(dec!(80), dec!(130)).unwrap();
        let analysis = PayoffEngine::default().analyze_over(&legs, &domain, dec!(105));

        assert_eq!(analysis.points.len(), 101);
        assert_eq!(analysis.risk.max_profit, ProfitBound::Bounded(dec!(8)));
        assert_eq!(analysis.risk.max_loss, ProfitBound::Bounded(dec!(-2)));
        assert_eq!(analysis.risk.breakeven_points, vec![dec!(102)]);
        assert_eq!(analysis.risk.risk_reward_ratio, RiskReward::Ratio(dec!(4)));
        assert_eq!(analysis.risk.current_profit, Some(dec!(3)));
        assert_eq!(analysis.net_premium, dec!(-2));
        assert_eq!(analysis.premium_flow, PremiumFlow::Debit(dec!(2)));
    }

    #[test]
    fn empty_legs() {
        let analysis = PayoffEngine::default().analyze(&[], dec!(100));
        assert!(analysis.points.is_empty());
        assert_eq!(analysis.risk, RiskSummary::empty());
        assert_eq!(analysis.premium_flow, PremiumFlow::Even);
    }

    #[test]
    fn config_flows_through() {
        let engine = PayoffEngine::new(EngineConfig {
            risk: RiskConfig {
                detect_unbounded: true,
            },
            ..EngineConfig::default()
        });
        let legs = vec![Leg::buy(OptionType::Call, dec!(100), expiration(), 1, dec!(4)).unwrap()];
        let analysis = engine.analyze(&legs, dec!(100));

        assert!(analysis.risk.max_profit.is_unbounded());
        assert_eq!(analysis.risk.max_loss, ProfitBound::Bounded(dec!(-4)));
    }

    #[test]
    fn instantiate_then_analyze() {
        let engine = PayoffEngine::default();
        let request = InstantiationRequest::new(dec!(100), expiration());
        let strategy = engine
            .instantiate(StrategyKind::ShortStraddle, &request, &[])
            .unwrap();
        let analysis = engine.analyze(strategy.legs(), dec!(100));

        // Fallback premiums: 2.5 per leg, credit of 5
        assert_eq!(analysis.net_premium, dec!(5));
        assert_eq!(analysis.risk.max_profit, ProfitBound::Bounded(dec!(5)));
        assert_eq!(analysis.risk.breakeven_points, vec![dec!(95), dec!(105)]);
    }
}
