//! Strategy Template Library
//!
//! A fixed catalog of named multi-leg strategies. Each entry is a static
//! table of leg blueprints expressed as strike offsets from a single
//! reference strike, using a ±5 / ±10 / ±15 ladder.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::StrategyError;
use crate::options::OptionType::{Call, Put};
use crate::options::{LegAction, OptionType};

/// Strategy category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyCategory {
    /// Bullish or bearish spreads.
    Directional,
    /// Range-bound strategies.
    Neutral,
    /// Plays on the size of the move rather than its direction.
    Volatility,
    /// Skewed premium-selling structures.
    Advanced,
}

impl fmt::Display for StrategyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directional => write!(f, "Directional"),
            Self::Neutral => write!(f, "Neutral"),
            Self::Volatility => write!(f, "Volatility"),
            Self::Advanced => write!(f, "Advanced"),
        }
    }
}

/// One leg of a strategy template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LegBlueprint {
    /// Buy or sell.
    pub action: LegAction,
    /// Call or put.
    pub option_type: OptionType,
    /// Offset from the reference strike.
    pub strike_offset: i32,
    /// Number of contracts.
    pub quantity: u32,
}

impl LegBlueprint {
    const fn new(
        action: LegAction,
        option_type: OptionType,
        strike_offset: i32,
        quantity: u32,
    ) -> Self {
        Self {
            action,
            option_type,
            strike_offset,
            quantity,
        }
    }

    /// Resolve the strike against a reference strike.
    #[must_use]
    pub fn strike_for(&self, reference_strike: Decimal) -> Decimal {
        reference_strike + Decimal::from(self.strike_offset)
    }
}

/// A blueprint leg resolved to a concrete strike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LegTemplate {
    /// Buy or sell.
    pub action: LegAction,
    /// Call or put.
    pub option_type: OptionType,
    /// Resolved strike.
    pub strike: Decimal,
    /// Number of contracts.
    pub quantity: u32,
}

/// A named strategy template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StrategyBlueprint {
    /// Catalog entry this blueprint belongs to.
    pub kind: StrategyKind,
    /// Display name.
    pub name: &'static str,
    /// Short description.
    pub description: &'static str,
    /// Category.
    pub category: StrategyCategory,
    /// Leg table.
    pub legs: &'static [LegBlueprint],
}

impl StrategyBlueprint {
    /// Resolve every leg against a reference strike.
    #[must_use]
    pub fn legs_for(&self, reference_strike: Decimal) -> Vec<LegTemplate> {
        self.legs
            .iter()
            .map(|leg| LegTemplate {
                action: leg.action,
                option_type: leg.option_type,
                strike: leg.strike_for(reference_strike),
                quantity: leg.quantity,
            })
            .collect()
    }
}

const fn buy(option_type: OptionType, strike_offset: i32) -> LegBlueprint {
    LegBlueprint::new(LegAction::Buy, option_type, strike_offset, 1)
}

const fn sell(option_type: OptionType, strike_offset: i32) -> LegBlueprint {
    LegBlueprint::new(LegAction::Sell, option_type, strike_offset, 1)
}

const fn sell_n(option_type: OptionType, strike_offset: i32, quantity: u32) -> LegBlueprint {
    LegBlueprint::new(LegAction::Sell, option_type, strike_offset, quantity)
}

const BULL_CALL_SPREAD: &[LegBlueprint] = &[buy(Call, -5), sell(Call, 5)];
const BEAR_CALL_SPREAD: &[LegBlueprint] = &[sell(Call, -5), buy(Call, 5)];
const BULL_PUT_SPREAD: &[LegBlueprint] = &[sell(Put, 5), buy(Put, -5)];
const BEAR_PUT_SPREAD: &[LegBlueprint] = &[buy(Put, 5), sell(Put, -5)];

const IRON_CONDOR: &[LegBlueprint] = &[
    sell(Put, -10),
    buy(Put, -15),
    sell(Call, 10),
    buy(Call, 15),
];
const IRON_BUTTERFLY: &[LegBlueprint] = &[
    buy(Put, -10),
    sell(Put, 0),
    sell(Call, 0),
    buy(Call, 10),
];
const LONG_CALL_BUTTERFLY: &[LegBlueprint] = &[buy(Call, -10), sell_n(Call, 0, 2), buy(Call, 10)];
const LONG_PUT_BUTTERFLY: &[LegBlueprint] = &[buy(Put, 10), sell_n(Put, 0, 2), buy(Put, -10)];

const LONG_STRADDLE: &[LegBlueprint] = &[buy(Call, 0), buy(Put, 0)];
const SHORT_STRADDLE: &[LegBlueprint] = &[sell(Call, 0), sell(Put, 0)];
const LONG_STRANGLE: &[LegBlueprint] = &[buy(Call, 5), buy(Put, -5)];
const SHORT_STRANGLE: &[LegBlueprint] = &[sell(Call, 5), sell(Put, -5)];

const JADE_LIZARD: &[LegBlueprint] = &[sell(Put, -10), sell(Call, 5), buy(Call, 15)];
const REVERSE_JADE_LIZARD: &[LegBlueprint] = &[sell(Call, 10), sell(Put, -5), buy(Put, -15)];
const BIG_LIZARD: &[LegBlueprint] = &[
    sell(Put, -5),
    buy(Put, -15),
    sell(Call, 10),
    buy(Call, 20),
];

/// Catalog of supported strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Debit call vertical.
    BullCallSpread,
    /// Credit call vertical.
    BearCallSpread,
    /// Credit put vertical.
    BullPutSpread,
    /// Debit put vertical.
    BearPutSpread,
    /// Short put spread + short call spread.
    IronCondor,
    /// Short ATM straddle with long wings.
    IronButterfly,
    /// 1x2x1 call butterfly.
    LongCallButterfly,
    /// 1x2x1 put butterfly.
    LongPutButterfly,
    /// Long ATM call + put.
    LongStraddle,
    /// Short ATM call + put.
    ShortStraddle,
    /// Long OTM call + put.
    LongStrangle,
    /// Short OTM call + put.
    ShortStrangle,
    /// Short put + short call spread.
    JadeLizard,
    /// Short call + short put spread.
    ReverseJadeLizard,
    /// Short put spread + wide short call spread.
    BigLizard,
}

impl StrategyKind {
    /// Every catalog entry, in display order.
    pub const ALL: [Self; 15] = [
        Self::BullCallSpread,
        Self::BearCallSpread,
        Self::BullPutSpread,
        Self::BearPutSpread,
        Self::IronCondor,
        Self::IronButterfly,
        Self::LongCallButterfly,
        Self::LongPutButterfly,
        Self::LongStraddle,
        Self::ShortStraddle,
        Self::LongStrangle,
        Self::ShortStrangle,
        Self::JadeLizard,
        Self::ReverseJadeLizard,
        Self::BigLizard,
    ];

    /// Stable identifier (matches the serde representation).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BullCallSpread => "bull_call_spread",
            Self::BearCallSpread => "bear_call_spread",
            Self::BullPutSpread => "bull_put_spread",
            Self::BearPutSpread => "bear_put_spread",
            Self::IronCondor => "iron_condor",
            Self::IronButterfly => "iron_butterfly",
            Self::LongCallButterfly => "long_call_butterfly",
            Self::LongPutButterfly => "long_put_butterfly",
            Self::LongStraddle => "long_straddle",
            Self::ShortStraddle => "short_straddle",
            Self::LongStrangle => "long_strangle",
            Self::ShortStrangle => "short_strangle",
            Self::JadeLizard => "jade_lizard",
            Self::ReverseJadeLizard => "reverse_jade_lizard",
            Self::BigLizard => "big_lizard",
        }
    }

    /// Display name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::BullCallSpread => "Bull Call Spread",
            Self::BearCallSpread => "Bear Call Spread",
            Self::BullPutSpread => "Bull Put Spread",
            Self::BearPutSpread => "Bear Put Spread",
            Self::IronCondor => "Iron Condor",
            Self::IronButterfly => "Iron Butterfly",
            Self::LongCallButterfly => "Long Call Butterfly",
            Self::LongPutButterfly => "Long Put Butterfly",
            Self::LongStraddle => "Long Straddle",
            Self::ShortStraddle => "Short Straddle",
            Self::LongStrangle => "Long Strangle",
            Self::ShortStrangle => "Short Strangle",
            Self::JadeLizard => "Jade Lizard",
            Self::ReverseJadeLizard => "Reverse Jade Lizard",
            Self::BigLizard => "Big Lizard",
        }
    }

    /// Short description for the strategy picker.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::BullCallSpread => {
                "Buy a lower call and sell a higher call; profits on a moderate rise"
            }
            Self::BearCallSpread => {
                "Sell a lower call and buy a higher call; collects credit below the short strike"
            }
            Self::BullPutSpread => {
                "Sell a higher put and buy a lower put; collects credit above the short strike"
            }
            Self::BearPutSpread => {
                "Buy a higher put and sell a lower put; profits on a moderate decline"
            }
            Self::IronCondor => {
                "Sell an OTM put spread and an OTM call spread; profits inside the short strikes"
            }
            Self::IronButterfly => "Sell the ATM straddle and buy protective wings",
            Self::LongCallButterfly => {
                "Buy the outer calls and sell two ATM calls; profits near the body"
            }
            Self::LongPutButterfly => {
                "Buy the outer puts and sell two ATM puts; profits near the body"
            }
            Self::LongStraddle => "Buy an ATM call and put; profits on a large move either way",
            Self::ShortStraddle => "Sell an ATM call and put; profits when price stays pinned",
            Self::LongStrangle => "Buy an OTM call and put; cheaper bet on a large move",
            Self::ShortStrangle => "Sell an OTM call and put; profits inside the short strikes",
            Self::JadeLizard => {
                "Sell a put and a call spread; no upside risk when credit exceeds the call width"
            }
            Self::ReverseJadeLizard => {
                "Sell a call and a put spread; no downside risk when credit exceeds the put width"
            }
            Self::BigLizard => "Sell a put spread and a wide call spread",
        }
    }

    /// Category.
    #[must_use]
    pub const fn category(&self) -> StrategyCategory {
        match self {
            Self::BullCallSpread
            | Self::BearCallSpread
            | Self::BullPutSpread
            | Self::BearPutSpread => StrategyCategory::Directional,
            Self::IronCondor
            | Self::IronButterfly
            | Self::LongCallButterfly
            | Self::LongPutButterfly => StrategyCategory::Neutral,
            Self::LongStraddle | Self::ShortStraddle | Self::LongStrangle | Self::ShortStrangle => {
                StrategyCategory::Volatility
            }
            Self::JadeLizard | Self::ReverseJadeLizard | Self::BigLizard => {
                StrategyCategory::Advanced
            }
        }
    }

    /// Leg table.
    #[must_use]
    pub const fn legs(&self) -> &'static [LegBlueprint] {
        match self {
            Self::BullCallSpread => BULL_CALL_SPREAD,
            Self::BearCallSpread => BEAR_CALL_SPREAD,
            Self::BullPutSpread => BULL_PUT_SPREAD,
            Self::BearPutSpread => BEAR_PUT_SPREAD,
            Self::IronCondor => IRON_CONDOR,
            Self::IronButterfly => IRON_BUTTERFLY,
            Self::LongCallButterfly => LONG_CALL_BUTTERFLY,
            Self::LongPutButterfly => LONG_PUT_BUTTERFLY,
            Self::LongStraddle => LONG_STRADDLE,
            Self::ShortStraddle => SHORT_STRADDLE,
            Self::LongStrangle => LONG_STRANGLE,
            Self::ShortStrangle => SHORT_STRANGLE,
            Self::JadeLizard => JADE_LIZARD,
            Self::ReverseJadeLizard => REVERSE_JADE_LIZARD,
            Self::BigLizard => BIG_LIZARD,
        }
    }

    /// Full blueprint for this entry.
    #[must_use]
    pub const fn blueprint(&self) -> StrategyBlueprint {
        StrategyBlueprint {
            kind: *self,
            name: self.name(),
            description: self.description(),
            category: self.category(),
            legs: self.legs(),
        }
    }

    /// Catalog entries belonging to a category.
    pub fn by_category(category: StrategyCategory) -> impl Iterator<Item = Self> {
        Self::ALL.into_iter().filter(move |kind| kind.category() == category)
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = StrategyError;

    /// Accepts the snake_case identifier or the display name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                ' ' | '-' => '_',
                c => c.to_ascii_lowercase(),
            })
            .collect();

        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| StrategyError::UnknownStrategy {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn catalog_has_fifteen_entries() {
        assert_eq!(StrategyKind::ALL.len(), 15);
    }

    #[test]
    fn every_entry_has_legs() {
        for kind in StrategyKind::ALL {
            assert!(!kind.legs().is_empty(), "{kind} has no legs");
        }
    }

    #[test]
    fn category_partition() {
        let count = |c| StrategyKind::by_category(c).count();
        assert_eq!(count(StrategyCategory::Directional), 4);
        assert_eq!(count(StrategyCategory::Neutral), 4);
        assert_eq!(count(StrategyCategory::Volatility), 4);
        assert_eq!(count(StrategyCategory::Advanced), 3);
    }

    #[test]
    fn legs_for_resolves_offsets() {
        let legs = StrategyKind::IronCondor.blueprint().legs_for(dec!(100));
        let strikes: Vec<Decimal> = legs.iter().map(|l| l.strike).collect();
        assert_eq!(strikes, vec![dec!(90), dec!(85), dec!(110), dec!(115)]);
        assert_eq!(legs[0].action, LegAction::Sell);
        assert_eq!(legs[0].option_type, OptionType::Put);
    }

    #[test]
    fn butterfly_body_is_doubled() {
        let legs = StrategyKind::LongCallButterfly.blueprint().legs_for(dec!(50));
        assert_eq!(legs[1].strike, dec!(50));
        assert_eq!(legs[1].quantity, 2);
        assert_eq!(legs[1].action, LegAction::Sell);
    }

    #[test]
    fn parse_identifier_and_name() {
        assert_eq!(
            "iron_condor".parse::<StrategyKind>().unwrap(),
            StrategyKind::IronCondor
        );
        assert_eq!(
            "Reverse Jade Lizard".parse::<StrategyKind>().unwrap(),
            StrategyKind::ReverseJadeLizard
        );
        assert_eq!(
            "long-straddle".parse::<StrategyKind>().unwrap(),
            StrategyKind::LongStraddle
        );
    }

    #[test]
    fn parse_unknown() {
        let err = "covered call".parse::<StrategyKind>().unwrap_err();
        assert_eq!(
            err,
            StrategyError::UnknownStrategy {
                name: "covered call".to_string()
            }
        );
    }

    #[test]
    fn identifier_matches_serde() {
        for kind in StrategyKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }
}
