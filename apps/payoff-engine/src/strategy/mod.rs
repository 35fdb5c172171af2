//! Multi-Leg Strategy Library
//!
//! - Catalog: fifteen named strategies as static leg tables
//! - Instantiator: binds blueprint legs to option chain quotes
//! - Net premium: debit/credit of a leg set for order staging

mod catalog;
mod instantiate;
mod premium;

pub use catalog::{LegBlueprint, LegTemplate, StrategyBlueprint, StrategyCategory, StrategyKind};
pub use instantiate::{
    InstantiatedStrategy, InstantiationRequest, StrategyInstantiator, instantiate,
};
pub use premium::{PremiumFlow, net_premium};
