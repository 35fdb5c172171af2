//! Option legs and chain quotes.
//!
//! This module provides:
//! - The validated `Leg` value object and its expiration payoff
//! - `LegInput` for manually entered legs
//! - `OptionQuote` for option-chain data consumed by the instantiator

mod leg;
mod quote;

pub use leg::{Leg, LegAction, LegInput, OptionType};
pub use quote::OptionQuote;
