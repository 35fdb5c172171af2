//! Risk analysis configuration.

use serde::{Deserialize, Serialize};

/// Risk analysis configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskConfig {
    /// Report `Unbounded` extremes from the slope at domain edges that lie
    /// beyond the strikes.
    ///
    /// When disabled, max profit and max loss are the sampled extremes.
    #[serde(default)]
    pub detect_unbounded: bool,
}
