//! Policy-synthesis configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Thresholds and pricing inputs for policy synthesis.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Minimum confidence for `is_safe`.
    pub safe_confidence_min: f64,
    /// Risk at or above this requires approval.
    pub safe_risk_max: f64,
    /// Dependents scoring strictly above this count as brittle.
    pub brittle_threshold: f64,
    /// Caller-supplied storage price. 0.0 disables the USD estimate;
    /// the core aggregates bytes either way.
    pub usd_per_gb_month: f64,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            safe_confidence_min: constants::DEFAULT_SAFE_CONFIDENCE_MIN,
            safe_risk_max: constants::DEFAULT_SAFE_RISK_MAX,
            brittle_threshold: constants::DEFAULT_BRITTLE_THRESHOLD,
            usd_per_gb_month: 0.0,
        }
    }
}
