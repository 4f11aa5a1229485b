//! Heat-map (access tracker) configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Windows used by coldness and velocity scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatConfig {
    /// Full horizon for the coldness ratio (days).
    pub lookback_days: u32,
    /// Recent-activity window for the coldness ratio (days).
    pub recent_window_days: u32,
    /// Moving-average window for access velocity (days).
    pub velocity_window_days: u32,
}

impl Default for HeatConfig {
    fn default() -> Self {
        Self {
            lookback_days: constants::DEFAULT_LOOKBACK_DAYS,
            recent_window_days: constants::DEFAULT_RECENT_WINDOW_DAYS,
            velocity_window_days: constants::DEFAULT_VELOCITY_WINDOW_DAYS,
        }
    }
}
