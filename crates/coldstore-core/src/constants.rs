//! Workspace-wide constants and defaults.

/// Default lookback horizon for coldness scoring (days).
pub const DEFAULT_LOOKBACK_DAYS: u32 = 90;

/// Recent-activity window used by the coldness ratio (days).
pub const DEFAULT_RECENT_WINDOW_DAYS: u32 = 30;

/// Window for the access-velocity moving average (days).
pub const DEFAULT_VELOCITY_WINDOW_DAYS: u32 = 7;

/// Minimum confidence for a policy to be considered safe.
pub const DEFAULT_SAFE_CONFIDENCE_MIN: f64 = 0.9;

/// Risk score at or above which a policy requires approval.
pub const DEFAULT_SAFE_RISK_MAX: f64 = 0.3;

/// Dependents scoring strictly above this count as brittle.
pub const DEFAULT_BRITTLE_THRESHOLD: f64 = 0.0;

/// Upper bound on raw query text accepted from connectors (1 MB).
pub const MAX_QUERY_TEXT_BYTES: usize = 1_000_000;

/// Length of a query fingerprint in hex characters (64 bits).
pub const FINGERPRINT_HEX_LEN: usize = 16;

/// Default pagination batch size for query-log extraction.
pub const DEFAULT_EXTRACTION_BATCH_SIZE: usize = 1000;
