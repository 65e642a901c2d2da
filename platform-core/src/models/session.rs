use serde::{Deserialize, Serialize};

/// Aggregate performance figures shown on the profile page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    pub pnl: f64,
    pub win_rate: f64,
    pub total_trades: u32,
}

impl Default for UserStats {
    fn default() -> Self {
        Self {
            pnl: 0.0,
            win_rate: 0.0,
            total_trades: 0,
        }
    }
}

/// The session-scoped user. At most one exists per store; it is created
/// by login/signup and lives until the process ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub username: String,
    /// Stored verbatim when provided at signup. Format-validated only
    /// (12 decimal digits, no checksum). Known to be unmasked; the
    /// shape is kept for compatibility.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aadhaar_id: Option<String>,
    pub balance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<UserStats>,
}

impl CurrentUser {
    /// Stats with the documented defaults applied when absent.
    pub fn stats_or_default(&self) -> UserStats {
        self.stats.unwrap_or_default()
    }
}
