use super::ids::TraderId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Market segment a trader operates in. Fixed at creation; partitions
/// the trader universe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketType {
    Stock,
    Forex,
    Crypto,
}

impl MarketType {
    /// All markets, in the order used for round-robin distribution.
    pub const ALL: [MarketType; 3] = [MarketType::Stock, MarketType::Forex, MarketType::Crypto];
}

impl fmt::Display for MarketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MarketType::Stock => "stock",
            MarketType::Forex => "forex",
            MarketType::Crypto => "crypto",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraderStatus {
    Online,
    Offline,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// One sample of a trader's 30-day equity curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformancePoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// A synthetic lead-trader profile.
///
/// Created once at store initialization and alive for the session;
/// `is_favorite` is the only field mutated afterwards, and only through
/// [`TraderStore::toggle_favorite`](crate::store::TraderStore::toggle_favorite).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraderProfile {
    pub id: TraderId,
    pub name: String,
    pub location: String,
    pub coordinates: Coordinates,
    pub currency_symbol: String,
    pub avatar_url: String,
    pub market_type: MarketType,
    pub status: TraderStatus,
    pub current_followers: u32,
    pub max_followers: u32,
    pub pnl_last_30_days: f64,
    pub roi: f64,
    pub aum: f64,
    pub max_drawdown: f64,
    pub sharpe_ratio: Option<f64>,
    pub performance_graph: Vec<PerformancePoint>,
    pub is_favorite: bool,
    // Reserved for future gating; generation policy keeps both true.
    pub can_copy: bool,
    pub can_mock: bool,
}

impl TraderProfile {
    /// Whether the trader has hit the follower cap.
    pub fn is_full(&self) -> bool {
        self.current_followers >= self.max_followers
    }
}
