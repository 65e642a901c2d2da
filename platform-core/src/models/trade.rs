use super::ids::TradeId;
use super::trader::MarketType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionMode {
    Long,
    Short,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeStatus {
    Open,
    Closed,
}

/// A single synthetic trade row, generated on demand for detail views.
///
/// Records carry no identity across requests: every render draws a
/// fresh randomized set, so two reads of the same trader's history will
/// not agree. That instability is inherited behavior, kept on purpose.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeRecord {
    pub id: TradeId,
    pub market_type: MarketType,
    pub symbol: String,
    pub position_mode: PositionMode,
    pub cross_margin: bool,
    pub status: TradeStatus,
    pub opened_time: DateTime<Utc>,
    /// `None` iff the trade is still open.
    pub closed_time: Option<DateTime<Utc>>,
    pub entry_price: f64,
    /// `None` iff the trade is still open.
    pub average_close_price: Option<f64>,
    pub max_open_interest: f64,
    pub closed_volume: f64,
    pub closing_pnl: f64,
}

impl TradeRecord {
    pub fn is_open(&self) -> bool {
        self.status == TradeStatus::Open
    }
}
