//! Synthetic data generators.
//!
//! Everything the platform displays is fabricated here: trader profiles
//! with bounded random-walk equity curves, and per-view trade records.
//! Generators are pure functions of their inputs plus the supplied RNG,
//! so tests can seed a [`StdRng`](rand::rngs::StdRng) and get stable
//! output. They never fail.

use crate::models::{
    Coordinates, MarketType, PerformancePoint, PositionMode, TradeId, TradeRecord, TradeStatus,
    TraderId, TraderProfile, TraderStatus,
};
use chrono::{Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

const NAMES_GLOBAL: [&str; 8] = [
    "Alex Thompson",
    "Sarah Chen",
    "Michael Rodriguez",
    "David Kim",
    "Emma Wilson",
    "James Smith",
    "Maria Garcia",
    "Robert Johnson",
];

const NAMES_INDIAN: [&str; 8] = [
    "Aarav Patel",
    "Vihaan Sharma",
    "Aditya Verma",
    "Sai Iyer",
    "Reyansh Gupta",
    "Arjun Reddy",
    "Vivaan Malhotra",
    "Kabir Singh",
];

const CITIES_GLOBAL: [(&str, f64, f64); 7] = [
    ("New York, USA", 40.7128, -74.0060),
    ("London, UK", 51.5074, -0.1278),
    ("Tokyo, Japan", 35.6762, 139.6503),
    ("Singapore", 1.3521, 103.8198),
    ("Berlin, Germany", 52.5200, 13.4050),
    ("Toronto, Canada", 43.6510, -79.3470),
    ("Dubai, UAE", 25.2048, 55.2708),
];

const CITIES_INDIAN: [(&str, f64, f64); 8] = [
    ("Mumbai, India", 19.0760, 72.8777),
    ("Bangalore, India", 12.9716, 77.5946),
    ("Delhi, India", 28.7041, 77.1025),
    ("Hyderabad, India", 17.3850, 78.4867),
    ("Chennai, India", 13.0827, 80.2707),
    ("Pune, India", 18.5204, 73.8567),
    ("Kolkata, India", 22.5726, 88.3639),
    ("Ahmedabad, India", 23.0225, 72.5714),
];

const STOCK_SYMBOLS: [&str; 8] = [
    "RELIANCE",
    "TCS",
    "INFY",
    "HDFCBANK",
    "ICICIBANK",
    "SBIN",
    "TATAMOTORS",
    "ADANIENT",
];

const FOREX_SYMBOLS: [&str; 6] = [
    "EUR/USD", "GBP/USD", "USD/JPY", "AUD/USD", "USD/CAD", "EUR/GBP",
];

const CRYPTO_SYMBOLS: [&str; 6] = [
    "BTC/USDT",
    "ETH/USDT",
    "SOL/USDT",
    "BNB/USDT",
    "DOGE/USDT",
    "XRP/USDT",
];

/// Follower cap applied to every generated profile.
pub const MAX_FOLLOWERS: u32 = 500;

/// Equity curve length: 30 trailing days plus today.
pub const GRAPH_POINTS: usize = 31;

/// Starting value of the performance random walk.
pub const GRAPH_START_VALUE: f64 = 10_000.0;

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Builds the 31-point equity curve: one point per day from 30 days ago
/// through today, compounding a factor drawn from [0.96, 1.06) at each
/// step. The factor bound keeps values positive without hard clamping.
pub fn generate_performance_graph(rng: &mut impl Rng) -> Vec<PerformancePoint> {
    let today = Utc::now().date_naive();
    let mut value = GRAPH_START_VALUE;
    let mut graph = Vec::with_capacity(GRAPH_POINTS);

    for offset in (0..GRAPH_POINTS as i64).rev() {
        value *= rng.gen_range(0.96..1.06);
        graph.push(PerformancePoint {
            date: today - Duration::days(offset),
            value: round2(value),
        });
    }

    graph
}

/// Generates one trader profile for the given market.
///
/// Stock traders draw from the Indian name/city pools and quote in
/// rupees; forex and crypto traders draw from the combined global and
/// Indian pools and quote in dollars.
pub fn generate_trader_profile(
    rng: &mut impl Rng,
    id: TraderId,
    market_type: MarketType,
) -> TraderProfile {
    let (names, cities, currency_symbol) = match market_type {
        MarketType::Stock => (NAMES_INDIAN.to_vec(), CITIES_INDIAN.to_vec(), "₹"),
        // Forex and crypto mix the global and Indian pools.
        MarketType::Forex | MarketType::Crypto => {
            let mut names = NAMES_GLOBAL.to_vec();
            names.extend_from_slice(&NAMES_INDIAN);
            let mut cities = CITIES_GLOBAL.to_vec();
            cities.extend_from_slice(&CITIES_INDIAN);
            (names, cities, "$")
        }
    };

    let name = *names.choose(rng).unwrap();
    let (city, lat, lng) = *cities.choose(rng).unwrap();

    let is_full = rng.gen_bool(0.2);
    let current_followers = if is_full {
        MAX_FOLLOWERS
    } else {
        rng.gen_range(0..450)
    };

    let avatar_url = format!("https://api.dicebear.com/7.x/avataaars/svg?seed={}", id);

    TraderProfile {
        id,
        name: name.to_string(),
        location: city.to_string(),
        coordinates: Coordinates { lat, lng },
        currency_symbol: currency_symbol.to_string(),
        avatar_url,
        market_type,
        status: if rng.gen_bool(0.7) {
            TraderStatus::Online
        } else {
            TraderStatus::Offline
        },
        current_followers,
        max_followers: MAX_FOLLOWERS,
        pnl_last_30_days: round2(rng.gen_range(-2000.0..8000.0)),
        roi: round2(rng.gen_range(-10.0..90.0)),
        aum: round2(rng.gen_range(10_000.0..510_000.0)),
        max_drawdown: round2(rng.gen_range(-20.0..0.0)),
        sharpe_ratio: Some(round2(rng.gen_range(0.0..3.0))),
        performance_graph: generate_performance_graph(rng),
        is_favorite: rng.gen_bool(0.2),
        can_copy: true,
        can_mock: true,
    }
}

/// Generates one trade record.
///
/// Without a forced market the split is weighted 40% crypto, 30% forex,
/// 30% stock. Closed-only fields are populated iff the coin flip lands
/// on closed.
pub fn generate_trade_record(
    rng: &mut impl Rng,
    forced_market: Option<MarketType>,
) -> TradeRecord {
    let market_type = forced_market.unwrap_or_else(|| {
        let roll: f64 = rng.gen();
        if roll < 0.4 {
            MarketType::Crypto
        } else if roll < 0.7 {
            MarketType::Forex
        } else {
            MarketType::Stock
        }
    });

    let symbol = match market_type {
        MarketType::Stock => *STOCK_SYMBOLS.choose(rng).unwrap(),
        MarketType::Forex => *FOREX_SYMBOLS.choose(rng).unwrap(),
        MarketType::Crypto => *CRYPTO_SYMBOLS.choose(rng).unwrap(),
    };

    let now = Utc::now();
    let is_open = rng.gen_bool(0.5);
    let opened_offset_ms = (rng.gen_range(0.0..10.0) * 86_400_000.0) as i64;

    TradeRecord {
        id: TradeId::generate(),
        market_type,
        symbol: symbol.to_string(),
        position_mode: if rng.gen_bool(0.5) {
            PositionMode::Long
        } else {
            PositionMode::Short
        },
        cross_margin: true,
        status: if is_open {
            TradeStatus::Open
        } else {
            TradeStatus::Closed
        },
        opened_time: now - Duration::milliseconds(opened_offset_ms),
        closed_time: (!is_open).then_some(now),
        entry_price: round2(rng.gen_range(100.0..2100.0)),
        average_close_price: (!is_open).then(|| round2(rng.gen_range(100.0..2100.0))),
        max_open_interest: round2(rng.gen_range(0.0..5.0)),
        closed_volume: round2(rng.gen_range(0.0..10.0)),
        closing_pnl: round2(rng.gen_range(-50.0..450.0)),
    }
}
