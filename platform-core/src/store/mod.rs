//! The trader registry and session store.
//!
//! Single source of truth for the synthetic trader universe and the
//! current user. Every view-layer query and mutation goes through one
//! [`TraderStore`] handle so consumers stay consistent; there is no
//! ambient global instance.

use crate::error::{PlatformError, Result};
use crate::generator;
use crate::models::{CurrentUser, MarketType, TradeRecord, TraderId, TraderProfile};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cmp::Ordering;
use std::time::Duration;

/// Simulated network latency applied to [`TraderStore::login`].
pub const DEFAULT_LOGIN_DELAY: Duration = Duration::from_millis(500);

/// Balance credited on a successful login.
pub const LOGIN_STARTING_BALANCE: f64 = 10_000.00;

/// Query configuration for [`TraderStore::query_traders`].
/// Unset keys do not restrict; set keys compose with logical AND.
#[derive(Debug, Clone, Default)]
pub struct TraderFilter {
    /// Exact market match.
    pub market_type: Option<MarketType>,
    /// Case-insensitive substring match against the trader name.
    pub search_text: Option<String>,
    /// Restrict to favorited traders.
    pub only_favorites: bool,
}

/// Outcome of a favorite toggle. An unknown id reports `success: false`
/// rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct FavoriteUpdate {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
}

/// In-process, single-owner registry of trader profiles plus the
/// session-scoped current user.
///
/// Profiles are created once at construction and live for the session;
/// `is_favorite` is the only field mutated afterwards. The execution
/// model is cooperative single-threaded, so no internal locking exists;
/// wrap the store in a mutex if it must cross task boundaries.
pub struct TraderStore {
    traders: Vec<TraderProfile>,
    current_user: Option<CurrentUser>,
    login_delay: Duration,
    rng: StdRng,
}

impl TraderStore {
    /// Creates a store populated with `trader_count` profiles, the
    /// market type round-robined stock/forex/crypto so each market gets
    /// a near-equal share.
    pub fn new(trader_count: usize) -> Self {
        Self::with_rng(trader_count, StdRng::from_entropy())
    }

    /// Like [`TraderStore::new`] but with a caller-provided RNG, for
    /// reproducible test universes.
    pub fn with_rng(trader_count: usize, mut rng: StdRng) -> Self {
        let traders = (0..trader_count)
            .map(|i| {
                let market = MarketType::ALL[i % MarketType::ALL.len()];
                generator::generate_trader_profile(
                    &mut rng,
                    TraderId::new(format!("trader-{}", i)),
                    market,
                )
            })
            .collect::<Vec<_>>();

        info!("TraderStore initialized with {} profiles", traders.len());

        Self {
            traders,
            current_user: None,
            login_delay: DEFAULT_LOGIN_DELAY,
            rng,
        }
    }

    /// Overrides the simulated login latency (tests use zero).
    pub fn with_login_delay(mut self, delay: Duration) -> Self {
        self.login_delay = delay;
        self
    }

    /// Simulated credential check: any non-empty username/password pair
    /// succeeds after the configured latency. There is no real backend.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<&CurrentUser> {
        tokio::time::sleep(self.login_delay).await;

        if username.is_empty() || password.is_empty() {
            return Err(PlatformError::Auth);
        }

        info!("Login accepted for '{}'", username);
        self.current_user = Some(CurrentUser {
            username: username.to_string(),
            aadhaar_id: None,
            balance: LOGIN_STARTING_BALANCE,
            stats: None,
        });
        Ok(self.current_user.as_ref().unwrap())
    }

    /// Creates a fresh account. The Aadhaar id must be exactly 12
    /// decimal digits (format check only, no checksum); it is stored
    /// verbatim. New accounts start with a zero balance.
    pub fn create_account(
        &mut self,
        username: &str,
        _password: &str,
        aadhaar_id: &str,
    ) -> Result<&CurrentUser> {
        if aadhaar_id.len() != 12 || !aadhaar_id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PlatformError::Validation(
                "Invalid Aadhaar number. Must be 12 digits.".to_string(),
            ));
        }

        info!("Account created for '{}'", username);
        self.current_user = Some(CurrentUser {
            username: username.to_string(),
            aadhaar_id: Some(aadhaar_id.to_string()),
            balance: 0.00,
            stats: None,
        });
        Ok(self.current_user.as_ref().unwrap())
    }

    /// Flips the favorite flag on a trader. The only mutation permitted
    /// on a profile after creation.
    pub fn toggle_favorite(&mut self, id: &TraderId) -> FavoriteUpdate {
        match self.traders.iter_mut().find(|t| &t.id == id) {
            Some(trader) => {
                trader.is_favorite = !trader.is_favorite;
                debug!("Favorite toggled for {}: {}", id, trader.is_favorite);
                FavoriteUpdate {
                    success: true,
                    is_favorite: Some(trader.is_favorite),
                }
            }
            None => FavoriteUpdate {
                success: false,
                is_favorite: None,
            },
        }
    }

    /// Queries the trader universe. Results are always sorted by 30-day
    /// PnL descending; the relative order of equal-PnL traders is
    /// unspecified.
    pub fn query_traders(&self, filter: &TraderFilter) -> Vec<&TraderProfile> {
        let search_lower = filter.search_text.as_deref().map(str::to_lowercase);

        let mut results: Vec<&TraderProfile> = self
            .traders
            .iter()
            .filter(|t| match filter.market_type {
                Some(market) => t.market_type == market,
                None => true,
            })
            .filter(|t| match &search_lower {
                Some(needle) => t.name.to_lowercase().contains(needle),
                None => true,
            })
            .filter(|t| !filter.only_favorites || t.is_favorite)
            .collect();

        results.sort_by(|a, b| {
            b.pnl_last_30_days
                .partial_cmp(&a.pnl_last_30_days)
                .unwrap_or(Ordering::Equal)
        });
        results
    }

    /// Looks up a single trader by id.
    pub fn trader(&self, id: &TraderId) -> Option<&TraderProfile> {
        self.traders.iter().find(|t| &t.id == id)
    }

    pub fn trader_count(&self) -> usize {
        self.traders.len()
    }

    /// Regenerates a trade history for the trader, matching their
    /// market. Records are ephemeral: two calls return different sets.
    pub fn trade_history(&mut self, id: &TraderId, count: usize) -> Result<Vec<TradeRecord>> {
        let market = self
            .trader(id)
            .map(|t| t.market_type)
            .ok_or_else(|| PlatformError::NotFound(format!("Trader {}", id)))?;

        Ok((0..count)
            .map(|_| generator::generate_trade_record(&mut self.rng, Some(market)))
            .collect())
    }

    /// Credits the current user's balance and returns the new balance.
    pub fn deposit(&mut self, amount: f64) -> Result<f64> {
        if amount <= 0.0 {
            return Err(PlatformError::Validation(
                "Deposit amount must be positive.".to_string(),
            ));
        }
        let user = self.current_user.as_mut().ok_or(PlatformError::Auth)?;
        user.balance += amount;
        info!("Deposited {:.2}, new balance {:.2}", amount, user.balance);
        Ok(user.balance)
    }

    pub fn current_user(&self) -> Option<&CurrentUser> {
        self.current_user.as_ref()
    }

    /// Installs a user restored from the session cache, skipping the
    /// login flow. The caller guarantees the value came from a slot
    /// written by a previous login/signup.
    pub fn restore_session(&mut self, user: CurrentUser) {
        info!("Session restored for '{}'", user.username);
        self.current_user = Some(user);
    }
}
