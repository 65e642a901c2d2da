use platform_core::models::{MarketType, TraderId};
use platform_core::{PlatformError, TraderFilter, TraderStore};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

// End-to-end walk through a user session: signup, browse, favorite,
// inspect a trader, deposit. Mirrors the path the view layer takes.
#[tokio::test]
async fn test_full_session_flow() {
    let mut store = TraderStore::with_rng(60, StdRng::seed_from_u64(1))
        .with_login_delay(Duration::from_millis(0));

    // Signup with a malformed Aadhaar is rejected and leaves no session.
    let err = store.create_account("dave", "pw", "12ab").unwrap_err();
    assert!(matches!(err, PlatformError::Validation(_)));
    assert!(store.current_user().is_none());

    // A valid signup starts at zero balance.
    store.create_account("dave", "pw", "999988887777").unwrap();
    assert_eq!(store.current_user().unwrap().balance, 0.00);

    // Dashboard: 60 traders, every market represented.
    let all = store.query_traders(&TraderFilter::default());
    assert_eq!(all.len(), 60);
    for market in MarketType::ALL {
        assert!(all.iter().any(|t| t.market_type == market));
    }

    // Favorite the top crypto trader, then re-query: both the filtered
    // and unfiltered views must see the flip.
    let top_crypto = store
        .query_traders(&TraderFilter {
            market_type: Some(MarketType::Crypto),
            ..Default::default()
        })
        .first()
        .map(|t| t.id.clone())
        .unwrap();
    let update = store.toggle_favorite(&top_crypto);
    assert!(update.success);

    let favorites = store.query_traders(&TraderFilter {
        only_favorites: true,
        ..Default::default()
    });
    let expected = update.is_favorite.unwrap();
    assert_eq!(
        favorites.iter().any(|t| t.id == top_crypto),
        expected
    );
    assert_eq!(
        store.trader(&top_crypto).unwrap().is_favorite,
        expected
    );

    // Detail view: trade history stays in the trader's market.
    let trades = store.trade_history(&top_crypto, 8).unwrap();
    assert_eq!(trades.len(), 8);
    assert!(trades
        .iter()
        .all(|t| t.market_type == MarketType::Crypto));

    // Wallet deposit credits the session balance.
    let balance = store.deposit(500.0).unwrap();
    assert_eq!(balance, 500.0);
}

#[tokio::test]
async fn test_login_replaces_signup_session() {
    let mut store =
        TraderStore::with_rng(3, StdRng::seed_from_u64(2)).with_login_delay(Duration::from_millis(0));

    store.create_account("erin", "pw", "111122223333").unwrap();
    assert_eq!(store.current_user().unwrap().balance, 0.00);

    // Logging in afterwards overwrites the single session slot.
    store.login("erin", "pw").await.unwrap();
    let user = store.current_user().unwrap();
    assert_eq!(user.balance, 10_000.00);
    assert!(user.aadhaar_id.is_none());
}

#[test]
fn test_unknown_trader_lookups_are_soft_failures() {
    let mut store = TraderStore::with_rng(3, StdRng::seed_from_u64(3));
    let ghost = TraderId::new("trader-404");

    assert!(store.trader(&ghost).is_none());
    assert!(!store.toggle_favorite(&ghost).success);
    assert!(matches!(
        store.trade_history(&ghost, 8),
        Err(PlatformError::NotFound(_))
    ));
}
