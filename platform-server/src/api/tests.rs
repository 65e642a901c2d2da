use super::*;
use analytics::NoopSink;
use assistant_gateway::ScriptedAssistant;
use axum::body::to_bytes;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::Value;
use std::time::Duration;

fn test_state(assistant: ScriptedAssistant) -> AppState {
    let store = TraderStore::with_rng(60, StdRng::seed_from_u64(5))
        .with_login_delay(Duration::from_millis(0));
    let session_path = std::env::temp_dir().join(format!(
        "api_test_session_{}_{:p}.json",
        std::process::id(),
        &store
    ));
    AppState {
        store: Arc::new(Mutex::new(store)),
        assistant: Arc::new(Mutex::new(FallbackAssistant::new(
            Box::new(assistant) as Box<dyn Assistant>
        ))),
        analytics: Arc::new(NoopSink),
        session_path: Arc::new(session_path),
        trade_history_len: 8,
    }
}

async fn body_json(resp: Response) -> Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_login_success_sets_session_and_writes_slot() {
    let state = test_state(ScriptedAssistant::new());

    let resp = login(
        State(state.clone()),
        Json(LoginRequest {
            username: "alice".to_string(),
            password: "pw".to_string(),
        }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["user"]["username"], "alice");
    assert_eq!(body["user"]["balance"], 10000.0);

    assert!(state.store.lock().await.current_user().is_some());
    assert!(state.session_path.exists());
    let _ = std::fs::remove_file(&*state.session_path);
}

#[tokio::test]
async fn test_login_empty_credentials_is_401() {
    let state = test_state(ScriptedAssistant::new());
    let resp = login(
        State(state),
        Json(LoginRequest {
            username: String::new(),
            password: "pw".to_string(),
        }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(resp).await;
    assert_eq!(body["error"]["type"], "auth_error");
    assert_eq!(body["error"]["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_signup_rejects_malformed_aadhaar_with_422() {
    let state = test_state(ScriptedAssistant::new());
    let resp = signup(
        State(state),
        Json(SignupRequest {
            username: "bob".to_string(),
            password: "pw".to_string(),
            aadhaar_id: "123".to_string(),
        }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(resp).await;
    assert_eq!(body["error"]["type"], "validation_error");
}

#[tokio::test]
async fn test_list_traders_market_filter_and_ordering() {
    let state = test_state(ScriptedAssistant::new());
    let resp = list_traders(
        State(state),
        Query(TradersQuery {
            market: Some(MarketType::Crypto),
            ..Default::default()
        }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    let traders = body.as_array().unwrap();
    assert_eq!(traders.len(), 20);
    for t in traders {
        assert_eq!(t["market_type"], "crypto");
    }
    for pair in traders.windows(2) {
        let a = pair[0]["pnl_last_30_days"].as_f64().unwrap();
        let b = pair[1]["pnl_last_30_days"].as_f64().unwrap();
        assert!(a >= b);
    }
}

#[tokio::test]
async fn test_toggle_favorite_unknown_id_is_soft_failure() {
    let state = test_state(ScriptedAssistant::new());
    let resp = toggle_favorite(State(state), UrlPath("trader-999".to_string())).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["success"], false);
    assert!(body.get("is_favorite").is_none());
}

#[tokio::test]
async fn test_trade_history_unknown_trader_is_404() {
    let state = test_state(ScriptedAssistant::new());
    let resp = trade_history(
        State(state),
        UrlPath("trader-999".to_string()),
        Query(TradesQuery::default()),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_chat_failure_returns_offline_reply_with_200() {
    let state = test_state(ScriptedAssistant::new().failure(500));
    let resp = chat(
        State(state),
        Json(ChatRequest {
            message: "hello".to_string(),
        }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(
        body["reply"],
        assistant_gateway::prompts::OFFLINE_REPLY
    );
}

#[tokio::test]
async fn test_risk_assessment_falls_back_when_upstream_is_down() {
    let state = test_state(ScriptedAssistant::new().failure(500));
    let resp = risk_assessment(State(state), UrlPath("trader-0".to_string())).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["report"], assistant_gateway::prompts::RISK_UNAVAILABLE);
}

#[tokio::test]
async fn test_trade_insight_for_unknown_trader_is_404() {
    let state = test_state(ScriptedAssistant::new().reply("insight"));
    let resp = trade_insight(State(state), UrlPath("trader-999".to_string())).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_session_endpoint_requires_user() {
    let state = test_state(ScriptedAssistant::new());
    let resp = current_session(State(state.clone())).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    state
        .store
        .lock()
        .await
        .create_account("carol", "pw", "123456789012")
        .unwrap();
    let resp = current_session(State(state)).await;
    assert_eq!(resp.status(), StatusCode::OK);
}
