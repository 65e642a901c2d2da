//! HTTP boundary over the trader store.
//!
//! JSON API consumed by the dashboard client. Every route goes through
//! the shared [`TraderStore`] handle; errors are mapped to statuses
//! here and never panic the server. The favorite toggle is the one
//! deliberate exception to the error mapping: an unknown id reports
//! `success: false` with 200.

use analytics::Analytics;
use assistant_gateway::{Assistant, FallbackAssistant};
use axum::extract::{Path as UrlPath, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use log::info;
use platform_core::models::{MarketType, TraderId};
use platform_core::{PlatformError, TraderFilter, TraderStore};
use serde::Deserialize;
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;

use crate::session;

// App State shared with all routes.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<TraderStore>>,
    pub assistant: Arc<Mutex<FallbackAssistant<Box<dyn Assistant>>>>,
    pub analytics: Arc<dyn Analytics>,
    pub session_path: Arc<PathBuf>,
    pub trade_history_len: usize,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/auth/login", post(login))
        .route("/auth/signup", post(signup))
        .route("/session", get(current_session))
        .route("/traders", get(list_traders))
        .route("/traders/:id", get(trader_detail))
        .route("/traders/:id/trades", get(trade_history))
        .route("/traders/:id/favorite", post(toggle_favorite))
        .route("/traders/:id/risk", get(risk_assessment))
        .route("/traders/:id/insight", get(trade_insight))
        .route("/wallet/deposit", post(deposit))
        .route("/chat", post(chat))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn serve(state: AppState, port: u16) -> anyhow::Result<()> {
    let app = router(state);
    let addr = format!("0.0.0.0:{}", port);
    info!("Platform API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Maps a core error to a response and records it.
fn error_response(state: &AppState, err: &PlatformError, screen: &str) -> Response {
    state.analytics.error_occurred(err.kind(), screen);
    let status = match err {
        PlatformError::Auth => StatusCode::UNAUTHORIZED,
        PlatformError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        PlatformError::NotFound(_) => StatusCode::NOT_FOUND,
        PlatformError::Upstream(_) => StatusCode::BAD_GATEWAY,
    };
    let body = json!({ "error": { "type": err.kind(), "message": err.to_string() } });
    (status, Json(body)).into_response()
}

async fn health_check() -> &'static str {
    "OK"
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

async fn login(State(state): State<AppState>, Json(req): Json<LoginRequest>) -> Response {
    let mut store = state.store.lock().await;
    match store.login(&req.username, &req.password).await {
        Ok(user) => {
            let user = user.clone();
            drop(store);
            session::save(&state.session_path, &user);
            state.analytics.login("standard");
            state.analytics.form_submitted("login", "success");
            Json(json!({ "user": user })).into_response()
        }
        Err(e) => {
            state.analytics.form_submitted("login", "failure");
            error_response(&state, &e, "login")
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
    pub aadhaar_id: String,
}

async fn signup(State(state): State<AppState>, Json(req): Json<SignupRequest>) -> Response {
    let mut store = state.store.lock().await;
    match store.create_account(&req.username, &req.password, &req.aadhaar_id) {
        Ok(user) => {
            let user = user.clone();
            drop(store);
            session::save(&state.session_path, &user);
            state.analytics.sign_up("standard");
            state.analytics.form_submitted("signup", "success");
            Json(json!({ "user": user })).into_response()
        }
        Err(e) => {
            state.analytics.form_submitted("signup", "failure");
            error_response(&state, &e, "signup")
        }
    }
}

async fn current_session(State(state): State<AppState>) -> Response {
    let store = state.store.lock().await;
    match store.current_user() {
        Some(user) => Json(json!({ "user": user.clone() })).into_response(),
        None => error_response(&state, &PlatformError::Auth, "session"),
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct TradersQuery {
    pub market: Option<MarketType>,
    pub search: Option<String>,
    pub favorites: Option<bool>,
}

async fn list_traders(
    State(state): State<AppState>,
    Query(query): Query<TradersQuery>,
) -> Response {
    state.analytics.page_view("/dashboard");
    let filter = TraderFilter {
        market_type: query.market,
        search_text: query.search,
        only_favorites: query.favorites.unwrap_or(false),
    };

    let store = state.store.lock().await;
    let traders: Vec<_> = store
        .query_traders(&filter)
        .into_iter()
        .cloned()
        .collect();
    Json(traders).into_response()
}

async fn trader_detail(State(state): State<AppState>, UrlPath(id): UrlPath<String>) -> Response {
    state.analytics.page_view("/detail");
    let store = state.store.lock().await;
    match store.trader(&TraderId::new(id.as_str())) {
        Some(trader) => Json(trader.clone()).into_response(),
        None => error_response(
            &state,
            &PlatformError::NotFound(format!("Trader {}", id)),
            "detail",
        ),
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct TradesQuery {
    pub count: Option<usize>,
}

async fn trade_history(
    State(state): State<AppState>,
    UrlPath(id): UrlPath<String>,
    Query(query): Query<TradesQuery>,
) -> Response {
    let count = query.count.unwrap_or(state.trade_history_len);
    let mut store = state.store.lock().await;
    match store.trade_history(&TraderId::new(id.as_str()), count) {
        Ok(trades) => Json(trades).into_response(),
        Err(e) => error_response(&state, &e, "detail"),
    }
}

async fn toggle_favorite(State(state): State<AppState>, UrlPath(id): UrlPath<String>) -> Response {
    state.analytics.button_click("favorite_toggle", "dashboard");
    let mut store = state.store.lock().await;
    let update = store.toggle_favorite(&TraderId::new(id.as_str()));
    Json(update).into_response()
}

#[derive(Debug, Deserialize)]
pub struct DepositRequest {
    pub amount: f64,
}

async fn deposit(State(state): State<AppState>, Json(req): Json<DepositRequest>) -> Response {
    state.analytics.feature_opened("deposit_drawer");
    let mut store = state.store.lock().await;
    match store.deposit(req.amount) {
        Ok(balance) => {
            if let Some(user) = store.current_user() {
                session::save(&state.session_path, user);
            }
            Json(json!({ "balance": balance })).into_response()
        }
        Err(e) => error_response(&state, &e, "deposit"),
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Chat never fails from the client's perspective: upstream errors are
/// absorbed by the fallback wrapper and come back as the offline reply.
async fn chat(State(state): State<AppState>, Json(req): Json<ChatRequest>) -> Response {
    state.analytics.feature_opened("chatbot");
    let mut assistant = state.assistant.lock().await;
    let reply = assistant.chat(&req.message).await;
    Json(json!({ "reply": reply })).into_response()
}

/// AI risk assessment for a trader, fed the profile as structured data.
/// Upstream failures come back as the canned unavailability string.
async fn risk_assessment(State(state): State<AppState>, UrlPath(id): UrlPath<String>) -> Response {
    let profile = {
        let store = state.store.lock().await;
        match store.trader(&TraderId::new(id.as_str())) {
            Some(trader) => serde_json::to_value(trader).unwrap_or_default(),
            None => {
                return error_response(
                    &state,
                    &PlatformError::NotFound(format!("Trader {}", id)),
                    "detail",
                )
            }
        }
    };

    let prompt = assistant_gateway::prompts::risk_assessment_prompt(&profile);
    let mut assistant = state.assistant.lock().await;
    let report = assistant
        .chat_or(&prompt, assistant_gateway::prompts::RISK_UNAVAILABLE)
        .await;
    Json(json!({ "report": report })).into_response()
}

/// AI market insight built from a fresh trade snapshot for the trader.
async fn trade_insight(State(state): State<AppState>, UrlPath(id): UrlPath<String>) -> Response {
    let snapshot = {
        let mut store = state.store.lock().await;
        match store.trade_history(&TraderId::new(id.as_str()), state.trade_history_len) {
            Ok(trades) => serde_json::to_value(trades).unwrap_or_default(),
            Err(e) => return error_response(&state, &e, "detail"),
        }
    };

    let prompt = assistant_gateway::prompts::trade_insight_prompt(&snapshot);
    let mut assistant = state.assistant.lock().await;
    let insight = assistant
        .chat_or(&prompt, assistant_gateway::prompts::INSIGHT_UNAVAILABLE)
        .await;
    Json(json!({ "insight": insight })).into_response()
}

/// Restores a cached session into the store, if the slot holds one.
pub fn restore_cached_session(store: &mut TraderStore, path: &std::path::Path) {
    if let Some(user) = session::load(path) {
        store.restore_session(user);
    }
}

#[cfg(test)]
mod tests;
