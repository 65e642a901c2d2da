mod api;
mod args;
mod config;
mod session;

use analytics::LogSink;
use api::AppState;
use args::Args;
use assistant_gateway::{Assistant, FallbackAssistant, GeminiClient};
use clap::Parser;
use config::ServerConfig;
use log::{info, warn};
use platform_core::TraderStore;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut config = ServerConfig::load(&args.config)?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();
    info!("=== Platform Server Starting ===");
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(count) = args.trader_count {
        config.trader_count = count;
    }

    // Hydrate the trader universe and restore any cached session.
    let mut store = TraderStore::new(config.trader_count)
        .with_login_delay(Duration::from_millis(config.login_delay_ms));
    let session_path = PathBuf::from(&config.session_cache_path);
    api::restore_cached_session(&mut store, &session_path);

    if config.gemini_api_key.is_empty() {
        warn!("No Gemini API key configured; chat will serve the offline reply");
    }
    let client = GeminiClient::new(config.gemini_api_key.clone(), config.gemini_model.clone());
    let assistant = FallbackAssistant::new(Box::new(client) as Box<dyn Assistant>);

    let state = AppState {
        store: Arc::new(Mutex::new(store)),
        assistant: Arc::new(Mutex::new(assistant)),
        analytics: Arc::new(LogSink),
        session_path: Arc::new(session_path),
        trade_history_len: config.trade_history_len,
    };

    api::serve(state, config.port).await
}
