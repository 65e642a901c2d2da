use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
    pub log_level: String,

    /// Traders generated at startup, round-robined across markets.
    pub trader_count: usize,
    /// Trade records regenerated per detail-view request.
    pub trade_history_len: usize,
    /// Simulated latency on the login endpoint.
    pub login_delay_ms: u64,

    /// Where the current user is cached between runs. Not durability,
    /// just a skip-the-login-form convenience.
    pub session_cache_path: String,

    pub gemini_api_key: String,
    pub gemini_model: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            log_level: "info".to_string(),
            trader_count: 60,
            trade_history_len: 8,
            login_delay_ms: 500,
            session_cache_path: "session_cache.json".to_string(),
            // Key comes from config.toml or PLATFORM_GEMINI_API_KEY;
            // an empty key degrades chat to the offline reply.
            gemini_api_key: String::new(),
            gemini_model: "gemini-pro".to_string(),
        }
    }
}

impl ServerConfig {
    /// Loads config.toml (optional) layered over defaults, then any
    /// PLATFORM_* environment overrides.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let cfg = ::config::Config::builder()
            .add_source(::config::File::with_name(path).required(false))
            .add_source(::config::Environment::with_prefix("PLATFORM"))
            .build()?;
        Ok(cfg.try_deserialize()?)
    }
}
