use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

/// Connection settings for the dashboard API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the dashboard server (e.g., "http://127.0.0.1:8082").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Total request timeout in seconds. Unset means no limit beyond the
    /// connection timeout.
    #[serde(default)]
    pub timeout_seconds: Option<u32>,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Raw `Cookie` header value carrying the session, if any.
    #[serde(default)]
    pub session_cookie: Option<String>,
}

/// Snapshot store behaviour.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub refresh_mode: RefreshMode,
}

/// How the core refresh dispatches its two requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefreshMode {
    /// Profile first, then count. Latency is the sum of both round trips.
    #[default]
    Sequential,
    /// Both at once, written together after both succeed.
    Concurrent,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8082".to_string()
}

fn default_connect_timeout() -> u32 {
    5
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: None,
            connect_timeout_seconds: default_connect_timeout(),
            session_cookie: None,
        }
    }
}
