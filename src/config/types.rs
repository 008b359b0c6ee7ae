use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fixtures: FixtureConfig,
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Settings for the fixture server standing in for the record backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureConfig {
    /// Start an embedded fixture server when no `client.base_url` is set.
    #[serde(default = "default_fixtures_enabled")]
    pub enabled: bool,
    /// Bind address (host:port). Port 0 picks an ephemeral port.
    #[serde(default = "default_fixture_bind_addr")]
    pub bind_addr: String,
    /// Artificial latency of `GET /records` in milliseconds (default: 650).
    #[serde(default = "default_list_latency_ms")]
    pub list_latency_ms: u64,
    /// Artificial latency of `GET /records/{id}` in milliseconds (default: 1100).
    #[serde(default = "default_detail_latency_ms")]
    pub detail_latency_ms: u64,
    /// Seed for the generated record bodies (default: 123).
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Answer `GET /records` with a 500.
    #[serde(default)]
    pub fail_list: bool,
    /// Record ids whose detail requests answer with a 500.
    #[serde(default)]
    pub fail_ids: Vec<String>,
}

/// HTTP client settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Backend base URL. Empty means "use the embedded fixture server".
    #[serde(default)]
    pub base_url: String,
    /// Total request timeout in seconds (default: 10).
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout_seconds")]
    pub connect_timeout_seconds: u32,
}

/// Query cache settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// How long a resolved entry stays fresh, in seconds (default: 1800).
    #[serde(default = "default_ttl_seconds")]
    pub ttl_seconds: u64,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw/tick interval in milliseconds (default: 100).
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

fn default_fixtures_enabled() -> bool {
    true
}

fn default_fixture_bind_addr() -> String {
    "127.0.0.1:0".to_string()
}

fn default_list_latency_ms() -> u64 {
    650
}

fn default_detail_latency_ms() -> u64 {
    1100
}

fn default_seed() -> u64 {
    123
}

fn default_timeout_seconds() -> u32 {
    10
}

fn default_connect_timeout_seconds() -> u32 {
    5
}

fn default_ttl_seconds() -> u64 {
    30 * 60
}

fn default_tick_ms() -> u64 {
    100
}

impl FixtureConfig {
    pub fn list_latency(&self) -> Duration {
        Duration::from_millis(self.list_latency_ms)
    }

    pub fn detail_latency(&self) -> Duration {
        Duration::from_millis(self.detail_latency_ms)
    }
}

impl CacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_seconds)
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            enabled: default_fixtures_enabled(),
            bind_addr: default_fixture_bind_addr(),
            list_latency_ms: default_list_latency_ms(),
            detail_latency_ms: default_detail_latency_ms(),
            seed: default_seed(),
            fail_list: false,
            fail_ids: Vec::new(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout_seconds: default_timeout_seconds(),
            connect_timeout_seconds: default_connect_timeout_seconds(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: default_ttl_seconds(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
        }
    }
}
