//! Configuration model loaded from external sources.

use serde::Deserialize;

fn default_busy_timeout_secs() -> u64 {
    30
}

fn default_max_pool_size() -> u32 {
    8
}

#[derive(Clone, Debug, Deserialize)]
/// Settings for the HTTP listener and the SQLite store.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    /// Seconds SQLite waits on a locked database before failing a statement.
    #[serde(default = "default_busy_timeout_secs")]
    pub busy_timeout_secs: u64,
    #[serde(default = "default_max_pool_size")]
    pub max_pool_size: u32,
}
