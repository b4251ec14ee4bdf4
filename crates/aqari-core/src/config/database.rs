//! PostgreSQL pool settings.

use serde::{Deserialize, Serialize};

/// Connection pool settings for the Aqari store.
///
/// The dashboard serves one operator, so the defaults keep the pool
/// small; a handful of connections covers a scan plus a few concurrent
/// page loads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL.
    pub url: String,
    /// Upper bound on pooled connections.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Connections kept open while idle.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Seconds to wait when acquiring a connection.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
    /// Seconds before an idle connection is dropped.
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_seconds: u64,
}

fn default_max_connections() -> u32 {
    5
}

fn default_min_connections() -> u32 {
    1
}

fn default_connect_timeout() -> u64 {
    5
}

fn default_idle_timeout() -> u64 {
    600
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_defaults_apply_when_only_url_is_given() {
        let config: DatabaseConfig =
            serde_json::from_str(r#"{"url": "postgres://localhost/aqari"}"#).unwrap();
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.min_connections, 1);
        assert_eq!(config.connect_timeout_seconds, 5);
        assert_eq!(config.idle_timeout_seconds, 600);
    }

    #[test]
    fn explicit_pool_sizes_override_defaults() {
        let config: DatabaseConfig = serde_json::from_str(
            r#"{"url": "postgres://localhost/aqari", "max_connections": 12}"#,
        )
        .unwrap();
        assert_eq!(config.max_connections, 12);
        assert_eq!(config.min_connections, 1);
    }
}
