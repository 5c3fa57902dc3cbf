//! Client configuration

use serde::{Deserialize, Serialize};

/// Connection and default-value configuration for a client.
///
/// Built once at client construction and never mutated afterwards;
/// every endpoint call observes the same snapshot.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Hostname of the engine's HTTP endpoint
    #[serde(default = "default_host")]
    pub host: String,

    /// Port of the engine's HTTP endpoint
    #[serde(default = "default_port")]
    pub port: u16,

    /// Use HTTPS instead of HTTP
    #[serde(default)]
    pub secure: bool,

    /// Optional `user:password` credentials, sent as HTTP basic auth
    pub auth: Option<String>,

    /// Verify TLS certificates (disable only for development)
    #[serde(default = "default_verify_tls")]
    pub verify_tls: bool,

    /// Default node identifier for node-scoped operations
    pub node: Option<String>,

    /// Default node set for node-scoped operations
    pub nodes: Option<Vec<String>>,

    /// Request timeout in milliseconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_ms: u64,
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    9200
}

fn default_verify_tls() -> bool {
    true
}

fn default_request_timeout() -> u64 {
    30000
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            secure: false,
            auth: None,
            verify_tls: default_verify_tls(),
            node: None,
            nodes: None,
            request_timeout_ms: default_request_timeout(),
        }
    }
}

impl ClientConfig {
    /// Get request timeout as Duration
    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.request_timeout_ms)
    }

    /// Root URL of the engine, without a trailing slash
    pub fn base_url(&self) -> String {
        let scheme = if self.secure { "https" } else { "http" };
        format!("{}://{}:{}", scheme, self.host, self.port)
    }
}
