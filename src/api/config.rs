//! HTTP server configuration.
//!
//! Bind address and CORS origins, loaded from a JSON file by the CLI.
//! Every field has a default so a partial (or absent) file works.

use serde::{Deserialize, Serialize};

/// Listener and CORS settings for the API server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind
    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins; empty means permissive (development)
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

impl ApiConfig {
    pub const DEFAULT_HOST: &'static str = "0.0.0.0";
    pub const DEFAULT_PORT: u16 = 8686;

    /// Defaults with the port replaced.
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Self::default()
        }
    }

    /// The `host:port` string the listener binds.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: Self::DEFAULT_PORT,
            cors_origins: Vec::new(),
        }
    }
}

fn default_host() -> String {
    ApiConfig::DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    ApiConfig::DEFAULT_PORT
}
