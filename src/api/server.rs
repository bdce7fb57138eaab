//! HTTP server assembly.
//!
//! Builds the router out of the route groups, applies CORS, binds the
//! listener, and serves until the process exits.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::observability::{self, Event};

use super::config::ApiConfig;
use super::routes::{blog_routes, health_routes, ApiState};

/// The assembled blog API server.
pub struct ApiServer {
    config: ApiConfig,
    router: Router,
}

impl ApiServer {
    /// Server with default configuration.
    pub fn new() -> Self {
        Self::with_config(ApiConfig::default())
    }

    /// Server with the given configuration.
    pub fn with_config(config: ApiConfig) -> Self {
        let state = Arc::new(ApiState::new());
        let router = Router::new()
            .merge(health_routes(state.clone()))
            .merge(blog_routes(state))
            .layer(cors_layer(&config.cors_origins));

        Self { config, router }
    }

    /// The `host:port` the server will bind.
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// The router alone, for in-process tests.
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind the listener and serve until the process exits.
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        observability::log_event_with_fields(Event::Serving, &[("addr", &addr.to_string())]);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await
    }
}

impl Default for ApiServer {
    fn default() -> Self {
        Self::new()
    }
}

/// Permissive CORS when no origins are configured, an explicit
/// allow-list otherwise.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins.iter().filter_map(|s| s.parse().ok()))
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
