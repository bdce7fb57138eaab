//! CLI command implementations.
//!
//! `serve` reads the configuration, stands up the tokio runtime, and
//! hands control to the HTTP server until the process exits.

use std::fs;
use std::path::Path;

use crate::api::{ApiConfig, ApiServer};
use crate::observability::{self, Event};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Load the server configuration from a JSON file.
///
/// A missing file falls back to defaults; an unreadable file or
/// malformed JSON is a configuration error.
pub fn load_config(path: &Path) -> CliResult<ApiConfig> {
    if !path.exists() {
        return Ok(ApiConfig::default());
    }

    let raw = fs::read_to_string(path)
        .map_err(|e| CliError::config(format!("cannot read {}: {}", path.display(), e)))?;

    serde_json::from_str(&raw)
        .map_err(|e| CliError::config(format!("invalid JSON in {}: {}", path.display(), e)))
}

/// Parse arguments and dispatch to the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Command::Serve { config, port } => serve(&config, port),
    }
}

/// Boot the server and serve until the process exits.
pub fn serve(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    observability::log_event(Event::BootStart);

    let mut config = load_config(config_path)?;
    if let Some(port) = port {
        config.port = port;
    }

    observability::log_event_with_fields(Event::ConfigLoaded, &[("addr", &config.socket_addr())]);

    let server = ApiServer::with_config(config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot(format!("tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot(format!("http server: {}", e)))
    })
}
