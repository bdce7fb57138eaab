//! CLI error types.
//!
//! Every CLI failure is fatal: the binary prints the error and exits
//! non-zero. Each variant carries a stable machine-readable code so
//! wrapper scripts can branch on the prefix.

use thiserror::Error;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// Fatal command-line failures.
#[derive(Debug, Error)]
pub enum CliError {
    /// The configuration file could not be read or parsed
    #[error("QUILL_CLI_CONFIG_ERROR: {0}")]
    Config(String),

    /// The runtime or the HTTP server failed to come up
    #[error("QUILL_CLI_BOOT_FAILED: {0}")]
    Boot(String),
}

impl CliError {
    pub fn config(msg: impl Into<String>) -> Self {
        CliError::Config(msg.into())
    }

    pub fn boot(msg: impl Into<String>) -> Self {
        CliError::Boot(msg.into())
    }

    /// The code prefix of this error.
    pub fn code(&self) -> &'static str {
        match self {
            CliError::Config(_) => "QUILL_CLI_CONFIG_ERROR",
            CliError::Boot(_) => "QUILL_CLI_BOOT_FAILED",
        }
    }
}
