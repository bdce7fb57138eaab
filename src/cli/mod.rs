//! Command-line interface.
//!
//! One command today: `serve`, which loads the configuration and
//! enters the serving loop.

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{load_config, run, serve};
pub use errors::{CliError, CliResult};
