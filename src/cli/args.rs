//! clap argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// quill - a self-hostable blog content management API
#[derive(Debug, Parser)]
#[command(name = "quill", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve {
        /// Configuration file to load
        #[arg(long, default_value = "./quill.json")]
        config: PathBuf,

        /// Listen on this port instead of the configured one
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse the process arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
