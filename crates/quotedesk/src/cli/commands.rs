//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Natural-language assistant for a quotes spreadsheet.
#[derive(Parser, Debug)]
#[command(name = "quotedesk", version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage the sheet interactively
    Console {
        /// Settings file (defaults to ./quotedesk.toml when present)
        #[arg(short, long, env = "QUOTEDESK_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Run the messaging webhook listener
    Serve {
        /// Settings file (defaults to ./quotedesk.toml when present)
        #[arg(short, long, env = "QUOTEDESK_CONFIG")]
        config: Option<PathBuf>,

        /// Listen address, overriding the settings (e.g. 127.0.0.1:8080)
        #[arg(short, long)]
        bind: Option<String>,
    },
}
