//! Quotedesk command-line entry point.

mod cli;

use clap::Parser;
use cli::{Cli, Commands, handle_console_command, handle_serve_command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Console { config } => {
            // Quiet by default so log lines do not interleave with the prompt.
            quotedesk::init_tracing("warn");
            handle_console_command(config).await
        }
        Commands::Serve { config, bind } => {
            quotedesk::init_tracing("info");
            handle_serve_command(config, bind).await
        }
    }
}
