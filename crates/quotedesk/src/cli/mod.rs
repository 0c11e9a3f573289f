//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the quotedesk binary.

mod commands;
mod console;
mod serve;

pub use commands::{Cli, Commands};
pub use console::handle_console_command;
pub use serve::handle_serve_command;
