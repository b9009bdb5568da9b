//! Command implementations for the admission processor CLI
//!
//! This module contains the main command execution logic and error handling
//! for the CLI interface. Each command is implemented in its own module:
//! - `show`: terminal display of the parsed guest list
//! - `export`: artifact generation (HTML, CSV, PDF, combined report)

pub mod export;
pub mod shared;
pub mod show;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the admission processor
///
/// Dispatches to the appropriate subcommand handler based on CLI args.
pub async fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Show(show_args) => show::run_show(show_args).await,
        Commands::Export(export_args) => export::run_export(export_args).await,
    }
}
