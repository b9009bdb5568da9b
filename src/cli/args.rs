//! Command-line argument definitions for the admission processor
//!
//! This module defines the complete CLI interface using clap derive API.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::app::models::SortOrder;
use crate::{Error, Result};

/// CLI arguments for the admission processor
///
/// Converts event-admission CSV exports into print-ready HTML, CSV and PDF
/// guest lists with consistent sorting and VIP highlighting.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "admission-processor",
    version,
    about = "Convert event-admission CSV exports into print-ready guest lists",
    long_about = "Parses the detailed admission export of the ticketing platform, shows the \
                  guest list in the terminal, and produces print-ready HTML documents, CSV \
                  downloads and PDF tables. All outputs agree on sort order and preserve the \
                  gold VIP highlight."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the admission processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Display the parsed guest list in the terminal
    Show(ShowArgs),
    /// Write a guest-list artifact (HTML, CSV, PDF or combined report)
    Export(ExportArgs),
}

/// Requested ordering, as exposed on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortOrderArg {
    /// Ascending by guest name
    Name,
    /// Ascending by seating row, then numeric seat
    Seat,
}

impl From<SortOrderArg> for SortOrder {
    fn from(arg: SortOrderArg) -> Self {
        match arg {
            SortOrderArg::Name => SortOrder::Name,
            SortOrderArg::Seat => SortOrder::Seat,
        }
    }
}

/// Export artifact kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Print-ready HTML document
    Html,
    /// CSV download of the displayed rows
    Csv,
    /// PDF table
    Pdf,
    /// Combined HTML report: alphabetical, seat order, and VIP listings
    Report,
}

/// Arguments for the show command (terminal display)
#[derive(Debug, Clone, Parser)]
pub struct ShowArgs {
    /// Path to the admission export CSV file
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Display order for the guest list
    #[arg(
        short = 's',
        long = "sort",
        value_enum,
        default_value = "name",
        help = "Display order for the guest list"
    )]
    pub sort: SortOrderArg,

    /// Show only VIP guests
    #[arg(long = "vip-only", help = "Show only VIP guests")]
    pub vip_only: bool,

    /// Resolve columns from the export's header row
    ///
    /// By default the documented fixed column positions are used. Header
    /// mode reads the column header row instead and falls back to the fixed
    /// positions when the row is unusable.
    #[arg(long = "header-mode", help = "Resolve columns from the export's header row")]
    pub header_mode: bool,

    /// Path to the auxiliary seat-map document
    #[arg(long = "seats", value_name = "FILE", help = "Path to the auxiliary seats.json")]
    pub seats_path: Option<PathBuf>,

    /// Path to configuration file (TOML format)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the export command (artifact generation)
#[derive(Debug, Clone, Parser)]
pub struct ExportArgs {
    /// Path to the admission export CSV file
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Artifact to produce
    #[arg(short = 'f', long = "format", value_enum, help = "Artifact to produce")]
    pub format: ExportFormat,

    /// Sort order applied to the exported rows
    #[arg(
        short = 's',
        long = "sort",
        value_enum,
        default_value = "name",
        help = "Sort order applied to the exported rows"
    )]
    pub sort: SortOrderArg,

    /// Export only VIP guests
    ///
    /// VIP-only print documents are always sorted by name.
    #[arg(long = "vip-only", help = "Export only VIP guests")]
    pub vip_only: bool,

    /// Resolve columns from the export's header row
    #[arg(long = "header-mode", help = "Resolve columns from the export's header row")]
    pub header_mode: bool,

    /// Output directory for the artifact
    ///
    /// Created if it does not exist. The filename is derived from the event
    /// name and date embedded in the input filename.
    #[arg(short = 'o', long = "output", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Path to the auxiliary seat-map document
    #[arg(long = "seats", value_name = "FILE", help = "Path to the auxiliary seats.json")]
    pub seats_path: Option<PathBuf>,

    /// Path to configuration file (TOML format)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl ShowArgs {
    /// Validate the show command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_input_file(&self.input)?;
        validate_config_file(self.config_file.as_deref())?;
        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }
}

impl ExportArgs {
    /// Validate the export command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_input_file(&self.input)?;
        validate_config_file(self.config_file.as_deref())?;

        // The combined report always contains its own VIP section
        if self.vip_only && self.format == ExportFormat::Report {
            return Err(Error::configuration(
                "--vip-only cannot be combined with the report format",
            ));
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }
}

fn log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

fn validate_input_file(input: &std::path::Path) -> Result<()> {
    if !input.exists() {
        return Err(Error::file_not_found(input.display().to_string()));
    }

    if !input.is_file() {
        return Err(Error::configuration(format!(
            "Input path is not a file: {}",
            input.display()
        )));
    }

    Ok(())
}

fn validate_config_file(config_file: Option<&std::path::Path>) -> Result<()> {
    if let Some(path) = config_file {
        if !path.exists() {
            return Err(Error::configuration(format!(
                "Config file does not exist: {}",
                path.display()
            )));
        }
    }

    Ok(())
}
