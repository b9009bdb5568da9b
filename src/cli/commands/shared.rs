//! Shared components for CLI commands
//!
//! This module contains common utilities used across the command
//! implementations: logging setup, configuration loading, the startup load
//! of the auxiliary seat registry, and the parse-and-sort pipeline that
//! produces the displayed table.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::app::models::{AdmissionTable, SortOrder};
use crate::app::services::record_sorter;
use crate::app::services::roster_csv_parser::{ParseStats, RosterCsvParser};
use crate::app::services::seat_registry::SeatRegistry;
use crate::config::Config;
use crate::constants::SEAT_DATA_FILE;
use crate::{Error, Result};

/// Set up structured logging for a command
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("admission_processor={}", log_level)));

    // Set up subscriber based on output preference
    if quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration, using the default config file when none is given
pub fn load_configuration(config_file: Option<&Path>) -> Result<Config> {
    info!("Loading configuration");

    let default_config_path = if config_file.is_none() {
        Config::default_config_path().ok()
    } else {
        None
    };

    let config_file = match config_file {
        Some(path) => Some(path),
        None => default_config_path
            .as_ref()
            .filter(|path| path.exists())
            .map(|path| path.as_path()),
    };

    if let Some(config_path) = config_file {
        info!("Using config file: {}", config_path.display());
    } else {
        info!("No config file found, using defaults");
    }

    Config::load_layered(config_file)
}

/// Load the auxiliary seat registry at startup
///
/// The seat map is not consumed by any transformation, so failures are
/// logged and swallowed; roster processing must never block on it.
pub async fn load_seat_registry(
    config: &Config,
    override_path: Option<&Path>,
) -> Option<SeatRegistry> {
    let path = override_path
        .map(Path::to_path_buf)
        .or_else(|| config.seats_path.clone())
        .unwrap_or_else(|| SEAT_DATA_FILE.into());

    match SeatRegistry::load(&path).await {
        Ok(registry) => Some(registry),
        Err(e) => {
            warn!("Error loading seat data: {}", e);
            None
        }
    }
}

/// Parse the export and build the displayed table
///
/// Returns the table in its default display order together with parsing
/// statistics.
pub async fn load_table(
    input: &Path,
    header_mode: bool,
    default_sort: SortOrder,
) -> Result<(AdmissionTable, ParseStats)> {
    if !input.exists() {
        return Err(Error::file_not_found(input.display().to_string()));
    }

    let parser = if header_mode {
        RosterCsvParser::with_header_mode()
    } else {
        RosterCsvParser::new()
    };

    let result = parser.parse_file(input).await?;

    let mut records = result.records;
    record_sorter::sort_records(&mut records, default_sort);

    Ok((AdmissionTable::new(records), result.stats))
}
