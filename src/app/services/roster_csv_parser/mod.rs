//! Roster CSV parser for ticketing-platform admission exports
//!
//! This module provides a deliberately simple parser for the detailed
//! admission export produced by the ticketing platform. The export is not
//! RFC-4180 CSV: fields never contain embedded commas, so lines are split
//! naively on `,` and quote characters are stripped from extracted values.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Core parsing orchestration and file handling
//! - [`column_mapping`] - Fixed-position and header-driven column lookup
//! - [`record_parser`] - Individual roster line processing
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use admission_processor::app::services::roster_csv_parser::RosterCsvParser;
//!
//! # async fn example() -> admission_processor::Result<()> {
//! let parser = RosterCsvParser::new();
//! let result = parser.parse_file(std::path::Path::new("export.csv")).await?;
//!
//! println!("Parsed {} records from {} lines",
//!          result.stats.records_parsed,
//!          result.stats.total_lines);
//! # Ok(())
//! # }
//! ```

pub mod column_mapping;
pub mod parser;
pub mod record_parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column_mapping::ColumnMapping;
pub use parser::RosterCsvParser;
pub use stats::{ParseResult, ParseStats};
