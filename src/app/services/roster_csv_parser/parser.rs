//! Core roster parser implementation
//!
//! This module provides the main parser orchestration, handling file
//! reading, boilerplate skipping, and per-line record extraction.

use std::path::Path;

use tracing::{debug, info, warn};

use super::column_mapping::ColumnMapping;
use super::record_parser::parse_admission_record;
use super::stats::{ParseResult, ParseStats};
use crate::constants::HEADER_LINE_COUNT;
use crate::{Error, Result};

/// Parser for the ticketing platform's detailed admission export
///
/// This parser focuses on essential functionality:
/// - Naive comma splitting, matching the export's comma-free field contract
/// - Dropping the three boilerplate lines before the data section
/// - Discarding lines with too few fields instead of failing the whole file
/// - Optional header-driven column lookup with positional fallback
#[derive(Debug, Clone, Default)]
pub struct RosterCsvParser {
    header_mode: bool,
}

impl RosterCsvParser {
    /// Create a parser using the fixed positional column layout
    pub fn new() -> Self {
        Self { header_mode: false }
    }

    /// Create a parser that resolves columns from the export's header row,
    /// falling back to the positional layout when the row is unusable
    pub fn with_header_mode() -> Self {
        Self { header_mode: true }
    }

    /// Parse an export file and return admission records with statistics
    pub async fn parse_file(&self, file_path: &Path) -> Result<ParseResult> {
        info!("Parsing admission export: {}", file_path.display());

        let content = tokio::fs::read_to_string(file_path).await.map_err(|e| {
            Error::io(
                format!("Failed to read file {}", file_path.display()),
                e,
            )
        })?;

        self.parse_str(&content, &file_path.display().to_string())
    }

    /// Parse raw export text
    ///
    /// `file_label` identifies the source in error messages.
    pub fn parse_str(&self, content: &str, file_label: &str) -> Result<ParseResult> {
        let lines: Vec<&str> = content.lines().collect();

        if lines.len() < HEADER_LINE_COUNT {
            return Err(Error::roster_format(
                file_label,
                "CSV file is missing required columns",
            ));
        }

        let (boilerplate, data_lines) = lines.split_at(HEADER_LINE_COUNT);
        let mapping = self.resolve_mapping(boilerplate);
        let min_fields = mapping.min_field_count();

        let mut stats = ParseStats::new();
        let mut records = Vec::new();

        for line in data_lines {
            stats.total_lines += 1;

            let fields: Vec<&str> = line.split(',').collect();
            if fields.len() < min_fields {
                debug!(
                    "Skipping line with {} fields (need {})",
                    fields.len(),
                    min_fields
                );
                stats.lines_skipped += 1;
                continue;
            }

            records.push(parse_admission_record(&fields, &mapping));
            stats.records_parsed += 1;
        }

        if records.is_empty() {
            return Err(Error::no_valid_data(file_label));
        }

        info!(
            "Parsed {} records from {} data lines ({} skipped)",
            stats.records_parsed, stats.total_lines, stats.lines_skipped
        );

        Ok(ParseResult { records, stats })
    }

    /// Choose the column mapping for this export
    fn resolve_mapping(&self, boilerplate: &[&str]) -> ColumnMapping {
        if !self.header_mode {
            return ColumnMapping::positional();
        }

        // The column header row is the last boilerplate line
        match boilerplate.last().and_then(|line| ColumnMapping::from_header(line)) {
            Some(mapping) => mapping,
            None => {
                warn!("Header row unusable, falling back to positional columns");
                ColumnMapping::positional()
            }
        }
    }
}
