//! Column lookup for roster export lines
//!
//! The ticketing platform's detailed export has a fixed column layout, which
//! is the default extraction mode. When the export carries a usable column
//! header row, header-driven lookup resolves the same six columns by name
//! instead, tolerating layout changes between platform releases.

use tracing::debug;

use crate::constants::{columns, header_names};

/// Resolved positions of the six columns a record is built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    pub name: usize,
    pub ticket_type: usize,
    pub confirmation: usize,
    pub section: usize,
    pub row: usize,
    pub seat: usize,
}

impl ColumnMapping {
    /// The fixed positional layout of the detailed export
    pub fn positional() -> Self {
        Self {
            name: columns::NAME,
            ticket_type: columns::TICKET_TYPE,
            confirmation: columns::CONFIRMATION,
            section: columns::SECTION,
            row: columns::ROW,
            seat: columns::SEAT,
        }
    }

    /// Resolve columns by name from the export's own header row
    ///
    /// Titles are matched case-insensitively after trimming and quote
    /// stripping. Returns `None` when any required column is missing, in
    /// which case the caller falls back to the positional layout.
    pub fn from_header(header_line: &str) -> Option<Self> {
        let titles: Vec<String> = header_line
            .split(',')
            .map(|field| {
                field
                    .chars()
                    .filter(|c| *c != '"' && *c != '\'')
                    .collect::<String>()
                    .trim()
                    .to_lowercase()
            })
            .collect();

        let find = |wanted: &str| titles.iter().position(|title| title == wanted);

        let mapping = Self {
            name: find(header_names::NAME)?,
            ticket_type: find(header_names::TICKET_TYPE)?,
            confirmation: find(header_names::CONFIRMATION)?,
            section: find(header_names::SECTION)?,
            row: find(header_names::ROW)?,
            seat: find(header_names::SEAT)?,
        };

        debug!("Resolved columns from header row: {:?}", mapping);
        Some(mapping)
    }

    /// Minimum field count a line needs to cover every mapped column
    pub fn min_field_count(&self) -> usize {
        1 + [
            self.name,
            self.ticket_type,
            self.confirmation,
            self.section,
            self.row,
            self.seat,
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
    }
}
