//! Data models for admission-list processing
//!
//! This module contains the core data structures for representing parsed
//! admission records, the displayed table, and auxiliary seat-map entries.

use serde::{Deserialize, Serialize};

use crate::constants::VIP_MARKER;

// =============================================================================
// Admission Records
// =============================================================================

/// A single parsed admission record
///
/// Immutable once parsed. Records carry no identity beyond their field
/// values; duplicate rows in the source export are preserved as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdmissionRecord {
    /// Guest name
    pub name: String,

    /// Booking confirmation code
    pub confirmation: String,

    /// Seating section
    pub section: String,

    /// Seating row
    pub row: String,

    /// Seat number (kept as text; not all venues use numeric seats)
    pub seat: String,

    /// Whether the ticket type marks this guest as a VIP
    pub is_vip: bool,
}

impl AdmissionRecord {
    /// Create a record, deriving the VIP flag from the raw ticket-type field
    pub fn new(
        name: String,
        confirmation: String,
        section: String,
        row: String,
        seat: String,
        ticket_type: &str,
    ) -> Self {
        Self {
            name,
            confirmation,
            section,
            row,
            seat,
            is_vip: is_vip_ticket(ticket_type),
        }
    }

    /// The five visible cells of this record, in display order
    ///
    /// The VIP flag is presentational state and never appears as a column.
    pub fn cells(&self) -> [&str; 5] {
        [
            &self.name,
            &self.confirmation,
            &self.section,
            &self.row,
            &self.seat,
        ]
    }
}

/// Check whether a ticket-type field denotes a VIP admission
///
/// Case-insensitive substring match, so "VIP Gold" and "Early vip" both
/// qualify.
pub fn is_vip_ticket(ticket_type: &str) -> bool {
    ticket_type.to_lowercase().contains(VIP_MARKER)
}

// =============================================================================
// Table Model
// =============================================================================

/// Requested ordering for display and export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending by guest name
    Name,
    /// Ascending by seating row, then by numeric seat
    Seat,
}

/// The in-memory table of currently displayed records
///
/// Fully re-derived from the source file on each parse; exports sort
/// working copies and never mutate the table itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdmissionTable {
    records: Vec<AdmissionRecord>,
}

impl AdmissionTable {
    /// Create a table from records already in display order
    pub fn new(records: Vec<AdmissionRecord>) -> Self {
        Self { records }
    }

    /// The displayed records, in display order
    pub fn records(&self) -> &[AdmissionRecord] {
        &self.records
    }

    /// Number of displayed records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of VIP records in the table
    pub fn vip_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_vip).count()
    }
}

// =============================================================================
// Auxiliary Seat Map
// =============================================================================

/// A venue seat entry from the auxiliary seat-map document
///
/// Loaded at startup when present. No current transformation consumes the
/// seat map; it is carried for parity with the venue tooling that produces
/// it, and failures to load it are non-fatal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    /// Seating section
    pub section: String,

    /// Seating row
    pub row: String,

    /// Seat number
    pub seat: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vip_ticket_matching() {
        assert!(is_vip_ticket("VIP Gold"));
        assert!(is_vip_ticket("vip"));
        assert!(is_vip_ticket("Early Vip Access"));
        assert!(!is_vip_ticket("General Admission"));
        assert!(!is_vip_ticket(""));
    }

    #[test]
    fn test_record_cells_order() {
        let record = AdmissionRecord::new(
            "John Doe".to_string(),
            "ABC123".to_string(),
            "A".to_string(),
            "1".to_string(),
            "12".to_string(),
            "VIP Gold",
        );

        assert_eq!(record.cells(), ["John Doe", "ABC123", "A", "1", "12"]);
        assert!(record.is_vip);
    }

    #[test]
    fn test_table_vip_count() {
        let records = vec![
            AdmissionRecord::new(
                "A".into(),
                "C1".into(),
                "S".into(),
                "1".into(),
                "1".into(),
                "VIP",
            ),
            AdmissionRecord::new(
                "B".into(),
                "C2".into(),
                "S".into(),
                "1".into(),
                "2".into(),
                "Standard",
            ),
        ];

        let table = AdmissionTable::new(records);
        assert_eq!(table.len(), 2);
        assert_eq!(table.vip_count(), 1);
        assert!(!table.is_empty());
    }
}
