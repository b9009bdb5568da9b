//! Test utilities and fixtures for roster parser testing
//!
//! This module provides common helpers used across different test modules.

use std::io::Write;
use tempfile::NamedTempFile;

// Test modules
mod mapping_tests;

/// Helper to create a complete test export with two guests
///
/// The layout mirrors the ticketing platform's detailed export: two
/// boilerplate lines, a column header row, then one line per admission
/// with the documented fixed positions (name=3, ticket type=5,
/// confirmation=8, section=9, row=10, seat=11).
pub fn create_test_export() -> String {
    [
        "Event Export,,,,,,,,,,,",
        "Generated 2025-01-31,,,,,,,,,,,",
        "Order,Date,Email,Name,Qty,Ticket type,Price,Status,Confirmation code,Section,Row,Seat",
        "1001,2025-01-30,jd@example.com,\"John Doe\",1,\"VIP Gold\",120.00,Paid,\"ABC123\",\"A\",\"1\",\"12\"",
        "1002,2025-01-30,ms@example.com,\"Mary Smith\",1,\"General Admission\",60.00,Paid,\"DEF456\",\"B\",\"2\",\"7\"",
    ]
    .join("\n")
}

/// Helper to create an export whose data lines are all too short
pub fn create_short_rows_export() -> String {
    [
        "Event Export,,,,,,,,,,,",
        "Generated 2025-01-31,,,,,,,,,,,",
        "Order,Date,Email,Name,Qty,Ticket type,Price,Status,Confirmation code,Section,Row,Seat",
        "only,three,fields",
        "",
    ]
    .join("\n")
}

/// Helper to create a temporary file with given content
pub fn create_temp_export(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}
