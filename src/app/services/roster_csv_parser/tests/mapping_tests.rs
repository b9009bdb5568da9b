//! Tests for column mapping resolution

use crate::app::services::roster_csv_parser::ColumnMapping;
use crate::constants::{MIN_FIELD_COUNT, columns};

#[test]
fn test_positional_mapping_matches_export_layout() {
    let mapping = ColumnMapping::positional();

    assert_eq!(mapping.name, columns::NAME);
    assert_eq!(mapping.ticket_type, columns::TICKET_TYPE);
    assert_eq!(mapping.confirmation, columns::CONFIRMATION);
    assert_eq!(mapping.section, columns::SECTION);
    assert_eq!(mapping.row, columns::ROW);
    assert_eq!(mapping.seat, columns::SEAT);
    assert_eq!(mapping.min_field_count(), MIN_FIELD_COUNT);
}

#[test]
fn test_header_mapping_case_insensitive() {
    let header = "order,date,email,NAME,qty,Ticket Type,price,status,\"Confirmation Code\",SECTION,Row,Seat";
    let mapping = ColumnMapping::from_header(header).unwrap();

    assert_eq!(mapping, ColumnMapping::positional());
}

#[test]
fn test_header_mapping_missing_column() {
    let header = "order,date,email,name,qty,ticket type,price,status,confirmation code,section,row";
    assert!(ColumnMapping::from_header(header).is_none());
}

#[test]
fn test_header_mapping_empty_line() {
    assert!(ColumnMapping::from_header("").is_none());
}

#[test]
fn test_min_field_count_follows_rightmost_column() {
    let header = "seat,row,section,confirmation code,ticket type,name";
    let mapping = ColumnMapping::from_header(header).unwrap();

    assert_eq!(mapping.seat, 0);
    assert_eq!(mapping.name, 5);
    assert_eq!(mapping.min_field_count(), 6);
}
