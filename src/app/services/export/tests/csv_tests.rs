//! Tests for CSV export rendering

use super::sample_records;
use crate::app::services::export::render_csv;

#[test]
fn test_csv_has_fixed_header_and_display_order() {
    let output = render_csv(&sample_records()).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[0], "Name,Confirmation,Section,Row,Seat");
    assert_eq!(lines[1], "John Doe,ABC123,A,1,12");
    assert_eq!(lines[2], "Mary Smith,DEF456,B,2,7");
    assert_eq!(lines.len(), 3);
}

#[test]
fn test_csv_does_not_export_vip_flag() {
    let output = render_csv(&sample_records()).unwrap();

    assert!(!output.to_lowercase().contains("vip"));
    assert!(!output.contains("true"));
}

#[test]
fn test_csv_round_trip_reproduces_displayed_values() {
    let records = sample_records();
    let output = render_csv(&records).unwrap();

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(output.as_bytes());

    let rows: Vec<Vec<String>> = reader
        .records()
        .map(|r| r.unwrap().iter().map(|f| f.to_string()).collect())
        .collect();

    assert_eq!(rows.len(), records.len());
    for (row, record) in rows.iter().zip(&records) {
        let cells: Vec<String> = record.cells().iter().map(|c| c.to_string()).collect();
        assert_eq!(*row, cells);
    }
}

#[test]
fn test_csv_empty_table_is_header_only() {
    let output = render_csv(&[]).unwrap();
    assert_eq!(output.trim_end(), "Name,Confirmation,Section,Row,Seat");
}
