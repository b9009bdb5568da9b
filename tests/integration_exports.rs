//! Integration tests for the export pipeline
//!
//! These tests drive the parse-sort-render path end-to-end: a complete export
//! file goes in, and rendered CSV, HTML and PDF artifacts come out.

use admission_processor::app::services::export::{
    formatted_base_name, render_csv, render_pdf, HtmlRenderer, ReportSection,
};
use admission_processor::app::services::record_sorter::{sorted_copy, vip_subset};
use admission_processor::app::services::roster_csv_parser::RosterCsvParser;
use admission_processor::SortOrder;
use std::io::Write;
use tempfile::NamedTempFile;

fn gala_export() -> String {
    let mut content = String::new();
    content.push_str("Admission List Report,,,,,,,,,,,\n");
    content.push_str("Spring Gala,,,,,,,,,,,\n");
    content.push_str(
        "Order,Date,Email,Name,Qty,Ticket type,Price,Status,Confirmation code,Section,Row,Seat\n",
    );
    content.push_str(
        "1001,2025-01-03,a@e.com,Anna Kowalski,1,VIP Gold,120.00,paid,QX81KD,A,1,4\n",
    );
    content.push_str(
        "1002,2025-01-04,b@e.com,Ben Ortega,1,General Admission,45.00,paid,MM20PL,B,3,11\n",
    );
    content.push_str(
        "1003,2025-01-04,c@e.com,Wei Chen,1,General Admission,45.00,paid,TT93ZA,A,2,7\n",
    );
    content
}

/// Test the full parse-to-CSV export path
///
/// Purpose: Validate that a file on disk round-trips into the download CSV format
/// Benefit: Ensures the rendered CSV carries exactly the five output columns
/// in sorted order, with no raw export fields leaking through
#[tokio::test]
async fn test_export_csv_from_file() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(gala_export().as_bytes())
        .expect("Failed to write export content");

    let parser = RosterCsvParser::new();
    let result = parser
        .parse_file(file.path())
        .await
        .expect("Failed to parse export file");

    let rows = sorted_copy(&result.records, SortOrder::Name);
    let csv_text = render_csv(&rows).expect("Failed to render CSV");

    let mut lines = csv_text.lines();
    assert_eq!(lines.next(), Some("Name,Confirmation,Section,Row,Seat"));
    assert_eq!(lines.next(), Some("Anna Kowalski,QX81KD,A,1,4"));
    assert_eq!(lines.next(), Some("Ben Ortega,MM20PL,B,3,11"));
    assert_eq!(lines.next(), Some("Wei Chen,TT93ZA,A,2,7"));
    assert_eq!(lines.next(), None);

    // Raw export columns must not appear in the download
    assert!(!csv_text.contains("a@e.com"));
    assert!(!csv_text.contains("120.00"));
}

/// Test the full parse-to-HTML export path for the single-list document
///
/// Purpose: Validate the rendered print document against a file-sourced roster
/// Benefit: Ensures VIP rows are highlighted and all guests appear in the table
#[tokio::test]
async fn test_export_print_html_from_file() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(gala_export().as_bytes())
        .expect("Failed to write export content");

    let parser = RosterCsvParser::new();
    let result = parser
        .parse_file(file.path())
        .await
        .expect("Failed to parse export file");

    let rows = sorted_copy(&result.records, SortOrder::Seat);
    let renderer = HtmlRenderer::new().expect("Failed to build HTML renderer");
    let html = renderer
        .render_print_list("Print List", &rows)
        .expect("Failed to render print document");

    assert!(html.contains("<title>Print List</title>"));
    for record in &rows {
        assert!(html.contains(&record.name), "Missing guest: {}", record.name);
    }

    // Exactly one VIP row carries the gold highlight
    let gold_rows = html.matches("background-color: gold;").count();
    // One occurrence lives in the stylesheet's bold rule, one on the VIP row
    assert_eq!(gold_rows, 2);
}

/// Test the combined report document built from the same parsed roster
///
/// Purpose: Validate the three-section report against a file-sourced roster
/// Benefit: Ensures each section gets its own heading and page break, and the
/// VIP section only contains VIP guests
#[tokio::test]
async fn test_export_combined_report_from_file() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(gala_export().as_bytes())
        .expect("Failed to write export content");

    let parser = RosterCsvParser::new();
    let result = parser
        .parse_file(file.path())
        .await
        .expect("Failed to parse export file");

    let by_name = sorted_copy(&result.records, SortOrder::Name);
    let by_seat = sorted_copy(&result.records, SortOrder::Seat);
    let vips = vip_subset(&by_name);

    let sections = vec![
        ReportSection {
            title: "Full Admission List (Alphabetical)".to_string(),
            records: by_name.clone(),
        },
        ReportSection {
            title: "Full Admission List (Seat Order)".to_string(),
            records: by_seat,
        },
        ReportSection {
            title: "VIP Guest List".to_string(),
            records: vips,
        },
    ];

    let renderer = HtmlRenderer::new().expect("Failed to build HTML renderer");
    let html = renderer
        .render_combined_report("Print All", &sections)
        .expect("Failed to render combined report");

    assert!(html.contains("Full Admission List (Alphabetical)"));
    assert!(html.contains("Full Admission List (Seat Order)"));
    assert!(html.contains("VIP Guest List"));

    // The two full lists show every guest, the VIP list only Anna
    assert_eq!(html.matches("Anna Kowalski").count(), 3);
    assert_eq!(html.matches("Ben Ortega").count(), 2);
    assert_eq!(html.matches("Wei Chen").count(), 2);
}

/// Test PDF generation from a parsed roster
///
/// Purpose: Validate that file-sourced records produce a well-formed PDF
/// Benefit: Ensures the binary artifact path works with realistic row data
#[tokio::test]
async fn test_export_pdf_from_file() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(gala_export().as_bytes())
        .expect("Failed to write export content");

    let parser = RosterCsvParser::new();
    let result = parser
        .parse_file(file.path())
        .await
        .expect("Failed to parse export file");

    let rows = sorted_copy(&result.records, SortOrder::Name);
    let bytes = render_pdf("Admission List", &rows, |i| rows[i].is_vip)
        .expect("Failed to render PDF");

    assert!(bytes.starts_with(b"%PDF-"));
    let text = String::from_utf8_lossy(&bytes);
    assert!(text.contains("%%EOF"));
    assert!(text.contains("Helvetica"));
}

/// Test the download base name derived from realistic export file names
///
/// Purpose: Validate the event-name and date extraction on platform file names
/// Benefit: Ensures exported artifacts are named after the event, not the raw
/// export file
#[test]
fn test_artifact_base_names() {
    let base = formatted_base_name(Some(
        "AdmissionList_Detailed_Spring Gala - Saturday February 1, 2025 at 7:00 PM.csv",
    ));
    assert_eq!(base, "Spring Gala - 01/02/25");

    // No recognizable structure falls back to the generic name
    assert_eq!(formatted_base_name(Some("guests.csv")), "Admission_List");
    assert_eq!(formatted_base_name(None), "Admission_List");
}
