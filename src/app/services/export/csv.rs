//! CSV export rendering
//!
//! Serializes the currently displayed rows, in their display order, to a
//! five-column CSV document. The VIP flag is presentational state and is
//! not exported.

use crate::app::models::AdmissionRecord;
use crate::constants::EXPORT_HEADERS;
use crate::{Error, Result};

/// Render records to CSV text with the fixed header row
pub fn render_csv(records: &[AdmissionRecord]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(EXPORT_HEADERS)
        .map_err(|e| Error::csv_export("Failed to write header row", Some(e)))?;

    for record in records {
        writer
            .write_record(record.cells())
            .map_err(|e| Error::csv_export("Failed to write data row", Some(e)))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::csv_export(format!("Failed to flush CSV writer: {}", e), None))?;

    String::from_utf8(bytes)
        .map_err(|e| Error::csv_export(format!("CSV output was not UTF-8: {}", e), None))
}
