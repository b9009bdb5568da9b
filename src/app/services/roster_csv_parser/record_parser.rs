//! Individual roster line parsing
//!
//! This module turns a comma-split line of the export's data section into an
//! [`AdmissionRecord`], stripping quote characters from every extracted
//! field and deriving the VIP flag from the raw ticket-type value.

use super::column_mapping::ColumnMapping;
use crate::app::models::AdmissionRecord;

/// Parse a single data line into an admission record
///
/// The caller has already verified that `fields` covers every column of the
/// mapping.
pub fn parse_admission_record(fields: &[&str], mapping: &ColumnMapping) -> AdmissionRecord {
    AdmissionRecord::new(
        strip_quotes(fields[mapping.name]),
        strip_quotes(fields[mapping.confirmation]),
        strip_quotes(fields[mapping.section]),
        strip_quotes(fields[mapping.row]),
        strip_quotes(fields[mapping.seat]),
        fields[mapping.ticket_type],
    )
}

/// Remove single and double quote characters from a field value
pub fn strip_quotes(field: &str) -> String {
    field.chars().filter(|c| *c != '"' && *c != '\'').collect()
}
