//! Test fixtures shared by export renderer tests

use crate::app::models::AdmissionRecord;

// Test modules
mod csv_tests;

/// A small display-ordered guest list with one VIP
pub fn sample_records() -> Vec<AdmissionRecord> {
    vec![
        AdmissionRecord {
            name: "John Doe".to_string(),
            confirmation: "ABC123".to_string(),
            section: "A".to_string(),
            row: "1".to_string(),
            seat: "12".to_string(),
            is_vip: true,
        },
        AdmissionRecord {
            name: "Mary Smith".to_string(),
            confirmation: "DEF456".to_string(),
            section: "B".to_string(),
            row: "2".to_string(),
            seat: "7".to_string(),
            is_vip: false,
        },
    ]
}
