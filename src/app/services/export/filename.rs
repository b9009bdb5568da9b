//! Output filename derivation
//!
//! The ticketing platform names its exports like
//! `AdmissionList_Detailed_<Event> - <Weekday Month D, YYYY> at <time>.csv`.
//! Exports produced by this tool reuse the event name and reformat the date
//! as DD/MM/YY, falling back to a generic name when either part is missing.

use chrono::NaiveDate;
use tracing::debug;

use crate::constants::{
    DEFAULT_BASE_NAME, FILENAME_DATE_FORMAT, FILENAME_PREFIX, OUTPUT_DATE_FORMAT,
};

/// Derive the output base name (no extension) from the uploaded filename
///
/// `None` or a name without the `" - "` separator yields the generic
/// default; a name whose date text does not parse yields just the event
/// name.
pub fn formatted_base_name(original_name: Option<&str>) -> String {
    let Some(original) = original_name else {
        return DEFAULT_BASE_NAME.to_string();
    };

    let cleaned = original.replacen(FILENAME_PREFIX, "", 1);
    let parts: Vec<&str> = cleaned.split(" - ").collect();
    if parts.len() < 2 {
        return DEFAULT_BASE_NAME.to_string();
    }

    let event_name = parts[0].trim();
    let date_text = parts[1].trim().split(" at ").next().unwrap_or("").trim();

    match NaiveDate::parse_from_str(date_text, FILENAME_DATE_FORMAT) {
        Ok(date) => format!("{} - {}", event_name, date.format(OUTPUT_DATE_FORMAT)),
        Err(e) => {
            debug!("Unparseable date {:?} in filename: {}", date_text, e);
            event_name.to_string()
        }
    }
}
