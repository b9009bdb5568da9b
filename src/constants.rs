//! Application constants for the admission processor
//!
//! This module contains the fixed export layout of the ticketing platform,
//! default values, and styling constants shared by every renderer.

// =============================================================================
// Roster Export Layout
// =============================================================================

/// Number of boilerplate lines before the data section of an export
pub const HEADER_LINE_COUNT: usize = 3;

/// Minimum comma-separated fields a line must have to be a data row
pub const MIN_FIELD_COUNT: usize = 12;

/// Fixed column positions in the ticketing platform's detailed export
pub mod columns {
    /// Guest name
    pub const NAME: usize = 3;

    /// Ticket type, matched case-insensitively against "vip"
    pub const TICKET_TYPE: usize = 5;

    /// Confirmation code
    pub const CONFIRMATION: usize = 8;

    /// Seating section
    pub const SECTION: usize = 9;

    /// Seating row
    pub const ROW: usize = 10;

    /// Seat number
    pub const SEAT: usize = 11;
}

/// Column titles expected on the export's own header row, used by
/// header-driven extraction (matched case-insensitively)
pub mod header_names {
    pub const NAME: &str = "name";
    pub const TICKET_TYPE: &str = "ticket type";
    pub const CONFIRMATION: &str = "confirmation code";
    pub const SECTION: &str = "section";
    pub const ROW: &str = "row";
    pub const SEAT: &str = "seat";
}

/// Substring identifying a VIP ticket type (case-insensitive)
pub const VIP_MARKER: &str = "vip";

// =============================================================================
// Output Naming
// =============================================================================

/// Prefix the ticketing platform puts on detailed export filenames
pub const FILENAME_PREFIX: &str = "AdmissionList_Detailed_";

/// Fallback base name when no event name can be derived
pub const DEFAULT_BASE_NAME: &str = "Admission_List";

/// Date format embedded in export filenames, e.g. "Saturday February 1, 2025"
pub const FILENAME_DATE_FORMAT: &str = "%A %B %d, %Y";

/// Date format used in derived output names (DD/MM/YY)
pub const OUTPUT_DATE_FORMAT: &str = "%d/%m/%y";

// =============================================================================
// Rendering
// =============================================================================

/// Column titles shared by every export surface
pub const EXPORT_HEADERS: [&str; 5] = ["Name", "Confirmation", "Section", "Row", "Seat"];

/// Title placed above the PDF table
pub const PDF_TITLE: &str = "Admission List";

/// Styling colors shared by the HTML and PDF renderers
pub mod colors {
    /// Table header background (purple)
    pub const HEADER_PURPLE: (u8, u8, u8) = (106, 13, 173);

    /// VIP row background (gold)
    pub const VIP_GOLD: (u8, u8, u8) = (255, 215, 0);

    /// CSS form of the header purple
    pub const HEADER_PURPLE_CSS: &str = "#6a0dad";
}

// =============================================================================
// Auxiliary Data
// =============================================================================

/// Default filename of the auxiliary seat-map document
pub const SEAT_DATA_FILE: &str = "seats.json";
