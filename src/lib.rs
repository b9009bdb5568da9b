//! Admission Processor Library
//!
//! A Rust library for converting event-admission CSV exports into
//! print-ready guest-list artifacts (HTML, CSV and PDF).
//!
//! This library provides tools for:
//! - Parsing ticketing-platform CSV exports with fixed-position or header-driven columns
//! - Sorting admission records by guest name or by seating position
//! - Filtering VIP subsets while preserving display order
//! - Rendering print documents, CSV downloads and PDF tables that agree on
//!   sort order and VIP highlighting
//! - Deriving output filenames from the event name and date embedded in the
//!   uploaded filename

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod export;
        pub mod record_sorter;
        pub mod roster_csv_parser;
        pub mod seat_registry;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{AdmissionRecord, AdmissionTable, SortOrder};
pub use config::Config;

/// Result type alias for the admission processor
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for admission-list processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Roster export format error (too few lines, unusable layout)
    #[error("Roster format error in file '{file}': {message}")]
    RosterFormat { file: String, message: String },

    /// No rows survived field-count filtering
    #[error("No valid data found in file '{file}'")]
    NoValidData { file: String },

    /// CSV serialization error
    #[error("CSV export error: {message}")]
    CsvExport {
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// HTML template rendering error
    #[error("Template rendering error: {message}")]
    TemplateRendering {
        message: String,
        #[source]
        source: Box<tera::Error>,
    },

    /// PDF document assembly error
    #[error("PDF rendering error: {message}")]
    PdfRendering { message: String },

    /// Seat registry error (auxiliary seat-map data)
    #[error("Seat registry error: {message}")]
    SeatRegistry { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Date parsing error
    #[error("Date parsing error: {message}")]
    DateParsing {
        message: String,
        #[source]
        source: chrono::ParseError,
    },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an I/O error with a simple message
    pub fn io_error(message: impl Into<String>) -> Self {
        let message_str = message.into();
        Self::Io {
            message: message_str.clone(),
            source: std::io::Error::other(message_str),
        }
    }

    /// Create a roster format error
    pub fn roster_format(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::RosterFormat {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a no-valid-data error
    pub fn no_valid_data(file: impl Into<String>) -> Self {
        Self::NoValidData { file: file.into() }
    }

    /// Create a CSV export error with context
    pub fn csv_export(message: impl Into<String>, source: Option<csv::Error>) -> Self {
        Self::CsvExport {
            message: message.into(),
            source,
        }
    }

    /// Create a template rendering error
    pub fn template_rendering(message: impl Into<String>, source: tera::Error) -> Self {
        Self::TemplateRendering {
            message: message.into(),
            source: Box::new(source),
        }
    }

    /// Create a PDF rendering error
    pub fn pdf_rendering(message: impl Into<String>) -> Self {
        Self::PdfRendering {
            message: message.into(),
        }
    }

    /// Create a seat registry error
    pub fn seat_registry(message: impl Into<String>) -> Self {
        Self::SeatRegistry {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a date parsing error
    pub fn date_parsing(message: impl Into<String>, source: chrono::ParseError) -> Self {
        Self::DateParsing {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvExport {
            message: "CSV serialization failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<tera::Error> for Error {
    fn from(error: tera::Error) -> Self {
        Self::TemplateRendering {
            message: "Template rendering failed".to_string(),
            source: Box::new(error),
        }
    }
}

impl From<chrono::ParseError> for Error {
    fn from(error: chrono::ParseError) -> Self {
        Self::DateParsing {
            message: "Date parsing failed".to_string(),
            source: error,
        }
    }
}
