//! Export renderers for the admission table
//!
//! Three independent renderers consume the displayed records and produce an
//! external artifact: a print-ready HTML document, a CSV download, and a PDF
//! table. All of them share the fixed five-column header, respect the chosen
//! sort order, and preserve VIP highlighting through a renderer-appropriate
//! mechanism (inline row style, nothing for CSV, gold row background for
//! PDF). Output filenames come from [`filename`], which recovers the event
//! name and date embedded in the uploaded export's filename.
//!
//! Renderers are pure: they map records to a string or byte stream and never
//! touch the table they were handed.

pub mod csv;
pub mod filename;
pub mod html;
pub mod pdf;

#[cfg(test)]
pub mod tests;

// Re-export main entry points for easy access
pub use self::csv::render_csv;
pub use self::filename::formatted_base_name;
pub use self::html::{HtmlRenderer, ReportSection};
pub use self::pdf::render_pdf;
