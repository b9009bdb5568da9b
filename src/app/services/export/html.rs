//! Print-ready HTML rendering
//!
//! Produces the standalone documents handed to the platform's print dialog:
//! a single sorted table, and the combined report with one page-broken
//! section per listing. VIP rows carry an inline gold background so the
//! highlight survives outside the application's own stylesheet.

use serde::Serialize;
use tera::{Context, Tera};

use crate::app::models::AdmissionRecord;
use crate::constants::{EXPORT_HEADERS, colors};
use crate::{Error, Result};

const PRINT_LIST_TEMPLATE: &str = "print_list.html";
const COMBINED_REPORT_TEMPLATE: &str = "combined_report.html";

/// One titled listing of the combined report
#[derive(Debug, Clone)]
pub struct ReportSection {
    /// Heading shown above the section's table
    pub title: String,

    /// Records of this section, already in the section's order
    pub records: Vec<AdmissionRecord>,
}

/// Template context for a single table row
#[derive(Debug, Serialize)]
struct RowContext {
    cells: Vec<String>,
    is_vip: bool,
}

/// Template context for a report section
#[derive(Debug, Serialize)]
struct SectionContext {
    title: String,
    rows: Vec<RowContext>,
}

/// Renderer holding the embedded print templates
#[derive(Debug)]
pub struct HtmlRenderer {
    tera: Tera,
}

impl HtmlRenderer {
    /// Create a renderer with the embedded templates registered
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        tera.add_raw_template(
            PRINT_LIST_TEMPLATE,
            include_str!("templates/print_list.html"),
        )
        .map_err(|e| Error::template_rendering("Failed to register print-list template", e))?;

        tera.add_raw_template(
            COMBINED_REPORT_TEMPLATE,
            include_str!("templates/combined_report.html"),
        )
        .map_err(|e| Error::template_rendering("Failed to register report template", e))?;

        Ok(Self { tera })
    }

    /// Render a single sorted table as a standalone print document
    pub fn render_print_list(&self, title: &str, records: &[AdmissionRecord]) -> Result<String> {
        let mut context = base_context(title);
        context.insert("rows", &row_contexts(records));

        self.tera
            .render(PRINT_LIST_TEMPLATE, &context)
            .map_err(|e| Error::template_rendering("Failed to render print list", e))
    }

    /// Render the combined report, skipping sections with no rows
    pub fn render_combined_report(
        &self,
        title: &str,
        sections: &[ReportSection],
    ) -> Result<String> {
        let section_contexts: Vec<SectionContext> = sections
            .iter()
            .filter(|section| !section.records.is_empty())
            .map(|section| SectionContext {
                title: section.title.clone(),
                rows: row_contexts(&section.records),
            })
            .collect();

        let mut context = base_context(title);
        context.insert("sections", &section_contexts);

        self.tera
            .render(COMBINED_REPORT_TEMPLATE, &context)
            .map_err(|e| Error::template_rendering("Failed to render combined report", e))
    }
}

fn base_context(title: &str) -> Context {
    let mut context = Context::new();
    context.insert("title", title);
    context.insert("headers", &EXPORT_HEADERS);
    context.insert("header_color", colors::HEADER_PURPLE_CSS);
    context
}

fn row_contexts(records: &[AdmissionRecord]) -> Vec<RowContext> {
    records
        .iter()
        .map(|record| RowContext {
            cells: record.cells().iter().map(|c| c.to_string()).collect(),
            is_vip: record.is_vip,
        })
        .collect()
}
