//! Export command implementation
//!
//! Produces one artifact per invocation: a print-ready HTML document, a CSV
//! download, a PDF table, or the combined three-section report. The
//! displayed table is parsed fresh and never mutated; every renderer works
//! on a sorted working copy.

use std::path::Path;

use tracing::{debug, info};

use super::shared::{load_configuration, load_seat_registry, load_table, setup_logging};
use crate::app::models::{AdmissionRecord, SortOrder};
use crate::app::services::export::{
    HtmlRenderer, ReportSection, formatted_base_name, render_csv, render_pdf,
};
use crate::app::services::record_sorter;
use crate::cli::args::{ExportArgs, ExportFormat};
use crate::constants::PDF_TITLE;
use crate::{Error, Result};

/// Export command runner
pub async fn run_export(args: ExportArgs) -> Result<()> {
    setup_logging(args.get_log_level(), args.quiet)?;

    info!("Starting admission processor");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let config = load_configuration(args.config_file.as_deref())?;

    // Startup load of the auxiliary seat map; unused downstream, non-fatal
    let _seat_registry = load_seat_registry(&config, args.seats_path.as_deref()).await;

    let (table, _stats) = load_table(&args.input, args.header_mode, config.default_sort).await?;

    let order: SortOrder = args.sort.into();
    let base_name = formatted_base_name(args.input.file_name().and_then(|n| n.to_str()));

    let output_dir = args.output_dir.clone().unwrap_or_else(|| config.output_dir.clone());
    tokio::fs::create_dir_all(&output_dir).await.map_err(|e| {
        Error::io(
            format!("Failed to create output directory {}", output_dir.display()),
            e,
        )
    })?;

    let (file_name, payload) = match args.format {
        ExportFormat::Csv => render_csv_artifact(table.records(), order, args.vip_only, &base_name)?,
        ExportFormat::Pdf => render_pdf_artifact(table.records(), order, args.vip_only, &base_name)?,
        ExportFormat::Html => render_html_artifact(table.records(), order, args.vip_only, &base_name)?,
        ExportFormat::Report => render_report_artifact(table.records(), &base_name)?,
    };

    let output_path = output_dir.join(safe_file_name(&file_name));
    write_artifact(&output_path, &payload).await?;

    info!("Wrote {} bytes to {}", payload.len(), output_path.display());
    println!(
        "Exported {} guests ({} VIP) to {}",
        table.len(),
        table.vip_count(),
        output_path.display()
    );

    Ok(())
}

/// Rows an export works on: sorted working copy, optionally VIP-filtered
fn working_rows(
    records: &[AdmissionRecord],
    order: SortOrder,
    vip_only: bool,
) -> Vec<AdmissionRecord> {
    let sorted = record_sorter::sorted_copy(records, order);
    if vip_only {
        record_sorter::vip_subset(&sorted)
    } else {
        sorted
    }
}

fn render_csv_artifact(
    records: &[AdmissionRecord],
    order: SortOrder,
    vip_only: bool,
    base_name: &str,
) -> Result<(String, Vec<u8>)> {
    let rows = working_rows(records, order, vip_only);
    let csv = render_csv(&rows)?;
    Ok((format!("{}.csv", base_name), csv.into_bytes()))
}

fn render_pdf_artifact(
    records: &[AdmissionRecord],
    order: SortOrder,
    vip_only: bool,
    base_name: &str,
) -> Result<(String, Vec<u8>)> {
    let rows = working_rows(records, order, vip_only);
    let pdf = render_pdf(PDF_TITLE, &rows, |i| rows[i].is_vip)?;
    Ok((format!("{}.pdf", base_name), pdf))
}

fn render_html_artifact(
    records: &[AdmissionRecord],
    order: SortOrder,
    vip_only: bool,
    base_name: &str,
) -> Result<(String, Vec<u8>)> {
    let renderer = HtmlRenderer::new()?;

    // The VIP-only print document is always sorted by name
    let (title, rows, file_name) = if vip_only {
        (
            "Print VIPs",
            working_rows(records, SortOrder::Name, true),
            format!("{} - VIPs.html", base_name),
        )
    } else {
        (
            "Print List",
            working_rows(records, order, false),
            format!("{}.html", base_name),
        )
    };

    let html = renderer.render_print_list(title, &rows)?;
    Ok((file_name, html.into_bytes()))
}

fn render_report_artifact(
    records: &[AdmissionRecord],
    base_name: &str,
) -> Result<(String, Vec<u8>)> {
    let renderer = HtmlRenderer::new()?;

    let sections = [
        ReportSection {
            title: "Full Admission List (Alphabetical)".to_string(),
            records: record_sorter::sorted_copy(records, SortOrder::Name),
        },
        ReportSection {
            title: "Full Admission List (Seat Order)".to_string(),
            records: record_sorter::sorted_copy(records, SortOrder::Seat),
        },
        ReportSection {
            title: "VIP Guest List".to_string(),
            records: record_sorter::sorted_copy(&record_sorter::vip_subset(records), SortOrder::Name),
        },
    ];

    let html = renderer.render_combined_report("Print All", &sections)?;
    Ok((format!("{} - Report.html", base_name), html.into_bytes()))
}

/// Make a derived name usable as a filesystem entry
///
/// The DD/MM/YY date in derived names contains path separators; browsers
/// substitute them on download and so do we.
fn safe_file_name(name: &str) -> String {
    name.replace(['/', '\\'], "-")
}

async fn write_artifact(path: &Path, payload: &[u8]) -> Result<()> {
    tokio::fs::write(path, payload)
        .await
        .map_err(|e| Error::io(format!("Failed to write {}", path.display()), e))
}
