//! Show command implementation
//!
//! Renders the parsed guest list as a table in the terminal. VIP rows are
//! highlighted gold, matching the convention of the print and PDF outputs;
//! the VIP flag itself is never shown as a column.

use colored::Colorize;
use tracing::{debug, info};

use super::shared::{load_configuration, load_seat_registry, load_table, setup_logging};
use crate::Result;
use crate::app::models::AdmissionRecord;
use crate::app::services::record_sorter;
use crate::cli::args::ShowArgs;
use crate::constants::{EXPORT_HEADERS, colors};

/// Show command runner
pub async fn run_show(args: ShowArgs) -> Result<()> {
    setup_logging(args.get_log_level(), args.quiet)?;

    info!("Starting admission processor");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let config = load_configuration(args.config_file.as_deref())?;

    // Startup load of the auxiliary seat map; unused downstream, non-fatal
    let _seat_registry = load_seat_registry(&config, args.seats_path.as_deref()).await;

    let (table, stats) = load_table(&args.input, args.header_mode, config.default_sort).await?;

    let mut records = record_sorter::sorted_copy(table.records(), args.sort.into());
    if args.vip_only {
        records = record_sorter::vip_subset(&records);
        if records.is_empty() {
            println!("No VIP guests in this list.");
            return Ok(());
        }
    }

    print_table(&records);

    println!();
    println!(
        "{} guests displayed ({} VIP), {} of {} lines parsed",
        records.len(),
        records.iter().filter(|r| r.is_vip).count(),
        stats.records_parsed,
        stats.total_lines
    );

    Ok(())
}

/// Print records as an aligned table with highlighted VIP rows
fn print_table(records: &[AdmissionRecord]) {
    let widths = column_widths(records);

    let header_line = format_row(&EXPORT_HEADERS.map(String::from), &widths);
    let (hr, hg, hb) = colors::HEADER_PURPLE;
    println!("{}", header_line.bold().white().on_truecolor(hr, hg, hb));

    for record in records {
        let cells = record.cells().map(String::from);
        let line = format_row(&cells, &widths);
        if record.is_vip {
            let (vr, vg, vb) = colors::VIP_GOLD;
            println!("{}", line.bold().black().on_truecolor(vr, vg, vb));
        } else {
            println!("{}", line);
        }
    }
}

/// Width of each column: the longest cell, headers included
fn column_widths(records: &[AdmissionRecord]) -> [usize; 5] {
    let mut widths = EXPORT_HEADERS.map(str::len);
    for record in records {
        for (width, cell) in widths.iter_mut().zip(record.cells()) {
            *width = (*width).max(cell.chars().count());
        }
    }
    widths
}

fn format_row(cells: &[String; 5], widths: &[usize; 5]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = width))
        .collect::<Vec<_>>()
        .join("  ")
}
