use admission_processor::cli::{args::Args, commands};
use clap::Parser;
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(commands::run(args));

    match result {
        Ok(()) => {
            // Success - results have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Admission Processor - Event Guest List Converter");
    println!("================================================");
    println!();
    println!("Convert event-admission CSV exports into print-ready HTML documents,");
    println!("CSV downloads and PDF tables with consistent VIP highlighting.");
    println!();
    println!("USAGE:");
    println!("    admission-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    show        Display the parsed guest list in the terminal");
    println!("    export      Write a guest-list artifact (html, csv, pdf, report)");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Show the guest list sorted by seat:");
    println!("    admission-processor show export.csv --sort seat");
    println!();
    println!("    # Export the VIP print document:");
    println!("    admission-processor export export.csv --format html --vip-only");
    println!();
    println!("    # Produce the combined three-section report:");
    println!("    admission-processor export export.csv --format report -o out/");
    println!();
    println!("For detailed help on any command, use:");
    println!("    admission-processor <COMMAND> --help");
}
