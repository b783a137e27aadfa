use clap::Parser;
use std::process;
use trip_processor::cli::{args::Args, commands};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => {
            // Success - the command has already reported its summary
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {error:#}");
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Trip Processor - Taxi Trip Record Loader");
    println!("========================================");
    println!();
    println!("Validate, enrich and bulk-load NYC taxi trip records from a CSV");
    println!("source into a SQLite table, with an auditable rejection log.");
    println!();
    println!("USAGE:");
    println!("    trip-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    load        Validate, sort and load a trip CSV into SQLite (main command)");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Load a trip file, replacing the trips table:");
    println!("    trip-processor load trips.csv trips.db excluded.csv");
    println!();
    println!("    # Validate only, without touching the database:");
    println!("    trip-processor load trips.csv trips.db excluded.csv --dry-run");
    println!();
    println!("    # Use the corrected distance pairing and a custom speed cap:");
    println!("    trip-processor load trips.csv trips.db excluded.csv \\");
    println!("                        --distance-pairing corrected --max-speed 100");
    println!();
    println!("For detailed help on any command, use:");
    println!("    trip-processor <COMMAND> --help");
}
