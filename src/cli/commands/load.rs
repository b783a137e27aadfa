//! Load command implementation
//!
//! Orchestrates one complete batch run: logging setup, argument validation,
//! pipeline execution, and the final summary report.

use super::shared::setup_logging;
use crate::Result;
use crate::app::services::pipeline::{BatchPipeline, BatchStats};
use crate::cli::args::LoadArgs;
use colored::*;
use indicatif::HumanDuration;
use std::time::Instant;
use tracing::{debug, info};

/// Run the load command
pub fn run_load(args: LoadArgs) -> Result<BatchStats> {
    let start_time = Instant::now();

    setup_logging(&args)?;

    info!("Starting trip processor");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let pipeline = BatchPipeline::new(args.to_config())?;
    let stats = pipeline.run(
        &args.input,
        &args.database,
        &args.rejection_log,
        args.show_progress(),
        args.dry_run,
    )?;

    if !args.quiet {
        report_summary(&args, &stats, start_time);
    }

    Ok(stats)
}

/// Print the human-readable run summary to stdout
fn report_summary(args: &LoadArgs, stats: &BatchStats, start_time: Instant) {
    let headline = if args.dry_run {
        "Dry run complete".bold().yellow()
    } else {
        "Load complete".bold().green()
    };

    println!();
    println!("{headline}");
    println!("  Input records:  {}", stats.total_input);
    println!(
        "  Accepted:       {} ({:.1}%)",
        stats.accepted,
        stats.acceptance_rate()
    );
    println!("  Excluded:       {}", stats.excluded());
    println!("  Soft rejects:   {}", stats.soft_rejected);
    println!(
        "  Rejection log:  {} rows at {}",
        stats.rejection_rows,
        args.rejection_log.display()
    );
    if !args.dry_run {
        println!(
            "  Stored:         {} trips in {}",
            stats.stored,
            args.database.display()
        );
    }
    println!(
        "  Elapsed:        {}",
        HumanDuration(start_time.elapsed())
    );

    report_rejection_breakdown(stats);
}

/// Print per-reason rejection counts, omitting zero rows
fn report_rejection_breakdown(stats: &BatchStats) {
    if stats.validation.total_logged() == 0 {
        return;
    }

    let rows = [
        ("missing_id", stats.validation.missing_id),
        ("duplicate_id", stats.validation.duplicate_id),
        ("invalid_id_format", stats.validation.invalid_id_format),
        ("missing_datetime", stats.validation.missing_datetime),
        ("invalid_coordinates", stats.validation.invalid_coordinates),
        (
            "invalid_trip_duration",
            stats.validation.invalid_trip_duration,
        ),
        ("distance_calc_error", stats.validation.distance_calc_error),
        ("unrealistic_speed", stats.validation.unrealistic_speed),
        ("outside_of_nyc (soft)", stats.validation.outside_of_region),
    ];

    println!();
    println!("{}", "Rejections by reason".bold());
    for (name, count) in rows {
        if count > 0 {
            println!("  {name:<22} {count}");
        }
    }
}
