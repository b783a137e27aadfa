//! Command-line argument definitions for the trip processor
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::config::{Config, CoordinatePairing, LoaderConfig, ValidationConfig};
use crate::constants::{
    DEFAULT_COMMIT_INTERVAL, DEFAULT_MAX_REASONABLE_SPEED_KMPH, DEFAULT_ROUND_TRIP_THRESHOLD_KM,
};
use crate::{Error, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the trip processor
///
/// Validates, enriches and bulk-loads NYC taxi trip records from a
/// header-delimited CSV file into a SQLite table, writing rejected records
/// to an audit log.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "trip-processor",
    version,
    about = "Validate, sort and bulk-load taxi trip records from CSV into SQLite",
    long_about = "A batch ETL tool that ingests raw taxi trip records from a delimited text \
                  source, validates and enriches each record, sorts the surviving records by \
                  the numeric key embedded in their identifiers, and replaces the contents of \
                  a SQLite trip table with the result. Every rejected record is logged with a \
                  structured reason code for auditability."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the trip processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Validate, sort and load a trip CSV into SQLite (main command)
    Load(LoadArgs),
}

/// Arguments for the load command (main batch processing)
#[derive(Debug, Clone, Parser)]
pub struct LoadArgs {
    /// Input CSV file with a header row
    ///
    /// Required columns: id, pickup_datetime, dropoff_datetime, the four
    /// coordinate columns and trip_duration. vendor_id, passenger_count and
    /// store_and_fwd_flag are copied through when present.
    #[arg(value_name = "INPUT_CSV")]
    pub input: PathBuf,

    /// SQLite database file receiving the trips table
    ///
    /// Created if it does not exist. The trips table is dropped and
    /// recreated on every load; prior contents are not merged.
    #[arg(value_name = "DATABASE")]
    pub database: PathBuf,

    /// Rejection log CSV written during validation
    ///
    /// One row per rejected or soft-rejected record:
    /// raw_id,reason,sample_fields. Overwritten on every run.
    #[arg(value_name = "REJECTION_LOG")]
    pub rejection_log: PathBuf,

    /// Maximum plausible trip speed in km/h
    ///
    /// Trips computing faster than this are rejected as unrealistic_speed.
    #[arg(
        long = "max-speed",
        value_name = "KMPH",
        default_value_t = DEFAULT_MAX_REASONABLE_SPEED_KMPH,
        help = "Maximum plausible trip speed in km/h"
    )]
    pub max_speed_kmph: f64,

    /// Distance in km under which a trip counts as a round trip
    #[arg(
        long = "round-trip-threshold",
        value_name = "KM",
        default_value_t = DEFAULT_ROUND_TRIP_THRESHOLD_KM,
        help = "Distance in km under which a trip counts as a round trip"
    )]
    pub round_trip_threshold_km: f64,

    /// Coordinate pairing policy for the distance computation
    ///
    /// `legacy` reproduces the historical pairing (dropoff longitude
    /// substituted on both points); `corrected` uses the true
    /// pickup/dropoff pairing.
    #[arg(
        long = "distance-pairing",
        value_enum,
        value_name = "POLICY",
        default_value = "legacy",
        help = "Coordinate pairing policy for the distance computation"
    )]
    pub distance_pairing: CoordinatePairing,

    /// Number of inserted rows per commit during the store load
    #[arg(
        long = "commit-interval",
        value_name = "ROWS",
        default_value_t = DEFAULT_COMMIT_INTERVAL,
        help = "Number of inserted rows per commit during the store load"
    )]
    pub commit_interval: usize,

    /// Validate and log rejections without touching the store
    #[arg(long = "dry-run", help = "Validate without writing to the database")]
    pub dry_run: bool,

    /// Suppress the progress spinner and summary output
    #[arg(short = 'q', long = "quiet", help = "Suppress progress and summary output")]
    pub quiet: bool,

    /// Increase logging verbosity (-v: debug, -vv: trace)
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: debug, -vv: trace)"
    )]
    pub verbose: u8,
}

impl LoadArgs {
    /// Validate argument combinations before processing begins
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            return Err(Error::configuration(format!(
                "Input file not found: {}",
                self.input.display()
            )));
        }

        if !self.input.is_file() {
            return Err(Error::configuration(format!(
                "Input path is not a file: {}",
                self.input.display()
            )));
        }

        Ok(())
    }

    /// Log level implied by the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }

    /// Whether to render the progress spinner
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }

    /// Assemble the run configuration from the argument values
    pub fn to_config(&self) -> Config {
        Config {
            validation: ValidationConfig {
                max_reasonable_speed_kmph: self.max_speed_kmph,
                round_trip_threshold_km: self.round_trip_threshold_km,
                coordinate_pairing: self.distance_pairing,
                ..ValidationConfig::default()
            },
            loader: LoaderConfig {
                commit_interval: self.commit_interval,
            },
        }
    }
}
