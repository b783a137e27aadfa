//! Batch pipeline orchestration
//!
//! Coordinates one complete load: read raw records from the CSV source,
//! validate each through [`TripValidator`] (rejections stream to the
//! [`RejectionLog`] as they occur), stable-sort the accepted trips by
//! numeric key, and hand the ordered batch to the [`StoreLoader`]. The run
//! is single-threaded and synchronous; any I/O failure aborts it.

use crate::app::models::{ColumnMap, RawTripRecord, Verdict};
use crate::app::services::rejection_log::RejectionLog;
use crate::app::services::store_loader::StoreLoader;
use crate::app::services::trip_validator::{TripValidator, ValidationStats};
use crate::config::Config;
use crate::sort;
use crate::{AcceptedTrip, Error, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::path::Path;
use tracing::{debug, info};

/// Statistics for one batch run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchStats {
    /// Raw records read from the source
    pub total_input: usize,
    /// Records accepted into the batch
    pub accepted: usize,
    /// Advisory log-only rejections (records still accepted)
    pub soft_rejected: usize,
    /// Rows written to the rejection log, advisories included
    pub rejection_rows: usize,
    /// Rows stored in the trip table (zero on dry runs)
    pub stored: usize,
    /// Store transaction commits issued
    pub commits: usize,
    /// Per-reason rejection counts
    pub validation: ValidationStats,
}

impl BatchStats {
    /// Records excluded from the accepted set
    pub fn excluded(&self) -> usize {
        self.validation.total_excluded()
    }

    /// Acceptance rate as a percentage of input records
    pub fn acceptance_rate(&self) -> f64 {
        if self.total_input == 0 {
            100.0
        } else {
            (self.accepted as f64 / self.total_input as f64) * 100.0
        }
    }

    /// One-line summary for logging and CLI reporting
    pub fn summary(&self) -> String {
        format!(
            "Batch summary: {} -> {} accepted ({:.1}%) | excluded: {} | \
             soft rejects: {} | stored: {}",
            self.total_input,
            self.accepted,
            self.acceptance_rate(),
            self.excluded(),
            self.soft_rejected,
            self.stored
        )
    }
}

/// One-shot batch pipeline: extract, validate, sort, load
#[derive(Debug)]
pub struct BatchPipeline {
    config: Config,
}

impl BatchPipeline {
    /// Create a pipeline after validating the configuration
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Run one complete batch
    ///
    /// Reads `input_csv`, writes every rejection to `rejection_log_path`,
    /// and replaces the trip table in `db_path` with the sorted accepted
    /// set. With `dry_run` the store phase is skipped; validation and the
    /// rejection log still run in full.
    pub fn run(
        &self,
        input_csv: &Path,
        db_path: &Path,
        rejection_log_path: &Path,
        show_progress: bool,
        dry_run: bool,
    ) -> Result<BatchStats> {
        info!("Starting batch run for {}", input_csv.display());

        let keyed = self.extract_and_validate(input_csv, rejection_log_path, show_progress)?;

        let mut stats = keyed.stats;
        info!(
            "Validation complete: {} records -> {} accepted, {} excluded, {} soft-rejected",
            stats.total_input,
            stats.accepted,
            stats.excluded(),
            stats.soft_rejected
        );

        debug!("Sorting {} accepted trips by numeric id", keyed.trips.len());
        let sorted = sort::merge_sort(&keyed.trips);
        let trips: Vec<AcceptedTrip> = sorted.into_iter().map(|(_, trip)| trip).collect();

        if dry_run {
            info!("Dry run: skipping store load of {} trips", trips.len());
            return Ok(stats);
        }

        let loader = StoreLoader::new(self.config.loader.clone());
        let load_stats = loader.load(db_path, &trips)?;
        stats.stored = load_stats.rows_inserted;
        stats.commits = load_stats.commits;

        info!("{}", stats.summary());
        Ok(stats)
    }

    /// Read the source and validate every record, streaming rejections to
    /// the log as they occur
    fn extract_and_validate(
        &self,
        input_csv: &Path,
        rejection_log_path: &Path,
        show_progress: bool,
    ) -> Result<ValidatedBatch> {
        let file = File::open(input_csv).map_err(|e| {
            Error::io(format!("cannot open input '{}'", input_csv.display()), e)
        })?;
        let mut reader = csv::Reader::from_reader(file);
        let headers = reader
            .headers()
            .map_err(|e| {
                Error::csv(
                    input_csv.display().to_string(),
                    "cannot read header row",
                    Some(e),
                )
            })?
            .clone();
        let columns = ColumnMap::from_header(&headers);

        let mut validator = TripValidator::new(self.config.validation.clone());
        let mut rejection_log = RejectionLog::create(rejection_log_path)?;
        let mut stats = BatchStats::default();
        let mut trips: Vec<(Option<i64>, AcceptedTrip)> = Vec::new();

        let progress = show_progress.then(create_validation_spinner);

        for result in reader.records() {
            let record = result.map_err(|e| {
                Error::csv(
                    input_csv.display().to_string(),
                    format!("cannot read record {}", stats.total_input + 1),
                    Some(e),
                )
            })?;
            stats.total_input += 1;

            let raw = RawTripRecord::new(&columns, &record);
            match validator.validate(&raw) {
                Verdict::Accepted { trip, advisories } => {
                    for advisory in advisories {
                        stats.validation.record(advisory.reason);
                        stats.soft_rejected += 1;
                        rejection_log.record(&advisory)?;
                    }
                    stats.accepted += 1;
                    trips.push((Some(trip.numeric_id), *trip));
                }
                Verdict::Rejected(entry) => {
                    stats.validation.record(entry.reason);
                    rejection_log.record(&entry)?;
                }
            }

            if let Some(pb) = &progress {
                pb.inc(1);
            }
        }

        stats.rejection_rows = rejection_log.finish()?;

        if let Some(pb) = progress {
            pb.finish_with_message(format!(
                "Validation complete: {} accepted of {}",
                stats.accepted, stats.total_input
            ));
        }

        Ok(ValidatedBatch { trips, stats })
    }
}

/// Accepted trips keyed for sorting, plus the validation-phase statistics
struct ValidatedBatch {
    trips: Vec<(Option<i64>, AcceptedTrip)>,
    stats: BatchStats,
}

/// Spinner for the validation phase (record count is unknown up front)
fn create_validation_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {pos} records {msg}")
            .unwrap()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ "),
    );
    pb.set_message("validating".to_string());
    pb
}
