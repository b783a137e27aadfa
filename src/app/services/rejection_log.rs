//! Append-only rejection log
//!
//! One CSV row per rejected (or soft-rejected) record, written as rejections
//! occur: `raw_id,reason,sample_fields`. The log is diagnostic output, not
//! the store of record — no atomicity is guaranteed beyond a deterministic
//! flush at batch end, and the underlying writer also flushes when dropped
//! so early-error paths release the file cleanly.

use crate::app::models::RejectedEntry;
use crate::constants::REJECTION_LOG_HEADER;
use crate::{Error, Result};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Single-writer rejection log for one batch run
#[derive(Debug)]
pub struct RejectionLog {
    writer: csv::Writer<File>,
    path: PathBuf,
    rows_written: usize,
}

impl RejectionLog {
    /// Create (or truncate) the log file and write the header row
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .map_err(|e| Error::io(format!("cannot create rejection log '{}'", path.display()), e))?;
        let mut writer = csv::Writer::from_writer(file);

        writer
            .write_record(REJECTION_LOG_HEADER)
            .map_err(|e| Error::csv(path.display().to_string(), "cannot write header", Some(e)))?;

        Ok(Self {
            writer,
            path: path.to_path_buf(),
            rows_written: 0,
        })
    }

    /// Append one rejection row
    pub fn record(&mut self, entry: &RejectedEntry) -> Result<()> {
        self.writer
            .write_record([
                entry.raw_id.as_str(),
                entry.reason.as_str(),
                entry.context.as_str(),
            ])
            .map_err(|e| {
                Error::csv(
                    self.path.display().to_string(),
                    format!("cannot append rejection for '{}'", entry.raw_id),
                    Some(e),
                )
            })?;

        self.rows_written += 1;
        Ok(())
    }

    /// Number of rejection rows appended so far (header excluded)
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Flush and close the log, returning the number of rows written
    pub fn finish(mut self) -> Result<usize> {
        self.writer
            .flush()
            .map_err(|e| Error::io(format!("cannot flush rejection log '{}'", self.path.display()), e))?;

        debug!(
            "Rejection log closed: {} rows at {}",
            self.rows_written,
            self.path.display()
        );
        Ok(self.rows_written)
    }
}
