//! CSV file sink
//!
//! Implements the [`RecordSink`] trait with a plain CSV file. Each
//! append opens the file, writes one row, syncs it, and closes it
//! again, so no handle stays open across the sampling interval and
//! every completed tick is on disk before the next one starts.

use std::fmt::Write as _;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::domain::LogRecord;
use crate::ports::sink::{RecordSink, SinkError};

/// Fixed header row: timestamp plus one force column per channel
pub const CSV_HEADER: &str = "Timestamp,Force1 (kg),Force2 (kg),Force3 (kg),Force4 (kg)";

/// Append-only CSV log file
pub struct CsvFileSink {
    path: PathBuf,
}

impl CsvFileSink {
    /// Create a sink for the given path; nothing is touched until
    /// [`RecordSink::initialize`] runs
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Log destination
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_header(&self) -> io::Result<()> {
        let mut file = File::create(&self.path)?;
        writeln!(file, "{CSV_HEADER}")?;
        file.sync_all()
    }

    fn write_row(&self, record: &LogRecord) -> io::Result<()> {
        let mut row = record.timestamp_string();
        for force in &record.forces {
            // Forces are externalized with exactly 2 decimal places.
            let _ = write!(row, ",{force:.2}");
        }
        let mut file = OpenOptions::new().append(true).open(&self.path)?;
        writeln!(file, "{row}")?;
        file.sync_all()
    }
}

impl RecordSink for CsvFileSink {
    fn initialize(&mut self) -> Result<(), SinkError> {
        self.write_header().map_err(|source| SinkError::Initialize {
            path: self.path.clone(),
            source,
        })?;
        log::info!("log initialized at {}", self.path.display());
        Ok(())
    }

    fn append(&mut self, record: &LogRecord) -> Result<(), SinkError> {
        self.write_row(record).map_err(|source| SinkError::Append {
            path: self.path.clone(),
            source,
        })
    }
}
