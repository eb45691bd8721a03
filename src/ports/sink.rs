//! Record sink port - abstraction for persisting log records
//!
//! This trait lets the sampling loop append records without knowing the
//! storage format or medium.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::LogRecord;

/// Error type for persistence operations
///
/// Write failures (file unavailable, permission denied, disk full) are
/// fatal and terminate the loop.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The log could not be created or its header written
    #[error("failed to initialize log {path}: {source}")]
    Initialize {
        /// Log destination
        path: PathBuf,
        /// Underlying I/O failure
        source: io::Error,
    },
    /// A record could not be appended
    #[error("failed to append to log {path}: {source}")]
    Append {
        /// Log destination
        path: PathBuf,
        /// Underlying I/O failure
        source: io::Error,
    },
}

/// Port for persisting log records
pub trait RecordSink {
    /// Prepare the log for a fresh run
    ///
    /// Truncates any prior contents and writes the header row, exactly
    /// once per process start.
    fn initialize(&mut self) -> Result<(), SinkError>;

    /// Persist one record
    ///
    /// The record must be durable before the call returns; the sampling
    /// loop relies on nothing being buffered across the sleep interval.
    fn append(&mut self, record: &LogRecord) -> Result<(), SinkError>;
}
