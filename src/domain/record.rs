//! Log record entity
//!
//! One timestamped row of converted force values, produced per sampling
//! tick and immutable once written to the log.

use chrono::{DateTime, Local};

use crate::config::CHANNEL_COUNT;

/// Timestamp layout used in the log and the console summary
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One appended row: a timestamp plus one force value per channel
#[derive(Clone, Debug, PartialEq)]
pub struct LogRecord {
    /// Local time the tick's readings were taken, second resolution
    pub timestamp: DateTime<Local>,
    /// Converted forces in kilograms, in channel order
    pub forces: [f64; CHANNEL_COUNT],
}

impl LogRecord {
    /// Create a record for one completed tick
    pub fn new(timestamp: DateTime<Local>, forces: [f64; CHANNEL_COUNT]) -> Self {
        Self { timestamp, forces }
    }

    /// Timestamp rendered as `YYYY-MM-DD HH:MM:SS`
    pub fn timestamp_string(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timestamp_renders_at_second_resolution() {
        let timestamp = Local.with_ymd_and_hms(2024, 3, 7, 9, 5, 30).unwrap();
        let record = LogRecord::new(timestamp, [0.0; 4]);
        assert_eq!(record.timestamp_string(), "2024-03-07 09:05:30");
    }
}
