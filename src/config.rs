//! Logger configuration
//!
//! Compile-time defaults plus the [`LoggerConfig`] object handed to the
//! calibrator and sampling loop. Nothing here is runtime-configurable;
//! deployments change the constants and rebuild.

use std::path::PathBuf;
use std::time::Duration;

/// Number of analog inputs on the ADS1015 (one load cell each)
pub const CHANNEL_COUNT: usize = 4;

/// Pause between sampling ticks
pub const SAMPLE_INTERVAL: Duration = Duration::from_secs(15 * 60);

/// Per-channel divisor converting offset-corrected raw units to kg
pub const DEFAULT_CALIBRATION_FACTORS: [f64; CHANNEL_COUNT] = [1000.0; CHANNEL_COUNT];

/// Raw-unit band around the zero offset treated as sensor noise
pub const DEFAULT_NOISE_THRESHOLD: i16 = 10;

/// Settling countdown before zero offsets are captured (seconds)
pub const CALIBRATION_COUNTDOWN_SECS: u32 = 5;

/// CSV log file, relative to the working directory
pub const DEFAULT_LOG_PATH: &str = "load_cell_data.csv";

/// I2C character device the ADS1015 hangs off
pub const DEFAULT_I2C_BUS: &str = "/dev/i2c-1";

/// Configuration for one logger run
///
/// A single instance is built at startup and passed by reference into
/// the calibrator and sampling loop. There is one writer (calibration,
/// before the loop starts) and many readers afterwards; no module-level
/// mutable state exists.
#[derive(Clone, Debug)]
pub struct LoggerConfig {
    /// I2C bus device path
    pub i2c_bus: String,
    /// CSV log destination
    pub log_path: PathBuf,
    /// Pause between sampling ticks
    pub sample_interval: Duration,
    /// Per-channel calibration divisors, never zero
    pub calibration_factors: [f64; CHANNEL_COUNT],
    /// Noise gate in raw ADC units; `None` reports every reading as-is
    pub noise_threshold: Option<i16>,
    /// Settling countdown before zero-offset capture (seconds)
    pub countdown_secs: u32,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::thresholded()
    }
}

impl LoggerConfig {
    /// Config with noise gating and guided zero-offset calibration
    pub fn thresholded() -> Self {
        Self {
            i2c_bus: DEFAULT_I2C_BUS.into(),
            log_path: DEFAULT_LOG_PATH.into(),
            sample_interval: SAMPLE_INTERVAL,
            calibration_factors: DEFAULT_CALIBRATION_FACTORS,
            noise_threshold: Some(DEFAULT_NOISE_THRESHOLD),
            countdown_secs: CALIBRATION_COUNTDOWN_SECS,
        }
    }

    /// Config that reports every reading unconditionally
    ///
    /// No noise gate and no startup calibration; zero offsets stay at
    /// their configured baseline.
    pub fn simple() -> Self {
        Self {
            noise_threshold: None,
            ..Self::thresholded()
        }
    }
}
