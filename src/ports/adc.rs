//! ADC port - abstraction for reading raw channel values
//!
//! This trait lets the calibrator and sampling loop read load-cell
//! channels without knowing the specific acquisition hardware.

use thiserror::Error;

use crate::domain::ChannelId;

/// Error type for raw acquisition operations
///
/// Acquisition failures are fatal: callers propagate them and the
/// process terminates. No retry is attempted.
#[derive(Debug, Error)]
pub enum AdcError {
    /// The bus device could not be opened or configured
    #[error("failed to open ADC bus: {0}")]
    Open(String),
    /// A conversion result could not be read back
    #[error("failed to read ADC channel {channel}: {detail}")]
    Read {
        /// Zero-based channel index
        channel: usize,
        /// Driver-level failure description
        detail: String,
    },
}

/// Port for reading raw load-cell samples
///
/// One synchronous operation: read the current raw value for a channel.
/// Bus initialization happens once, when the adapter is constructed,
/// before any channel is read.
///
/// # Example Implementation
///
/// ```ignore
/// struct FixedAdc([i16; 4]);
///
/// impl AdcPort for FixedAdc {
///     fn read_raw(&mut self, channel: ChannelId) -> Result<i16, AdcError> {
///         Ok(self.0[channel.index()])
///     }
/// }
/// ```
pub trait AdcPort {
    /// Read the current raw sample for one channel
    fn read_raw(&mut self, channel: ChannelId) -> Result<i16, AdcError>;
}
