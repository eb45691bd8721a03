//! Top-level error type
//!
//! The taxonomy is small: acquisition failures and log-write failures
//! are both fatal and unrecovered, and console I/O can fail while
//! prompting the operator. An operator interrupt is not an error; it is
//! handled by the cancellation token.

use thiserror::Error;

use crate::ports::adc::AdcError;
use crate::ports::sink::SinkError;

/// Fatal failure terminating the logger
#[derive(Debug, Error)]
pub enum Error {
    /// Bus or channel read failure
    #[error(transparent)]
    Adc(#[from] AdcError),
    /// Log create or append failure
    #[error(transparent)]
    Sink(#[from] SinkError),
    /// Console prompt or summary write failure
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
