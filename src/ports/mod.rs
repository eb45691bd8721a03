//! Ports (interfaces) defining the boundaries of the application
//!
//! Ports are traits that define how the domain interacts with external
//! systems. They allow the domain to remain independent of specific
//! implementations:
//!
//! - **AdcPort**: how raw channel values are acquired (ADS1015, mock)
//! - **RecordSink**: how log records are persisted (CSV file, mock)

pub mod adc;
pub mod sink;

pub use adc::{AdcError, AdcPort};
pub use sink::{RecordSink, SinkError};
