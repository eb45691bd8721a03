//! Multi-Channel Load-Cell Data Logger
//!
//! This library samples four analog load-cell channels through an ADS1015
//! ADC, converts raw readings to calibrated force values, and appends
//! timestamped rows to a durable CSV log.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Domain Layer                                 │
//! │  - ChannelId / ChannelCalibration                                │
//! │  - ForceConverter service (offset, threshold, scale)             │
//! │  - LogRecord entity                                              │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Ports (Traits)                               │
//! │  - AdcPort: read raw channel values                              │
//! │  - RecordSink: persist log records                               │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Adapters                                     │
//! │  - Ads1015Adapter: ADS1015 over Linux I2C                        │
//! │  - CsvFileSink: append-only CSV log file                         │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The application services (`calibrate`, `sampler`) sit on top of the
//! ports, so tests can drive them with in-memory implementations.

/// Domain layer - pure business logic
pub mod domain;

/// Ports - traits defining boundaries
pub mod ports;

/// Adapters - concrete implementations
pub mod adapters;

/// Guided zero-offset capture
pub mod calibrate;

/// Cancellation token for the sampling loop
pub mod cancel;

/// Compile-time defaults and the runtime configuration object
pub mod config;

/// Top-level error type
pub mod error;

/// Periodic sampling loop
pub mod sampler;

// Re-export key domain types
pub use domain::{ChannelCalibration, ChannelId, ForceConverter, LogRecord};

// Re-export key port traits
pub use ports::{AdcPort, RecordSink};

pub use cancel::CancelToken;
pub use config::LoggerConfig;
pub use error::Error;
