//! Adapters - concrete implementations of ports
//!
//! Adapters connect the domain to the outside world by implementing
//! the port traits.
//!
//! # Available Adapters
//!
//! - **ads1015**: ADS1015 4-channel ADC on a Linux I2C bus
//! - **csv_file**: append-only CSV log file

pub mod ads1015;
pub mod csv_file;

pub use ads1015::Ads1015Adapter;
pub use csv_file::{CsvFileSink, CSV_HEADER};
