//! Multi-sensor load cell logger binary
//!
//! Wires the ADS1015 adapter, the CSV sink, and the sampling loop
//! together, runs the guided zero-offset calibration when noise gating
//! is configured, and turns SIGINT/SIGTERM into a clean exit.

use std::io;

use simple_signal::{self, Signal};

use loadlog::adapters::{Ads1015Adapter, CsvFileSink};
use loadlog::calibrate::Calibrator;
use loadlog::domain::ForceConverter;
use loadlog::sampler::SamplingLoop;
use loadlog::{CancelToken, Error, LoggerConfig};

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = LoggerConfig::default();

    println!("Multi-sensor load cell logger");
    println!(
        "Taking readings every {} minutes and writing to {}",
        config.sample_interval.as_secs() / 60,
        config.log_path.display()
    );
    println!("Press Ctrl-C to exit");

    let cancel = CancelToken::new();
    simple_signal::set_handler(&[Signal::Int, Signal::Term], {
        let cancel = cancel.clone();
        move |_signals| cancel.cancel()
    });

    let mut adc = Ads1015Adapter::open(&config.i2c_bus)?;

    let mut converter =
        ForceConverter::new(config.calibration_factors, config.noise_threshold);
    if config.noise_threshold.is_some() {
        let stdin = io::stdin();
        let offsets = Calibrator::new(config.countdown_secs).capture(
            &mut adc,
            stdin.lock(),
            io::stdout(),
        )?;
        converter.set_zero_offsets(offsets);
    }

    let sink = CsvFileSink::new(&config.log_path);
    SamplingLoop::new(
        adc,
        sink,
        converter,
        config.sample_interval,
        cancel,
        io::stdout(),
    )
    .run()?;

    println!("\nExiting...");
    Ok(())
}
