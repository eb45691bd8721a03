//! Periodic sampling loop
//!
//! Drives one read-convert-print-append tick per interval, forever,
//! until the cancellation token fires. The loop is an explicit state
//! machine rather than a bare `loop`/sleep: the token is checked before
//! each tick and observed during the blocking wait, so an interrupt
//! during the fifteen-minute pause terminates promptly and never leaves
//! a partial row behind.

use std::io::Write;
use std::time::Duration;

use chrono::Local;

use crate::cancel::CancelToken;
use crate::config::CHANNEL_COUNT;
use crate::domain::{ChannelId, ForceConverter, LogRecord};
use crate::error::Error;
use crate::ports::adc::AdcPort;
use crate::ports::sink::RecordSink;

/// Loop lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    /// Log not yet prepared
    Init,
    /// Ticking until cancelled
    Running,
    /// Cancellation observed; loop is done
    Terminated,
}

/// The read-convert-log loop
///
/// Fully sequential: exactly one tick is ever in flight, followed by a
/// blocking token-aware wait. The converter is read-only here; its zero
/// offsets were fixed before the loop was built.
pub struct SamplingLoop<A, S, W> {
    adc: A,
    sink: S,
    converter: ForceConverter,
    interval: Duration,
    cancel: CancelToken,
    out: W,
}

impl<A, S, W> SamplingLoop<A, S, W>
where
    A: AdcPort,
    S: RecordSink,
    W: Write,
{
    /// Assemble the loop; nothing runs until [`run`](SamplingLoop::run)
    pub fn new(
        adc: A,
        sink: S,
        converter: ForceConverter,
        interval: Duration,
        cancel: CancelToken,
        out: W,
    ) -> Self {
        Self {
            adc,
            sink,
            converter,
            interval,
            cancel,
            out,
        }
    }

    /// Run until cancelled
    ///
    /// Returns `Ok(())` on cancellation; any acquisition or log failure
    /// propagates immediately and terminates the loop.
    pub fn run(mut self) -> Result<(), Error> {
        let mut state = State::Init;
        loop {
            state = match state {
                State::Init => {
                    self.sink.initialize()?;
                    log::info!(
                        "sampling every {}s across {} channels",
                        self.interval.as_secs(),
                        CHANNEL_COUNT
                    );
                    State::Running
                }
                State::Running => {
                    if self.cancel.is_cancelled() {
                        State::Terminated
                    } else {
                        self.tick()?;
                        if self.cancel.wait_timeout(self.interval) {
                            State::Terminated
                        } else {
                            State::Running
                        }
                    }
                }
                State::Terminated => {
                    log::info!("sampling loop terminated");
                    return Ok(());
                }
            };
        }
    }

    /// One complete read-convert-print-append cycle
    fn tick(&mut self) -> Result<(), Error> {
        let mut raw = [0i16; CHANNEL_COUNT];
        for channel in ChannelId::ALL {
            raw[channel.index()] = self.adc.read_raw(channel)?;
        }

        let forces = self.converter.convert_all(&raw);
        let record = LogRecord::new(Local::now(), forces);

        writeln!(self.out, "Timestamp: {}", record.timestamp_string())?;
        for channel in ChannelId::ALL {
            writeln!(
                self.out,
                "Sensor {}: {:.2} kg",
                channel.number(),
                forces[channel.index()]
            )?;
        }

        self.sink.append(&record)?;
        log::debug!("appended row for {}", record.timestamp_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::adc::AdcError;
    use crate::ports::sink::SinkError;
    use std::sync::{Arc, Mutex};
    use std::thread;

    struct FixedAdc([i16; CHANNEL_COUNT]);

    impl AdcPort for FixedAdc {
        fn read_raw(&mut self, channel: ChannelId) -> Result<i16, AdcError> {
            Ok(self.0[channel.index()])
        }
    }

    struct FailingAdc;

    impl AdcPort for FailingAdc {
        fn read_raw(&mut self, channel: ChannelId) -> Result<i16, AdcError> {
            Err(AdcError::Read {
                channel: channel.index(),
                detail: "bus timeout".into(),
            })
        }
    }

    #[derive(Clone, Default)]
    struct SharedSink {
        initialized: Arc<Mutex<usize>>,
        rows: Arc<Mutex<Vec<LogRecord>>>,
    }

    impl RecordSink for SharedSink {
        fn initialize(&mut self) -> Result<(), SinkError> {
            *self.initialized.lock().unwrap() += 1;
            Ok(())
        }

        fn append(&mut self, record: &LogRecord) -> Result<(), SinkError> {
            self.rows.lock().unwrap().push(record.clone());
            Ok(())
        }
    }

    fn converter() -> ForceConverter {
        ForceConverter::new([1000.0; CHANNEL_COUNT], None)
    }

    #[test]
    fn precancelled_loop_initializes_but_never_ticks() {
        let sink = SharedSink::default();
        let cancel = CancelToken::new();
        cancel.cancel();

        let sampler = SamplingLoop::new(
            FixedAdc([0; 4]),
            sink.clone(),
            converter(),
            Duration::from_secs(1),
            cancel,
            Vec::new(),
        );
        sampler.run().unwrap();

        assert_eq!(*sink.initialized.lock().unwrap(), 1);
        assert!(sink.rows.lock().unwrap().is_empty());
    }

    #[test]
    fn cancellation_during_wait_leaves_one_complete_row() {
        let sink = SharedSink::default();
        let cancel = CancelToken::new();
        let signaller = cancel.clone();
        let handle = thread::spawn(move || {
            thread::sleep(Duration::from_millis(30));
            signaller.cancel();
        });

        let mut out = Vec::new();
        let sampler = SamplingLoop::new(
            FixedAdc([1000, 500, 0, -1000]),
            sink.clone(),
            converter(),
            Duration::from_secs(60),
            cancel,
            &mut out,
        );
        sampler.run().unwrap();
        handle.join().unwrap();

        let rows = sink.rows.lock().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].forces, [1.0, 0.5, 0.0, -1.0]);

        let summary = String::from_utf8(out).unwrap();
        assert!(summary.contains("Sensor 1: 1.00 kg"));
        assert!(summary.contains("Sensor 4: -1.00 kg"));
    }

    #[test]
    fn acquisition_failure_terminates_the_loop() {
        let sink = SharedSink::default();
        let sampler = SamplingLoop::new(
            FailingAdc,
            sink.clone(),
            converter(),
            Duration::from_secs(1),
            CancelToken::new(),
            Vec::new(),
        );

        assert!(matches!(sampler.run(), Err(Error::Adc(_))));
        assert!(sink.rows.lock().unwrap().is_empty());
    }
}
