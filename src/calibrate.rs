//! Guided zero-offset capture
//!
//! Before the thresholded logger starts sampling, the operator removes
//! all load from the sensors and the current raw value of each channel
//! is stored as its zero offset. The no-load condition is advisory
//! only: a prompt plus a fixed settling countdown, nothing verified
//! programmatically. Capture is a single sample per channel, with no
//! averaging and no retry; a bus failure propagates as fatal.

use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use crate::config::CHANNEL_COUNT;
use crate::domain::ChannelId;
use crate::error::Error;
use crate::ports::adc::AdcPort;

/// Operator-guided zero-offset capture
pub struct Calibrator {
    countdown_secs: u32,
}

impl Calibrator {
    /// Calibrator with the given settling countdown
    pub fn new(countdown_secs: u32) -> Self {
        Self { countdown_secs }
    }

    /// Run the guided capture and return one zero offset per channel
    ///
    /// Blocks on one line of operator input (the confirmation that the
    /// sensors are unloaded), counts down the settling delay, then
    /// reads each channel once. The prompt input and output are
    /// injected so tests can drive the procedure with in-memory
    /// buffers; the binary passes stdin and stdout.
    pub fn capture<A, R, W>(
        &self,
        adc: &mut A,
        mut input: R,
        mut out: W,
    ) -> Result<[i16; CHANNEL_COUNT], Error>
    where
        A: AdcPort,
        R: BufRead,
        W: Write,
    {
        writeln!(
            out,
            "Calibrating sensors. Please ensure no weight is on any sensor."
        )?;
        write!(out, "Press Enter when ready...")?;
        out.flush()?;
        let mut confirmation = String::new();
        input.read_line(&mut confirmation)?;

        for remaining in (1..=self.countdown_secs).rev() {
            writeln!(out, "Calibrating in {remaining} seconds...")?;
            thread::sleep(Duration::from_secs(1));
        }

        let mut offsets = [0i16; CHANNEL_COUNT];
        for channel in ChannelId::ALL {
            offsets[channel.index()] = adc.read_raw(channel)?;
        }

        writeln!(out, "Calibration complete. Zero offsets: {offsets:?}")?;
        log::info!("zero offsets captured: {offsets:?}");
        Ok(offsets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::adc::AdcError;
    use std::io::Cursor;

    struct FixedAdc {
        values: [i16; CHANNEL_COUNT],
        reads: usize,
    }

    impl AdcPort for FixedAdc {
        fn read_raw(&mut self, channel: ChannelId) -> Result<i16, AdcError> {
            self.reads += 1;
            Ok(self.values[channel.index()])
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

    #[test]
    fn capture_stores_current_raw_values() {
        let mut adc = FixedAdc {
            values: [17, -3, 250, 0],
            reads: 0,
        };
        let mut out = Vec::new();

        let offsets = Calibrator::new(0)
            .capture(&mut adc, Cursor::new("\n"), &mut out)
            .unwrap();

        assert_eq!(offsets, [17, -3, 250, 0]);
        assert_eq!(adc.reads, CHANNEL_COUNT);

        let transcript = String::from_utf8(out).unwrap();
        assert!(transcript.contains("Press Enter when ready..."));
        assert!(transcript.contains("Calibration complete."));
    }

    #[test]
    fn countdown_prints_one_line_per_second() {
        let mut adc = FixedAdc {
            values: [0; 4],
            reads: 0,
        };
        let mut out = Vec::new();

        Calibrator::new(2)
            .capture(&mut adc, Cursor::new("\n"), &mut out)
            .unwrap();

        let transcript = String::from_utf8(out).unwrap();
        assert!(transcript.contains("Calibrating in 2 seconds..."));
        assert!(transcript.contains("Calibrating in 1 seconds..."));
    }

    #[test]
    fn bus_failure_propagates() {
        let mut out = Vec::new();
        let result = Calibrator::new(0).capture(&mut FailingAdc, Cursor::new("\n"), &mut out);
        assert!(matches!(result, Err(Error::Adc(_))));
    }
}
