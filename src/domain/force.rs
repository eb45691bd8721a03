//! Force conversion service
//!
//! Converts raw ADC readings to kilograms-force using the per-channel
//! calibration parameters, with an optional noise gate around the zero
//! point.

use crate::config::CHANNEL_COUNT;
use crate::domain::channel::{ChannelCalibration, ChannelId};

/// Converts raw readings to force values
///
/// Two historical conversion policies exist and are unified here behind
/// the optional threshold:
///
/// - `threshold: None` — `(raw - zero_offset) / factor`, unconditionally;
/// - `threshold: Some(t)` — readings within `t` raw units of the zero
///   offset are reported as exactly `0.0`, suppressing sensor noise
///   around the zero point; anything outside the band uses the same
///   formula.
#[derive(Clone, Debug)]
pub struct ForceConverter {
    channels: [ChannelCalibration; CHANNEL_COUNT],
    threshold: Option<i16>,
}

impl ForceConverter {
    /// Build a converter from per-channel factors and an optional noise gate
    ///
    /// Zero offsets start at the baseline of zero; [`set_zero_offsets`]
    /// installs calibrated values.
    ///
    /// [`set_zero_offsets`]: ForceConverter::set_zero_offsets
    pub fn new(factors: [f64; CHANNEL_COUNT], threshold: Option<i16>) -> Self {
        Self {
            channels: factors.map(ChannelCalibration::new),
            threshold,
        }
    }

    /// Install freshly captured zero offsets, one per channel
    ///
    /// Called once after calibration, before the sampling loop starts;
    /// the offsets then hold for the rest of the run.
    pub fn set_zero_offsets(&mut self, offsets: [i16; CHANNEL_COUNT]) {
        for (cal, offset) in self.channels.iter_mut().zip(offsets) {
            cal.set_zero_offset(offset);
        }
    }

    /// Zero offsets currently in effect
    pub fn zero_offsets(&self) -> [i16; CHANNEL_COUNT] {
        self.channels.map(|cal| cal.zero_offset())
    }

    /// Convert one raw reading to kilograms-force
    pub fn convert(&self, channel: ChannelId, raw: i16) -> f64 {
        let cal = &self.channels[channel.index()];
        if let Some(threshold) = self.threshold {
            // Widened so the band check cannot overflow at the i16 extremes.
            let delta = i32::from(raw) - i32::from(cal.zero_offset());
            if delta.abs() <= i32::from(threshold) {
                return 0.0;
            }
        }
        cal.to_kg(raw)
    }

    /// Convert one raw reading per channel, in channel order
    pub fn convert_all(&self, raw: &[i16; CHANNEL_COUNT]) -> [f64; CHANNEL_COUNT] {
        let mut forces = [0.0; CHANNEL_COUNT];
        for channel in ChannelId::ALL {
            forces[channel.index()] = self.convert(channel, raw[channel.index()]);
        }
        forces
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn channel(index: u8) -> ChannelId {
        ChannelId::new(index).unwrap()
    }

    #[test]
    fn simple_conversion_matches_formula_exactly() {
        let converter = ForceConverter::new([1000.0; 4], None);
        let forces = converter.convert_all(&[1000, 500, 0, -1000]);
        assert_eq!(forces, [1.0, 0.5, 0.0, -1.0]);
    }

    #[test]
    fn simple_conversion_ignores_small_readings() {
        // Without a threshold even one raw count registers.
        let converter = ForceConverter::new([1000.0; 4], None);
        assert_eq!(converter.convert(channel(0), 1), 0.001);
    }

    #[test]
    fn thresholded_conversion_gates_noise() {
        let converter = ForceConverter::new([1000.0; 4], Some(10));
        assert_eq!(converter.convert(channel(0), 5), 0.0);
        assert_abs_diff_eq!(converter.convert(channel(0), 15), 0.015);
    }

    #[test]
    fn threshold_band_is_inclusive() {
        let converter = ForceConverter::new([1000.0; 4], Some(10));
        assert_eq!(converter.convert(channel(0), 10), 0.0);
        assert_eq!(converter.convert(channel(0), -10), 0.0);
        assert_eq!(converter.convert(channel(0), 11), 0.011);
        assert_eq!(converter.convert(channel(0), -11), -0.011);
    }

    #[test]
    fn threshold_is_relative_to_zero_offset() {
        let mut converter = ForceConverter::new([1000.0; 4], Some(10));
        converter.set_zero_offsets([200, 0, 0, 0]);
        assert_eq!(converter.convert(channel(0), 205), 0.0);
        assert_abs_diff_eq!(converter.convert(channel(0), 400), 0.2);
        assert_abs_diff_eq!(converter.convert(channel(0), 0), -0.2);
    }

    #[test]
    fn band_check_survives_extreme_readings() {
        let mut converter = ForceConverter::new([1000.0; 4], Some(10));
        converter.set_zero_offsets([i16::MAX, 0, 0, 0]);
        // Farthest possible reading from the baseline; must not wrap.
        let force = converter.convert(channel(0), i16::MIN);
        assert_abs_diff_eq!(force, -65.535);
    }

    #[test]
    fn offsets_apply_per_channel() {
        let mut converter = ForceConverter::new([1000.0, 500.0, 1000.0, 1000.0], None);
        converter.set_zero_offsets([100, 50, 0, 0]);
        assert_eq!(converter.zero_offsets(), [100, 50, 0, 0]);
        assert_eq!(converter.convert(channel(0), 1100), 1.0);
        assert_eq!(converter.convert(channel(1), 550), 1.0);
    }
}
