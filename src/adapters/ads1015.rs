//! ADS1015 adapter
//!
//! Implements the [`AdcPort`] trait with the `ads1x1x` driver over a
//! Linux I2C character device. The four load cells hang off the
//! single-ended inputs A0-A3; conversions run in one-shot mode, one
//! blocking conversion per read.

use ads1x1x::ic::{Ads1015, Resolution12Bit};
use ads1x1x::interface::I2cInterface;
use ads1x1x::mode::OneShot;
use ads1x1x::{channel, Ads1x1x, FullScaleRange, SlaveAddr};
use embedded_hal::adc::OneShot as _;
use linux_embedded_hal::I2cdev;
use nb::block;

use crate::domain::ChannelId;
use crate::ports::adc::{AdcError, AdcPort};

type Driver = Ads1x1x<I2cInterface<I2cdev>, Ads1015, Resolution12Bit, OneShot>;

/// ADS1015 on a Linux I2C bus, default slave address (0x48)
pub struct Ads1015Adapter {
    adc: Driver,
}

impl Ads1015Adapter {
    /// Open the bus device and configure the converter
    ///
    /// One-time setup; the full-scale range is fixed at ±4.096 V.
    pub fn open(bus: &str) -> Result<Self, AdcError> {
        let dev = I2cdev::new(bus).map_err(|e| AdcError::Open(format!("{bus}: {e}")))?;
        let mut adc = Ads1x1x::new_ads1015(dev, SlaveAddr::default());
        adc.set_full_scale_range(FullScaleRange::Within4_096V)
            .map_err(|e| AdcError::Open(format!("{bus}: {e:?}")))?;
        log::info!("ADS1015 ready on {bus}");
        Ok(Self { adc })
    }
}

impl AdcPort for Ads1015Adapter {
    fn read_raw(&mut self, ch: ChannelId) -> Result<i16, AdcError> {
        let result = match ch.index() {
            0 => block!(self.adc.read(&mut channel::SingleA0)),
            1 => block!(self.adc.read(&mut channel::SingleA1)),
            2 => block!(self.adc.read(&mut channel::SingleA2)),
            _ => block!(self.adc.read(&mut channel::SingleA3)),
        };
        result.map_err(|e| AdcError::Read {
            channel: ch.index(),
            detail: format!("{e:?}"),
        })
    }
}
