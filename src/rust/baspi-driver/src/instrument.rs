// Copyright 2026 Baspi driver contributors
// SPDX-License-Identifier: Apache-2.0

use baspi_log::info;

use crate::Result;
use crate::codec::Codec;
use crate::config::AmplifierConfig;
use crate::driver::DigitalLineDriver;
use crate::idn::{BASPI_IDN, Idn};
use crate::parameter::Parameter;
use crate::settings::{FilterSetting, GainSetting, StageSetting};

/// A Basel Precision Instruments SP983C IV amplifier.
///
/// Owns the line driver of the I/O controller the amplifier is wired to. The
/// connection itself is established by whoever constructs the driver.
pub struct Baspi<D> {
    name: String,
    codec: Codec<D>,
}

impl<D: DigitalLineDriver> Baspi<D> {
    /// Bring the amplifier up.
    ///
    /// Configures all lines as outputs, drives the control lines to their fixed
    /// levels and applies the configured gain and cutoff, in this order. A line
    /// driver failure aborts the bring-up and is returned as is.
    pub fn new(driver: D, config: &AmplifierConfig) -> Result<Self> {
        let mut codec = Codec::new(driver);
        codec.configure_outputs()?;
        codec.drive_control_lines()?;
        codec.apply_gain(config.gain)?;
        codec.apply_filter(config.lpf)?;
        info!(
            "Connected to Baspi IV amplifier '{}' (gain {}, LPF {})",
            config.name,
            config.gain,
            config.lpf
        );
        Ok(Baspi {
            name: config.name.clone(),
            codec,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn idn(&self) -> Idn {
        BASPI_IDN
    }

    pub fn set_gain(&mut self, gain: GainSetting) -> Result<()> {
        self.codec.apply_gain(gain)
    }

    /// The gain selected by the lines, `None` if they hold no valid pattern.
    pub fn gain(&mut self) -> Result<Option<GainSetting>> {
        self.codec.read_gain()
    }

    pub fn set_lpf(&mut self, cutoff: FilterSetting) -> Result<()> {
        self.codec.apply_filter(cutoff)
    }

    /// The cutoff selected by the lines, `None` if they hold no valid pattern.
    pub fn lpf(&mut self) -> Result<Option<FilterSetting>> {
        self.codec.read_filter()
    }

    /// Set a parameter by name. The value is validated before any line is written.
    pub fn set(&mut self, name: &str, value: f64) -> Result<()> {
        match name.parse::<Parameter>()? {
            parameter @ Parameter::Gain => self.codec.apply_gain(parameter.setting(value)?),
            parameter @ Parameter::Lpf => self.codec.apply_filter(parameter.setting(value)?),
        }
    }

    /// Get a parameter by name, `None` if the lines hold no valid pattern.
    pub fn get(&mut self, name: &str) -> Result<Option<f64>> {
        let value = match name.parse::<Parameter>()? {
            Parameter::Gain => self.gain()?.map(StageSetting::value),
            Parameter::Lpf => self.lpf()?.map(StageSetting::value),
        };
        Ok(value)
    }

    /// Drive every line low, putting the amplifier in its safe state.
    ///
    /// Settings can still be applied afterwards; the control lines stay low until
    /// the amplifier is brought up again.
    pub fn all_off(&mut self) -> Result<()> {
        self.codec.disable_all()
    }

    pub fn driver(&self) -> &D {
        self.codec.driver()
    }

    pub fn driver_mut(&mut self) -> &mut D {
        self.codec.driver_mut()
    }

    pub fn into_driver(self) -> D {
        self.codec.into_inner()
    }
}
