// Copyright 2026 Baspi driver contributors
// SPDX-License-Identifier: Apache-2.0

//! Translation between stage settings and line states.
//!
//! Applying a setting first drives every line of the stage low and only then
//! raises the lines of the setting's pattern, so no stale bit of the previous
//! setting survives. Reading a stage returns `None` when the observed pattern
//! is not in the stage's table.

use baspi_log::{diagnostic, info, warn};

use crate::driver::DigitalLineDriver;
use crate::lines::{
    ALL_LINES, CONTROL_LINE_HIGH, CONTROL_LINE_LOW, Line, LineMode, LineState, format_pattern,
};
use crate::settings::{FilterSetting, GainSetting, StageSetting};
use crate::{Error, Result};

/// The gain/filter codec, holding the line driver it operates on.
pub struct Codec<D> {
    driver: D,
}

impl<D: DigitalLineDriver> Codec<D> {
    pub fn new(driver: D) -> Self {
        Codec { driver }
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    pub fn into_inner(self) -> D {
        self.driver
    }

    fn drive(&mut self, line: Line, state: LineState) -> Result<()> {
        diagnostic!("{} -> {}", line, state);
        self.driver
            .write(line, state)
            .map_err(|e| Error::line_driver(line, e))
    }

    fn sense(&mut self, line: Line) -> Result<LineState> {
        self.driver
            .read(line)
            .map_err(|e| Error::line_driver(line, e))
    }

    /// Configure every line of the amplifier as a digital output.
    pub fn configure_outputs(&mut self) -> Result<()> {
        for line in ALL_LINES {
            self.driver
                .set_mode(line, LineMode::Output)
                .map_err(|e| Error::line_driver(line, e))?;
        }
        Ok(())
    }

    /// Drive the two fixed-function control lines to their operating levels.
    pub fn drive_control_lines(&mut self) -> Result<()> {
        self.drive(CONTROL_LINE_HIGH, LineState::High)?;
        self.drive(CONTROL_LINE_LOW, LineState::Low)
    }

    pub fn apply<S: StageSetting>(&mut self, setting: S) -> Result<()> {
        for &line in S::LINES {
            self.drive(line, LineState::Low)?;
        }
        for (&line, &state) in S::LINES.iter().zip(setting.pattern()) {
            if state.is_high() {
                self.drive(line, LineState::High)?;
            }
        }
        info!("{} set to {}", S::STAGE, setting);
        Ok(())
    }

    /// Apply an untyped value. An unrecognized value writes no line.
    pub fn apply_value<S: StageSetting>(&mut self, value: f64) -> Result<S> {
        let setting = S::from_value(value).inspect_err(|e| warn!("{}", e))?;
        self.apply(setting)?;
        Ok(setting)
    }

    pub fn read<S: StageSetting>(&mut self) -> Result<Option<S>> {
        let observed = S::LINES
            .iter()
            .map(|&line| self.sense(line))
            .collect::<Result<Vec<_>>>()?;
        let setting = S::decode(&observed);
        if setting.is_none() {
            warn!(
                "{} lines read {}, which is not a valid {} setting",
                S::STAGE,
                format_pattern(&observed),
                S::STAGE
            );
        }
        Ok(setting)
    }

    pub fn apply_gain(&mut self, setting: GainSetting) -> Result<()> {
        self.apply(setting)
    }

    pub fn apply_gain_value(&mut self, value: f64) -> Result<GainSetting> {
        self.apply_value(value)
    }

    pub fn read_gain(&mut self) -> Result<Option<GainSetting>> {
        self.read()
    }

    pub fn apply_filter(&mut self, setting: FilterSetting) -> Result<()> {
        self.apply(setting)
    }

    pub fn apply_filter_value(&mut self, value: f64) -> Result<FilterSetting> {
        self.apply_value(value)
    }

    pub fn read_filter(&mut self) -> Result<Option<FilterSetting>> {
        self.read()
    }

    /// Drive every line low, control lines included.
    pub fn disable_all(&mut self) -> Result<()> {
        for line in ALL_LINES {
            self.drive(line, LineState::Low)?;
        }
        info!("all lines driven low");
        Ok(())
    }
}
