// Copyright 2026 Baspi driver contributors
// SPDX-License-Identifier: Apache-2.0

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use baspi_log::warn;

use crate::settings::{FilterSetting, GainSetting, StageSetting};
use crate::{Error, Result};

/// The settable values the amplifier exposes to an instrumentation framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    Gain,
    Lpf,
}

impl Parameter {
    pub const ALL: [Parameter; 2] = [Parameter::Gain, Parameter::Lpf];

    pub fn name(self) -> &'static str {
        match self {
            Parameter::Gain => "gain",
            Parameter::Lpf => "LPF",
        }
    }

    pub fn label(self) -> &'static str {
        self.name()
    }

    pub fn unit(self) -> Option<&'static str> {
        match self {
            Parameter::Gain => None,
            Parameter::Lpf => Some("Hz"),
        }
    }

    pub fn allowed_values(self) -> Vec<f64> {
        match self {
            Parameter::Gain => values_of::<GainSetting>(),
            Parameter::Lpf => values_of::<FilterSetting>(),
        }
    }

    /// Look up the setting of stage `S` that `value` selects.
    ///
    /// A value outside the domain is logged and rejected before anything is applied.
    pub fn setting<S: StageSetting>(self, value: f64) -> Result<S> {
        S::from_value(value).map_err(|_| {
            let err = Error::InvalidParameterValue {
                parameter: self.name(),
                value,
                allowed: S::choices(),
            };
            warn!("{}", err);
            err
        })
    }
}

fn values_of<S: StageSetting>() -> Vec<f64> {
    S::ALL.iter().map(|setting| setting.value()).collect()
}

impl Display for Parameter {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Parameter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Parameter::ALL
            .into_iter()
            .find(|parameter| parameter.name() == s)
            .ok_or_else(|| Error::UnknownParameter(s.to_string()))
    }
}
