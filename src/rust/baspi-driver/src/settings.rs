// Copyright 2026 Baspi driver contributors
// SPDX-License-Identifier: Apache-2.0

//! Gain and low-pass filter settings and their line patterns.
//!
//! Neither stage uses a binary encoding of its setting; each pattern is a fixed
//! table entry dictated by the amplifier's selector circuitry.

use std::fmt::{self, Debug, Display, Formatter};
use std::str::FromStr;

use baspi_units::unit::parse_si_prefixed;
use baspi_units::{Frequency, Hertz, hertz};
use serde::{Deserialize, Serialize};

use crate::lines::LineState::{High as H, Low as L};
use crate::lines::{FILTER_LINES, GAIN_LINES, Line, LineState};
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageKind {
    Gain,
    Filter,
}

impl Display for StageKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            StageKind::Gain => f.write_str("gain"),
            StageKind::Filter => f.write_str("LPF"),
        }
    }
}

/// A setting of one amplifier stage, selected by a fixed pattern on the stage's lines.
pub trait StageSetting: Copy + Eq + Debug + Display + Sized + 'static {
    const STAGE: StageKind;

    /// Lines of the stage, in the order of [`StageSetting::pattern`].
    const LINES: &'static [Line];

    /// Every setting of the stage.
    const ALL: &'static [Self];

    fn pattern(self) -> &'static [LineState];

    fn value(self) -> f64;

    /// Look up the setting whose pattern equals `observed` exactly.
    fn decode(observed: &[LineState]) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|setting| setting.pattern() == observed)
    }

    /// Match `value` exactly against the stage's domain.
    fn from_value(value: f64) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|setting| setting.value() == value)
            .ok_or_else(|| Error::UnrecognizedSetting {
                stage: Self::STAGE,
                value,
                choices: Self::choices(),
            })
    }

    /// The stage's settings, comma separated, for messages.
    fn choices() -> String {
        Self::ALL
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

struct TableEntry<S, const N: usize> {
    setting: S,
    value: f64,
    pattern: [LineState; N],
}

const fn settings_of<S: Copy, const N: usize, const M: usize>(
    table: &[TableEntry<S, N>; M],
) -> [S; M] {
    let mut settings = [table[0].setting; M];
    let mut i = 1;
    while i < M {
        settings[i] = table[i].setting;
        i += 1;
    }
    settings
}

const fn patterns_of<S: Copy, const N: usize, const M: usize>(
    table: &[TableEntry<S, N>; M],
) -> [[LineState; N]; M] {
    let mut patterns = [table[0].pattern; M];
    let mut i = 1;
    while i < M {
        patterns[i] = table[i].pattern;
        i += 1;
    }
    patterns
}

/// Transimpedance gain of the amplifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub enum GainSetting {
    OneGiga,
    HundredMega,
    TenMega,
    OneMega,
    HundredKilo,
}

// Indexed by discriminant. Patterns over pins 2, 4, 6.
const GAIN_TABLE: [TableEntry<GainSetting, 3>; 5] = [
    TableEntry {
        setting: GainSetting::OneGiga,
        value: 1e9,
        pattern: [L, L, H],
    },
    TableEntry {
        setting: GainSetting::HundredMega,
        value: 1e8,
        pattern: [H, H, L],
    },
    TableEntry {
        setting: GainSetting::TenMega,
        value: 1e7,
        pattern: [L, H, L],
    },
    TableEntry {
        setting: GainSetting::OneMega,
        value: 1e6,
        pattern: [H, L, L],
    },
    TableEntry {
        setting: GainSetting::HundredKilo,
        value: 1e5,
        pattern: [L, L, L],
    },
];

const GAIN_SETTINGS: [GainSetting; 5] = settings_of(&GAIN_TABLE);

impl StageSetting for GainSetting {
    const STAGE: StageKind = StageKind::Gain;
    const LINES: &'static [Line] = &GAIN_LINES;
    const ALL: &'static [Self] = &GAIN_SETTINGS;

    fn pattern(self) -> &'static [LineState] {
        static PATTERNS: [[LineState; 3]; 5] = patterns_of(&GAIN_TABLE);
        &PATTERNS[self as usize]
    }

    fn value(self) -> f64 {
        GAIN_TABLE[self as usize].value
    }
}

impl Display for GainSetting {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:e}", self.value())
    }
}

impl TryFrom<f64> for GainSetting {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        Self::from_value(value)
    }
}

impl From<GainSetting> for f64 {
    fn from(setting: GainSetting) -> Self {
        setting.value()
    }
}

/// Accepts `1e8`, `1E8`, `100000000` or `100M`.
impl FromStr for GainSetting {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_value(parse_si_prefixed(s, "")?)
    }
}

/// Cutoff frequency of the output low-pass filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub enum FilterSetting {
    OneMegahertz,
    HundredKilohertz,
    ThirtyKilohertz,
    TenKilohertz,
    ThreeKilohertz,
    OneKilohertz,
    ThreeHundredHertz,
    HundredHertz,
    ThirtyHertz,
}

// Indexed by discriminant. Patterns over pins 3, 5, 7, 9.
const FILTER_TABLE: [TableEntry<FilterSetting, 4>; 9] = [
    TableEntry {
        setting: FilterSetting::OneMegahertz,
        value: 1e6,
        pattern: [L, L, L, H],
    },
    TableEntry {
        setting: FilterSetting::HundredKilohertz,
        value: 100e3,
        pattern: [H, H, H, L],
    },
    TableEntry {
        setting: FilterSetting::ThirtyKilohertz,
        value: 30e3,
        pattern: [L, H, H, L],
    },
    TableEntry {
        setting: FilterSetting::TenKilohertz,
        value: 10e3,
        pattern: [H, L, H, L],
    },
    TableEntry {
        setting: FilterSetting::ThreeKilohertz,
        value: 3e3,
        pattern: [L, L, H, L],
    },
    TableEntry {
        setting: FilterSetting::OneKilohertz,
        value: 1e3,
        pattern: [H, H, L, L],
    },
    TableEntry {
        setting: FilterSetting::ThreeHundredHertz,
        value: 300.0,
        pattern: [L, H, L, L],
    },
    TableEntry {
        setting: FilterSetting::HundredHertz,
        value: 100.0,
        pattern: [H, L, L, L],
    },
    TableEntry {
        setting: FilterSetting::ThirtyHertz,
        value: 30.0,
        pattern: [L, L, L, L],
    },
];

const FILTER_SETTINGS: [FilterSetting; 9] = settings_of(&FILTER_TABLE);

impl FilterSetting {
    pub fn cutoff(self) -> Frequency<Hertz> {
        hertz(self.value())
    }
}

impl StageSetting for FilterSetting {
    const STAGE: StageKind = StageKind::Filter;
    const LINES: &'static [Line] = &FILTER_LINES;
    const ALL: &'static [Self] = &FILTER_SETTINGS;

    fn pattern(self) -> &'static [LineState] {
        static PATTERNS: [[LineState; 4]; 9] = patterns_of(&FILTER_TABLE);
        &PATTERNS[self as usize]
    }

    fn value(self) -> f64 {
        FILTER_TABLE[self as usize].value
    }
}

impl Display for FilterSetting {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.cutoff(), f)
    }
}

impl TryFrom<f64> for FilterSetting {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        Self::from_value(value)
    }
}

impl From<FilterSetting> for f64 {
    fn from(setting: FilterSetting) -> Self {
        setting.value()
    }
}

impl From<FilterSetting> for Frequency<Hertz> {
    fn from(setting: FilterSetting) -> Self {
        setting.cutoff()
    }
}

/// Accepts `1e3`, `1000`, `1k` or `1 kHz`.
impl FromStr for FilterSetting {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_value(s.parse::<Frequency<Hertz>>()?.value())
    }
}
