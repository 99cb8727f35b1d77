// Copyright 2026 Baspi driver contributors
// SPDX-License-Identifier: Apache-2.0

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::quantity;
use crate::unit::{ParseQuantityError, parse_si_prefixed, si_prefixed};

quantity!(Frequency);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Hertz;

impl Hertz {
    pub const SYMBOL: &'static str = "Hz";
}

impl Display for Hertz {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(Self::SYMBOL)
    }
}

pub const fn hertz<T>(value: T) -> Frequency<Hertz, T> {
    Frequency {
        value,
        unit: Hertz,
    }
}

/// Formats with an SI prefix (`100 kHz`); the alternate form prints the plain value (`100000 Hz`).
impl Display for Frequency<Hertz> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{} {}", self.value, self.unit)
        } else {
            let (mantissa, prefix) = si_prefixed(self.value);
            write!(f, "{mantissa} {prefix}{}", self.unit)
        }
    }
}

impl FromStr for Frequency<Hertz> {
    type Err = ParseQuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_si_prefixed(s, Hertz::SYMBOL).map(hertz)
    }
}
