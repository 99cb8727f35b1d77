// Copyright 2026 Baspi driver contributors
// SPDX-License-Identifier: Apache-2.0

//! Pin map of the amplifier's digital control connector.
//!
//! The pin numbers are the digital pin numbers of the I/O controller and are a
//! fixed hardware contract.

use std::fmt::{self, Display, Formatter};

/// A digital line of the I/O controller, identified by its pin number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Line(pub u8);

impl Line {
    pub const fn pin(self) -> u8 {
        self.0
    }
}

impl Display for Line {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "pin {}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineState {
    #[default]
    Low,
    High,
}

impl LineState {
    pub fn is_high(self) -> bool {
        self == LineState::High
    }
}

impl From<bool> for LineState {
    fn from(value: bool) -> Self {
        if value {
            LineState::High
        } else {
            LineState::Low
        }
    }
}

impl From<LineState> for bool {
    fn from(state: LineState) -> Self {
        state.is_high()
    }
}

impl From<LineState> for u8 {
    fn from(state: LineState) -> Self {
        u8::from(state.is_high())
    }
}

impl Display for LineState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineMode {
    Output,
    Input,
}

/// Every line the amplifier occupies, pins 2 to 11.
pub const ALL_LINES: [Line; 10] = [
    Line(2),
    Line(3),
    Line(4),
    Line(5),
    Line(6),
    Line(7),
    Line(8),
    Line(9),
    Line(10),
    Line(11),
];

/// Gain stage select lines, low-to-high pin order.
pub const GAIN_LINES: [Line; 3] = [Line(2), Line(4), Line(6)];

/// Low-pass filter select lines, low-to-high pin order.
pub const FILTER_LINES: [Line; 4] = [Line(3), Line(5), Line(7), Line(9)];

/// Control line held high while the amplifier is in use.
pub const CONTROL_LINE_HIGH: Line = Line(10);

/// Control line held low while the amplifier is in use.
pub const CONTROL_LINE_LOW: Line = Line(11);

/// Render a group of line states as `[1,0,0]`.
pub fn format_pattern(pattern: &[LineState]) -> String {
    let bits = pattern
        .iter()
        .map(LineState::to_string)
        .collect::<Vec<_>>()
        .join(",");
    format!("[{bits}]")
}
