// Copyright 2026 Baspi driver contributors
// SPDX-License-Identifier: Apache-2.0

use crate::lines::{Line, LineMode, LineState};

/// Access to the digital lines of the I/O controller the amplifier is wired to.
///
/// Implementations own the connection to the controller. Every call is a blocking
/// round trip; a `write` must have taken effect when the call returns.
pub trait DigitalLineDriver {
    type Error: std::error::Error + Send + Sync + 'static;

    fn set_mode(&mut self, line: Line, mode: LineMode) -> Result<(), Self::Error>;

    fn write(&mut self, line: Line, state: LineState) -> Result<(), Self::Error>;

    /// Report the last driven (or externally observed) state of `line`.
    fn read(&mut self, line: Line) -> Result<LineState, Self::Error>;
}

impl<D: DigitalLineDriver + ?Sized> DigitalLineDriver for &mut D {
    type Error = D::Error;

    fn set_mode(&mut self, line: Line, mode: LineMode) -> Result<(), Self::Error> {
        (**self).set_mode(line, mode)
    }

    fn write(&mut self, line: Line, state: LineState) -> Result<(), Self::Error> {
        (**self).write(line, state)
    }

    fn read(&mut self, line: Line) -> Result<LineState, Self::Error> {
        (**self).read(line)
    }
}
