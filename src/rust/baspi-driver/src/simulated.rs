// Copyright 2026 Baspi driver contributors
// SPDX-License-Identifier: Apache-2.0

//! In-memory line driver for running the amplifier without hardware.

use std::collections::{BTreeMap, BTreeSet};

use crate::driver::DigitalLineDriver;
use crate::lines::{Line, LineMode, LineState};

/// A call received by [`SimulatedLineDriver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEvent {
    SetMode(Line, LineMode),
    Write(Line, LineState),
    Read(Line),
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("simulated I/O failure on {0}")]
pub struct SimulatedFault(pub Line);

/// Line driver backed by a map of line states.
///
/// Lines that were never written read as low. Every call is appended to a journal,
/// so tests can check the order in which lines were touched.
#[derive(Debug, Clone, Default)]
pub struct SimulatedLineDriver {
    states: BTreeMap<Line, LineState>,
    modes: BTreeMap<Line, LineMode>,
    faulty: BTreeSet<Line>,
    journal: Vec<LineEvent>,
}

impl SimulatedLineDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, line: Line) -> LineState {
        self.states.get(&line).copied().unwrap_or_default()
    }

    pub fn states(&self, lines: &[Line]) -> Vec<LineState> {
        lines.iter().map(|line| self.state(*line)).collect()
    }

    pub fn mode(&self, line: Line) -> Option<LineMode> {
        self.modes.get(&line).copied()
    }

    /// Set the observed state of a line from outside, bypassing the journal.
    pub fn force(&mut self, line: Line, state: LineState) {
        self.states.insert(line, state);
    }

    /// Make every subsequent call touching `line` fail.
    pub fn fail_on(&mut self, line: Line) {
        self.faulty.insert(line);
    }

    pub fn clear_faults(&mut self) {
        self.faulty.clear();
    }

    pub fn journal(&self) -> &[LineEvent] {
        &self.journal
    }

    pub fn take_journal(&mut self) -> Vec<LineEvent> {
        std::mem::take(&mut self.journal)
    }

    fn check(&self, line: Line) -> Result<(), SimulatedFault> {
        if self.faulty.contains(&line) {
            Err(SimulatedFault(line))
        } else {
            Ok(())
        }
    }
}

impl DigitalLineDriver for SimulatedLineDriver {
    type Error = SimulatedFault;

    fn set_mode(&mut self, line: Line, mode: LineMode) -> Result<(), Self::Error> {
        self.check(line)?;
        self.journal.push(LineEvent::SetMode(line, mode));
        self.modes.insert(line, mode);
        Ok(())
    }

    fn write(&mut self, line: Line, state: LineState) -> Result<(), Self::Error> {
        self.check(line)?;
        self.journal.push(LineEvent::Write(line, state));
        self.states.insert(line, state);
        Ok(())
    }

    fn read(&mut self, line: Line) -> Result<LineState, Self::Error> {
        self.check(line)?;
        self.journal.push(LineEvent::Read(line));
        Ok(self.state(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwritten_lines_read_low() {
        let mut driver = SimulatedLineDriver::new();
        assert_eq!(driver.read(Line(4)), Ok(LineState::Low));
        assert_eq!(driver.journal(), &[LineEvent::Read(Line(4))]);
    }

    #[test]
    fn test_write_then_read() {
        let mut driver = SimulatedLineDriver::new();
        driver.set_mode(Line(4), LineMode::Output).unwrap();
        driver.write(Line(4), LineState::High).unwrap();
        assert_eq!(driver.read(Line(4)), Ok(LineState::High));
        assert_eq!(driver.mode(Line(4)), Some(LineMode::Output));
        assert_eq!(driver.take_journal().len(), 3);
        assert!(driver.journal().is_empty());
    }

    #[test]
    fn test_injected_fault() {
        let mut driver = SimulatedLineDriver::new();
        driver.fail_on(Line(5));
        assert_eq!(
            driver.write(Line(5), LineState::High),
            Err(SimulatedFault(Line(5)))
        );
        assert_eq!(driver.state(Line(5)), LineState::Low);
        assert!(driver.journal().is_empty());

        driver.clear_faults();
        assert!(driver.write(Line(5), LineState::High).is_ok());
    }

    #[test]
    fn test_force_bypasses_journal() {
        let mut driver = SimulatedLineDriver::new();
        driver.force(Line(9), LineState::High);
        assert_eq!(driver.state(Line(9)), LineState::High);
        assert!(driver.journal().is_empty());
    }
}
