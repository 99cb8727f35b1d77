// Copyright 2026 Baspi driver contributors
// SPDX-License-Identifier: Apache-2.0

use baspi_driver::DigitalLineDriver;
use baspi_driver::lines::{Line, LineMode, LineState};
use pyo3::prelude::*;

/// Line driver forwarding to a Python board object.
///
/// The object must provide `set_mode(pin, mode)`, `write(pin, value)` and
/// `read(pin)`. `mode` is `"output"` or `"input"`, `value` is 0 or 1, and the
/// truthiness of the result of `read` is the line state (`None` reads as low).
pub(crate) struct PyBoard {
    board: Py<PyAny>,
}

impl PyBoard {
    pub(crate) fn new(board: Py<PyAny>) -> Self {
        PyBoard { board }
    }

    pub(crate) fn object(&self) -> &Py<PyAny> {
        &self.board
    }
}

impl DigitalLineDriver for PyBoard {
    type Error = PyErr;

    fn set_mode(&mut self, line: Line, mode: LineMode) -> PyResult<()> {
        let mode = match mode {
            LineMode::Output => "output",
            LineMode::Input => "input",
        };
        Python::with_gil(|py| {
            self.board
                .bind(py)
                .call_method1("set_mode", (line.pin(), mode))?;
            Ok(())
        })
    }

    fn write(&mut self, line: Line, state: LineState) -> PyResult<()> {
        Python::with_gil(|py| {
            self.board
                .bind(py)
                .call_method1("write", (line.pin(), u8::from(state)))?;
            Ok(())
        })
    }

    fn read(&mut self, line: Line) -> PyResult<LineState> {
        Python::with_gil(|py| {
            let value = self.board.bind(py).call_method1("read", (line.pin(),))?;
            Ok(LineState::from(value.is_truthy()?))
        })
    }
}
