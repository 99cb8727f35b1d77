// Copyright 2026 Baspi driver contributors
// SPDX-License-Identifier: Apache-2.0

use baspi_driver::parameter::Parameter;
use baspi_driver::{AmplifierConfig, Baspi, FilterSetting, GainSetting};
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::board::PyBoard;
use crate::error::{Error, Result};

/// Python handle of an amplifier.
///
/// Construction runs the bring-up sequence against `board`, which must already
/// be connected to the I/O controller.
#[pyclass(name = "Baspi", module = "baspi._rust")]
pub struct PyBaspi {
    inner: Baspi<PyBoard>,
}

#[pymethods]
impl PyBaspi {
    #[new]
    #[pyo3(signature = (board, gain, lpf, name="baspi"))]
    fn new(board: Py<PyAny>, gain: f64, lpf: f64, name: &str) -> Result<Self> {
        let config = AmplifierConfig::new(
            name,
            GainSetting::try_from(gain)?,
            FilterSetting::try_from(lpf)?,
        );
        let inner = Baspi::new(PyBoard::new(board), &config)?;
        Ok(PyBaspi { inner })
    }

    #[getter]
    fn name(&self) -> &str {
        self.inner.name()
    }

    #[getter]
    fn board(&self, py: Python<'_>) -> Py<PyAny> {
        self.inner.driver().object().clone_ref(py)
    }

    /// Current gain, or `None` if the gain lines hold no valid pattern.
    #[getter]
    fn gain(mut slf: PyRefMut<'_, Self>) -> Result<Option<f64>> {
        Ok(slf.inner.get(Parameter::Gain.name())?)
    }

    #[setter]
    fn set_gain(&mut self, value: f64) -> Result<()> {
        Ok(self.inner.set(Parameter::Gain.name(), value)?)
    }

    /// Current low-pass cutoff in Hz, or `None` if the filter lines hold no valid pattern.
    #[getter]
    fn lpf(mut slf: PyRefMut<'_, Self>) -> Result<Option<f64>> {
        Ok(slf.inner.get(Parameter::Lpf.name())?)
    }

    #[setter]
    fn set_lpf(&mut self, value: f64) -> Result<()> {
        Ok(self.inner.set(Parameter::Lpf.name(), value)?)
    }

    /// Set a parameter by its name, `"gain"` or `"LPF"`.
    fn set(&mut self, name: &str, value: f64) -> Result<()> {
        Ok(self.inner.set(name, value)?)
    }

    /// Get a parameter by its name, `"gain"` or `"LPF"`.
    fn get(&mut self, name: &str) -> Result<Option<f64>> {
        Ok(self.inner.get(name)?)
    }

    /// Drive every line low.
    fn all_off(&mut self) -> Result<()> {
        Ok(self.inner.all_off()?)
    }

    /// Identification record as a dict: vendor, model, serial and firmware.
    fn get_idn<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let json = self.inner.idn().to_json().map_err(Error::from)?;
        let idn = py.import("json")?.call_method1("loads", (json,))?;
        Ok(idn.downcast_into::<PyDict>()?)
    }

    /// Describe the parameters: name, label, unit and allowed values.
    #[staticmethod]
    fn parameters(py: Python<'_>) -> PyResult<Bound<'_, PyList>> {
        let list = PyList::empty(py);
        for parameter in Parameter::ALL {
            let dict = PyDict::new(py);
            dict.set_item("name", parameter.name())?;
            dict.set_item("label", parameter.label())?;
            dict.set_item("unit", parameter.unit())?;
            dict.set_item("vals", parameter.allowed_values())?;
            list.append(dict)?;
        }
        Ok(list)
    }

    fn __repr__(&self) -> String {
        format!("Baspi(name='{}')", self.inner.name())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pyo3::exceptions::{PyKeyError, PyOSError, PyRuntimeError, PyValueError};
    use pyo3::ffi::c_str;

    use super::*;

    fn board(py: Python<'_>) -> Bound<'_, PyAny> {
        let code = c_str!(
            r#"
class Board:
    def __init__(self):
        self.modes = {}
        self.pins = {}
        self.failing = None

    def set_mode(self, pin, mode):
        self.modes[pin] = mode

    def write(self, pin, value):
        if pin == self.failing:
            raise OSError("boom")
        self.pins[pin] = value

    def read(self, pin):
        if pin == self.failing:
            raise OSError("boom")
        return self.pins.get(pin)
"#
        );
        PyModule::from_code(py, code, c_str!("board.py"), c_str!("board"))
            .unwrap()
            .getattr("Board")
            .unwrap()
            .call0()
            .unwrap()
    }

    fn baspi<'py>(board: &Bound<'py, PyAny>, gain: f64, lpf: f64) -> Bound<'py, PyBaspi> {
        let Ok(baspi) = PyBaspi::new(board.clone().unbind(), gain, lpf, "baspi") else {
            panic!("bring-up failed");
        };
        Bound::new(board.py(), baspi).unwrap()
    }

    fn read(baspi: &Bound<'_, PyBaspi>, attr: &str) -> Option<f64> {
        baspi.getattr(attr).unwrap().extract().unwrap()
    }

    fn pins(board: &Bound<'_, PyAny>) -> HashMap<u8, u8> {
        board.getattr("pins").unwrap().extract().unwrap()
    }

    #[test]
    fn test_bring_up() {
        Python::with_gil(|py| {
            let board = board(py);
            let baspi = baspi(&board, 1e8, 1e3);
            assert_eq!(read(&baspi, "gain"), Some(1e8));
            assert_eq!(read(&baspi, "lpf"), Some(1e3));

            let modes: HashMap<u8, String> = board.getattr("modes").unwrap().extract().unwrap();
            assert_eq!(modes.len(), 10);
            assert!(modes.values().all(|mode| mode == "output"));
            let pins = pins(&board);
            assert_eq!(pins[&10], 1);
            assert_eq!(pins[&11], 0);
        });
    }

    #[test]
    fn test_properties() {
        Python::with_gil(|py| {
            let board = board(py);
            let baspi = baspi(&board, 1e6, 1e3);
            baspi.setattr("gain", 1e9).unwrap();
            baspi.setattr("lpf", 30e3).unwrap();
            assert_eq!(read(&baspi, "gain"), Some(1e9));
            assert_eq!(read(&baspi, "lpf"), Some(30e3));

            baspi.call_method1("set", ("LPF", 300.0)).unwrap();
            let lpf: Option<f64> = baspi.call_method1("get", ("LPF",)).unwrap().extract().unwrap();
            assert_eq!(lpf, Some(300.0));
        });
    }

    #[test]
    fn test_unknown_pattern_reads_none() {
        Python::with_gil(|py| {
            let board = board(py);
            let baspi = baspi(&board, 1e6, 1e3);
            let pins = board.getattr("pins").unwrap();
            for pin in [2, 4, 6] {
                pins.set_item(pin, 1).unwrap();
            }
            assert_eq!(read(&baspi, "gain"), None);
            assert_eq!(read(&baspi, "lpf"), Some(1e3));
        });
    }

    #[test]
    fn test_invalid_value_raises_value_error() {
        Python::with_gil(|py| {
            let board = board(py);
            let baspi = baspi(&board, 1e6, 1e3);
            let err = baspi.setattr("gain", 42.0).unwrap_err();
            assert!(err.is_instance_of::<PyValueError>(py));
            assert!(err.to_string().contains("invalid value 42"));
            assert_eq!(read(&baspi, "gain"), Some(1e6));

            let Err(err) = PyBaspi::new(board.clone().unbind(), 2e9, 1e3, "baspi") else {
                panic!("bring-up with gain 2e9 succeeded");
            };
            assert!(PyErr::from(err).is_instance_of::<PyValueError>(py));
        });
    }

    #[test]
    fn test_unknown_parameter_raises_key_error() {
        Python::with_gil(|py| {
            let board = board(py);
            let baspi = baspi(&board, 1e6, 1e3);
            let err = baspi.call_method1("get", ("nope",)).unwrap_err();
            assert!(err.is_instance_of::<PyKeyError>(py));
            assert!(err.to_string().contains("nope"));
            let err = baspi.call_method1("set", ("nope", 1.0)).unwrap_err();
            assert!(err.is_instance_of::<PyKeyError>(py));
        });
    }

    #[test]
    fn test_board_exception_is_the_cause() {
        Python::with_gil(|py| {
            let board = board(py);
            let baspi = baspi(&board, 1e6, 1e3);
            board.setattr("failing", 2).unwrap();

            let err = baspi.setattr("gain", 1e9).unwrap_err();
            assert!(err.is_instance_of::<PyRuntimeError>(py));
            assert!(err.to_string().contains("line driver failed on pin 2"));
            let cause = err.cause(py).unwrap();
            assert!(cause.is_instance_of::<PyOSError>(py));
            assert!(cause.to_string().contains("boom"));

            assert!(baspi.getattr("gain").is_err());
            let Err(err) = PyBaspi::new(board.clone().unbind(), 1e6, 1e3, "baspi") else {
                panic!("bring-up on a failing board succeeded");
            };
            assert!(PyErr::from(err).is_instance_of::<PyRuntimeError>(py));
        });
    }

    #[test]
    fn test_all_off() {
        Python::with_gil(|py| {
            let board = board(py);
            let baspi = baspi(&board, 1e8, 100e3);
            baspi.call_method0("all_off").unwrap();
            let pins = pins(&board);
            assert_eq!(pins.len(), 10);
            assert!(pins.values().all(|&value| value == 0));
        });
    }

    #[test]
    fn test_idn_and_parameters() {
        Python::with_gil(|py| {
            let board = board(py);
            let baspi = baspi(&board, 1e6, 1e3);
            let idn = baspi.call_method0("get_idn").unwrap();
            let model: String = idn.get_item("model").unwrap().extract().unwrap();
            assert_eq!(model, "SP893C");
            assert!(idn.get_item("serial").unwrap().is_none());

            let parameters = py
                .get_type::<PyBaspi>()
                .call_method0("parameters")
                .unwrap();
            assert_eq!(parameters.len().unwrap(), 2);
            let lpf = parameters.get_item(1).unwrap();
            let unit: String = lpf.get_item("unit").unwrap().extract().unwrap();
            assert_eq!(unit, "Hz");
            let vals: Vec<f64> = lpf.get_item("vals").unwrap().extract().unwrap();
            assert_eq!(vals.len(), 9);
        });
    }
}
