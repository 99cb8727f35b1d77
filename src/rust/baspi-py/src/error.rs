// Copyright 2026 Baspi driver contributors
// SPDX-License-Identifier: Apache-2.0

//! Translation of driver errors into Python exceptions.
//!
//! Invalid values raise `ValueError` and unknown parameter names raise `KeyError`.
//! Everything else raises `RuntimeError` with the cause chain in the message; if
//! the root cause is an exception raised by the Python board object, it is set as
//! the `__cause__` of the raised exception.

use baspi_driver::Error as DriverError;
use pyo3::exceptions::{PyKeyError, PyRuntimeError, PyValueError};
use pyo3::prelude::*;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Driver(#[from] DriverError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<Error> for PyErr {
    fn from(error: Error) -> Self {
        let Error::Driver(error) = error;
        match &error {
            DriverError::UnrecognizedSetting { .. }
            | DriverError::InvalidParameterValue { .. }
            | DriverError::ParseQuantity(_) => PyValueError::new_err(error.to_string()),
            DriverError::UnknownParameter(name) => PyKeyError::new_err(name.clone()),
            _ => {
                let err = PyRuntimeError::new_err(create_python_error_message(&error));
                if let Some(py_err) = find_python_root_cause(&error) {
                    Python::with_gil(|py| err.set_cause(py, Some(py_err.clone_ref(py))));
                }
                err
            }
        }
    }
}

/// Format the error and its sources, outermost first.
fn create_python_error_message(error: &DriverError) -> String {
    let mut causes = vec![];
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        causes.push(cause.to_string());
        source = cause.source();
    }
    if causes.is_empty() {
        return error.to_string();
    }
    format!("{error}\nCaused by:\n  {}", causes.join("\n  "))
}

fn find_python_root_cause(error: &DriverError) -> Option<&PyErr> {
    error.driver_source()?.downcast_ref::<PyErr>()
}
