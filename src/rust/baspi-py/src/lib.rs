// Copyright 2026 Baspi driver contributors
// SPDX-License-Identifier: Apache-2.0

//! Python extension module `baspi._rust`.

use pyo3::prelude::*;

mod baspi;
mod board;
mod error;
mod logging;

#[pymodule]
mod _rust {
    use super::*;

    #[pymodule_export]
    use crate::baspi::PyBaspi;

    #[pymodule_export]
    use crate::logging::init_logging_py;

    #[pymodule_init]
    fn init(_m: &Bound<'_, PyModule>) -> PyResult<()> {
        // Another logger may already be installed by an embedding application.
        let _ = pyo3_log::try_init();
        Ok(())
    }
}
