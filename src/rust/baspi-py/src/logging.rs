// Copyright 2026 Baspi driver contributors
// SPDX-License-Identifier: Apache-2.0

use pyo3::prelude::*;

use baspi_log::init_logging;

#[pyfunction(name = "init_logging")]
pub fn init_logging_py(log_level: i64) {
    // Line-level traffic is logged below Python's INFO (20)
    const DIAGNOSTICS_LEVEL: i64 = 15;
    init_logging(log_level <= DIAGNOSTICS_LEVEL);
}
