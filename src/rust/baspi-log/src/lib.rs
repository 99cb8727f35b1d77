// Copyright 2026 Baspi driver contributors
// SPDX-License-Identifier: Apache-2.0

//! Logging macros of the Baspi driver.
//!
//! Records are sent to the `log` facade with target `baspi.rust::<module path>`,
//! so a Python host can filter them under the `baspi` logger hierarchy.
//! Line-level traffic goes through [`diagnostic!`], which is silent unless
//! diagnostics were enabled with [`init_logging`].

use std::sync::atomic::{AtomicBool, Ordering};

#[doc(hidden)]
pub use log as _log;

/// Prefix of every record target.
pub const TARGET_PREFIX: &str = "baspi.rust::";

#[doc(hidden)]
#[macro_export]
macro_rules! __record {
    ($level:ident, $($arg:tt)+) => {
        $crate::_log::$level!(target: concat!("baspi.rust::", module_path!()), $($arg)+)
    };
}

#[macro_export]
macro_rules! info {
    ($msg:literal $(, $arg:expr)* $(,)?) => {
        $crate::__record!(info, $msg $(, $arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($msg:literal $(, $arg:expr)* $(,)?) => {
        $crate::__record!(warn, $msg $(, $arg)*)
    };
}

/// Log line-level traffic at debug level, if diagnostics are enabled.
#[macro_export]
macro_rules! diagnostic {
    ($msg:literal $(, $arg:expr)* $(,)?) => {
        if $crate::is_diagnostics_enabled() {
            $crate::__record!(debug, $msg $(, $arg)*)
        }
    };
}

static DIAGNOSTICS_ENABLED: AtomicBool = AtomicBool::new(false);

#[inline]
pub fn is_diagnostics_enabled() -> bool {
    DIAGNOSTICS_ENABLED.load(Ordering::Acquire)
}

/// Set the diagnostics switch.
///
/// No logger is installed here; the host decides where records go (the Python
/// module forwards them to Python `logging` through `pyo3-log`).
pub fn init_logging(with_diagnostics: bool) {
    DIAGNOSTICS_ENABLED.store(with_diagnostics, Ordering::Release);
}
