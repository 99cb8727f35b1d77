// Copyright 2026 Baspi driver contributors
// SPDX-License-Identifier: Apache-2.0

//! Typed physical quantities used by the Baspi driver.

pub mod frequency;
pub mod unit;

pub use frequency::{Frequency, Hertz, hertz};
pub use unit::ParseQuantityError;
