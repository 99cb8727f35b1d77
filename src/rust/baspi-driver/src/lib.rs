// Copyright 2026 Baspi driver contributors
// SPDX-License-Identifier: Apache-2.0

//! Driver for the Basel Precision Instruments SP983C ("Baspi") IV amplifier.
//!
//! The amplifier's gain and low-pass filter are selected by patterns on a few
//! digital lines of an attached I/O controller. [`codec::Codec`] translates
//! between settings and line states through a [`driver::DigitalLineDriver`],
//! and [`instrument::Baspi`] wraps it with the bring-up sequence and the
//! parameter interface.

pub mod codec;
pub mod config;
pub mod driver;
mod error;
pub mod idn;
pub mod instrument;
pub mod lines;
pub mod parameter;
pub mod settings;
pub mod simulated;

pub use config::AmplifierConfig;
pub use driver::DigitalLineDriver;
pub use error::{Error, Result};
pub use instrument::Baspi;
pub use settings::{FilterSetting, GainSetting, StageKind, StageSetting};
