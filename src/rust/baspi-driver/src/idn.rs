// Copyright 2026 Baspi driver contributors
// SPDX-License-Identifier: Apache-2.0

use serde::Serialize;

use crate::Result;

/// Identification record of an instrument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Idn {
    pub vendor: &'static str,
    pub model: &'static str,
    pub serial: Option<&'static str>,
    pub firmware: &'static str,
}

/// The amplifier has no readable identity; this is the fixed record it reports.
pub const BASPI_IDN: Idn = Idn {
    vendor: "Basel Precision Instruments",
    model: "SP893C",
    serial: None,
    firmware: "Designed by Dennis van der Bovenkamp",
};

impl Idn {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self).map_err(anyhow::Error::from)?)
    }
}
