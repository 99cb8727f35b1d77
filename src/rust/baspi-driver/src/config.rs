// Copyright 2026 Baspi driver contributors
// SPDX-License-Identifier: Apache-2.0

//! Start-up configuration of an amplifier.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::Result;
use crate::settings::{FilterSetting, GainSetting};

/// Name and initial settings of an amplifier, loadable from JSON:
///
/// ```json
/// { "name": "baspi", "gain": 1e8, "lpf": 1000 }
/// ```
///
/// Gain and cutoff are validated against their domains while loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AmplifierConfig {
    pub name: String,
    pub gain: GainSetting,
    pub lpf: FilterSetting,
}

impl Default for AmplifierConfig {
    fn default() -> Self {
        AmplifierConfig {
            name: "baspi".to_string(),
            gain: GainSetting::OneMega,
            lpf: FilterSetting::OneKilohertz,
        }
    }
}

impl AmplifierConfig {
    pub fn new(name: impl Into<String>, gain: GainSetting, lpf: FilterSetting) -> Self {
        AmplifierConfig {
            name: name.into(),
            gain,
            lpf,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).context("invalid amplifier configuration")?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read amplifier configuration '{}'", path.display()))?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_parse() {
        let config =
            AmplifierConfig::from_json_str(r#"{"name": "bench", "gain": 1e8, "lpf": 1000}"#)
                .unwrap();
        assert_eq!(
            config,
            AmplifierConfig::new("bench", GainSetting::HundredMega, FilterSetting::OneKilohertz)
        );
    }

    #[test]
    fn test_defaults() {
        let config = AmplifierConfig::from_json_str(r#"{"lpf": 30}"#).unwrap();
        assert_eq!(config.name, "baspi");
        assert_eq!(config.gain, GainSetting::OneMega);
        assert_eq!(config.lpf, FilterSetting::ThirtyHertz);
    }

    #[test]
    fn test_invalid_gain() {
        let err = AmplifierConfig::from_json_str(r#"{"gain": 5e8}"#).unwrap_err();
        let Error::Anyhow(err) = err else {
            panic!("expected a context error");
        };
        assert_eq!(err.to_string(), "invalid amplifier configuration");
        let cause = err.root_cause().to_string();
        assert!(cause.contains("unrecognized gain setting 500000000"), "{cause}");
    }

    #[test]
    fn test_unknown_field() {
        assert!(AmplifierConfig::from_json_str(r#"{"offset": 1}"#).is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = AmplifierConfig::from_json_file("/nonexistent/baspi.json").unwrap_err();
        assert!(err.to_string().starts_with("failed to read amplifier configuration"));
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&AmplifierConfig::default()).unwrap();
        assert_eq!(json, r#"{"name":"baspi","gain":1000000.0,"lpf":1000.0}"#);
    }
}
