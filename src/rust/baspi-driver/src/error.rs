// Copyright 2026 Baspi driver contributors
// SPDX-License-Identifier: Apache-2.0

use baspi_units::ParseQuantityError;

use crate::lines::Line;
use crate::settings::StageKind;

type BoxedDriverError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A gain or cutoff outside the enumerated domain was requested. No line was written.
    #[error("unrecognized {stage} setting {value}, choose one of: {choices}")]
    UnrecognizedSetting {
        stage: StageKind,
        value: f64,
        choices: String,
    },

    #[error("invalid value {value} for parameter '{parameter}', allowed values: {allowed}")]
    InvalidParameterValue {
        parameter: &'static str,
        value: f64,
        allowed: String,
    },

    #[error("unknown parameter '{0}'")]
    UnknownParameter(String),

    /// The line driver failed. The source is the driver's own error, unchanged.
    #[error("line driver failed on {line}")]
    LineDriver {
        line: Line,
        #[source]
        source: BoxedDriverError,
    },

    #[error(transparent)]
    ParseQuantity(#[from] ParseQuantityError),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    pub(crate) fn line_driver<E>(line: Line, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::LineDriver {
            line,
            source: Box::new(source),
        }
    }

    /// The error reported by the line driver, if this error originates there.
    pub fn driver_source(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            Error::LineDriver { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
