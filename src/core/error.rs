//! Centralised error types used across the crate.

use std::{error::Error, fmt, io};

use crate::core::data::ParseDataError;

/// Precise configuration faults.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Zero(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Zero(x) => write!(f, "`{x}` must be at least 1"),
        }
    }
}
impl Error for ConfigError {}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug)]
pub enum RaceError {
    Io(io::Error),
    Open { path: String, source: io::Error },
    Data(ParseDataError),
    Config(ConfigError),
}

impl fmt::Display for RaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RaceError::Io(e) => write!(f, "{e}"),
            RaceError::Open { path, source } => write!(f, "cannot open '{path}': {source}"),
            RaceError::Data(e) => write!(f, "{e}"),
            RaceError::Config(e) => write!(f, "{e}"),
        }
    }
}
impl Error for RaceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RaceError::Io(e) | RaceError::Open { source: e, .. } => Some(e),
            RaceError::Data(e) => Some(e),
            RaceError::Config(e) => Some(e),
        }
    }
}

// automatic conversions
impl From<io::Error> for RaceError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
impl From<ParseDataError> for RaceError {
    fn from(e: ParseDataError) -> Self {
        Self::Data(e)
    }
}
impl From<ConfigError> for RaceError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
