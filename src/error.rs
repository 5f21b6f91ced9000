//! Errors for the outer surfaces (settings and terminal)
//!
//! The simulation itself never fails: every input is clamped or ignored.

use std::{error, fmt::Display, io, path::PathBuf};

use crate::settings::GameMode;

#[derive(Debug)]
pub enum ConfigError {
    /// The requested mode is declared but not implemented
    UnsupportedMode(GameMode),
    /// A setting is out of range
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
    Read {
        path: PathBuf,
        source: io::Error,
    },
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::UnsupportedMode(mode) => {
                write!(f, "{} mode is not implemented yet", mode.as_str())
            }
            ConfigError::Invalid { field, reason } => {
                write!(f, "invalid setting `{field}`: {reason}")
            }
            ConfigError::Read { path, .. } => {
                write!(f, "failed to read settings from {}", path.display())
            }
            ConfigError::Parse { path, .. } => {
                write!(f, "failed to parse settings in {}", path.display())
            }
        }
    }
}

impl error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            ConfigError::UnsupportedMode(_) | ConfigError::Invalid { .. } => None,
            ConfigError::Read { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
        }
    }
}

#[derive(Debug)]
pub enum Error {
    Config(ConfigError),
    /// Raw mode, drawing or event polling failed
    Terminal(io::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Config(err) => Display::fmt(err, f),
            Error::Terminal(_) => Display::fmt("terminal i/o failed", f),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Config(source) => Some(source),
            Error::Terminal(source) => Some(source),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Error::Config(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Terminal(err)
    }
}
