// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Errors surfaced by the configuration layer and the demo binary.
///
/// The notification lifecycle itself never fails: operations on unknown
/// ids are silent no-ops.
#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    /// Invalid command-line arguments.
    Args(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Args(e) => write!(f, "Argument Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<pico_args::Error> for Error {
    fn from(err: pico_args::Error) -> Self {
        Error::Args(err.to_string())
    }
}

impl From<crate::diagnostics::ExportError> for Error {
    fn from(err: crate::diagnostics::ExportError) -> Self {
        Error::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
