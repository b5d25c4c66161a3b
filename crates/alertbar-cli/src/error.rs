//! CLI error types.

use std::fmt;

use alertbar_alerts::FetchError;
use alertbar_config::ConfigError;

/// CLI-specific errors.
///
/// Per-environment fetch failures never reach this type; they are absorbed
/// into the report. Only problems that prevent rendering at all end up here.
#[derive(Debug)]
pub enum CliError {
    /// The environments file could not be loaded.
    Config(ConfigError),
    /// The HTTP client could not be built.
    Client(FetchError),
    /// Output formatting error.
    Format(String),
    /// IO error.
    Io(std::io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "configuration error: {e}"),
            Self::Client(e) => write!(f, "client error: {e}"),
            Self::Format(msg) => write!(f, "format error: {msg}"),
            Self::Io(e) => write!(f, "IO error: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Client(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::Format(_) => None,
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<FetchError> for CliError {
    fn from(err: FetchError) -> Self {
        Self::Client(err)
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
