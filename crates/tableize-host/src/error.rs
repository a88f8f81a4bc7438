//! Error types for host operations

use thiserror::Error;

use crate::settings::ValueKind;
use crate::signal::Signal;

/// Errors raised by the host contract
#[derive(Error, Debug)]
pub enum HostError {
    /// Settings root was not a mapping
    #[error("Settings must be a mapping, found {0}")]
    NotAMapping(ValueKind),

    /// Signal is outside the host's capability set
    #[error("Signal not available on this host: {0}")]
    SignalUnavailable(Signal),

    /// TOML settings could not be parsed
    #[error("Invalid TOML settings: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type for host operations
pub type Result<T> = std::result::Result<T, HostError>;
