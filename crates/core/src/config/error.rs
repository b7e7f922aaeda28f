//! Error types for server configuration.
//!
//! These are the only fatal errors: the binary exits before serving when
//! one occurs.

use thiserror::Error;

/// Errors that can occur while assembling the server configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required setting was not provided or is empty.
    #[error("Missing required setting {name}: pass --{flag} or set {env}")]
    MissingSetting {
        name: &'static str,
        flag: &'static str,
        env: &'static str,
    },

    /// A setting was provided but cannot be used.
    #[error("Invalid setting {name}: {reason}")]
    InvalidSetting { name: &'static str, reason: String },
}

/// Type alias for Result with ConfigError.
pub type ConfigResult<T> = Result<T, ConfigError>;
