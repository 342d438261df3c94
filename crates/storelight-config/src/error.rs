//! Configuration error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment failed to read or merge configuration sources.
    #[error("failed to read config: {0}")]
    Figment(#[from] Box<figment::Error>),

    #[error("could not determine a config directory for this platform")]
    NoConfigDir,

    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },
}
