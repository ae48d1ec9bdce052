//! Error types for placement configuration.

use thiserror::Error;

/// Errors from loading, saving or validating a [`crate::PlacementConfig`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A setting has a value the placement math cannot use.
    #[error("invalid placement config: {0}")]
    Invalid(&'static str),
    /// The config file is not valid TOML or has mistyped keys.
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// The config could not be serialized.
    #[error("config write error: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// I/O error.
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
}
