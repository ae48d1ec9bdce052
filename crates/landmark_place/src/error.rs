//! Error types for landmark loading and placement.

use landmark_bearing::BearingError;
use landmark_config::ConfigError;
use thiserror::Error;

/// Errors from landmark CSV loading or anchor placement.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PlaceError {
    /// A landmark row carried an unusable bearing.
    #[error("bearing error: {0}")]
    Bearing(#[from] BearingError),
    /// Placement settings could not be loaded.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    /// Landmark CSV parsing failed at a 1-based line.
    #[error("CSV parse error at line {line}: {reason}")]
    Csv { line: usize, reason: String },
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_names_its_source() {
        let config: PlaceError = ConfigError::Invalid("control_step must be greater than zero").into();
        assert_eq!(
            config.to_string(),
            "config error: invalid placement config: control_step must be greater than zero"
        );

        let bearing: PlaceError = BearingError::InvalidArgument.into();
        assert_eq!(bearing.to_string(), "bearing error: Bearing must be between 0 and 360");
    }
}
