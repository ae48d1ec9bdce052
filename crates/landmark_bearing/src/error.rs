//! Error types for bearing conversions.

use thiserror::Error;

/// Errors from bearing and heading conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BearingError {
    /// An input bearing fell outside the range accepted by the operation.
    #[error("Bearing must be between 0 and 360")]
    InvalidArgument,
}
