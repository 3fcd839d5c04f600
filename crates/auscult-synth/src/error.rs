//! Error types for the synthesis backend.

use thiserror::Error;

/// Result type for synthesis operations.
pub type SynthResult<T> = Result<T, SynthError>;

/// Errors that can occur during signal generation.
///
/// The engine clamps rather than rejects almost everything: RR intervals,
/// systole gaps and burst durations are floored, unknown condition ids fall
/// back to the default profile, and zero cycles produce a tail-only buffer.
/// The one hard rejection is a zero sample count, which has no meaningful
/// output.
#[derive(Debug, Error)]
pub enum SynthError {
    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },
}

impl SynthError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }
}
