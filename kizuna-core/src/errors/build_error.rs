//! Graph build errors.

use super::error_code::{self, KizunaErrorCode};

/// Errors raised at the graph-build API boundary or mid-build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// A run-time parameter is out of domain (negative threshold or weight).
    /// Rejected before any computation — never clamped, since clamping would
    /// mask a caller bug.
    #[error("Invalid parameter {field}: {message}")]
    InvalidParameter { field: String, message: String },

    /// The build was cancelled between pair-score iterations.
    #[error("Graph build cancelled")]
    Cancelled,
}

impl KizunaErrorCode for BuildError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidParameter { .. } => error_code::INVALID_PARAMETER,
            Self::Cancelled => error_code::CANCELLED,
        }
    }
}
