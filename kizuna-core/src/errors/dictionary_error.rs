//! Dictionary loading errors.
//!
//! Missing *mandatory* tables and malformed tables (optional ones included)
//! are fatal before a build starts. Data-quality gaps inside a loaded table
//! are never errors; they resolve to documented defaults downstream.

use super::error_code::{self, KizunaErrorCode};

/// Errors raised while loading the static lookup tables.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("Required dictionary missing: {path}")]
    MissingResource { path: String },

    #[error("Failed to parse dictionary {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Unsupported shape in dictionary {path}: {message}")]
    InvalidShape { path: String, message: String },
}

impl KizunaErrorCode for DictionaryError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingResource { .. } => error_code::DICTIONARY_MISSING,
            Self::ParseError { .. } => error_code::DICTIONARY_PARSE,
            Self::InvalidShape { .. } => error_code::DICTIONARY_SHAPE,
        }
    }
}
