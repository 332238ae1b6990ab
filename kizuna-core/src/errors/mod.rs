//! Error handling for Kizuna.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod build_error;
pub mod config_error;
pub mod dictionary_error;
pub mod error_code;

pub use build_error::BuildError;
pub use config_error::ConfigError;
pub use dictionary_error::DictionaryError;
pub use error_code::KizunaErrorCode;
