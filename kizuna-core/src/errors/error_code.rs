//! Stable, machine-readable error codes for external consumers.

/// Maps every error to a stable code string that survives message rewording.
pub trait KizunaErrorCode {
    fn error_code(&self) -> &'static str;
}

pub const CONFIG_NOT_FOUND: &str = "KZ-CONFIG-NOT-FOUND";
pub const CONFIG_PARSE: &str = "KZ-CONFIG-PARSE";
pub const CONFIG_VALIDATION: &str = "KZ-CONFIG-VALIDATION";
pub const DICTIONARY_MISSING: &str = "KZ-DICT-MISSING";
pub const DICTIONARY_PARSE: &str = "KZ-DICT-PARSE";
pub const DICTIONARY_SHAPE: &str = "KZ-DICT-SHAPE";
pub const INVALID_PARAMETER: &str = "KZ-PARAM-INVALID";
pub const CANCELLED: &str = "KZ-CANCELLED";
