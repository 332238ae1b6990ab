//! kizuna-core: shared foundation for the Kizuna similarity engine.
//!
//! - Types: the tagged token union, person records, and the similarity graph
//! - Errors: one error enum per subsystem, `thiserror` only
//! - Config: weight profile and build defaults with TOML + env resolution
//! - Observability: tracing initialization

pub mod config;
pub mod errors;
pub mod observability;
pub mod types;

// Re-exports for convenience
pub use config::{BuildConfig, KizunaConfig, WeightsConfig};
pub use errors::{BuildError, ConfigError, DictionaryError, KizunaErrorCode};
pub use types::{
    EdgeExport, GraphExport, NodeExport, Person, PersonNode, RawFeatures, SimilarityGraph,
    TieEdge, Token,
};
