//! kizuna-engine: similarity-graph construction.
//!
//! Turns per-person free-text feature tags into normalized token sets and
//! builds a weighted undirected graph from pairwise comparisons:
//! - Dictionary: JSON shape adapters and fixed-name table loading
//! - Text: NFKC normalization and alias canonicalization
//! - Geo: city/prefecture/region hierarchy resolution
//! - Tokenize: per-person feature sets
//! - Weight: category bases, geo levels, wildcard multipliers
//! - Graph: parallel pairwise scoring, assembly, and export

pub mod dictionary;
pub mod geo;
pub mod graph;
pub mod text;
pub mod tokenize;
pub mod weight;

// Re-exports for convenience
pub use dictionary::{load_dictionaries, load_people, CategoryEntry, Dictionaries};
pub use geo::GeoResolution;
pub use graph::{build_graph, edge_rows, edge_table_csv, CancelToken, EdgeRow, GraphParams};
pub use text::{canonicalize, normalize_key};
pub use tokenize::tokenize_features;
pub use weight::WeightModel;
