//! Graph construction — pairwise scoring, assembly, and export.

pub mod builder;
pub mod export;
pub mod scorer;

pub use builder::{build_graph, CancelToken, GraphParams};
pub use export::{edge_rows, edge_table_csv, EdgeRow};
pub use scorer::{score_pair, PairScore};
