//! Shared types for the Kizuna engine.

pub mod collections;
pub mod graph;
pub mod person;
pub mod token;

pub use graph::{EdgeExport, GraphExport, NodeExport, PersonNode, SimilarityGraph, TieEdge};
pub use person::{Person, RawFeatures};
pub use token::Token;
