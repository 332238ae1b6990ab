//! Dictionary subsystem — static lookup tables behind shape-tolerant loaders.
//!
//! Source data arrives in several interchangeable JSON shapes (object of
//! pairs, array of records, array of arrays). One adapter per table type
//! normalizes whatever shape arrives into the canonical in-memory map; the
//! rest of the engine only ever sees the canonical form.

pub mod loader;
pub mod shapes;
pub mod types;

pub use loader::{load_dictionaries, load_people};
pub use types::{CategoryEntry, Dictionaries};
