//! Text canonicalization — the first two stages of tokenization.

pub mod canonical;
pub mod normalize;

pub use canonical::canonicalize;
pub use normalize::normalize_key;
