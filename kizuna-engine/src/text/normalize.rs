//! Key normalization for all dictionary lookups.

use unicode_normalization::UnicodeNormalization;

/// Normalize a raw string into a lookup key.
///
/// NFKC compatibility fold (full-width/half-width variants collapse), trim,
/// remove all internal whitespace, lowercase. Total and idempotent; empty
/// input normalizes to the empty string, which callers treat as "no token".
pub fn normalize_key(s: &str) -> String {
    let folded: String = s.nfkc().collect();
    folded
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
