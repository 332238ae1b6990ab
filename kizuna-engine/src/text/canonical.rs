//! Alias resolution — spelling variants collapse to one canonical form.

use kizuna_core::types::collections::FxHashMap;

/// Resolve a normalized token to its canonical spelling.
///
/// Exact key lookup only; variants must be pre-enumerated in the alias map.
/// Tokens absent from the map pass through unchanged.
pub fn canonicalize<'a>(token: &'a str, aliases: &'a FxHashMap<String, String>) -> &'a str {
    aliases.get(token).map(String::as_str).unwrap_or(token)
}
