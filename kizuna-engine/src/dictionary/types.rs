//! Canonical in-memory dictionary tables.

use kizuna_core::types::collections::{FxHashMap, FxHashSet};

use crate::text::normalize_key;

/// Category annotation for one token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryEntry {
    pub category: String,
    pub sub1: String,
    pub sub2: String,
}

impl Default for CategoryEntry {
    fn default() -> Self {
        Self {
            category: "other".to_string(),
            sub1: "other".to_string(),
            sub2: "other".to_string(),
        }
    }
}

/// All lookup tables, loaded once per session and read-only for the life of
/// every graph build.
#[derive(Debug, Clone, Default)]
pub struct Dictionaries {
    /// Normalized alias → canonical spelling.
    pub canonical: FxHashMap<String, String>,
    /// Normalized tokens excluded from tokenization.
    pub stopwords: FxHashSet<String>,
    /// Normalized token → category annotation.
    pub categories: FxHashMap<String, CategoryEntry>,
    /// Normalized city → prefecture display form.
    pub city_to_pref: FxHashMap<String, String>,
    /// Normalized prefecture alias → canonical prefecture display form.
    pub pref_aliases: FxHashMap<String, String>,
    /// Normalized prefecture → region display form.
    pub pref_to_region: FxHashMap<String, String>,
    /// Normalized region name → region display form. Derived from the
    /// values of `pref_to_region`; lets a bare region name classify.
    pub regions: FxHashMap<String, String>,
    /// `(category, sub1|*, sub2|*)` → multiplier. Optional table; empty
    /// when the source file is absent.
    pub subcat_weights: FxHashMap<(String, String, String), f64>,
}

impl Dictionaries {
    /// Category annotation for a normalized token, defaulting every field
    /// to `"other"` when the token has no entry. Data-quality gaps are
    /// silent-safe, never fatal.
    pub fn category_of(&self, token: &str) -> CategoryEntry {
        self.categories.get(token).cloned().unwrap_or_default()
    }

    /// Rebuild the derived region set from `pref_to_region` values.
    pub fn rebuild_regions(&mut self) {
        self.regions = self
            .pref_to_region
            .values()
            .filter(|region| !region.is_empty())
            .map(|region| (normalize_key(region), region.clone()))
            .collect();
    }
}
