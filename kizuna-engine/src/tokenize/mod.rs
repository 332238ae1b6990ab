//! Feature tokenization — raw tags to a person's finished token set.

use kizuna_core::types::collections::FxHashSet;
use kizuna_core::types::{RawFeatures, Token};

use crate::dictionary::Dictionaries;
use crate::geo;
use crate::text::{canonicalize, normalize_key};

/// Turn one person's raw feature list into their feature set.
///
/// Per entry: normalize and skip blanks; canonicalize and skip stopwords;
/// geographic entries contribute *only* their hierarchy tokens (geography is
/// represented exclusively through `Geo*` variants, never as a plain token);
/// everything else becomes a plain token with its category annotation, plus
/// loose-tie link tokens when enabled and the subcategory is informative.
///
/// Deterministic and order-independent; duplicates collapse in the set.
pub fn tokenize_features(
    raw: &RawFeatures,
    dicts: &Dictionaries,
    enable_sub1_link: bool,
    enable_sub2_link: bool,
) -> FxHashSet<Token> {
    let mut tokens = FxHashSet::default();
    for item in raw.items() {
        let norm = normalize_key(item);
        if norm.is_empty() {
            continue;
        }
        // Canonical values are display strings; re-normalize for lookups.
        let canon = normalize_key(canonicalize(&norm, &dicts.canonical));
        if canon.is_empty() || dicts.stopwords.contains(&canon) {
            continue;
        }

        let resolution = geo::resolve(&canon, dicts);
        if resolution.is_geographic() {
            tokens.extend(resolution.expand());
            continue;
        }

        let entry = dicts.category_of(&canon);
        if enable_sub1_link && entry.sub1 != "other" {
            tokens.insert(Token::LinkSub1(entry.sub1.clone()));
        }
        if enable_sub2_link && entry.sub2 != "other" {
            tokens.insert(Token::LinkSub2(entry.sub2.clone()));
        }
        tokens.insert(Token::Plain {
            name: canon,
            category: entry.category,
            sub1: entry.sub1,
            sub2: entry.sub2,
        });
    }
    tokens
}
