//! Geographic hierarchy resolution.
//!
//! A token is classified city, prefecture, or region (first match wins) and
//! expanded to every level above it. The hierarchy is what lets two people
//! who mention different cities in the same prefecture still share a
//! weaker tie.

use kizuna_core::types::Token;

use crate::dictionary::Dictionaries;
use crate::text::normalize_key;

/// Reserved suffixes that mark a prefecture name (県/都/府/道).
const PREF_SUFFIXES: [char; 4] = ['県', '都', '府', '道'];

/// Resolved geographic components of one token. Display forms; `None` for
/// every level the token does not reach.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeoResolution {
    pub city: Option<String>,
    pub pref: Option<String>,
    pub region: Option<String>,
}

impl GeoResolution {
    /// True when any component resolved.
    pub fn is_geographic(&self) -> bool {
        self.city.is_some() || self.pref.is_some() || self.region.is_some()
    }

    /// Structured geo tokens for every resolved component. A resolved city
    /// therefore yields three tokens; a bare region yields one.
    pub fn expand(&self) -> Vec<Token> {
        let mut tokens = Vec::with_capacity(3);
        if let Some(city) = &self.city {
            tokens.push(Token::GeoCity(city.clone()));
        }
        if let Some(pref) = &self.pref {
            tokens.push(Token::GeoPref(pref.clone()));
        }
        if let Some(region) = &self.region {
            tokens.push(Token::GeoRegion(region.clone()));
        }
        tokens
    }
}

fn is_prefecture(token: &str, dicts: &Dictionaries) -> bool {
    token
        .chars()
        .next_back()
        .is_some_and(|c| PREF_SUFFIXES.contains(&c))
        || dicts.pref_aliases.contains_key(token)
}

/// Region lookup tolerating empty table values.
fn region_of_pref(pref: &str, dicts: &Dictionaries) -> Option<String> {
    dicts
        .pref_to_region
        .get(&normalize_key(pref))
        .filter(|region| !region.is_empty())
        .cloned()
}

/// Classify a normalized, canonicalized token.
///
/// Order: city table, prefecture (reserved suffix or alias table), direct
/// region name, not geographic. An unresolvable name is simply "not
/// geographic" — never an error.
pub fn resolve(token: &str, dicts: &Dictionaries) -> GeoResolution {
    if let Some(pref) = dicts.city_to_pref.get(token) {
        return GeoResolution {
            city: Some(token.to_string()),
            region: region_of_pref(pref, dicts),
            pref: Some(pref.clone()),
        };
    }
    if is_prefecture(token, dicts) {
        let pref = dicts
            .pref_aliases
            .get(token)
            .cloned()
            .unwrap_or_else(|| token.to_string());
        return GeoResolution {
            city: None,
            region: region_of_pref(&pref, dicts),
            pref: Some(pref),
        };
    }
    if let Some(region) = dicts.regions.get(token) {
        return GeoResolution {
            city: None,
            pref: None,
            region: Some(region.clone()),
        };
    }
    GeoResolution::default()
}
