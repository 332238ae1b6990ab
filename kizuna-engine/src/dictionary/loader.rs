//! Fixed-name dictionary loading.
//!
//! Every table the engine needs unconditionally is mandatory: its absence
//! is a fatal configuration error naming the resource. The subcategory
//! weight table is the one optional resource — absence degrades to an empty
//! table, but a present-and-malformed file still fails loudly.

use std::path::Path;

use kizuna_core::errors::DictionaryError;
use kizuna_core::types::Person;
use serde_json::Value;
use tracing::{debug, info};

use super::shapes;
use super::types::Dictionaries;

pub const CITY_TO_PREF_FILE: &str = "geo_city_to_pref.json";
pub const PREF_ALIASES_FILE: &str = "geo_pref_aliases.json";
pub const PREF_TO_REGION_FILE: &str = "geo_pref_to_region.json";
pub const TOKEN_CATEGORY_FILE: &str = "token_category.json";
pub const CANONICAL_MAP_FILE: &str = "canonical_map.json";
pub const STOPWORDS_FILE: &str = "stopwords.json";
pub const SUBCAT_WEIGHTS_FILE: &str = "subcategory_weights.json";

/// Read and parse a mandatory JSON file.
fn read_required(path: &Path) -> Result<Value, DictionaryError> {
    let content = std::fs::read_to_string(path).map_err(|_| DictionaryError::MissingResource {
        path: path.display().to_string(),
    })?;
    serde_json::from_str(&content).map_err(|e| DictionaryError::ParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Read and parse an optional JSON file. Absent is `None`; present but
/// unparseable is still fatal.
fn read_optional(path: &Path) -> Result<Option<Value>, DictionaryError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(DictionaryError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            });
        }
    };
    serde_json::from_str(&content)
        .map(Some)
        .map_err(|e| DictionaryError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
}

fn shape_error(path: &Path, message: String) -> DictionaryError {
    DictionaryError::InvalidShape {
        path: path.display().to_string(),
        message,
    }
}

/// Load all lookup tables from a dictionary directory.
pub fn load_dictionaries(dir: &Path) -> Result<Dictionaries, DictionaryError> {
    let mut dicts = Dictionaries::default();

    let path = dir.join(CITY_TO_PREF_FILE);
    dicts.city_to_pref =
        shapes::kv_map(&read_required(&path)?, "city", "pref").map_err(|m| shape_error(&path, m))?;

    let path = dir.join(PREF_ALIASES_FILE);
    dicts.pref_aliases = shapes::kv_map(&read_required(&path)?, "alias", "pref")
        .map_err(|m| shape_error(&path, m))?;

    let path = dir.join(PREF_TO_REGION_FILE);
    dicts.pref_to_region = shapes::kv_map(&read_required(&path)?, "pref", "region")
        .map_err(|m| shape_error(&path, m))?;

    let path = dir.join(TOKEN_CATEGORY_FILE);
    dicts.categories =
        shapes::category_map(&read_required(&path)?).map_err(|m| shape_error(&path, m))?;

    let path = dir.join(CANONICAL_MAP_FILE);
    dicts.canonical = shapes::kv_map(&read_required(&path)?, "key", "value")
        .map_err(|m| shape_error(&path, m))?;

    let path = dir.join(STOPWORDS_FILE);
    dicts.stopwords =
        shapes::string_set(&read_required(&path)?).map_err(|m| shape_error(&path, m))?;

    let path = dir.join(SUBCAT_WEIGHTS_FILE);
    dicts.subcat_weights = match read_optional(&path)? {
        Some(value) => shapes::subcat_weight_map(&value).map_err(|m| shape_error(&path, m))?,
        None => {
            debug!(path = %path.display(), "optional weight table absent, using empty table");
            Default::default()
        }
    };

    dicts.rebuild_regions();

    info!(
        cities = dicts.city_to_pref.len(),
        prefs = dicts.pref_to_region.len(),
        categories = dicts.categories.len(),
        aliases = dicts.canonical.len(),
        stopwords = dicts.stopwords.len(),
        weight_overrides = dicts.subcat_weights.len(),
        "dictionaries loaded"
    );

    Ok(dicts)
}

/// Load person records from a JSON file
/// (`[{"Name": ..., "Features": [...]}, ...]`).
pub fn load_people(path: &Path) -> Result<Vec<Person>, DictionaryError> {
    let content = std::fs::read_to_string(path).map_err(|_| DictionaryError::MissingResource {
        path: path.display().to_string(),
    })?;
    serde_json::from_str(&content).map_err(|e| DictionaryError::ParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
