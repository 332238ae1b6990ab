//! JSON shape adapters — one per table type.
//!
//! Each adapter accepts every shape the source data is known to arrive in
//! (object of pairs, array of records, array of arrays) and produces the
//! canonical map. A top-level value of the wrong type is an error; rows
//! that do not fit any accepted shape are skipped, matching the tolerant
//! ingestion the tables were built for. All keys pass through
//! `normalize_key` so lookups never see spelling variants.

use kizuna_core::types::collections::{FxHashMap, FxHashSet};
use serde_json::Value;

use super::types::CategoryEntry;
use crate::text::normalize_key;

/// Scalar JSON value as a string; `None` for arrays/objects/null.
fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Scalar JSON value as f64; numeric strings are accepted.
fn scalar_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// String field from a record, trying `keys` in order. Empty strings count
/// as absent.
fn record_field(record: &serde_json::Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| record.get(*key).and_then(scalar_string))
        .find(|s| !s.is_empty())
}

/// Key/value table: `{"k": "v"}`, `[{key_field: .., val_field: ..}]`, or
/// `[["k", "v"], ...]`.
pub fn kv_map(
    value: &Value,
    key_field: &str,
    val_field: &str,
) -> Result<FxHashMap<String, String>, String> {
    match value {
        Value::Object(entries) => {
            let mut out = FxHashMap::default();
            for (key, val) in entries {
                let key = normalize_key(key);
                if key.is_empty() {
                    continue;
                }
                if let Some(val) = scalar_string(val) {
                    out.insert(key, val);
                }
            }
            Ok(out)
        }
        Value::Array(items) => {
            // Records first; fall back to pair arrays when no record matched.
            let mut out = FxHashMap::default();
            for item in items {
                if let Value::Object(record) = item {
                    let key = record
                        .get(key_field)
                        .and_then(scalar_string)
                        .map(|k| normalize_key(&k))
                        .unwrap_or_default();
                    let val = record.get(val_field).and_then(scalar_string);
                    if let (false, Some(val)) = (key.is_empty(), val) {
                        out.insert(key, val);
                    }
                }
            }
            if !out.is_empty() {
                return Ok(out);
            }
            for item in items {
                if let Value::Array(pair) = item {
                    if pair.len() >= 2 {
                        let key = scalar_string(&pair[0])
                            .map(|k| normalize_key(&k))
                            .unwrap_or_default();
                        if key.is_empty() {
                            continue;
                        }
                        if let Some(val) = scalar_string(&pair[1]) {
                            out.insert(key, val);
                        }
                    }
                }
            }
            Ok(out)
        }
        _ => Err("expected a JSON object or array".to_string()),
    }
}

/// Stopword set: `["w", ...]`, `[["w"], ...]`, or object keys.
pub fn string_set(value: &Value) -> Result<FxHashSet<String>, String> {
    let mut out = FxHashSet::default();
    match value {
        Value::Array(items) => {
            for item in items {
                let word = match item {
                    Value::Array(inner) => inner.first().and_then(scalar_string),
                    other => scalar_string(other),
                };
                if let Some(word) = word {
                    let word = normalize_key(&word);
                    if !word.is_empty() {
                        out.insert(word);
                    }
                }
            }
            Ok(out)
        }
        Value::Object(entries) => {
            for key in entries.keys() {
                let word = normalize_key(key);
                if !word.is_empty() {
                    out.insert(word);
                }
            }
            Ok(out)
        }
        _ => Err("expected a JSON array or object".to_string()),
    }
}

/// Category annotation from a record value: object, positional array, or a
/// bare category string.
fn category_entry_of(value: &Value) -> CategoryEntry {
    fn or_other(field: Option<String>) -> String {
        field.filter(|s| !s.is_empty()).unwrap_or_else(|| "other".to_string())
    }

    match value {
        Value::Object(record) => CategoryEntry {
            category: or_other(record_field(record, &["category"])),
            // Legacy single-subcategory exports used "subcategory"
            sub1: or_other(record_field(record, &["subcategory1", "subcategory"])),
            sub2: or_other(record_field(record, &["subcategory2"])),
        },
        Value::Array(fields) => CategoryEntry {
            category: or_other(fields.first().and_then(scalar_string)),
            sub1: or_other(fields.get(1).and_then(scalar_string)),
            sub2: or_other(fields.get(2).and_then(scalar_string)),
        },
        other => CategoryEntry {
            category: or_other(scalar_string(other)),
            ..CategoryEntry::default()
        },
    }
}

/// Token-category table: `{token: {..}}`, `{token: [..]}`,
/// `[{"token": .., ..}]`, or `[[token, cat, sub1, sub2], ...]`.
pub fn category_map(value: &Value) -> Result<FxHashMap<String, CategoryEntry>, String> {
    let mut out = FxHashMap::default();
    match value {
        Value::Object(entries) => {
            for (token, val) in entries {
                let token = normalize_key(token);
                if token.is_empty() {
                    continue;
                }
                out.insert(token, category_entry_of(val));
            }
            Ok(out)
        }
        Value::Array(items) => {
            for item in items {
                match item {
                    Value::Object(record) => {
                        let token = record
                            .get("token")
                            .and_then(scalar_string)
                            .map(|t| normalize_key(&t))
                            .unwrap_or_default();
                        if token.is_empty() {
                            continue;
                        }
                        out.insert(token, category_entry_of(item));
                    }
                    Value::Array(fields) => {
                        let token = fields
                            .first()
                            .and_then(scalar_string)
                            .map(|t| normalize_key(&t))
                            .unwrap_or_default();
                        if token.is_empty() {
                            continue;
                        }
                        let rest = Value::Array(fields[1..].to_vec());
                        out.insert(token, category_entry_of(&rest));
                    }
                    _ => {}
                }
            }
            Ok(out)
        }
        _ => Err("expected a JSON object or array".to_string()),
    }
}

/// Subcategory-weight table: `{"(cat,sub1,sub2)": weight}`,
/// `[{"category": .., "subcategory1": .., "subcategory2": .., "weight": ..}]`,
/// or `[[cat, sub1, sub2, weight], ...]`. Wildcard components are `*`.
pub fn subcat_weight_map(
    value: &Value,
) -> Result<FxHashMap<(String, String, String), f64>, String> {
    fn or_wild(field: Option<String>) -> String {
        field.filter(|s| !s.is_empty()).unwrap_or_else(|| "*".to_string())
    }

    let mut out = FxHashMap::default();
    match value {
        Value::Object(entries) => {
            for (key, val) in entries {
                let Some(weight) = scalar_f64(val) else {
                    continue;
                };
                let key = key.trim().trim_start_matches('(').trim_end_matches(')');
                let mut parts = key.split(',').map(str::trim);
                let cat = or_wild(parts.next().map(str::to_string));
                let sub1 = or_wild(parts.next().map(str::to_string));
                let sub2 = or_wild(parts.next().map(str::to_string));
                out.insert((cat, sub1, sub2), weight);
            }
            Ok(out)
        }
        Value::Array(items) => {
            for item in items {
                match item {
                    Value::Object(record) => {
                        let cat = record_field(record, &["category"])
                            .unwrap_or_else(|| "other".to_string());
                        let sub1 = or_wild(record_field(record, &["subcategory1"]));
                        let sub2 = or_wild(record_field(record, &["subcategory2"]));
                        let weight = record.get("weight").and_then(scalar_f64).unwrap_or(1.0);
                        out.insert((cat, sub1, sub2), weight);
                    }
                    Value::Array(fields) => {
                        let Some(cat) = fields.first().and_then(scalar_string) else {
                            continue;
                        };
                        let sub1 = or_wild(fields.get(1).and_then(scalar_string));
                        let sub2 = or_wild(fields.get(2).and_then(scalar_string));
                        let weight = fields.get(3).and_then(scalar_f64).unwrap_or(1.0);
                        out.insert((cat, sub1, sub2), weight);
                    }
                    _ => {}
                }
            }
            Ok(out)
        }
        _ => Err("expected a JSON object or array".to_string()),
    }
}
