//! Person records — the immutable input to a graph build.

use serde::{Deserialize, Serialize};

/// One person from the ingested profile data.
///
/// Field names match the upstream JSON (`{"Name": ..., "Features": ...}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    /// Unique display name; doubles as the node id.
    #[serde(rename = "Name")]
    pub name: String,
    /// Raw feature tags, before any normalization.
    #[serde(rename = "Features", default)]
    pub features: RawFeatures,
}

/// Raw feature input. Upstream exports either a string array or a single
/// comma-delimited string; both are accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawFeatures {
    List(Vec<String>),
    Joined(String),
}

impl Default for RawFeatures {
    fn default() -> Self {
        RawFeatures::List(Vec::new())
    }
}

impl RawFeatures {
    /// The individual raw entries, comma-splitting the joined form.
    pub fn items(&self) -> Vec<&str> {
        match self {
            RawFeatures::List(list) => list.iter().map(String::as_str).collect(),
            RawFeatures::Joined(joined) => joined.split(',').collect(),
        }
    }
}

impl Person {
    /// Create a person from a name and a list of raw feature tags.
    pub fn new(name: impl Into<String>, features: Vec<String>) -> Self {
        Self {
            name: name.into(),
            features: RawFeatures::List(features),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_list_features() {
        let person: Person =
            serde_json::from_str(r#"{"Name": "佐藤", "Features": ["温泉", "名古屋"]}"#).unwrap();
        assert_eq!(person.name, "佐藤");
        assert_eq!(person.features.items(), vec!["温泉", "名古屋"]);
    }

    #[test]
    fn test_deserialize_joined_features() {
        let person: Person =
            serde_json::from_str(r#"{"Name": "鈴木", "Features": "温泉, ランニング"}"#).unwrap();
        assert_eq!(person.features.items(), vec!["温泉", " ランニング"]);
    }

    #[test]
    fn test_missing_features_default_to_empty() {
        let person: Person = serde_json::from_str(r#"{"Name": "高橋"}"#).unwrap();
        assert!(person.features.items().is_empty());
    }
}
