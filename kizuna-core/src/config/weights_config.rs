//! Weight profile configuration.
//!
//! The compiled defaults are the manually tuned profile of the original
//! matching tool. They are a default profile, not engine law: any entry can
//! be overridden from `kizuna.toml`.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::types::collections::FxHashMap;

/// Category base weights and geographic level weights.
///
/// Unset fields fall back to the compiled defaults via the `effective_*`
/// accessors; the `category` map holds overrides only.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WeightsConfig {
    /// Per-category base weight overrides.
    /// Defaults: geo=2, role=2, industry=2, hobby=1, education=1, age=1, other=1.
    pub category: FxHashMap<String, f64>,
    /// City-level geo weight. Default: 3.
    pub city_level: Option<f64>,
    /// Prefecture-level geo weight. Default: 2.
    pub pref_level: Option<f64>,
    /// Region-level geo weight. Default: 1.
    pub region_level: Option<f64>,
}

impl WeightsConfig {
    /// Base weight for a category. Unknown categories weigh 1.0, the same
    /// default as `other`.
    pub fn category_weight(&self, category: &str) -> f64 {
        if let Some(&weight) = self.category.get(category) {
            return weight;
        }
        match category {
            "geo" | "role" | "industry" => 2.0,
            _ => 1.0,
        }
    }

    /// Returns the effective city-level geo weight, defaulting to 3.0.
    pub fn effective_city_level(&self) -> f64 {
        self.city_level.unwrap_or(3.0)
    }

    /// Returns the effective prefecture-level geo weight, defaulting to 2.0.
    pub fn effective_pref_level(&self) -> f64 {
        self.pref_level.unwrap_or(2.0)
    }

    /// Returns the effective region-level geo weight, defaulting to 1.0.
    pub fn effective_region_level(&self) -> f64 {
        self.region_level.unwrap_or(1.0)
    }

    /// Validate: every configured weight must be non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (category, &weight) in &self.category {
            if !(weight >= 0.0) {
                return Err(ConfigError::ValidationFailed {
                    field: format!("weights.category.{category}"),
                    message: "must be a non-negative number".to_string(),
                });
            }
        }
        for (field, value) in [
            ("weights.city_level", self.city_level),
            ("weights.pref_level", self.pref_level),
            ("weights.region_level", self.region_level),
        ] {
            if let Some(v) = value {
                if !(v >= 0.0) {
                    return Err(ConfigError::ValidationFailed {
                        field: field.to_string(),
                        message: "must be a non-negative number".to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}
