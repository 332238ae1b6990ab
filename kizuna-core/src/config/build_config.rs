//! Graph build defaults.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Default run-time parameters for a graph build. Callers may override any
/// of them per build; these mirror the original tool's slider defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BuildConfig {
    /// Minimum total score for an edge to be kept. Default: 2.0.
    pub min_edge_score: Option<f64>,
    /// Create loose ties on subcategory1 matches. Default: true.
    pub enable_sub1_link: Option<bool>,
    /// Create loose ties on subcategory2 matches. Default: true.
    pub enable_sub2_link: Option<bool>,
    /// Weight of one shared subcategory1 link token. Default: 0.6.
    pub link_sub1_weight: Option<f64>,
    /// Weight of one shared subcategory2 link token. Default: 0.6.
    pub link_sub2_weight: Option<f64>,
    /// Worker threads for the pairwise loop. Default: rayon's default.
    pub threads: Option<usize>,
}

impl BuildConfig {
    /// Returns the effective edge threshold, defaulting to 2.0.
    pub fn effective_min_edge_score(&self) -> f64 {
        self.min_edge_score.unwrap_or(2.0)
    }

    /// Returns whether subcategory1 loose ties are enabled, defaulting to true.
    pub fn effective_enable_sub1_link(&self) -> bool {
        self.enable_sub1_link.unwrap_or(true)
    }

    /// Returns whether subcategory2 loose ties are enabled, defaulting to true.
    pub fn effective_enable_sub2_link(&self) -> bool {
        self.enable_sub2_link.unwrap_or(true)
    }

    /// Returns the effective subcategory1 link weight, defaulting to 0.6.
    pub fn effective_link_sub1_weight(&self) -> f64 {
        self.link_sub1_weight.unwrap_or(0.6)
    }

    /// Returns the effective subcategory2 link weight, defaulting to 0.6.
    pub fn effective_link_sub2_weight(&self) -> f64 {
        self.link_sub2_weight.unwrap_or(0.6)
    }

    /// Validate: threshold and link weights must be non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("build.min_edge_score", self.min_edge_score),
            ("build.link_sub1_weight", self.link_sub1_weight),
            ("build.link_sub2_weight", self.link_sub2_weight),
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
