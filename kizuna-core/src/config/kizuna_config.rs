//! Top-level Kizuna configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{BuildConfig, WeightsConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`KIZUNA_*`)
/// 2. Project config (`kizuna.toml` in the project root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct KizunaConfig {
    pub weights: WeightsConfig,
    pub build: BuildConfig,
}

impl KizunaConfig {
    /// Load configuration with layered resolution.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 2: project config
        let project_config_path = root.join("kizuna.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 1 (highest priority): environment variables
        Self::apply_env_overrides(&mut config);

        // Validate the final config
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.weights.validate()?;
        self.build.validate()?;
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut KizunaConfig, path: &Path) -> Result<(), ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;

        let file_config: KizunaConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value (or a non-empty map).
    fn merge(base: &mut KizunaConfig, other: &KizunaConfig) {
        // Weights
        for (category, &weight) in &other.weights.category {
            base.weights.category.insert(category.clone(), weight);
        }
        if other.weights.city_level.is_some() {
            base.weights.city_level = other.weights.city_level;
        }
        if other.weights.pref_level.is_some() {
            base.weights.pref_level = other.weights.pref_level;
        }
        if other.weights.region_level.is_some() {
            base.weights.region_level = other.weights.region_level;
        }

        // Build
        if other.build.min_edge_score.is_some() {
            base.build.min_edge_score = other.build.min_edge_score;
        }
        if other.build.enable_sub1_link.is_some() {
            base.build.enable_sub1_link = other.build.enable_sub1_link;
        }
        if other.build.enable_sub2_link.is_some() {
            base.build.enable_sub2_link = other.build.enable_sub2_link;
        }
        if other.build.link_sub1_weight.is_some() {
            base.build.link_sub1_weight = other.build.link_sub1_weight;
        }
        if other.build.link_sub2_weight.is_some() {
            base.build.link_sub2_weight = other.build.link_sub2_weight;
        }
        if other.build.threads.is_some() {
            base.build.threads = other.build.threads;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `KIZUNA_MIN_EDGE_SCORE`, `KIZUNA_LINK_SUB1_WEIGHT`, etc.
    fn apply_env_overrides(config: &mut KizunaConfig) {
        if let Ok(val) = std::env::var("KIZUNA_MIN_EDGE_SCORE") {
            if let Ok(v) = val.parse::<f64>() {
                config.build.min_edge_score = Some(v);
            }
        }
        if let Ok(val) = std::env::var("KIZUNA_ENABLE_SUB1_LINK") {
            if let Ok(v) = val.parse::<bool>() {
                config.build.enable_sub1_link = Some(v);
            }
        }
        if let Ok(val) = std::env::var("KIZUNA_ENABLE_SUB2_LINK") {
            if let Ok(v) = val.parse::<bool>() {
                config.build.enable_sub2_link = Some(v);
            }
        }
        if let Ok(val) = std::env::var("KIZUNA_LINK_SUB1_WEIGHT") {
            if let Ok(v) = val.parse::<f64>() {
                config.build.link_sub1_weight = Some(v);
            }
        }
        if let Ok(val) = std::env::var("KIZUNA_LINK_SUB2_WEIGHT") {
            if let Ok(v) = val.parse::<f64>() {
                config.build.link_sub2_weight = Some(v);
            }
        }
        if let Ok(val) = std::env::var("KIZUNA_THREADS") {
            if let Ok(v) = val.parse::<usize>() {
                config.build.threads = Some(v);
            }
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
