//! Token weighting — category bases, geo levels, wildcard multipliers.

use kizuna_core::config::WeightsConfig;
use kizuna_core::types::collections::FxHashMap;
use kizuna_core::types::Token;

/// Assigns a scalar weight to any single token.
///
/// Pure function of the weight profile, the optional override table, and
/// the two run-time link weights. Total: every miss resolves to a numeric
/// default, never an error.
pub struct WeightModel<'a> {
    weights: &'a WeightsConfig,
    overrides: &'a FxHashMap<(String, String, String), f64>,
    link_sub1_weight: f64,
    link_sub2_weight: f64,
}

impl<'a> WeightModel<'a> {
    pub fn new(
        weights: &'a WeightsConfig,
        overrides: &'a FxHashMap<(String, String, String), f64>,
        link_sub1_weight: f64,
        link_sub2_weight: f64,
    ) -> Self {
        Self {
            weights,
            overrides,
            link_sub1_weight,
            link_sub2_weight,
        }
    }

    /// Weight of one token.
    ///
    /// Geo tokens: geo category base × hierarchy level. Link tokens: the
    /// run-time scalar as-is, bypassing category weighting. Plain tokens:
    /// category base × wildcard-fallback multiplier.
    pub fn weight(&self, token: &Token) -> f64 {
        match token {
            Token::GeoCity(_) => {
                self.weights.category_weight("geo") * self.weights.effective_city_level()
            }
            Token::GeoPref(_) => {
                self.weights.category_weight("geo") * self.weights.effective_pref_level()
            }
            Token::GeoRegion(_) => {
                self.weights.category_weight("geo") * self.weights.effective_region_level()
            }
            Token::LinkSub1(_) => self.link_sub1_weight,
            Token::LinkSub2(_) => self.link_sub2_weight,
            Token::Plain {
                category,
                sub1,
                sub2,
                ..
            } => self.weights.category_weight(category) * self.multiplier(category, sub1, sub2),
        }
    }

    /// 4-step wildcard fallback: exact, `(cat, sub1, *)`, `(cat, *, sub2)`,
    /// `(cat, *, *)`, then 1.0.
    fn multiplier(&self, category: &str, sub1: &str, sub2: &str) -> f64 {
        let candidates = [
            (category, sub1, sub2),
            (category, sub1, "*"),
            (category, "*", sub2),
            (category, "*", "*"),
        ];
        for (cat, s1, s2) in candidates {
            let key = (cat.to_string(), s1.to_string(), s2.to_string());
            if let Some(&weight) = self.overrides.get(&key) {
                return weight;
            }
        }
        1.0
    }
}
