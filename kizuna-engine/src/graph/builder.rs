//! Full graph build — the O(n²) pairwise loop.
//!
//! Every parameter change rebuilds from scratch; the graph is never patched
//! incrementally. Tokenization and pair scoring run on the rayon pool; the
//! final graph assembly is single-threaded.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rayon::prelude::*;
use tracing::{debug, info};

use kizuna_core::config::{BuildConfig, WeightsConfig};
use kizuna_core::errors::BuildError;
use kizuna_core::types::collections::FxHashSet;
use kizuna_core::types::{Person, SimilarityGraph, TieEdge, Token};

use crate::dictionary::Dictionaries;
use crate::graph::scorer::{score_pair, PairScore};
use crate::tokenize::tokenize_features;
use crate::weight::WeightModel;

/// Cooperative cancellation flag, checked between pair-score iterations.
/// Cloning shares the flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Run-time parameters for one build.
#[derive(Debug, Clone)]
pub struct GraphParams {
    /// Minimum total score for an edge to be kept. Inclusive.
    pub min_edge_score: f64,
    /// Restrict the build to these person names. `None` or an empty set
    /// means everyone.
    pub subset: Option<FxHashSet<String>>,
    /// Create loose ties on subcategory1 matches.
    pub enable_sub1_link: bool,
    /// Create loose ties on subcategory2 matches.
    pub enable_sub2_link: bool,
    /// Weight of one shared subcategory1 link token.
    pub link_sub1_weight: f64,
    /// Weight of one shared subcategory2 link token.
    pub link_sub2_weight: f64,
    /// Worker threads for the pairwise loop; `None` uses rayon's default.
    pub threads: Option<usize>,
}

impl Default for GraphParams {
    fn default() -> Self {
        Self::from_config(&BuildConfig::default())
    }
}

impl GraphParams {
    /// Params seeded from configured defaults; callers override fields per
    /// build.
    pub fn from_config(config: &BuildConfig) -> Self {
        Self {
            min_edge_score: config.effective_min_edge_score(),
            subset: None,
            enable_sub1_link: config.effective_enable_sub1_link(),
            enable_sub2_link: config.effective_enable_sub2_link(),
            link_sub1_weight: config.effective_link_sub1_weight(),
            link_sub2_weight: config.effective_link_sub2_weight(),
            threads: config.threads,
        }
    }

    /// Reject out-of-domain numbers before any computation. Negative values
    /// and NaN are both errors; nothing is clamped.
    pub fn validate(&self) -> Result<(), BuildError> {
        for (field, value) in [
            ("min_edge_score", self.min_edge_score),
            ("link_sub1_weight", self.link_sub1_weight),
            ("link_sub2_weight", self.link_sub2_weight),
        ] {
            if !(value >= 0.0) {
                return Err(BuildError::InvalidParameter {
                    field: field.to_string(),
                    message: "must be a non-negative number".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Build the similarity graph for `people`.
///
/// Tokenizes every selected person, scores all unordered pairs, and admits
/// an edge when the score reaches `min_edge_score` and at least one token is
/// shared. People whose pairs all fall below the threshold stay in the graph
/// as isolated nodes.
pub fn build_graph(
    people: &[Person],
    dicts: &Dictionaries,
    weights: &WeightsConfig,
    params: &GraphParams,
    cancel: Option<&CancelToken>,
) -> Result<SimilarityGraph, BuildError> {
    params.validate()?;

    match params.threads {
        Some(n) if n > 0 => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .map_err(|err| BuildError::InvalidParameter {
                    field: "threads".to_string(),
                    message: err.to_string(),
                })?;
            pool.install(|| build_inner(people, dicts, weights, params, cancel))
        }
        _ => build_inner(people, dicts, weights, params, cancel),
    }
}

fn build_inner(
    people: &[Person],
    dicts: &Dictionaries,
    weights: &WeightsConfig,
    params: &GraphParams,
    cancel: Option<&CancelToken>,
) -> Result<SimilarityGraph, BuildError> {
    let started = std::time::Instant::now();
    let selected = select_people(people, params.subset.as_ref());
    debug!(
        total = people.len(),
        selected = selected.len(),
        "selected people for build"
    );

    let tokenized: Vec<(&str, FxHashSet<Token>)> = selected
        .par_iter()
        .map(|person| {
            let tokens = tokenize_features(
                &person.features,
                dicts,
                params.enable_sub1_link,
                params.enable_sub2_link,
            );
            (person.name.trim(), tokens)
        })
        .collect();

    let model = WeightModel::new(
        weights,
        &dicts.subcat_weights,
        params.link_sub1_weight,
        params.link_sub2_weight,
    );

    let n = tokenized.len();
    let pairs: Vec<(usize, usize)> = (0..n)
        .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
        .collect();

    let admitted: Vec<(usize, usize, PairScore)> = pairs
        .par_iter()
        .filter_map(|&(i, j)| {
            if cancel.is_some_and(CancelToken::is_cancelled) {
                return None;
            }
            let pair = score_pair(&tokenized[i].1, &tokenized[j].1, &model);
            (pair.score >= params.min_edge_score && !pair.common.is_empty())
                .then_some((i, j, pair))
        })
        .collect();

    if cancel.is_some_and(CancelToken::is_cancelled) {
        return Err(BuildError::Cancelled);
    }

    let mut graph = SimilarityGraph::default();
    let indices: Vec<_> = tokenized
        .iter()
        .map(|(name, tokens)| graph.add_person((*name).to_string(), tokens.len()))
        .collect();
    for (i, j, pair) in admitted {
        let common_count = pair.common.len();
        graph.add_tie(
            indices[i],
            indices[j],
            TieEdge {
                score: pair.score,
                common: pair.common.into(),
                common_count,
            },
        );
    }

    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        min_edge_score = params.min_edge_score,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "similarity graph built"
    );
    Ok(graph)
}

/// Subset filter plus first-occurrence name dedup. Blank names are dropped.
fn select_people<'a>(
    people: &'a [Person],
    subset: Option<&FxHashSet<String>>,
) -> Vec<&'a Person> {
    let mut seen = FxHashSet::default();
    people
        .iter()
        .filter(|person| {
            let name = person.name.trim();
            if name.is_empty() {
                return false;
            }
            if let Some(subset) = subset {
                if !subset.is_empty() && !subset.contains(name) {
                    return false;
                }
            }
            seen.insert(name.to_string())
        })
        .collect()
}
