//! Ranking engine
//!
//! Scores every catalog candidate against a preference weighting and
//! returns the best matches, closest to the ideal point first.

use crate::analysis;
use crate::catalog::{Candidate, Catalog};
use crate::distance::{distance_to_ideal, match_score, max_distance};
use crate::normalize::FeatureMatrix;
use crate::weights::{Preferences, WeightVector};
use crate::{Error, Result};
use ordered_float::OrderedFloat;
use tracing::debug;

/// Engine-level settings
#[derive(Debug, Clone)]
pub struct RankingConfig {
    /// Result count used by [`RankingEngine::recommend`]
    pub default_k: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self { default_k: 5 }
    }
}

/// A candidate paired with its match score
#[derive(Debug, Clone, PartialEq)]
pub struct RankedResult<'a> {
    pub candidate: &'a Candidate,
    /// Position of the candidate in the catalog
    pub index: usize,
    /// Weighted distance to the ideal point
    pub distance: f64,
    /// Match score in `[0, 100]`
    pub score: f64,
    pub explanation: Option<String>,
}

impl RankedResult<'_> {
    pub fn name(&self) -> &str {
        &self.candidate.name
    }

    pub fn with_explanation(mut self, explanation: String) -> Self {
        self.explanation = Some(explanation);
        self
    }
}

/// An immutable catalog snapshot with its cached feature matrix
///
/// Cheap to share behind an `Arc`; rebuilding is the only way to change it.
#[derive(Debug, Clone)]
pub struct RankingEngine {
    catalog: Catalog,
    features: FeatureMatrix,
    config: RankingConfig,
}

impl RankingEngine {
    /// Normalize the catalog and cache its feature matrix
    pub fn new(catalog: Catalog) -> Result<Self> {
        Self::with_config(catalog, RankingConfig::default())
    }

    pub fn with_config(catalog: Catalog, config: RankingConfig) -> Result<Self> {
        if config.default_k == 0 {
            return Err(Error::InvalidRequest("default_k must be at least 1".to_string()));
        }
        let features = FeatureMatrix::build(&catalog)?;
        debug!(
            candidates = catalog.len(),
            attributes = catalog.dim(),
            "feature matrix built"
        );
        Ok(Self { catalog, features, config })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn features(&self) -> &FeatureMatrix {
        &self.features
    }

    pub fn config(&self) -> &RankingConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// Derive the weight vector for a set of importance scores
    pub fn weights(&self, preferences: &Preferences) -> Result<WeightVector> {
        preferences.to_weights(self.catalog.dim())
    }

    /// Rank the catalog and return the top `k`
    ///
    /// Results are ordered by ascending distance; candidates at equal
    /// distance keep their catalog order. Asking for more than the catalog
    /// holds returns every candidate.
    pub fn rank(&self, preferences: &Preferences, k: usize) -> Result<Vec<RankedResult<'_>>> {
        if k == 0 {
            return Err(Error::InvalidRequest("k must be at least 1".to_string()));
        }
        if self.features.is_empty() {
            return Err(Error::EmptyCatalog);
        }

        let weights = self.weights(preferences)?;
        let w = weights.as_slice();
        let max_d = max_distance(w);

        let mut distances: Vec<(usize, f64)> = self
            .features
            .rows()
            .iter()
            .map(|row| distance_to_ideal(row, w))
            .enumerate()
            .collect();

        // Stable sort: ties keep catalog order
        distances.sort_by_key(|&(_, d)| OrderedFloat(d));

        let results: Vec<RankedResult<'_>> = distances
            .into_iter()
            .take(k)
            .map(|(index, distance)| RankedResult {
                candidate: &self.catalog.candidates()[index],
                index,
                distance,
                score: match_score(distance, max_d),
                explanation: None,
            })
            .collect();

        debug!(
            requested = k,
            returned = results.len(),
            best = results.first().map(|r| r.score),
            "ranked catalog"
        );

        Ok(results)
    }

    /// Rank with the configured default result count
    pub fn recommend(&self, preferences: &Preferences) -> Result<Vec<RankedResult<'_>>> {
        self.rank(preferences, self.config.default_k)
    }

    /// Summarize which attributes drive the given preferences
    pub fn explain(&self, preferences: &Preferences) -> Result<String> {
        let weights = self.weights(preferences)?;
        Ok(analysis::summarize(self.catalog.schema(), &weights))
    }
}
