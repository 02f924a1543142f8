//! Preference importance scores and the derived weight vector

use crate::schema::AttributeSchema;
use crate::{Error, Result};
use smallvec::SmallVec;

/// Upper bound of an importance score accepted at the request boundary
pub const MAX_IMPORTANCE: f64 = 100.0;

/// Raw importance scores, one per attribute in schema order
#[derive(Debug, Clone, PartialEq)]
pub struct Preferences {
    scores: Vec<f64>,
}

impl Preferences {
    pub fn new(scores: Vec<f64>) -> Self {
        Self { scores }
    }

    /// Build preferences from `preference key -> score` pairs
    ///
    /// Keys the request leaves out count as zero. Unknown keys are rejected.
    pub fn from_keyed<'a>(
        schema: &AttributeSchema,
        keyed: impl IntoIterator<Item = (&'a str, f64)>,
    ) -> Result<Self> {
        let mut scores = vec![0.0; schema.len()];
        for (key, score) in keyed {
            let index = schema.position_of_preference(key).ok_or_else(|| {
                Error::InvalidRequest(format!("unknown preference '{}'", key))
            })?;
            scores[index] = score;
        }
        Ok(Self { scores })
    }

    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Importance score of one attribute, zero if out of range
    pub fn score(&self, index: usize) -> f64 {
        self.scores.get(index).copied().unwrap_or(0.0)
    }

    /// Reject scores outside `[0, max]`
    ///
    /// The engine only insists on non-negativity; the upper bound is the
    /// request boundary's contract.
    pub fn check_range(&self, schema: &AttributeSchema, max: f64) -> Result<()> {
        for (spec, &score) in schema.attributes().iter().zip(&self.scores) {
            if !(0.0..=max).contains(&score) {
                return Err(Error::InvalidRequest(format!(
                    "'{}' must be between 0 and {}, got {}",
                    spec.preference, max, score
                )));
            }
        }
        Ok(())
    }

    /// Normalize into a weight vector for `dim` attributes
    pub fn to_weights(&self, dim: usize) -> Result<WeightVector> {
        WeightVector::from_importance(&self.scores, dim)
    }
}

/// Normalized per-attribute weights; components sum to 1.0
#[derive(Debug, Clone, PartialEq)]
pub struct WeightVector {
    weights: SmallVec<[f64; 4]>,
}

impl WeightVector {
    /// Uniform weights `1/dim`
    pub fn uniform(dim: usize) -> Self {
        let w = 1.0 / dim as f64;
        Self { weights: SmallVec::from_elem(w, dim) }
    }

    /// Divide each importance score by their sum
    ///
    /// An all-zero input falls back to uniform weights rather than failing.
    pub fn from_importance(scores: &[f64], dim: usize) -> Result<Self> {
        if dim == 0 {
            return Err(Error::InvalidRequest("no attributes to weight".to_string()));
        }
        if scores.len() != dim {
            return Err(Error::DimensionMismatch {
                expected: dim,
                actual: scores.len(),
            });
        }
        if let Some(bad) = scores.iter().find(|s| !s.is_finite() || **s < 0.0) {
            return Err(Error::InvalidRequest(format!(
                "importance scores must be non-negative, got {}",
                bad
            )));
        }

        // Rescale by the largest score so the sum stays finite
        let peak = scores.iter().copied().fold(0.0, f64::max);
        if peak == 0.0 {
            return Ok(Self::uniform(dim));
        }
        let scaled: SmallVec<[f64; 4]> = scores.iter().map(|s| s / peak).collect();
        let total: f64 = scaled.iter().sum();

        Ok(Self {
            weights: scaled.iter().map(|s| s / total).collect(),
        })
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.weights
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn sum(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// Index of the largest weight, first one wins on ties
    pub fn dominant(&self) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, &w) in self.weights.iter().enumerate() {
            match best {
                Some((_, bw)) if w <= bw => {}
                _ => best = Some((i, w)),
            }
        }
        best.map(|(i, _)| i)
    }

    /// Indices whose weight is strictly above `threshold`
    pub fn above(&self, threshold: f64) -> impl Iterator<Item = usize> + '_ {
        self.weights
            .iter()
            .enumerate()
            .filter(move |(_, &w)| w > threshold)
            .map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::AHashMap;

    #[test]
    fn test_weights_normalization() {
        let weights = Preferences::new(vec![70.0, 80.0, 60.0, 40.0]).to_weights(4).unwrap();
        assert!((weights.sum() - 1.0).abs() < 1e-6);

        let w = weights.as_slice();
        assert!(w[1] > w[0]);
        assert!(w[0] > w[2]);
        assert!(w[2] > w[3]);
        assert!((w[0] - 70.0 / 250.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_preferences_uniform() {
        let weights = Preferences::new(vec![0.0; 4]).to_weights(4).unwrap();
        assert_eq!(weights, WeightVector::uniform(4));
        assert_eq!(weights.as_slice(), &[0.25, 0.25, 0.25, 0.25]);

        let two = Preferences::new(vec![0.0, 0.0]).to_weights(2).unwrap();
        assert_eq!(two.as_slice(), &[0.5, 0.5]);
    }

    #[test]
    fn test_single_nonzero() {
        let weights = Preferences::new(vec![100.0, 0.0]).to_weights(2).unwrap();
        assert_eq!(weights.as_slice(), &[1.0, 0.0]);
    }

    #[test]
    fn test_simplex_over_many_inputs() {
        for a in (0..=100).step_by(7) {
            for b in (0..=100).step_by(11) {
                for c in (0..=100).step_by(13) {
                    let weights = Preferences::new(vec![a as f64, b as f64, c as f64])
                        .to_weights(3)
                        .unwrap();
                    assert!((weights.sum() - 1.0).abs() < 1e-6, "{} {} {}", a, b, c);
                    assert!(weights.as_slice().iter().all(|&w| w >= 0.0));
                }
            }
        }
    }

    #[test]
    fn test_huge_scores_stay_on_simplex() {
        let weights = Preferences::new(vec![f64::MAX, f64::MAX, 0.0, 0.0]).to_weights(4).unwrap();
        assert_eq!(weights.as_slice(), &[0.5, 0.5, 0.0, 0.0]);

        let weights = Preferences::new(vec![f64::MAX, f64::MAX / 2.0, f64::MAX / 4.0])
            .to_weights(3)
            .unwrap();
        assert!((weights.sum() - 1.0).abs() < 1e-6);
        assert!((weights.as_slice()[0] - 4.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_negative_weight_error() {
        let result = Preferences::new(vec![10.0, -1.0]).to_weights(2);
        assert!(matches!(result, Err(Error::InvalidRequest(_))));
    }

    #[test]
    fn test_nan_weight_error() {
        let result = Preferences::new(vec![f64::NAN, 1.0]).to_weights(2);
        assert!(matches!(result, Err(Error::InvalidRequest(_))));
    }

    #[test]
    fn test_dimension_mismatch() {
        let result = Preferences::new(vec![1.0, 2.0, 3.0]).to_weights(4);
        assert!(matches!(
            result,
            Err(Error::DimensionMismatch { expected: 4, actual: 3 })
        ));
    }

    #[test]
    fn test_dominant_first_on_ties() {
        let weights = Preferences::new(vec![10.0, 40.0, 40.0, 10.0]).to_weights(4).unwrap();
        assert_eq!(weights.dominant(), Some(1));
        assert_eq!(WeightVector::uniform(3).dominant(), Some(0));
    }

    #[test]
    fn test_above_threshold() {
        let weights = Preferences::new(vec![80.0, 30.0, 40.0, 20.0]).to_weights(4).unwrap();
        let above: Vec<usize> = weights.above(0.3).collect();
        assert_eq!(above, vec![0]);
    }

    #[test]
    fn test_from_keyed() {
        let schema = AttributeSchema::gpu();
        let keyed = AHashMap::from_iter([
            ("budget".to_string(), 70.0),
            ("recency".to_string(), 40.0),
        ]);
        let prefs =
            Preferences::from_keyed(&schema, keyed.iter().map(|(k, v)| (k.as_str(), *v))).unwrap();
        assert_eq!(prefs.scores(), &[70.0, 0.0, 0.0, 40.0]);
    }

    #[test]
    fn test_from_keyed_unknown_key() {
        let schema = AttributeSchema::gpu();
        assert!(matches!(
            Preferences::from_keyed(&schema, [("colour", 10.0)]),
            Err(Error::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_check_range() {
        let schema = AttributeSchema::gpu();
        assert!(Preferences::new(vec![0.0, 100.0, 50.0, 1.0])
            .check_range(&schema, MAX_IMPORTANCE)
            .is_ok());
        assert!(Preferences::new(vec![0.0, 101.0, 50.0, 1.0])
            .check_range(&schema, MAX_IMPORTANCE)
            .is_err());
        assert!(Preferences::new(vec![-1.0, 1.0, 50.0, 1.0])
            .check_range(&schema, MAX_IMPORTANCE)
            .is_err());
    }
}
