//! Weighted distance to the ideal point and the match-score transform
//!
//! Feature vectors are oriented so the ideal candidate sits at the all-ones
//! vector. Distances are taken from there.

/// Lowest possible match score
pub const MIN_SCORE: f64 = 0.0;

/// Match score of a candidate at the ideal point
pub const MAX_SCORE: f64 = 100.0;

/// Value of every ideal feature component
pub const IDEAL_VALUE: f64 = 1.0;

/// Weighted Euclidean distance from `features` to the all-ones ideal
///
/// `sqrt(Σ wᵢ · (fᵢ − 1)²)`. Lower is better.
pub fn distance_to_ideal(features: &[f64], weights: &[f64]) -> f64 {
    features
        .iter()
        .zip(weights)
        .map(|(f, w)| w * (f - IDEAL_VALUE).powi(2))
        .sum::<f64>()
        .sqrt()
}

/// Largest distance a candidate can reach: `sqrt(Σ wᵢ)`
///
/// Holds only because every feature lies in `[0, 1]` and the ideal is the
/// all-ones vector, so each squared term is at most 1. With normalized
/// weights this is exactly 1.0. Changing the denominator rescales every
/// published score.
pub fn max_distance(weights: &[f64]) -> f64 {
    weights.iter().sum::<f64>().sqrt()
}

/// Map a distance onto `[0, 100]`, 100 being the ideal point
pub fn match_score(distance: f64, max_distance: f64) -> f64 {
    if max_distance <= 0.0 {
        return MAX_SCORE;
    }
    ((1.0 - distance / max_distance) * MAX_SCORE).clamp(MIN_SCORE, MAX_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weighted_distance_calculation() {
        let features = [0.5, 0.5, 0.5, 0.5];
        let weights = [0.25, 0.25, 0.25, 0.25];
        let distance = distance_to_ideal(&features, &weights);
        assert!((distance - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_distance_ignores_zero_weights() {
        let weights = [0.0, 1.0];
        assert_eq!(distance_to_ideal(&[0.0, 1.0], &weights), 0.0);
        assert_eq!(distance_to_ideal(&[1.0, 0.0], &weights), 1.0);
    }

    #[test]
    fn test_ideal_scores_100() {
        let weights = [0.4, 0.6];
        let d = distance_to_ideal(&[1.0, 1.0], &weights);
        assert_eq!(d, 0.0);
        assert_eq!(match_score(d, max_distance(&weights)), 100.0);
    }

    #[test]
    fn test_worst_scores_0() {
        let weights = [0.4, 0.6];
        let d = distance_to_ideal(&[0.0, 0.0], &weights);
        assert!(match_score(d, max_distance(&weights)).abs() < 1e-9);
    }

    #[test]
    fn test_zero_weight_ignores_attribute() {
        let d = distance_to_ideal(&[0.0, 1.0], &[0.0, 1.0]);
        assert_eq!(d, 0.0);
    }

    #[test]
    fn test_score_clamped() {
        assert_eq!(match_score(2.0, 1.0), 0.0);
        assert_eq!(match_score(-1.0, 1.0), 100.0);
        assert_eq!(match_score(0.25, 1.0), 75.0);
    }

    #[test]
    fn test_max_distance_of_normalized_weights() {
        assert!((max_distance(&[0.25, 0.25, 0.25, 0.25]) - 1.0).abs() < 1e-12);
    }
}
