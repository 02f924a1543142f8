//! Human-readable summaries of a preference weighting
//!
//! Descriptive only; nothing here feeds back into ranking.

use crate::schema::AttributeSchema;
use crate::weights::WeightVector;

/// Weight an attribute must exceed to be cited in the summary
pub const DOMINANCE_THRESHOLD: f64 = 0.3;

/// Summary used when no attribute dominates
pub const BALANCED_SUMMARY: &str =
    "Your preferences are well-balanced. Recommendations optimize across all factors equally.";

/// Describe which attributes drive a weighting
pub fn summarize(schema: &AttributeSchema, weights: &WeightVector) -> String {
    let phrases: Vec<&str> = weights
        .above(DOMINANCE_THRESHOLD)
        .filter_map(|i| schema.get(i))
        .map(|spec| spec.emphasis.as_str())
        .collect();

    if phrases.is_empty() {
        return BALANCED_SUMMARY.to_string();
    }

    let primary = weights
        .dominant()
        .and_then(|i| schema.get(i))
        .map(|spec| spec.label.as_str())
        .unwrap_or_default();

    format!(
        "Based on your preferences ({}), these items best match your needs with {} as the primary consideration.",
        phrases.join(", "),
        primary
    )
}
