//! Wire formatting for ranked results
//!
//! Everything presentational lives here: currency and unit rendering,
//! rounded scores, and the per-item explanation sentence. The core engine
//! only deals in raw numbers.

use rankx_core::{AttributeSchema, Candidate, Preferences, RankedResult, ValueFormat};
use serde::Serialize;
use serde_json::{Map, Value};

/// Raw importance above which an attribute is mentioned in an item explanation
pub const EXPLANATION_TRIGGER: f64 = 50.0;

/// Explanation used when no attribute is emphasized
pub const FALLBACK_PHRASE: &str = "well-balanced option matching your preferences";

/// One recommended item as sent to clients
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationView {
    pub name: String,
    /// Formatted attribute values keyed by attribute name
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
    #[serde(rename = "matchScore")]
    pub match_score: i64,
    pub explanation: String,
}

impl RecommendationView {
    pub fn from_ranked(schema: &AttributeSchema, result: &RankedResult<'_>) -> Self {
        Self {
            name: result.candidate.name.clone(),
            attributes: formatted_attributes(schema, result.candidate),
            match_score: result.score.round() as i64,
            explanation: result.explanation.clone().unwrap_or_default(),
        }
    }
}

/// Response body of `POST /recommend`
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationResponse {
    pub recommendations: Vec<RecommendationView>,
    pub analysis: String,
}

/// A catalog item with raw attribute values
#[derive(Debug, Clone, Serialize)]
pub struct ItemView {
    pub name: String,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl ItemView {
    pub fn from_candidate(schema: &AttributeSchema, candidate: &Candidate) -> Self {
        let attributes = schema
            .attributes()
            .iter()
            .zip(&candidate.values)
            .map(|(spec, &v)| (spec.name.clone(), Value::from(v)))
            .collect();
        Self {
            name: candidate.name.clone(),
            attributes,
        }
    }
}

fn formatted_attributes(schema: &AttributeSchema, candidate: &Candidate) -> Map<String, Value> {
    schema
        .attributes()
        .iter()
        .zip(&candidate.values)
        .map(|(spec, &v)| (spec.name.clone(), Value::String(format_value(&spec.format, v))))
        .collect()
}

/// Render a raw value according to its display format
pub fn format_value(format: &ValueFormat, value: f64) -> String {
    match format {
        ValueFormat::Currency => {
            let rounded = value.round() as i64;
            if rounded < 0 {
                format!("-${}", group_thousands(-rounded))
            } else {
                format!("${}", group_thousands(rounded))
            }
        }
        ValueFormat::Grouped { unit } => with_unit(group_thousands(value.round() as i64), unit),
        ValueFormat::Plain { unit } => with_unit(plain_number(value), unit),
    }
}

fn with_unit(number: String, unit: &Option<String>) -> String {
    match unit {
        Some(unit) => format!("{} {}", number, unit),
        None => number,
    }
}

fn plain_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// `1234567` -> `1,234,567`
pub fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Sentence explaining why an item suits the request
///
/// Cites the matching tier of every attribute whose raw importance exceeds
/// [`EXPLANATION_TRIGGER`].
pub fn describe_item(schema: &AttributeSchema, candidate: &Candidate, preferences: &Preferences) -> String {
    let mut parts: Vec<&str> = schema
        .attributes()
        .iter()
        .enumerate()
        .filter(|(i, _)| preferences.score(*i) > EXPLANATION_TRIGGER)
        .filter_map(|(i, spec)| {
            candidate
                .value(i)
                .and_then(|v| spec.tier_for(v))
                .map(|tier| tier.phrase.as_str())
        })
        .collect();

    if parts.is_empty() {
        parts.push(FALLBACK_PHRASE);
    }

    format!("This item offers {}.", parts.join(", "))
}
