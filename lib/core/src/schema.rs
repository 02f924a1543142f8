//! Attribute schema definitions
//!
//! Declares which numeric attributes describe a catalog item, in which
//! direction each one improves, and how it is labelled in preference
//! requests, analysis text and wire output.

use crate::{Error, Result};
use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// Direction in which an attribute improves
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    /// Larger raw values are better (performance, capacity, recency)
    #[default]
    HigherIsBetter,
    /// Smaller raw values are better (cost)
    LowerIsBetter,
}

/// How a raw attribute value is rendered for display
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ValueFormat {
    /// Dollar amount with thousands separators, no decimals: `$1,599`
    Currency,
    /// Integer with thousands separators and an optional unit: `38,929 points`
    Grouped {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        unit: Option<String>,
    },
    /// Integer as-is with an optional unit: `24 GB`, `2022`
    Plain {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        unit: Option<String>,
    },
}

impl Default for ValueFormat {
    fn default() -> Self {
        ValueFormat::Plain { unit: None }
    }
}

/// One descriptive band used when explaining an individual item
///
/// A tier without a bound always matches and acts as the fallback.
/// A strict tier excludes the bound itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tier {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bound: Option<f64>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub strict: bool,
    pub phrase: String,
}

impl Tier {
    /// Tier that includes its bound
    pub fn new(bound: f64, phrase: &str) -> Self {
        Self { bound: Some(bound), strict: false, phrase: phrase.to_string() }
    }

    /// Tier that excludes its bound
    pub fn strict(bound: f64, phrase: &str) -> Self {
        Self { strict: true, ..Self::new(bound, phrase) }
    }

    pub fn otherwise(phrase: &str) -> Self {
        Self { bound: None, strict: false, phrase: phrase.to_string() }
    }

    fn matches(&self, value: f64, polarity: Polarity) -> bool {
        let Some(bound) = self.bound else {
            return true;
        };
        match (polarity, self.strict) {
            (Polarity::LowerIsBetter, true) => value < bound,
            (Polarity::LowerIsBetter, false) => value <= bound,
            (Polarity::HigherIsBetter, true) => value > bound,
            (Polarity::HigherIsBetter, false) => value >= bound,
        }
    }
}

/// Configuration for a single ranked attribute
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttributeSpec {
    /// Column name in catalog documents (e.g. `price`)
    pub name: String,

    /// Key used for this attribute's importance score in requests (e.g. `budget`)
    pub preference: String,

    /// Label used when this attribute is the primary consideration
    pub label: String,

    #[serde(default)]
    pub polarity: Polarity,

    /// Phrase cited when the attribute's weight dominates
    pub emphasis: String,

    #[serde(default)]
    pub format: ValueFormat,

    /// Explanation bands, checked in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tiers: Vec<Tier>,
}

impl AttributeSpec {
    /// Create an attribute where larger values are better
    pub fn higher_is_better(name: &str, preference: &str, label: &str, emphasis: &str) -> Self {
        Self {
            name: name.to_string(),
            preference: preference.to_string(),
            label: label.to_string(),
            polarity: Polarity::HigherIsBetter,
            emphasis: emphasis.to_string(),
            format: ValueFormat::default(),
            tiers: Vec::new(),
        }
    }

    /// Create an attribute where smaller values are better
    pub fn lower_is_better(name: &str, preference: &str, label: &str, emphasis: &str) -> Self {
        Self {
            polarity: Polarity::LowerIsBetter,
            ..Self::higher_is_better(name, preference, label, emphasis)
        }
    }

    pub fn with_format(mut self, format: ValueFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_tiers(mut self, tiers: Vec<Tier>) -> Self {
        self.tiers = tiers;
        self
    }

    /// First tier the raw value falls into
    ///
    /// Lower-is-better attributes match values below the bound, the others
    /// values above it. Inclusive tiers also match the bound itself.
    pub fn tier_for(&self, value: f64) -> Option<&Tier> {
        self.tiers.iter().find(|tier| tier.matches(value, self.polarity))
    }
}

/// Ordered list of attributes shared by every candidate in a catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct AttributeSchema {
    attributes: Vec<AttributeSpec>,
}

impl AttributeSchema {
    /// Create a schema, checking it is non-empty with unique names and preference keys
    pub fn new(attributes: Vec<AttributeSpec>) -> Result<Self> {
        let schema = Self { attributes };
        schema.validate()?;
        Ok(schema)
    }

    /// Re-check invariants, used after deserializing
    pub fn validate(&self) -> Result<()> {
        if self.attributes.is_empty() {
            return Err(Error::InvalidCatalog("schema has no attributes".to_string()));
        }

        let mut names = AHashSet::new();
        let mut keys = AHashSet::new();
        for spec in &self.attributes {
            if !names.insert(spec.name.as_str()) {
                return Err(Error::InvalidCatalog(format!(
                    "duplicate attribute '{}'",
                    spec.name
                )));
            }
            if !keys.insert(spec.preference.as_str()) {
                return Err(Error::InvalidCatalog(format!(
                    "duplicate preference key '{}'",
                    spec.preference
                )));
            }
        }
        Ok(())
    }

    /// The GPU schema: price, benchmark, VRAM and release year
    pub fn gpu() -> Self {
        Self {
            attributes: vec![
                AttributeSpec::lower_is_better("price", "budget", "budget", "prioritizing value for money")
                    .with_format(ValueFormat::Currency)
                    .with_tiers(vec![
                        Tier::strict(500.0, "excellent value under $500"),
                        Tier::strict(800.0, "solid mid-range pricing"),
                        Tier::otherwise("premium but justified by capabilities"),
                    ]),
                AttributeSpec::higher_is_better("benchmark", "performance", "performance", "focusing on raw performance")
                    .with_format(ValueFormat::Grouped { unit: Some("points".to_string()) })
                    .with_tiers(vec![
                        Tier::strict(30000.0, "top-tier performance for demanding workloads"),
                        Tier::strict(20000.0, "strong performance for most use cases"),
                        Tier::otherwise("adequate performance for mainstream tasks"),
                    ]),
                AttributeSpec::higher_is_better("vram", "vram", "VRAM", "emphasizing memory capacity")
                    .with_format(ValueFormat::Plain { unit: Some("GB".to_string()) })
                    .with_tiers(vec![
                        Tier::new(16.0, "generous VRAM for AI/ML and high-res gaming"),
                        Tier::new(12.0, "sufficient VRAM for most applications"),
                        Tier::otherwise("standard VRAM allocation"),
                    ]),
                AttributeSpec::higher_is_better("year", "recency", "recency", "preferring newer architectures")
                    .with_tiers(vec![
                        Tier::new(2024.0, "latest architecture with newest features"),
                        Tier::new(2023.0, "recent release with current-gen technology"),
                        Tier::otherwise("proven architecture with driver maturity"),
                    ]),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn attributes(&self) -> &[AttributeSpec] {
        &self.attributes
    }

    pub fn get(&self, index: usize) -> Option<&AttributeSpec> {
        self.attributes.get(index)
    }

    /// Position of an attribute by column name
    pub fn position(&self, name: &str) -> Option<usize> {
        self.attributes.iter().position(|a| a.name == name)
    }

    /// Position of an attribute by preference key
    pub fn position_of_preference(&self, key: &str) -> Option<usize> {
        self.attributes.iter().position(|a| a.preference == key)
    }
}

impl Default for AttributeSchema {
    fn default() -> Self {
        Self::gpu()
    }
}
