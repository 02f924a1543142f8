use crate::schema::AttributeSchema;
use crate::{Error, Result};
use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// A catalog item with raw attribute values in schema order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub values: Vec<f64>,
}

impl Candidate {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn value(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }
}

/// The fixed set of candidates available for ranking
///
/// Immutable once built; replacing the catalog means building a new one.
#[derive(Debug, Clone)]
pub struct Catalog {
    schema: AttributeSchema,
    candidates: Vec<Candidate>,
}

impl Catalog {
    /// Build a catalog, checking every candidate against the schema
    pub fn new(schema: AttributeSchema, candidates: Vec<Candidate>) -> Result<Self> {
        schema.validate()?;

        let mut names = AHashSet::with_capacity(candidates.len());
        for candidate in &candidates {
            if candidate.values.len() != schema.len() {
                return Err(Error::DimensionMismatch {
                    expected: schema.len(),
                    actual: candidate.values.len(),
                });
            }
            if let Some(i) = candidate.values.iter().position(|v| !v.is_finite()) {
                return Err(Error::InvalidCatalog(format!(
                    "'{}' has a non-finite value for '{}'",
                    candidate.name,
                    schema.attributes()[i].name
                )));
            }
            if !names.insert(candidate.name.as_str()) {
                return Err(Error::InvalidCatalog(format!(
                    "duplicate candidate name '{}'",
                    candidate.name
                )));
            }
        }

        Ok(Self { schema, candidates })
    }

    pub fn schema(&self) -> &AttributeSchema {
        &self.schema
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn get(&self, index: usize) -> Option<&Candidate> {
        self.candidates.get(index)
    }

    pub fn find(&self, name: &str) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.name == name)
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Number of attributes per candidate
    pub fn dim(&self) -> usize {
        self.schema.len()
    }
}
