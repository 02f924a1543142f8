//! Min-max normalization of catalog attributes
//!
//! Maps every candidate's raw values into a [`FeatureVector`] in `[0, 1]`,
//! oriented so that `1.0` is the best value seen in the catalog and `0.0`
//! the worst, whatever the attribute's [`Polarity`].

use crate::catalog::Catalog;
use crate::schema::Polarity;
use crate::{Error, Result};
use smallvec::SmallVec;

/// Value assigned to an attribute every candidate shares
pub const NEUTRAL_VALUE: f64 = 0.5;

/// Normalized attribute values for one candidate
///
/// Inline capacity covers the common four-attribute schema.
pub type FeatureVector = SmallVec<[f64; 4]>;

/// Observed `(min, max)` of one attribute across the catalog
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttributeRange {
    pub min: f64,
    pub max: f64,
}

impl AttributeRange {
    /// Range of a non-empty sequence of values
    fn of(mut values: impl Iterator<Item = f64>) -> Option<Self> {
        let first = values.next()?;
        let init = Self { min: first, max: first };
        Some(values.fold(init, |range, v| Self {
            min: range.min.min(v),
            max: range.max.max(v),
        }))
    }

    /// True when every candidate shares the same value
    pub fn is_degenerate(&self) -> bool {
        self.max == self.min
    }

    /// Plain min-max scaling, before any polarity inversion
    pub fn scale(&self, value: f64) -> f64 {
        if self.is_degenerate() {
            return NEUTRAL_VALUE;
        }
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }

    /// Scaled value oriented so that 1.0 is ideal
    pub fn normalize(&self, value: f64, polarity: Polarity) -> f64 {
        let scaled = self.scale(value);
        match polarity {
            Polarity::HigherIsBetter => scaled,
            Polarity::LowerIsBetter => 1.0 - scaled,
        }
    }
}

/// Cached ranges and feature vectors for a whole catalog
#[derive(Debug, Clone)]
pub struct FeatureMatrix {
    ranges: Vec<AttributeRange>,
    rows: Vec<FeatureVector>,
}

impl FeatureMatrix {
    /// Compute ranges and normalize every candidate
    ///
    /// Fails with [`Error::EmptyCatalog`] when there is nothing to range over.
    pub fn build(catalog: &Catalog) -> Result<Self> {
        if catalog.is_empty() {
            return Err(Error::EmptyCatalog);
        }

        let ranges = compute_ranges(catalog)?;
        let polarities: Vec<Polarity> = catalog
            .schema()
            .attributes()
            .iter()
            .map(|a| a.polarity)
            .collect();

        let rows: Vec<FeatureVector> = catalog
            .candidates()
            .iter()
            .map(|candidate| {
                candidate
                    .values
                    .iter()
                    .zip(&ranges)
                    .zip(&polarities)
                    .map(|((&value, range), &polarity)| range.normalize(value, polarity))
                    .collect::<FeatureVector>()
            })
            .collect();

        Ok(Self { ranges, rows })
    }

    pub fn ranges(&self) -> &[AttributeRange] {
        &self.ranges
    }

    pub fn rows(&self) -> &[FeatureVector] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&FeatureVector> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of attributes per row
    pub fn dim(&self) -> usize {
        self.ranges.len()
    }
}

/// Per-attribute `(min, max)` across all candidates
pub fn compute_ranges(catalog: &Catalog) -> Result<Vec<AttributeRange>> {
    (0..catalog.dim())
        .map(|i| {
            AttributeRange::of(catalog.candidates().iter().map(|c| c.values[i]))
                .ok_or(Error::EmptyCatalog)
        })
        .collect()
}
