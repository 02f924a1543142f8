//! # RankX Core
//!
//! Core library for the RankX catalog ranking engine.
//!
//! This crate provides the data model and the ranking algorithm:
//!
//! - [`AttributeSchema`] - Ordered attribute definitions with polarity and labels
//! - [`Catalog`] - Immutable set of [`Candidate`]s checked against a schema
//! - [`FeatureMatrix`] - Min-max normalized features, 1.0 always ideal
//! - [`WeightVector`] - Importance scores normalized to sum to 1.0
//! - [`RankingEngine`] - Weighted distance to the ideal point, scored 0-100
//!
//! ## Example
//!
//! ```rust
//! use rankx_core::{AttributeSchema, AttributeSpec, Candidate, Catalog, Preferences, RankingEngine};
//!
//! let schema = AttributeSchema::new(vec![
//!     AttributeSpec::lower_is_better("price", "budget", "budget", "prioritizing value for money"),
//!     AttributeSpec::higher_is_better("benchmark", "performance", "performance", "focusing on raw performance"),
//! ]).unwrap();
//!
//! let catalog = Catalog::new(schema, vec![
//!     Candidate::new("entry", vec![100.0, 10.0]),
//!     Candidate::new("mid", vec![500.0, 50.0]),
//!     Candidate::new("flagship", vec![1000.0, 100.0]),
//! ]).unwrap();
//!
//! let engine = RankingEngine::new(catalog).unwrap();
//! let prefs = Preferences::new(vec![100.0, 0.0]);
//! let results = engine.rank(&prefs, 2).unwrap();
//!
//! assert_eq!(results[0].name(), "entry");
//! assert_eq!(results[0].score, 100.0);
//! ```

pub mod schema;
pub mod catalog;
pub mod error;
pub mod normalize;
pub mod weights;
pub mod distance;
pub mod analysis;
pub mod engine;

pub use schema::{AttributeSchema, AttributeSpec, Polarity, ValueFormat, Tier};
pub use catalog::{Candidate, Catalog};
pub use error::{Error, Result};
pub use normalize::{AttributeRange, FeatureMatrix, FeatureVector, NEUTRAL_VALUE};
pub use weights::{Preferences, WeightVector, MAX_IMPORTANCE};
pub use analysis::{DOMINANCE_THRESHOLD, BALANCED_SUMMARY};
pub use engine::{RankingEngine, RankingConfig, RankedResult};
