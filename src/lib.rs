//! # RankX
//!
//! A catalog ranking engine: given a fixed set of items described by numeric
//! attributes and a user's importance scores over those attributes, RankX
//! returns the top-K best matches with a 0-100 match score and a short
//! analysis of the weighting.
//!
//! ## How ranking works
//!
//! 1. Every attribute is min-max normalized across the catalog to `[0, 1]`.
//!    Lower-is-better attributes (price) are inverted so 1.0 is always ideal.
//! 2. Importance scores are divided by their sum; all-zero means uniform.
//! 3. Each item's weighted Euclidean distance to the all-ones ideal is
//!    mapped to `(1 - distance) * 100`.
//! 4. Items are stably sorted by distance and the first K returned.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! cargo install rankx
//! rankx --http-port 8000 --catalog gpus.json
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use rankx::prelude::*;
//!
//! let catalog = sample_catalog().unwrap();
//! let engine = RankingEngine::new(catalog).unwrap();
//!
//! let prefs = Preferences::new(vec![70.0, 80.0, 60.0, 40.0]);
//! let results = engine.rank(&prefs, 5).unwrap();
//! let analysis = engine.explain(&prefs).unwrap();
//!
//! assert_eq!(results.len(), 5);
//! assert!(analysis.contains("performance"));
//! ```
//!
//! ## Crate Structure
//!
//! - `rankx-core` - Schema, normalization, weights and the ranking engine
//! - `rankx-catalog` - Catalog documents, sample data and hot-reloadable snapshots
//! - `rankx-api` - REST API and wire formatting

// Re-export core types
pub use rankx_core::{
    AttributeSchema, AttributeSpec, Polarity, ValueFormat, Tier,
    Candidate, Catalog,
    FeatureMatrix, FeatureVector, AttributeRange,
    Preferences, WeightVector,
    RankingEngine, RankingConfig, RankedResult,
    Error, Result,
};

// Re-export catalog loading
pub use rankx_catalog::{CatalogDocument, CatalogSource, CatalogStore, load_catalog, sample_catalog};

// Re-export API
pub use rankx_api::RestApi;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        AttributeSchema, AttributeSpec, Polarity,
        Candidate, Catalog,
        Preferences, WeightVector,
        RankingEngine, RankingConfig, RankedResult,
        Error, Result,
        CatalogSource, CatalogStore, sample_catalog,
        RestApi,
    };
}

/// Distance and score primitives
pub mod distance {
    pub use rankx_core::distance::{distance_to_ideal, match_score, max_distance};
}
