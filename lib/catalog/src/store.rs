use crate::document::load_catalog;
use crate::sample::sample_catalog;
use parking_lot::RwLock;
use rankx_core::{Catalog, RankingConfig, RankingEngine, Result};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

/// Where the catalog comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// The built-in GPU sample
    Sample,
    /// A JSON catalog document on disk
    File(PathBuf),
}

impl CatalogSource {
    pub fn load(&self) -> Result<Catalog> {
        match self {
            CatalogSource::Sample => sample_catalog(),
            CatalogSource::File(path) => load_catalog(path),
        }
    }
}

impl From<Option<PathBuf>> for CatalogSource {
    fn from(path: Option<PathBuf>) -> Self {
        path.map_or(CatalogSource::Sample, CatalogSource::File)
    }
}

/// Holds the live ranking snapshot
///
/// Readers clone the current `Arc` and rank against it without holding the
/// lock. Replacements are fully built before the swap, so a reader sees
/// either the old snapshot or the new one.
pub struct CatalogStore {
    engine: RwLock<Arc<RankingEngine>>,
    source: CatalogSource,
    config: RankingConfig,
}

impl CatalogStore {
    /// Load the source and build the first snapshot
    pub fn open(source: CatalogSource, config: RankingConfig) -> Result<Self> {
        let catalog = source.load()?;
        let engine = RankingEngine::with_config(catalog, config.clone())?;
        info!("Catalog loaded from {:?}: {} items", source, engine.len());

        Ok(Self {
            engine: RwLock::new(Arc::new(engine)),
            source,
            config,
        })
    }

    /// Current snapshot
    pub fn snapshot(&self) -> Arc<RankingEngine> {
        self.engine.read().clone()
    }

    pub fn source(&self) -> &CatalogSource {
        &self.source
    }

    pub fn config(&self) -> &RankingConfig {
        &self.config
    }

    /// Swap in a new catalog, returning its size
    ///
    /// On error the current snapshot keeps serving.
    pub fn replace(&self, catalog: Catalog) -> Result<usize> {
        let engine = Arc::new(RankingEngine::with_config(catalog, self.config.clone())?);
        let count = engine.len();
        *self.engine.write() = engine;
        info!("Catalog replaced: {} items", count);
        Ok(count)
    }

    /// Re-read the configured source and swap it in
    pub fn reload(&self) -> Result<usize> {
        let catalog = match self.source.load() {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!("Catalog reload from {:?} failed: {}", self.source, e);
                return Err(e);
            }
        };
        self.replace(catalog)
    }
}
