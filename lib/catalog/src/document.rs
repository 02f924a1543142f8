//! JSON catalog documents
//!
//! ```json
//! {
//!   "attributes": [ { "name": "price", "preference": "budget", ... } ],
//!   "items": [ { "name": "NVIDIA RTX 4090", "values": { "price": 1599, ... } } ]
//! }
//! ```
//!
//! `attributes` may be omitted, in which case the GPU schema applies.

use rankx_core::{AttributeSchema, Candidate, Catalog, Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemRecord {
    pub name: String,
    /// Raw values keyed by attribute name
    pub values: HashMap<String, f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogDocument {
    #[serde(default)]
    pub attributes: AttributeSchema,
    pub items: Vec<ItemRecord>,
}

impl CatalogDocument {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Snapshot an existing catalog as a document
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let schema = catalog.schema();
        let items = catalog
            .candidates()
            .iter()
            .map(|candidate| ItemRecord {
                name: candidate.name.clone(),
                values: schema
                    .attributes()
                    .iter()
                    .zip(&candidate.values)
                    .map(|(spec, &v)| (spec.name.clone(), v))
                    .collect(),
            })
            .collect();

        Self {
            attributes: schema.clone(),
            items,
        }
    }

    /// Align item values with the schema and build a validated catalog
    pub fn into_catalog(self) -> Result<Catalog> {
        let schema = self.attributes;
        schema.validate()?;

        let mut candidates = Vec::with_capacity(self.items.len());
        for item in self.items {
            if let Some(unknown) = item.values.keys().find(|k| schema.position(k).is_none()) {
                return Err(Error::InvalidCatalog(format!(
                    "'{}' has unknown attribute '{}'",
                    item.name, unknown
                )));
            }

            let values = schema
                .attributes()
                .iter()
                .map(|spec| {
                    item.values.get(&spec.name).copied().ok_or_else(|| {
                        Error::InvalidCatalog(format!(
                            "'{}' is missing attribute '{}'",
                            item.name, spec.name
                        ))
                    })
                })
                .collect::<Result<Vec<f64>>>()?;

            candidates.push(Candidate::new(item.name, values));
        }

        Catalog::new(schema, candidates)
    }
}

/// Read and validate a catalog file in one step
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    CatalogDocument::load(path)?.into_catalog()
}
