//! Pet catalog, loaded from the bundled static dataset.

use super::{Catalog, CatalogEntry};
use crate::error::LoadError;
use serde::Deserialize;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPet {
    pub id: i64,
    pub name: String,
    /// Boss, skill or minigame the pet drops from.
    pub activity: String,
    /// Human readable rate, e.g. `1/5,000`.
    pub drop_rate: String,
    pub release_date: String,
}

impl CatalogEntry for CatalogPet {
    fn id(&self) -> i64 {
        self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
}

pub fn parse(raw: &str, path: &Path) -> Result<Catalog<CatalogPet>, LoadError> {
    let pets: Vec<CatalogPet> =
        serde_json::from_str(raw).map_err(|source| LoadError::PetsParse {
            path: path.to_path_buf(),
            source,
        })?;
    let catalog = Catalog::from_entries(pets);
    if catalog.is_empty() {
        return Err(LoadError::EmptyCatalog("pet"));
    }
    Ok(catalog)
}

pub fn load(path: &Path) -> Result<Catalog<CatalogPet>, LoadError> {
    let raw = std::fs::read_to_string(path).map_err(|source| LoadError::PetsRead {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = parse(&raw, path)?;
    info!(target = "catalog.pets", count = catalog.len(), path = %path.display(), "pet catalog loaded");
    Ok(catalog)
}
