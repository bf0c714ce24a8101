//! Tradeable item catalog, populated from the price index `/mapping` snapshot.

use super::{Catalog, CatalogEntry};
use crate::error::LoadError;
use crate::prices::PriceIndex;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    pub id: i64,
    pub name: String,
}

impl CatalogEntry for CatalogItem {
    fn id(&self) -> i64 {
        self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
}

pub async fn load(index: &dyn PriceIndex) -> Result<Catalog<CatalogItem>, LoadError> {
    let mapping = index.fetch_mapping().await?;
    let catalog = Catalog::from_entries(mapping.into_iter().map(|m| CatalogItem {
        id: m.id,
        name: m.name,
    }));
    if catalog.is_empty() {
        return Err(LoadError::EmptyCatalog("item"));
    }
    info!(target = "catalog.items", count = catalog.len(), "item catalog loaded");
    Ok(catalog)
}
