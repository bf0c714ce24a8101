//! Shared application state, stored in Serenity's global context as a `TypeMapKey`.

use crate::catalog::Catalogs;
use crate::database::DbPool;
use crate::prices::PriceIndex;
use serenity::prelude::TypeMapKey;
use std::sync::Arc;

/// Everything a command handler may touch. Built once during startup; the catalogs are
/// never mutated afterwards, so it can be shared freely across concurrent invocations.
pub struct AppState {
    /// Registrations and obtained-pet logs.
    pub db: DbPool,
    /// Item and pet lookup tables loaded before the gateway connects.
    pub catalogs: Catalogs,
    /// Remote price history source.
    pub prices: Arc<dyn PriceIndex>,
}

impl AppState {
    pub fn new(db: DbPool, catalogs: Catalogs, prices: Arc<dyn PriceIndex>) -> Self {
        Self {
            db,
            catalogs,
            prices,
        }
    }

    pub async fn from_ctx(ctx: &serenity::prelude::Context) -> Option<Arc<Self>> {
        ctx.data.read().await.get::<AppState>().cloned()
    }
}

impl TypeMapKey for AppState {
    type Value = Arc<AppState>;
}
