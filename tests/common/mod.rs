//! Shared fixtures: an in-memory database and a canned price index.
#![allow(dead_code)]

use async_trait::async_trait;
use herebot::AppState;
use herebot::catalog::{Catalog, CatalogPet, Catalogs};
use herebot::database::{self, DbPool};
use herebot::error::TransportError;
use herebot::prices::PriceIndex;
use herebot::prices::schema::{MappingEntry, TimeSeriesEntry, TimeSeriesResponse};
use sqlx::sqlite::SqliteConnectOptions;
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;

#[derive(Default)]
pub struct FakePriceIndex {
    pub mapping: Vec<MappingEntry>,
    pub history: HashMap<i64, Vec<TimeSeriesEntry>>,
}

#[async_trait]
impl PriceIndex for FakePriceIndex {
    async fn fetch_mapping(&self) -> Result<Vec<MappingEntry>, TransportError> {
        Ok(self.mapping.clone())
    }

    async fn fetch_timeseries(&self, item_id: i64) -> Result<TimeSeriesResponse, TransportError> {
        Ok(TimeSeriesResponse {
            data: self.history.get(&item_id).cloned().unwrap_or_default(),
            item_id: Some(item_id),
        })
    }
}

pub fn entry(timestamp: i64, avg_high_price: Option<i64>) -> TimeSeriesEntry {
    TimeSeriesEntry {
        timestamp,
        avg_high_price,
        avg_low_price: None,
        high_price_volume: None,
        low_price_volume: None,
    }
}

pub fn pet(id: i64, name: &str, activity: &str, drop_rate: &str) -> CatalogPet {
    CatalogPet {
        id,
        name: name.to_string(),
        activity: activity.to_string(),
        drop_rate: drop_rate.to_string(),
        release_date: "2015-01-01".to_string(),
    }
}

pub async fn memory_pool() -> DbPool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:").expect("valid url");
    database::init::connect_with(options, 1)
        .await
        .expect("in-memory database")
}

pub fn two_pets() -> Catalog<CatalogPet> {
    Catalog::from_entries([
        pet(1, "Baby Mole", "Giant Mole", "1/3,000"),
        pet(2, "Prince", "King Black Dragon", "1/3,000"),
    ])
}

pub fn whip_prices() -> FakePriceIndex {
    FakePriceIndex {
        mapping: vec![
            MappingEntry {
                id: 4151,
                name: "Abyssal whip".to_string(),
            },
            MappingEntry {
                id: 11802,
                name: "Armadyl godsword".to_string(),
            },
            MappingEntry {
                id: 314,
                name: "Feather".to_string(),
            },
        ],
        history: HashMap::from([
            (
                4151,
                vec![entry(100, None), entry(200, Some(5000)), entry(300, None)],
            ),
            (11802, vec![entry(100, None), entry(200, None)]),
            (314, vec![entry(50, Some(4)), entry(40, Some(3))]),
        ]),
    }
}

pub async fn state_with(pets: Catalog<CatalogPet>, prices: FakePriceIndex) -> AppState {
    let items = herebot::catalog::items::load(&prices)
        .await
        .expect("fake mapping loads");
    AppState::new(
        memory_pool().await,
        Catalogs { items, pets },
        Arc::new(prices),
    )
}
