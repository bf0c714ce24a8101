//! Client for the OSRS wiki real-time price index.

pub mod format;
pub mod schema;

use crate::error::TransportError;
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use schema::{MappingEntry, TimeSeriesResponse};
use tracing::debug;

pub use format::format_gp;

/// The wiki asks API consumers to identify themselves.
pub const BOT_USER_AGENT: &str = "sol_herebot - experimental osrs discord bot";

/// Bucket size requested from `/timeseries`.
pub const TIMESTEP: &str = "5m";

/// Source of item mappings and price history.
#[async_trait]
pub trait PriceIndex: Send + Sync {
    /// Full item id → name snapshot.
    async fn fetch_mapping(&self) -> Result<Vec<MappingEntry>, TransportError>;

    /// Price history for one item at [`TIMESTEP`] granularity.
    async fn fetch_timeseries(&self, item_id: i64) -> Result<TimeSeriesResponse, TransportError>;
}

pub struct WikiPriceClient {
    client: Client,
    base_url: String,
}

impl WikiPriceClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, TransportError> {
        let base_url = base_url.into();
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(BOT_USER_AGENT));
        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|source| TransportError::Request {
                url: base_url.clone(),
                source,
            })?;
        Ok(Self { client, base_url })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: String,
        query: &[(&str, String)],
    ) -> Result<T, TransportError> {
        debug!(target = "prices.http", url = %url, ?query, "GET");
        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|source| TransportError::Request {
                url: url.clone(),
                source,
            })?;
        response
            .json::<T>()
            .await
            .map_err(|source| TransportError::Decode { url, source })
    }
}

#[async_trait]
impl PriceIndex for WikiPriceClient {
    async fn fetch_mapping(&self) -> Result<Vec<MappingEntry>, TransportError> {
        self.get_json(format!("{}/mapping", self.base_url), &[])
            .await
    }

    async fn fetch_timeseries(&self, item_id: i64) -> Result<TimeSeriesResponse, TransportError> {
        self.get_json(
            format!("{}/timeseries", self.base_url),
            &[("timestep", TIMESTEP.to_string()), ("id", item_id.to_string())],
        )
        .await
    }
}
