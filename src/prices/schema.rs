//! Response shapes of the price index endpoints, decoded once at the HTTP boundary.

use serde::Deserialize;

/// One row of `/mapping`. The endpoint returns more fields (examine text, buy limits,
/// alch values); only the ones the catalog needs are kept.
#[derive(Debug, Clone, Deserialize)]
pub struct MappingEntry {
    pub id: i64,
    pub name: String,
}

/// Body of `/timeseries`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesResponse {
    pub data: Vec<TimeSeriesEntry>,
    #[serde(default)]
    pub item_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesEntry {
    /// Unix seconds at the start of the bucket.
    pub timestamp: i64,
    #[serde(default)]
    pub avg_high_price: Option<i64>,
    #[serde(default)]
    pub avg_low_price: Option<i64>,
    #[serde(default)]
    pub high_price_volume: Option<i64>,
    #[serde(default)]
    pub low_price_volume: Option<i64>,
}

/// Average high price of the newest bucket that has one.
pub fn latest_high_price(entries: &[TimeSeriesEntry]) -> Option<&TimeSeriesEntry> {
    let mut newest_first: Vec<&TimeSeriesEntry> = entries.iter().collect();
    newest_first.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    newest_first
        .into_iter()
        .find(|entry| entry.avg_high_price.is_some())
}
