//! Market data models
//!
//! Snapshot types built from raw endpoint payloads. Constructors validate
//! as they extract: any missing or mistyped field comes back as a single
//! `MarketError::Parse` naming the offending field.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::currency::CurrencyCode;
use crate::error::{MarketError, Result};
use crate::price::parse_price;

/// Image CDN prefix; the raw `icon_url` fragment is appended to it
const ICON_URL_BASE: &str = "https://community.fastly.steamstatic.com/economy/image";

/// Current market pricing for one item under one currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceOverview {
    pub currency: CurrencyCode,
    pub lowest_price: f64,
    pub volume: u64,
    pub median_price: f64,
    /// When this snapshot was built. Set locally, never taken from the API.
    pub created_at: DateTime<Utc>,
}

impl PriceOverview {
    /// Builds a snapshot from a raw `/priceoverview` response body.
    ///
    /// `lowest_price` must be present as text (the client rejects payloads
    /// without it before calling here). `volume` defaults to 0 when absent;
    /// `median_price` falls back to the lowest-price text when absent.
    pub fn from_response(data: &Value, currency: CurrencyCode) -> Result<Self> {
        let lowest_text = str_field(data, "lowest_price")?;
        let median_text = match data.get("median_price") {
            None => lowest_text,
            Some(value) if value.is_null() => "",
            Some(value) => value.as_str().ok_or_else(|| {
                MarketError::Parse("field `median_price` is not a string".to_string())
            })?,
        };

        Ok(PriceOverview {
            currency,
            lowest_price: parse_price(lowest_text),
            volume: parse_volume(data.get("volume"))?,
            median_price: parse_price(median_text),
            created_at: Utc::now(),
        })
    }
}

/// One marketplace listing as returned by the search endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Identity key. Non-empty; the cache stores one entry per hash name.
    pub hash_name: String,
    pub sell_listings: u64,
    /// Lowest listed price in integer minor units
    pub sell_price: u64,
    pub sell_price_text: String,
    pub app_name: String,
    pub app_id: u32,
    pub icon_url: String,
    /// Attached by `MarketClient::get_item`; never refreshed from the cache
    pub price_overview: Option<PriceOverview>,
}

impl Item {
    /// Builds an item from one entry of the search endpoint's `results`.
    pub fn from_search_result(data: &Value) -> Result<Self> {
        let hash_name = str_field(data, "hash_name")?;
        if hash_name.is_empty() {
            return Err(MarketError::Parse("field `hash_name` is empty".to_string()));
        }

        let asset = data.get("asset_description").ok_or_else(|| {
            MarketError::Parse("missing field `asset_description`".to_string())
        })?;
        let app_id = uint_field(asset, "appid")?;
        let app_id = u32::try_from(app_id).map_err(|_| {
            MarketError::Parse(format!("field `appid` out of range: {}", app_id))
        })?;

        Ok(Item {
            hash_name: hash_name.to_string(),
            sell_listings: uint_field(data, "sell_listings")?,
            sell_price: uint_field(data, "sell_price")?,
            sell_price_text: str_field(data, "sell_price_text")?.to_string(),
            app_name: str_field(data, "app_name")?.to_string(),
            app_id,
            icon_url: format!("{}/{}", ICON_URL_BASE, str_field(asset, "icon_url")?),
            price_overview: None,
        })
    }
}

fn str_field<'a>(data: &'a Value, field: &str) -> Result<&'a str> {
    data.get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| MarketError::Parse(format!("missing or non-string field `{}`", field)))
}

fn uint_field(data: &Value, field: &str) -> Result<u64> {
    data.get(field)
        .and_then(Value::as_u64)
        .ok_or_else(|| MarketError::Parse(format!("missing or non-integer field `{}`", field)))
}

/// Trade volume comes back as a bare integer or as human-formatted text
/// ("1,405"). Text may hold only digits and `,`/`.` separators; anything
/// else is malformed. Absent or null means no recorded volume.
fn parse_volume(value: Option<&Value>) -> Result<u64> {
    let value = match value {
        None => return Ok(0),
        Some(value) => value,
    };
    if value.is_null() {
        return Ok(0);
    }
    if let Some(count) = value.as_u64() {
        return Ok(count);
    }
    if let Some(text) = value.as_str() {
        if !text.chars().all(|c| c.is_ascii_digit() || matches!(c, ',' | '.')) {
            return Err(MarketError::Parse(format!(
                "field `volume` is not numeric: {:?}",
                text
            )));
        }
        let digits: String = text.chars().filter(char::is_ascii_digit).collect();
        return digits
            .parse()
            .map_err(|_| MarketError::Parse(format!("field `volume` is not numeric: {:?}", text)));
    }
    Err(MarketError::Parse(
        "field `volume` is not a non-negative integer".to_string(),
    ))
}

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;
