//! Steam Community Market client
//!
//! Wraps the market's public JSON endpoints for one app: `/priceoverview`
//! for current pricing and `/search/render/` for listings, plus a cached
//! single-item lookup built on top of both.

use std::path::PathBuf;

use serde_json::Value;

use crate::cache::ItemCache;
use crate::currency::CurrencyCode;
use crate::error::{MarketError, Result};
use crate::models::{Item, PriceOverview};

/// Community market API root
pub const MARKET_BASE_URL: &str = "https://steamcommunity.com/market";

/// Conventional app to query when the caller has no preference (CS2)
pub const DEFAULT_APP_ID: u32 = 730;

/// Search result count requested when the caller has no preference
pub const DEFAULT_SEARCH_COUNT: u32 = 50;

/// Client for the community market endpoints of one app
pub struct MarketClient {
    pub(crate) client: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) app_id: u32,
    pub(crate) cache: ItemCache,
}

impl MarketClient {
    /// Creates a client for `app_id` with the item cache at its default path.
    pub fn new(app_id: u32) -> Result<Self> {
        Self::with_cache(app_id, ItemCache::default_path())
    }

    /// Creates a client for `app_id` with the item cache backed by `cache_file`.
    pub fn with_cache(app_id: u32, cache_file: PathBuf) -> Result<Self> {
        Ok(Self {
            client: reqwest::Client::new(),
            base_url: MARKET_BASE_URL.to_string(),
            app_id,
            cache: ItemCache::new(cache_file)?,
        })
    }

    /// Fetches the current price overview for one item.
    ///
    /// The API reports an unknown hash name by answering without a
    /// `lowest_price`; that comes back as `IncorrectHashName` carrying the
    /// raw response.
    pub async fn get_item_price_overview(
        &self,
        hash_name: &str,
        currency: CurrencyCode,
    ) -> Result<PriceOverview> {
        let response = self
            .get_json(
                "/priceoverview",
                &[
                    ("appid", self.app_id.to_string()),
                    ("market_hash_name", hash_name.to_string()),
                    ("currency", currency.code().to_string()),
                ],
            )
            .await?;

        if response.get("lowest_price").map_or(true, Value::is_null) {
            return Err(MarketError::IncorrectHashName {
                hash_name: hash_name.to_string(),
                response: Some(response),
            });
        }

        PriceOverview::from_response(&response, currency)
    }

    /// Searches the market and writes every returned item through to the
    /// cache.
    ///
    /// The returned list preserves the response's order. The first
    /// malformed entry aborts the whole batch, before anything is cached.
    pub async fn get_item_query(&mut self, query: &str, count: u32) -> Result<Vec<Item>> {
        let response = self
            .get_json(
                "/search/render/",
                &[
                    ("query", query.to_string()),
                    ("appid", self.app_id.to_string()),
                    ("start", "0".to_string()),
                    ("count", count.to_string()),
                    ("norender", "1".to_string()),
                ],
            )
            .await?;

        let results = response.get("results").and_then(Value::as_array).ok_or_else(|| {
            MarketError::Parse("search response has no `results` array".to_string())
        })?;

        let mut items = Vec::with_capacity(results.len());
        for entry in results {
            items.push(Item::from_search_result(entry)?);
        }

        for item in &items {
            self.cache.update(item)?;
        }

        log::info!("Search {:?} returned {} item(s)", query, items.len());
        Ok(items)
    }

    /// Looks up one item by hash name, preferring the cache.
    ///
    /// On a cache miss the item is recovered through a small search scanned
    /// for an exact hash-name match. With `with_price_overview` a fresh
    /// overview is fetched and attached even on a cache hit - cached price
    /// data is considered stale.
    pub async fn get_item(
        &mut self,
        hash_name: &str,
        currency: CurrencyCode,
        with_price_overview: bool,
    ) -> Result<Item> {
        let mut item = match self.cache.get(hash_name)? {
            Some(item) => {
                log::debug!("{}: served from cache", hash_name);
                item
            }
            None => {
                let items = self.get_item_query(hash_name, 3).await?;
                items
                    .into_iter()
                    .find(|item| item.hash_name == hash_name)
                    .ok_or_else(|| MarketError::IncorrectHashName {
                        hash_name: hash_name.to_string(),
                        response: None,
                    })?
            }
        };

        if with_price_overview {
            item.price_overview = Some(
                self.get_item_price_overview(&item.hash_name, currency)
                    .await?,
            );
        }

        Ok(item)
    }

    /// Issues one GET against the market API and decodes the JSON body.
    /// Any non-success status aborts the call immediately.
    async fn get_json(&self, path: &str, params: &[(&str, String)]) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header("User-Agent", "steam_market/0.1")
            .query(params)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(MarketError::HttpStatus(response.status()));
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
#[path = "market_tests.rs"]
mod tests;
