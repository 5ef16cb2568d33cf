//! Steam Market - Community Market API Client
//!
//! This library fetches item listings and price overviews from the Steam
//! Community Market and keeps a local file-backed cache of known items.

pub mod cache;
pub mod currency;
pub mod error;
pub mod market;
pub mod models;
pub mod price;

pub use cache::ItemCache;
pub use currency::CurrencyCode;
pub use error::{MarketError, Result};
pub use market::{MarketClient, DEFAULT_APP_ID, DEFAULT_SEARCH_COUNT, MARKET_BASE_URL};
pub use models::{Item, PriceOverview};
pub use price::parse_price;
