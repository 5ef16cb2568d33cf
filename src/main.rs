//! Steam Market - Community Market price lookup
//!
//! Looks up single items or searches listings on the Steam Community Market,
//! keeping every fetched item in a local file-backed cache.

use std::path::PathBuf;

use clap::Parser;
use steam_market::{CurrencyCode, ItemCache, MarketClient, DEFAULT_APP_ID, DEFAULT_SEARCH_COUNT};

/// Steam market lookup - fetches item listings and current prices
#[derive(Parser, Debug)]
#[command(name = "steam_market")]
#[command(version, about, long_about = None)]
struct Args {
    /// Market hash name of the item to look up
    hash_name: Option<String>,

    /// Search the market for listings instead of looking up one item
    #[arg(short, long)]
    query: Option<String>,

    /// Steam app id to query
    #[arg(long, default_value_t = DEFAULT_APP_ID)]
    app_id: u32,

    /// Wallet currency for price overviews
    #[arg(short, long, default_value = "USD")]
    currency: CurrencyCode,

    /// Number of results to request when searching
    #[arg(long, default_value_t = DEFAULT_SEARCH_COUNT)]
    count: u32,

    /// Path to the item cache file (default: platform cache directory)
    #[arg(long)]
    cache_file: Option<PathBuf>,

    /// Skip fetching the current price overview for the item
    #[arg(long, default_value_t = false)]
    no_price: bool,
}

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let cache_file = args.cache_file.clone().unwrap_or_else(ItemCache::default_path);

    let mut client = match MarketClient::with_cache(args.app_id, cache_file) {
        Ok(client) => client,
        Err(e) => {
            log::error!("Failed to set up market client: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(query) = &args.query {
        run_search(&mut client, query, args.count).await;
    } else if let Some(hash_name) = &args.hash_name {
        run_lookup(&mut client, hash_name, args.currency, !args.no_price).await;
    } else {
        log::error!("Either an item hash name or --query is required");
        std::process::exit(1);
    }
}

/// Search the market and print every returned listing
async fn run_search(client: &mut MarketClient, query: &str, count: u32) {
    let items = match client.get_item_query(query, count).await {
        Ok(items) => items,
        Err(e) => {
            log::error!("Search failed: {}", e);
            std::process::exit(1);
        }
    };

    if items.is_empty() {
        println!("No items found for {:?}", query);
        return;
    }

    for item in &items {
        println!(
            "{} - {} ({} listed)",
            item.hash_name, item.sell_price_text, item.sell_listings
        );
    }
}

/// Look up one item and print it, optionally with a fresh price overview
async fn run_lookup(
    client: &mut MarketClient,
    hash_name: &str,
    currency: CurrencyCode,
    with_price: bool,
) {
    let item = match client.get_item(hash_name, currency, with_price).await {
        Ok(item) => item,
        Err(e) => {
            log::error!("Lookup failed: {}", e);
            std::process::exit(1);
        }
    };

    println!("{} ({})", item.hash_name, item.app_name);
    println!(
        "  listed:  {} at {}",
        item.sell_listings, item.sell_price_text
    );
    if let Some(overview) = &item.price_overview {
        println!("  lowest:  {:.2} {}", overview.lowest_price, overview.currency);
        println!("  median:  {:.2} {}", overview.median_price, overview.currency);
        println!("  volume:  {} sold in the last 24h", overview.volume);
    }
}
