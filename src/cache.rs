//! Persistent item cache
//!
//! One JSON object file mapping market hash name to the last seen item
//! snapshot. The file is loaded lazily on first access and rewritten whole
//! on every update; the in-memory map stays authoritative afterwards.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::error::Result;
use crate::models::Item;

/// File-backed store of previously seen items, keyed by hash name
pub struct ItemCache {
    file: PathBuf,
    /// None until the first `get` or `update` reads the file
    entries: Option<HashMap<String, Item>>,
}

impl ItemCache {
    /// Opens a cache backed by `file`, creating parent directories and an
    /// empty JSON object when nothing exists there yet. Idempotent.
    pub fn new(file: PathBuf) -> Result<Self> {
        if !file.exists() {
            if let Some(parent) = file.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&file, "{}")?;
            log::info!("Created cache file: {}", file.display());
        }
        Ok(Self {
            file,
            entries: None,
        })
    }

    /// Default cache location: `<user cache dir>/steam_market/items.json`
    pub fn default_path() -> PathBuf {
        dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("steam_market")
            .join("items.json")
    }

    /// Inserts or overwrites the entry for `item.hash_name`, then rewrites
    /// the whole backing file pretty-printed.
    pub fn update(&mut self, item: &Item) -> Result<()> {
        let entries = self.load()?;
        entries.insert(item.hash_name.clone(), item.clone());
        let serialized = serde_json::to_string_pretty(entries)?;
        fs::write(&self.file, serialized)?;
        log::debug!("{}: cache entry updated", item.hash_name);
        Ok(())
    }

    /// Returns the cached item for `hash_name`, or `None` on a miss.
    pub fn get(&mut self, hash_name: &str) -> Result<Option<Item>> {
        Ok(self.load()?.get(hash_name).cloned())
    }

    /// Number of cached items
    pub fn len(&mut self) -> Result<usize> {
        Ok(self.load()?.len())
    }

    /// Check if empty
    pub fn is_empty(&mut self) -> Result<bool> {
        Ok(self.load()?.is_empty())
    }

    /// Reads the backing file on first use. Empty content counts as an
    /// empty object; malformed JSON surfaces to the caller.
    fn load(&mut self) -> Result<&mut HashMap<String, Item>> {
        if self.entries.is_none() {
            let raw = fs::read_to_string(&self.file)?;
            let parsed: HashMap<String, Item> = if raw.is_empty() {
                HashMap::new()
            } else {
                serde_json::from_str(&raw)?
            };
            log::debug!(
                "Loaded {} cached item(s) from {}",
                parsed.len(),
                self.file.display()
            );
            self.entries = Some(parsed);
        }
        Ok(self.entries.get_or_insert_with(HashMap::new))
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
