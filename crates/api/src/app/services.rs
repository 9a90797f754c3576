use std::path::Path;
use std::sync::Arc;

use invcalc_infra::{
    InMemoryItemStore, InMemoryStatsStore, ItemStore, JsonFileItemStore, JsonFileStatsStore,
    StatsStore, StoreError,
};

/// Stores shared by every handler.
#[derive(Clone)]
pub struct AppServices {
    pub items: Arc<dyn ItemStore>,
    pub stats: Arc<dyn StatsStore>,
}

impl AppServices {
    pub fn new(items: Arc<dyn ItemStore>, stats: Arc<dyn StatsStore>) -> Self {
        Self { items, stats }
    }

    /// Flat-file stores under `dir` (`db.json`, `globalStats.json`).
    pub fn from_data_dir(dir: &Path) -> Self {
        Self::new(
            Arc::new(JsonFileItemStore::in_dir(dir)),
            Arc::new(JsonFileStatsStore::in_dir(dir)),
        )
    }

    /// In-memory stores seeded with the starter catalogue (dev/test).
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryItemStore::seeded()),
            Arc::new(InMemoryStatsStore::new()),
        )
    }

    /// Touch both stores so missing files are created and broken ones are
    /// reported before the server starts accepting requests.
    pub fn warm_up(&self) -> Result<(), StoreError> {
        let items = self.items.list()?;
        let stats = self.stats.get()?;
        tracing::info!(
            items = items.len(),
            submissions = stats.count,
            "stores ready"
        );
        Ok(())
    }
}
