use std::sync::RwLock;

use invcalc_inventory::GlobalStats;

use super::StatsStore;
use crate::error::StoreError;

#[derive(Debug, Default)]
pub struct InMemoryStatsStore {
    stats: RwLock<GlobalStats>,
}

impl InMemoryStatsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StatsStore for InMemoryStatsStore {
    fn get(&self) -> Result<GlobalStats, StoreError> {
        let stats = self.stats.read().map_err(|_| StoreError::Poisoned)?;
        Ok(*stats)
    }

    fn record(&self, inventory_value: f64) -> Result<GlobalStats, StoreError> {
        let mut stats = self.stats.write().map_err(|_| StoreError::Poisoned)?;
        stats.record(inventory_value)?;
        Ok(*stats)
    }
}
