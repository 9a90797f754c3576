use std::path::{Path, PathBuf};
use std::sync::Mutex;

use invcalc_inventory::GlobalStats;

use super::StatsStore;
use crate::error::StoreError;
use crate::fs::{read_json, write_json};

pub const STATS_FILE: &str = "globalStats.json";

/// Counter persisted as `{ "totalValue": .., "count": .. }`.
#[derive(Debug)]
pub struct JsonFileStatsStore {
    path: PathBuf,
    guard: Mutex<()>,
}

impl JsonFileStatsStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            guard: Mutex::new(()),
        }
    }

    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::open(dir.as_ref().join(STATS_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<GlobalStats, StoreError> {
        match read_json::<GlobalStats>(&self.path)? {
            Some(stats) => Ok(stats),
            None => {
                let stats = GlobalStats::default();
                write_json(&self.path, &stats)?;
                tracing::info!(path = %self.path.display(), "created stats file");
                Ok(stats)
            }
        }
    }
}

impl StatsStore for JsonFileStatsStore {
    fn get(&self) -> Result<GlobalStats, StoreError> {
        let _guard = self.guard.lock().map_err(|_| StoreError::Poisoned)?;
        self.load()
    }

    fn record(&self, inventory_value: f64) -> Result<GlobalStats, StoreError> {
        let _guard = self.guard.lock().map_err(|_| StoreError::Poisoned)?;
        let mut stats = self.load()?;
        stats.record(inventory_value)?;
        write_json(&self.path, &stats)?;
        tracing::debug!(total = stats.total_value, count = stats.count, "stats updated");
        Ok(stats)
    }
}
