//! Global submission counter storage.

pub mod in_memory;
pub mod json_file;

use std::sync::Arc;

use invcalc_inventory::GlobalStats;

use crate::error::StoreError;

pub use in_memory::InMemoryStatsStore;
pub use json_file::JsonFileStatsStore;

/// Running totals over every submitted inventory.
pub trait StatsStore: Send + Sync {
    fn get(&self) -> Result<GlobalStats, StoreError>;

    /// Add one submission worth `inventory_value` and return the new totals.
    fn record(&self, inventory_value: f64) -> Result<GlobalStats, StoreError>;
}

impl<S> StatsStore for Arc<S>
where
    S: StatsStore + ?Sized,
{
    fn get(&self) -> Result<GlobalStats, StoreError> {
        (**self).get()
    }

    fn record(&self, inventory_value: f64) -> Result<GlobalStats, StoreError> {
        (**self).record(inventory_value)
    }
}
