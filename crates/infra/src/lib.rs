//! Infrastructure layer: flat-file persistence for the catalogue and stats.

pub mod error;
pub mod item_store;
pub mod seed;
pub mod stats_store;

mod fs;

pub use error::StoreError;
pub use item_store::{InMemoryItemStore, ItemDatabase, ItemStore, JsonFileItemStore};
pub use stats_store::{InMemoryStatsStore, JsonFileStatsStore, StatsStore};
