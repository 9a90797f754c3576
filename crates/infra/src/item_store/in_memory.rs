use std::sync::RwLock;

use invcalc_core::{DomainResult, ItemId};
use invcalc_inventory::{Item, ItemUpdate, NewItem};

use super::database::ItemDatabase;
use super::r#trait::ItemStore;
use crate::error::StoreError;

/// In-memory catalogue for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryItemStore {
    db: RwLock<ItemDatabase>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            db: RwLock::new(ItemDatabase::new(items)),
        }
    }

    pub fn seeded() -> Self {
        Self {
            db: RwLock::new(ItemDatabase::seeded()),
        }
    }

    fn mutate<T>(&self, f: impl FnOnce(&mut ItemDatabase) -> DomainResult<T>) -> Result<T, StoreError> {
        let mut db = self.db.write().map_err(|_| StoreError::Poisoned)?;
        Ok(f(&mut *db)?)
    }
}

impl ItemStore for InMemoryItemStore {
    fn list(&self) -> Result<Vec<Item>, StoreError> {
        let db = self.db.read().map_err(|_| StoreError::Poisoned)?;
        Ok(db.items.clone())
    }

    fn add(&self, item: NewItem) -> Result<Item, StoreError> {
        self.mutate(|db| db.insert(item))
    }

    fn update(&self, id: ItemId, update: ItemUpdate) -> Result<Item, StoreError> {
        self.mutate(|db| db.update(id, update))
    }

    fn remove_by_name(&self, name: &str) -> Result<Item, StoreError> {
        self.mutate(|db| db.remove_by_name(name))
    }
}
