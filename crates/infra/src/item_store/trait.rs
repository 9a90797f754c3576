use std::sync::Arc;

use invcalc_core::ItemId;
use invcalc_inventory::{
    InventoryResult, Item, ItemUpdate, MatchKind, NewItem, find_item_with_kind, resolve_inventory,
    suggest,
};

use crate::error::StoreError;

/// Ordered, persisted catalogue of items.
///
/// Implementations only provide the CRUD primitives; name lookup, inventory
/// resolution and suggestions are derived from a single `list()` snapshot.
pub trait ItemStore: Send + Sync {
    /// All items, in store order.
    fn list(&self) -> Result<Vec<Item>, StoreError>;

    /// Add an item. Names are unique case-insensitively; a duplicate is
    /// rejected with `DomainError::Conflict` and nothing is written.
    fn add(&self, item: NewItem) -> Result<Item, StoreError>;

    /// Replace name and value of the item with `id`.
    fn update(&self, id: ItemId, update: ItemUpdate) -> Result<Item, StoreError>;

    /// Remove the item whose name matches exactly (case-insensitive).
    fn remove_by_name(&self, name: &str) -> Result<Item, StoreError>;

    /// Exact-then-fuzzy lookup.
    fn find_by_name(&self, name: &str) -> Result<Option<(Item, MatchKind)>, StoreError> {
        let items = self.list()?;
        Ok(find_item_with_kind(name, &items).map(|(item, kind)| (item.clone(), kind)))
    }

    /// Price a pasted inventory against the current catalogue.
    fn resolve_inventory(&self, text: &str) -> Result<InventoryResult, StoreError> {
        let items = self.list()?;
        Ok(resolve_inventory(text, &items))
    }

    fn suggest(&self, query: &str, limit: usize) -> Result<Vec<Item>, StoreError> {
        let items = self.list()?;
        Ok(suggest(query, &items, limit).into_iter().cloned().collect())
    }
}

impl<S> ItemStore for Arc<S>
where
    S: ItemStore + ?Sized,
{
    fn list(&self) -> Result<Vec<Item>, StoreError> {
        (**self).list()
    }

    fn add(&self, item: NewItem) -> Result<Item, StoreError> {
        (**self).add(item)
    }

    fn update(&self, id: ItemId, update: ItemUpdate) -> Result<Item, StoreError> {
        (**self).update(id, update)
    }

    fn remove_by_name(&self, name: &str) -> Result<Item, StoreError> {
        (**self).remove_by_name(name)
    }

    fn find_by_name(&self, name: &str) -> Result<Option<(Item, MatchKind)>, StoreError> {
        (**self).find_by_name(name)
    }

    fn resolve_inventory(&self, text: &str) -> Result<InventoryResult, StoreError> {
        (**self).resolve_inventory(text)
    }

    fn suggest(&self, query: &str, limit: usize) -> Result<Vec<Item>, StoreError> {
        (**self).suggest(query, limit)
    }
}
