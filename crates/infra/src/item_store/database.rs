use serde::{Deserialize, Serialize};

use invcalc_core::{DomainError, DomainResult, ItemId};
use invcalc_inventory::{Item, ItemUpdate, NewItem};

use crate::seed::sample_items;

/// The persisted catalogue document: items in insertion order plus the
/// last identifier handed out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDatabase {
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub last_id: ItemId,
}

impl ItemDatabase {
    pub fn new(items: Vec<Item>) -> Self {
        let last_id = items.iter().map(|item| item.id).max().unwrap_or_default();
        Self { items, last_id }
    }

    pub fn seeded() -> Self {
        Self::new(sample_items())
    }

    pub fn insert(&mut self, new_item: NewItem) -> DomainResult<Item> {
        new_item.validate()?;

        let name = new_item.name.trim().to_string();
        if self.items.iter().any(|item| item.has_name(&name)) {
            return Err(DomainError::conflict(format!("item '{name}' already exists")));
        }

        let id = self.next_id()?;
        let item = NewItem { name, ..new_item }.into_item(id);
        self.items.push(item.clone());
        self.last_id = id;
        Ok(item)
    }

    pub fn update(&mut self, id: ItemId, update: ItemUpdate) -> DomainResult<Item> {
        update.validate()?;

        let name = update.name.trim().to_string();
        if self
            .items
            .iter()
            .any(|item| item.id != id && item.has_name(&name))
        {
            return Err(DomainError::conflict(format!("item '{name}' already exists")));
        }

        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(DomainError::not_found)?;
        ItemUpdate { name, ..update }.apply_to(item);
        Ok(item.clone())
    }

    pub fn remove_by_name(&mut self, name: &str) -> DomainResult<Item> {
        let idx = self
            .items
            .iter()
            .position(|item| item.has_name(name))
            .ok_or_else(DomainError::not_found)?;
        Ok(self.items.remove(idx))
    }

    /// Next identifier, never below any id already present in the document.
    fn next_id(&self) -> DomainResult<ItemId> {
        let highest = self.items.iter().map(|item| item.id).max().unwrap_or_default();
        self.last_id.max(highest).next()
    }
}
