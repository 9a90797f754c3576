use std::path::{Path, PathBuf};
use std::sync::Mutex;

use invcalc_core::{DomainResult, ItemId};
use invcalc_inventory::{Item, ItemUpdate, NewItem};

use super::database::ItemDatabase;
use super::r#trait::ItemStore;
use crate::error::StoreError;
use crate::fs::{read_json, write_json};

pub const ITEM_DB_FILE: &str = "db.json";

/// Catalogue kept in a single pretty-printed JSON document.
///
/// Every call reads the whole file; writes rewrite it completely. The mutex
/// serializes read-modify-write cycles within this process only.
#[derive(Debug)]
pub struct JsonFileItemStore {
    path: PathBuf,
    guard: Mutex<()>,
}

impl JsonFileItemStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            guard: Mutex::new(()),
        }
    }

    /// Store backed by `db.json` inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::open(dir.as_ref().join(ITEM_DB_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the document, writing the starter catalogue if the file is absent.
    ///
    /// A file that exists but cannot be read or decoded is an error; it is
    /// never replaced.
    fn load(&self) -> Result<ItemDatabase, StoreError> {
        match read_json::<ItemDatabase>(&self.path) {
            Ok(Some(db)) => Ok(db),
            Ok(None) => {
                let db = ItemDatabase::seeded();
                write_json(&self.path, &db)?;
                tracing::info!(
                    path = %self.path.display(),
                    items = db.items.len(),
                    "seeded item database"
                );
                Ok(db)
            }
            Err(e) => {
                tracing::error!(path = %self.path.display(), "failed to load item database: {e}");
                Err(e)
            }
        }
    }

    fn mutate<T>(&self, f: impl FnOnce(&mut ItemDatabase) -> DomainResult<T>) -> Result<T, StoreError> {
        let _guard = self.guard.lock().map_err(|_| StoreError::Poisoned)?;
        let mut db = self.load()?;
        let out = f(&mut db)?;
        write_json(&self.path, &db)?;
        Ok(out)
    }
}

impl ItemStore for JsonFileItemStore {
    fn list(&self) -> Result<Vec<Item>, StoreError> {
        let _guard = self.guard.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(self.load()?.items)
    }

    fn add(&self, item: NewItem) -> Result<Item, StoreError> {
        let added = self.mutate(|db| db.insert(item))?;
        tracing::info!(id = %added.id, name = %added.name, "item added");
        Ok(added)
    }

    fn update(&self, id: ItemId, update: ItemUpdate) -> Result<Item, StoreError> {
        let updated = self.mutate(|db| db.update(id, update))?;
        tracing::info!(id = %updated.id, name = %updated.name, "item updated");
        Ok(updated)
    }

    fn remove_by_name(&self, name: &str) -> Result<Item, StoreError> {
        let removed = self.mutate(|db| db.remove_by_name(name))?;
        tracing::info!(id = %removed.id, name = %removed.name, "item removed");
        Ok(removed)
    }
}
