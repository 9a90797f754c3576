//! Catalogue storage boundary.
//!
//! The store is the only owner of the item list; handlers receive it as an
//! explicit dependency instead of reaching for a global file path.

pub mod database;
pub mod in_memory;
pub mod json_file;
pub mod r#trait;

pub use database::ItemDatabase;
pub use in_memory::InMemoryItemStore;
pub use json_file::JsonFileItemStore;
pub use r#trait::ItemStore;
