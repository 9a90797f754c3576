//! Inventory valuation domain.
//!
//! This crate contains the catalogue model and the text-to-value resolver,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod item;
pub mod matcher;
pub mod parser;
pub mod resolve;
pub mod stats;
pub mod suggest;

pub use item::{Item, ItemUpdate, NewItem};
pub use matcher::{MatchKind, find_item, find_item_with_kind};
pub use parser::{InventoryLine, parse_inventory, parse_line};
pub use resolve::{InventoryItem, InventoryResult, resolve_inventory, resolve_lines};
pub use stats::GlobalStats;
pub use suggest::{DEFAULT_SUGGESTION_LIMIT, suggest};
