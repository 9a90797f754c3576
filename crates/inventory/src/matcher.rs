//! Name matching against the catalogue.
//!
//! Exact (case-insensitive, trimmed) equality wins; otherwise the first item
//! in catalogue order whose name contains the query, or is contained in it,
//! is taken. There is no similarity ranking, so a short catalogue name can
//! capture a longer query.

use serde::{Deserialize, Serialize};

use crate::item::Item;

/// How a lookup was satisfied.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    Exact,
    Partial,
}

impl MatchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchKind::Exact => "exact",
            MatchKind::Partial => "partial",
        }
    }
}

/// Resolve `name` against `items`, exact match first, then substring containment.
pub fn find_item<'a>(name: &str, items: &'a [Item]) -> Option<&'a Item> {
    find_item_with_kind(name, items).map(|(item, _)| item)
}

/// Same as [`find_item`], also reporting whether the match was exact.
pub fn find_item_with_kind<'a>(name: &str, items: &'a [Item]) -> Option<(&'a Item, MatchKind)> {
    let query = name.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }

    if let Some(item) = items.iter().find(|item| item.name.trim().to_lowercase() == query) {
        return Some((item, MatchKind::Exact));
    }

    items
        .iter()
        .find(|item| {
            let stored = item.name.to_lowercase();
            stored.contains(&query) || (!stored.is_empty() && query.contains(&stored))
        })
        .map(|item| (item, MatchKind::Partial))
}
