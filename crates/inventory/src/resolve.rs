//! Turns parsed inventory lines into priced rows and a sellable total.

use serde::{Deserialize, Serialize};

use crate::item::Item;
use crate::matcher::find_item;
use crate::parser::{InventoryLine, parse_inventory};

/// One resolved inventory row.
///
/// Rows that matched nothing carry only `name` and `quantity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub name: String,
    pub quantity: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sell_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sellable: Option<bool>,
}

impl InventoryItem {
    pub fn unrecognized(line: InventoryLine) -> Self {
        Self {
            name: line.name,
            quantity: line.quantity,
            value: None,
            total_value: None,
            sell_location: None,
            sellable: None,
        }
    }

    /// Price `quantity` units of a catalogue item. The row takes the
    /// catalogue's spelling of the name.
    pub fn matched(item: &Item, quantity: i64) -> Self {
        Self {
            name: item.name.clone(),
            quantity,
            value: Some(item.value),
            total_value: Some(item.value * quantity as f64),
            sell_location: item.sell_location.clone(),
            sellable: item.sellable,
        }
    }

    pub fn is_recognized(&self) -> bool {
        self.value.is_some()
    }

    /// Amount this row adds to the inventory total.
    pub fn contribution(&self) -> f64 {
        if self.sellable == Some(false) {
            return 0.0;
        }
        self.total_value.unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryResult {
    pub items: Vec<InventoryItem>,
    pub total_value: f64,
}

/// Parse `text` and price every readable line against `items`.
pub fn resolve_inventory(text: &str, items: &[Item]) -> InventoryResult {
    resolve_lines(parse_inventory(text), items)
}

pub fn resolve_lines(lines: impl IntoIterator<Item = InventoryLine>, items: &[Item]) -> InventoryResult {
    let mut result = InventoryResult::default();

    for line in lines {
        let row = match find_item(&line.name, items) {
            Some(item) => InventoryItem::matched(item, line.quantity),
            None => InventoryItem::unrecognized(line),
        };
        result.total_value += row.contribution();
        result.items.push(row);
    }

    result
}
