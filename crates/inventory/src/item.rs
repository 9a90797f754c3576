use serde::{Deserialize, Serialize};

use invcalc_core::{DomainError, DomainResult, ItemId};

/// A catalogued game item with a known sell value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Where the item can be sold (pawnshop, car parts shop, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sell_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sellable: Option<bool>,
}

impl Item {
    /// Items are sellable unless explicitly flagged otherwise.
    pub fn is_sellable(&self) -> bool {
        self.sellable != Some(false)
    }

    /// Case-insensitive name equality, ignoring surrounding whitespace.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.trim().to_lowercase() == name.trim().to_lowercase()
    }
}

/// Input for adding an item to the catalogue.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub value: f64,
    pub sell_location: Option<String>,
    pub sellable: bool,
}

impl NewItem {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
            sell_location: None,
            sellable: true,
        }
    }

    pub fn sell_location(mut self, location: impl Into<String>) -> Self {
        self.sell_location = Some(location.into());
        self
    }

    pub fn sellable(mut self, sellable: bool) -> Self {
        self.sellable = sellable;
        self
    }

    pub fn validate(&self) -> DomainResult<()> {
        validate_name(&self.name)?;
        validate_value(self.value)
    }

    /// Materialize the record under an already-allocated id.
    pub fn into_item(self, id: ItemId) -> Item {
        Item {
            id,
            name: self.name,
            value: self.value,
            category: None,
            sell_location: self.sell_location,
            sellable: Some(self.sellable),
        }
    }
}

/// Replacement of an existing item's name and value.
///
/// `None` for `sell_location` / `sellable` keeps the stored value.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemUpdate {
    pub name: String,
    pub value: f64,
    pub sell_location: Option<String>,
    pub sellable: Option<bool>,
}

impl ItemUpdate {
    pub fn validate(&self) -> DomainResult<()> {
        validate_name(&self.name)?;
        validate_value(self.value)
    }

    pub fn apply_to(self, item: &mut Item) {
        item.name = self.name;
        item.value = self.value;
        if self.sell_location.is_some() {
            item.sell_location = self.sell_location;
        }
        item.sellable = Some(self.sellable.or(item.sellable).unwrap_or(true));
    }
}

fn validate_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::validation("name cannot be empty"));
    }
    Ok(())
}

fn validate_value(value: f64) -> DomainResult<()> {
    if !value.is_finite() {
        return Err(DomainError::validation("value must be a number"));
    }
    if value < 0.0 {
        return Err(DomainError::validation("value cannot be negative"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(sellable: Option<bool>) -> Item {
        Item {
            id: ItemId::new(1),
            name: "Red Keycard".to_string(),
            value: 0.0,
            category: None,
            sell_location: None,
            sellable,
        }
    }

    #[test]
    fn missing_sellable_flag_means_sellable() {
        assert!(item(None).is_sellable());
        assert!(item(Some(true)).is_sellable());
        assert!(!item(Some(false)).is_sellable());
    }

    #[test]
    fn has_name_ignores_case_and_padding() {
        assert!(item(None).has_name("  red KEYCARD "));
        assert!(!item(None).has_name("red"));
    }

    #[test]
    fn new_item_rejects_blank_name_and_bad_values() {
        assert!(NewItem::new("  ", 1.0).validate().is_err());
        assert!(NewItem::new("Cash", -1.0).validate().is_err());
        assert!(NewItem::new("Cash", f64::NAN).validate().is_err());
        assert!(NewItem::new("Cash", 0.0).validate().is_ok());
    }

    #[test]
    fn update_keeps_optional_fields_when_absent() {
        let mut stored = item(Some(false));
        stored.sell_location = Some("Bank".to_string());

        ItemUpdate {
            name: "Blue Keycard".to_string(),
            value: 10.0,
            sell_location: None,
            sellable: None,
        }
        .apply_to(&mut stored);

        assert_eq!(stored.name, "Blue Keycard");
        assert_eq!(stored.value, 10.0);
        assert_eq!(stored.sell_location.as_deref(), Some("Bank"));
        assert_eq!(stored.sellable, Some(false));
    }

    #[test]
    fn update_defaults_sellable_to_true() {
        let mut stored = item(None);
        ItemUpdate {
            name: "Red Keycard".to_string(),
            value: 5.0,
            sell_location: Some("Pawnshop".to_string()),
            sellable: None,
        }
        .apply_to(&mut stored);

        assert_eq!(stored.sellable, Some(true));
        assert_eq!(stored.sell_location.as_deref(), Some("Pawnshop"));
    }

    #[test]
    fn serializes_with_camel_case_and_omits_absent_fields() {
        let json = serde_json::to_value(item(None)).unwrap();
        assert_eq!(json["name"], "Red Keycard");
        assert!(json.get("sellLocation").is_none());
        assert!(json.get("sellable").is_none());

        let mut with_location = item(Some(true));
        with_location.sell_location = Some("Bank".to_string());
        let json = serde_json::to_value(with_location).unwrap();
        assert_eq!(json["sellLocation"], "Bank");
        assert_eq!(json["sellable"], true);
    }

    #[test]
    fn category_from_disk_is_written_back() {
        let stored: Item = serde_json::from_value(serde_json::json!({
            "id": 3,
            "name": "Lock Picking Tool",
            "value": 75,
            "category": "Tools"
        }))
        .unwrap();
        assert_eq!(stored.category.as_deref(), Some("Tools"));
        assert_eq!(serde_json::to_value(&stored).unwrap()["category"], "Tools");
    }
}
