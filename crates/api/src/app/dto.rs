use serde::Deserialize;
use serde_json::Value;

use invcalc_core::ItemId;

// -------------------------
// Request DTOs
// -------------------------

/// `value` is kept raw so numeric strings (`"50"`) are accepted like numbers.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemRequest {
    pub name: Option<String>,
    pub value: Option<Value>,
    pub sell_location: Option<String>,
    pub sellable: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemRequest {
    pub id: Option<ItemId>,
    pub value: Option<Value>,
    pub sell_location: Option<String>,
    pub sellable: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRequest {
    pub inventory_text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordStatsRequest {
    pub inventory_value: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct SuggestQuery {
    pub q: Option<String>,
    pub limit: Option<usize>,
}

// -------------------------
// JSON value helpers
// -------------------------

/// Read a JSON number, or a string holding one.
pub fn number_from_json(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numbers_and_numeric_strings_are_accepted() {
        assert_eq!(number_from_json(&json!(50)), Some(50.0));
        assert_eq!(number_from_json(&json!(2.5)), Some(2.5));
        assert_eq!(number_from_json(&json!(" 75 ")), Some(75.0));
    }

    #[test]
    fn other_values_are_rejected() {
        assert_eq!(number_from_json(&json!("fifty")), None);
        assert_eq!(number_from_json(&json!(null)), None);
        assert_eq!(number_from_json(&json!(true)), None);
        assert_eq!(number_from_json(&json!("inf")), None);
    }

    #[test]
    fn create_request_uses_camel_case() {
        let req: CreateItemRequest = serde_json::from_value(json!({
            "name": "Gold Watch",
            "value": 400,
            "sellLocation": "Pawnshop",
        }))
        .unwrap();
        assert_eq!(req.sell_location.as_deref(), Some("Pawnshop"));
        assert_eq!(req.sellable, None);
    }
}
