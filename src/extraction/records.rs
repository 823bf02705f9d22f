//! Product record type and normalization

use serde::{Deserialize, Serialize};

/// Sentinel stored in any field the model could not determine.
///
/// Fields are backfilled with this value, never omitted or null.
pub const MISSING_FIELD: &str = "-";

/// One structured product record extracted from a listing page.
///
/// Exactly three fields, always present. Records are not deduplicated
/// across pages: two distinct markup fragments describing the same item
/// produce two records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Product name/title
    pub name: String,
    /// Price as displayed, currency text included
    pub price: String,
    /// Free-form description (shipping, origin, condition, ...)
    pub description: String,
}

impl ProductRecord {
    /// Build a record from one element of the model's JSON array,
    /// normalizing missing, null, non-string, and empty fields to the
    /// sentinel.
    pub fn from_value(value: &serde_json::Value) -> Self {
        let field = |key: &str| {
            value
                .get(key)
                .and_then(serde_json::Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .unwrap_or(MISSING_FIELD)
                .to_string()
        };

        Self {
            name: field("name"),
            price: field("price"),
            description: field("description"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_complete_record() {
        let record = ProductRecord::from_value(&json!({
            "name": "Nike Air Max 90",
            "price": "IDR9,247,938.75",
            "description": "from United Kingdom"
        }));
        assert_eq!(record.name, "Nike Air Max 90");
        assert_eq!(record.price, "IDR9,247,938.75");
        assert_eq!(record.description, "from United Kingdom");
    }

    #[test]
    fn test_missing_field_backfilled() {
        let record = ProductRecord::from_value(&json!({ "name": "Shoe" }));
        assert_eq!(record.price, MISSING_FIELD);
        assert_eq!(record.description, MISSING_FIELD);
    }

    #[test]
    fn test_null_and_empty_normalize_to_sentinel() {
        let record = ProductRecord::from_value(&json!({
            "name": "",
            "price": null,
            "description": "   "
        }));
        assert_eq!(record.name, MISSING_FIELD);
        assert_eq!(record.price, MISSING_FIELD);
        assert_eq!(record.description, MISSING_FIELD);
    }

    #[test]
    fn test_non_string_values_normalize_to_sentinel() {
        let record = ProductRecord::from_value(&json!({
            "name": "Shoe",
            "price": 1000,
            "description": ["from", "Japan"]
        }));
        assert_eq!(record.price, MISSING_FIELD);
        assert_eq!(record.description, MISSING_FIELD);
    }

    #[test]
    fn test_serialization_shape() {
        let record = ProductRecord {
            name: "Shoe".to_string(),
            price: "-".to_string(),
            description: "from Japan".to_string(),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Shoe","price":"-","description":"from Japan"}"#
        );
    }
}
