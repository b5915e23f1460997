//! API models for request and response payloads

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// A product row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub quantity: i32,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body accepted by create and update
///
/// Every field is optional on the wire so that a missing field is reported as
/// such instead of as a deserialization failure. Values of the wrong type still
/// fail to deserialize.
#[derive(Debug, Deserialize)]
pub struct ProductPayload {
    pub name: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<i32>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    pub description: Option<String>,
}

/// The five mutable product fields, validated
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub quantity: i32,
    pub price: Decimal,
    pub description: Option<String>,
}

impl TryFrom<ProductPayload> for NewProduct {
    type Error = ApiError;

    fn try_from(payload: ProductPayload) -> Result<Self, Self::Error> {
        let ProductPayload {
            name,
            category,
            quantity,
            price,
            description,
        } = payload;

        let name = name.filter(|s| !s.is_empty());
        let category = category.filter(|s| !s.is_empty());

        match (name, category, quantity, price) {
            (Some(name), Some(category), Some(quantity), Some(price)) => Ok(NewProduct {
                name,
                category,
                quantity,
                price,
                description: description.filter(|s| !s.is_empty()),
            }),
            _ => Err(ApiError::missing_fields()),
        }
    }
}

/// Aggregates over the whole table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryStats {
    pub total_products: i64,
    pub total_items: i64,
    pub categories: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_value: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> ProductPayload {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_complete_payload_validates() {
        let product = NewProduct::try_from(payload(json!({
            "name": "Desk Lamp",
            "category": "Office Supplies",
            "quantity": 10,
            "price": 15.50
        })))
        .unwrap();

        assert_eq!(product.name, "Desk Lamp");
        assert_eq!(product.category, "Office Supplies");
        assert_eq!(product.quantity, 10);
        assert_eq!(product.price, Decimal::new(1550, 2));
        assert_eq!(product.description, None);
    }

    #[test]
    fn test_empty_payload_is_missing_fields() {
        let err = NewProduct::try_from(payload(json!({}))).unwrap_err();
        assert_eq!(err.to_string(), "Missing required fields");
    }

    #[test]
    fn test_empty_name_counts_as_missing() {
        let err = NewProduct::try_from(payload(json!({
            "name": "",
            "category": "Food",
            "quantity": 1,
            "price": 2
        })))
        .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn test_zero_quantity_and_negative_values_are_accepted() {
        let product = NewProduct::try_from(payload(json!({
            "name": "Returns bin",
            "category": "Misc",
            "quantity": -3,
            "price": 0
        })))
        .unwrap();
        assert_eq!(product.quantity, -3);
        assert_eq!(product.price, Decimal::ZERO);
    }

    #[test]
    fn test_empty_description_is_stored_as_null() {
        let product = NewProduct::try_from(payload(json!({
            "name": "Stapler",
            "category": "Office Supplies",
            "quantity": 4,
            "price": 6.25,
            "description": ""
        })))
        .unwrap();
        assert_eq!(product.description, None);
    }

    #[test]
    fn test_non_numeric_quantity_is_rejected() {
        let result = serde_json::from_value::<ProductPayload>(json!({
            "name": "Stapler",
            "category": "Office Supplies",
            "quantity": "four",
            "price": 6.25
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_stats_serialize_as_numbers() {
        let stats = InventoryStats {
            total_products: 0,
            total_items: 0,
            categories: 0,
            total_value: Decimal::ZERO,
        };
        let value = serde_json::to_value(&stats).unwrap();
        assert_eq!(value["total_products"], json!(0));
        assert_eq!(value["total_value"].as_f64(), Some(0.0));
    }
}
