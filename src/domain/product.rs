use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::de;
use crate::domain::types::{ManufacturerId, ProductId};

/// Catalog product row returned by the product list endpoint.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Product {
    #[serde(rename = "product_id")]
    pub id: ProductId,
    #[serde(rename = "product_name")]
    pub name: String,
    #[serde(default)]
    pub manufacturer_id: Option<ManufacturerId>,
    #[serde(deserialize_with = "de::number")]
    pub price: f64,
    /// Units left in stock.
    #[serde(default, rename = "remaining")]
    pub stock: i64,
    #[serde(default)]
    pub total_purchase: i64,
    #[serde(default)]
    pub status_id: Option<i64>,
    /// Stock status code such as `LOW_STOCK`.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default, rename = "img")]
    pub image: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Product {
    pub fn status_label(&self) -> String {
        format_status(self.status.as_deref().unwrap_or_default())
    }

    /// Bootstrap colour class for the status badge.
    pub fn status_tone(&self) -> &'static str {
        match self.status.as_deref().map(str::to_uppercase).as_deref() {
            Some("IN_STOCK") => "success",
            Some("LOW_STOCK") => "warning",
            Some("OUT_OF_STOCK" | "SOLD_OUT") => "danger",
            Some("ON_SALE") => "primary",
            Some("COMING_SOON") => "info",
            _ => "secondary",
        }
    }
}

/// Turns an upper snake-case status code such as `LOW_STOCK` into `Low Stock`.
pub fn format_status(status: &str) -> String {
    if status.is_empty() {
        return "Unknown".to_string();
    }
    status
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_strings_are_accepted_for_price() {
        let product: Product = serde_json::from_str(
            r#"{"product_id": 3, "product_name": "Lamp", "price": "19.90", "remaining": 4, "manufacturer_id": null}"#,
        )
        .unwrap();
        assert_eq!(product.id.get(), 3);
        assert!((product.price - 19.9).abs() < f64::EPSILON);
        assert_eq!(product.stock, 4);
        assert_eq!(product.manufacturer_id, None);
    }

    #[test]
    fn non_numeric_price_is_rejected() {
        let result = serde_json::from_str::<Product>(
            r#"{"product_id": 3, "product_name": "Lamp", "price": "cheap"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn status_badge_follows_status_code() {
        let mut product: Product = serde_json::from_str(
            r#"{"product_id": 1, "product_name": "Desk", "price": 120, "status": "low_stock"}"#,
        )
        .unwrap();
        assert_eq!(product.status_label(), "Low Stock");
        assert_eq!(product.status_tone(), "warning");

        product.status = None;
        assert_eq!(product.status_label(), "Unknown");
        assert_eq!(product.status_tone(), "secondary");
    }

    #[test]
    fn status_codes_are_humanized() {
        assert_eq!(format_status("OUT_OF_STOCK"), "Out Of Stock");
        assert_eq!(format_status("paid"), "Paid");
        assert_eq!(format_status(""), "Unknown");
    }
}
