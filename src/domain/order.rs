use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::de;
use crate::domain::types::{OrderId, PaymentStatus, ProductId};

/// Order row as returned by the order list endpoint.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Order {
    #[serde(rename = "order_id")]
    pub id: OrderId,
    #[serde(deserialize_with = "de::number")]
    pub total: f64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, rename = "userPhoneNumber")]
    pub customer_phone: Option<String>,
    #[serde(default, rename = "userFullName")]
    pub customer_name: Option<String>,
    #[serde(rename = "paymentStatus")]
    pub payment_status: PaymentStatus,
    #[serde(default, rename = "shippingAddress")]
    pub shipping_address: Option<String>,
}

/// Product snapshot embedded in an order line.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct OrderProduct {
    #[serde(default, rename = "product_id")]
    pub id: Option<ProductId>,
    #[serde(rename = "product_name")]
    pub name: String,
    #[serde(default, rename = "img")]
    pub image: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct OrderLine {
    pub quantity: i64,
    #[serde(deserialize_with = "de::number")]
    pub total: f64,
    #[serde(rename = "Product")]
    pub product: OrderProduct,
}

/// Full order with its lines, used by the order details page.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct OrderDetails {
    #[serde(flatten)]
    pub order: Order,
    #[serde(default, rename = "OrderDetails")]
    pub lines: Vec<OrderLine>,
}

impl OrderDetails {
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|line| line.quantity).sum()
    }
}
