use serde::Serialize;

use crate::domain::order::OrderDetails;
use crate::domain::types::PaymentStatus;

/// Data required to render the order details template.
#[derive(Debug, Serialize)]
pub struct OrderPageData {
    pub details: OrderDetails,
    pub item_count: i64,
    pub statuses: [PaymentStatus; 2],
}
