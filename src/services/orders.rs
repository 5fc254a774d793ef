//! Order list, order details and payment status updates.

use crate::controller::schema::{ListSchema, UrlParams};
use crate::domain::list::SortDirection;
use crate::domain::order::Order;
use crate::domain::product::format_status;
use crate::domain::types::{OrderId, PaymentStatus};
use crate::dto::lists::{FilterChoice, ListView};
use crate::dto::orders::OrderPageData;
use crate::forms::orders::PaymentStatusForm;
use crate::remote::{OrderReader, OrderWriter, RemoteListFetcher};
use crate::services::lists::load_list;
use crate::services::{ServiceError, ServiceResult};

pub const ORDERS_PATH: &str = "/orders";

pub const ORDER_LIST: ListSchema = ListSchema {
    page_size: 10,
    sortable: &["created_at", "total"],
    filters: &["status"],
    default_sort: ("created_at", SortDirection::Desc),
    params: UrlParams::STANDARD,
};

pub async fn load_orders<F>(fetcher: &F, query_string: &str) -> ListView<Order>
where
    F: RemoteListFetcher<Entity = Order> + ?Sized,
{
    let controller = load_list(ORDER_LIST, fetcher, ORDERS_PATH, query_string).await;
    let statuses = PaymentStatus::ALL
        .iter()
        .map(|status| FilterChoice::new(status.as_str(), format_status(status.as_str())))
        .collect();
    ListView::new(controller, &[("status", statuses)])
}

/// Loads one order with its lines.
pub async fn load_order<R>(reader: &R, order_id: i64) -> ServiceResult<OrderPageData>
where
    R: OrderReader + ?Sized,
{
    let id = OrderId::new(order_id)?;

    let details = reader
        .get_order(id)
        .await
        .map_err(|err| {
            log::error!("Failed to load order {id}: {err}");
            err
        })?
        .ok_or(ServiceError::NotFound)?;

    Ok(OrderPageData {
        item_count: details.item_count(),
        details,
        statuses: PaymentStatus::ALL,
    })
}

pub async fn update_payment_status<W>(
    writer: &W,
    order_id: i64,
    form: &PaymentStatusForm,
) -> ServiceResult<PaymentStatus>
where
    W: OrderWriter + ?Sized,
{
    let id = OrderId::new(order_id)?;
    let status = PaymentStatus::try_from(form)?;

    writer.update_payment_status(id, status).await.map_err(|err| {
        log::error!("Failed to update payment status of order {id}: {err}");
        err
    })?;

    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::list::ListPage;
    use crate::domain::order::OrderDetails;
    use crate::remote::mock::{MockOrderList, MockRemote};

    fn details() -> OrderDetails {
        serde_json::from_value(serde_json::json!({
            "order_id": 12,
            "total": "30.00",
            "paymentStatus": "pending",
            "OrderDetails": [
                {"quantity": 2, "total": 20, "Product": {"product_id": 1, "product_name": "Mug"}},
                {"quantity": 1, "total": 10, "Product": {"product_id": 2, "product_name": "Tray"}}
            ]
        }))
        .unwrap()
    }

    #[actix_web::test]
    async fn order_page_counts_items() {
        let mut reader = MockRemote::new();
        reader
            .expect_get_order()
            .withf(|id| id.get() == 12)
            .returning(|_| Ok(Some(details())));

        let data = load_order(&reader, 12).await.unwrap();
        assert_eq!(data.item_count, 3);
        assert_eq!(data.details.lines.len(), 2);
    }

    #[actix_web::test]
    async fn unknown_order_is_not_found() {
        let mut reader = MockRemote::new();
        reader.expect_get_order().returning(|_| Ok(None));

        assert!(matches!(
            load_order(&reader, 99).await,
            Err(ServiceError::NotFound)
        ));
    }

    #[actix_web::test]
    async fn payment_status_is_parsed_before_the_call() {
        let mut writer = MockRemote::new();
        writer
            .expect_update_payment_status()
            .withf(|id, status| id.get() == 12 && *status == PaymentStatus::Paid)
            .times(1)
            .returning(|_, _| Ok(()));

        let form = PaymentStatusForm {
            status: "PAID".to_string(),
        };
        assert_eq!(
            update_payment_status(&writer, 12, &form).await.unwrap(),
            PaymentStatus::Paid
        );

        let form = PaymentStatusForm {
            status: "lost".to_string(),
        };
        assert!(matches!(
            update_payment_status(&writer, 12, &form).await,
            Err(ServiceError::Form(_))
        ));
    }

    #[actix_web::test]
    async fn order_list_offers_status_filter_links() {
        let mut fetcher = MockOrderList::new();
        fetcher
            .expect_fetch()
            .withf(|query| query.filter("status") == Some("paid"))
            .returning(|_| Ok(ListPage::new(Vec::new(), 0)));

        let view = load_orders(&fetcher, "status=paid").await;
        let labels: Vec<_> = view.filter_links["status"]
            .iter()
            .map(|link| (link.label.as_str(), link.active))
            .collect();
        assert_eq!(labels, vec![("All", false), ("Pending", false), ("Paid", true)]);
    }
}
