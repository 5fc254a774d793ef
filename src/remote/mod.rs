//! Contracts for the shop API the dashboard presents.
//!
//! [`RemoteListFetcher`] is the seam the list controller fetches through; the
//! remaining traits cover the collaborator calls made by the dashboard pages.

use async_trait::async_trait;

use crate::domain::catalog::{Category, Manufacturer, NewCategory, NewManufacturer};
use crate::domain::list::{ListPage, ListQuery};
use crate::domain::order::OrderDetails;
use crate::domain::report::{ReportWindow, RevenuePoint, TopProduct};
use crate::domain::types::{CategoryId, ManufacturerId, OrderId, PaymentStatus, ProductId};
use crate::remote::errors::FetchResult;

pub mod endpoint;
pub mod errors;
#[cfg(feature = "server")]
pub mod http;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Fetches one page of a list for a [`ListQuery`].
#[async_trait]
pub trait RemoteListFetcher: Send + Sync {
    type Entity: Send;

    async fn fetch(&self, query: &ListQuery) -> FetchResult<ListPage<Self::Entity>>;
}

/// Complete lookup tables used by filter drop-downs and name resolution.
#[async_trait]
pub trait LookupReader: Send + Sync {
    async fn list_all_categories(&self) -> FetchResult<Vec<Category>>;
    async fn list_all_manufacturers(&self) -> FetchResult<Vec<Manufacturer>>;
}

#[async_trait]
pub trait CatalogWriter: Send + Sync {
    async fn delete_product(&self, id: ProductId) -> FetchResult<()>;
    async fn create_category(&self, category: &NewCategory) -> FetchResult<()>;
    async fn update_category(&self, id: CategoryId, category: &NewCategory) -> FetchResult<()>;
    async fn delete_category(&self, id: CategoryId) -> FetchResult<()>;
    async fn create_manufacturer(&self, manufacturer: &NewManufacturer) -> FetchResult<()>;
    async fn update_manufacturer(
        &self,
        id: ManufacturerId,
        manufacturer: &NewManufacturer,
    ) -> FetchResult<()>;
    async fn delete_manufacturer(&self, id: ManufacturerId) -> FetchResult<()>;
}

#[async_trait]
pub trait OrderReader: Send + Sync {
    /// Order with its lines; `None` when the API does not know the order.
    async fn get_order(&self, id: OrderId) -> FetchResult<Option<OrderDetails>>;
}

#[async_trait]
pub trait OrderWriter: Send + Sync {
    async fn update_payment_status(&self, id: OrderId, status: PaymentStatus) -> FetchResult<()>;
}

#[async_trait]
pub trait ReportReader: Send + Sync {
    async fn revenue_report(&self, window: &ReportWindow) -> FetchResult<Vec<RevenuePoint>>;
    async fn top_products(&self, window: &ReportWindow) -> FetchResult<Vec<TopProduct>>;
}
