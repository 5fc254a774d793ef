//! Mock shop API collaborators for isolating services and the controller in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::domain::account::Account;
use crate::domain::catalog::{Category, Manufacturer, NewCategory, NewManufacturer};
use crate::domain::list::{ListPage, ListQuery};
use crate::domain::order::{Order, OrderDetails};
use crate::domain::product::Product;
use crate::domain::report::{ReportWindow, RevenuePoint, TopProduct};
use crate::domain::types::{CategoryId, ManufacturerId, OrderId, PaymentStatus, ProductId};
use crate::remote::errors::FetchResult;
use crate::remote::{
    CatalogWriter, LookupReader, OrderReader, OrderWriter, RemoteListFetcher, ReportReader,
};

mock! {
    pub Remote {}

    #[async_trait]
    impl LookupReader for Remote {
        async fn list_all_categories(&self) -> FetchResult<Vec<Category>>;
        async fn list_all_manufacturers(&self) -> FetchResult<Vec<Manufacturer>>;
    }

    #[async_trait]
    impl CatalogWriter for Remote {
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
    impl OrderReader for Remote {
        async fn get_order(&self, id: OrderId) -> FetchResult<Option<OrderDetails>>;
    }

    #[async_trait]
    impl OrderWriter for Remote {
        async fn update_payment_status(&self, id: OrderId, status: PaymentStatus) -> FetchResult<()>;
    }

    #[async_trait]
    impl ReportReader for Remote {
        async fn revenue_report(&self, window: &ReportWindow) -> FetchResult<Vec<RevenuePoint>>;
        async fn top_products(&self, window: &ReportWindow) -> FetchResult<Vec<TopProduct>>;
    }
}

mock! {
    pub AccountList {}

    #[async_trait]
    impl RemoteListFetcher for AccountList {
        type Entity = Account;
        async fn fetch(&self, query: &ListQuery) -> FetchResult<ListPage<Account>>;
    }
}

mock! {
    pub ProductList {}

    #[async_trait]
    impl RemoteListFetcher for ProductList {
        type Entity = Product;
        async fn fetch(&self, query: &ListQuery) -> FetchResult<ListPage<Product>>;
    }
}

mock! {
    pub CategoryList {}

    #[async_trait]
    impl RemoteListFetcher for CategoryList {
        type Entity = Category;
        async fn fetch(&self, query: &ListQuery) -> FetchResult<ListPage<Category>>;
    }
}

mock! {
    pub ManufacturerList {}

    #[async_trait]
    impl RemoteListFetcher for ManufacturerList {
        type Entity = Manufacturer;
        async fn fetch(&self, query: &ListQuery) -> FetchResult<ListPage<Manufacturer>>;
    }
}

mock! {
    pub OrderList {}

    #[async_trait]
    impl RemoteListFetcher for OrderList {
        type Entity = Order;
        async fn fetch(&self, query: &ListQuery) -> FetchResult<ListPage<Order>>;
    }
}
