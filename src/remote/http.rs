//! `reqwest` client for the shop API.

use std::marker::PhantomData;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::domain::catalog::{Category, Manufacturer, NewCategory, NewManufacturer};
use crate::domain::list::{ListPage, ListQuery};
use crate::domain::order::OrderDetails;
use crate::domain::report::{ReportWindow, RevenuePoint, TopProduct};
use crate::domain::types::{CategoryId, ManufacturerId, OrderId, PaymentStatus, ProductId};
use crate::remote::endpoint::ListEndpoint;
use crate::remote::errors::{FetchError, FetchResult};
use crate::remote::{
    CatalogWriter, LookupReader, OrderReader, OrderWriter, RemoteListFetcher, ReportReader,
};

const DATE_FORMAT: &str = "%Y-%m-%d";

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return FetchError::Parse(err.to_string());
        }
        if err.is_timeout() {
            return FetchError::transport("The shop API did not respond in time");
        }
        FetchError::Transport {
            status: err.status().map(|status| status.as_u16()),
            message: err.to_string(),
        }
    }
}

/// Shared handle to the shop API. Cloning is cheap.
#[derive(Clone, Debug)]
pub struct HttpRemote {
    client: Client,
    base_url: String,
    api_token: Option<String>,
}

impl HttpRemote {
    pub fn new(
        base_url: &str,
        api_token: Option<String>,
        timeout: Duration,
    ) -> FetchResult<Self> {
        let client = Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION"),
            ))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token: api_token.filter(|token| !token.is_empty()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// A list fetcher for `endpoint` yielding rows of `T`.
    pub fn list<T>(&self, endpoint: ListEndpoint) -> RemoteList<T> {
        RemoteList {
            remote: self.clone(),
            endpoint,
            entity: PhantomData,
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self
            .client
            .request(method, format!("{}{path}", self.base_url));
        match &self.api_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> FetchResult<Response> {
        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status));
        }
        Ok(response)
    }

    async fn get_json(&self, path: &str, params: &[(&str, String)]) -> FetchResult<Value> {
        let response = self
            .send(self.request(Method::GET, path).query(params))
            .await?;
        Ok(response.json::<Value>().await?)
    }

    async fn send_json<B>(&self, method: Method, path: &str, body: &B) -> FetchResult<()>
    where
        B: Serialize + ?Sized + Sync,
    {
        self.send(self.request(method, path).json(body)).await?;
        Ok(())
    }

    async fn delete(&self, path: &str) -> FetchResult<()> {
        self.send(self.request(Method::DELETE, path)).await?;
        Ok(())
    }

    async fn report<T: DeserializeOwned>(
        &self,
        path: &str,
        window: &ReportWindow,
    ) -> FetchResult<Vec<T>> {
        let params = [
            ("timeRange", window.time_range.as_str().to_string()),
            ("startDate", window.start_date.format(DATE_FORMAT).to_string()),
            ("endDate", window.end_date.format(DATE_FORMAT).to_string()),
        ];
        let body = self.get_json(path, &params).await?;
        decode(unwrap_data(body))
    }
}

fn status_error(status: StatusCode) -> FetchError {
    FetchError::with_status(
        status.as_u16(),
        format!("The shop API responded with {status}"),
    )
}

/// Strips the `{ "data": ... }` envelope some endpoints wrap their body in.
fn unwrap_data(mut body: Value) -> Value {
    match body.get_mut("data") {
        Some(data) => data.take(),
        None => body,
    }
}

fn decode<T: DeserializeOwned>(body: Value) -> FetchResult<T> {
    serde_json::from_value(body).map_err(|err| FetchError::parse(err.to_string()))
}

/// One list endpoint of the shop API.
#[derive(Clone, Debug)]
pub struct RemoteList<T> {
    remote: HttpRemote,
    endpoint: ListEndpoint,
    entity: PhantomData<fn() -> T>,
}

#[async_trait]
impl<T> RemoteListFetcher for RemoteList<T>
where
    T: DeserializeOwned + Send + 'static,
{
    type Entity = T;

    async fn fetch(&self, query: &ListQuery) -> FetchResult<ListPage<T>> {
        let params = self.endpoint.request_params(query);
        let body = self.remote.get_json(self.endpoint.path, &params).await?;
        self.endpoint.parse_page(query, body)
    }
}

#[async_trait]
impl LookupReader for HttpRemote {
    async fn list_all_categories(&self) -> FetchResult<Vec<Category>> {
        decode(self.get_json("/categories/api", &[]).await?)
    }

    async fn list_all_manufacturers(&self) -> FetchResult<Vec<Manufacturer>> {
        decode(self.get_json("/manufacturers/api", &[]).await?)
    }
}

#[async_trait]
impl CatalogWriter for HttpRemote {
    async fn delete_product(&self, id: ProductId) -> FetchResult<()> {
        self.delete(&format!("/products/json/{id}")).await
    }

    async fn create_category(&self, category: &NewCategory) -> FetchResult<()> {
        self.send_json(Method::POST, "/categories/api", category)
            .await
    }

    async fn update_category(&self, id: CategoryId, category: &NewCategory) -> FetchResult<()> {
        self.send_json(Method::PUT, &format!("/categories/api/{id}"), category)
            .await
    }

    async fn delete_category(&self, id: CategoryId) -> FetchResult<()> {
        self.delete(&format!("/categories/api/{id}")).await
    }

    async fn create_manufacturer(&self, manufacturer: &NewManufacturer) -> FetchResult<()> {
        self.send_json(Method::POST, "/manufacturers/api", manufacturer)
            .await
    }

    async fn update_manufacturer(
        &self,
        id: ManufacturerId,
        manufacturer: &NewManufacturer,
    ) -> FetchResult<()> {
        self.send_json(
            Method::PUT,
            &format!("/manufacturers/api/{id}"),
            manufacturer,
        )
        .await
    }

    async fn delete_manufacturer(&self, id: ManufacturerId) -> FetchResult<()> {
        self.delete(&format!("/manufacturers/api/{id}")).await
    }
}

#[async_trait]
impl OrderReader for HttpRemote {
    async fn get_order(&self, id: OrderId) -> FetchResult<Option<OrderDetails>> {
        let body = match self.get_json(&format!("/order/{id}"), &[]).await {
            Ok(body) => body,
            Err(err) if err.is_not_found() => return Ok(None),
            Err(err) => return Err(err),
        };
        match unwrap_data(body) {
            Value::Null => Ok(None),
            order => decode(order).map(Some),
        }
    }
}

#[async_trait]
impl OrderWriter for HttpRemote {
    async fn update_payment_status(&self, id: OrderId, status: PaymentStatus) -> FetchResult<()> {
        let body = json!({ "paymentStatus": status.as_str() });
        self.send_json(Method::PATCH, &format!("/order/{id}"), &body)
            .await
    }
}

#[async_trait]
impl ReportReader for HttpRemote {
    async fn revenue_report(&self, window: &ReportWindow) -> FetchResult<Vec<RevenuePoint>> {
        self.report("/reports/revenue-report", window).await
    }

    async fn top_products(&self, window: &ReportWindow) -> FetchResult<Vec<TopProduct>> {
        self.report("/reports/top-revenue-product", window).await
    }
}
