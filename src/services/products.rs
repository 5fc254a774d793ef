//! Product list and product removal.

use crate::controller::schema::{ListSchema, UrlParams};
use crate::domain::catalog::{Category, Manufacturer, manufacturer_name};
use crate::domain::list::SortDirection;
use crate::domain::product::Product;
use crate::domain::types::ProductId;
use crate::dto::lists::{FilterChoice, ListView};
use crate::dto::products::{ProductRow, ProductsPageData};
use crate::forms::lists::ReturnToForm;
use crate::remote::errors::FetchResult;
use crate::remote::{CatalogWriter, LookupReader, RemoteListFetcher};
use crate::services::ServiceResult;
use crate::services::lists::{load_list, url_after_removal};

pub const PRODUCTS_PATH: &str = "/products";

pub const PRODUCT_LIST: ListSchema = ListSchema {
    page_size: 10,
    sortable: &["created_at", "price", "product_name", "remaining"],
    filters: &["category", "manufacturer"],
    default_sort: ("created_at", SortDirection::Desc),
    params: UrlParams::FIELD_DIR,
};

async fn load_lookups<R>(lookups: &R) -> FetchResult<(Vec<Category>, Vec<Manufacturer>)>
where
    R: LookupReader + ?Sized,
{
    let categories = lookups.list_all_categories().await?;
    let manufacturers = lookups.list_all_manufacturers().await?;
    Ok((categories, manufacturers))
}

fn product_row(product: Product, manufacturers: &[Manufacturer]) -> ProductRow {
    let manufacturer_name = product
        .manufacturer
        .clone()
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| manufacturer_name(manufacturers, product.manufacturer_id).to_string());

    ProductRow {
        manufacturer_name,
        status_label: product.status_label(),
        status_tone: product.status_tone(),
        product,
    }
}

/// Loads the product list together with the filter lookup tables.
///
/// A failed lookup only removes the filter choices; the list itself is
/// still shown.
pub async fn load_products<F, R>(fetcher: &F, lookups: &R, query_string: &str) -> ProductsPageData
where
    F: RemoteListFetcher<Entity = Product> + ?Sized,
    R: LookupReader + ?Sized,
{
    let (categories, manufacturers, lookup_error) = match load_lookups(lookups).await {
        Ok((categories, manufacturers)) => (categories, manufacturers, None),
        Err(err) => {
            log::error!("Failed to load product filters: {err}");
            (Vec::new(), Vec::new(), Some(err.to_string()))
        }
    };

    let controller = load_list(PRODUCT_LIST, fetcher, PRODUCTS_PATH, query_string).await;

    let filters = [
        (
            "category",
            categories
                .iter()
                .map(|c| FilterChoice::new(c.id.to_string(), c.name.as_str()))
                .collect(),
        ),
        (
            "manufacturer",
            manufacturers
                .iter()
                .map(|m| FilterChoice::new(m.id.to_string(), m.name.as_str()))
                .collect(),
        ),
    ];

    let list = ListView::new(controller, &filters)
        .map_rows(|product| product_row(product, &manufacturers));

    ProductsPageData { list, lookup_error }
}

/// Deletes a product and returns the URL of the list view to go back to.
pub async fn delete_product<W>(
    writer: &W,
    product_id: i64,
    form: &ReturnToForm,
) -> ServiceResult<String>
where
    W: CatalogWriter + ?Sized,
{
    let id = ProductId::new(product_id)?;

    writer.delete_product(id).await.map_err(|err| {
        log::error!("Failed to delete product {id}: {err}");
        err
    })?;

    Ok(url_after_removal(PRODUCT_LIST, PRODUCTS_PATH, form))
}
