//! Category and manufacturer management.

use crate::controller::schema::{ListSchema, UrlParams};
use crate::domain::catalog::{Category, Manufacturer, NewCategory, NewManufacturer};
use crate::domain::list::SortDirection;
use crate::domain::types::{CategoryId, ManufacturerId};
use crate::dto::lists::ListView;
use crate::forms::catalog::CatalogNameForm;
use crate::forms::lists::ReturnToForm;
use crate::remote::{CatalogWriter, RemoteListFetcher};
use crate::services::ServiceResult;
use crate::services::lists::{load_list, url_after_removal};

pub const CATEGORIES_PATH: &str = "/categories";
pub const MANUFACTURERS_PATH: &str = "/manufacturers";

pub const CATEGORY_LIST: ListSchema = ListSchema {
    page_size: 10,
    sortable: &["category_name", "category_id"],
    filters: &[],
    default_sort: ("category_id", SortDirection::Asc),
    params: UrlParams::STANDARD,
};

pub const MANUFACTURER_LIST: ListSchema = ListSchema {
    page_size: 10,
    sortable: &["m_name", "manufacturer_id"],
    filters: &[],
    default_sort: ("manufacturer_id", SortDirection::Asc),
    params: UrlParams::STANDARD,
};

pub async fn load_categories<F>(fetcher: &F, query_string: &str) -> ListView<Category>
where
    F: RemoteListFetcher<Entity = Category> + ?Sized,
{
    let controller = load_list(CATEGORY_LIST, fetcher, CATEGORIES_PATH, query_string).await;
    ListView::new(controller, &[])
}

pub async fn load_manufacturers<F>(fetcher: &F, query_string: &str) -> ListView<Manufacturer>
where
    F: RemoteListFetcher<Entity = Manufacturer> + ?Sized,
{
    let controller =
        load_list(MANUFACTURER_LIST, fetcher, MANUFACTURERS_PATH, query_string).await;
    ListView::new(controller, &[])
}

/// Validates the form and creates a category.
pub async fn add_category<W>(writer: &W, form: &CatalogNameForm) -> ServiceResult<()>
where
    W: CatalogWriter + ?Sized,
{
    let category = NewCategory::try_from(form).map_err(|err| {
        log::error!("Failed to validate category form: {err}");
        err
    })?;

    writer.create_category(&category).await.map_err(|err| {
        log::error!("Failed to add category: {err}");
        err
    })?;

    Ok(())
}

pub async fn rename_category<W>(
    writer: &W,
    category_id: i64,
    form: &CatalogNameForm,
) -> ServiceResult<()>
where
    W: CatalogWriter + ?Sized,
{
    let id = CategoryId::new(category_id)?;
    let category = NewCategory::try_from(form)?;

    writer.update_category(id, &category).await.map_err(|err| {
        log::error!("Failed to update category {id}: {err}");
        err
    })?;

    Ok(())
}

/// Deletes a category and returns the URL of the list view to go back to.
pub async fn delete_category<W>(
    writer: &W,
    category_id: i64,
    form: &ReturnToForm,
) -> ServiceResult<String>
where
    W: CatalogWriter + ?Sized,
{
    let id = CategoryId::new(category_id)?;

    writer.delete_category(id).await.map_err(|err| {
        log::error!("Failed to delete category {id}: {err}");
        err
    })?;

    Ok(url_after_removal(CATEGORY_LIST, CATEGORIES_PATH, form))
}

/// Validates the form and creates a manufacturer.
pub async fn add_manufacturer<W>(writer: &W, form: &CatalogNameForm) -> ServiceResult<()>
where
    W: CatalogWriter + ?Sized,
{
    let manufacturer = NewManufacturer::try_from(form).map_err(|err| {
        log::error!("Failed to validate manufacturer form: {err}");
        err
    })?;

    writer
        .create_manufacturer(&manufacturer)
        .await
        .map_err(|err| {
            log::error!("Failed to add manufacturer: {err}");
            err
        })?;

    Ok(())
}

pub async fn rename_manufacturer<W>(
    writer: &W,
    manufacturer_id: i64,
    form: &CatalogNameForm,
) -> ServiceResult<()>
where
    W: CatalogWriter + ?Sized,
{
    let id = ManufacturerId::new(manufacturer_id)?;
    let manufacturer = NewManufacturer::try_from(form)?;

    writer
        .update_manufacturer(id, &manufacturer)
        .await
        .map_err(|err| {
            log::error!("Failed to update manufacturer {id}: {err}");
            err
        })?;

    Ok(())
}

/// Deletes a manufacturer and returns the URL of the list view to go back to.
pub async fn delete_manufacturer<W>(
    writer: &W,
    manufacturer_id: i64,
    form: &ReturnToForm,
) -> ServiceResult<String>
where
    W: CatalogWriter + ?Sized,
{
    let id = ManufacturerId::new(manufacturer_id)?;

    writer.delete_manufacturer(id).await.map_err(|err| {
        log::error!("Failed to delete manufacturer {id}: {err}");
        err
    })?;

    Ok(url_after_removal(
        MANUFACTURER_LIST,
        MANUFACTURERS_PATH,
        form,
    ))
}
