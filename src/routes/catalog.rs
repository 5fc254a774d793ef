use actix_web::{HttpRequest, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::catalog::{Category, Manufacturer};
use crate::forms::catalog::CatalogNameForm;
use crate::forms::lists::ReturnToForm;
use crate::remote::endpoint;
use crate::remote::http::HttpRemote;
use crate::routes::{base_context, redirect, render_template};
use crate::services::catalog::{self as catalog_service, CATEGORIES_PATH, MANUFACTURERS_PATH};

#[get("/categories")]
pub async fn show_categories(
    req: HttpRequest,
    remote: web::Data<HttpRemote>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let fetcher = remote.list::<Category>(endpoint::CATEGORIES);
    let list = catalog_service::load_categories(&fetcher, req.query_string()).await;

    let mut context = base_context(&flash_messages, "categories");
    context.insert("list", &list);

    render_template(&tera, "categories/index.html", &context)
}

#[post("/categories/add")]
pub async fn add_category(
    remote: web::Data<HttpRemote>,
    web::Form(form): web::Form<CatalogNameForm>,
) -> impl Responder {
    match catalog_service::add_category(remote.get_ref(), &form).await {
        Ok(()) => FlashMessage::success("Category added.").send(),
        Err(err) => FlashMessage::error(format!("Failed to add category: {err}")).send(),
    }
    redirect(&form.list_url(CATEGORIES_PATH))
}

#[post("/categories/{category_id}/update")]
pub async fn update_category(
    category_id: web::Path<i64>,
    remote: web::Data<HttpRemote>,
    web::Form(form): web::Form<CatalogNameForm>,
) -> impl Responder {
    match catalog_service::rename_category(remote.get_ref(), category_id.into_inner(), &form).await
    {
        Ok(()) => FlashMessage::success("Category updated.").send(),
        Err(err) => FlashMessage::error(format!("Failed to update category: {err}")).send(),
    }
    redirect(&form.list_url(CATEGORIES_PATH))
}

#[post("/categories/{category_id}/delete")]
pub async fn delete_category(
    category_id: web::Path<i64>,
    remote: web::Data<HttpRemote>,
    web::Form(form): web::Form<ReturnToForm>,
) -> impl Responder {
    match catalog_service::delete_category(remote.get_ref(), category_id.into_inner(), &form).await
    {
        Ok(url) => {
            FlashMessage::success("Category deleted.").send();
            redirect(&url)
        }
        Err(err) => {
            FlashMessage::error(format!("Failed to delete category: {err}")).send();
            redirect(&form.list_url(CATEGORIES_PATH))
        }
    }
}

#[get("/manufacturers")]
pub async fn show_manufacturers(
    req: HttpRequest,
    remote: web::Data<HttpRemote>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let fetcher = remote.list::<Manufacturer>(endpoint::MANUFACTURERS);
    let list = catalog_service::load_manufacturers(&fetcher, req.query_string()).await;

    let mut context = base_context(&flash_messages, "manufacturers");
    context.insert("list", &list);

    render_template(&tera, "manufacturers/index.html", &context)
}

#[post("/manufacturers/add")]
pub async fn add_manufacturer(
    remote: web::Data<HttpRemote>,
    web::Form(form): web::Form<CatalogNameForm>,
) -> impl Responder {
    match catalog_service::add_manufacturer(remote.get_ref(), &form).await {
        Ok(()) => FlashMessage::success("Manufacturer added.").send(),
        Err(err) => FlashMessage::error(format!("Failed to add manufacturer: {err}")).send(),
    }
    redirect(&form.list_url(MANUFACTURERS_PATH))
}

#[post("/manufacturers/{manufacturer_id}/update")]
pub async fn update_manufacturer(
    manufacturer_id: web::Path<i64>,
    remote: web::Data<HttpRemote>,
    web::Form(form): web::Form<CatalogNameForm>,
) -> impl Responder {
    match catalog_service::rename_manufacturer(
        remote.get_ref(),
        manufacturer_id.into_inner(),
        &form,
    )
    .await
    {
        Ok(()) => FlashMessage::success("Manufacturer updated.").send(),
        Err(err) => FlashMessage::error(format!("Failed to update manufacturer: {err}")).send(),
    }
    redirect(&form.list_url(MANUFACTURERS_PATH))
}

#[post("/manufacturers/{manufacturer_id}/delete")]
pub async fn delete_manufacturer(
    manufacturer_id: web::Path<i64>,
    remote: web::Data<HttpRemote>,
    web::Form(form): web::Form<ReturnToForm>,
) -> impl Responder {
    match catalog_service::delete_manufacturer(
        remote.get_ref(),
        manufacturer_id.into_inner(),
        &form,
    )
    .await
    {
        Ok(url) => {
            FlashMessage::success("Manufacturer deleted.").send();
            redirect(&url)
        }
        Err(err) => {
            FlashMessage::error(format!("Failed to delete manufacturer: {err}")).send();
            redirect(&form.list_url(MANUFACTURERS_PATH))
        }
    }
}
