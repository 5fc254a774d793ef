use actix_web::{HttpRequest, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::product::Product;
use crate::forms::lists::ReturnToForm;
use crate::remote::endpoint;
use crate::remote::http::HttpRemote;
use crate::routes::{base_context, redirect, render_template};
use crate::services::products::{self as products_service, PRODUCTS_PATH};

#[get("/products")]
pub async fn show_products(
    req: HttpRequest,
    remote: web::Data<HttpRemote>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let fetcher = remote.list::<Product>(endpoint::PRODUCTS);
    let data =
        products_service::load_products(&fetcher, remote.get_ref(), req.query_string()).await;

    let mut context = base_context(&flash_messages, "products");
    context.insert("list", &data.list);
    context.insert("lookup_error", &data.lookup_error);

    render_template(&tera, "products/index.html", &context)
}

#[post("/products/{product_id}/delete")]
pub async fn delete_product(
    product_id: web::Path<i64>,
    remote: web::Data<HttpRemote>,
    web::Form(form): web::Form<ReturnToForm>,
) -> impl Responder {
    match products_service::delete_product(remote.get_ref(), product_id.into_inner(), &form).await
    {
        Ok(url) => {
            FlashMessage::success("Product deleted.").send();
            redirect(&url)
        }
        Err(err) => {
            FlashMessage::error(format!("Failed to delete product: {err}")).send();
            redirect(&form.list_url(PRODUCTS_PATH))
        }
    }
}
