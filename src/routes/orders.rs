use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::order::Order;
use crate::forms::orders::PaymentStatusForm;
use crate::remote::endpoint;
use crate::remote::http::HttpRemote;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::orders::{self as orders_service, ORDERS_PATH};

#[get("/orders")]
pub async fn show_orders(
    req: HttpRequest,
    remote: web::Data<HttpRemote>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let fetcher = remote.list::<Order>(endpoint::ORDERS);
    let list = orders_service::load_orders(&fetcher, req.query_string()).await;

    let mut context = base_context(&flash_messages, "orders");
    context.insert("list", &list);

    render_template(&tera, "orders/index.html", &context)
}

#[get("/orders/{order_id}")]
pub async fn show_order(
    order_id: web::Path<i64>,
    remote: web::Data<HttpRemote>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> HttpResponse {
    let data = match orders_service::load_order(remote.get_ref(), order_id.into_inner()).await {
        Ok(data) => data,
        Err(ServiceError::NotFound | ServiceError::TypeConstraint(_)) => {
            FlashMessage::error("Order not found.").send();
            return redirect(ORDERS_PATH);
        }
        Err(err) => {
            FlashMessage::error(format!("Failed to load order: {err}")).send();
            return redirect(ORDERS_PATH);
        }
    };

    let mut context = base_context(&flash_messages, "orders");
    context.insert("order", &data);

    render_template(&tera, "orders/show.html", &context)
}

#[post("/orders/{order_id}/status")]
pub async fn update_order_status(
    order_id: web::Path<i64>,
    remote: web::Data<HttpRemote>,
    web::Form(form): web::Form<PaymentStatusForm>,
) -> impl Responder {
    let order_id = order_id.into_inner();
    match orders_service::update_payment_status(remote.get_ref(), order_id, &form).await {
        Ok(status) => {
            FlashMessage::success(format!("Payment status set to {status}.")).send();
        }
        Err(err) => {
            FlashMessage::error(format!("Failed to update payment status: {err}")).send();
        }
    }
    redirect(&format!("{ORDERS_PATH}/{order_id}"))
}
