use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::domain::account::Account;
use crate::remote::endpoint;
use crate::remote::http::HttpRemote;
use crate::routes::{base_context, render_template};
use crate::services::accounts as accounts_service;

#[get("/")]
pub async fn show_index(
    req: HttpRequest,
    remote: web::Data<HttpRemote>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    render_accounts(&req, &remote, &flash_messages, &tera).await
}

#[get("/accounts")]
pub async fn show_accounts(
    req: HttpRequest,
    remote: web::Data<HttpRemote>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    render_accounts(&req, &remote, &flash_messages, &tera).await
}

async fn render_accounts(
    req: &HttpRequest,
    remote: &HttpRemote,
    flash_messages: &IncomingFlashMessages,
    tera: &Tera,
) -> HttpResponse {
    let fetcher = remote.list::<Account>(endpoint::ACCOUNTS);
    let list = accounts_service::load_accounts(&fetcher, req.query_string()).await;

    let mut context = base_context(flash_messages, "accounts");
    context.insert("list", &list);

    render_template(tera, "accounts/index.html", &context)
}
