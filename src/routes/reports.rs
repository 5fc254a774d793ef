use actix_web::{Responder, get, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use chrono::Utc;
use tera::Tera;

use crate::forms::reports::ReportQuery;
use crate::remote::http::HttpRemote;
use crate::routes::{base_context, redirect, render_template};
use crate::services::reports as reports_service;

#[get("/reports/revenue")]
pub async fn show_revenue_report(
    query: web::Query<ReportQuery>,
    remote: web::Data<HttpRemote>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let today = Utc::now().date_naive();
    let data = match reports_service::load_revenue_report(
        remote.get_ref(),
        query.into_inner(),
        today,
    )
    .await
    {
        Ok(data) => data,
        Err(err) => {
            FlashMessage::error(format!("Invalid report request: {err}")).send();
            return redirect("/reports/revenue");
        }
    };

    let mut context = base_context(&flash_messages, "reports");
    context.insert("report", &data);

    render_template(&tera, "reports/revenue.html", &context)
}
