#[cfg(feature = "server")]
use std::time::Duration;

#[cfg(feature = "server")]
use actix_files::Files;
#[cfg(feature = "server")]
use actix_web::cookie::Key;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};
#[cfg(feature = "server")]
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
#[cfg(feature = "server")]
use tera::Tera;

#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::remote::http::HttpRemote;
#[cfg(feature = "server")]
use crate::routes::accounts::{show_accounts, show_index};
#[cfg(feature = "server")]
use crate::routes::catalog::{
    add_category, add_manufacturer, delete_category, delete_manufacturer, show_categories,
    show_manufacturers, update_category, update_manufacturer,
};
#[cfg(feature = "server")]
use crate::routes::orders::{show_order, show_orders, update_order_status};
#[cfg(feature = "server")]
use crate::routes::products::{delete_product, show_products};
#[cfg(feature = "server")]
use crate::routes::reports::show_revenue_report;

#[cfg(feature = "data")]
pub mod controller;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod error_conversions;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod query_store;
#[cfg(feature = "data")]
pub mod remote;

#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let remote = HttpRemote::new(
        &server_config.api_base_url,
        server_config.api_token.clone(),
        Duration::from_secs(server_config.request_timeout_secs),
    )
    .map_err(|e| std::io::Error::other(format!("Failed to build shop API client: {e}")))?;

    log::info!("Using shop API at {}", remote.base_url());

    // Flash messages survive the POST/redirect/GET round trip in a signed cookie.
    let secret_key = Key::try_from(server_config.secret.as_bytes())
        .map_err(|e| std::io::Error::other(format!("Invalid secret: {e}")))?;

    let message_store = CookieMessageStore::builder(secret_key).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(show_index)
            .service(show_accounts)
            .service(show_products)
            .service(delete_product)
            .service(show_categories)
            .service(add_category)
            .service(update_category)
            .service(delete_category)
            .service(show_manufacturers)
            .service(add_manufacturer)
            .service(update_manufacturer)
            .service(delete_manufacturer)
            .service(show_orders)
            .service(show_order)
            .service(update_order_status)
            .service(show_revenue_report)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(remote.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
