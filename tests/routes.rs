use actix_web::http::{StatusCode, header};
use actix_web_flash_messages::Level;
use async_trait::async_trait;
use chrono::NaiveDate;
use tera::{Context, Tera};

use shop_admin::domain::account::Account;
use shop_admin::domain::catalog::Category;
use shop_admin::domain::list::{ListPage, ListQuery};
use shop_admin::domain::report::ReportWindow;
use shop_admin::domain::types::{TimeRange, UserId};
use shop_admin::dto::reports::ReportPageData;
use shop_admin::remote::RemoteListFetcher;
use shop_admin::remote::errors::FetchResult;
use shop_admin::routes::{alert_level_to_str, redirect, render_template};
use shop_admin::services::{accounts, catalog};

#[test]
fn test_alert_level_to_str_mappings() {
    assert_eq!(alert_level_to_str(&Level::Error), "danger");
    assert_eq!(alert_level_to_str(&Level::Warning), "warning");
    assert_eq!(alert_level_to_str(&Level::Success), "success");
    assert_eq!(alert_level_to_str(&Level::Info), "info");
    assert_eq!(alert_level_to_str(&Level::Debug), "info");
}

#[test]
fn redirect_is_see_other() {
    let response = redirect("/products?page=2");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/products?page=2"
    );
}

struct Fixed<T>(Vec<T>, usize);

#[async_trait]
impl<T: Clone + Send + Sync> RemoteListFetcher for Fixed<T> {
    type Entity = T;

    async fn fetch(&self, _query: &ListQuery) -> FetchResult<ListPage<T>> {
        Ok(ListPage::new(self.0.clone(), self.1))
    }
}

fn templates() -> Tera {
    Tera::new("templates/**/*").expect("templates parse")
}

fn page_context(current_page: &str) -> Context {
    let alerts: Vec<(String, &str)> = vec![("Saved.".to_string(), "success")];
    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_page", current_page);
    context
}

async fn body_of(response: actix_web::HttpResponse) -> String {
    let bytes = actix_web::body::to_bytes(response.into_body())
        .await
        .unwrap_or_default();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[actix_web::test]
async fn account_list_renders_with_pagination() {
    let rows = vec![Account {
        id: UserId::new(1).unwrap(),
        user_name: "Ann Lee".to_string(),
        email: "ann@example.com".to_string(),
        avatar: None,
        created_at: None,
        banned: true,
    }];
    let fetcher = Fixed(rows, 35);
    let list = accounts::load_accounts(&fetcher, "page=2").await;

    let mut context = page_context("accounts");
    context.insert("list", &list);
    let response = render_template(&templates(), "accounts/index.html", &context);

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_of(response).await;
    assert!(body.contains("ann@example.com"));
    assert!(body.contains("AL"));
    assert!(body.contains("Banned"));
    assert!(body.contains("alert-success"));
}

#[actix_web::test]
async fn category_list_posts_the_list_state_with_deletes() {
    let rows: Vec<Category> =
        serde_json::from_str(r#"[{"category_id": 4, "category_name": "Lamps"}]"#).unwrap();
    let fetcher = Fixed(rows, 1);
    let list = catalog::load_categories(&fetcher, "search=lam").await;

    let mut context = page_context("categories");
    context.insert("list", &list);
    let body = body_of(render_template(
        &templates(),
        "categories/index.html",
        &context,
    ))
    .await;

    assert!(body.contains("/categories/4/delete"));
    assert!(body.contains(r#"name="total_items" value="1""#));
    assert!(body.contains("Lamps"));
}

#[actix_web::test]
async fn revenue_report_renders_an_empty_window() {
    let today = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
    let report = ReportPageData {
        window: ReportWindow::last_month(today),
        time_ranges: TimeRange::ALL,
        revenue: Vec::new(),
        total_revenue: 0.0,
        top_products: Vec::new(),
        error: Some("The shop API responded with 500".to_string()),
    };

    let mut context = page_context("reports");
    context.insert("report", &report);
    let body = body_of(render_template(&templates(), "reports/revenue.html", &context)).await;

    assert!(body.contains("2024-02-29"));
    assert!(body.contains("No revenue in this window."));
    assert!(body.contains("responded with 500"));
}

#[test]
fn missing_template_is_a_server_error() {
    let response = render_template(&templates(), "missing.html", &Context::new());
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
