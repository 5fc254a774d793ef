//! Revenue report.

use chrono::NaiveDate;

use crate::domain::report::{ReportWindow, RevenuePoint, TopProduct, total_revenue};
use crate::domain::types::TimeRange;
use crate::dto::reports::ReportPageData;
use crate::forms::reports::ReportQuery;
use crate::remote::ReportReader;
use crate::remote::errors::FetchResult;
use crate::services::ServiceResult;

/// Loads revenue per period and the top products for the requested window.
///
/// An invalid query is an error; a failed API call is shown on the page.
pub async fn load_revenue_report<R>(
    reader: &R,
    query: ReportQuery,
    today: NaiveDate,
) -> ServiceResult<ReportPageData>
where
    R: ReportReader + ?Sized,
{
    let window = query.into_window(today)?;

    let mut data = ReportPageData {
        window,
        time_ranges: TimeRange::ALL,
        revenue: Vec::new(),
        total_revenue: 0.0,
        top_products: Vec::new(),
        error: None,
    };

    match fetch_report(reader, &window).await {
        Ok((revenue, top_products)) => {
            data.total_revenue = total_revenue(&revenue);
            data.revenue = revenue;
            data.top_products = top_products;
        }
        Err(err) => {
            log::error!("Failed to load revenue report: {err}");
            data.error = Some(err.to_string());
        }
    }

    Ok(data)
}

async fn fetch_report<R>(
    reader: &R,
    window: &ReportWindow,
) -> FetchResult<(Vec<RevenuePoint>, Vec<TopProduct>)>
where
    R: ReportReader + ?Sized,
{
    let revenue = reader.revenue_report(window).await?;
    let top_products = reader.top_products(window).await?;
    Ok((revenue, top_products))
}
