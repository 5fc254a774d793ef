use serde::Serialize;

use crate::domain::report::{ReportWindow, RevenuePoint, TopProduct};
use crate::domain::types::TimeRange;

/// Data required to render the revenue report template.
#[derive(Debug, Serialize)]
pub struct ReportPageData {
    pub window: ReportWindow,
    pub time_ranges: [TimeRange; 3],
    pub revenue: Vec<RevenuePoint>,
    pub total_revenue: f64,
    pub top_products: Vec<TopProduct>,
    pub error: Option<String>,
}
