//! Revenue reporting rows and the window they are requested for.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::de;
use crate::domain::types::{TimeRange, TypeConstraintError};

/// Revenue aggregated over one time bucket.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RevenuePoint {
    #[serde(rename = "timePeriod")]
    pub time_period: String,
    #[serde(rename = "totalRevenue", deserialize_with = "de::number")]
    pub total_revenue: f64,
}

/// Best selling product of one time bucket.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TopProduct {
    #[serde(rename = "timePeriod")]
    pub time_period: String,
    #[serde(rename = "productName")]
    pub product_name: String,
    #[serde(rename = "totalRevenue", deserialize_with = "de::number")]
    pub total_revenue: f64,
    #[serde(rename = "totalQuantity", default, deserialize_with = "de::optional_number")]
    pub total_quantity: Option<f64>,
}

/// Bucket size and inclusive date window of a report request.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct ReportWindow {
    pub time_range: TimeRange,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl ReportWindow {
    pub fn try_new(
        time_range: TimeRange,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Self, TypeConstraintError> {
        if start_date > end_date {
            return Err(TypeConstraintError::InvalidValue(
                "start date is after end date".to_string(),
            ));
        }
        Ok(Self {
            time_range,
            start_date,
            end_date,
        })
    }

    /// Daily buckets over the month ending at `today`.
    pub fn last_month(today: NaiveDate) -> Self {
        let start_date = today.checked_sub_months(Months::new(1)).unwrap_or(today);
        Self {
            time_range: TimeRange::Day,
            start_date,
            end_date: today,
        }
    }
}

/// Sum of all buckets in a revenue report.
pub fn total_revenue(points: &[RevenuePoint]) -> f64 {
    points.iter().map(|point| point.total_revenue).sum()
}
