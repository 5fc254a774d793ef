use chrono::{Months, NaiveDate};
use serde::Deserialize;

use crate::domain::report::ReportWindow;
use crate::domain::types::TimeRange;
use crate::forms::FormError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Query parameters of the revenue report page.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportQuery {
    pub time_range: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl ReportQuery {
    /// Resolves the requested window; without any parameter the report
    /// covers the month ending `today`.
    pub fn into_window(self, today: NaiveDate) -> Result<ReportWindow, FormError> {
        let time_range = non_empty(self.time_range);
        let start_date = non_empty(self.start_date);
        let end_date = non_empty(self.end_date);

        if time_range.is_none() && start_date.is_none() && end_date.is_none() {
            return Ok(ReportWindow::last_month(today));
        }

        let time_range = match time_range {
            Some(raw) => raw
                .parse::<TimeRange>()
                .map_err(|_| FormError::InvalidTimeRange)?,
            None => TimeRange::default(),
        };
        let end_date = match end_date {
            Some(raw) => parse_date(&raw)?,
            None => today,
        };
        let start_date = match start_date {
            Some(raw) => parse_date(&raw)?,
            None => end_date.checked_sub_months(Months::new(1)).unwrap_or(end_date),
        };

        ReportWindow::try_new(time_range, start_date, end_date)
            .map_err(|_| FormError::InvalidDateWindow)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_date(raw: &str) -> Result<NaiveDate, FormError> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| FormError::InvalidDate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn query(range: &str, start: &str, end: &str) -> ReportQuery {
        ReportQuery {
            time_range: Some(range.to_string()),
            start_date: Some(start.to_string()),
            end_date: Some(end.to_string()),
        }
    }

    #[test]
    fn empty_query_defaults_to_last_month() {
        let window = ReportQuery::default().into_window(date(2024, 3, 31)).unwrap();
        assert_eq!(window, ReportWindow::last_month(date(2024, 3, 31)));

        let blank = query("", " ", "");
        assert_eq!(
            blank.into_window(date(2024, 3, 31)).unwrap(),
            ReportWindow::last_month(date(2024, 3, 31))
        );
    }

    #[test]
    fn explicit_window_is_parsed() {
        let window = query("week", "2024-01-01", "2024-02-15")
            .into_window(date(2024, 3, 31))
            .unwrap();
        assert_eq!(window.time_range, TimeRange::Week);
        assert_eq!(window.start_date, date(2024, 1, 1));
        assert_eq!(window.end_date, date(2024, 2, 15));
    }

    #[test]
    fn missing_start_is_a_month_before_end() {
        let window = ReportQuery {
            time_range: Some("month".to_string()),
            start_date: None,
            end_date: Some("2024-05-20".to_string()),
        }
        .into_window(date(2024, 6, 1))
        .unwrap();
        assert_eq!(window.start_date, date(2024, 4, 20));
    }

    #[test]
    fn invalid_values_are_reported() {
        let today = date(2024, 3, 31);
        assert!(matches!(
            query("year", "2024-01-01", "2024-01-02").into_window(today),
            Err(FormError::InvalidTimeRange)
        ));
        assert!(matches!(
            query("day", "01/02/2024", "2024-01-02").into_window(today),
            Err(FormError::InvalidDate)
        ));
        assert!(matches!(
            query("day", "2024-02-01", "2024-01-02").into_window(today),
            Err(FormError::InvalidDateWindow)
        ));
    }

    #[test]
    fn query_uses_camel_case_parameters() {
        let query: ReportQuery =
            serde_html_form::from_str("timeRange=week&startDate=2024-01-01&endDate=2024-01-31")
                .unwrap();
        let window = query.into_window(date(2024, 3, 31)).unwrap();
        assert_eq!(window.time_range, TimeRange::Week);
        assert_eq!(window.end_date, date(2024, 1, 31));
    }
}
