//! Descriptors of the shop API list endpoints.
//!
//! Each list endpoint names its query parameters differently and wraps its
//! rows differently; a [`ListEndpoint`] captures both so that every list is
//! requested from a [`ListQuery`] and normalised into a [`ListPage`].

use std::cmp::Ordering;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::controller::schema::DirectionCase;
use crate::domain::list::{ListPage, ListQuery, SortDirection, SortSpec};
use crate::remote::errors::{FetchError, FetchResult};

/// Where the total of a paged response comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TotalField {
    /// Number of matching items.
    Count(&'static str),
    /// Number of pages; the item total is estimated as `pages * limit`.
    PageCount(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseShape {
    /// JSON object holding one page of rows and a total.
    Paged {
        items: &'static str,
        total: TotalField,
    },
    /// Bare JSON array holding the whole collection.
    FullCollection,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListEndpoint {
    pub path: &'static str,
    pub page_param: &'static str,
    pub limit_param: &'static str,
    pub search_param: &'static str,
    pub sort_field_param: &'static str,
    pub sort_direction_param: &'static str,
    pub direction_case: DirectionCase,
    /// Filter key in the list query mapped to its API parameter name.
    pub filter_params: &'static [(&'static str, &'static str)],
    pub shape: ResponseShape,
}

impl ListEndpoint {
    const BASE: ListEndpoint = ListEndpoint {
        path: "/",
        page_param: "page",
        limit_param: "limit",
        search_param: "search",
        sort_field_param: "sort_field",
        sort_direction_param: "sort_dir",
        direction_case: DirectionCase::Lower,
        filter_params: &[],
        shape: ResponseShape::FullCollection,
    };

    /// Query parameters sent for `query`; empty search and filters are omitted.
    pub fn request_params(&self, query: &ListQuery) -> Vec<(&'static str, String)> {
        let mut params = vec![
            (self.page_param, query.page.to_string()),
            (self.limit_param, query.page_size.to_string()),
        ];

        if !query.search_term.is_empty() {
            params.push((self.search_param, query.search_term.clone()));
        }

        for (key, value) in &query.filters {
            if value.is_empty() {
                continue;
            }
            match self.filter_params.iter().find(|(name, _)| name == key) {
                Some((_, api_name)) => params.push((*api_name, value.clone())),
                None => log::debug!("Endpoint {} has no filter {key:?}", self.path),
            }
        }

        let direction = match self.direction_case {
            DirectionCase::Upper => query.sort.direction.as_upper(),
            DirectionCase::Lower => query.sort.direction.as_lower(),
        };
        params.push((self.sort_field_param, query.sort.field.clone()));
        params.push((self.sort_direction_param, direction.to_string()));

        params
    }

    /// Normalises a response body into a page of `T`.
    pub fn parse_page<T: DeserializeOwned>(
        &self,
        query: &ListQuery,
        mut body: Value,
    ) -> FetchResult<ListPage<T>> {
        match self.shape {
            ResponseShape::Paged { items, total } => {
                let rows = body
                    .get_mut(items)
                    .map(Value::take)
                    .ok_or_else(|| FetchError::parse(format!("missing field `{items}`")))?;
                let rows: Vec<T> = deserialize_rows(rows, items)?;

                let total_items = match total {
                    TotalField::Count(key) => read_count(&body, key)?,
                    TotalField::PageCount(key) => {
                        page_count_total(read_count(&body, key)?, query, rows.len())
                            .ok_or_else(|| FetchError::parse(format!("field `{key}` is too large")))?
                    }
                };

                Ok(ListPage::new(rows, total_items))
            }
            ResponseShape::FullCollection => {
                let Value::Array(mut rows) = body else {
                    return Err(FetchError::parse("expected a JSON array"));
                };
                rows.retain(|row| self.matches(query, row));
                sort_rows(&mut rows, &query.sort);

                let total_items = rows.len();
                let window = rows
                    .into_iter()
                    .skip(query.offset())
                    .take(query.page_size)
                    .collect();
                let items = deserialize_rows(Value::Array(window), "rows")?;
                Ok(ListPage::new(items, total_items))
            }
        }
    }

    /// Whether a row of a full collection passes the search term and the
    /// active filters.
    fn matches(&self, query: &ListQuery, row: &Value) -> bool {
        let term = query.search_term.to_lowercase();
        if !term.is_empty() {
            let found = row.as_object().is_some_and(|fields| {
                fields.values().any(|value| {
                    text_of(value).is_some_and(|text| text.to_lowercase().contains(&term))
                })
            });
            if !found {
                return false;
            }
        }

        query.filters.iter().all(|(key, expected)| {
            match self.filter_params.iter().find(|(name, _)| name == key) {
                Some((_, api_name)) => row
                    .get(*api_name)
                    .and_then(text_of)
                    .is_some_and(|actual| actual.eq_ignore_ascii_case(expected)),
                None => true,
            }
        })
    }
}

fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

fn number_of(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

/// Orders rows by the sort field; missing values sort first.
fn sort_rows(rows: &mut [Value], sort: &SortSpec) {
    let key = sort.field.as_str();
    rows.sort_by(|a, b| {
        let a = a.get(key).filter(|v| !v.is_null());
        let b = b.get(key).filter(|v| !v.is_null());
        let ordering = match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => match (number_of(a), number_of(b)) {
                (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
                _ => text_of(a)
                    .unwrap_or_default()
                    .to_lowercase()
                    .cmp(&text_of(b).unwrap_or_default().to_lowercase()),
            },
        };
        match sort.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

fn deserialize_rows<T: DeserializeOwned>(rows: Value, field: &str) -> FetchResult<Vec<T>> {
    if !rows.is_array() {
        return Err(FetchError::parse(format!("field `{field}` is not an array")));
    }
    serde_json::from_value(rows).map_err(|err| FetchError::parse(format!("field `{field}`: {err}")))
}

/// Item total of a response that only reports its page count. Exact on the
/// last page, `pages * limit` elsewhere.
fn page_count_total(pages: usize, query: &ListQuery, rows_on_page: usize) -> Option<usize> {
    if pages > 0 && query.page == pages {
        (pages - 1)
            .checked_mul(query.page_size)?
            .checked_add(rows_on_page)
    } else {
        pages.checked_mul(query.page_size)
    }
}

fn read_count(body: &Value, key: &str) -> FetchResult<usize> {
    let value = body
        .get(key)
        .ok_or_else(|| FetchError::parse(format!("missing field `{key}`")))?;
    let count = match value {
        Value::Number(number) => number.as_u64(),
        Value::String(raw) => raw.trim().parse::<u64>().ok(),
        _ => None,
    };
    count
        .and_then(|count| usize::try_from(count).ok())
        .ok_or_else(|| FetchError::parse(format!("field `{key}` is not a count")))
}

/// Customer accounts: `{ "data": [...], "totalPage": n }`.
pub const ACCOUNTS: ListEndpoint = ListEndpoint {
    path: "/users",
    shape: ResponseShape::Paged {
        items: "data",
        total: TotalField::PageCount("totalPage"),
    },
    ..ListEndpoint::BASE
};

/// Products: `{ "products": [...], "total": n }`.
pub const PRODUCTS: ListEndpoint = ListEndpoint {
    path: "/products/json",
    filter_params: &[
        ("category", "category_id"),
        ("manufacturer", "manufacturer_id"),
    ],
    shape: ResponseShape::Paged {
        items: "products",
        total: TotalField::Count("total"),
    },
    ..ListEndpoint::BASE
};

pub const CATEGORIES: ListEndpoint = ListEndpoint {
    path: "/categories/api",
    ..ListEndpoint::BASE
};

pub const MANUFACTURERS: ListEndpoint = ListEndpoint {
    path: "/manufacturers/api",
    ..ListEndpoint::BASE
};

pub const ORDERS: ListEndpoint = ListEndpoint {
    path: "/order/all",
    sort_field_param: "sortField",
    sort_direction_param: "sortDir",
    direction_case: DirectionCase::Upper,
    filter_params: &[("status", "paymentStatus")],
    ..ListEndpoint::BASE
};

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;
    use crate::domain::list::{SortDirection, SortSpec};

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: i64,
    }

    fn query(page: usize) -> ListQuery {
        let mut query = ListQuery::new(SortSpec::new("created_at", SortDirection::Desc), 2);
        query.page = page;
        query
    }

    #[test]
    fn product_params_rename_filters_and_skip_empty_search() {
        let mut q = query(1);
        q.set_filter("category", "7");
        let params = PRODUCTS.request_params(&q);
        assert_eq!(
            params,
            vec![
                ("page", "1".to_string()),
                ("limit", "2".to_string()),
                ("category_id", "7".to_string()),
                ("sort_field", "created_at".to_string()),
                ("sort_dir", "desc".to_string()),
            ]
        );
    }

    #[test]
    fn order_params_use_camel_case_sort_and_upper_direction() {
        let mut q = query(3);
        q.search_term = "ann".to_string();
        q.filters.insert("status".to_string(), "paid".to_string());
        q.filters.insert("unknown".to_string(), "x".to_string());
        let params = ORDERS.request_params(&q);
        assert!(params.contains(&("search", "ann".to_string())));
        assert!(params.contains(&("paymentStatus", "paid".to_string())));
        assert!(params.contains(&("sortDir", "DESC".to_string())));
        assert!(!params.iter().any(|(_, v)| v == "x"));
    }

    #[test]
    fn counted_page_is_normalised() {
        let body = json!({"products": [{"id": 1}, {"id": 2}], "total": "13"});
        let page: ListPage<Row> = PRODUCTS.parse_page(&query(1), body).unwrap();
        assert_eq!(page.items, vec![Row { id: 1 }, Row { id: 2 }]);
        assert_eq!(page.total_items, 13);
    }

    #[test]
    fn page_count_is_scaled_by_limit() {
        let body = json!({"data": [{"id": 1}, {"id": 2}], "totalPage": 4});
        let page: ListPage<Row> = ACCOUNTS.parse_page(&query(1), body).unwrap();
        assert_eq!(page.total_items, 8);
    }

    #[test]
    fn page_count_total_is_exact_on_the_last_page() {
        let body = json!({"data": [{"id": 7}], "totalPage": 4});
        let page: ListPage<Row> = ACCOUNTS.parse_page(&query(4), body).unwrap();
        assert_eq!(page.total_items, 7);
    }

    #[test]
    fn oversized_page_count_is_a_parse_failure() {
        let body = json!({"data": [], "totalPage": u64::MAX});
        assert!(matches!(
            ACCOUNTS.parse_page::<Row>(&query(1), body),
            Err(FetchError::Parse(_))
        ));
    }

    #[test]
    fn huge_page_number_yields_an_empty_window() {
        let body = json!([{"id": 1}, {"id": 2}, {"id": 3}]);
        let page: ListPage<Row> = CATEGORIES.parse_page(&query(usize::MAX), body).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total_items, 3);
    }

    #[test]
    fn full_collection_is_windowed() {
        let body = json!([{"id": 1}, {"id": 2}, {"id": 3}, {"id": 4}, {"id": 5}]);
        let page: ListPage<Row> = CATEGORIES.parse_page(&query(3), body).unwrap();
        assert_eq!(page.items, vec![Row { id: 5 }]);
        assert_eq!(page.total_items, 5);
    }

    #[test]
    fn full_collection_is_searched_filtered_and_sorted_before_windowing() {
        let body = json!([
            {"id": 1, "name": "Desk", "paymentStatus": "paid", "total": "12.50"},
            {"id": 2, "name": "Lamp", "paymentStatus": "pending", "total": 3},
            {"id": 3, "name": "Desk lamp", "paymentStatus": "paid", "total": 40},
            {"id": 4, "name": "Chair", "paymentStatus": "paid", "total": null},
        ]);

        let mut q = ListQuery::new(SortSpec::new("total", SortDirection::Desc), 10);
        q.set_filter("status", "PAID");
        let page: ListPage<Row> = ORDERS.parse_page(&q, body.clone()).unwrap();
        assert_eq!(page.items, vec![Row { id: 3 }, Row { id: 1 }, Row { id: 4 }]);
        assert_eq!(page.total_items, 3);

        let mut q = ListQuery::new(SortSpec::new("name", SortDirection::Asc), 10);
        q.set_search_term("LAMP");
        let page: ListPage<Row> = ORDERS.parse_page(&q, body).unwrap();
        assert_eq!(page.items, vec![Row { id: 3 }, Row { id: 2 }]);
    }

    #[test]
    fn malformed_bodies_are_parse_failures() {
        let missing_total = json!({"products": []});
        assert!(matches!(
            PRODUCTS.parse_page::<Row>(&query(1), missing_total),
            Err(FetchError::Parse(_))
        ));

        let wrong_rows = json!({"products": {"id": 1}, "total": 1});
        assert!(matches!(
            PRODUCTS.parse_page::<Row>(&query(1), wrong_rows),
            Err(FetchError::Parse(_))
        ));

        let bad_row = json!([{"id": "one"}]);
        assert!(matches!(
            ORDERS.parse_page::<Row>(&query(1), bad_row),
            Err(FetchError::Parse(_))
        ));

        let not_array = json!({"rows": []});
        assert!(matches!(
            CATEGORIES.parse_page::<Row>(&query(1), not_array),
            Err(FetchError::Parse(_))
        ));
    }
}
