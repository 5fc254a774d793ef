//! List-view state shared by the controller, the query store and the fetchers.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use serde::Serialize;

/// Direction of a sorted column.
#[derive(Clone, Copy, Debug, Default, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub const fn as_lower(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub const fn as_upper(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }

    /// Parses `asc`/`desc` in any letter case.
    pub fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("asc") {
            Some(SortDirection::Asc)
        } else if value.eq_ignore_ascii_case("desc") {
            Some(SortDirection::Desc)
        } else {
            None
        }
    }
}

impl Display for SortDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_upper())
    }
}

/// Column and direction a list is ordered by.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }
}

/// What page of a list, under what filter and sort, should be shown.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct ListQuery {
    pub search_term: String,
    /// Active filters; a key that is absent carries no constraint.
    pub filters: BTreeMap<String, String>,
    pub sort: SortSpec,
    /// 1-based page number.
    pub page: usize,
    pub page_size: usize,
}

impl ListQuery {
    pub fn new(sort: SortSpec, page_size: usize) -> Self {
        Self {
            search_term: String::new(),
            filters: BTreeMap::new(),
            sort,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Returns the value of an active filter.
    pub fn filter(&self, key: &str) -> Option<&str> {
        self.filters.get(key).map(String::as_str)
    }

    /// Sets the search term and returns to the first page.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into().trim().to_string();
        self.page = 1;
    }

    /// Sets or clears a filter and returns to the first page.
    pub fn set_filter(&mut self, key: &str, value: &str) {
        let value = value.trim();
        if value.is_empty() {
            self.filters.remove(key);
        } else {
            self.filters.insert(key.to_string(), value.to_string());
        }
        self.page = 1;
    }

    /// Sorts by `field`, toggling the direction when it is already the
    /// sorted column, and returns to the first page.
    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort.field == field {
            self.sort.direction = self.sort.direction.toggled();
        } else {
            self.sort = SortSpec::new(field, SortDirection::Asc);
        }
        self.page = 1;
    }

    /// Zero-based offset of the first item on the current page.
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }
}

/// A fetched page of entities plus the total number of matching items.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub total_items: usize,
}

impl<T> ListPage<T> {
    pub fn new(items: Vec<T>, total_items: usize) -> Self {
        Self { items, total_items }
    }

    pub fn total_pages(&self, page_size: usize) -> usize {
        total_pages(self.total_items, page_size)
    }
}

/// Number of pages needed for `total_items`; zero when there are no items.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query() -> ListQuery {
        ListQuery::new(SortSpec::new("created_at", SortDirection::Desc), 10)
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(20, 10), 2);
        assert_eq!(total_pages(21, 10), 3);
        assert_eq!(total_pages(95, 10), 10);
    }

    #[test]
    fn toggle_sort_switches_direction_on_same_field() {
        let mut q = query();
        q.toggle_sort("price");
        assert_eq!(q.sort, SortSpec::new("price", SortDirection::Asc));
        q.toggle_sort("price");
        assert_eq!(q.sort.direction, SortDirection::Desc);
        q.toggle_sort("price");
        assert_eq!(q.sort.direction, SortDirection::Asc);
    }

    #[test]
    fn empty_filter_value_clears_the_filter() {
        let mut q = query();
        q.page = 4;
        q.set_filter("category", " 3 ");
        assert_eq!(q.filter("category"), Some("3"));
        assert_eq!(q.page, 1);
        q.set_filter("category", "  ");
        assert_eq!(q.filter("category"), None);
    }

    #[test]
    fn offset_saturates_on_huge_pages() {
        let mut query = query();
        query.page = usize::MAX;
        assert_eq!(query.offset(), usize::MAX);
    }

    #[test]
    fn direction_parsing_ignores_case() {
        assert_eq!(SortDirection::parse("DESC"), Some(SortDirection::Desc));
        assert_eq!(SortDirection::parse("asc"), Some(SortDirection::Asc));
        assert_eq!(SortDirection::parse("up"), None);
    }
}
