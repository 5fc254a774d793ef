//! Static description of a list view: what may be sorted and filtered, and
//! how its state is spelled in the URL.

use crate::domain::list::{ListQuery, SortDirection, SortSpec};
use crate::query_store::{QueryStore, QueryUpdates};

/// Letter case of the sort direction value in the URL.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DirectionCase {
    Upper,
    Lower,
}

/// URL parameter names used by a list view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UrlParams {
    pub search: &'static str,
    pub sort_field: &'static str,
    pub sort_direction: &'static str,
    pub page: &'static str,
    pub direction_case: DirectionCase,
}

impl UrlParams {
    /// `search`, `sortBy`, `sortOrder=ASC|DESC`, `page`.
    pub const STANDARD: UrlParams = UrlParams {
        search: "search",
        sort_field: "sortBy",
        sort_direction: "sortOrder",
        page: "page",
        direction_case: DirectionCase::Upper,
    };

    /// `search`, `sortField`, `sortDir=asc|desc`, `page`.
    pub const FIELD_DIR: UrlParams = UrlParams {
        search: "search",
        sort_field: "sortField",
        sort_direction: "sortDir",
        page: "page",
        direction_case: DirectionCase::Lower,
    };

    fn direction(&self, direction: SortDirection) -> &'static str {
        match self.direction_case {
            DirectionCase::Upper => direction.as_upper(),
            DirectionCase::Lower => direction.as_lower(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListSchema {
    pub page_size: usize,
    /// Columns the list may be sorted by.
    pub sortable: &'static [&'static str],
    /// Filter keys the list recognises.
    pub filters: &'static [&'static str],
    pub default_sort: (&'static str, SortDirection),
    pub params: UrlParams,
}

impl ListSchema {
    pub fn is_sortable(&self, field: &str) -> bool {
        self.sortable.contains(&field)
    }

    pub fn has_filter(&self, key: &str) -> bool {
        self.filters.contains(&key)
    }

    pub fn default_query(&self) -> ListQuery {
        let (field, direction) = self.default_sort;
        ListQuery::new(SortSpec::new(field, direction), self.page_size)
    }

    /// Builds the query a view starts from, falling back to defaults for
    /// anything missing or invalid in the store.
    pub fn hydrate<S: QueryStore + ?Sized>(&self, store: &S) -> ListQuery {
        let mut query = self.default_query();

        if let Some(term) = store.read(self.params.search) {
            query.search_term = term.trim().to_string();
        }

        for key in self.filters {
            if let Some(value) = store.read(key).filter(|v| !v.trim().is_empty()) {
                query.filters.insert((*key).to_string(), value.trim().to_string());
            }
        }

        match store.read(self.params.sort_field) {
            Some(field) if self.is_sortable(&field) => {
                let direction = store
                    .read(self.params.sort_direction)
                    .and_then(|raw| SortDirection::parse(&raw))
                    .unwrap_or(self.default_sort.1);
                query.sort = SortSpec::new(field, direction);
            }
            Some(field) => {
                log::debug!("Ignoring unsortable field {field:?} from the URL");
            }
            None => {
                if let Some(direction) = store
                    .read(self.params.sort_direction)
                    .and_then(|raw| SortDirection::parse(&raw))
                {
                    query.sort.direction = direction;
                }
            }
        }

        query.page = store
            .read(self.params.page)
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .filter(|page| *page >= 1)
            .unwrap_or(1);

        query
    }

    /// Full projection of `query` onto the URL parameters of this list.
    pub fn updates(&self, query: &ListQuery) -> QueryUpdates {
        let mut updates = QueryUpdates::new();
        updates.insert(
            self.params.search.to_string(),
            Some(query.search_term.clone()).filter(|s| !s.is_empty()),
        );
        for key in self.filters {
            updates.insert((*key).to_string(), query.filter(key).map(str::to_string));
        }
        updates.insert(
            self.params.sort_field.to_string(),
            Some(query.sort.field.clone()),
        );
        updates.insert(
            self.params.sort_direction.to_string(),
            Some(self.params.direction(query.sort.direction).to_string()),
        );
        updates.insert(self.params.page.to_string(), Some(query.page.to_string()));
        updates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query_store::UrlQueryStore;

    const SCHEMA: ListSchema = ListSchema {
        page_size: 10,
        sortable: &["created_at", "price"],
        filters: &["category", "manufacturer"],
        default_sort: ("created_at", SortDirection::Desc),
        params: UrlParams::FIELD_DIR,
    };

    #[test]
    fn hydrates_from_valid_url() {
        let store = UrlQueryStore::from_url(
            "/products?search=lamp&category=4&sortField=price&sortDir=asc&page=3",
        );
        let query = SCHEMA.hydrate(&store);
        assert_eq!(query.search_term, "lamp");
        assert_eq!(query.filter("category"), Some("4"));
        assert_eq!(query.filter("manufacturer"), None);
        assert_eq!(query.sort, SortSpec::new("price", SortDirection::Asc));
        assert_eq!(query.page, 3);
        assert_eq!(query.page_size, 10);
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let store = UrlQueryStore::from_url(
            "/products?sortField=password&sortDir=sideways&page=-2&color=red",
        );
        let query = SCHEMA.hydrate(&store);
        assert_eq!(query, SCHEMA.default_query());

        let store = UrlQueryStore::from_url("/products?page=0&sortDir=ASC");
        let query = SCHEMA.hydrate(&store);
        assert_eq!(query.page, 1);
        assert_eq!(query.sort, SortSpec::new("created_at", SortDirection::Asc));
    }

    #[test]
    fn updates_clear_inactive_filters_and_spell_direction() {
        let mut query = SCHEMA.default_query();
        query.set_filter("manufacturer", "2");
        let updates = SCHEMA.updates(&query);
        assert_eq!(updates["search"], None);
        assert_eq!(updates["category"], None);
        assert_eq!(updates["manufacturer"].as_deref(), Some("2"));
        assert_eq!(updates["sortDir"].as_deref(), Some("desc"));
        assert_eq!(updates["page"].as_deref(), Some("1"));
    }

    #[test]
    fn standard_params_use_upper_case_direction() {
        let schema = ListSchema {
            params: UrlParams::STANDARD,
            ..SCHEMA
        };
        let updates = schema.updates(&schema.default_query());
        assert_eq!(updates["sortOrder"].as_deref(), Some("DESC"));
        assert_eq!(updates["sortBy"].as_deref(), Some("created_at"));
    }
}
