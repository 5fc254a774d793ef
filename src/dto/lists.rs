//! View model shared by every list page.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::controller::ListController;
use crate::pagination::{Paginated, page_sequence};
use crate::query_store::{QueryStore, UrlQueryStore};

/// One entry of the page control; `number == None` is an ellipsis.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PageLink {
    pub number: Option<usize>,
    pub href: Option<String>,
    pub current: bool,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct SortLink {
    pub href: String,
    pub active: bool,
    /// `asc` or `desc` on the active column.
    pub direction: Option<&'static str>,
}

/// A selectable value of a list filter.
#[derive(Clone, Debug)]
pub struct FilterChoice {
    pub value: String,
    pub label: String,
}

impl FilterChoice {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct FilterLink {
    pub label: String,
    pub href: String,
    pub active: bool,
}

#[derive(Debug, Serialize)]
pub struct ListView<T> {
    pub rows: Paginated<T>,
    pub page_links: Vec<PageLink>,
    pub prev_href: Option<String>,
    pub next_href: Option<String>,
    /// Keyed by column name.
    pub sort_links: BTreeMap<&'static str, SortLink>,
    /// Keyed by filter name; the first link of each clears the filter.
    pub filter_links: BTreeMap<&'static str, Vec<FilterLink>>,
    pub search_term: String,
    pub search_action: String,
    /// Parameters the search form resubmits alongside the term.
    pub search_hidden: Vec<(String, String)>,
    pub error: Option<String>,
    /// Query string row actions post back to return to this view.
    pub return_to: String,
    pub total_items: Option<usize>,
}

impl<T> ListView<T> {
    /// Snapshots a settled controller.
    pub fn new(
        controller: ListController<T, UrlQueryStore>,
        filters: &[(&'static str, Vec<FilterChoice>)],
    ) -> Self {
        let schema = *controller.schema();
        let query = controller.query().clone();
        let total_pages = controller.total_pages().unwrap_or(0);
        let current = query.page.min(total_pages.max(1));

        let page_links = page_sequence(current, total_pages)
            .into_iter()
            .map(|number| PageLink {
                number,
                href: number.map(|n| controller.href_for_page(n)),
                current: number == Some(current),
            })
            .collect();

        let prev_href = (current > 1).then(|| controller.href_for_page(current - 1));
        let next_href = (current < total_pages).then(|| controller.href_for_page(current + 1));

        let sort_links = schema
            .sortable
            .iter()
            .map(|&field| {
                let active = query.sort.field == field;
                let link = SortLink {
                    href: controller.href_for_sort(field),
                    active,
                    direction: active.then(|| query.sort.direction.as_lower()),
                };
                (field, link)
            })
            .collect();

        let filter_links = filters
            .iter()
            .map(|(key, choices)| {
                let selected = query.filter(key).unwrap_or_default();
                let mut links = vec![FilterLink {
                    label: "All".to_string(),
                    href: controller.href_for_filter(key, ""),
                    active: selected.is_empty(),
                }];
                links.extend(choices.iter().map(|choice| FilterLink {
                    label: choice.label.clone(),
                    href: controller.href_for_filter(key, &choice.value),
                    active: selected == choice.value,
                }));
                (*key, links)
            })
            .collect();

        let search_hidden = schema
            .updates(&query)
            .into_iter()
            .filter(|(key, _)| key != schema.params.search && key != schema.params.page)
            .filter_map(|(key, value)| value.map(|value| (key, value)))
            .collect();

        let store = controller.store();
        let search_action = store.path().to_string();
        let return_to = store.query_string();
        let error = controller.error().map(str::to_string);
        let total_items = controller.total_items();

        let items = controller
            .into_page()
            .map(|page| page.items)
            .unwrap_or_default();

        Self {
            rows: Paginated::new(items, current, query.page_size, total_items.unwrap_or(0)),
            page_links,
            prev_href,
            next_href,
            sort_links,
            filter_links,
            search_term: query.search_term,
            search_action,
            search_hidden,
            error,
            return_to,
            total_items,
        }
    }

    /// Transforms the rows while keeping every link.
    pub fn map_rows<U>(self, f: impl FnMut(T) -> U) -> ListView<U> {
        let Paginated {
            items,
            pages,
            page,
            total_pages,
            range,
            has_prev,
            has_next,
        } = self.rows;

        ListView {
            rows: Paginated {
                items: items.into_iter().map(f).collect(),
                pages,
                page,
                total_pages,
                range,
                has_prev,
                has_next,
            },
            page_links: self.page_links,
            prev_href: self.prev_href,
            next_href: self.next_href,
            sort_links: self.sort_links,
            filter_links: self.filter_links,
            search_term: self.search_term,
            search_action: self.search_action,
            search_hidden: self.search_hidden,
            error: self.error,
            return_to: self.return_to,
            total_items: self.total_items,
        }
    }
}
