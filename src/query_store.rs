//! URL query-string state for list views.
//!
//! A [`QueryStore`] maps named parameters to the query string of the
//! addressable URL, so that a list view survives a reload and can be shared
//! as a link. [`UrlQueryStore`] keeps the URL in memory together with a
//! back/forward history.

use std::collections::BTreeMap;

/// Parameter updates: `Some` sets a key, `None` removes it.
pub type QueryUpdates = BTreeMap<String, Option<String>>;

pub trait QueryStore {
    /// Value of `key`; missing or empty values are `None`.
    fn read(&self, key: &str) -> Option<String>;

    /// Applies `updates`, leaving keys that are not mentioned untouched.
    fn write(&mut self, updates: &QueryUpdates);

    /// The URL the store would hold after `write(updates)`.
    fn href(&self, updates: &QueryUpdates) -> String;
}

/// In-memory URL with a navigable history of query strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UrlQueryStore {
    path: String,
    params: Vec<(String, String)>,
    back: Vec<Vec<(String, String)>>,
    forward: Vec<Vec<(String, String)>>,
}

impl UrlQueryStore {
    /// Creates a store from a path and a raw query string (without `?`).
    pub fn new(path: impl Into<String>, query_string: &str) -> Self {
        Self {
            path: path.into(),
            params: parse_query(query_string),
            back: Vec::new(),
            forward: Vec::new(),
        }
    }

    /// Creates a store from a relative URL such as `/products?page=2`.
    pub fn from_url(url: &str) -> Self {
        match url.split_once('?') {
            Some((path, query)) => Self::new(path, query),
            None => Self::new(url, ""),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query_string(&self) -> String {
        encode_query(&self.params)
    }

    /// Path plus query string.
    pub fn url(&self) -> String {
        join_url(&self.path, &self.query_string())
    }

    /// Returns to the previous query string, if any.
    pub fn back(&mut self) -> bool {
        match self.back.pop() {
            Some(previous) => {
                let current = std::mem::replace(&mut self.params, previous);
                self.forward.push(current);
                true
            }
            None => false,
        }
    }

    /// Re-applies a query string left with [`UrlQueryStore::back`].
    pub fn forward(&mut self) -> bool {
        match self.forward.pop() {
            Some(next) => {
                let current = std::mem::replace(&mut self.params, next);
                self.back.push(current);
                true
            }
            None => false,
        }
    }

    pub fn history_len(&self) -> usize {
        self.back.len() + 1
    }

    fn applied(&self, updates: &QueryUpdates) -> Vec<(String, String)> {
        let mut params = self.params.clone();
        for (key, value) in updates {
            match value.as_deref().filter(|v| !v.is_empty()) {
                Some(value) => match params.iter().position(|(k, _)| k == key) {
                    Some(index) => {
                        params[index].1 = value.to_string();
                        // Repeated keys collapse into the first occurrence.
                        let mut seen = 0;
                        params.retain(|(k, _)| {
                            if k != key {
                                return true;
                            }
                            seen += 1;
                            seen == 1
                        });
                    }
                    None => params.push((key.clone(), value.to_string())),
                },
                None => params.retain(|(k, _)| k != key),
            }
        }
        params
    }
}

impl QueryStore for UrlQueryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
            .filter(|v| !v.is_empty())
    }

    fn write(&mut self, updates: &QueryUpdates) {
        let next = self.applied(updates);
        if next == self.params {
            return;
        }
        let previous = std::mem::replace(&mut self.params, next);
        self.back.push(previous);
        self.forward.clear();
    }

    fn href(&self, updates: &QueryUpdates) -> String {
        join_url(&self.path, &encode_query(&self.applied(updates)))
    }
}

fn parse_query(query_string: &str) -> Vec<(String, String)> {
    let query_string = query_string.trim_start_matches('?');
    if query_string.is_empty() {
        return Vec::new();
    }
    match serde_html_form::from_str::<Vec<(String, String)>>(query_string) {
        Ok(params) => params,
        Err(err) => {
            log::warn!("Ignoring malformed query string {query_string:?}: {err}");
            Vec::new()
        }
    }
}

fn encode_query(params: &[(String, String)]) -> String {
    match serde_html_form::to_string(params) {
        Ok(encoded) => encoded,
        Err(err) => {
            log::error!("Failed to encode query parameters: {err}");
            String::new()
        }
    }
}

fn join_url(path: &str, query: &str) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{query}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn updates(pairs: &[(&str, Option<&str>)]) -> QueryUpdates {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.map(str::to_string)))
            .collect()
    }

    #[test]
    fn write_then_read_round_trips() {
        let mut store = UrlQueryStore::from_url("/products");
        for value in ["lamp", "a b&c", "ünïcode", "100%"] {
            store.write(&updates(&[("search", Some(value))]));
            assert_eq!(store.read("search").as_deref(), Some(value));
        }
        store.write(&updates(&[("search", None)]));
        assert_eq!(store.read("search"), None);
    }

    #[test]
    fn write_leaves_other_keys_untouched() {
        let mut store = UrlQueryStore::from_url("/products?tab=all&page=3");
        store.write(&updates(&[("page", Some("1")), ("search", Some("mug"))]));
        assert_eq!(store.read("tab").as_deref(), Some("all"));
        assert_eq!(store.read("page").as_deref(), Some("1"));
        assert_eq!(store.url(), "/products?tab=all&page=1&search=mug");
    }

    #[test]
    fn empty_values_are_absent() {
        let mut store = UrlQueryStore::from_url("/orders?status=&page=2");
        assert_eq!(store.read("status"), None);
        store.write(&updates(&[("page", Some(""))]));
        assert_eq!(store.read("page"), None);
        assert_eq!(store.url(), "/orders");
    }

    #[test]
    fn percent_encoded_values_are_decoded() {
        let store = UrlQueryStore::from_url("/accounts?search=jane%20doe&sortBy=email");
        assert_eq!(store.read("search").as_deref(), Some("jane doe"));
        assert_eq!(store.read("sortBy").as_deref(), Some("email"));
    }

    #[test]
    fn repeated_keys_collapse_on_write() {
        let mut store = UrlQueryStore::from_url("/products?category=1&category=2");
        assert_eq!(store.read("category").as_deref(), Some("1"));
        store.write(&updates(&[("category", Some("5"))]));
        assert_eq!(store.url(), "/products?category=5");
    }

    #[test]
    fn back_and_forward_restore_history_entries() {
        let mut store = UrlQueryStore::from_url("/products");
        store.write(&updates(&[("page", Some("2"))]));
        store.write(&updates(&[("page", Some("3"))]));
        assert_eq!(store.history_len(), 3);

        assert!(store.back());
        assert_eq!(store.read("page").as_deref(), Some("2"));
        assert!(store.back());
        assert_eq!(store.read("page"), None);
        assert!(!store.back());

        assert!(store.forward());
        assert_eq!(store.read("page").as_deref(), Some("2"));

        store.write(&updates(&[("search", Some("x"))]));
        assert!(!store.forward());
    }

    #[test]
    fn unchanged_write_adds_no_history() {
        let mut store = UrlQueryStore::from_url("/products?page=2");
        store.write(&updates(&[("page", Some("2")), ("search", None)]));
        assert_eq!(store.history_len(), 1);
    }

    #[test]
    fn href_previews_without_mutating() {
        let store = UrlQueryStore::from_url("/products?page=2");
        assert_eq!(
            store.href(&updates(&[("page", Some("3"))])),
            "/products?page=3"
        );
        assert_eq!(store.read("page").as_deref(), Some("2"));
    }
}
