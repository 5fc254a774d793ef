use serde::Deserialize;

use crate::query_store::UrlQueryStore;

/// Hidden fields posted by row actions so the handler can send the user back
/// to the list view they acted from.
#[derive(Debug, Default, Deserialize)]
pub struct ReturnToForm {
    /// Query string of the list view.
    #[serde(default)]
    pub return_to: String,
    /// Total number of items the list view was rendered with.
    #[serde(default)]
    pub total_items: Option<usize>,
}

impl ReturnToForm {
    /// The list view at `path`, normalised through the query store.
    pub fn list_url(&self, path: &str) -> String {
        UrlQueryStore::new(path, &self.return_to).url()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_url_is_rooted_at_the_given_path() {
        let form = ReturnToForm {
            return_to: "search=desk%20lamp&page=2".to_string(),
            total_items: Some(12),
        };
        assert_eq!(form.list_url("/products"), "/products?search=desk+lamp&page=2");
    }

    #[test]
    fn missing_return_to_yields_bare_path() {
        assert_eq!(ReturnToForm::default().list_url("/categories"), "/categories");
    }
}
