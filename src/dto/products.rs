use serde::Serialize;

use crate::domain::product::Product;
use crate::dto::lists::ListView;

/// Product row with its lookup names resolved.
#[derive(Debug, Serialize)]
pub struct ProductRow {
    #[serde(flatten)]
    pub product: Product,
    pub manufacturer_name: String,
    pub status_label: String,
    pub status_tone: &'static str,
}

/// Data required to render the product list template.
#[derive(Debug, Serialize)]
pub struct ProductsPageData {
    pub list: ListView<ProductRow>,
    /// Set when the lookup tables could not be loaded.
    pub lookup_error: Option<String>,
}
