//! Forms for creating and renaming categories and manufacturers.

use serde::Deserialize;
use validator::Validate;

use crate::domain::catalog::{NewCategory, NewManufacturer};
use crate::forms::FormError;
use crate::query_store::UrlQueryStore;

/// Name field shared by the category and manufacturer dialogs.
#[derive(Debug, Deserialize, Validate)]
pub struct CatalogNameForm {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// Query string of the list the dialog was opened from.
    #[serde(default)]
    #[validate(length(max = 2048))]
    pub return_to: String,
}

impl CatalogNameForm {
    pub fn list_url(&self, path: &str) -> String {
        UrlQueryStore::new(path, &self.return_to).url()
    }
}

impl TryFrom<&CatalogNameForm> for NewCategory {
    type Error = FormError;

    fn try_from(form: &CatalogNameForm) -> Result<Self, Self::Error> {
        form.validate()?;
        NewCategory::try_new(form.name.as_str()).map_err(|_| FormError::InvalidName)
    }
}

impl TryFrom<&CatalogNameForm> for NewManufacturer {
    type Error = FormError;

    fn try_from(form: &CatalogNameForm) -> Result<Self, Self::Error> {
        form.validate()?;
        NewManufacturer::try_new(form.name.as_str()).map_err(|_| FormError::InvalidName)
    }
}
