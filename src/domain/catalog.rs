//! Categories and manufacturers: the lookup tables products refer to.

use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, ManufacturerId, TypeConstraintError};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    #[serde(rename = "category_id")]
    pub id: CategoryId,
    #[serde(rename = "category_name")]
    pub name: String,
}

/// Payload for creating or renaming a category.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct NewCategory {
    pub category_name: String,
}

impl NewCategory {
    pub fn try_new(name: impl Into<String>) -> Result<Self, TypeConstraintError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self {
            category_name: name,
        })
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Manufacturer {
    #[serde(rename = "manufacturer_id")]
    pub id: ManufacturerId,
    #[serde(rename = "m_name")]
    pub name: String,
}

/// Payload for creating or renaming a manufacturer.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct NewManufacturer {
    pub m_name: String,
}

impl NewManufacturer {
    pub fn try_new(name: impl Into<String>) -> Result<Self, TypeConstraintError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self { m_name: name })
    }
}

/// Finds the display name of a manufacturer in a lookup list.
pub fn manufacturer_name(manufacturers: &[Manufacturer], id: Option<ManufacturerId>) -> &str {
    id.and_then(|id| manufacturers.iter().find(|m| m.id == id))
        .map_or("Unknown", |m| m.name.as_str())
}
