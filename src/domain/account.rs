use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::UserId;

/// Customer account as listed by the shop API.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: UserId,
    pub user_name: String,
    pub email: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub banned: bool,
}

impl Account {
    /// Up to two upper-cased initials used when no avatar image is available.
    pub fn initials(&self) -> String {
        self.user_name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }

    /// Avatar address when it is an absolute http(s) URL.
    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar
            .as_deref()
            .filter(|url| url.starts_with("http://") || url.starts_with("https://"))
    }
}
