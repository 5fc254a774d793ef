use serde::Serialize;

use crate::domain::account::Account;

/// Account row with the avatar fallback resolved.
#[derive(Debug, Serialize)]
pub struct AccountRow {
    #[serde(flatten)]
    pub account: Account,
    pub initials: String,
    pub avatar_url: Option<String>,
}

impl From<Account> for AccountRow {
    fn from(account: Account) -> Self {
        Self {
            initials: account.initials(),
            avatar_url: account.avatar_url().map(str::to_string),
            account,
        }
    }
}
