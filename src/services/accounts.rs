//! Customer account list.

use crate::controller::schema::{ListSchema, UrlParams};
use crate::domain::account::Account;
use crate::domain::list::SortDirection;
use crate::dto::accounts::AccountRow;
use crate::dto::lists::ListView;
use crate::remote::RemoteListFetcher;
use crate::services::lists::load_list;

pub const ACCOUNTS_PATH: &str = "/accounts";

pub const ACCOUNT_LIST: ListSchema = ListSchema {
    page_size: 10,
    sortable: &["user_name", "email", "created_at"],
    filters: &[],
    default_sort: ("created_at", SortDirection::Desc),
    params: UrlParams::STANDARD,
};

/// Loads the account list for the given query string.
pub async fn load_accounts<F>(fetcher: &F, query_string: &str) -> ListView<AccountRow>
where
    F: RemoteListFetcher<Entity = Account> + ?Sized,
{
    let controller = load_list(ACCOUNT_LIST, fetcher, ACCOUNTS_PATH, query_string).await;
    ListView::new(controller, &[]).map_rows(AccountRow::from)
}
