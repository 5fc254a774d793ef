//! Mounting list controllers for a single request.

use crate::controller::ListController;
use crate::controller::schema::ListSchema;
use crate::forms::lists::ReturnToForm;
use crate::query_store::UrlQueryStore;
use crate::remote::RemoteListFetcher;

/// Mounts a controller on the request URL and settles its first fetch.
///
/// Fetch failures do not surface here; they end up in the controller's
/// error and the view shows them above whatever rows it has.
pub async fn load_list<F>(
    schema: ListSchema,
    fetcher: &F,
    path: &str,
    query_string: &str,
) -> ListController<F::Entity, UrlQueryStore>
where
    F: RemoteListFetcher + ?Sized,
{
    let mut controller = ListController::new(schema, UrlQueryStore::new(path, query_string));
    let ticket = controller.refresh();
    controller.settle(fetcher, ticket).await;
    controller
}

/// URL of the list view a row was removed from, moved back a page when the
/// removed row was the only one on the last page.
pub fn url_after_removal(schema: ListSchema, path: &str, form: &ReturnToForm) -> String {
    let mut controller: ListController<(), _> =
        ListController::new(schema, UrlQueryStore::new(path, &form.return_to));
    if let Some(total) = form.total_items {
        controller.assume_total_items(total);
    }
    // The redirected request performs the fetch.
    let _ticket = controller.notify_item_removed();
    controller.store().url()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::Completion;
    use crate::controller::schema::UrlParams;
    use crate::domain::list::{ListPage, SortDirection};
    use crate::domain::product::Product;
    use crate::remote::errors::FetchError;
    use crate::remote::mock::MockProductList;

    const SCHEMA: ListSchema = ListSchema {
        page_size: 10,
        sortable: &["created_at", "price"],
        filters: &["category"],
        default_sort: ("created_at", SortDirection::Desc),
        params: UrlParams::FIELD_DIR,
    };

    fn form(return_to: &str, total_items: Option<usize>) -> ReturnToForm {
        ReturnToForm {
            return_to: return_to.to_string(),
            total_items,
        }
    }

    #[test]
    fn removal_from_a_single_row_last_page_moves_back() {
        let url = url_after_removal(SCHEMA, "/products", &form("page=3&category=2", Some(21)));
        assert_eq!(
            url,
            "/products?page=2&category=2&sortDir=desc&sortField=created_at"
        );
    }

    #[test]
    fn removal_from_a_fuller_page_keeps_it() {
        let url = url_after_removal(SCHEMA, "/products", &form("page=10", Some(95)));
        assert!(url.contains("page=10"));
    }

    #[test]
    fn removal_with_unknown_total_keeps_the_page() {
        let url = url_after_removal(SCHEMA, "/products", &form("page=3", None));
        assert!(url.contains("page=3"));
    }

    #[actix_web::test]
    async fn load_list_settles_the_first_fetch() {
        let mut fetcher = MockProductList::new();
        fetcher
            .expect_fetch()
            .withf(|query| query.page == 1 && query.filter("category") == Some("4"))
            .times(1)
            .returning(|_| Ok(ListPage::<Product>::new(Vec::new(), 0)));

        let controller = load_list(SCHEMA, &fetcher, "/products", "category=4").await;
        assert!(!controller.is_loading());
        assert_eq!(controller.total_items(), Some(0));
        assert_eq!(controller.error(), None);
    }

    #[actix_web::test]
    async fn load_list_keeps_failures_in_the_controller() {
        let mut fetcher = MockProductList::new();
        fetcher
            .expect_fetch()
            .times(1)
            .returning(|_| Err(FetchError::with_status(500, "Internal error")));

        let mut controller = load_list(SCHEMA, &fetcher, "/products", "").await;
        assert_eq!(controller.error(), Some("Internal error"));
        assert!(!controller.is_loading());

        let ticket = controller.refresh();
        assert_eq!(
            controller.apply(ticket.resolve(Ok(ListPage::new(Vec::new(), 0)))),
            Completion::Applied
        );
    }
}
