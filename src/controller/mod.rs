//! The list-view state machine.
//!
//! A [`ListController`] owns the [`ListQuery`] of one list view. Every
//! operation updates the query, mirrors it into the [`QueryStore`] and hands
//! back a [`FetchTicket`] describing the fetch it triggered. Tickets are run
//! independently of the controller, so several may be in flight at once;
//! only the outcome of the most recently issued ticket is ever applied.

use thiserror::Error;

use crate::controller::schema::ListSchema;
use crate::domain::list::{ListPage, ListQuery, total_pages};
use crate::query_store::QueryStore;
use crate::remote::RemoteListFetcher;
use crate::remote::errors::FetchResult;

pub mod schema;

/// Input rejected by a controller operation. The controller state is left
/// unchanged and no fetch is issued.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    #[error("page {requested} is out of range")]
    PageOutOfRange { requested: usize },

    #[error("column `{0}` cannot be sorted")]
    UnsortableField(String),

    #[error("unknown filter `{0}`")]
    UnknownFilter(String),
}

/// A fetch issued by the controller for a snapshot of its query.
#[must_use = "a ticket describes a fetch that still has to be run"]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
    query: ListQuery,
}

impl FetchTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    /// Performs the fetch and pairs the result with this ticket's sequence.
    pub async fn run<F>(self, fetcher: &F) -> FetchOutcome<F::Entity>
    where
        F: RemoteListFetcher + ?Sized,
    {
        let result = fetcher.fetch(&self.query).await;
        FetchOutcome {
            seq: self.seq,
            result,
        }
    }

    /// Pairs an externally obtained result with this ticket.
    pub fn resolve<T>(&self, result: FetchResult<ListPage<T>>) -> FetchOutcome<T> {
        FetchOutcome {
            seq: self.seq,
            result,
        }
    }
}

#[derive(Debug)]
pub struct FetchOutcome<T> {
    pub seq: u64,
    pub result: FetchResult<ListPage<T>>,
}

/// What [`ListController::apply`] did with an outcome.
#[derive(Debug, PartialEq, Eq)]
pub enum Completion {
    /// The page was replaced.
    Applied,
    /// The error was recorded; the previous page is still shown.
    Failed,
    /// A newer ticket was issued since; nothing changed.
    Stale,
    /// The page was replaced but the current page number was past the end
    /// and has been corrected; the returned ticket fetches the valid page.
    Corrected(FetchTicket),
}

pub struct ListController<T, S> {
    schema: ListSchema,
    store: S,
    query: ListQuery,
    page: Option<ListPage<T>>,
    total_items: Option<usize>,
    loading: bool,
    error: Option<String>,
    latest_seq: u64,
}

impl<T, S: QueryStore> ListController<T, S> {
    /// Mounts a controller on `store`, hydrating the query from it.
    ///
    /// The controller starts out loading; call [`ListController::refresh`]
    /// for the initial ticket.
    pub fn new(schema: ListSchema, store: S) -> Self {
        let query = schema.hydrate(&store);
        Self {
            schema,
            store,
            query,
            page: None,
            total_items: None,
            loading: true,
            error: None,
            latest_seq: 0,
        }
    }

    pub fn schema(&self) -> &ListSchema {
        &self.schema
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn into_page(self) -> Option<ListPage<T>> {
        self.page
    }

    /// Last successfully fetched page, if any.
    pub fn page(&self) -> Option<&ListPage<T>> {
        self.page.as_ref()
    }

    pub fn items(&self) -> &[T] {
        self.page.as_ref().map_or(&[], |page| page.items.as_slice())
    }

    pub fn total_items(&self) -> Option<usize> {
        self.total_items
    }

    pub fn total_pages(&self) -> Option<usize> {
        self.total_items
            .map(|total| total_pages(total, self.query.page_size))
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn latest_seq(&self) -> u64 {
        self.latest_seq
    }

    /// Re-issues the fetch for the current query.
    pub fn refresh(&mut self) -> FetchTicket {
        self.issue()
    }

    pub fn set_search_term(&mut self, term: &str) -> FetchTicket {
        self.query.set_search_term(term);
        self.commit()
    }

    pub fn set_filter(&mut self, key: &str, value: &str) -> Result<FetchTicket, ValidationFailure> {
        if !self.schema.has_filter(key) {
            log::debug!("Rejected unknown filter {key:?}");
            return Err(ValidationFailure::UnknownFilter(key.to_string()));
        }
        self.query.set_filter(key, value);
        Ok(self.commit())
    }

    /// Sorts by `field`; sorting by the current field flips the direction.
    pub fn set_sort(&mut self, field: &str) -> Result<FetchTicket, ValidationFailure> {
        if !self.schema.is_sortable(field) {
            log::debug!("Rejected unsortable field {field:?}");
            return Err(ValidationFailure::UnsortableField(field.to_string()));
        }
        self.query.toggle_sort(field);
        Ok(self.commit())
    }

    pub fn set_page(&mut self, page: usize) -> Result<FetchTicket, ValidationFailure> {
        if page < 1 || self.last_page().is_some_and(|last| page > last) {
            log::debug!("Rejected page {page}");
            return Err(ValidationFailure::PageOutOfRange { requested: page });
        }
        self.query.page = page;
        Ok(self.commit())
    }

    /// Accounts for an item deleted elsewhere.
    ///
    /// The known total shrinks by one and the page is pulled back when it
    /// would now lie past the end. The page is always re-fetched because the
    /// removed row's replacement comes from the following page.
    pub fn notify_item_removed(&mut self) -> FetchTicket {
        if let Some(total) = self.total_items {
            let total = total.saturating_sub(1);
            self.total_items = Some(total);
            if let Some(page) = self.page.as_mut() {
                page.total_items = total;
            }
            let last = total_pages(total, self.query.page_size).max(1);
            if self.query.page > last {
                self.query.page = last;
            }
        }
        self.commit()
    }

    /// Seeds the total from an earlier render of the same list.
    pub fn assume_total_items(&mut self, total_items: usize) {
        self.total_items = Some(total_items);
    }

    /// Applies the outcome of a ticket if it is still the latest one.
    pub fn apply(&mut self, outcome: FetchOutcome<T>) -> Completion {
        if outcome.seq != self.latest_seq {
            log::debug!(
                "Dropping stale response #{} (latest is #{})",
                outcome.seq,
                self.latest_seq
            );
            return Completion::Stale;
        }

        self.loading = false;

        match outcome.result {
            Ok(page) => {
                let total = page.total_items;
                self.total_items = Some(total);
                self.page = Some(page);
                self.error = None;

                let last = total_pages(total, self.query.page_size).max(1);
                if self.query.page > last {
                    self.query.page = last;
                    return Completion::Corrected(self.commit());
                }
                Completion::Applied
            }
            Err(err) => {
                log::error!("Failed to fetch list page: {err}");
                self.error = Some(err.to_string());
                Completion::Failed
            }
        }
    }

    /// Runs `ticket`, and any correction it leads to, to completion.
    pub async fn settle<F>(&mut self, fetcher: &F, ticket: FetchTicket) -> Completion
    where
        F: RemoteListFetcher<Entity = T> + ?Sized,
    {
        let mut ticket = ticket;
        loop {
            let outcome = ticket.run(fetcher).await;
            match self.apply(outcome) {
                Completion::Corrected(next) => ticket = next,
                completion => return completion,
            }
        }
    }

    /// URL of the current state.
    pub fn current_href(&self) -> String {
        self.href_with(|_| {})
    }

    pub fn href_for_page(&self, page: usize) -> String {
        self.href_with(|query| query.page = page)
    }

    pub fn href_for_sort(&self, field: &str) -> String {
        self.href_with(|query| query.toggle_sort(field))
    }

    pub fn href_for_filter(&self, key: &str, value: &str) -> String {
        self.href_with(|query| query.set_filter(key, value))
    }

    pub fn href_for_search(&self, term: &str) -> String {
        self.href_with(|query| query.set_search_term(term))
    }

    fn last_page(&self) -> Option<usize> {
        self.total_pages().map(|pages| pages.max(1))
    }

    fn href_with(&self, change: impl FnOnce(&mut ListQuery)) -> String {
        let mut query = self.query.clone();
        change(&mut query);
        self.store.href(&self.schema.updates(&query))
    }

    fn commit(&mut self) -> FetchTicket {
        self.store.write(&self.schema.updates(&self.query));
        self.issue()
    }

    fn issue(&mut self) -> FetchTicket {
        self.latest_seq += 1;
        self.loading = true;
        FetchTicket {
            seq: self.latest_seq,
            query: self.query.clone(),
        }
    }
}
