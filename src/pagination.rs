//! Page-control computation for list views.
//!
//! `None` entries in a page sequence stand for an ellipsis.

use serde::Serialize;

/// Pages always shown at each end of the sequence.
const EDGE_PAGES: usize = 1;
/// Pages shown on each side of the current page.
const WINDOW: usize = 1;

fn get_pages(total_pages: usize, current_page: usize, edge: usize, window: usize) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let shown = |page: usize| {
        page <= edge
            || page > last_page.saturating_sub(edge)
            || page.abs_diff(current_page) <= window
    };

    let mut pages = Vec::new();
    let mut previous = 0;

    for page in (1..=last_page).filter(|&page| shown(page)) {
        match page - previous {
            1 => {}
            // A single hidden page is cheaper to show than an ellipsis.
            2 => pages.push(Some(previous + 1)),
            _ => pages.push(None),
        }
        pages.push(Some(page));
        previous = page;
    }

    pages
}

/// Page numbers to render for `current_page` out of `total_pages`.
///
/// The caller clamps `current_page` into `1..=total_pages`.
pub fn page_sequence(current_page: usize, total_pages: usize) -> Vec<Option<usize>> {
    get_pages(total_pages, current_page, EDGE_PAGES, WINDOW)
}

/// The "showing X–Y of Z" range of the current page.
#[derive(Clone, Copy, Debug, Default, Serialize, PartialEq, Eq)]
pub struct EntryRange {
    pub start: usize,
    pub end: usize,
    pub total: usize,
}

pub fn entry_range(current_page: usize, page_size: usize, total_items: usize) -> EntryRange {
    if total_items == 0 {
        return EntryRange::default();
    }

    let current_page = current_page.max(1);

    EntryRange {
        start: (current_page - 1)
            .saturating_mul(page_size)
            .saturating_add(1),
        end: current_page.saturating_mul(page_size).min(total_items),
        total: total_items,
    }
}

#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
    pub total_pages: usize,
    pub range: EntryRange,
    pub has_prev: bool,
    pub has_next: bool,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, page_size: usize, total_items: usize) -> Self {
        let current_page = if current_page == 0 { 1 } else { current_page };
        let total_pages = total_items.div_ceil(page_size.max(1));

        Self {
            items,
            pages: page_sequence(current_page, total_pages),
            page: current_page,
            total_pages,
            range: entry_range(current_page, page_size, total_items),
            has_prev: current_page > 1,
            has_next: current_page < total_pages,
        }
    }
}
