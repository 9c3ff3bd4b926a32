use serde::Serialize;

use crate::domain::types::PageSize;

/// Largest number of numeric page buttons shown at once.
pub const WINDOW_MAX: usize = 5;

/// Builds the page-number window. `None` marks an ellipsis.
///
/// `current_page` must already be clamped to `1..=total_pages`.
pub fn page_window(total_pages: usize, current_page: usize) -> Vec<Option<usize>> {
    let last_page = total_pages.max(1);

    if last_page <= WINDOW_MAX {
        return (1..=last_page).map(Some).collect();
    }

    let mut pages = Vec::with_capacity(WINDOW_MAX + 2);

    if current_page <= 3 {
        pages.extend((1..=4).map(Some));
        pages.push(None);
        pages.push(Some(last_page));
    } else if current_page >= last_page - 2 {
        pages.push(Some(1));
        pages.push(None);
        pages.extend((last_page - 3..=last_page).map(Some));
    } else {
        pages.push(Some(1));
        pages.push(None);
        pages.extend((current_page - 1..=current_page + 1).map(Some));
        pages.push(None);
        pages.push(Some(last_page));
    }

    pages
}

/// Page arithmetic for a sequence of `total_items` records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PageState {
    pub total_items: usize,
    pub per_page: usize,
    pub total_pages: usize,
    /// Requested page clamped to `1..=total_pages`.
    pub page: usize,
}

impl PageState {
    /// Accepts any requested page number, including zero and negatives.
    pub fn new(total_items: usize, page_size: PageSize, requested: i64) -> Self {
        let per_page = page_size.get();
        let total_pages = total_items.div_ceil(per_page).max(1);
        let page = usize::try_from(requested.max(1))
            .unwrap_or(usize::MAX)
            .min(total_pages);

        Self {
            total_items,
            per_page,
            total_pages,
            page,
        }
    }

    /// Half-open index range of the visible slice.
    pub fn bounds(&self) -> (usize, usize) {
        let start = ((self.page - 1) * self.per_page).min(self.total_items);
        let end = (self.page * self.per_page).min(self.total_items);
        (start, end)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// 1-based position of the first visible record, 0 when empty.
    pub fn first_item(&self) -> usize {
        let (start, end) = self.bounds();
        if start == end { 0 } else { start + 1 }
    }

    pub fn last_item(&self) -> usize {
        self.bounds().1
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub first_item: usize,
    pub last_item: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl<T: Clone> Paginated<T> {
    /// Copies the visible slice of `all` for the requested page.
    pub fn from_slice(all: &[T], page_size: PageSize, requested: i64) -> Self {
        let state = PageState::new(all.len(), page_size, requested);
        let (start, end) = state.bounds();
        Self::new(all[start..end].to_vec(), state)
    }
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, state: PageState) -> Self {
        Self {
            items,
            pages: page_window(state.total_pages, state.page),
            page: state.page,
            per_page: state.per_page,
            total_pages: state.total_pages,
            total_items: state.total_items,
            first_item: state.first_item(),
            last_item: state.last_item(),
            has_previous: state.has_previous(),
            has_next: state.has_next(),
        }
    }
}
