// src/application/dto/pagination.rs
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::article::PageWindow;

/// Fixed number of articles shown on one listing page.
pub const ARTICLES_PER_PAGE: u64 = 8;

/// `ceil(total_items / page_size)`. An empty result set yields `0` pages;
/// callers bound-check against [`is_page_in_range`], which treats that as a
/// single page.
pub const fn page_count(total_items: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

/// `requested <= max(page_count, 1)`. There is no lower bound here;
/// [`PageRequest::parse`] rejects non-positive pages before they get this far.
pub fn is_page_in_range(requested: i64, page_count: u64) -> bool {
    let last_page = i64::try_from(page_count.max(1)).unwrap_or(i64::MAX);
    requested <= last_page
}

/// Page requested by a client through the `activePage` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 1 }
    }
}

impl PageRequest {
    pub fn parse(raw: Option<&str>) -> ApplicationResult<Self> {
        let Some(raw) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
            return Ok(Self::default());
        };

        let page = raw.parse::<i64>().map_err(|_| {
            ApplicationError::malformed(format!("activePage must be an integer, got '{raw}'"))
        })?;
        if page < 1 {
            return Err(ApplicationError::malformed(format!(
                "activePage must be positive, got {page}"
            )));
        }

        Ok(Self { page })
    }

    pub const fn page(&self) -> i64 {
        self.page
    }

    pub fn window(&self) -> PageWindow {
        let index = u64::try_from(self.page - 1).unwrap_or_default();
        PageWindow {
            offset: index.saturating_mul(ARTICLES_PER_PAGE),
            limit: ARTICLES_PER_PAGE,
        }
    }

    /// Returns the number of pages for `total_items`, or `Page <n> not found`
    /// when the requested page lies past the last one.
    pub fn ensure_in_range(&self, total_items: u64) -> ApplicationResult<u64> {
        let pages = page_count(total_items, ARTICLES_PER_PAGE);
        if !is_page_in_range(self.page, pages) {
            tracing::debug!(page = self.page, pages, "requested page out of range");
            return Err(ApplicationError::page_not_found(self.page));
        }
        Ok(pages)
    }
}
