use axum::http::header::HeaderMap;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::QueryError;
use crate::filtering::sort::SortKey;

/// Upper bound on the page size a single request may ask for.
pub const MAX_PAGE_SIZE: u64 = 1000;
/// Page size used when the caller does not specify one.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// One page worth of query bounds: zero-based row offset, page size, and
/// the requested sort order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub offset: u64,
    pub limit: u64,
    pub sort: Vec<SortKey>,
}

impl PageRequest {
    #[must_use]
    pub const fn new(offset: u64, limit: u64) -> Self {
        Self {
            offset,
            limit,
            sort: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_sort(mut self, sort: Vec<SortKey>) -> Self {
        self.sort = sort;
        self
    }

    /// Reject out-of-contract bounds before any query runs.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidPageRequest`] when the limit is zero
    /// or exceeds [`MAX_PAGE_SIZE`].
    pub fn validate(&self) -> Result<(), QueryError> {
        if self.limit == 0 {
            return Err(QueryError::invalid_page_request("page size must be positive"));
        }
        if self.limit > MAX_PAGE_SIZE {
            return Err(QueryError::invalid_page_request(format!(
                "page size {} exceeds the maximum of {MAX_PAGE_SIZE}",
                self.limit
            )));
        }
        Ok(())
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}

/// Total row count inferred from the page bounds and the returned
/// content size, when the page itself proves it.
///
/// - A first page that is not full is also the last page: the content
///   size is the total.
/// - A non-first page that holds something but is not full is the last
///   page: offset plus content size is the total.
/// - A full page says nothing about rows beyond it, and an empty
///   non-first page may have overshot a smaller total or a genuinely
///   empty result; both need the count query. `None` means count.
#[must_use]
pub fn inferred_total(offset: u64, limit: u64, content_len: usize) -> Option<u64> {
    let len = content_len as u64;
    if offset == 0 && len < limit {
        Some(len)
    } else if len > 0 && len < limit {
        Some(offset + len)
    } else {
        None
    }
}

/// One page of results plus the total row count across all pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PageResult<T> {
    pub content: Vec<T>,
    pub offset: u64,
    pub limit: u64,
    pub total: u64,
}

impl<T> PageResult<T> {
    /// Assemble a page from fetched content and a resolved total.
    ///
    /// A counted total can race concurrent writes and come back smaller
    /// than the rows already fetched. Fetched rows are proof the total
    /// reaches `offset + content.len()`, so a non-empty page clamps the
    /// total up to that floor and the derived flags stay coherent. An
    /// empty page proves nothing of the sort (the offset may simply have
    /// overshot a smaller total) and the counted total stands as-is.
    #[must_use]
    pub fn new(content: Vec<T>, request: &PageRequest, total: u64) -> Self {
        debug_assert!(content.len() as u64 <= request.limit);
        let floor = if content.is_empty() {
            0
        } else {
            request.offset + content.len() as u64
        };
        Self {
            content,
            offset: request.offset,
            limit: request.limit,
            total: total.max(floor),
        }
    }

    /// Whether this is the first page. Literally `offset == 0`: an
    /// unaligned offset into the middle of the row set is not "first"
    /// even when it shows the first rows of some page size.
    #[must_use]
    pub const fn is_first(&self) -> bool {
        self.offset == 0
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.offset + self.content.len() as u64 >= self.total
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Sanitize resource name by removing control characters for HTTP headers
fn sanitize_resource_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii() && !c.is_ascii_control())
        .collect()
}

/// Build the `Content-Range` header advertising a page's span and total.
///
/// The range is `name start-end/total`; the resource name is sanitized so
/// a hostile name cannot inject header lines.
#[must_use]
pub fn content_range_headers<T>(resource_name: &str, page: &PageResult<T>) -> HeaderMap {
    let max_offset_limit = (page.offset + page.limit - 1).min(page.total);
    let safe_name = sanitize_resource_name(resource_name);
    let content_range = format!("{safe_name} {}-{max_offset_limit}/{}", page.offset, page.total);

    let mut headers = HeaderMap::new();
    if let Ok(value) = content_range.parse() {
        headers.insert("Content-Range", value);
    } else {
        // Fallback to generic header if parsing still fails
        headers.insert(
            "Content-Range",
            format!("items {}-{max_offset_limit}/{}", page.offset, page.total)
                .parse()
                .unwrap_or_else(|_| "items 0-0/0".parse().unwrap()),
        );
    }

    headers
}
