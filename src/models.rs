use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::filtering::sort::parse_sort_keys;
use crate::pagination::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PageRequest};

/// Query parameters for filtering, pagination, and sorting a list
/// endpoint.
///
/// # Filtering
/// The `filter` parameter accepts a JSON-encoded object keyed by the
/// resource's filterable fields:
/// - **Exact match:** `{"username": "member1"}`
/// - **Numeric bounds:** `{"age_gte": 20, "age_lte": 40}`
/// - **Joined columns via dot notation:** `{"teams.name": "teamB"}`
///
/// Absent, blank, or unrecognisable entries add no constraint.
///
/// # Pagination
/// Two pagination formats are supported:
/// - **React Admin format:** the `range` parameter as a JSON array, for
///   example `[0,9]`
/// - **Standard REST format:** `page` and `per_page` parameters, for
///   example `page=1&per_page=10`
///
/// # Sorting
/// Either a JSON array `sort=["age","DESC"]` or the REST pair
/// `sort_by=age&order=DESC`.
#[derive(Deserialize, IntoParams, ToSchema, Default)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// JSON-encoded filter over the resource's filterable fields.
    #[param(example = json!({
        "username": "member1",
        "age_gte": 20,
        "teams.name": "teamB"
    }))]
    pub filter: Option<String>,
    /// Range for pagination in the format "[start, end]".
    ///
    /// Example: `[0,9]`
    #[param(example = "[0,9]")]
    pub range: Option<String>,
    /// Page number for standard REST pagination (1-based).
    ///
    /// Example: `1`
    #[param(example = 1)]
    pub page: Option<u64>,
    /// Number of items per page for standard REST pagination.
    ///
    /// Example: `10`
    #[param(example = 10)]
    pub per_page: Option<u64>,
    /// Sort order for the results in the format `["column", "order"]`.
    ///
    /// Example: `["age", "DESC"]`
    #[param(example = r#"["age", "DESC"]"#)]
    pub sort: Option<String>,
    /// Sort column for standard REST format.
    ///
    /// Example: `age`
    #[param(example = "age")]
    pub sort_by: Option<String>,
    /// Sort order for standard REST format (ASC or DESC).
    ///
    /// Example: `ASC`
    #[param(example = "ASC")]
    pub order: Option<String>,
}

fn parse_range(range_str: &str) -> (u64, u64) {
    serde_json::from_str::<[u64; 2]>(range_str)
        .map(|range| (range[0], range[1]))
        .unwrap_or((0, DEFAULT_PAGE_SIZE - 1))
}

impl ListParams {
    /// Translate the pagination and sort parameters into a page request.
    ///
    /// `page`/`per_page` wins over `range`; with neither, the first
    /// default-sized page is requested. The size is clamped into
    /// `1..=MAX_PAGE_SIZE`, so a request built here always validates.
    #[must_use]
    pub fn page_request(&self) -> PageRequest {
        let (offset, limit) = if let (Some(page), Some(per_page)) = (self.page, self.per_page) {
            // Standard REST pagination (1-based page numbers)
            (page.saturating_sub(1).saturating_mul(per_page), per_page)
        } else if let Some(range) = &self.range {
            // React Admin pagination: inclusive [start, end]
            let (start, end) = parse_range(range);
            (start, end.saturating_sub(start) + 1)
        } else {
            (0, DEFAULT_PAGE_SIZE)
        };
        PageRequest::new(offset, limit.clamp(1, MAX_PAGE_SIZE)).with_sort(parse_sort_keys(self))
    }
}
