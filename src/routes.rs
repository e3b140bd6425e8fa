//! Thin HTTP adapter: translates query parameters into a predicate plus
//! a page request, runs the search, and renders the page result. No
//! query logic lives here.

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use hyper::HeaderMap;
use sea_orm::DatabaseConnection;
use serde::Serialize;

use crate::core::traits::SearchResource;
use crate::errors::QueryError;
use crate::filtering::parser::build_predicate;
use crate::models::ListParams;
use crate::pagination::{PageResult, content_range_headers};

/// List one page of a resource.
///
/// The response body is the serialized [`PageResult`]; a `Content-Range`
/// header mirrors the page span and total for range-aware clients.
///
/// # Errors
///
/// `400 Bad Request` for an out-of-contract page request, `500` with a
/// sanitized body when the data source fails.
pub async fn list_handler<T>(
    Query(params): Query<ListParams>,
    State(db): State<DatabaseConnection>,
) -> Result<(HeaderMap, Json<PageResult<T>>), QueryError>
where
    T: SearchResource + Serialize,
{
    let predicate = build_predicate(params.filter.as_deref(), &T::filterable_fields());
    let page = params.page_request();
    let result = T::search_page(&db, &predicate, &page).await?;
    let headers = content_range_headers(T::RESOURCE_NAME_PLURAL, &result);
    Ok((headers, Json(result)))
}

/// A router exposing one GET list route for the resource.
#[must_use]
pub fn list_router<T>(path: &str, db: &DatabaseConnection) -> Router
where
    T: SearchResource + Serialize + 'static,
{
    Router::new()
        .route(path, get(list_handler::<T>))
        .with_state(db.clone())
}
