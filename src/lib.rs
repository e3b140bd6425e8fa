//! # pagecrate
//!
//! Filtered, count-optimised pagination queries for Axum and Sea-ORM.
//!
//! A sparse set of optional search criteria folds into exactly one
//! predicate, applied consistently to the content query (one page of
//! rows) and the count query (total matching rows). The count query is
//! skipped whenever the fetched page already proves the total: a short
//! first page is the whole result, and a short non-first page with
//! content is the last page.
//!
//! ```rust,ignore
//! use pagecrate::{PageRequest, Predicate};
//!
//! let predicate = Predicate::and_all([
//!     Predicate::text_eq("teams.name", condition.team_name.as_deref()),
//!     Predicate::int_gte("age", condition.age_gte),
//!     Predicate::int_lte("age", condition.age_lte),
//! ]);
//! let page = MemberRow::search_page(&db, &predicate, &PageRequest::new(0, 20)).await?;
//! assert!(page.content.len() <= 20);
//! ```

pub mod core;
pub mod errors;
pub mod filtering;
pub mod models;
pub mod pagination;
pub mod projection;
pub mod routes;

pub use crate::core::operations::fetch_page;
pub use crate::core::traits::{JoinSpec, PageSource, SearchResource};
pub use crate::errors::QueryError;
pub use crate::filtering::parser::{FieldKind, build_predicate};
pub use crate::filtering::predicate::{FilterValue, Predicate};
pub use crate::filtering::sort::{SortDirection, SortKey};
pub use crate::models::ListParams;
pub use crate::pagination::{PageRequest, PageResult};
pub use crate::projection::{FromJoined, project_rows};
