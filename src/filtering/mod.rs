//! # Dynamic filtering
//!
//! Turns a sparse set of optional search criteria into a single
//! predicate that backs both the content query and the count query of a
//! page fetch.
//!
//! The pieces, bottom up:
//!
//! - **[`predicate`]**: the predicate algebra. Atomic constructors return
//!   `Option<Predicate>` (absent input means no constraint) and
//!   [`Predicate::and_all`](predicate::Predicate::and_all) folds the
//!   present atoms into one conjunction; zero atoms fold to the universal
//!   predicate.
//! - **[`parser`]**: translates the HTTP `filter` query parameter (a
//!   JSON object keyed by declared field names, with `_gte`/`_lte`
//!   suffixes for numeric bounds) into a predicate. Total: malformed
//!   input contributes no constraint instead of failing.
//! - **[`conditions`]**: lowers a predicate into a Sea-ORM `Condition`.
//! - **[`sort`]**: engine-agnostic sort keys parsed from both supported
//!   parameter styles, resolved onto declared sortable columns.
//!
//! ## Filter parameter examples
//!
//! ```rust,ignore
//! // Exact match on a text field
//! GET /members?filter={"username": "member1"}
//!
//! // Numeric bounds combined with AND
//! GET /members?filter={"age_gte": 20, "age_lte": 40}
//!
//! // Dot notation reaches a joined column
//! GET /members?filter={"teams.name": "teamB"}
//!
//! // Sorting (either style)
//! GET /members?sort=["age","DESC"]
//! GET /members?sort_by=age&order=DESC
//! ```

pub mod conditions;
pub mod parser;
pub mod predicate;
pub mod sort;

// Re-export commonly used items
pub use conditions::predicate_condition;
pub use parser::{FieldKind, build_predicate};
pub use predicate::{FilterValue, Predicate};
pub use sort::{SortDirection, SortKey, parse_sort_keys, resolve_sort};
