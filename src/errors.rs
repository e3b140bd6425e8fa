//! # Error surface
//!
//! Two failure classes cover everything this engine can raise:
//!
//! - a caller-contract violation in the page request, reported before any
//!   query runs, and
//! - a data-access failure from the content or count query, propagated
//!   unchanged from the persistence layer.
//!
//! Predicate construction is total and never appears here: malformed or
//! absent filter values mean "no constraint", not an error.
//!
//! At the HTTP boundary database errors are logged via `tracing` and the
//! response body carries a generic message only; internal details never
//! reach clients.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::Serialize;
use std::fmt;

#[derive(Debug)]
pub enum QueryError {
    /// The page request violates the caller contract (zero or oversized
    /// page size). Raised before any collaborator query is invoked.
    InvalidPageRequest {
        /// User-facing error message
        message: String,
    },

    /// The content or count query failed. Carried unchanged; the engine
    /// performs no retry and no partial recovery.
    Database(DbErr),
}

impl QueryError {
    pub fn invalid_page_request(message: impl Into<String>) -> Self {
        Self::InvalidPageRequest {
            message: message.into(),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidPageRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the user-facing error message (sanitized)
    fn user_message(&self) -> String {
        match self {
            Self::InvalidPageRequest { message } => message.clone(),
            Self::Database(_) => "A database error occurred".to_owned(),
        }
    }

    /// Log internal error details (not sent to user)
    fn log_internal(&self) {
        match self {
            Self::Database(internal) => {
                tracing::error!(
                    error = ?internal,
                    "Database error occurred"
                );
            }
            Self::InvalidPageRequest { message } => {
                tracing::debug!(
                    error = %message,
                    "Rejected page request"
                );
            }
        }
    }
}

/// Error response sent to users (sanitized)
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for QueryError {
    fn into_response(self) -> Response {
        self.log_internal();

        let status = self.status_code();
        let response = ErrorResponse {
            error: self.user_message(),
        };

        (status, Json(response)).into_response()
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPageRequest { message } => write!(f, "invalid page request: {message}"),
            Self::Database(err) => write!(f, "data access failure: {err}"),
        }
    }
}

impl std::error::Error for QueryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Database(err) => Some(err),
            Self::InvalidPageRequest { .. } => None,
        }
    }
}

impl From<DbErr> for QueryError {
    fn from(err: DbErr) -> Self {
        Self::Database(err)
    }
}
