/**
 * API Error Types
 *
 * This module defines the error taxonomy for the HTTP handlers. Every
 * failure a handler can hit maps to exactly one variant, and every variant
 * maps to exactly one HTTP status code:
 *
 * - `BadRequest`   - malformed JSON body (400)
 * - `NotFound`     - update/patch target absent (404)
 * - `Store`        - any database operation failure (500)
 * - `IdsExhausted` - the ID allocator hit its retry cap (500)
 *
 * Startup failures (missing configuration, unreachable database) are not
 * represented here; they abort the process before anything is served.
 */

use thiserror::Error;
use axum::http::StatusCode;

/// Errors surfaced by the message handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body failed to decode.
    #[error("{message}")]
    BadRequest {
        /// Decode failure detail, returned to the client.
        message: String,
    },

    /// No record exists with the requested id.
    #[error("no record found with id: {id}")]
    NotFound {
        /// The id that matched nothing.
        id: String,
    },

    /// A database operation failed.
    #[error("database error: {0}")]
    Store(#[from] sqlx::Error),

    /// The ID allocator ran out of attempts without finding a free id.
    #[error("id allocation exhausted")]
    IdsExhausted,
}

impl ApiError {
    /// Create a bad-request error from a decode failure.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Create a not-found error for an id that matched nothing.
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::IdsExhausted => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_request_status() {
        let error = ApiError::bad_request("missing field `status`");
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(error.to_string(), "missing field `status`");
    }

    #[test]
    fn test_not_found_status() {
        let error = ApiError::not_found("abc12345");
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
        assert!(error.to_string().contains("abc12345"));
    }

    #[test]
    fn test_store_error_status() {
        let error = ApiError::from(sqlx::Error::PoolClosed);
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_ids_exhausted_status() {
        assert_eq!(
            ApiError::IdsExhausted.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
