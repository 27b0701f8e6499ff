// Request-boundary error type
//
// Every failure leaving a handler is one of these variants, serialized as
// {"error": {"kind": ..., "message": ...}} with a status code that matches
// the kind. Storage details are logged server-side, never sent to the caller.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use venuebook_contracts::{ErrorKind, ErrorResponse};

#[derive(Debug, Error)]
pub enum ApiError {
    /// The submitted venue name matched no venue row. Expected business
    /// condition, not a server fault.
    #[error("venue not bound: {0}")]
    VenueNotFound(String),

    /// The payload passed shape validation but failed a field rule.
    #[error("{0}")]
    Validation(String),

    /// Query or connection failure from the storage layer.
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl ApiError {
    fn kind(&self) -> ErrorKind {
        match self {
            ApiError::VenueNotFound(_) => ErrorKind::VenueNotFound,
            ApiError::Validation(_) => ErrorKind::ValidationError,
            ApiError::Storage(_) => ErrorKind::StorageError,
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::VenueNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            ApiError::Storage(e) => {
                tracing::error!("storage failure: {e:#}");
                "storage failure while handling the request".to_string()
            }
            other => other.to_string(),
        };

        (
            self.status(),
            Json(ErrorResponse::new(self.kind(), message)),
        )
            .into_response()
    }
}
