//! API error taxonomy and response mapping.
//!
//! # Responsibilities
//! - Classify every failure a lookup can produce
//! - Map each class to an HTTP status and JSON error body
//! - Surface upstream status and raw body for diagnostics
//!
//! # Design Decisions
//! - Three classes only: bad input, nothing found, upstream trouble
//! - Upstream failures reuse the upstream's own status when it sent one
//! - Nothing is swallowed; the response always says what went wrong

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::upstream::UpstreamError;
use crate::validate::ValidateError;

/// Everything a lookup request can fail with.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The client-supplied username or id fails validation.
    #[error(transparent)]
    InvalidFormat(#[from] ValidateError),

    /// The lookup ran fine but matched nobody.
    #[error("no Stack Overflow user matched {0}")]
    NotFound(String),

    /// The Stack Exchange call itself failed.
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

/// JSON body returned for every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream_status: Option<u16>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream_body: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        let (status, upstream_status, upstream_body) = match self {
            ApiError::InvalidFormat(_) => (StatusCode::BAD_REQUEST, None, None),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, None, None),
            ApiError::Upstream(UpstreamError::Status { status, body, .. }) => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                Some(status),
                Some(body),
            ),
            ApiError::Upstream(_) => (StatusCode::INTERNAL_SERVER_ERROR, None, None),
        };

        let body = ErrorBody {
            error: message,
            upstream_status,
            upstream_body,
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_format_maps_to_400() {
        let err = ApiError::from(crate::validate::LookupKey::username("").unwrap_err());
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let err = ApiError::NotFound("username \"ghost\"".to_string());
        assert!(err.to_string().contains("ghost"));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_upstream_status_passes_through() {
        let err = ApiError::Upstream(UpstreamError::Status {
            status: 503,
            summary: "throttle_violation".to_string(),
            body: "{}".to_string(),
        });
        assert_eq!(err.into_response().status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_unusable_upstream_status_falls_back_to_500() {
        let err = ApiError::Upstream(UpstreamError::Status {
            status: 42,
            summary: "nonsense".to_string(),
            body: String::new(),
        });
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_timeout_maps_to_500() {
        let err = ApiError::Upstream(UpstreamError::Timeout(5));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
