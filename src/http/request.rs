//! Request identity handling.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4)
//! - Attach the ID before any other middleware runs
//! - Echo the ID back on the response
//!
//! # Design Decisions
//! - A client-supplied `x-request-id` is kept, not overwritten
//! - IDs appear in logs so one request can be followed end to end

use axum::http::{HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};

/// Header carrying the per-request correlation ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Mints a fresh UUID v4 for requests that arrive without an ID.
#[derive(Clone, Copy, Default)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = uuid::Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}
