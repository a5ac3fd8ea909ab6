//! Request handlers for the lookup API.
//!
//! # Responsibilities
//! - Validate path input into a typed lookup key
//! - Drive the shared lookup pipeline for both key kinds
//! - Serve the liveness banner and the health report
//!
//! # Design Decisions
//! - Username and id lookups share one pipeline; only candidate fetching
//!   differs by key kind
//! - An upstream 400 or 404 means the subject does not exist, so both
//!   fold into the service's own not-found answer
//! - Health never consults the upstream; it reports process liveness only

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde_json::json;

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::profile::{resolve_candidates, LookupResult};
use crate::upstream::{RawProfile, UpstreamError};
use crate::validate::LookupKey;

/// Plain-text banner for the root route.
pub async fn liveness() -> &'static str {
    "Stack Overflow profile lookup service is running"
}

/// Process health report with a current timestamp.
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// Look up a profile by display name.
pub async fn lookup_by_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Response, ApiError> {
    let key = LookupKey::username(&username)?;
    run_lookup(state, key).await
}

/// Look up a profile by numeric user id.
pub async fn lookup_by_id(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Response, ApiError> {
    let key = LookupKey::user_id(&user_id)?;
    run_lookup(state, key).await
}

/// Shared lookup pipeline: fetch candidates, then branch on cardinality.
async fn run_lookup(state: AppState, key: LookupKey) -> Result<Response, ApiError> {
    let candidates = fetch_candidates(&state, &key).await?;

    match resolve_candidates(candidates, Utc::now().timestamp()) {
        LookupResult::None => Err(ApiError::NotFound(key.to_string())),
        LookupResult::Single(profile) => {
            tracing::debug!(key = %key, user_id = %profile.user_id, "Lookup resolved to one profile");
            Ok(Json(profile).into_response())
        }
        LookupResult::Multiple(matches) => {
            tracing::debug!(key = %key, count = matches.users.len(), "Lookup was ambiguous");
            Ok(Json(matches).into_response())
        }
    }
}

/// Fetch raw candidates for a key.
///
/// An upstream 400 or 404 is the API's way of saying the subject does not
/// exist; both become this service's not-found answer.
async fn fetch_candidates(state: &AppState, key: &LookupKey) -> Result<Vec<RawProfile>, ApiError> {
    let fetched = match key {
        LookupKey::Username(name) => state.upstream.search_users(name).await,
        LookupKey::UserId(id) => state
            .upstream
            .fetch_user(*id)
            .await
            .map(|found| found.into_iter().collect()),
    };

    match fetched {
        Ok(candidates) => Ok(candidates),
        Err(UpstreamError::Status { status: 400 | 404, .. }) => {
            Err(ApiError::NotFound(key.to_string()))
        }
        Err(other) => Err(ApiError::Upstream(other)),
    }
}
