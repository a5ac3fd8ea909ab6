//! Stack Exchange wire types and error definitions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while talking to the Stack Exchange API.
///
/// A failed call is surfaced exactly once; there is no retry layer.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Upstream answered with a non-success status. The raw body is kept
    /// for diagnostics and surfaced to the caller unchanged.
    #[error("stack exchange api answered {status}: {summary}")]
    Status {
        status: u16,
        summary: String,
        body: String,
    },

    /// The request exceeded the configured client timeout.
    #[error("stack exchange api timed out after {0} seconds")]
    Timeout(u64),

    /// Connection or protocol failure before a status was received.
    #[error("could not reach stack exchange api: {0}")]
    Transport(#[source] reqwest::Error),

    /// The configured base URL cannot produce a valid endpoint.
    #[error("invalid upstream endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
}

/// Result type for upstream operations.
pub type UpstreamResult<T> = Result<T, UpstreamError>;

/// Badge tallies as reported per user. Absent tiers count as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeCounts {
    #[serde(default)]
    pub gold: u32,
    #[serde(default)]
    pub silver: u32,
    #[serde(default)]
    pub bronze: u32,
}

impl BadgeCounts {
    /// Sum across all three tiers.
    pub fn total(&self) -> u32 {
        self.gold + self.silver + self.bronze
    }
}

/// One user record as returned by `/users` and `/users/{ids}`.
///
/// `user_id`, `display_name`, `creation_date`, and `reputation` are always
/// present per the upstream contract; everything else is optional and
/// defaulted during normalization, not here.
#[derive(Debug, Clone, Deserialize)]
pub struct RawProfile {
    pub user_id: u64,
    pub display_name: String,
    /// Seconds since the Unix epoch.
    pub creation_date: i64,
    pub reputation: u64,
    pub badge_counts: Option<BadgeCounts>,
    pub about_me: Option<String>,
    pub location: Option<String>,
    pub profile_image: Option<String>,
    pub link: Option<String>,
    #[serde(default)]
    pub is_employee: bool,
}

/// The common wrapper object every Stack Exchange response arrives in.
#[derive(Debug, Deserialize)]
pub(crate) struct UserEnvelope {
    #[serde(default)]
    pub items: Vec<RawProfile>,
    #[serde(default)]
    pub has_more: bool,
    pub quota_remaining: Option<i64>,
}

/// Error envelope carried in non-2xx upstream bodies.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorEnvelope {
    pub error_id: Option<u32>,
    pub error_name: Option<String>,
    pub error_message: Option<String>,
}

/// Condense an upstream failure body into a one-line summary for logs and
/// error messages. Falls back to the trimmed body when it is not the
/// standard error envelope.
pub(crate) fn summarize_error_body(body: &str) -> String {
    if let Ok(envelope) = serde_json::from_str::<ApiErrorEnvelope>(body) {
        let mut parts = Vec::new();
        if let Some(name) = envelope.error_name {
            parts.push(name);
        }
        if let Some(message) = envelope.error_message {
            parts.push(message);
        }
        if let Some(id) = envelope.error_id {
            parts.push(format!("error_id={id}"));
        }
        if !parts.is_empty() {
            return parts.join(", ");
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        "no error details in response body".to_string()
    } else {
        trimmed.to_string()
    }
}
