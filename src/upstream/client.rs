//! HTTP client for the Stack Exchange user API.
//!
//! # Responsibilities
//! - Issue name searches (`/users?inname=...`) capped at the configured
//!   candidate count
//! - Issue exact-id fetches (`/users/{id}`)
//! - Apply the fixed field-selection filter token on every call
//! - Enforce the per-call timeout and surface failures unchanged
//!
//! # Design Decisions
//! - One attempt per call; a failed lookup is answered, not repeated
//! - Non-2xx bodies are preserved verbatim for diagnostics
//! - Responses are gzip-compressed by the upstream; reqwest transparently
//!   inflates them

use std::time::{Duration, Instant};

use url::Url;

use crate::config::UpstreamConfig;
use crate::observability::metrics;
use crate::upstream::types::{
    summarize_error_body, RawProfile, UpstreamError, UpstreamResult, UserEnvelope,
};

/// Client for the Stack Exchange `/users` endpoints.
///
/// Built once at startup and shared across requests; `reqwest::Client`
/// multiplexes connections internally.
#[derive(Debug, Clone)]
pub struct StackExchangeClient {
    http: reqwest::Client,
    base: Url,
    site: String,
    filter: String,
    page_size: u8,
    timeout_secs: u64,
}

impl StackExchangeClient {
    /// Build a client from configuration.
    pub fn new(config: &UpstreamConfig) -> UpstreamResult<Self> {
        let mut base = Url::parse(&config.base_url)?;
        // Url::join treats a path without a trailing slash as a file and
        // would replace the API version segment.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(concat!("so-profile-api/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(UpstreamError::Transport)?;

        Ok(Self {
            http,
            base,
            site: config.site.clone(),
            filter: config.filter.clone(),
            page_size: config.max_candidates,
            timeout_secs: config.request_timeout_secs,
        })
    }

    /// Fuzzy search by display name, returning at most the configured
    /// number of candidates, highest reputation first.
    pub async fn search_users(&self, name: &str) -> UpstreamResult<Vec<RawProfile>> {
        let url = self.base.join("users")?;
        let query = [
            ("inname", name.to_string()),
            ("site", self.site.clone()),
            ("pagesize", self.page_size.to_string()),
            ("sort", "reputation".to_string()),
            ("order", "desc".to_string()),
            ("filter", self.filter.clone()),
        ];

        let envelope = self.get_envelope("search", url, &query).await?;
        tracing::debug!(
            name = %name,
            candidates = envelope.items.len(),
            has_more = envelope.has_more,
            "Username search completed"
        );
        Ok(envelope.items)
    }

    /// Exact lookup by numeric id. `Ok(None)` when the id matches nothing.
    pub async fn fetch_user(&self, id: u64) -> UpstreamResult<Option<RawProfile>> {
        let url = self.base.join(&format!("users/{id}"))?;
        let query = [
            ("site", self.site.clone()),
            ("filter", self.filter.clone()),
        ];

        let envelope = self.get_envelope("fetch", url, &query).await?;
        Ok(envelope.items.into_iter().next())
    }

    async fn get_envelope(
        &self,
        endpoint: &'static str,
        url: Url,
        query: &[(&str, String)],
    ) -> UpstreamResult<UserEnvelope> {
        let started = Instant::now();

        let response = match self.http.get(url).query(query).send().await {
            Ok(response) => response,
            Err(e) => {
                let err = self.map_transport(e);
                metrics::record_upstream(endpoint, err.outcome_label(), started);
                return Err(err);
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let summary = summarize_error_body(&body);
            tracing::warn!(
                endpoint = endpoint,
                status = status.as_u16(),
                summary = %summary,
                "Upstream call failed"
            );
            metrics::record_upstream(endpoint, format!("http_{}", status.as_u16()), started);
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                summary,
                body,
            });
        }

        let envelope: UserEnvelope = match response.json().await {
            Ok(envelope) => envelope,
            Err(e) => {
                let err = self.map_transport(e);
                metrics::record_upstream(endpoint, err.outcome_label(), started);
                return Err(err);
            }
        };

        if let Some(quota) = envelope.quota_remaining {
            tracing::debug!(endpoint = endpoint, quota_remaining = quota, "Stack Exchange quota");
        }
        metrics::record_upstream(endpoint, "ok", started);
        Ok(envelope)
    }

    fn map_transport(&self, err: reqwest::Error) -> UpstreamError {
        if err.is_timeout() {
            UpstreamError::Timeout(self.timeout_secs)
        } else {
            UpstreamError::Transport(err)
        }
    }
}

impl UpstreamError {
    fn outcome_label(&self) -> &'static str {
        match self {
            UpstreamError::Timeout(_) => "timeout",
            UpstreamError::Transport(_) => "transport",
            UpstreamError::Status { .. } => "status",
            UpstreamError::Endpoint(_) => "endpoint",
        }
    }
}
