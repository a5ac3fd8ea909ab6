//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, candidate cap sane)
//! - Check addresses and URLs parse before anything binds or dials
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServiceConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use crate::config::schema::ServiceConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    InvalidBindAddress(String),
    InvalidMetricsAddress(String),
    InvalidUpstreamUrl(String),
    EmptyField(&'static str),
    CandidateCapOutOfRange(u8),
    ZeroTimeout(&'static str),
    InboundDeadlineTooTight { inbound_secs: u64, upstream_secs: u64 },
    UnknownLogLevel(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidBindAddress(addr) => {
                write!(f, "listener.bind_address {:?} is not a socket address", addr)
            }
            ValidationError::InvalidMetricsAddress(addr) => {
                write!(f, "observability.metrics_address {:?} is not a socket address", addr)
            }
            ValidationError::InvalidUpstreamUrl(url) => {
                write!(f, "upstream.base_url {:?} is not an absolute http(s) URL", url)
            }
            ValidationError::EmptyField(field) => write!(f, "{} must not be empty", field),
            ValidationError::CandidateCapOutOfRange(n) => {
                write!(f, "upstream.max_candidates {} is outside 1..=100", n)
            }
            ValidationError::ZeroTimeout(field) => write!(f, "{} must be greater than zero", field),
            ValidationError::InboundDeadlineTooTight { inbound_secs, upstream_secs } => write!(
                f,
                "timeouts.request_secs ({}) must exceed upstream.request_timeout_secs ({})",
                inbound_secs, upstream_secs
            ),
            ValidationError::UnknownLogLevel(level) => {
                write!(f, "observability.log_level {:?} is not one of {:?}", level, LOG_LEVELS)
            }
        }
    }
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(config.listener.bind_address.clone()));
    }

    match url::Url::parse(&config.upstream.base_url) {
        Ok(parsed) if parsed.scheme() == "http" || parsed.scheme() == "https" => {}
        _ => errors.push(ValidationError::InvalidUpstreamUrl(config.upstream.base_url.clone())),
    }

    if config.upstream.site.trim().is_empty() {
        errors.push(ValidationError::EmptyField("upstream.site"));
    }
    if config.upstream.filter.trim().is_empty() {
        errors.push(ValidationError::EmptyField("upstream.filter"));
    }

    if !(1..=100).contains(&config.upstream.max_candidates) {
        errors.push(ValidationError::CandidateCapOutOfRange(config.upstream.max_candidates));
    }

    if config.upstream.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("upstream.request_timeout_secs"));
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("timeouts.request_secs"));
    } else if config.timeouts.request_secs <= config.upstream.request_timeout_secs {
        // The inbound deadline must leave room for the upstream call to
        // time out first and report properly.
        errors.push(ValidationError::InboundDeadlineTooTight {
            inbound_secs: config.timeouts.request_secs,
            upstream_secs: config.upstream.request_timeout_secs,
        });
    }

    if !LOG_LEVELS.contains(&config.observability.log_level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(config.observability.log_level.clone()));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
