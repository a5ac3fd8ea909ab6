//! Inbound lookup-key validation.
//!
//! # Responsibilities
//! - Reject malformed usernames and ids before any upstream call
//! - Carry the validated key through the lookup pipeline
//!
//! # Design Decisions
//! - Keys are constructed only through validating constructors
//! - Validation is pure; no I/O, no clock
//! - A leading zero makes a numeric id invalid (ids are canonical decimals)

use std::fmt;
use thiserror::Error;

/// Maximum accepted username length, in characters.
pub const MAX_USERNAME_LEN: usize = 40;

/// A validated lookup key: either a display-name search or an exact id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupKey {
    Username(String),
    UserId(u64),
}

/// Rejection reasons for raw inbound input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidateError {
    #[error("username must be 1-{MAX_USERNAME_LEN} characters drawn from letters, digits, spaces, and hyphens")]
    Username,
    #[error("user id must be a positive integer with no leading zero")]
    UserId,
}

impl LookupKey {
    /// Accept a username of 1-40 characters from `[A-Za-z0-9 -]`.
    pub fn username(raw: &str) -> Result<Self, ValidateError> {
        let length_ok = !raw.is_empty() && raw.len() <= MAX_USERNAME_LEN;
        let charset_ok = raw
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == ' ' || c == '-');

        if length_ok && charset_ok {
            Ok(Self::Username(raw.to_string()))
        } else {
            Err(ValidateError::Username)
        }
    }

    /// Accept a positive decimal integer with no leading zero.
    ///
    /// Values beyond `u64::MAX` are rejected rather than truncated.
    pub fn user_id(raw: &str) -> Result<Self, ValidateError> {
        if raw.is_empty() || raw.starts_with('0') || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidateError::UserId);
        }

        raw.parse::<u64>()
            .map(Self::UserId)
            .map_err(|_| ValidateError::UserId)
    }
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupKey::Username(name) => write!(f, "username \"{name}\""),
            LookupKey::UserId(id) => write!(f, "user id {id}"),
        }
    }
}
