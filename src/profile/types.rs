//! Outward-facing profile shapes and fixed presentation text.

use serde::{Deserialize, Serialize};

use crate::upstream::types::BadgeCounts;

/// Substitute for absent free-text fields (bio, location).
pub const DEFAULT_FIELD_TEXT: &str = "N/A";

/// Avatar shown when the upstream record carries no profile image.
pub const PLACEHOLDER_AVATAR: &str = "https://via.placeholder.com/128";

/// Verification label for Stack Exchange staff accounts.
pub const EMPLOYEE_LABEL: &str = "Stack Overflow Employee";

/// Verification label for everyone else.
pub const STANDARD_LABEL: &str = "Standard";

/// Fixed accuracy text; age math uses a 365/30-day approximation.
pub const ACCURACY_RANGE: &str = "+/- 1 day";

/// Guidance returned alongside ambiguous username searches.
pub const DISAMBIGUATION_NOTE: &str = "Multiple users matched this username. Identify the \
    intended account by its user_id or profile_url, then call /api/stackoverflow/id/{user_id}.";

/// How sure the service is that a returned profile is the requested one.
///
/// Exact-id lookups and single-candidate searches are High; anything drawn
/// from an ambiguous search is Medium. Fixed labels, not a statistic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    High,
    Medium,
}

/// The normalized summary served to API clients.
///
/// Numeric id and reputation serialize as strings; downstream consumers
/// parse this exact shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedProfile {
    pub user_id: String,
    pub display_name: String,
    pub profile_url: String,
    pub avatar: String,
    pub reputation: String,
    pub badges: BadgeCounts,
    /// Badge total. The field name is part of the public shape.
    pub total_posts: u32,
    pub account_age: String,
    pub age_days: i64,
    pub bio: String,
    pub location: String,
    pub verified: String,
    pub estimation_confidence: Confidence,
    pub accuracy_range: String,
}

/// Response body for a username search that matched several accounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultipleMatches {
    pub users: Vec<NormalizedProfile>,
    pub note: String,
}

/// Outcome of resolving upstream candidates for one lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupResult {
    /// Zero matches; the handler turns this into a 404 naming the key.
    None,
    /// Exactly one match, confidence High.
    Single(NormalizedProfile),
    /// Two or more matches, every entry downgraded to Medium.
    Multiple(MultipleMatches),
}
