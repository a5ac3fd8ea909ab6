//! Candidate normalization and derived-field computation.
//!
//! # Responsibilities
//! - Turn raw upstream records into the outward `NormalizedProfile` shape
//! - Compute account age (human string and day count) from the creation
//!   timestamp
//! - Collapse 0/1/many candidate sets into a deterministic `LookupResult`
//!
//! # Design Decisions
//! - Age math uses a calendar-naive 365/30 approximation; the public
//!   `account_age` and `age_days` fields are defined in those terms
//! - Every default is applied here, once, rather than at call sites
//! - `now` is always a parameter so the arithmetic stays testable

use crate::profile::types::{
    Confidence, LookupResult, MultipleMatches, NormalizedProfile, ACCURACY_RANGE,
    DEFAULT_FIELD_TEXT, DISAMBIGUATION_NOTE, EMPLOYEE_LABEL, PLACEHOLDER_AVATAR, STANDARD_LABEL,
};
use crate::upstream::types::RawProfile;

const SECONDS_PER_DAY: i64 = 86_400;
const DAYS_PER_YEAR: i64 = 365;
const DAYS_PER_MONTH: i64 = 30;

/// Whole days elapsed since `created`, clamped at zero.
///
/// Upstream creation dates are in the past by contract; a clock skewed
/// behind the upstream's never produces a negative age.
pub fn age_days(created: i64, now: i64) -> i64 {
    (now - created).max(0) / SECONDS_PER_DAY
}

/// Human-readable account age: `"<years> years, <months> months"`, or just
/// `"<months> months"` during the first year.
pub fn account_age(created: i64, now: i64) -> String {
    let days = age_days(created, now);
    let years = days / DAYS_PER_YEAR;
    let months = (days % DAYS_PER_YEAR) / DAYS_PER_MONTH;

    if years > 0 {
        format!("{years} years, {months} months")
    } else {
        format!("{months} months")
    }
}

/// Normalize one upstream record, applying every default and derived field.
pub fn normalize(raw: RawProfile, now: i64) -> NormalizedProfile {
    let badges = raw.badge_counts.unwrap_or_default();
    let profile_url = raw
        .link
        .unwrap_or_else(|| format!("https://stackoverflow.com/users/{}", raw.user_id));
    let verified = if raw.is_employee {
        EMPLOYEE_LABEL
    } else {
        STANDARD_LABEL
    };

    NormalizedProfile {
        user_id: raw.user_id.to_string(),
        display_name: raw.display_name,
        profile_url,
        avatar: raw.profile_image.unwrap_or_else(|| PLACEHOLDER_AVATAR.to_string()),
        reputation: raw.reputation.to_string(),
        badges,
        total_posts: badges.total(),
        account_age: account_age(raw.creation_date, now),
        age_days: age_days(raw.creation_date, now),
        bio: raw.about_me.unwrap_or_else(|| DEFAULT_FIELD_TEXT.to_string()),
        location: raw.location.unwrap_or_else(|| DEFAULT_FIELD_TEXT.to_string()),
        verified: verified.to_string(),
        estimation_confidence: Confidence::High,
        accuracy_range: ACCURACY_RANGE.to_string(),
    }
}

/// Collapse a candidate set into the lookup outcome.
///
/// A lone candidate keeps High confidence; an ambiguous set is downgraded
/// to Medium across the board and carries the disambiguation note.
pub fn resolve_candidates(candidates: Vec<RawProfile>, now: i64) -> LookupResult {
    let mut normalized: Vec<NormalizedProfile> =
        candidates.into_iter().map(|raw| normalize(raw, now)).collect();

    match normalized.len() {
        0 => LookupResult::None,
        1 => LookupResult::Single(normalized.remove(0)),
        _ => {
            for profile in &mut normalized {
                profile.estimation_confidence = Confidence::Medium;
            }
            LookupResult::Multiple(MultipleMatches {
                users: normalized,
                note: DISAMBIGUATION_NOTE.to_string(),
            })
        }
    }
}
