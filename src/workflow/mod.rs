//! Pure workflow rules for the topic lifecycle.
//!
//! Status transitions, the qualification rule, and deadline arithmetic live
//! here so that every call site (vote, sweep, admin actions) applies the same
//! policy. Nothing in this module touches the database.

use chrono::{DateTime, Duration, Utc};

use crate::models::TopicStatus;

/// Voting window granted on approval, in days.
pub const VOTING_PERIOD_DAYS: i64 = 15;

/// Vote threshold applied when neither the request nor the environment
/// provides one.
pub const FALLBACK_VOTE_THRESHOLD: i64 = 50;

/// Inclusive bounds for an explicit vote threshold.
pub const MIN_VOTE_THRESHOLD: i64 = 1;
pub const MAX_VOTE_THRESHOLD: i64 = 1000;

/// Whether `from -> to` is a legal lifecycle transition.
///
/// Rejection is only reachable from PENDING; the same policy applies to single
/// and bulk reject. REJECTED and COMPLETED are terminal.
pub fn can_transition(from: TopicStatus, to: TopicStatus) -> bool {
    use TopicStatus::*;
    matches!(
        (from, to),
        (Pending, Approved)
            | (Pending, Rejected)
            | (Approved, Qualified)
            | (Qualified, Converted)
            | (Converted, Completed)
    )
}

/// The qualification rule: a topic qualifies once its vote count reaches the
/// threshold set at approval time.
pub fn qualifies(vote_count: i64, vote_threshold: Option<i64>) -> bool {
    vote_threshold.is_some_and(|t| vote_count >= t)
}

/// Whether a topic's voting window has closed at `now`.
///
/// Topics without a deadline (not yet approved) are never expired. An
/// unparseable stored deadline is treated as not expired rather than silently
/// closing the window.
pub fn is_expired(deadline: Option<&str>, now: DateTime<Utc>) -> bool {
    match deadline {
        Some(d) => DateTime::parse_from_rfc3339(d)
            .map(|d| d.with_timezone(&Utc) < now)
            .unwrap_or(false),
        None => false,
    }
}

/// Deadline derived from the approval timestamp.
pub fn compute_deadline(approval_date: DateTime<Utc>) -> DateTime<Utc> {
    approval_date + Duration::days(VOTING_PERIOD_DAYS)
}

/// Whether an explicit threshold is within the accepted range.
pub fn threshold_in_range(threshold: i64) -> bool {
    (MIN_VOTE_THRESHOLD..=MAX_VOTE_THRESHOLD).contains(&threshold)
}
