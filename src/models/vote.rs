//! Vote model and vote operation results.

use serde::{Deserialize, Serialize};

use super::TopicStatus;

/// A single user's vote on a topic. At most one per (topic, user) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vote {
    pub id: String,
    pub topic_id: String,
    pub user_id: String,
    pub voted_at: String,
}

/// Result of casting a vote.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteOutcome {
    pub vote_count: i64,
    /// True when this vote pushed the topic over its threshold.
    pub qualified: bool,
    pub status: TopicStatus,
}

/// Result of retracting a vote.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnvoteOutcome {
    pub vote_count: i64,
    pub status: TopicStatus,
}
