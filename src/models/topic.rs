//! Topic model and lifecycle status.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a topic.
///
/// Valid transitions are enforced by the workflow module; REJECTED and
/// COMPLETED are terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TopicStatus {
    Pending,
    Approved,
    Qualified,
    Converted,
    Completed,
    Rejected,
}

impl TopicStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TopicStatus::Pending => "PENDING",
            TopicStatus::Approved => "APPROVED",
            TopicStatus::Qualified => "QUALIFIED",
            TopicStatus::Converted => "CONVERTED",
            TopicStatus::Completed => "COMPLETED",
            TopicStatus::Rejected => "REJECTED",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "PENDING" => Some(TopicStatus::Pending),
            "APPROVED" => Some(TopicStatus::Approved),
            "QUALIFIED" => Some(TopicStatus::Qualified),
            "CONVERTED" => Some(TopicStatus::Converted),
            "COMPLETED" => Some(TopicStatus::Completed),
            "REJECTED" => Some(TopicStatus::Rejected),
            _ => None,
        }
    }
}

impl std::fmt::Display for TopicStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A community-proposed research topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub status: TopicStatus,
    /// Denormalized counter, always equal to the number of vote rows.
    pub vote_count: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vote_threshold: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub converted_at: Option<String>,
    pub proposer_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_by_id: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Request body for submitting a new topic.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTopicRequest {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

/// Request body for approving a single topic.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApproveTopicRequest {
    /// Explicit vote threshold; falls back to the configured default.
    #[serde(default)]
    pub vote_threshold: Option<i64>,
}

/// Request body for rejecting a single topic.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectTopicRequest {
    pub reason: String,
}

/// Request body for bulk approval.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkApproveRequest {
    pub topic_ids: Vec<String>,
    #[serde(default)]
    pub vote_threshold: Option<i64>,
}

/// Request body for bulk rejection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkRejectRequest {
    pub topic_ids: Vec<String>,
    pub reason: String,
}

/// Request body for bulk deletion.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkDeleteRequest {
    pub topic_ids: Vec<String>,
}

/// Result of a bulk approve/reject operation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkOutcome {
    pub count: usize,
    pub topics: Vec<Topic>,
}

/// Result of a bulk delete operation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkDeleteOutcome {
    pub count: usize,
}

/// Result of a deadline sweep run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepOutcome {
    pub processed_count: usize,
    pub qualified_count: usize,
}
