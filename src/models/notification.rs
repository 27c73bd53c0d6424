//! Notification model.
//!
//! Notifications are written in the same transaction as the state change they
//! announce; delivery is handled by an external collaborator.

use serde::{Deserialize, Serialize};

/// A message addressed to a user about one of their topics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub user_id: String,
    pub topic_id: String,
    pub title: String,
    pub message: String,
    pub created_at: String,
}
