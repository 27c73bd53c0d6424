//! Admin endpoints: approval, rejection, deadline sweep, conversion, deletion.
//!
//! All routes here sit behind the admin key middleware; the admin's own
//! identity still arrives via the x-user-id header.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{success, ApiResult};
use crate::auth::Identity;
use crate::errors::AppError;
use crate::models::{
    ApproveTopicRequest, BulkApproveRequest, BulkDeleteOutcome, BulkDeleteRequest, BulkOutcome,
    BulkRejectRequest, ConversionOutcome, RejectTopicRequest, SweepOutcome, Topic,
};
use crate::workflow;
use crate::AppState;

/// Resolve the threshold for an approval: explicit value (validated) or the
/// configured default.
fn resolve_threshold(requested: Option<i64>, state: &AppState) -> Result<i64, AppError> {
    match requested {
        Some(t) if !workflow::threshold_in_range(t) => Err(AppError::Validation(format!(
            "voteThreshold must be between {} and {}",
            workflow::MIN_VOTE_THRESHOLD,
            workflow::MAX_VOTE_THRESHOLD
        ))),
        Some(t) => Ok(t),
        None => Ok(state.config.default_vote_threshold),
    }
}

fn validate_reason(reason: &str) -> Result<(), AppError> {
    if reason.trim().is_empty() {
        return Err(AppError::Validation(
            "Rejection reason is required".to_string(),
        ));
    }
    Ok(())
}

/// Validate a bulk id list: must be non-empty; duplicates are collapsed so a
/// repeated id cannot apply twice or notify the proposer twice.
fn validate_ids(topic_ids: &[String]) -> Result<Vec<String>, AppError> {
    if topic_ids.is_empty() {
        return Err(AppError::Validation("No topic ids provided".to_string()));
    }
    let mut seen = std::collections::HashSet::new();
    Ok(topic_ids
        .iter()
        .filter(|id| seen.insert(id.as_str()))
        .cloned()
        .collect())
}

/// POST /api/admin/topics/:id/approve - Approve a pending topic.
pub async fn approve_topic(
    State(state): State<AppState>,
    Path(id): Path<String>,
    identity: Identity,
    Json(request): Json<ApproveTopicRequest>,
) -> ApiResult<Topic> {
    let threshold = resolve_threshold(request.vote_threshold, &state)?;
    let topic = state
        .repo
        .approve_topic(&id, threshold, &identity.user_id)
        .await?;
    tracing::info!(topic_id = %id, threshold, admin = %identity.user_id, "topic approved");
    success(topic)
}

/// POST /api/admin/topics/:id/reject - Reject a pending topic.
pub async fn reject_topic(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<RejectTopicRequest>,
) -> ApiResult<Topic> {
    validate_reason(&request.reason)?;
    let topic = state.repo.reject_topic(&id, &request.reason).await?;
    tracing::info!(topic_id = %id, "topic rejected");
    success(topic)
}

/// POST /api/admin/topics/bulk-approve - Approve a batch of pending topics.
pub async fn bulk_approve(
    State(state): State<AppState>,
    identity: Identity,
    Json(request): Json<BulkApproveRequest>,
) -> ApiResult<BulkOutcome> {
    let topic_ids = validate_ids(&request.topic_ids)?;
    let threshold = resolve_threshold(request.vote_threshold, &state)?;
    let topics = state
        .repo
        .bulk_approve(&topic_ids, threshold, &identity.user_id)
        .await?;
    tracing::info!(count = topics.len(), admin = %identity.user_id, "bulk approval applied");
    success(BulkOutcome {
        count: topics.len(),
        topics,
    })
}

/// POST /api/admin/topics/bulk-reject - Reject a batch of pending topics.
pub async fn bulk_reject(
    State(state): State<AppState>,
    Json(request): Json<BulkRejectRequest>,
) -> ApiResult<BulkOutcome> {
    let topic_ids = validate_ids(&request.topic_ids)?;
    validate_reason(&request.reason)?;
    let topics = state.repo.bulk_reject(&topic_ids, &request.reason).await?;
    tracing::info!(count = topics.len(), "bulk rejection applied");
    success(BulkOutcome {
        count: topics.len(),
        topics,
    })
}

/// POST /api/admin/topics/bulk-delete - Delete a batch of topics with their
/// votes, notifications, and research.
pub async fn bulk_delete(
    State(state): State<AppState>,
    Json(request): Json<BulkDeleteRequest>,
) -> ApiResult<BulkDeleteOutcome> {
    let topic_ids = validate_ids(&request.topic_ids)?;
    let count = state.repo.bulk_delete(&topic_ids).await?;
    tracing::info!(count, "bulk delete applied");
    success(BulkDeleteOutcome { count })
}

/// POST /api/admin/topics/process-deadlines - Run the deadline sweep.
pub async fn process_deadlines(State(state): State<AppState>) -> ApiResult<SweepOutcome> {
    let outcome = state.repo.process_deadlines().await?;
    tracing::info!(
        processed = outcome.processed_count,
        qualified = outcome.qualified_count,
        "deadline sweep finished"
    );
    success(outcome)
}

/// POST /api/admin/topics/:id/convert - Convert a qualified topic to research.
pub async fn convert_to_research(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<ConversionOutcome> {
    let outcome = state.repo.convert_to_research(&id).await?;
    tracing::info!(topic_id = %id, research_id = %outcome.research.id, "topic converted to research");
    success(outcome)
}

/// POST /api/admin/topics/:id/complete - Mark a converted topic completed.
pub async fn complete_topic(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Topic> {
    let topic = state.repo.complete_topic(&id).await?;
    success(topic)
}
