//! Public topic endpoints: submission, reads, voting.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use super::{success, ApiResult};
use crate::auth::Identity;
use crate::errors::AppError;
use crate::models::{
    CreateTopicRequest, Research, Topic, TopicStatus, UnvoteOutcome, Vote, VoteOutcome,
};
use crate::AppState;

/// Query parameters for listing topics.
///
/// The status filter is kept as a raw string and parsed by hand so a bad value
/// comes back in the regular error envelope instead of an extractor rejection.
#[derive(Debug, Deserialize)]
pub struct ListTopicsQuery {
    pub status: Option<String>,
}

/// GET /api/topics - List topics, optionally filtered by status.
pub async fn list_topics(
    State(state): State<AppState>,
    Query(query): Query<ListTopicsQuery>,
) -> ApiResult<Vec<Topic>> {
    let status = query
        .status
        .as_deref()
        .map(|s| {
            TopicStatus::from_str(s)
                .ok_or_else(|| AppError::Validation(format!("Unknown status filter: {}", s)))
        })
        .transpose()?;
    let topics = state.repo.list_topics(status).await?;
    success(topics)
}

/// GET /api/topics/:id - Get a single topic.
pub async fn get_topic(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Topic> {
    let topic = state
        .repo
        .get_topic(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Topic {} not found", id)))?;
    success(topic)
}

/// POST /api/topics - Submit a new topic proposal.
pub async fn submit_topic(
    State(state): State<AppState>,
    identity: Identity,
    Json(request): Json<CreateTopicRequest>,
) -> ApiResult<Topic> {
    if request.title.trim().is_empty() {
        return Err(AppError::Validation("Title is required".to_string()));
    }
    if request.description.trim().is_empty() {
        return Err(AppError::Validation("Description is required".to_string()));
    }

    let topic = state.repo.create_topic(&request, &identity.user_id).await?;
    tracing::info!(topic_id = %topic.id, proposer = %identity.user_id, "topic submitted");
    success(topic)
}

/// GET /api/topics/:id/research - The research project created from a topic.
pub async fn get_topic_research(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Research> {
    let research = state
        .repo
        .get_research(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No research exists for topic {}", id)))?;
    success(research)
}

/// GET /api/topics/:id/vote - The calling user's vote on a topic, if any.
pub async fn my_vote(
    State(state): State<AppState>,
    Path(id): Path<String>,
    identity: Identity,
) -> ApiResult<Option<Vote>> {
    if state.repo.get_topic(&id).await?.is_none() {
        return Err(AppError::NotFound(format!("Topic {} not found", id)));
    }
    let vote = state.repo.get_vote(&id, &identity.user_id).await?;
    success(vote)
}

/// POST /api/topics/:id/vote - Cast a vote on a topic.
pub async fn vote(
    State(state): State<AppState>,
    Path(id): Path<String>,
    identity: Identity,
) -> ApiResult<VoteOutcome> {
    let outcome = state.repo.vote(&id, &identity.user_id).await?;
    if outcome.qualified {
        tracing::info!(topic_id = %id, votes = outcome.vote_count, "topic qualified");
    }
    success(outcome)
}

/// DELETE /api/topics/:id/vote - Retract a vote from a topic.
pub async fn unvote(
    State(state): State<AppState>,
    Path(id): Path<String>,
    identity: Identity,
) -> ApiResult<UnvoteOutcome> {
    let outcome = state.repo.unvote(&id, &identity.user_id).await?;
    success(outcome)
}
