//! Notification feed endpoint.

use axum::extract::State;

use super::{success, ApiResult};
use crate::auth::Identity;
use crate::models::Notification;
use crate::AppState;

/// GET /api/notifications - List the calling user's notifications.
pub async fn list_notifications(
    State(state): State<AppState>,
    identity: Identity,
) -> ApiResult<Vec<Notification>> {
    let notifications = state.repo.list_notifications(&identity.user_id).await?;
    success(notifications)
}
