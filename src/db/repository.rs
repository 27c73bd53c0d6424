//! Database repository for the topic lifecycle workflow.
//!
//! Every multi-step mutation (status change + counter + notification) runs in
//! a single transaction so that notifications never outlive a rolled-back
//! state change and the vote counter always mirrors the vote rows.

use chrono::Utc;
use sqlx::sqlite::SqliteConnection;
use sqlx::{Row, SqlitePool};

use crate::errors::AppError;
use crate::models::{
    AiProcessingStatus, ConversionOutcome, CreateTopicRequest, Notification, Research,
    ResearchStatus, SweepOutcome, Topic, TopicStatus, UnvoteOutcome, Vote, VoteOutcome,
};
use crate::workflow;

const TOPIC_COLUMNS: &str = "id, title, description, industry, country, status, vote_count, \
     vote_threshold, approval_date, deadline, rejection_reason, converted_at, proposer_id, \
     approved_by_id, created_at, updated_at";

/// Database repository for all workflow operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // ==================== TOPIC READS ====================

    /// List topics, optionally filtered by status, newest first.
    pub async fn list_topics(&self, status: Option<TopicStatus>) -> Result<Vec<Topic>, AppError> {
        let rows = match status {
            Some(status) => {
                sqlx::query(&format!(
                    "SELECT {TOPIC_COLUMNS} FROM topics WHERE status = ? ORDER BY created_at DESC"
                ))
                .bind(status.as_str())
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query(&format!(
                    "SELECT {TOPIC_COLUMNS} FROM topics ORDER BY created_at DESC"
                ))
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(rows.iter().map(topic_from_row).collect())
    }

    /// Get a topic by ID.
    pub async fn get_topic(&self, id: &str) -> Result<Option<Topic>, AppError> {
        let mut conn = self.pool.acquire().await?;
        fetch_topic(&mut conn, id).await
    }

    // ==================== SUBMISSION ====================

    /// Create a new PENDING topic owned by the proposer.
    pub async fn create_topic(
        &self,
        request: &CreateTopicRequest,
        proposer_id: &str,
    ) -> Result<Topic, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            r#"INSERT INTO topics (
                id, title, description, industry, country, status, vote_count,
                proposer_id, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, 'PENDING', 0, ?, ?, ?)"#,
        )
        .bind(&id)
        .bind(request.title.trim())
        .bind(request.description.trim())
        .bind(&request.industry)
        .bind(&request.country)
        .bind(proposer_id)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(Topic {
            id,
            title: request.title.trim().to_string(),
            description: request.description.trim().to_string(),
            industry: request.industry.clone(),
            country: request.country.clone(),
            status: TopicStatus::Pending,
            vote_count: 0,
            vote_threshold: None,
            approval_date: None,
            deadline: None,
            rejection_reason: None,
            converted_at: None,
            proposer_id: proposer_id.to_string(),
            approved_by_id: None,
            created_at: now.clone(),
            updated_at: now,
        })
    }

    // ==================== APPROVE / REJECT ====================

    /// Approve a PENDING topic, opening its voting window.
    pub async fn approve_topic(
        &self,
        id: &str,
        vote_threshold: i64,
        admin_id: &str,
    ) -> Result<Topic, AppError> {
        let mut tx = self.pool.begin().await?;

        let topic = fetch_topic(&mut tx, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Topic {} not found", id)))?;

        if !workflow::can_transition(topic.status, TopicStatus::Approved) {
            return Err(AppError::invalid_transition(
                id,
                topic.status,
                TopicStatus::Approved,
            ));
        }

        let now = Utc::now();
        let approval_date = now.to_rfc3339();
        let deadline = workflow::compute_deadline(now).to_rfc3339();

        sqlx::query(
            "UPDATE topics SET status = 'APPROVED', vote_threshold = ?, approval_date = ?, \
             deadline = ?, approved_by_id = ?, updated_at = ? WHERE id = ?",
        )
        .bind(vote_threshold)
        .bind(&approval_date)
        .bind(&deadline)
        .bind(admin_id)
        .bind(&approval_date)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        insert_notification(
            &mut tx,
            &topic.proposer_id,
            id,
            "Topic approved",
            &format!(
                "Your topic \"{}\" is open for community voting. It qualifies at {} votes; voting closes {}.",
                topic.title, vote_threshold, deadline
            ),
        )
        .await?;

        tx.commit().await?;

        Ok(Topic {
            status: TopicStatus::Approved,
            vote_threshold: Some(vote_threshold),
            approval_date: Some(approval_date.clone()),
            deadline: Some(deadline),
            approved_by_id: Some(admin_id.to_string()),
            updated_at: approval_date,
            ..topic
        })
    }

    /// Approve a set of PENDING topics, all-or-nothing.
    ///
    /// Every id is validated before any mutation; a single offending id aborts
    /// the whole batch with the list of failures.
    pub async fn bulk_approve(
        &self,
        topic_ids: &[String],
        vote_threshold: i64,
        admin_id: &str,
    ) -> Result<Vec<Topic>, AppError> {
        let mut tx = self.pool.begin().await?;

        let topics = validate_batch(&mut tx, topic_ids, TopicStatus::Approved, "approval").await?;

        let now = Utc::now();
        let approval_date = now.to_rfc3339();
        let deadline = workflow::compute_deadline(now).to_rfc3339();
        let mut results = Vec::with_capacity(topics.len());

        for topic in topics {
            sqlx::query(
                "UPDATE topics SET status = 'APPROVED', vote_threshold = ?, approval_date = ?, \
                 deadline = ?, approved_by_id = ?, updated_at = ? WHERE id = ?",
            )
            .bind(vote_threshold)
            .bind(&approval_date)
            .bind(&deadline)
            .bind(admin_id)
            .bind(&approval_date)
            .bind(&topic.id)
            .execute(&mut *tx)
            .await?;

            insert_notification(
                &mut tx,
                &topic.proposer_id,
                &topic.id,
                "Topic approved",
                &format!(
                    "Your topic \"{}\" is open for community voting. It qualifies at {} votes; voting closes {}.",
                    topic.title, vote_threshold, deadline
                ),
            )
            .await?;

            results.push(Topic {
                status: TopicStatus::Approved,
                vote_threshold: Some(vote_threshold),
                approval_date: Some(approval_date.clone()),
                deadline: Some(deadline.clone()),
                approved_by_id: Some(admin_id.to_string()),
                updated_at: approval_date.clone(),
                ..topic
            });
        }

        tx.commit().await?;

        Ok(results)
    }

    /// Reject a PENDING topic with a reason.
    pub async fn reject_topic(&self, id: &str, reason: &str) -> Result<Topic, AppError> {
        let mut tx = self.pool.begin().await?;

        let topic = fetch_topic(&mut tx, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Topic {} not found", id)))?;

        if !workflow::can_transition(topic.status, TopicStatus::Rejected) {
            return Err(AppError::invalid_transition(
                id,
                topic.status,
                TopicStatus::Rejected,
            ));
        }

        let now = Utc::now().to_rfc3339();
        let reason = reason.trim();

        sqlx::query(
            "UPDATE topics SET status = 'REJECTED', rejection_reason = ?, updated_at = ? WHERE id = ?",
        )
        .bind(reason)
        .bind(&now)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        insert_notification(
            &mut tx,
            &topic.proposer_id,
            id,
            "Topic rejected",
            &format!("Your topic \"{}\" was rejected: {}", topic.title, reason),
        )
        .await?;

        tx.commit().await?;

        Ok(Topic {
            status: TopicStatus::Rejected,
            rejection_reason: Some(reason.to_string()),
            updated_at: now,
            ..topic
        })
    }

    /// Reject a set of PENDING topics, all-or-nothing.
    pub async fn bulk_reject(
        &self,
        topic_ids: &[String],
        reason: &str,
    ) -> Result<Vec<Topic>, AppError> {
        let mut tx = self.pool.begin().await?;

        let topics = validate_batch(&mut tx, topic_ids, TopicStatus::Rejected, "rejection").await?;

        let now = Utc::now().to_rfc3339();
        let reason = reason.trim();
        let mut results = Vec::with_capacity(topics.len());

        for topic in topics {
            sqlx::query(
                "UPDATE topics SET status = 'REJECTED', rejection_reason = ?, updated_at = ? WHERE id = ?",
            )
            .bind(reason)
            .bind(&now)
            .bind(&topic.id)
            .execute(&mut *tx)
            .await?;

            insert_notification(
                &mut tx,
                &topic.proposer_id,
                &topic.id,
                "Topic rejected",
                &format!("Your topic \"{}\" was rejected: {}", topic.title, reason),
            )
            .await?;

            results.push(Topic {
                status: TopicStatus::Rejected,
                rejection_reason: Some(reason.to_string()),
                updated_at: now.clone(),
                ..topic
            });
        }

        tx.commit().await?;

        Ok(results)
    }

    // ==================== VOTE / UNVOTE ====================

    /// Cast a vote on an APPROVED, non-expired topic.
    ///
    /// Vote row, counter, and the qualification check are one transaction:
    /// concurrent votes on the same topic serialize and the count can never
    /// drift from the row cardinality.
    pub async fn vote(&self, topic_id: &str, user_id: &str) -> Result<VoteOutcome, AppError> {
        let mut tx = self.pool.begin().await?;

        let topic = fetch_topic(&mut tx, topic_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Topic {} not found", topic_id)))?;

        if topic.status != TopicStatus::Approved {
            return Err(AppError::InvalidTransition(format!(
                "Topic {} is not open for voting (status {})",
                topic_id, topic.status
            )));
        }

        let now = Utc::now();
        if workflow::is_expired(topic.deadline.as_deref(), now) {
            return Err(AppError::Expired(format!(
                "Voting on topic {} closed at {}",
                topic_id,
                topic.deadline.as_deref().unwrap_or("unknown")
            )));
        }

        let existing = sqlx::query("SELECT id FROM votes WHERE topic_id = ? AND user_id = ?")
            .bind(topic_id)
            .bind(user_id)
            .fetch_optional(&mut *tx)
            .await?;
        if existing.is_some() {
            return Err(AppError::AlreadyVoted(format!(
                "User {} already voted on topic {}",
                user_id, topic_id
            )));
        }

        let vote_id = uuid::Uuid::new_v4().to_string();
        let now_str = now.to_rfc3339();

        sqlx::query("INSERT INTO votes (id, topic_id, user_id, voted_at) VALUES (?, ?, ?, ?)")
            .bind(&vote_id)
            .bind(topic_id)
            .bind(user_id)
            .bind(&now_str)
            .execute(&mut *tx)
            .await?;

        // Counter is written from row cardinality, not read-modify-write
        let new_count = count_votes(&mut tx, topic_id).await?;

        sqlx::query("UPDATE topics SET vote_count = ?, updated_at = ? WHERE id = ?")
            .bind(new_count)
            .bind(&now_str)
            .bind(topic_id)
            .execute(&mut *tx)
            .await?;

        let mut status = topic.status;
        let mut qualified = false;

        if workflow::qualifies(new_count, topic.vote_threshold) {
            sqlx::query("UPDATE topics SET status = 'QUALIFIED', updated_at = ? WHERE id = ?")
                .bind(&now_str)
                .bind(topic_id)
                .execute(&mut *tx)
                .await?;

            insert_notification(
                &mut tx,
                &topic.proposer_id,
                topic_id,
                "Topic qualified",
                &format!(
                    "Your topic \"{}\" reached {} votes and qualified for research.",
                    topic.title, new_count
                ),
            )
            .await?;

            status = TopicStatus::Qualified;
            qualified = true;
        }

        tx.commit().await?;

        Ok(VoteOutcome {
            vote_count: new_count,
            qualified,
            status,
        })
    }

    /// Get a user's vote on a topic, if any.
    pub async fn get_vote(&self, topic_id: &str, user_id: &str) -> Result<Option<Vote>, AppError> {
        let row = sqlx::query(
            "SELECT id, topic_id, user_id, voted_at FROM votes WHERE topic_id = ? AND user_id = ?",
        )
        .bind(topic_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| Vote {
            id: row.get("id"),
            topic_id: row.get("topic_id"),
            user_id: row.get("user_id"),
            voted_at: row.get("voted_at"),
        }))
    }

    /// Retract a previously cast vote.
    ///
    /// No status or deadline precondition: retraction stays possible after the
    /// window closes, and a QUALIFIED topic is never reverted.
    pub async fn unvote(&self, topic_id: &str, user_id: &str) -> Result<UnvoteOutcome, AppError> {
        let mut tx = self.pool.begin().await?;

        let topic = fetch_topic(&mut tx, topic_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Topic {} not found", topic_id)))?;

        let result = sqlx::query("DELETE FROM votes WHERE topic_id = ? AND user_id = ?")
            .bind(topic_id)
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NoSuchVote(format!(
                "User {} has no vote on topic {}",
                user_id, topic_id
            )));
        }

        let new_count = count_votes(&mut tx, topic_id).await?;
        let now = Utc::now().to_rfc3339();

        sqlx::query("UPDATE topics SET vote_count = ?, updated_at = ? WHERE id = ?")
            .bind(new_count)
            .bind(&now)
            .bind(topic_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(UnvoteOutcome {
            vote_count: new_count,
            status: topic.status,
        })
    }

    // ==================== DEADLINE SWEEP ====================

    /// Resolve all APPROVED topics whose voting window has closed.
    ///
    /// Qualifying topics move to QUALIFIED; shortfall topics stay APPROVED and
    /// are marked so a re-run never notifies the proposer twice.
    pub async fn process_deadlines(&self) -> Result<SweepOutcome, AppError> {
        let mut tx = self.pool.begin().await?;

        let now = Utc::now().to_rfc3339();
        let rows = sqlx::query(&format!(
            "SELECT {TOPIC_COLUMNS} FROM topics WHERE status = 'APPROVED' \
             AND deadline IS NOT NULL AND deadline < ? AND deadline_notified_at IS NULL"
        ))
        .bind(&now)
        .fetch_all(&mut *tx)
        .await?;

        let expired: Vec<Topic> = rows.iter().map(topic_from_row).collect();
        let processed_count = expired.len();
        let mut qualified_count = 0;

        for topic in expired {
            if workflow::qualifies(topic.vote_count, topic.vote_threshold) {
                sqlx::query(
                    "UPDATE topics SET status = 'QUALIFIED', deadline_notified_at = ?, updated_at = ? WHERE id = ?",
                )
                .bind(&now)
                .bind(&now)
                .bind(&topic.id)
                .execute(&mut *tx)
                .await?;

                insert_notification(
                    &mut tx,
                    &topic.proposer_id,
                    &topic.id,
                    "Topic qualified",
                    &format!(
                        "Your topic \"{}\" reached {} votes and qualified for research.",
                        topic.title, topic.vote_count
                    ),
                )
                .await?;

                qualified_count += 1;
            } else {
                sqlx::query(
                    "UPDATE topics SET deadline_notified_at = ?, updated_at = ? WHERE id = ?",
                )
                .bind(&now)
                .bind(&now)
                .bind(&topic.id)
                .execute(&mut *tx)
                .await?;

                insert_notification(
                    &mut tx,
                    &topic.proposer_id,
                    &topic.id,
                    "Voting period ended",
                    &format!(
                        "Voting on your topic \"{}\" closed with {} of {} required votes.",
                        topic.title,
                        topic.vote_count,
                        topic.vote_threshold.unwrap_or(0)
                    ),
                )
                .await?;
            }
        }

        tx.commit().await?;

        Ok(SweepOutcome {
            processed_count,
            qualified_count,
        })
    }

    // ==================== RESEARCH CONVERSION ====================

    /// Convert a QUALIFIED topic into a research project (one-way, 1:1).
    pub async fn convert_to_research(&self, topic_id: &str) -> Result<ConversionOutcome, AppError> {
        let mut tx = self.pool.begin().await?;

        let topic = fetch_topic(&mut tx, topic_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Topic {} not found", topic_id)))?;

        if topic.status == TopicStatus::Converted {
            return Err(AppError::Conflict(format!(
                "Topic {} was already converted to research",
                topic_id
            )));
        }
        if !workflow::can_transition(topic.status, TopicStatus::Converted) {
            return Err(AppError::invalid_transition(
                topic_id,
                topic.status,
                TopicStatus::Converted,
            ));
        }

        let existing = sqlx::query("SELECT id FROM research WHERE topic_id = ?")
            .bind(topic_id)
            .fetch_optional(&mut *tx)
            .await?;
        if existing.is_some() {
            return Err(AppError::Conflict(format!(
                "Research already exists for topic {}",
                topic_id
            )));
        }

        let research_id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            r#"INSERT INTO research (id, topic_id, title, brief, status, is_published, ai_processing_status, created_at)
               VALUES (?, ?, ?, ?, ?, 0, ?, ?)"#,
        )
        .bind(&research_id)
        .bind(topic_id)
        .bind(&topic.title)
        .bind(&topic.description)
        .bind(ResearchStatus::Draft.as_str())
        .bind(AiProcessingStatus::Pending.as_str())
        .bind(&now)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            "UPDATE topics SET status = 'CONVERTED', converted_at = ?, updated_at = ? WHERE id = ?",
        )
        .bind(&now)
        .bind(&now)
        .bind(topic_id)
        .execute(&mut *tx)
        .await?;

        insert_notification(
            &mut tx,
            &topic.proposer_id,
            topic_id,
            "Research started",
            &format!(
                "Your topic \"{}\" is now a funded research project.",
                topic.title
            ),
        )
        .await?;

        tx.commit().await?;

        let research = Research {
            id: research_id,
            topic_id: topic_id.to_string(),
            title: topic.title.clone(),
            brief: topic.description.clone(),
            status: ResearchStatus::Draft,
            is_published: false,
            ai_processing_status: AiProcessingStatus::Pending,
            created_at: now.clone(),
        };
        let topic = Topic {
            status: TopicStatus::Converted,
            converted_at: Some(now.clone()),
            updated_at: now,
            ..topic
        };

        Ok(ConversionOutcome { research, topic })
    }

    /// Get the research record created from a topic, if any.
    pub async fn get_research(&self, topic_id: &str) -> Result<Option<Research>, AppError> {
        let row = sqlx::query(
            "SELECT id, topic_id, title, brief, status, is_published, ai_processing_status, created_at \
             FROM research WHERE topic_id = ?",
        )
        .bind(topic_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(research_from_row))
    }

    /// Mark a CONVERTED topic COMPLETED once downstream work finishes.
    pub async fn complete_topic(&self, id: &str) -> Result<Topic, AppError> {
        let mut tx = self.pool.begin().await?;

        let topic = fetch_topic(&mut tx, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Topic {} not found", id)))?;

        if !workflow::can_transition(topic.status, TopicStatus::Completed) {
            return Err(AppError::invalid_transition(
                id,
                topic.status,
                TopicStatus::Completed,
            ));
        }

        let now = Utc::now().to_rfc3339();
        sqlx::query("UPDATE topics SET status = 'COMPLETED', updated_at = ? WHERE id = ?")
            .bind(&now)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(Topic {
            status: TopicStatus::Completed,
            updated_at: now,
            ..topic
        })
    }

    // ==================== BULK DELETE ====================

    /// Delete a set of topics, all-or-nothing. Votes, notifications, and any
    /// research records go with them via cascade.
    pub async fn bulk_delete(&self, topic_ids: &[String]) -> Result<usize, AppError> {
        let mut tx = self.pool.begin().await?;

        let mut failed_ids = Vec::new();
        for id in topic_ids {
            if fetch_topic(&mut tx, id).await?.is_none() {
                failed_ids.push(id.clone());
            }
        }
        if !failed_ids.is_empty() {
            return Err(AppError::BulkValidation {
                message: format!("{} topic(s) not found; nothing was deleted", failed_ids.len()),
                failed_ids,
            });
        }

        let mut count = 0;
        for id in topic_ids {
            let result = sqlx::query("DELETE FROM topics WHERE id = ?")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            count += result.rows_affected() as usize;
        }

        tx.commit().await?;

        Ok(count)
    }

    // ==================== NOTIFICATIONS ====================

    /// List a user's notifications, newest first.
    pub async fn list_notifications(&self, user_id: &str) -> Result<Vec<Notification>, AppError> {
        let rows = sqlx::query(
            "SELECT id, user_id, topic_id, title, message, created_at FROM notifications \
             WHERE user_id = ? ORDER BY created_at DESC, id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| Notification {
                id: row.get("id"),
                user_id: row.get("user_id"),
                topic_id: row.get("topic_id"),
                title: row.get("title"),
                message: row.get("message"),
                created_at: row.get("created_at"),
            })
            .collect())
    }
}

// Helper functions shared by transactional operations

async fn fetch_topic(conn: &mut SqliteConnection, id: &str) -> Result<Option<Topic>, AppError> {
    let row = sqlx::query(&format!("SELECT {TOPIC_COLUMNS} FROM topics WHERE id = ?"))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

    Ok(row.as_ref().map(topic_from_row))
}

async fn count_votes(conn: &mut SqliteConnection, topic_id: &str) -> Result<i64, AppError> {
    let row = sqlx::query("SELECT COUNT(*) AS n FROM votes WHERE topic_id = ?")
        .bind(topic_id)
        .fetch_one(&mut *conn)
        .await?;
    Ok(row.get("n"))
}

async fn insert_notification(
    conn: &mut SqliteConnection,
    user_id: &str,
    topic_id: &str,
    title: &str,
    message: &str,
) -> Result<(), AppError> {
    let id = uuid::Uuid::new_v4().to_string();
    let now = Utc::now().to_rfc3339();

    sqlx::query(
        "INSERT INTO notifications (id, user_id, topic_id, title, message, created_at) \
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&id)
    .bind(user_id)
    .bind(topic_id)
    .bind(title)
    .bind(message)
    .bind(&now)
    .execute(&mut *conn)
    .await?;

    Ok(())
}

/// Validate every id in a batch before mutating any of them.
///
/// `target` names the transition being attempted; any missing or ineligible id
/// aborts the batch with the full list of offenders.
async fn validate_batch(
    conn: &mut SqliteConnection,
    topic_ids: &[String],
    target: TopicStatus,
    action: &str,
) -> Result<Vec<Topic>, AppError> {
    let mut topics = Vec::with_capacity(topic_ids.len());
    let mut failed_ids = Vec::new();

    for id in topic_ids {
        match fetch_topic(&mut *conn, id).await? {
            Some(topic) if workflow::can_transition(topic.status, target) => topics.push(topic),
            Some(_) | None => failed_ids.push(id.clone()),
        }
    }

    if !failed_ids.is_empty() {
        return Err(AppError::BulkValidation {
            message: format!(
                "{} topic(s) are missing or not eligible for {}; nothing was changed",
                failed_ids.len(),
                action
            ),
            failed_ids,
        });
    }

    Ok(topics)
}

fn research_from_row(row: &sqlx::sqlite::SqliteRow) -> Research {
    let status: String = row.get("status");
    let ai_status: String = row.get("ai_processing_status");
    let is_published: i32 = row.get("is_published");

    Research {
        id: row.get("id"),
        topic_id: row.get("topic_id"),
        title: row.get("title"),
        brief: row.get("brief"),
        status: ResearchStatus::from_str(&status).unwrap_or(ResearchStatus::Draft),
        is_published: is_published != 0,
        ai_processing_status: AiProcessingStatus::from_str(&ai_status)
            .unwrap_or(AiProcessingStatus::Pending),
        created_at: row.get("created_at"),
    }
}

fn topic_from_row(row: &sqlx::sqlite::SqliteRow) -> Topic {
    let status: String = row.get("status");

    Topic {
        id: row.get("id"),
        title: row.get("title"),
        description: row.get("description"),
        industry: row.get("industry"),
        country: row.get("country"),
        status: TopicStatus::from_str(&status).unwrap_or(TopicStatus::Pending),
        vote_count: row.get("vote_count"),
        vote_threshold: row.get("vote_threshold"),
        approval_date: row.get("approval_date"),
        deadline: row.get("deadline"),
        rejection_reason: row.get("rejection_reason"),
        converted_at: row.get("converted_at"),
        proposer_id: row.get("proposer_id"),
        approved_by_id: row.get("approved_by_id"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}
