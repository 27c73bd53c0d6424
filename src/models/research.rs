//! Research model created from qualified topics.
//!
//! After conversion the record is handed to the AI extraction pipeline, which
//! eventually publishes it. This backend only creates the row.

use serde::{Deserialize, Serialize};

use super::Topic;

/// Publication status of a research record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResearchStatus {
    Draft,
    Published,
}

impl ResearchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResearchStatus::Draft => "DRAFT",
            ResearchStatus::Published => "PUBLISHED",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "DRAFT" => Some(ResearchStatus::Draft),
            "PUBLISHED" => Some(ResearchStatus::Published),
            _ => None,
        }
    }
}

/// Progress of the downstream AI document-processing pipeline.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AiProcessingStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

impl AiProcessingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AiProcessingStatus::Pending => "PENDING",
            AiProcessingStatus::Processing => "PROCESSING",
            AiProcessingStatus::Completed => "COMPLETED",
            AiProcessingStatus::Failed => "FAILED",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "PENDING" => Some(AiProcessingStatus::Pending),
            "PROCESSING" => Some(AiProcessingStatus::Processing),
            "COMPLETED" => Some(AiProcessingStatus::Completed),
            "FAILED" => Some(AiProcessingStatus::Failed),
            _ => None,
        }
    }
}

/// A funded research project created from a qualified topic. 1:1 with topics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Research {
    pub id: String,
    pub topic_id: String,
    pub title: String,
    pub brief: String,
    pub status: ResearchStatus,
    pub is_published: bool,
    pub ai_processing_status: AiProcessingStatus,
    pub created_at: String,
}

/// Result of converting a topic into a research project.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionOutcome {
    pub research: Research,
    pub topic: Topic,
}
