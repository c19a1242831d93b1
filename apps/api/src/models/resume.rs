use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One stored resume-result row. JSON field names are camelCase to match
/// the frontend contract.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ResumeResult {
    pub id: i64,
    pub original_content: Option<String>,
    pub modified_content: Option<String>,
    pub modification_description: Option<String>,
    pub created_time: DateTime<Utc>,
    pub updated_time: DateTime<Utc>,
    pub user_id: Option<String>,
    /// 0 = draft, 1 = complete.
    pub status: i32,
    pub resume_classification: Option<String>,
    pub modified_resume_classification: Option<String>,
}

/// Write payload for create and update. The id is never accepted from the
/// caller (the store assigns it on insert; the path supplies it on update),
/// and fields left out of the payload keep their stored values on update.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeResultDraft {
    pub original_content: Option<String>,
    pub modified_content: Option<String>,
    pub modification_description: Option<String>,
    pub user_id: Option<String>,
    pub status: Option<i32>,
    pub resume_classification: Option<String>,
    pub modified_resume_classification: Option<String>,
}

/// One page of scan results, echoing the requested page coordinates so
/// clients can render pagination controls without extra bookkeeping.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumePage {
    pub items: Vec<ResumeResult>,
    pub total: i64,
    pub current: i64,
    pub size: i64,
}

impl ResumePage {
    /// The identically-shaped page returned when a page query fails, so
    /// callers never fail to parse the response body.
    pub fn empty(current: i64, size: i64) -> Self {
        ResumePage {
            items: Vec::new(),
            total: 0,
            current,
            size,
        }
    }
}
