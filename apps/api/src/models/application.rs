use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::scoring::skill::SkillEntry;

/// Lifecycle of an application as HR reviews it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationStatus {
    Pending,
    Accepted,
    Rejected,
}

/// A candidate's application to a job, held in the in-memory store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: Uuid,
    pub job_id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<String>,
    /// Stored file name of the uploaded resume, relative to the upload dir.
    pub resume_file: String,
    /// Self-declared skills. Ratings are recorded but deliberately never
    /// feed into the score.
    pub skills: Vec<SkillEntry>,
    pub status: ApplicationStatus,
    /// Weighted skill-match score computed at application time.
    pub ats_score: u32,
    pub created_at: DateTime<Utc>,
}
