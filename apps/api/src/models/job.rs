use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::scoring::skill::SkillEntry;

/// A posted job opening, held in the in-memory job store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: Uuid,
    pub company_name: String,
    pub job_title: String,
    /// Free-form experience requirement, e.g. "3-5 years".
    pub experience: String,
    /// Weighted skill requirements. Entries tolerate the legacy shapes.
    pub skills: Vec<SkillEntry>,
    pub job_description: String,
    pub created_at: DateTime<Utc>,
}
