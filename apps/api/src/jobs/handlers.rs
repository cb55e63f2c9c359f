//! Axum route handlers for the Jobs API.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job::Job;
use crate::scoring::skill::SkillEntry;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobRequest {
    pub company_name: String,
    pub job_title: String,
    pub experience: String,
    pub skills: Vec<SkillEntry>,
    pub job_description: String,
}

/// POST /api/v1/jobs
pub async fn handle_create_job(
    State(state): State<AppState>,
    Json(req): Json<CreateJobRequest>,
) -> Result<(StatusCode, Json<Job>), AppError> {
    if req.job_title.trim().is_empty() {
        return Err(AppError::Validation("jobTitle cannot be empty".to_string()));
    }
    if req.skills.iter().all(|s| s.normalized_name().is_none()) {
        return Err(AppError::Validation(
            "At least one named skill is required".to_string(),
        ));
    }

    let job = Job {
        id: Uuid::new_v4(),
        company_name: req.company_name,
        job_title: req.job_title,
        experience: req.experience,
        skills: req.skills,
        job_description: req.job_description,
        created_at: Utc::now(),
    };
    state.jobs.insert(job.clone()).await;
    info!("created job '{}' ({})", job.job_title, job.id);

    Ok((StatusCode::CREATED, Json(job)))
}

/// GET /api/v1/jobs
pub async fn handle_list_jobs(State(state): State<AppState>) -> Json<Vec<Job>> {
    Json(state.jobs.list().await)
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Job>, AppError> {
    let job = state
        .jobs
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))?;
    Ok(Json(job))
}
