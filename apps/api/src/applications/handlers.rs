//! Axum route handlers for the Applications API.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use bytes::Bytes;
use chrono::Utc;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::applications::analytics::{compute_analytics, AnalyticsReport};
use crate::errors::AppError;
use crate::extraction::upload::persist_upload;
use crate::models::application::{Application, ApplicationStatus};
use crate::scoring::skill::SkillEntry;
use crate::scoring::weighted::weighted_skill_score;
use crate::state::AppState;

/// POST /api/v1/applications
///
/// Multipart apply: a resume file plus the candidate's details and
/// self-declared skills (a JSON array in the `skills` field). The resume
/// is kept in the upload dir; the weighted score is computed against the
/// job's importance ratings at submission time.
pub async fn handle_apply(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<Application>), AppError> {
    let mut job_id: Option<Uuid> = None;
    let mut full_name: Option<String> = None;
    let mut email: Option<String> = None;
    let mut phone: Option<String> = None;
    let mut cover_letter: Option<String> = None;
    let mut skills: Vec<SkillEntry> = Vec::new();
    let mut resume: Option<(String, Bytes)> = None;

    while let Some(field) = multipart.next_field().await? {
        // The name is copied out first: text()/bytes() consume the field.
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("jobId") => {
                let raw = field.text().await?;
                let id = raw
                    .parse::<Uuid>()
                    .map_err(|_| AppError::Validation(format!("'{raw}' is not a valid job id")))?;
                job_id = Some(id);
            }
            Some("fullName") => full_name = Some(field.text().await?),
            Some("email") => email = Some(field.text().await?),
            Some("phone") => phone = Some(field.text().await?),
            Some("coverLetter") => cover_letter = Some(field.text().await?),
            Some("skills") => {
                let raw = field.text().await?;
                skills = serde_json::from_str(&raw).map_err(|e| {
                    AppError::UnprocessableEntity(format!("skills is not a valid skill list: {e}"))
                })?;
            }
            Some("resume") => {
                let file_name = field.file_name().unwrap_or("resume.pdf").to_string();
                resume = Some((file_name, field.bytes().await?));
            }
            _ => {}
        }
    }

    let job_id =
        job_id.ok_or_else(|| AppError::Validation("jobId is required".to_string()))?;
    let full_name =
        full_name.ok_or_else(|| AppError::Validation("fullName is required".to_string()))?;
    let email = email.ok_or_else(|| AppError::Validation("email is required".to_string()))?;
    let phone = phone.ok_or_else(|| AppError::Validation("phone is required".to_string()))?;
    let (resume_name, resume_bytes) =
        resume.ok_or_else(|| AppError::Validation("Resume is required.".to_string()))?;

    let job = state
        .jobs
        .get(job_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?;

    let resume_file = persist_upload(&state.config.upload_dir, &resume_name, &resume_bytes)
        .map_err(AppError::Internal)?;

    let ats_score = weighted_skill_score(&job.skills, &skills);

    let application = Application {
        id: Uuid::new_v4(),
        job_id,
        full_name,
        email,
        phone,
        cover_letter,
        resume_file,
        skills,
        status: ApplicationStatus::Pending,
        ats_score,
        created_at: Utc::now(),
    };
    state.applications.insert(application.clone()).await;

    info!(
        "application {} scored {ats_score} for job '{}'",
        application.id, job.job_title
    );

    Ok((StatusCode::CREATED, Json(application)))
}

/// GET /api/v1/applications
pub async fn handle_list_applications(State(state): State<AppState>) -> Json<Vec<Application>> {
    Json(state.applications.list().await)
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

/// PATCH /api/v1/applications/:id/status
///
/// Only `Accepted` and `Rejected` are valid; an application cannot be
/// moved back to `Pending`.
pub async fn handle_update_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<Json<Application>, AppError> {
    let status = match req.status.as_str() {
        "Accepted" => ApplicationStatus::Accepted,
        "Rejected" => ApplicationStatus::Rejected,
        other => {
            return Err(AppError::Validation(format!("Invalid status '{other}'")));
        }
    };

    let updated = state
        .applications
        .update_status(id, status)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Application {id} not found")))?;

    Ok(Json(updated))
}

/// GET /api/v1/analytics
pub async fn handle_analytics(State(state): State<AppState>) -> Json<AnalyticsReport> {
    let applications = state.applications.list().await;
    Json(compute_analytics(&applications))
}
