//! Axum route handlers for the batch resume analysis API.

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::upload::TempUpload;
use crate::extraction::ResumeExtractor;
use crate::scoring::skill::SkillEntry;
use crate::scoring::text_match::{score_resume_text, TextMatchOutcome};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Analysis outcome for one uploaded resume in a batch.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAnalysis {
    pub file_name: String,
    pub ats_score: u32,
    pub matched_skills: Vec<String>,
    pub summary: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Multipart batch: a `jobId` field plus any number of `resumes` files.
/// Files are analyzed concurrently and independently; one unreadable
/// resume reports a zero score without failing the rest of the batch.
pub async fn handle_analyze_batch(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Vec<ResumeAnalysis>>, AppError> {
    let mut job_id: Option<Uuid> = None;
    let mut uploads: Vec<(String, TempUpload)> = Vec::new();

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
            Some("resumes") => {
                let file_name = field.file_name().unwrap_or("resume.pdf").to_string();
                let data = field.bytes().await?;
                let upload = TempUpload::create(&state.config.upload_dir, &data)
                    .map_err(AppError::Internal)?;
                uploads.push((file_name, upload));
            }
            // Unknown fields are ignored; early-return errors above drop
            // any guards collected so far, deleting their files.
            _ => {}
        }
    }

    let job_id = job_id
        .ok_or_else(|| AppError::Validation("A job must be selected for analysis.".to_string()))?;
    if uploads.is_empty() {
        return Err(AppError::Validation(
            "No resume files were uploaded.".to_string(),
        ));
    }

    let job = state
        .jobs
        .get(job_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?;

    info!(
        "analyzing {} resumes against job '{}' ({job_id})",
        uploads.len(),
        job.job_title
    );

    // Fan out one task per file. Each task owns its upload guard, so the
    // temp file is deleted however the task exits. Handles are awaited in
    // upload order to keep the response aligned with the request.
    let mut handles = Vec::with_capacity(uploads.len());
    for (file_name, upload) in uploads {
        let extractor = state.extractor.clone();
        let skills = job.skills.clone();
        handles.push(tokio::spawn(async move {
            analyze_resume_file(extractor.as_ref(), upload, &skills, &file_name).await
        }));
    }

    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        let analysis = handle
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("analysis task failed: {e}")))?;
        results.push(analysis);
    }

    Ok(Json(results))
}

/// Runs one resume through extraction and text matching.
///
/// Consumes the upload guard: whatever happens inside, the temp file is
/// gone by the time this returns. Extraction failures degrade to a zero
/// score with no matches instead of erroring the batch item.
pub async fn analyze_resume_file(
    extractor: &dyn ResumeExtractor,
    upload: TempUpload,
    job_skills: &[SkillEntry],
    file_name: &str,
) -> ResumeAnalysis {
    let extracted = extractor.extract_text(upload.path()).await;
    drop(upload); // the file is read; delete it before reporting

    let (outcome, summary) = match extracted {
        Ok(text) => {
            let outcome = score_resume_text(&text, job_skills);
            let required = job_skills
                .iter()
                .filter(|s| s.normalized_name().is_some())
                .count();
            let summary = format!(
                "Matched {} of {required} required skills.",
                outcome.matched_skill_names.len()
            );
            (outcome, summary)
        }
        Err(e) => {
            warn!("resume analysis failed for {file_name}: {e:#}");
            (
                TextMatchOutcome::zero(),
                "Analysis failed for this resume.".to_string(),
            )
        }
    };

    ResumeAnalysis {
        file_name: file_name.to_string(),
        ats_score: outcome.score,
        matched_skills: outcome.matched_skill_names,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{anyhow, Result};
    use async_trait::async_trait;
    use bytes::Bytes;
    use std::path::Path;

    struct FixedTextExtractor(&'static str);

    #[async_trait]
    impl ResumeExtractor for FixedTextExtractor {
        async fn extract_text(&self, _path: &Path) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct FailingExtractor;

    #[async_trait]
    impl ResumeExtractor for FailingExtractor {
        async fn extract_text(&self, _path: &Path) -> Result<String> {
            Err(anyhow!("corrupt document"))
        }
    }

    fn skills(json: &str) -> Vec<SkillEntry> {
        serde_json::from_str(json).unwrap()
    }

    fn make_upload(dir: &tempfile::TempDir) -> TempUpload {
        TempUpload::create(dir.path(), &Bytes::from_static(b"%PDF-1.4")).unwrap()
    }

    #[tokio::test]
    async fn test_successful_analysis_scores_and_cleans_up() {
        let dir = tempfile::tempdir().unwrap();
        let upload = make_upload(&dir);
        let path = upload.path().to_path_buf();
        let job = skills(r#"[{"name": "Rust", "rating": 5}, {"name": "Cobol", "rating": 1}]"#);

        let extractor = FixedTextExtractor("Senior Rust engineer");
        let analysis = analyze_resume_file(&extractor, upload, &job, "cv.pdf").await;

        assert_eq!(analysis.ats_score, 50);
        assert_eq!(analysis.matched_skills, vec!["rust"]);
        assert_eq!(analysis.summary, "Matched 1 of 2 required skills.");
        assert!(!path.exists(), "temp file must be deleted after analysis");
    }

    #[tokio::test]
    async fn test_failed_extraction_reports_zero_and_cleans_up() {
        let dir = tempfile::tempdir().unwrap();
        let upload = make_upload(&dir);
        let path = upload.path().to_path_buf();
        let job = skills(r#"[{"name": "Rust", "rating": 5}]"#);

        let analysis = analyze_resume_file(&FailingExtractor, upload, &job, "broken.pdf").await;

        assert_eq!(analysis.ats_score, 0);
        assert!(analysis.matched_skills.is_empty());
        assert_eq!(analysis.summary, "Analysis failed for this resume.");
        assert!(!path.exists(), "temp file must be deleted even on failure");
    }

    #[tokio::test]
    async fn test_empty_job_skills_scores_zero_not_100() {
        let dir = tempfile::tempdir().unwrap();
        let upload = make_upload(&dir);

        let extractor = FixedTextExtractor("knows everything");
        let analysis = analyze_resume_file(&extractor, upload, &[], "cv.pdf").await;

        assert_eq!(analysis.ats_score, 0);
        assert!(analysis.matched_skills.is_empty());
    }

    #[tokio::test]
    async fn test_file_name_is_echoed_back() {
        let dir = tempfile::tempdir().unwrap();
        let upload = make_upload(&dir);

        let extractor = FixedTextExtractor("rust");
        let analysis =
            analyze_resume_file(&extractor, upload, &skills(r#"["rust"]"#), "alice.pdf").await;

        assert_eq!(analysis.file_name, "alice.pdf");
        assert_eq!(analysis.ats_score, 100);
    }
}
