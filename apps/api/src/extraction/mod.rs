//! Resume text extraction: the collaborator that turns an uploaded
//! document into plain text for the text-match scorer.

pub mod upload;

use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;

/// Extracts plain text from a resume document on disk.
///
/// Carried in `AppState` as `Arc<dyn ResumeExtractor>` so tests can swap in
/// a stub without touching handler code. Failures propagate as `Err`; the
/// analysis layer downgrades them to a zero-score result, never to an HTTP
/// error for the batch.
#[async_trait]
pub trait ResumeExtractor: Send + Sync {
    async fn extract_text(&self, path: &Path) -> Result<String>;
}

/// Production extractor backed by `pdf-extract`. Parsing is CPU-bound, so
/// it runs on the blocking pool.
pub struct PdfResumeExtractor;

#[async_trait]
impl ResumeExtractor for PdfResumeExtractor {
    async fn extract_text(&self, path: &Path) -> Result<String> {
        let path = path.to_path_buf();
        tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text(&path)
                .with_context(|| format!("failed to extract text from {}", path.display()))
        })
        .await
        .context("extraction task panicked")?
    }
}
