//! Upload-file lifecycle: unique files in the upload directory and a guard
//! that guarantees deletion of analysis temp files on every exit path.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bytes::Bytes;
use tracing::{debug, warn};
use uuid::Uuid;

/// Creates the upload directory if it does not exist yet.
pub fn ensure_upload_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create upload directory {}", dir.display()))
}

/// Owns an uploaded file's path for the duration of one analysis.
///
/// Dropping the guard deletes the file, so the delete runs exactly once on
/// every exit path: success, extraction failure, or an unwinding panic.
#[derive(Debug)]
pub struct TempUpload {
    path: PathBuf,
}

impl TempUpload {
    /// Writes `data` to a uniquely named file inside `dir` and wraps it.
    pub fn create(dir: &Path, data: &Bytes) -> Result<Self> {
        let mut file = tempfile::Builder::new()
            .prefix("resume-")
            .suffix(".pdf")
            .tempfile_in(dir)
            .with_context(|| format!("failed to create temp file in {}", dir.display()))?;
        file.write_all(data)
            .context("failed to write uploaded resume")?;
        // Deletion responsibility moves from NamedTempFile to this guard.
        let (_, path) = file
            .keep()
            .map_err(|e| anyhow::anyhow!("failed to persist uploaded resume: {e}"))?;
        debug!("stored uploaded resume at {}", path.display());
        Ok(TempUpload { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempUpload {
    fn drop(&mut self) {
        match fs::remove_file(&self.path) {
            Ok(()) => debug!("cleaned up temp resume {}", self.path.display()),
            Err(e) => warn!("failed to remove temp resume {}: {e}", self.path.display()),
        }
    }
}

/// Stores an application resume permanently under a fresh name, returning
/// the stored file name. Application resumes are kept; only batch-analysis
/// uploads go through [`TempUpload`].
pub fn persist_upload(dir: &Path, original_name: &str, data: &Bytes) -> Result<String> {
    let ext = Path::new(original_name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("pdf");
    let file_name = format!("{}.{ext}", Uuid::new_v4());
    let path = dir.join(&file_name);
    fs::write(&path, data).with_context(|| format!("failed to store resume {}", path.display()))?;
    debug!("persisted application resume at {}", path.display());
    Ok(file_name)
}
