use std::sync::Arc;

use crate::applications::store::ApplicationStore;
use crate::config::Config;
use crate::extraction::ResumeExtractor;
use crate::jobs::store::JobStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub jobs: JobStore,
    pub applications: ApplicationStore,
    /// Pluggable resume text extractor. Default: `PdfResumeExtractor`.
    /// Tests swap in stubs without touching handler code.
    pub extractor: Arc<dyn ResumeExtractor>,
}
