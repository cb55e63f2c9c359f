pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, patch, post},
    Router,
};

use crate::applications::handlers as application_handlers;
use crate::jobs::handlers as job_handlers;
use crate::scoring::handlers as scoring_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        // Jobs API
        .route(
            "/api/v1/jobs",
            post(job_handlers::handle_create_job).get(job_handlers::handle_list_jobs),
        )
        .route("/api/v1/jobs/:id", get(job_handlers::handle_get_job))
        // Applications API
        .route(
            "/api/v1/applications",
            post(application_handlers::handle_apply)
                .get(application_handlers::handle_list_applications),
        )
        .route(
            "/api/v1/applications/:id/status",
            patch(application_handlers::handle_update_status),
        )
        .route(
            "/api/v1/analytics",
            get(application_handlers::handle_analytics),
        )
        // Batch resume analysis
        .route(
            "/api/v1/analyze",
            post(scoring_handlers::handle_analyze_batch),
        )
        .layer(body_limit)
        .with_state(state)
}
