//! In-memory application store.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::application::{Application, ApplicationStatus};

#[derive(Clone, Default)]
pub struct ApplicationStore {
    inner: Arc<RwLock<HashMap<Uuid, Application>>>,
}

impl ApplicationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, application: Application) {
        self.inner
            .write()
            .await
            .insert(application.id, application);
    }

    /// All applications, newest first.
    pub async fn list(&self) -> Vec<Application> {
        let mut applications: Vec<Application> =
            self.inner.read().await.values().cloned().collect();
        applications.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        applications
    }

    /// Sets the review status, returning the updated application or `None`
    /// when the id is unknown.
    pub async fn update_status(
        &self,
        id: Uuid,
        status: ApplicationStatus,
    ) -> Option<Application> {
        let mut inner = self.inner.write().await;
        let application = inner.get_mut(&id)?;
        application.status = status;
        Some(application.clone())
    }
}
