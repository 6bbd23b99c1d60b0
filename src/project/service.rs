use std::sync::Arc;
use tracing::{info, instrument};

use super::{
    models::{NewProject, Project},
    repository::ProjectRepository,
    types::ProjectCreateRequest,
};
use crate::shared::AppError;

/// Service for handling project catalog business logic
pub struct ProjectService {
    repository: Arc<dyn ProjectRepository + Send + Sync>,
}

impl ProjectService {
    pub fn new(repository: Arc<dyn ProjectRepository + Send + Sync>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        self.repository.list_projects().await
    }

    #[instrument(skip(self, request))]
    pub async fn create_project(&self, request: ProjectCreateRequest) -> Result<Project, AppError> {
        let project = self
            .repository
            .create_project(&NewProject::from(request))
            .await?;

        info!(project_id = project.id, title = %project.title, "Project created");
        Ok(project)
    }

    /// Deletes a project; deleting an unknown id succeeds without effect
    #[instrument(skip(self))]
    pub async fn delete_project(&self, project_id: i64) -> Result<(), AppError> {
        if self.repository.delete_project(project_id).await? {
            info!(project_id, "Project deleted");
        } else {
            info!(project_id, "Project not found, nothing to delete");
        }
        Ok(())
    }
}
