use async_trait::async_trait;
use sqlx::{PgPool, Row};
use std::sync::Mutex;
use tracing::{debug, instrument, warn};

use super::models::{NewProject, Project};
use crate::shared::AppError;

/// Trait for project repository operations
#[async_trait]
pub trait ProjectRepository {
    async fn list_projects(&self) -> Result<Vec<Project>, AppError>;
    async fn create_project(&self, project: &NewProject) -> Result<Project, AppError>;

    /// Removes the project if present. Returns whether anything was removed.
    async fn delete_project(&self, project_id: i64) -> Result<bool, AppError>;
}

struct ProjectTable {
    projects: Vec<Project>,
    next_id: i64,
}

/// In-memory implementation of ProjectRepository for development and testing
pub struct InMemoryProjectRepository {
    table: Mutex<ProjectTable>,
}

impl Default for InMemoryProjectRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryProjectRepository {
    /// Creates a new empty in-memory repository
    pub fn new() -> Self {
        Self {
            table: Mutex::new(ProjectTable {
                projects: Vec::new(),
                next_id: 1,
            }),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, ProjectTable>, AppError> {
        self.table.lock().map_err(|_| {
            warn!("Project table lock poisoned");
            AppError::Internal
        })
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    #[instrument(skip(self))]
    async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        debug!("Listing all projects in memory");

        let projects = self.lock()?.projects.clone();

        debug!(project_count = projects.len(), "Projects listed from memory");
        Ok(projects)
    }

    #[instrument(skip(self, project))]
    async fn create_project(&self, project: &NewProject) -> Result<Project, AppError> {
        debug!(title = %project.title, "Creating project in memory");

        let mut table = self.lock()?;
        let id = table.next_id;
        table.next_id += 1;

        let stored = project.clone().into_project(id);
        table.projects.push(stored.clone());

        debug!(project_id = id, "Project created successfully in memory");
        Ok(stored)
    }

    #[instrument(skip(self))]
    async fn delete_project(&self, project_id: i64) -> Result<bool, AppError> {
        debug!(project_id, "Deleting project from memory");

        let mut table = self.lock()?;
        let initial_count = table.projects.len();
        table.projects.retain(|project| project.id != project_id);
        let removed = table.projects.len() < initial_count;

        debug!(project_id, removed, "Project delete finished in memory");
        Ok(removed)
    }
}

/// PostgreSQL implementation of project repository
pub struct PostgresProjectRepository {
    pool: PgPool,
}

impl PostgresProjectRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectRepository for PostgresProjectRepository {
    #[instrument(skip(self))]
    async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        debug!("Listing all projects from database");

        let rows = sqlx::query("SELECT id, title, description, github_url FROM projects ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to list projects from database");
                AppError::DatabaseError(e.to_string())
            })?;

        let projects: Vec<Project> = rows
            .into_iter()
            .map(|row| Project {
                id: row.get("id"),
                title: row.get("title"),
                description: row.get("description"),
                github_url: row.get("github_url"),
            })
            .collect();

        debug!(project_count = projects.len(), "Projects listed from database");
        Ok(projects)
    }

    #[instrument(skip(self, project))]
    async fn create_project(&self, project: &NewProject) -> Result<Project, AppError> {
        debug!(title = %project.title, "Creating project in database");

        let row = sqlx::query(
            "INSERT INTO projects (title, description, github_url) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.github_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, "Failed to create project in database");
            AppError::DatabaseError(e.to_string())
        })?;

        let id: i64 = row.get("id");
        debug!(project_id = id, "Project created successfully in database");

        Ok(project.clone().into_project(id))
    }

    #[instrument(skip(self))]
    async fn delete_project(&self, project_id: i64) -> Result<bool, AppError> {
        debug!(project_id, "Deleting project from database");

        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(project_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                warn!(error = %e, project_id, "Failed to delete project from database");
                AppError::DatabaseError(e.to_string())
            })?;

        let removed = result.rows_affected() > 0;
        debug!(project_id, removed, "Project delete finished in database");
        Ok(removed)
    }
}
