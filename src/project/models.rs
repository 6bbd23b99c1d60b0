use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Database model for projects table
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub github_url: Option<String>,
}

/// A project ready to be persisted; the repository assigns the id
#[derive(Debug, Clone)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub github_url: Option<String>,
}

impl NewProject {
    pub fn into_project(self, id: i64) -> Project {
        Project {
            id,
            title: self.title,
            description: self.description,
            github_url: self.github_url,
        }
    }
}
