// Public API - what other modules can use
pub use handlers::{create_project, delete_project, list_projects};
pub use models::{NewProject, Project};

// Internal modules
mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod types;
