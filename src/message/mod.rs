// Public API - what other modules can use
pub use handlers::submit_message;
pub use models::{Message, NewMessage};

// Internal modules
mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod types;
