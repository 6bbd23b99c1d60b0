//! Test assertion helpers for API responses
#![allow(dead_code)] // Test utilities may not all be used in every test

use axum::http::StatusCode;
use serde_json::Value;

use super::actions::ApiResponse;

// ============================================================================
// Assertion Helpers
// ============================================================================

impl ApiResponse {
    pub fn assert_status(&self, expected: StatusCode) -> &Self {
        assert_eq!(
            self.status, expected,
            "unexpected status, body was {}",
            self.body
        );
        self
    }

    pub fn assert_error_contains(&self, fragment: &str) -> &Self {
        let message = self.body["error"].as_str().unwrap_or_default();
        assert!(
            message.contains(fragment),
            "error {:?} should contain {:?}",
            message,
            fragment
        );
        self
    }

    /// The generated id of a stored message or project
    pub fn id(&self) -> i64 {
        self.body["id"].as_i64().expect("response should carry an id")
    }

    /// Ids of every project in a list response
    pub fn project_ids(&self) -> Vec<i64> {
        self.body
            .as_array()
            .expect("response should be an array")
            .iter()
            .map(|project: &Value| project["id"].as_i64().unwrap())
            .collect()
    }
}
