use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::Value;
use tower::ServiceExt; // for `oneshot`

use super::setup::TestApp;

// ============================================================================
// Action Helpers
// ============================================================================

/// Status and decoded JSON body of a response (Null when the body is empty)
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestApp {
    /// Send a request through the router and decode the response
    pub async fn send(&self, request: Request<Body>) -> ApiResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        ApiResponse { status, body }
    }

    async fn send_json(&self, method: &str, uri: &str, token: Option<&str>, body: Value) -> ApiResponse {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json");
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }
        self.send(builder.body(Body::from(body.to_string())).unwrap())
            .await
    }

    // ============================================================================
    // Convenience Action Methods
    // ============================================================================

    pub async fn login(&self, username: &str, password: &str) -> ApiResponse {
        self.send_json(
            "POST",
            "/api/auth/login",
            None,
            serde_json::json!({ "username": username, "password": password }),
        )
        .await
    }

    /// Log in as the administrator and return the issued token
    pub async fn admin_token(&self) -> String {
        let response = self.login("admin", "admin123").await;
        assert_eq!(response.status, StatusCode::OK);
        response.body["token"].as_str().unwrap().to_string()
    }

    pub async fn submit_message(&self, body: Value) -> ApiResponse {
        self.send_json("POST", "/api/messages", None, body).await
    }

    pub async fn list_projects(&self) -> ApiResponse {
        let request = Request::builder()
            .uri("/api/projects")
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    pub async fn create_project(&self, token: Option<&str>, body: Value) -> ApiResponse {
        self.send_json("POST", "/api/projects", token, body).await
    }

    pub async fn delete_project(&self, token: Option<&str>, id: i64) -> ApiResponse {
        let mut builder = Request::builder()
            .method("DELETE")
            .uri(format!("/api/projects/{}", id));
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }
}
