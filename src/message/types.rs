use serde::Deserialize;

/// Request payload for submitting a contact message.
/// Unknown fields such as `id` or `createdAt` are dropped during
/// deserialization; the server assigns both.
#[derive(Debug, Deserialize)]
pub struct MessageCreateRequest {
    pub name: String,
    pub email: String,
    pub content: String,
}
