use serde::{Deserialize, Serialize};

/// Club fields exposed in the public chat response
///
/// Only name and description go out; tags and category stay internal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClubSummary {
    pub name: String,
    pub description: String,
}

/// Response for the chat endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
    pub clubs_used: Vec<ClubSummary>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
