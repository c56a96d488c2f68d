use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for the chat endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChatRequest {
    /// Free-text description of the user's interests
    #[validate(length(max = 2000))]
    pub text: String,
}
