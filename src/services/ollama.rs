use crate::models::ScoredClub;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when calling the LLM backend
#[derive(Debug, Error)]
pub enum ExplainerError {
    #[error("HTTP request failed: {0}")]
    RequestError(reqwest::Error),

    #[error("request timed out after {0} seconds")]
    Timeout(u64),

    #[error("LLM backend returned error status: {0}")]
    ApiError(String),

    #[error("invalid response format: {0}")]
    InvalidResponse(String),
}

/// Client for an Ollama-style text generation endpoint
///
/// Sends a single best-effort request per chat turn. The timeout is applied
/// at the HTTP client level and failures surface as explicit errors; there is
/// no retry.
pub struct OllamaClient {
    base_url: String,
    model: String,
    timeout_secs: u64,
    client: Client,
}

impl OllamaClient {
    pub fn new(base_url: String, model: String, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            model,
            timeout_secs,
            client,
        }
    }

    /// Ask the model to generate text for a prompt
    ///
    /// POSTs `{model, prompt, stream: false}` to `{base_url}/api/generate`
    /// and extracts the `response` field from the reply.
    pub async fn generate(&self, prompt: &str) -> Result<String, ExplainerError> {
        let url = format!("{}/api/generate", self.base_url.trim_end_matches('/'));

        let payload = serde_json::json!({
            "model": self.model,
            "prompt": prompt,
            "stream": false,
        });

        tracing::debug!("Sending prompt to {} (model: {})", url, self.model);

        let response = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ExplainerError::Timeout(self.timeout_secs)
                } else {
                    ExplainerError::RequestError(e)
                }
            })?;

        if !response.status().is_success() {
            return Err(ExplainerError::ApiError(format!(
                "LLM backend returned {}",
                response.status()
            )));
        }

        let json: Value = response
            .json()
            .await
            .map_err(ExplainerError::RequestError)?;

        let text = json
            .get("response")
            .and_then(|r| r.as_str())
            .ok_or_else(|| ExplainerError::InvalidResponse("missing response field".into()))?;

        Ok(text.trim().to_string())
    }
}

/// Build the explanation prompt for a set of matched clubs
///
/// The prompt pins the model to the matched clubs so it cannot invent club
/// names: it is told exactly which clubs to talk about and nothing else.
pub fn build_prompt(user_text: &str, matches: &[ScoredClub]) -> String {
    let mut club_lines = String::new();
    for scored in matches {
        club_lines.push_str(&format!(
            "- {}: {}\n",
            scored.club.name, scored.club.description
        ));
    }

    format!(
        "A student described their interests as: \"{}\"\n\n\
         These university clubs were selected for them:\n{}\n\
         Write a short, friendly reply (2-3 sentences) explaining why these clubs fit \
         their interests. Mention only the clubs listed above, by their exact names. \
         Do not suggest or invent any other club.",
        user_text, club_lines
    )
}
